//! The reference applications shipped with bootforge.
//!
//! Entities omit the `id` property and the `createdAt`/`updatedAt` audit
//! pair; the renderer adds those to every data model. Enumerated fields do
//! not carry `@Enumerated`, it is derived from the enumeration table.

use bootforge_core::domain::{
    ApiModel, Cardinality, EntityModel, EnumModel, Field, Purpose, Relationship, TemplateEntry,
};

const UNIQUE_REQUIRED: &str = "@Column(unique = true, nullable = false)";
const REQUIRED: &str = "@Column(nullable = false)";
const MONEY: &str = "@Column(precision = 10, scale = 2)";
const RATING: &str = "@Column(columnDefinition = \"DECIMAL(3,2)\")";
const DEFAULT_TRUE: &str = "@Column(columnDefinition = \"boolean default true\")";
const DEFAULT_FALSE: &str = "@Column(columnDefinition = \"boolean default false\")";
const BIGINT_ZERO: &str = "@Column(columnDefinition = \"bigint default 0\")";
const INT_ZERO: &str = "@Column(columnDefinition = \"int default 0\")";

/// Every built-in template, in catalog order.
pub fn all() -> Vec<TemplateEntry> {
    vec![
        freelancer(),
        instagram(),
        youtube(),
        github(),
        facebook(),
        udemy(),
        uber(),
        zerodha(),
        canva(),
        zomato(),
    ]
}

// ── Builders ──────────────────────────────────────────────────────────────────

fn plain(name: &str, ty: &str) -> Field {
    Field::new(name, ty)
}

fn column(name: &str, ty: &str, annotation: &str) -> Field {
    Field::new(name, ty).with_annotation(annotation)
}

fn entity(name: &str, fields: Vec<Field>, relationships: Vec<Relationship>) -> EntityModel {
    EntityModel {
        name: name.to_string(),
        fields,
        relationships,
    }
}

fn many_to_one(target: &str, name: &str) -> Relationship {
    Relationship::new(target, Cardinality::ManyToOne).named(name)
}

fn one_to_many(target: &str, mapped_by: &str) -> Relationship {
    Relationship::new(target, Cardinality::OneToMany).mapped_by(mapped_by)
}

fn api(name: &str, entity: &str, description: &str, endpoints: &[&str]) -> ApiModel {
    ApiModel::new(name, Purpose::from_api_name(name), entity)
        .with_description(description)
        .with_endpoints(endpoints.iter().copied())
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    entities: Vec<EntityModel>,
    enumerations: Vec<EnumModel>,
    apis: Vec<ApiModel>,
) -> TemplateEntry {
    TemplateEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        entities,
        enumerations,
        apis,
    }
}

fn user_management(endpoints: &[&str]) -> ApiModel {
    api(
        "User Management",
        "User",
        "Handle user registration, authentication, and profile management",
        endpoints,
    )
}

// ── Freelancer ────────────────────────────────────────────────────────────────

fn freelancer() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("password", "String", REQUIRED),
            plain("firstName", "String"),
            plain("lastName", "String"),
            plain("profileImage", "String"),
            column("bio", "String", "@Column(length = 1000)"),
            plain("hourlyRate", "BigDecimal"),
            column("rating", "Double", RATING),
            column("totalEarnings", "BigDecimal", MONEY),
            plain("userType", "UserType"),
            column(
                "isActive",
                "Boolean",
                "@Column(nullable = false, columnDefinition = \"boolean default true\")",
            ),
        ],
        vec![
            one_to_many("Project", "client"),
            one_to_many("Bid", "freelancer"),
            one_to_many("Review", "reviewer"),
            Relationship::new("Skill", Cardinality::ManyToMany).join_table("user_skills"),
        ],
    );

    let project = entity(
        "Project",
        vec![
            column("title", "String", REQUIRED),
            column("description", "String", "@Column(length = 5000, nullable = false)"),
            column("budget", "BigDecimal", MONEY),
            plain("deadline", "LocalDate"),
            plain("status", "ProjectStatus"),
            column("isRemote", "Boolean", DEFAULT_TRUE),
            plain("experienceLevel", "ExperienceLevel"),
        ],
        vec![
            many_to_one("User", "client"),
            many_to_one("User", "assignedFreelancer"),
            many_to_one("Category", "category"),
            one_to_many("Bid", "project"),
            Relationship::new("Skill", Cardinality::ManyToMany)
                .named("requiredSkills")
                .join_table("project_skills"),
        ],
    );

    let bid = entity(
        "Bid",
        vec![
            column("amount", "BigDecimal", "@Column(precision = 10, scale = 2, nullable = false)"),
            column("proposal", "String", "@Column(length = 2000, nullable = false)"),
            column("deliveryTime", "Integer", REQUIRED),
            plain("status", "BidStatus"),
        ],
        vec![many_to_one("Project", "project"), many_to_one("User", "freelancer")],
    );

    let category = entity(
        "Category",
        vec![
            column("name", "String", UNIQUE_REQUIRED),
            plain("description", "String"),
            column("isActive", "Boolean", DEFAULT_TRUE),
        ],
        vec![one_to_many("Project", "category")],
    );

    let skill = entity(
        "Skill",
        vec![column("name", "String", UNIQUE_REQUIRED), plain("description", "String")],
        vec![
            Relationship::new("User", Cardinality::ManyToMany).mapped_by("skills"),
            Relationship::new("Project", Cardinality::ManyToMany).mapped_by("requiredSkills"),
        ],
    );

    let payment = entity(
        "Payment",
        vec![
            column("amount", "BigDecimal", "@Column(precision = 10, scale = 2, nullable = false)"),
            plain("paymentMethod", "PaymentMethod"),
            column("transactionId", "String", "@Column(unique = true)"),
            plain("status", "PaymentStatus"),
            plain("paidAt", "LocalDateTime"),
        ],
        vec![
            many_to_one("Project", "project"),
            many_to_one("User", "payer"),
            many_to_one("User", "recipient"),
        ],
    );

    let review = entity(
        "Review",
        vec![
            column("rating", "Integer", REQUIRED)
                .with_annotation("@Min(1)")
                .with_annotation("@Max(5)"),
            column("comment", "String", "@Column(length = 1000)"),
        ],
        vec![
            many_to_one("Project", "project"),
            many_to_one("User", "reviewer"),
            many_to_one("User", "reviewee"),
        ],
    );

    let message = entity(
        "Message",
        vec![
            column("content", "String", "@Column(length = 2000, nullable = false)"),
            column("isRead", "Boolean", DEFAULT_FALSE),
            column("sentAt", "LocalDateTime", "@CreationTimestamp"),
        ],
        vec![
            many_to_one("User", "sender"),
            many_to_one("User", "recipient"),
            many_to_one("Project", "project"),
        ],
    );

    template(
        "freelancer",
        "Freelancer Clone",
        "Complete freelancing platform with project management, bidding, and payment systems",
        vec![user, project, bid, category, skill, payment, review, message],
        vec![
            EnumModel::new("UserType", ["CLIENT", "FREELANCER", "ADMIN"]),
            EnumModel::new(
                "ProjectStatus",
                ["DRAFT", "OPEN", "IN_PROGRESS", "COMPLETED", "CANCELLED"],
            ),
            EnumModel::new("ExperienceLevel", ["BEGINNER", "INTERMEDIATE", "EXPERT"]),
            EnumModel::new("BidStatus", ["PENDING", "ACCEPTED", "REJECTED", "WITHDRAWN"]),
            EnumModel::new(
                "PaymentMethod",
                ["CREDIT_CARD", "PAYPAL", "BANK_TRANSFER", "WALLET"],
            ),
            EnumModel::new("PaymentStatus", ["PENDING", "COMPLETED", "FAILED", "REFUNDED"]),
        ],
        vec![
            user_management(&[
                "POST /api/auth/register",
                "POST /api/auth/login",
                "GET /api/users/profile",
                "PUT /api/users/profile",
                "GET /api/users/{id}",
                "PUT /api/users/{id}/skills",
                "GET /api/users/search",
            ]),
            api(
                "Project Management",
                "Project",
                "Manage project creation, updates, and lifecycle",
                &[
                    "POST /api/projects",
                    "GET /api/projects",
                    "GET /api/projects/{id}",
                    "PUT /api/projects/{id}",
                    "DELETE /api/projects/{id}",
                    "GET /api/projects/search",
                    "PUT /api/projects/{id}/assign",
                ],
            ),
            api(
                "Bidding System",
                "Bid",
                "Handle bid creation, management, and selection",
                &[
                    "POST /api/projects/{projectId}/bids",
                    "GET /api/projects/{projectId}/bids",
                    "GET /api/bids/{id}",
                    "PUT /api/bids/{id}",
                    "DELETE /api/bids/{id}",
                    "PUT /api/bids/{id}/accept",
                ],
            ),
            api(
                "Payment Processing",
                "Payment",
                "Handle payments, transactions, and financial operations",
                &[
                    "POST /api/payments",
                    "GET /api/payments/{id}",
                    "GET /api/users/{userId}/payments",
                    "PUT /api/payments/{id}/status",
                    "POST /api/payments/{id}/refund",
                ],
            ),
            api(
                "Review System",
                "Review",
                "Manage reviews and ratings between users",
                &[
                    "POST /api/projects/{projectId}/reviews",
                    "GET /api/users/{userId}/reviews",
                    "GET /api/reviews/{id}",
                    "PUT /api/reviews/{id}",
                    "DELETE /api/reviews/{id}",
                ],
            ),
            api(
                "Messaging System",
                "Message",
                "Handle communication between clients and freelancers",
                &[
                    "POST /api/messages",
                    "GET /api/messages/conversations",
                    "GET /api/messages/conversations/{userId}",
                    "PUT /api/messages/{id}/read",
                    "GET /api/messages/unread-count",
                ],
            ),
        ],
    )
}

// ── Instagram ─────────────────────────────────────────────────────────────────

fn instagram() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("password", "String", REQUIRED),
            plain("fullName", "String"),
            column("bio", "String", "@Column(length = 500)"),
            plain("profilePicture", "String"),
            plain("website", "String"),
            column("isPrivate", "Boolean", DEFAULT_FALSE),
            column("isVerified", "Boolean", DEFAULT_FALSE),
            column("followerCount", "Long", BIGINT_ZERO),
            column("followingCount", "Long", BIGINT_ZERO),
            column("postCount", "Long", BIGINT_ZERO),
        ],
        vec![
            one_to_many("Post", "user"),
            one_to_many("Story", "user"),
            one_to_many("Follow", "follower"),
            one_to_many("Follow", "following"),
        ],
    );

    let post = entity(
        "Post",
        vec![
            column("caption", "String", "@Column(length = 2200)"),
            plain("location", "String"),
            column("likeCount", "Long", BIGINT_ZERO),
            column("commentCount", "Long", BIGINT_ZERO),
            column("isArchived", "Boolean", DEFAULT_FALSE),
            column("commentsDisabled", "Boolean", DEFAULT_FALSE),
        ],
        vec![
            many_to_one("User", "user"),
            one_to_many("PostMedia", "post"),
            one_to_many("Like", "post"),
            one_to_many("Comment", "post"),
        ],
    );

    let media = entity(
        "PostMedia",
        vec![
            column("mediaUrl", "String", REQUIRED),
            plain("mediaType", "MediaType"),
            column("orderIndex", "Integer", REQUIRED),
        ],
        vec![many_to_one("Post", "post")],
    );

    let story = entity(
        "Story",
        vec![
            column("mediaUrl", "String", REQUIRED),
            plain("mediaType", "MediaType"),
            column("viewCount", "Long", BIGINT_ZERO),
            column("expiresAt", "LocalDateTime", REQUIRED),
        ],
        vec![many_to_one("User", "user")],
    );

    let follow = entity(
        "Follow",
        Vec::new(),
        vec![many_to_one("User", "follower"), many_to_one("User", "following")],
    );

    let like = entity(
        "Like",
        Vec::new(),
        vec![many_to_one("User", "user"), many_to_one("Post", "post")],
    );

    let comment = entity(
        "Comment",
        vec![
            column("text", "String", "@Column(length = 2200, nullable = false)"),
            column("likeCount", "Long", BIGINT_ZERO),
        ],
        vec![
            many_to_one("User", "user"),
            many_to_one("Post", "post"),
            many_to_one("Comment", "parentComment"),
            one_to_many("Comment", "parentComment").named("replies"),
        ],
    );

    let direct_message = entity(
        "DirectMessage",
        vec![
            column("content", "String", "@Column(length = 1000)"),
            plain("mediaUrl", "String"),
            plain("messageType", "MessageType"),
            column("isRead", "Boolean", DEFAULT_FALSE),
            column("sentAt", "LocalDateTime", "@CreationTimestamp"),
        ],
        vec![many_to_one("User", "sender"), many_to_one("User", "recipient")],
    );

    template(
        "instagram",
        "Instagram Clone",
        "Photo sharing app with stories, followers, and media management",
        vec![user, post, media, story, follow, like, comment, direct_message],
        vec![
            EnumModel::new("MediaType", ["IMAGE", "VIDEO"]),
            EnumModel::new(
                "MessageType",
                ["TEXT", "IMAGE", "VIDEO", "POST_SHARE", "STORY_SHARE"],
            ),
        ],
        vec![
            user_management(&[
                "POST /api/auth/register",
                "POST /api/auth/login",
                "GET /api/users/profile",
                "PUT /api/users/profile",
                "GET /api/users/{username}",
                "GET /api/users/search",
            ]),
            api(
                "Post Management",
                "Post",
                "Handle post creation, updates, and feed generation",
                &[
                    "POST /api/posts",
                    "GET /api/posts/feed",
                    "GET /api/posts/{id}",
                    "PUT /api/posts/{id}",
                    "DELETE /api/posts/{id}",
                    "GET /api/users/{userId}/posts",
                ],
            ),
            api(
                "Social Interactions",
                "Like",
                "Handle likes, comments, and social engagement",
                &[
                    "POST /api/posts/{postId}/like",
                    "DELETE /api/posts/{postId}/like",
                    "POST /api/posts/{postId}/comments",
                    "GET /api/posts/{postId}/comments",
                    "PUT /api/comments/{id}",
                    "DELETE /api/comments/{id}",
                ],
            ),
            api(
                "Follow System",
                "Follow",
                "Manage following relationships between users",
                &[
                    "POST /api/users/{userId}/follow",
                    "DELETE /api/users/{userId}/follow",
                    "GET /api/users/{userId}/followers",
                    "GET /api/users/{userId}/following",
                ],
            ),
            api(
                "Story Management",
                "Story",
                "Handle story creation, viewing, and expiration",
                &[
                    "POST /api/stories",
                    "GET /api/stories/feed",
                    "GET /api/stories/{id}/views",
                    "POST /api/stories/{id}/view",
                    "DELETE /api/stories/{id}",
                ],
            ),
            api(
                "Direct Messaging",
                "DirectMessage",
                "Handle private messaging between users",
                &[
                    "POST /api/messages",
                    "GET /api/messages/conversations",
                    "GET /api/messages/conversations/{userId}",
                    "PUT /api/messages/{id}/read",
                ],
            ),
        ],
    )
}

// ── YouTube ───────────────────────────────────────────────────────────────────

fn youtube() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            plain("channelName", "String"),
            column("subscriberCount", "Long", BIGINT_ZERO),
        ],
        vec![one_to_many("Video", "creator")],
    );

    let video = entity(
        "Video",
        vec![
            column("title", "String", REQUIRED),
            column("description", "String", "@Column(length = 5000)"),
            column("videoUrl", "String", REQUIRED),
            plain("thumbnailUrl", "String"),
            plain("duration", "Integer"),
            column("viewCount", "Long", BIGINT_ZERO),
            column("likeCount", "Long", BIGINT_ZERO),
            column("dislikeCount", "Long", BIGINT_ZERO),
            column("isPublic", "Boolean", DEFAULT_TRUE),
        ],
        vec![many_to_one("User", "creator")],
    );

    template(
        "youtube",
        "YouTube Clone",
        "Video sharing platform with upload, streaming, comments, and subscription features",
        vec![user, video],
        Vec::new(),
        vec![api(
            "Video Management",
            "Video",
            "Handle video upload, streaming, and management",
            &[
                "POST /api/videos/upload",
                "GET /api/videos",
                "GET /api/videos/{id}",
                "PUT /api/videos/{id}",
                "DELETE /api/videos/{id}",
                "POST /api/videos/{id}/view",
            ],
        )],
    )
}

// ── GitHub ────────────────────────────────────────────────────────────────────

fn github() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            plain("fullName", "String"),
            column("bio", "String", "@Column(length = 500)"),
            plain("avatarUrl", "String"),
            plain("location", "String"),
            plain("website", "String"),
            column("publicRepos", "Integer", INT_ZERO),
            column("followers", "Integer", INT_ZERO),
            column("following", "Integer", INT_ZERO),
        ],
        vec![
            one_to_many("Repository", "owner"),
            one_to_many("Issue", "author"),
            one_to_many("PullRequest", "author"),
        ],
    );

    let repository = entity(
        "Repository",
        vec![
            column("name", "String", REQUIRED),
            column("description", "String", "@Column(length = 1000)"),
            column("isPrivate", "Boolean", DEFAULT_FALSE),
            plain("language", "String"),
            column("stars", "Integer", INT_ZERO),
            column("forks", "Integer", INT_ZERO),
            column("watchers", "Integer", INT_ZERO),
            column(
                "defaultBranch",
                "String",
                "@Column(columnDefinition = \"varchar(255) default 'main'\")",
            ),
        ],
        vec![
            many_to_one("User", "owner"),
            one_to_many("Issue", "repository"),
            one_to_many("PullRequest", "repository"),
        ],
    );

    let issue = entity(
        "Issue",
        vec![
            column("title", "String", REQUIRED),
            column("body", "String", "@Column(length = 5000)"),
            plain("state", "IssueState"),
            plain("labels", "String"),
        ],
        vec![
            many_to_one("Repository", "repository"),
            many_to_one("User", "author"),
            many_to_one("User", "assignee"),
        ],
    );

    let pull_request = entity(
        "PullRequest",
        vec![
            column("title", "String", REQUIRED),
            column("body", "String", "@Column(length = 5000)"),
            plain("state", "PullRequestState"),
            column("sourceBranch", "String", REQUIRED),
            column("targetBranch", "String", REQUIRED),
        ],
        vec![many_to_one("Repository", "repository"), many_to_one("User", "author")],
    );

    template(
        "github",
        "GitHub Clone",
        "Code repository management with version control, issues, and collaboration features",
        vec![user, repository, issue, pull_request],
        vec![
            EnumModel::new("IssueState", ["OPEN", "CLOSED"]),
            EnumModel::new("PullRequestState", ["OPEN", "CLOSED", "MERGED"]),
        ],
        vec![
            user_management(&[
                "POST /api/auth/register",
                "POST /api/auth/login",
                "GET /api/users/{username}",
                "PUT /api/users/profile",
                "GET /api/users/{username}/repos",
            ]),
            api(
                "Repository Management",
                "Repository",
                "Handle repository creation, updates, and management",
                &[
                    "POST /api/repositories",
                    "GET /api/repositories",
                    "GET /api/repositories/{id}",
                    "PUT /api/repositories/{id}",
                    "DELETE /api/repositories/{id}",
                    "POST /api/repositories/{id}/star",
                    "POST /api/repositories/{id}/fork",
                ],
            ),
            api(
                "Issue Management",
                "Issue",
                "Handle issue creation, tracking, and management",
                &[
                    "POST /api/repositories/{repoId}/issues",
                    "GET /api/repositories/{repoId}/issues",
                    "GET /api/issues/{id}",
                    "PUT /api/issues/{id}",
                    "PUT /api/issues/{id}/state",
                ],
            ),
            api(
                "Pull Request Management",
                "PullRequest",
                "Handle pull request creation, review, and merging",
                &[
                    "POST /api/repositories/{repoId}/pulls",
                    "GET /api/repositories/{repoId}/pulls",
                    "GET /api/pulls/{id}",
                    "PUT /api/pulls/{id}",
                    "POST /api/pulls/{id}/merge",
                ],
            ),
        ],
    )
}

// ── Facebook ──────────────────────────────────────────────────────────────────

fn facebook() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("firstName", "String", REQUIRED),
            column("lastName", "String", REQUIRED),
            plain("profilePicture", "String"),
            plain("coverPhoto", "String"),
            column("bio", "String", "@Column(length = 500)"),
            plain("dateOfBirth", "LocalDate"),
            plain("location", "String"),
            plain("relationship", "String"),
        ],
        vec![
            one_to_many("Post", "author"),
            one_to_many("Friendship", "requester"),
            one_to_many("Friendship", "addressee"),
        ],
    );

    let post = entity(
        "Post",
        vec![
            column("content", "String", "@Column(length = 5000)"),
            plain("imageUrl", "String"),
            plain("privacy", "PostPrivacy"),
            column("likeCount", "Integer", INT_ZERO),
            column("commentCount", "Integer", INT_ZERO),
            column("shareCount", "Integer", INT_ZERO),
        ],
        vec![many_to_one("User", "author")],
    );

    let friendship = entity(
        "Friendship",
        vec![plain("status", "FriendshipStatus")],
        vec![many_to_one("User", "requester"), many_to_one("User", "addressee")],
    );

    template(
        "facebook",
        "Facebook Clone",
        "Social media platform with posts, friends, messaging, and news feed",
        vec![user, post, friendship],
        vec![
            EnumModel::new("PostPrivacy", ["PUBLIC", "FRIENDS", "PRIVATE"]),
            EnumModel::new("FriendshipStatus", ["PENDING", "ACCEPTED", "BLOCKED"]),
        ],
        vec![
            user_management(&[
                "POST /api/auth/register",
                "POST /api/auth/login",
                "GET /api/users/profile",
                "PUT /api/users/profile",
                "GET /api/users/{id}",
            ]),
            api(
                "Post Management",
                "Post",
                "Handle post creation, updates, and news feed",
                &[
                    "POST /api/posts",
                    "GET /api/posts/feed",
                    "GET /api/posts/{id}",
                    "PUT /api/posts/{id}",
                    "DELETE /api/posts/{id}",
                    "POST /api/posts/{id}/like",
                ],
            ),
            api(
                "Friend Management",
                "Friendship",
                "Handle friend requests and relationships",
                &[
                    "POST /api/friends/request",
                    "PUT /api/friends/{id}/accept",
                    "DELETE /api/friends/{id}",
                    "GET /api/friends",
                    "GET /api/friends/requests",
                ],
            ),
        ],
    )
}

// ── Udemy ─────────────────────────────────────────────────────────────────────

fn udemy() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("fullName", "String", REQUIRED),
            plain("userType", "UserType"),
        ],
        vec![one_to_many("Course", "instructor")],
    );

    let course = entity(
        "Course",
        vec![
            column("title", "String", REQUIRED),
            column("description", "String", "@Column(length = 2000)"),
            column("price", "BigDecimal", MONEY),
            plain("level", "CourseLevel"),
        ],
        vec![many_to_one("User", "instructor")],
    );

    template(
        "udemy",
        "Udemy Clone",
        "Online learning platform with courses, videos, quizzes, and certifications",
        vec![user, course],
        vec![
            EnumModel::new("UserType", ["STUDENT", "INSTRUCTOR", "ADMIN"]),
            EnumModel::new("CourseLevel", ["BEGINNER", "INTERMEDIATE", "ADVANCED"]),
        ],
        vec![api(
            "Course Management",
            "Course",
            "Handle course creation, updates, and enrollment",
            &[
                "POST /api/courses",
                "GET /api/courses",
                "GET /api/courses/{id}",
                "PUT /api/courses/{id}",
                "POST /api/courses/{id}/enroll",
            ],
        )],
    )
}

// ── Uber ──────────────────────────────────────────────────────────────────────

fn uber() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("phone", "String", UNIQUE_REQUIRED),
            plain("userType", "UserType"),
        ],
        vec![one_to_many("Ride", "passenger"), one_to_many("Ride", "driver")],
    );

    let ride = entity(
        "Ride",
        vec![
            column("pickupLocation", "String", REQUIRED),
            column("dropoffLocation", "String", REQUIRED),
            column("fare", "BigDecimal", MONEY),
            plain("status", "RideStatus"),
        ],
        vec![many_to_one("User", "passenger"), many_to_one("User", "driver")],
    );

    template(
        "uber",
        "Uber Clone",
        "Ride-sharing app with booking, tracking, payments, and driver management",
        vec![user, ride],
        vec![
            EnumModel::new("UserType", ["PASSENGER", "DRIVER", "ADMIN"]),
            EnumModel::new(
                "RideStatus",
                ["REQUESTED", "ACCEPTED", "IN_PROGRESS", "COMPLETED", "CANCELLED"],
            ),
        ],
        vec![api(
            "Ride Management",
            "Ride",
            "Handle ride booking, tracking, and completion",
            &[
                "POST /api/rides",
                "GET /api/rides/{id}",
                "PUT /api/rides/{id}/accept",
                "PUT /api/rides/{id}/complete",
                "GET /api/rides/history",
            ],
        )],
    )
}

// ── Zerodha ───────────────────────────────────────────────────────────────────

fn zerodha() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("panNumber", "String", "@Column(unique = true)"),
            column("accountBalance", "BigDecimal", "@Column(precision = 15, scale = 2)"),
        ],
        Vec::new(),
    );

    let stock = entity(
        "Stock",
        vec![
            column("symbol", "String", UNIQUE_REQUIRED),
            column("companyName", "String", REQUIRED),
            column("currentPrice", "BigDecimal", MONEY),
            plain("sector", "String"),
        ],
        Vec::new(),
    );

    template(
        "zerodha",
        "Zerodha Clone",
        "Stock trading platform with portfolio management, market data, and trading features",
        vec![user, stock],
        Vec::new(),
        vec![api(
            "Trading Management",
            "Stock",
            "Handle stock trading and portfolio management",
            &[
                "POST /api/trades",
                "GET /api/trades",
                "GET /api/portfolio",
                "GET /api/stocks",
                "GET /api/stocks/{symbol}",
            ],
        )],
    )
}

// ── Canva ─────────────────────────────────────────────────────────────────────

fn canva() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            plain("subscriptionType", "SubscriptionType"),
        ],
        vec![one_to_many("Design", "creator")],
    );

    let design = entity(
        "Design",
        vec![
            column("title", "String", REQUIRED),
            column("designData", "String", "@Column(length = 10000)"),
            plain("thumbnail", "String"),
            column("isPublic", "Boolean", DEFAULT_FALSE),
        ],
        vec![many_to_one("User", "creator")],
    );

    template(
        "canva",
        "Canva Clone",
        "Design platform with templates, image editing, and collaboration tools",
        vec![user, design],
        vec![EnumModel::new("SubscriptionType", ["FREE", "PRO", "TEAM"])],
        vec![api(
            "Design Management",
            "Design",
            "Handle design creation, editing, and sharing",
            &[
                "POST /api/designs",
                "GET /api/designs",
                "GET /api/designs/{id}",
                "PUT /api/designs/{id}",
                "DELETE /api/designs/{id}",
            ],
        )],
    )
}

// ── Zomato ────────────────────────────────────────────────────────────────────

fn zomato() -> TemplateEntry {
    let user = entity(
        "User",
        vec![
            column("username", "String", UNIQUE_REQUIRED),
            column("email", "String", UNIQUE_REQUIRED),
            column("phone", "String", UNIQUE_REQUIRED),
            column("address", "String", "@Column(length = 500)"),
        ],
        vec![one_to_many("Order", "customer")],
    );

    let restaurant = entity(
        "Restaurant",
        vec![
            column("name", "String", REQUIRED),
            column("address", "String", "@Column(length = 500)"),
            plain("cuisine", "String"),
            column("rating", "Double", RATING),
            column("isActive", "Boolean", DEFAULT_TRUE),
        ],
        vec![one_to_many("Order", "restaurant")],
    );

    let order = entity(
        "Order",
        vec![
            column("totalAmount", "BigDecimal", MONEY),
            plain("status", "OrderStatus"),
            column("deliveryAddress", "String", "@Column(length = 500)"),
        ],
        vec![many_to_one("User", "customer"), many_to_one("Restaurant", "restaurant")],
    );

    template(
        "zomato",
        "Zomato Clone",
        "Food delivery app with restaurant listings, orders, and delivery tracking",
        vec![user, restaurant, order],
        vec![EnumModel::new(
            "OrderStatus",
            ["PLACED", "CONFIRMED", "PREPARING", "OUT_FOR_DELIVERY", "DELIVERED", "CANCELLED"],
        )],
        vec![
            api(
                "Restaurant Management",
                "Restaurant",
                "Handle restaurant listings and menu management",
                &[
                    "GET /api/restaurants",
                    "GET /api/restaurants/{id}",
                    "GET /api/restaurants/{id}/menu",
                    "GET /api/restaurants/search",
                ],
            ),
            api(
                "Order Management",
                "Order",
                "Handle food ordering and delivery tracking",
                &[
                    "POST /api/orders",
                    "GET /api/orders/{id}",
                    "PUT /api/orders/{id}/status",
                    "GET /api/users/{userId}/orders",
                ],
            ),
        ],
    )
}
