//! Static rule registries.
//!
//! Every decision table the engine consults is declared here exactly once:
//!
//! - [`FRAMEWORK_MATRIX`] / [`DEPENDENCY_MATRIX`]: which runtime, framework and
//!   dependency combinations are valid, wrapped by [`CompatibilityMatrix`]
//! - [`PURPOSE_REQUIREMENTS`]: what infrastructure an API purpose demands
//! - [`PURPOSE_PRESETS`]: suggested endpoints and fields per purpose
//! - [`TYPE_RULES`]: ordered field-name heuristics, first match wins
//!
//! All lookups are O(n) scans over small slices. Do not write `match` arms on
//! versions, purposes or field names elsewhere; add a row here instead.

use std::cmp::Ordering;

use crate::domain::value_objects::{Constraint, Purpose, ValueType};

// ── Version comparison ───────────────────────────────────────────────────────

/// Dotted-numeric ordinal comparison.
///
/// Missing components count as 0 (`"17"` == `"17.0.0"`) and so do components
/// that are not numbers.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.trim()
            .split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };
    let (a, b) = (parse(a), parse(b));
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// `min <= v <= max` under [`compare_versions`].
pub fn version_in_range(v: &str, min: &str, max: &str) -> bool {
    compare_versions(v, min).is_ge() && compare_versions(v, max).is_le()
}

// ── Framework matrix ─────────────────────────────────────────────────────────

/// Runtime support for one framework release.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkVersionDef {
    pub version: &'static str,
    pub min_runtime: &'static str,
    pub max_runtime: &'static str,

    /// Runtime versions offered for this release, preferred first.
    ///
    /// Never empty. The first entry is the correction target when a requested
    /// runtime is not supported.
    pub supported_runtimes: &'static [&'static str],

    /// `jakarta.*` (3.x) rather than `javax.*` (2.x) for persistence,
    /// validation and servlet imports.
    pub jakarta: bool,
}

impl FrameworkVersionDef {
    pub fn supports_runtime(&self, runtime: &str) -> bool {
        version_in_range(runtime, self.min_runtime, self.max_runtime)
            && self
                .supported_runtimes
                .iter()
                .any(|r| compare_versions(r, runtime).is_eq())
    }
}

/// Newest release first; the first entry is the default framework.
pub static FRAMEWORK_MATRIX: &[FrameworkVersionDef] = &[
    FrameworkVersionDef {
        version: "3.3.0",
        min_runtime: "17",
        max_runtime: "25",
        supported_runtimes: &["17", "21", "25"],
        jakarta: true,
    },
    FrameworkVersionDef {
        version: "3.2.0",
        min_runtime: "17",
        max_runtime: "25",
        supported_runtimes: &["17", "21", "25"],
        jakarta: true,
    },
    FrameworkVersionDef {
        version: "3.1.5",
        min_runtime: "17",
        max_runtime: "21",
        supported_runtimes: &["17", "21"],
        jakarta: true,
    },
    FrameworkVersionDef {
        version: "3.0.12",
        min_runtime: "17",
        max_runtime: "21",
        supported_runtimes: &["17", "21"],
        jakarta: true,
    },
    FrameworkVersionDef {
        version: "2.7.17",
        min_runtime: "8",
        max_runtime: "19",
        supported_runtimes: &["11", "17"],
        jakarta: false,
    },
];

// ── Dependency matrix ────────────────────────────────────────────────────────

/// A selectable starter dependency and its minimum requirements.
#[derive(Debug, Clone, Copy)]
pub struct DependencyDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub min_framework: &'static str,
    pub min_runtime: &'static str,
    pub group_id: &'static str,
    pub artifact_id: &'static str,
    /// Maven scope, `None` for compile scope.
    pub scope: Option<&'static str>,
}

const BOOT: &str = "org.springframework.boot";

pub static DEPENDENCY_MATRIX: &[DependencyDef] = &[
    DependencyDef {
        id: "web",
        name: "Spring Web",
        description: "Build web applications with Spring MVC",
        category: "Web",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-web",
        scope: None,
    },
    DependencyDef {
        id: "data-jpa",
        name: "Spring Data JPA",
        description: "Persist data in SQL stores with Java Persistence API",
        category: "Data",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-data-jpa",
        scope: None,
    },
    DependencyDef {
        id: "security",
        name: "Spring Security",
        description: "Highly customizable authentication and access-control framework",
        category: "Security",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-security",
        scope: None,
    },
    DependencyDef {
        id: "validation",
        name: "Validation",
        description: "Bean Validation with Hibernate validator",
        category: "Core",
        min_framework: "2.3.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-validation",
        scope: None,
    },
    DependencyDef {
        id: "actuator",
        name: "Spring Boot Actuator",
        description: "Production ready features to help you monitor and manage your application",
        category: "Ops",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-actuator",
        scope: None,
    },
    DependencyDef {
        id: "cache",
        name: "Spring Cache Abstraction",
        description: "Provides cache-related operations",
        category: "Core",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-cache",
        scope: None,
    },
    DependencyDef {
        id: "mail",
        name: "Java Mail Sender",
        description: "Send email using Java Mail and Spring Framework's JavaMailSender",
        category: "Messaging",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-mail",
        scope: None,
    },
    DependencyDef {
        id: "test",
        name: "Spring Boot Test",
        description: "Testing support with JUnit, Hamcrest and Mockito",
        category: "Test",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-test",
        scope: Some("test"),
    },
    DependencyDef {
        id: "webflux",
        name: "Spring Reactive Web",
        description: "Build reactive web applications with Spring WebFlux and Netty",
        category: "Web",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-webflux",
        scope: None,
    },
    DependencyDef {
        id: "data-mongodb",
        name: "Spring Data MongoDB",
        description: "Store data in flexible, JSON-like documents",
        category: "Data",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-data-mongodb",
        scope: None,
    },
    DependencyDef {
        id: "data-redis",
        name: "Spring Data Redis",
        description: "Advanced and thread-safe Java Redis client",
        category: "Data",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-data-redis",
        scope: None,
    },
    DependencyDef {
        id: "thymeleaf",
        name: "Thymeleaf",
        description: "Server-side Java template engine",
        category: "Template",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-thymeleaf",
        scope: None,
    },
    DependencyDef {
        id: "websocket",
        name: "WebSocket",
        description: "Build WebSocket applications with SockJS and STOMP",
        category: "Messaging",
        min_framework: "2.0.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-websocket",
        scope: None,
    },
    DependencyDef {
        id: "oauth2-client",
        name: "OAuth2 Client",
        description: "Spring Boot integration for Spring Security's OAuth2/OpenID Connect client features",
        category: "Security",
        min_framework: "2.1.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-oauth2-client",
        scope: None,
    },
    DependencyDef {
        id: "graphql",
        name: "Spring for GraphQL",
        description: "Build GraphQL applications with Spring for GraphQL and GraphQL Java",
        category: "Web",
        min_framework: "2.7.0",
        min_runtime: "8",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-graphql",
        scope: None,
    },
    DependencyDef {
        id: "oauth2-authorization-server",
        name: "OAuth2 Authorization Server",
        description: "Spring Boot integration for Spring Authorization Server",
        category: "Security",
        min_framework: "3.1.0",
        min_runtime: "17",
        group_id: BOOT,
        artifact_id: "spring-boot-starter-oauth2-authorization-server",
        scope: None,
    },
    DependencyDef {
        id: "docker-compose",
        name: "Docker Compose Support",
        description: "Provides docker compose support for enhanced development experience",
        category: "Ops",
        min_framework: "3.1.0",
        min_runtime: "17",
        group_id: BOOT,
        artifact_id: "spring-boot-docker-compose",
        scope: Some("runtime"),
    },
    DependencyDef {
        id: "testcontainers",
        name: "Testcontainers",
        description: "Provide lightweight, throwaway instances of common databases for tests",
        category: "Test",
        min_framework: "3.1.0",
        min_runtime: "17",
        group_id: BOOT,
        artifact_id: "spring-boot-testcontainers",
        scope: Some("test"),
    },
];

// ── CompatibilityMatrix ──────────────────────────────────────────────────────

/// Immutable compatibility tables, injected into the resolver.
///
/// [`CompatibilityMatrix::builtin`] wraps the static registries above; tests
/// build matrices over their own fixture slices.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityMatrix {
    frameworks: &'static [FrameworkVersionDef],
    dependencies: &'static [DependencyDef],
}

impl CompatibilityMatrix {
    pub const fn new(
        frameworks: &'static [FrameworkVersionDef],
        dependencies: &'static [DependencyDef],
    ) -> Self {
        Self {
            frameworks,
            dependencies,
        }
    }

    pub const fn builtin() -> Self {
        Self::new(FRAMEWORK_MATRIX, DEPENDENCY_MATRIX)
    }

    pub fn frameworks(&self) -> &'static [FrameworkVersionDef] {
        self.frameworks
    }

    pub fn dependencies(&self) -> &'static [DependencyDef] {
        self.dependencies
    }

    /// The first framework entry, used when nothing else fits.
    pub fn default_framework(&self) -> Option<&'static FrameworkVersionDef> {
        self.frameworks.first()
    }

    pub fn find_framework(&self, version: &str) -> Option<&'static FrameworkVersionDef> {
        self.frameworks
            .iter()
            .find(|def| compare_versions(def.version, version).is_eq())
    }

    pub fn find_dependency(&self, id: &str) -> Option<&'static DependencyDef> {
        let id = id.trim().to_ascii_lowercase();
        let short = id.strip_prefix("spring-boot-starter-").unwrap_or(&id);
        self.dependencies
            .iter()
            .find(|def| def.id == short || def.artifact_id == id)
    }

    /// Framework releases whose supported runtimes include `runtime`, in
    /// matrix order.
    pub fn frameworks_supporting<'a>(
        &self,
        runtime: &'a str,
    ) -> impl Iterator<Item = &'static FrameworkVersionDef> + 'a {
        self.frameworks
            .iter()
            .filter(move |def| def.supports_runtime(runtime))
    }

    /// Check the matrix invariants, returning a description of the first
    /// violation.
    pub fn validate(&self) -> Result<(), String> {
        if self.frameworks.is_empty() {
            return Err("matrix has no framework entries".into());
        }
        for def in self.frameworks {
            if def.supported_runtimes.is_empty() {
                return Err(format!(
                    "framework {} has no supported runtimes",
                    def.version
                ));
            }
            if let Some(r) = def
                .supported_runtimes
                .iter()
                .find(|r| !version_in_range(r, def.min_runtime, def.max_runtime))
            {
                return Err(format!(
                    "framework {}: supported runtime {r} is outside [{}, {}]",
                    def.version, def.min_runtime, def.max_runtime
                ));
            }
        }
        Ok(())
    }
}

impl Default for CompatibilityMatrix {
    fn default() -> Self {
        Self::builtin()
    }
}

// ── Purpose requirements ─────────────────────────────────────────────────────

/// Infrastructure an API purpose demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurposeRequirement {
    pub purpose: Purpose,
    pub persistence: bool,
    pub authentication: bool,
    pub file_upload: bool,
    pub notifications: bool,
}

/// Purpose → requirement table. One row per purpose, in declaration order.
pub static PURPOSE_REQUIREMENTS: &[PurposeRequirement] = &[
    PurposeRequirement {
        purpose: Purpose::UserManagement,
        persistence: true,
        authentication: true,
        file_upload: false,
        notifications: false,
    },
    PurposeRequirement {
        purpose: Purpose::ProductCatalog,
        persistence: true,
        authentication: false,
        file_upload: false,
        notifications: false,
    },
    PurposeRequirement {
        purpose: Purpose::OrderManagement,
        persistence: true,
        authentication: false,
        file_upload: false,
        notifications: false,
    },
    PurposeRequirement {
        purpose: Purpose::ContentManagement,
        persistence: true,
        authentication: false,
        file_upload: false,
        notifications: false,
    },
    PurposeRequirement {
        purpose: Purpose::NotificationSystem,
        persistence: false,
        authentication: false,
        file_upload: false,
        notifications: true,
    },
    PurposeRequirement {
        purpose: Purpose::FileManagement,
        persistence: false,
        authentication: false,
        file_upload: true,
        notifications: false,
    },
    PurposeRequirement {
        purpose: Purpose::Custom,
        persistence: false,
        authentication: false,
        file_upload: false,
        notifications: false,
    },
];

pub fn requirements_for(purpose: Purpose) -> Option<&'static PurposeRequirement> {
    PURPOSE_REQUIREMENTS.iter().find(|r| r.purpose == purpose)
}

// ── Purpose presets ──────────────────────────────────────────────────────────

/// Suggested surface for an API of a given purpose.
///
/// Custom-mode APIs that leave `endpoints` or `fields` empty get these.
#[derive(Debug, Clone, Copy)]
pub struct PurposePreset {
    pub purpose: Purpose,
    pub description: &'static str,
    pub endpoints: &'static [&'static str],
    pub fields: &'static [&'static str],
}

pub static PURPOSE_PRESETS: &[PurposePreset] = &[
    PurposePreset {
        purpose: Purpose::UserManagement,
        description: "Handle user registration, authentication, and profile management",
        endpoints: &[
            "POST /users/register",
            "POST /users/login",
            "GET /users/profile",
            "PUT /users/profile",
        ],
        fields: &["username", "email", "password", "firstName", "lastName", "role"],
    },
    PurposePreset {
        purpose: Purpose::ProductCatalog,
        description: "Manage products, categories, and inventory",
        endpoints: &[
            "GET /products",
            "POST /products",
            "GET /products/{id}",
            "PUT /products/{id}",
            "DELETE /products/{id}",
        ],
        fields: &["name", "description", "price", "category", "stock", "sku"],
    },
    PurposePreset {
        purpose: Purpose::OrderManagement,
        description: "Handle orders, payments, and order tracking",
        endpoints: &[
            "POST /orders",
            "GET /orders",
            "GET /orders/{id}",
            "PUT /orders/{id}/status",
        ],
        fields: &[
            "customerId",
            "items",
            "totalAmount",
            "status",
            "orderDate",
            "shippingAddress",
        ],
    },
    PurposePreset {
        purpose: Purpose::ContentManagement,
        description: "Manage articles, blogs, or any content-based system",
        endpoints: &[
            "GET /content",
            "POST /content",
            "GET /content/{id}",
            "PUT /content/{id}",
            "DELETE /content/{id}",
        ],
        fields: &["title", "content", "author", "publishDate", "status", "tags"],
    },
    PurposePreset {
        purpose: Purpose::NotificationSystem,
        description: "Send and manage notifications across different channels",
        endpoints: &[
            "POST /notifications",
            "GET /notifications",
            "PUT /notifications/{id}/read",
        ],
        fields: &["userId", "message", "type", "channel", "sentDate", "isRead"],
    },
    PurposePreset {
        purpose: Purpose::FileManagement,
        description: "Upload, store, and manage files and documents",
        endpoints: &[
            "POST /files/upload",
            "GET /files",
            "GET /files/{id}",
            "DELETE /files/{id}",
        ],
        fields: &["filename", "fileType", "fileSize", "uploadDate", "uploadedBy", "url"],
    },
];

pub fn preset_for(purpose: Purpose) -> Option<&'static PurposePreset> {
    PURPOSE_PRESETS.iter().find(|p| p.purpose == purpose)
}

// ── Type inference rules ─────────────────────────────────────────────────────

/// Predicate over a lowercased field name.
#[derive(Debug, Clone, Copy)]
pub enum NameMatcher {
    /// Name contains any of the needles.
    ContainsAny(&'static [&'static str]),
    /// Name contains `needle` but does not start with `prefix`.
    ContainsNotPrefix {
        needle: &'static str,
        prefix: &'static str,
    },
    /// Matches every name.
    Always,
}

impl NameMatcher {
    /// `name` must already be lowercase.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::ContainsAny(needles) => needles.iter().any(|n| name.contains(n)),
            Self::ContainsNotPrefix { needle, prefix } => {
                name.contains(needle) && !name.starts_with(prefix)
            }
            Self::Always => true,
        }
    }
}

/// One row of the type inference table.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    pub name: &'static str,
    pub matcher: NameMatcher,
    pub value_type: ValueType,
    pub constraints: &'static [Constraint],
    /// Accepted on input, never echoed in responses.
    pub write_only: bool,
}

/// Ordered field-name heuristics. First match wins; order is semantic.
pub static TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        name: "email",
        matcher: NameMatcher::ContainsAny(&["email"]),
        value_type: ValueType::Text,
        constraints: &[Constraint::Required, Constraint::Unique, Constraint::EmailFormat],
        write_only: false,
    },
    TypeRule {
        name: "password",
        matcher: NameMatcher::ContainsAny(&["password"]),
        value_type: ValueType::Text,
        constraints: &[Constraint::Required, Constraint::MinLength(6)],
        write_only: true,
    },
    TypeRule {
        name: "money",
        matcher: NameMatcher::ContainsAny(&["price", "amount"]),
        value_type: ValueType::Decimal,
        constraints: &[Constraint::Required, Constraint::NonNegative],
        write_only: false,
    },
    TypeRule {
        name: "date",
        matcher: NameMatcher::ContainsAny(&["date"]),
        value_type: ValueType::DateTime,
        constraints: &[],
        write_only: false,
    },
    TypeRule {
        name: "count",
        matcher: NameMatcher::ContainsAny(&["stock", "quantity"]),
        value_type: ValueType::Integer,
        constraints: &[Constraint::Required, Constraint::Min(0)],
        write_only: false,
    },
    TypeRule {
        name: "foreign-key",
        matcher: NameMatcher::ContainsNotPrefix {
            needle: "id",
            prefix: "id",
        },
        value_type: ValueType::Reference,
        constraints: &[],
        write_only: false,
    },
    TypeRule {
        name: "default",
        matcher: NameMatcher::Always,
        value_type: ValueType::Text,
        constraints: &[],
        write_only: false,
    },
];

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registries are internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    if let Err(e) = CompatibilityMatrix::builtin().validate() {
        panic!("builtin compatibility matrix is invalid: {e}");
    }

    for def in DEPENDENCY_MATRIX {
        assert_eq!(
            DEPENDENCY_MATRIX.iter().filter(|d| d.id == def.id).count(),
            1,
            "dependency id {} registered more than once",
            def.id
        );
    }

    for purpose in Purpose::ALL {
        assert!(
            requirements_for(purpose).is_some(),
            "purpose {purpose} has no requirement row"
        );
        if purpose != Purpose::Custom {
            assert!(preset_for(purpose).is_some(), "purpose {purpose} has no preset");
        }
    }

    for req in PURPOSE_REQUIREMENTS {
        assert!(
            !req.authentication || req.persistence,
            "purpose {} requires authentication without persistence",
            req.purpose
        );
    }

    assert!(
        matches!(TYPE_RULES.last().map(|r| r.matcher), Some(NameMatcher::Always)),
        "the last type rule must be the catch-all default"
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
