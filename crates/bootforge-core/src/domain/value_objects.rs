//! Domain value objects: Purpose, HttpVerb, Cardinality, Packaging, ValueType,
//! Constraint, ArtifactKind, StorageStyle, Warning.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. They
//! hold NO rule tables. Purpose requirements and type inference rules live in
//! `capabilities.rs`. This file defines the types, their string
//! representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Purpose ──────────────────────────────────────────────────────────────────

/// What an API is for. Drives the cross-cutting requirements of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Purpose {
    UserManagement,
    ProductCatalog,
    OrderManagement,
    ContentManagement,
    NotificationSystem,
    FileManagement,
    #[default]
    Custom,
}

impl Purpose {
    pub const ALL: [Purpose; 7] = [
        Self::UserManagement,
        Self::ProductCatalog,
        Self::OrderManagement,
        Self::ContentManagement,
        Self::NotificationSystem,
        Self::FileManagement,
        Self::Custom,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserManagement => "user-management",
            Self::ProductCatalog => "product-catalog",
            Self::OrderManagement => "order-management",
            Self::ContentManagement => "content-management",
            Self::NotificationSystem => "notification-system",
            Self::FileManagement => "file-management",
            Self::Custom => "custom",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::UserManagement => "User Management",
            Self::ProductCatalog => "Product Catalog",
            Self::OrderManagement => "Order Management",
            Self::ContentManagement => "Content Management",
            Self::NotificationSystem => "Notification System",
            Self::FileManagement => "File Management",
            Self::Custom => "Custom",
        }
    }

    /// Derive a purpose from an API's display name.
    ///
    /// `"User Management"` → `UserManagement`; anything that does not slug to
    /// one of the known purposes is `Custom`.
    pub fn from_api_name(name: &str) -> Self {
        let slug = crate::domain::naming::to_kebab_case(name);
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == slug)
            .unwrap_or(Self::Custom)
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "user-management" | "users" | "auth" => Ok(Self::UserManagement),
            "product-catalog" | "products" | "catalog" => Ok(Self::ProductCatalog),
            "order-management" | "orders" => Ok(Self::OrderManagement),
            "content-management" | "content" | "cms" => Ok(Self::ContentManagement),
            "notification-system" | "notifications" => Ok(Self::NotificationSystem),
            "file-management" | "files" | "upload" => Ok(Self::FileManagement),
            "custom" | "" => Ok(Self::Custom),
            other => Err(DomainError::UnknownPurpose {
                value: other.to_string(),
            }),
        }
    }
}

// ── HttpVerb ─────────────────────────────────────────────────────────────────

/// HTTP method of an endpoint.
///
/// Unknown methods are kept verbatim in `Other` so the request-handler
/// renderer can emit a visible stub for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Other(String),
}

impl HttpVerb {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Other(verb) => verb,
        }
    }

    /// Parse a verb. Never fails.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "OPTIONS" => Self::Options,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Cardinality ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Cardinality {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneToOne => "one-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
        }
    }

    /// JPA annotation name for this cardinality.
    pub const fn annotation(&self) -> &'static str {
        match self {
            Self::OneToOne => "OneToOne",
            Self::OneToMany => "OneToMany",
            Self::ManyToOne => "ManyToOne",
            Self::ManyToMany => "ManyToMany",
        }
    }

    /// Whether the relationship side holds a collection.
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::OneToMany | Self::ManyToMany)
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cardinality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['_', '-'], "").as_str() {
            "onetoone" => Ok(Self::OneToOne),
            "onetomany" => Ok(Self::OneToMany),
            "manytoone" => Ok(Self::ManyToOne),
            "manytomany" => Ok(Self::ManyToMany),
            other => Err(DomainError::InvalidProjectSpec(format!(
                "unknown relationship cardinality: {other}"
            ))),
        }
    }
}

// ── Packaging ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Packaging {
    #[default]
    Jar,
    War,
}

impl Packaging {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jar => "jar",
            Self::War => "war",
        }
    }
}

impl fmt::Display for Packaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Packaging {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jar" => Ok(Self::Jar),
            "war" => Ok(Self::War),
            other => Err(DomainError::UnknownPackaging {
                value: other.to_string(),
            }),
        }
    }
}

// ── ValueType ────────────────────────────────────────────────────────────────

/// Value type chosen for a bare field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueType {
    Text,
    Decimal,
    DateTime,
    Integer,
    Reference,
}

impl ValueType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Decimal => "decimal",
            Self::DateTime => "date-time",
            Self::Integer => "integer",
            Self::Reference => "reference",
        }
    }

    /// Java type used in generated sources.
    pub const fn java_type(&self) -> &'static str {
        match self {
            Self::Text => "String",
            Self::Decimal => "BigDecimal",
            Self::DateTime => "LocalDateTime",
            Self::Integer => "Integer",
            Self::Reference => "Long",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Constraint ───────────────────────────────────────────────────────────────

/// Validation metadata attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum Constraint {
    Required,
    Unique,
    EmailFormat,
    MinLength(u32),
    NonNegative,
    Min(i64),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("required"),
            Self::Unique => f.write_str("unique"),
            Self::EmailFormat => f.write_str("email-format"),
            Self::MinLength(n) => write!(f, "min-length({n})"),
            Self::NonNegative => f.write_str("non-negative"),
            Self::Min(n) => write!(f, "min({n})"),
        }
    }
}

// ── StorageStyle ─────────────────────────────────────────────────────────────

/// How a database profile stores entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageStyle {
    Relational,
    Document,
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// Fixed categories of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    BuildDescriptor,
    Properties,
    Application,
    Configuration,
    Security,
    Support,
    Integration,
    Enumeration,
    SeedData,
    Test,
    Documentation,
    DataModel,
    AccessLayer,
    ServiceLayer,
    RequestHandler,
    CreateInput,
    Response,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BuildDescriptor => "build-descriptor",
            Self::Properties => "properties",
            Self::Application => "application",
            Self::Configuration => "configuration",
            Self::Security => "security",
            Self::Support => "support",
            Self::Integration => "integration",
            Self::Enumeration => "enumeration",
            Self::SeedData => "seed-data",
            Self::Test => "test",
            Self::Documentation => "documentation",
            Self::DataModel => "data-model",
            Self::AccessLayer => "access-layer",
            Self::ServiceLayer => "service-layer",
            Self::RequestHandler => "request-handler",
            Self::CreateInput => "create-input",
            Self::Response => "response",
        }
    }

    /// Class-name suffix for per-entity kinds; `None` for project-level kinds.
    pub const fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::DataModel => Some(""),
            Self::AccessLayer => Some("Repository"),
            Self::ServiceLayer => Some("Service"),
            Self::RequestHandler => Some("Controller"),
            Self::CreateInput => Some("CreateRequest"),
            Self::Response => Some("Response"),
            _ => None,
        }
    }

    /// Sub-package for kinds that live in the Java source tree.
    pub const fn subpackage(&self) -> Option<&'static str> {
        match self {
            Self::DataModel | Self::Enumeration => Some("entity"),
            Self::AccessLayer => Some("repository"),
            Self::ServiceLayer => Some("service"),
            Self::RequestHandler => Some("controller"),
            Self::CreateInput | Self::Response => Some("dto"),
            Self::Configuration => Some("config"),
            Self::Security => Some("security"),
            Self::Support => Some("support"),
            _ => None,
        }
    }

    /// Per-entity kinds in rendering order.
    pub const PER_ENTITY: [ArtifactKind; 6] = [
        Self::DataModel,
        Self::AccessLayer,
        Self::ServiceLayer,
        Self::RequestHandler,
        Self::CreateInput,
        Self::Response,
    ];
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Warning ──────────────────────────────────────────────────────────────────

/// Degraded conditions reported alongside a generation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    ConfigIncompatibility,
    UnresolvedRelationship,
    UnrecognizedEndpoint,
    MissingEntityForApi,
    UnknownTemplate,
    UnknownDatabaseProfile,
}

impl WarningKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigIncompatibility => "config-incompatibility",
            Self::UnresolvedRelationship => "unresolved-relationship",
            Self::UnrecognizedEndpoint => "unrecognized-endpoint",
            Self::MissingEntityForApi => "missing-entity-for-api",
            Self::UnknownTemplate => "unknown-template",
            Self::UnknownDatabaseProfile => "unknown-database-profile",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal finding. Never aborts generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
