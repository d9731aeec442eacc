//! Data-model and capability-model units: entities, fields, relationships,
//! enumerations, endpoints and APIs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    naming,
    value_objects::{Cardinality, Constraint, HttpVerb, Purpose},
};

// ============================================================================
// Entities
// ============================================================================

/// A field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Property name as written in generated code (camelCase).
    pub name: String,
    /// Java type, e.g. `String`, `BigDecimal`, or an enumeration name.
    pub declared_type: String,
    /// Validation metadata used by the transfer-object renderers.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Extra annotations copied verbatim onto the data-model property.
    #[serde(default)]
    pub annotations: Vec<String>,
    /// Accepted on create, never returned in responses.
    #[serde(default)]
    pub write_only: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            constraints: Vec::new(),
            annotations: Vec::new(),
            write_only: false,
        }
    }

    pub fn with_constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints.extend(constraints);
        self
    }

    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn write_only(mut self, write_only: bool) -> Self {
        self.write_only = write_only;
        self
    }

    pub fn has_constraint(&self, constraint: Constraint) -> bool {
        self.constraints.contains(&constraint)
    }
}

/// A link from one entity to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub target: String,
    pub cardinality: Cardinality,
    /// Property name on the owning entity; derived from the target when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Property on the other side that owns this association.
    #[serde(default)]
    pub mapped_by: Option<String>,
    #[serde(default)]
    pub join_table: Option<String>,
    /// Scalar foreign-key field this relationship was inferred from.
    #[serde(default)]
    pub via_field: Option<String>,
}

impl Relationship {
    pub fn new(target: impl Into<String>, cardinality: Cardinality) -> Self {
        Self {
            target: target.into(),
            cardinality,
            name: None,
            mapped_by: None,
            join_table: None,
            via_field: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn mapped_by(mut self, property: impl Into<String>) -> Self {
        self.mapped_by = Some(property.into());
        self
    }

    pub fn join_table(mut self, table: impl Into<String>) -> Self {
        self.join_table = Some(table.into());
        self
    }

    pub fn via_field(mut self, field: impl Into<String>) -> Self {
        self.via_field = Some(field.into());
        self
    }

    /// The side without `mapped_by` owns the association.
    pub fn is_owning_side(&self) -> bool {
        self.mapped_by.is_none()
    }
}

/// A data-model unit. Names are unique within a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityModel {
    pub name: String,
    pub fields: Vec<Field>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl EntityModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Property name of each relationship, parallel to `relationships`.
    ///
    /// Explicit names are kept. Derived names are `author` for single
    /// targets and `authors` for collections. Two derived collection names
    /// that collide are qualified by their `mapped_by` property, so two
    /// inverse sides of `Follow` become `followsAsFollower` and
    /// `followsAsFollowing`. Anything still clashing with a field or an
    /// earlier property gets a `Ref` suffix.
    pub fn association_names(&self) -> Vec<String> {
        let derived: Vec<String> = self
            .relationships
            .iter()
            .map(|rel| {
                rel.name.clone().unwrap_or_else(|| {
                    let single = naming::decapitalize(&rel.target);
                    if rel.cardinality.is_collection() {
                        naming::escape_reserved(naming::pluralize(&single))
                    } else {
                        naming::escape_reserved(single)
                    }
                })
            })
            .collect();

        let mut names: Vec<String> = Vec::with_capacity(derived.len());
        for (rel, base) in self.relationships.iter().zip(&derived) {
            let mut name = base.clone();
            let collides = derived.iter().filter(|d| *d == base).count() > 1;
            if collides && rel.name.is_none() {
                if let Some(mapped_by) = &rel.mapped_by {
                    name = format!("{base}As{}", naming::capitalize(mapped_by));
                }
            }
            while self.has_field(&name) || names.contains(&name) {
                name.push_str("Ref");
            }
            names.push(name);
        }
        names
    }
}

/// Named list of string constants referenced by `Field::declared_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumModel {
    pub name: String,
    pub constants: Vec<String>,
}

impl EnumModel {
    pub fn new(name: impl Into<String>, constants: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            constants: constants.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// APIs
// ============================================================================

/// One REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    pub verb: HttpVerb,
    pub path: String,
}

impl Endpoint {
    pub fn new(verb: HttpVerb, path: impl Into<String>) -> Self {
        Self {
            verb,
            path: path.into(),
        }
    }

    /// Parse `"VERB /path"`. Never fails: a missing path becomes `""` and an
    /// unknown verb is kept as [`HttpVerb::Other`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.split_once(char::is_whitespace) {
            Some((verb, path)) => Self::new(HttpVerb::parse(verb), path.trim()),
            None if s.starts_with('/') => Self::new(HttpVerb::Get, s),
            None => Self::new(HttpVerb::parse(s), ""),
        }
    }

    /// A `{param}` segment marks a single-resource operation.
    pub fn has_path_parameter(&self) -> bool {
        self.path
            .find('{')
            .is_some_and(|open| self.path[open..].contains('}'))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.path)
    }
}

/// A capability: a named REST surface over one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiModel {
    pub name: String,
    pub purpose: Purpose,
    /// Name of the entity this API serves.
    pub entity: String,
    #[serde(default)]
    pub description: String,
    pub endpoints: Vec<Endpoint>,
    /// Bare field names. Only meaningful in custom mode, where entities are
    /// built from the APIs that reference them.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ApiModel {
    pub fn new(name: impl Into<String>, purpose: Purpose, entity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purpose,
            entity: entity.into(),
            description: String::new(),
            endpoints: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoints.push(Endpoint::parse(endpoint));
        self
    }

    pub fn with_endpoints<'a>(mut self, endpoints: impl IntoIterator<Item = &'a str>) -> Self {
        self.endpoints.extend(endpoints.into_iter().map(Endpoint::parse));
        self
    }

    pub fn with_fields<'a>(mut self, fields: impl IntoIterator<Item = &'a str>) -> Self {
        self.fields.extend(fields.into_iter().map(str::to_string));
        self
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_parses_verb_and_path() {
        let e = Endpoint::parse("  put /api/orders/{id}/status ");
        assert_eq!(e.verb, HttpVerb::Put);
        assert_eq!(e.path, "/api/orders/{id}/status");
        assert!(e.has_path_parameter());
    }

    #[test]
    fn endpoint_without_verb_defaults_to_get() {
        let e = Endpoint::parse("/api/things");
        assert_eq!(e.verb, HttpVerb::Get);
        assert!(!e.has_path_parameter());
    }

    #[test]
    fn unknown_verb_is_kept() {
        let e = Endpoint::parse("PURGE /cache");
        assert_eq!(e.verb, HttpVerb::Other("PURGE".into()));
        assert_eq!(e.to_string(), "PURGE /cache");
    }

    #[test]
    fn unclosed_brace_is_not_a_parameter() {
        assert!(!Endpoint::parse("GET /api/{broken").has_path_parameter());
    }

    #[test]
    fn association_names_are_derived_and_disambiguated() {
        let user = EntityModel::new("User")
            .with_field(Field::new("followers", "Integer"))
            .with_relationship(Relationship::new("Post", Cardinality::OneToMany).mapped_by("user"))
            .with_relationship(Relationship::new("Follow", Cardinality::OneToMany).mapped_by("follower"))
            .with_relationship(Relationship::new("Follow", Cardinality::OneToMany).mapped_by("following"))
            .with_relationship(Relationship::new("Category", Cardinality::ManyToOne))
            .with_relationship(Relationship::new("User", Cardinality::ManyToOne).named("followers"));
        assert_eq!(
            user.association_names(),
            [
                "posts",
                "followsAsFollower",
                "followsAsFollowing",
                "category",
                "followersRef",
            ]
        );
    }

    #[test]
    fn keyword_targets_get_escaped_names() {
        let student = EntityModel::new("Student")
            .with_relationship(Relationship::new("Class", Cardinality::ManyToOne))
            .with_relationship(Relationship::new("Package", Cardinality::OneToMany));
        assert_eq!(student.association_names(), ["class_", "packages"]);
    }

    #[test]
    fn relationship_owning_side() {
        let owning = Relationship::new("User", Cardinality::ManyToOne).named("author");
        let inverse = Relationship::new("Post", Cardinality::OneToMany).mapped_by("author");
        assert!(owning.is_owning_side());
        assert!(!inverse.is_owning_side());
    }
}
