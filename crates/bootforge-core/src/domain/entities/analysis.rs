use serde::Serialize;

use crate::domain::value_objects::Cardinality;

/// A relationship as reported by analysis: `source --cardinality--> target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RelationshipRef {
    pub source: String,
    pub target: String,
    pub cardinality: Cardinality,
    /// Field the relationship was inferred from, if any.
    pub via: Option<String>,
}

/// Cross-cutting requirements and relationships derived from the input.
///
/// Invariant: `needs_authentication` implies `needs_persistence`. Enforced by
/// [`AnalysisResult::normalized`], which every constructor path goes through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub needs_persistence: bool,
    pub needs_authentication: bool,
    pub needs_validation: bool,
    pub needs_file_upload: bool,
    pub needs_notifications: bool,
    /// Entity names in declaration order.
    pub entities: Vec<String>,
    pub relationships: Vec<RelationshipRef>,
}

impl AnalysisResult {
    pub fn normalized(mut self) -> Self {
        if self.needs_authentication {
            self.needs_persistence = true;
        }
        self
    }

    pub fn has_entity(&self, name: &str) -> bool {
        self.entities.iter().any(|e| e == name)
    }

    pub fn relationships_from<'a>(
        &'a self,
        source: &'a str,
    ) -> impl Iterator<Item = &'a RelationshipRef> + 'a {
        self.relationships.iter().filter(move |r| r.source == source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authentication_forces_persistence() {
        let result = AnalysisResult {
            needs_authentication: true,
            ..Default::default()
        }
        .normalized();
        assert!(result.needs_persistence);
    }

    #[test]
    fn persistence_alone_is_untouched() {
        let result = AnalysisResult {
            needs_persistence: true,
            ..Default::default()
        }
        .normalized();
        assert!(!result.needs_authentication);
    }
}
