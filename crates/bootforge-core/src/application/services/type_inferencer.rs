//! Field-name → value type inference.

use serde::Serialize;

use crate::domain::{
    Constraint, Field, ValueType,
    capabilities::{TYPE_RULES, TypeRule},
};

/// What the rule table says about one field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InferredType {
    pub value_type: ValueType,
    pub constraints: Vec<Constraint>,
    pub write_only: bool,
    /// Name of the rule that matched, for diagnostics.
    pub rule: &'static str,
}

impl InferredType {
    /// Build the field this inference describes.
    pub fn into_field(self, name: impl Into<String>) -> Field {
        Field::new(name, self.value_type.java_type())
            .with_constraints(self.constraints)
            .write_only(self.write_only)
    }
}

/// Evaluates an ordered rule table against field names. First match wins.
#[derive(Debug, Clone, Copy)]
pub struct TypeInferencer {
    rules: &'static [TypeRule],
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new(TYPE_RULES)
    }
}

impl TypeInferencer {
    pub fn new(rules: &'static [TypeRule]) -> Self {
        Self { rules }
    }

    /// Infer the type of a bare field name, matched case-insensitively.
    ///
    /// A table without a matching rule degrades to unconstrained text.
    pub fn infer(&self, field_name: &str) -> InferredType {
        let lower = field_name.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(&lower))
            .map(|rule| InferredType {
                value_type: rule.value_type,
                constraints: rule.constraints.to_vec(),
                write_only: rule.write_only,
                rule: rule.name,
            })
            .unwrap_or(InferredType {
                value_type: ValueType::Text,
                constraints: Vec::new(),
                write_only: false,
                rule: "default",
            })
    }

    /// Whether a field with this name may appear in response payloads.
    pub fn is_exposed(&self, field_name: &str) -> bool {
        !self.infer(field_name).write_only
    }

    /// Validation constraints for a field with an explicitly declared type.
    ///
    /// Catalog fields carry their own Java types. The rule table's
    /// constraints only apply when it would have picked the same type, so an
    /// `accountBalance: BigDecimal` does not inherit text rules.
    pub fn constraints_for_declared(&self, field_name: &str, declared_type: &str) -> Vec<Constraint> {
        let inferred = self.infer(field_name);
        if inferred.value_type.java_type() == declared_type {
            inferred.constraints
        } else {
            Vec::new()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
