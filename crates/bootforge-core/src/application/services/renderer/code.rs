//! Small helpers for emitting Java source text.

use std::collections::BTreeSet;

use crate::domain::{Constraint, Field, naming};

const INDENT: &str = "    ";

/// Line-oriented source writer with block indentation.
#[derive(Debug, Default)]
pub(crate) struct Code {
    buf: String,
    depth: usize,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write `text` and indent what follows.
    pub fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(text);
        self.depth += 1;
        self
    }

    /// Dedent, then write `text`.
    pub fn close(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line(text)
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Sorted, de-duplicated import set.
#[derive(Debug, Default)]
pub(crate) struct Imports(BTreeSet<String>);

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, import: impl Into<String>) -> &mut Self {
        self.0.insert(import.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `package` line, imports, trailing blank line.
    pub fn write_header(&self, code: &mut Code, package: &str) {
        code.line(format!("package {package};")).blank();
        if !self.is_empty() {
            for import in &self.0 {
                code.line(format!("import {import};"));
            }
            code.blank();
        }
    }
}

/// Fully qualified import a field type needs, if any.
///
/// `enum_package` is where enumeration types live; pass `None` when the
/// caller is already in that package.
pub(crate) fn type_import(
    declared_type: &str,
    is_enumeration: bool,
    enum_package: Option<&str>,
) -> Option<String> {
    match declared_type {
        "BigDecimal" => Some("java.math.BigDecimal".into()),
        "LocalDateTime" => Some("java.time.LocalDateTime".into()),
        "LocalDate" => Some("java.time.LocalDate".into()),
        "LocalTime" => Some("java.time.LocalTime".into()),
        "Instant" => Some("java.time.Instant".into()),
        "UUID" => Some("java.util.UUID".into()),
        other if is_enumeration => enum_package.map(|pkg| format!("{pkg}.{other}")),
        _ => None,
    }
}

/// Property names treated as audit timestamps, always rendered by the
/// data-model renderer itself.
pub(crate) const AUDIT_FIELDS: [&str; 2] = ["createdAt", "updatedAt"];

pub(crate) fn is_audit_field(field: &Field) -> bool {
    AUDIT_FIELDS.contains(&field.name.as_str())
}

/// Getter and setter pair for one property.
pub(crate) fn accessors(code: &mut Code, java_type: &str, name: &str) {
    let cap = naming::capitalize(name);
    code.open(format!("public {java_type} get{cap}() {{"))
        .line(format!("return {name};"))
        .close("}")
        .blank()
        .open(format!("public void set{cap}({java_type} {name}) {{"))
        .line(format!("this.{name} = {name};"))
        .close("}")
        .blank();
}

/// Bean Validation annotations for a field's constraints, in a stable order.
pub(crate) fn validation_annotations(field: &Field) -> Vec<String> {
    let is_text = field.declared_type == "String";
    let is_decimal = field.declared_type == "BigDecimal";
    let mut out = Vec::new();
    for constraint in &field.constraints {
        let annotation = match constraint {
            Constraint::Required if is_text => "@NotBlank".to_string(),
            Constraint::Required => "@NotNull".to_string(),
            Constraint::Unique => continue,
            Constraint::EmailFormat => "@Email".to_string(),
            Constraint::MinLength(n) => format!("@Size(min = {n})"),
            Constraint::NonNegative if is_decimal => "@DecimalMin(\"0.0\")".to_string(),
            Constraint::NonNegative => "@Min(0)".to_string(),
            Constraint::Min(n) => format!("@Min({n})"),
        };
        if !out.contains(&annotation) {
            out.push(annotation);
        }
    }
    out
}

/// Annotation names that live in the Bean Validation constraints package.
pub(crate) fn is_validation_annotation(annotation: &str) -> bool {
    const NAMES: [&str; 12] = [
        "@NotNull", "@NotBlank", "@NotEmpty", "@Email", "@Size", "@Min", "@Max",
        "@DecimalMin", "@DecimalMax", "@Pattern", "@Positive", "@PositiveOrZero",
    ];
    NAMES.iter().any(|name| {
        annotation
            .strip_prefix(name)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('('))
    })
}

/// Replace every `{{KEY}}` placeholder in a fixed source template.
///
/// Unknown placeholders are left in place.
pub(crate) fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{{{key}}}}}"), value)
    })
}

/// Escape text for a Java string literal.
pub(crate) fn java_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
