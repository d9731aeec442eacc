//! Request and response transfer objects.

use crate::domain::{EntityModel, Field};

use super::{
    RenderContext,
    code::{Code, Imports, accessors, is_audit_field, is_validation_annotation, type_import, validation_annotations},
    model::trim_trailing_blank,
};

/// Fields a client may set: everything but audit and database-managed
/// timestamps.
pub(super) fn input_fields(entity: &EntityModel) -> Vec<&Field> {
    entity
        .fields
        .iter()
        .filter(|f| !is_audit_field(f))
        .filter(|f| !f.annotations.iter().any(|a| a.contains("Timestamp")))
        .collect()
}

fn type_imports<'f>(ctx: &RenderContext<'_>, imports: &mut Imports, fields: impl IntoIterator<Item = &'f Field>) {
    let entity_package = ctx.subpackage("entity");
    for field in fields {
        let is_enum = ctx.is_enumeration(&field.declared_type);
        if let Some(import) = type_import(&field.declared_type, is_enum, Some(&entity_package)) {
            imports.add(import);
        }
    }
}

pub(super) fn render_create_request(ctx: &RenderContext<'_>, entity: &EntityModel) -> String {
    let fields = input_fields(entity);
    let annotations: Vec<Vec<String>> = fields
        .iter()
        .map(|f| {
            let mut out = validation_annotations(f);
            for declared in f.annotations.iter().filter(|a| is_validation_annotation(a)) {
                if !out.contains(declared) {
                    out.push(declared.clone());
                }
            }
            out
        })
        .collect();

    let mut imports = Imports::new();
    type_imports(ctx, &mut imports, fields.iter().copied());
    if annotations.iter().any(|a| !a.is_empty()) {
        imports.add(format!("{}.validation.constraints.*", ctx.ee()));
    }

    let mut code = Code::new();
    imports.write_header(&mut code, &ctx.subpackage("dto"));
    code.open(format!("public class {}CreateRequest {{", entity.name))
        .blank();
    for (field, annotations) in fields.iter().zip(&annotations) {
        for annotation in annotations {
            code.line(annotation);
        }
        code.line(format!("private {} {};", field.declared_type, field.name))
            .blank();
    }
    for field in &fields {
        accessors(&mut code, &field.declared_type, &field.name);
    }
    code.close("}");
    trim_trailing_blank(code.finish())
}

pub(super) fn render_response(ctx: &RenderContext<'_>, entity: &EntityModel, exposed: &[&Field]) -> String {
    let mut imports = Imports::new();
    imports.add("java.time.LocalDateTime");
    type_imports(ctx, &mut imports, exposed.iter().copied());

    let mut code = Code::new();
    imports.write_header(&mut code, &ctx.subpackage("dto"));
    code.open(format!("public class {}Response {{", entity.name))
        .blank()
        .line(format!("private {} id;", ctx.id_type()));
    for field in exposed {
        code.line(format!("private {} {};", field.declared_type, field.name));
    }
    code.line("private LocalDateTime createdAt;")
        .line("private LocalDateTime updatedAt;")
        .blank();

    accessors(&mut code, ctx.id_type(), "id");
    for field in exposed {
        accessors(&mut code, &field.declared_type, &field.name);
    }
    accessors(&mut code, "LocalDateTime", "createdAt");
    accessors(&mut code, "LocalDateTime", "updatedAt");
    code.close("}");
    trim_trailing_blank(code.finish())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
