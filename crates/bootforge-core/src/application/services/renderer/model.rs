//! Data-model classes and enumerations.

use crate::domain::{ArtifactKind, Cardinality, EntityModel, EnumModel, Field, Relationship, naming};

use super::{
    Location, ProjectFile, RenderContext, Storage,
    code::{Code, Imports, accessors, is_audit_field, is_validation_annotation, type_import},
};

/// An association property as it appears on the data model.
struct Association {
    java_type: String,
    name: String,
    annotations: Vec<String>,
    initializer: Option<&'static str>,
}

const MONGO_ID: &str = "org.springframework.data.annotation.Id";
const MONGO_DOCUMENT: &str = "org.springframework.data.mongodb.core.mapping.Document";
const MONGO_DBREF: &str = "org.springframework.data.mongodb.core.mapping.DBRef";

/// How this file spells the annotation `fqcn`: its simple name, or the
/// qualified name when an entity of that simple name is referenced here.
fn annotation_name<'a>(fqcn: &'a str, entity: &EntityModel) -> &'a str {
    let simple = fqcn.rsplit('.').next().unwrap_or(fqcn);
    let clashes = entity.name == simple || entity.relationships.iter().any(|r| r.target == simple);
    if clashes { fqcn } else { simple }
}

/// Import `fqcn` unless the file has to spell it out.
fn import_annotation(imports: &mut Imports, fqcn: &str, entity: &EntityModel) {
    if annotation_name(fqcn, entity) != fqcn {
        imports.add(fqcn);
    }
}

pub(super) fn render_entity(ctx: &RenderContext<'_>, entity: &EntityModel) -> String {
    let storage = ctx.storage();
    let ee = ctx.ee();
    let fields: Vec<&Field> = entity.fields.iter().filter(|f| !is_audit_field(f)).collect();
    let associations = associations(ctx, entity);

    let mut imports = Imports::new();
    imports.add("java.time.LocalDateTime");
    match storage {
        Storage::Relational => {
            imports
                .add(format!("{ee}.persistence.*"))
                .add("org.hibernate.annotations.CreationTimestamp")
                .add("org.hibernate.annotations.UpdateTimestamp");
        }
        Storage::Document => {
            import_annotation(&mut imports, MONGO_ID, entity);
            import_annotation(&mut imports, MONGO_DOCUMENT, entity);
            if !associations.is_empty() {
                import_annotation(&mut imports, MONGO_DBREF, entity);
            }
        }
        Storage::InMemory => {}
    }
    for field in &fields {
        if let Some(import) = type_import(&field.declared_type, ctx.is_enumeration(&field.declared_type), None) {
            imports.add(import);
        }
    }
    for assoc in &associations {
        if assoc.java_type.starts_with("List<") {
            imports.add("java.util.List").add("java.util.ArrayList");
        } else if assoc.java_type.starts_with("Set<") {
            imports.add("java.util.Set").add("java.util.HashSet");
        }
    }

    let field_annotations: Vec<Vec<String>> = fields
        .iter()
        .map(|f| property_annotations(ctx, f, storage))
        .collect();
    if field_annotations.iter().flatten().any(|a| is_validation_annotation(a)) {
        imports.add(format!("{ee}.validation.constraints.*"));
    }

    let mut code = Code::new();
    imports.write_header(&mut code, &ctx.subpackage("entity"));

    match storage {
        Storage::Relational => {
            code.line("@Entity")
                .line(format!("@Table(name = \"{}\")", naming::table_name(&entity.name)));
        }
        Storage::Document => {
            code.line(format!(
                "@{}(collection = \"{}\")",
                annotation_name(MONGO_DOCUMENT, entity),
                naming::table_name(&entity.name)
            ));
        }
        Storage::InMemory => {}
    }
    code.open(format!("public class {} {{", entity.name)).blank();

    // id
    match storage {
        Storage::Relational => {
            code.line("@Id")
                .line("@GeneratedValue(strategy = GenerationType.IDENTITY)");
        }
        Storage::Document => {
            code.line(format!("@{}", annotation_name(MONGO_ID, entity)));
        }
        Storage::InMemory => {}
    }
    code.line(format!("private {} id;", ctx.id_type())).blank();

    for (field, annotations) in fields.iter().zip(&field_annotations) {
        for annotation in annotations {
            code.line(annotation);
        }
        code.line(format!("private {} {};", field.declared_type, field.name))
            .blank();
    }

    for assoc in &associations {
        for annotation in &assoc.annotations {
            code.line(annotation);
        }
        match assoc.initializer {
            Some(init) => code.line(format!("private {} {} = {init};", assoc.java_type, assoc.name)),
            None => code.line(format!("private {} {};", assoc.java_type, assoc.name)),
        };
        code.blank();
    }

    match storage {
        Storage::Relational => {
            code.line("@CreationTimestamp")
                .line("@Column(name = \"created_at\", updatable = false)")
                .line("private LocalDateTime createdAt;")
                .blank()
                .line("@UpdateTimestamp")
                .line("@Column(name = \"updated_at\")")
                .line("private LocalDateTime updatedAt;")
                .blank();
        }
        Storage::Document | Storage::InMemory => {
            code.line("private LocalDateTime createdAt = LocalDateTime.now();")
                .blank()
                .line("private LocalDateTime updatedAt = LocalDateTime.now();")
                .blank();
        }
    }

    code.open(format!("public {}() {{", entity.name))
        .close("}")
        .blank();

    accessors(&mut code, ctx.id_type(), "id");
    for field in &fields {
        accessors(&mut code, &field.declared_type, &field.name);
    }
    for assoc in &associations {
        accessors(&mut code, &assoc.java_type, &assoc.name);
    }
    accessors(&mut code, "LocalDateTime", "createdAt");
    accessors(&mut code, "LocalDateTime", "updatedAt");

    code.close("}");
    trim_trailing_blank(code.finish())
}

/// Annotations for one scalar property.
///
/// Catalog annotations are persistence-specific, so only validation
/// annotations survive outside relational storage.
fn property_annotations(ctx: &RenderContext<'_>, field: &Field, storage: Storage) -> Vec<String> {
    let declared: Vec<String> = field
        .annotations
        .iter()
        .filter(|a| storage == Storage::Relational || is_validation_annotation(a))
        .cloned()
        .collect();
    if storage != Storage::Relational {
        return declared;
    }

    let mut out = declared;
    let has = |out: &[String], prefix: &str| out.iter().any(|a| a.starts_with(prefix));

    if ctx.is_enumeration(&field.declared_type) && !has(&out, "@Enumerated") {
        out.insert(0, "@Enumerated(EnumType.STRING)".to_string());
    }
    let managed = has(&out, "@Column")
        || has(&out, "@Lob")
        || has(&out, "@CreationTimestamp")
        || has(&out, "@UpdateTimestamp");
    if !managed {
        out.push(column_annotation(field));
    }
    out
}

fn column_annotation(field: &Field) -> String {
    use crate::domain::Constraint;

    let mut attrs = vec![format!("name = \"{}\"", naming::to_snake_case(&field.name))];
    if field.has_constraint(Constraint::Unique) {
        attrs.push("unique = true".into());
    }
    if field.has_constraint(Constraint::Required) {
        attrs.push("nullable = false".into());
    }
    if field.declared_type == "BigDecimal" {
        attrs.push("precision = 19".into());
        attrs.push("scale = 2".into());
    }
    format!("@Column({})", attrs.join(", "))
}

fn associations(ctx: &RenderContext<'_>, entity: &EntityModel) -> Vec<Association> {
    let storage = ctx.storage();
    entity
        .relationships
        .iter()
        .zip(entity.association_names())
        .filter_map(|(rel, name)| match storage {
            Storage::Relational => Some(relational(entity, rel, name)),
            Storage::Document => document(entity, rel, name),
            Storage::InMemory => plain(rel, name),
        })
        .collect()
}

fn collection_type(rel: &Relationship) -> (String, &'static str) {
    match rel.cardinality {
        Cardinality::ManyToMany => (format!("Set<{}>", rel.target), "new HashSet<>()"),
        _ => (format!("List<{}>", rel.target), "new ArrayList<>()"),
    }
}

fn relational(entity: &EntityModel, rel: &Relationship, name: String) -> Association {
    let mut annotations = Vec::new();
    let card = rel.cardinality.annotation();

    let (java_type, initializer) = if rel.cardinality.is_collection() {
        let (ty, init) = collection_type(rel);
        (ty, Some(init))
    } else {
        (rel.target.clone(), None)
    };

    match (rel.cardinality, &rel.mapped_by) {
        (Cardinality::OneToMany | Cardinality::ManyToMany | Cardinality::OneToOne, Some(mapped_by)) => {
            annotations.push(format!("@{card}(mappedBy = \"{mapped_by}\")"));
        }
        (Cardinality::OneToMany, None) => {
            annotations.push(format!("@{card}"));
            annotations.push(format!(
                "@JoinColumn(name = \"{}_id\")",
                naming::to_snake_case(&entity.name)
            ));
        }
        (Cardinality::ManyToMany, None) => {
            let table = rel.join_table.clone().unwrap_or_else(|| {
                format!(
                    "{}_{}",
                    naming::to_snake_case(&entity.name),
                    naming::table_name(&rel.target)
                )
            });
            annotations.push(format!("@{card}"));
            annotations.push(format!(
                "@JoinTable(name = \"{table}\", joinColumns = @JoinColumn(name = \"{}_id\"), inverseJoinColumns = @JoinColumn(name = \"{}_id\"))",
                naming::to_snake_case(&entity.name),
                naming::to_snake_case(&rel.target)
            ));
        }
        (Cardinality::ManyToOne | Cardinality::OneToOne, _) => {
            annotations.push(format!("@{card}(fetch = FetchType.LAZY)"));
            match &rel.via_field {
                Some(via) => annotations.push(format!(
                    "@JoinColumn(name = \"{}\", insertable = false, updatable = false)",
                    naming::to_snake_case(via)
                )),
                None => annotations.push(format!(
                    "@JoinColumn(name = \"{}_id\")",
                    naming::to_snake_case(&name)
                )),
            }
        }
    }

    Association {
        java_type,
        name,
        annotations,
        initializer,
    }
}

/// Document storage references owning sides only; the scalar key of an
/// inferred relationship already carries the link.
fn document(entity: &EntityModel, rel: &Relationship, name: String) -> Option<Association> {
    if rel.via_field.is_some() || rel.mapped_by.is_some() {
        return None;
    }
    let (java_type, initializer) = if rel.cardinality.is_collection() {
        let (ty, init) = collection_type(rel);
        (ty, Some(init))
    } else {
        (rel.target.clone(), None)
    };
    Some(Association {
        java_type,
        name,
        annotations: vec![format!("@{}(lazy = true)", annotation_name(MONGO_DBREF, entity))],
        initializer,
    })
}

fn plain(rel: &Relationship, name: String) -> Option<Association> {
    if rel.via_field.is_some() {
        return None;
    }
    let (java_type, initializer) = if rel.cardinality.is_collection() {
        let (ty, init) = collection_type(rel);
        (ty, Some(init))
    } else {
        (rel.target.clone(), None)
    };
    Some(Association {
        java_type,
        name,
        annotations: Vec::new(),
        initializer,
    })
}

pub(super) fn render_enum(ctx: &RenderContext<'_>, model: &EnumModel) -> ProjectFile {
    let mut code = Code::new();
    code.line(format!("package {};", ctx.subpackage("entity")))
        .blank()
        .open(format!("public enum {} {{", model.name));
    let last = model.constants.len().saturating_sub(1);
    for (i, constant) in model.constants.iter().enumerate() {
        if i == last {
            code.line(constant);
        } else {
            code.line(format!("{constant},"));
        }
    }
    code.close("}");

    ProjectFile::new(
        Location::Source(format!("entity/{}.java", model.name)),
        ArtifactKind::Enumeration,
        code.finish(),
    )
}

/// Drop the blank line left after the last member before the closing brace.
pub(super) fn trim_trailing_blank(source: String) -> String {
    source.replace("\n\n}\n", "\n}\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::api_analyzer::AnalyzedProject;
    use crate::application::services::renderer::tests::{blog, files_only, h2, mongo, shop, spec};
    use crate::domain::DatabaseProfile;

    fn entity_source(
        project: &AnalyzedProject,
        profile: Option<&DatabaseProfile>,
        name: &str,
        jakarta: bool,
    ) -> String {
        let spec = spec();
        let ctx = RenderContext::new(&spec, project, profile, jakarta);
        render_entity(&ctx, project.entity(name).unwrap())
    }

    #[test]
    fn relational_entity_has_id_table_and_audit_columns() {
        let source = entity_source(&shop(), Some(&h2()), "Product", true);
        assert!(source.starts_with("package com.acme.shopapi.entity;\n"));
        assert!(source.contains("import jakarta.persistence.*;"));
        assert!(source.contains("@Table(name = \"products\")"));
        assert!(source.contains("@GeneratedValue(strategy = GenerationType.IDENTITY)\n    private Long id;"));
        assert!(source.contains("@Column(name = \"price\", nullable = false, precision = 19, scale = 2)"));
        assert!(source.contains("@CreationTimestamp"));
        assert!(source.contains("public LocalDateTime getUpdatedAt()"));
        assert!(source.ends_with("    }\n}\n"));
    }

    #[test]
    fn legacy_framework_uses_javax() {
        let source = entity_source(&shop(), Some(&h2()), "Product", false);
        assert!(source.contains("import javax.persistence.*;"));
        assert!(!source.contains("jakarta"));
    }

    #[test]
    fn template_annotations_and_associations() {
        let source = entity_source(&blog(), Some(&h2()), "Article", true);
        assert!(source.contains("@Column(nullable = false)\n    private String title;"));
        assert!(source.contains("@Enumerated(EnumType.STRING)"));
        assert!(source.contains("@ManyToOne(fetch = FetchType.LAZY)\n    @JoinColumn(name = \"author_id\")\n    private Author author;"));

        let author = entity_source(&blog(), Some(&h2()), "Author", true);
        assert!(author.contains("@OneToMany(mappedBy = \"author\")"));
        assert!(author.contains("private List<Article> articles = new ArrayList<>();"));
        assert!(author.contains("import java.util.ArrayList;"));
    }

    #[test]
    fn inferred_foreign_key_is_read_only() {
        use crate::application::services::api_analyzer::ApiAnalyzer;
        use crate::domain::{ApiModel, FeatureToggles, Purpose};

        let project = ApiAnalyzer::default().analyze_custom(
            &[
                ApiModel::new("Customers", Purpose::Custom, "Customer").with_fields(["name"]),
                ApiModel::new("Orders", Purpose::OrderManagement, "Order")
                    .with_fields(["customerId", "totalAmount"]),
            ],
            FeatureToggles::default(),
        );
        let source = entity_source(&project, Some(&h2()), "Order", true);
        assert!(source.contains("private Long customerId;"));
        assert!(source.contains(
            "@JoinColumn(name = \"customer_id\", insertable = false, updatable = false)\n    private Customer customer;"
        ));
    }

    #[test]
    fn document_entity_skips_inverse_sides() {
        let source = entity_source(&blog(), Some(&mongo()), "Author", true);
        assert!(!source.contains("articles"));
        let article = entity_source(&blog(), Some(&mongo()), "Article", true);
        assert!(article.contains("@DBRef(lazy = true)\n    private Author author;"));
        assert!(!article.contains("@Column"));
    }

    #[test]
    fn document_entity_named_like_its_annotation() {
        use crate::application::services::api_analyzer::ApiAnalyzer;
        use crate::domain::{ApiModel, FeatureToggles, Purpose};

        let project = ApiAnalyzer::default().analyze_custom(
            &[ApiModel::new("Documents", Purpose::Custom, "Document").with_fields(["title"])],
            FeatureToggles {
                enable_persistence: true,
                enable_security: false,
            },
        );
        let source = entity_source(&project, Some(&mongo()), "Document", true);
        assert!(source.contains(
            "@org.springframework.data.mongodb.core.mapping.Document(collection = \"documents\")"
        ));
        assert!(!source.contains("import org.springframework.data.mongodb.core.mapping.Document;"));
        assert!(source.contains("import org.springframework.data.annotation.Id;"));
        assert!(source.contains("    @Id\n"));

        let article = entity_source(&blog(), Some(&mongo()), "Article", true);
        assert!(article.contains("import org.springframework.data.mongodb.core.mapping.Document;"));
        assert!(article.contains("@Document(collection = \"articles\")"));
    }

    #[test]
    fn in_memory_entity_is_a_plain_class() {
        let source = entity_source(&files_only(), None, "Document", true);
        assert!(source.contains("public class Document {"));
        assert!(!source.contains('@'));
        assert!(source.contains("private LocalDateTime createdAt = LocalDateTime.now();"));
    }

    #[test]
    fn enum_file() {
        let spec = spec();
        let project = blog();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let file = render_enum(&ctx, &project.enumerations[0]);
        assert_eq!(file.location, Location::Source("entity/ArticleStatus.java".into()));
        assert_eq!(
            file.content,
            "package com.acme.shopapi.entity;\n\npublic enum ArticleStatus {\n    DRAFT,\n    PUBLISHED\n}\n"
        );
    }
}
