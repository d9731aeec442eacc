//! End-to-end generation runs against the built-in catalog.

use std::{collections::BTreeSet, path::Path, sync::Arc};

use bootforge_adapters::{BuiltinCatalog, MemoryFilesystem, SpecFormat, SpecLoader};
use bootforge_core::{
    application::{GenerationService, ProjectWriter, services::Storage},
    domain::{
        ApiModel, ArtifactKind, CompatibilityMatrix, ProjectSpec, Purpose, WarningKind,
    },
};

fn service() -> GenerationService {
    GenerationService::new(Arc::new(BuiltinCatalog::new()), CompatibilityMatrix::builtin())
}

fn api(name: &str, purpose: Purpose, entity: &str) -> ApiModel {
    ApiModel::new(name, purpose, entity)
}

#[test]
fn legacy_framework_downgrades_the_runtime() {
    let spec = ProjectSpec::builder("Legacy")
        .runtime_version("21")
        .framework_version("2.7.17")
        .apis(vec![api("Products", Purpose::ProductCatalog, "Product")])
        .build()
        .unwrap();

    let generation = service().generate(&spec).unwrap();

    assert_eq!(generation.spec.runtime_version(), "11");
    let incompatible: Vec<_> = generation
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::ConfigIncompatibility)
        .collect();
    assert_eq!(incompatible.len(), 1);
    let pom = generation.file_set.get("pom.xml").unwrap();
    assert!(pom.contains("<java.version>11</java.version>"));
    assert!(pom.contains("2.7.17"));
}

#[test]
fn instagram_generates_one_artifact_group_per_entity() {
    let spec = ProjectSpec::builder("Gram")
        .template("instagram")
        .build()
        .unwrap();

    let generation = service().generate(&spec).unwrap();

    let catalog = BuiltinCatalog::new();
    let declared: BTreeSet<String> = bootforge_core::application::TemplateCatalog::find(
        &catalog,
        "instagram",
    )
    .unwrap()
    .entity_names()
    .map(str::to_string)
    .collect();
    let origins: BTreeSet<String> = generation
        .file_set
        .files()
        .filter(|f| f.origin != "project")
        .map(|f| f.origin.clone())
        .collect();
    assert_eq!(declared.len(), 8);
    assert_eq!(origins, declared);

    let per_entity = generation
        .file_set
        .files()
        .filter(|f| f.origin != "project")
        .count();
    assert_eq!(per_entity, 8 * ArtifactKind::PER_ENTITY.len());
    assert_eq!(generation.template.as_deref(), Some("instagram"));
    assert_eq!(generation.database_profile.as_deref(), Some("h2"));
    assert_eq!(generation.storage, Storage::Relational);
    assert!(
        generation
            .warnings
            .iter()
            .all(|w| w.kind != WarningKind::UnresolvedRelationship)
    );
}

#[test]
fn file_management_alone_needs_upload_only() {
    let spec = ProjectSpec::builder("Drive")
        .apis(vec![api("Files", Purpose::FileManagement, "Attachment")])
        .build()
        .unwrap();

    let generation = service().generate(&spec).unwrap();
    let result = &generation.project.result;

    assert!(result.needs_file_upload);
    assert!(!result.needs_authentication);
    assert!(!result.needs_persistence);
    assert_eq!(generation.storage, Storage::InMemory);
    assert!(generation.database_profile.is_none());
    assert!(
        generation
            .file_set
            .paths()
            .any(|p| p.ends_with("storage/FileStorageService.java"))
    );
    assert_eq!(generation.file_set.files_of_kind(ArtifactKind::Security).count(), 0);
}

#[test]
fn security_artifacts_are_emitted_once() {
    let single = ProjectSpec::builder("Auth")
        .apis(vec![api("Users", Purpose::UserManagement, "User")])
        .build()
        .unwrap();
    let double = ProjectSpec::builder("Auth")
        .apis(vec![
            api("Users", Purpose::UserManagement, "User"),
            api("Admins", Purpose::UserManagement, "Admin"),
        ])
        .build()
        .unwrap();

    let service = service();
    let one = service.generate(&single).unwrap();
    let two = service.generate(&double).unwrap();

    let security = |g: &bootforge_core::application::Generation| {
        g.file_set
            .files_of_kind(ArtifactKind::Security)
            .map(|f| f.path.clone())
            .collect::<Vec<_>>()
    };
    assert!(!security(&one).is_empty());
    assert_eq!(security(&one), security(&two));
    assert!(one.project.result.needs_persistence);
}

#[test]
fn generation_is_deterministic() {
    let spec = ProjectSpec::builder("Market")
        .template("zomato")
        .database_profile("postgresql")
        .build()
        .unwrap();

    let service = service();
    let first = service.generate(&spec).unwrap();
    let second = service.generate(&spec).unwrap();

    assert_eq!(
        first.file_set.paths().collect::<Vec<_>>(),
        second.file_set.paths().collect::<Vec<_>>()
    );
    assert_eq!(first.file_set, second.file_set);
}

#[test]
fn every_template_generates_cleanly() {
    let catalog = BuiltinCatalog::new();
    let service = service();
    for template in bootforge_core::application::TemplateCatalog::templates(&catalog) {
        let spec = ProjectSpec::builder("Clone")
            .template(&template.id)
            .build()
            .unwrap();
        let generation = service
            .generate(&spec)
            .unwrap_or_else(|e| panic!("{} failed: {e}", template.id));
        // Non-CRUD routes such as `PUT /api/users/profile` become stubs.
        assert!(
            generation
                .warnings
                .iter()
                .all(|w| w.kind == WarningKind::UnrecognizedEndpoint),
            "{}: {:?}",
            template.id,
            generation.warnings
        );
        assert!(generation.file_set.contains("pom.xml"));
    }
}

#[test]
fn mongodb_profile_switches_to_documents() {
    let spec = ProjectSpec::builder("Docs")
        .template("canva")
        .database_profile("mongodb")
        .build()
        .unwrap();

    let generation = service().generate(&spec).unwrap();

    assert_eq!(generation.storage, Storage::Document);
    assert!(!generation.file_set.contains("src/main/resources/data.sql"));
    let properties = generation
        .file_set
        .get("src/main/resources/application.properties")
        .unwrap();
    assert!(properties.contains("spring.data.mongodb.database=docs"));
}

#[test]
fn loaded_spec_writes_through_the_memory_filesystem() {
    let spec = SpecLoader::new()
        .parse(
            r#"{
                "name": "Shop API",
                "namespace": "com.acme",
                "apis": [
                    { "name": "Products", "purpose": "product-catalog", "entity": "Product",
                      "fields": ["name", "price", "stock"] }
                ]
            }"#,
            SpecFormat::Json,
            Path::new("shop.json"),
        )
        .unwrap();
    let generation = service().generate(&spec).unwrap();

    let fs = MemoryFilesystem::new();
    let writer = ProjectWriter::new(Box::new(fs.clone()));
    let report = writer
        .write(&generation.file_set, Path::new("/out/shop-api"), false)
        .unwrap();

    assert_eq!(report.files, generation.file_set.len());
    assert_eq!(fs.file_count(), generation.file_set.len());
    let entity = fs
        .read_file(Path::new(
            "/out/shop-api/src/main/java/com/acme/shopapi/entity/Product.java",
        ))
        .unwrap();
    assert!(entity.contains("class Product"));
    assert!(writer.write(&generation.file_set, Path::new("/out/shop-api"), false).is_err());
}
