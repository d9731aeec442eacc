//! Integration tests for bootforge-core: catalog -> engine -> writer.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bootforge_core::{
    application::{ApplicationError, CatalogService, Filesystem, GenerationService, ProjectWriter, TemplateCatalog},
    domain::{
        ApiModel, Cardinality, CompatibilityMatrix, DatabaseProfile, EntityModel, Field,
        MavenDependency, ProjectSpec, Purpose, Relationship, StorageStyle, TemplateEntry,
        WarningKind,
    },
    error::{BootforgeError, BootforgeResult},
};

// ── Fixtures ──────────────────────────────────────────────────────────────────

struct Catalog {
    templates: Vec<TemplateEntry>,
    profiles: Vec<DatabaseProfile>,
}

impl TemplateCatalog for Catalog {
    fn templates(&self) -> &[TemplateEntry] {
        &self.templates
    }

    fn default_template_id(&self) -> &str {
        "blog"
    }

    fn database_profiles(&self) -> &[DatabaseProfile] {
        &self.profiles
    }

    fn default_database_profile_id(&self) -> &str {
        "h2"
    }
}

fn catalog() -> Arc<Catalog> {
    let blog = TemplateEntry {
        id: "blog".into(),
        name: "Blog".into(),
        description: "Posts and comments".into(),
        entities: vec![
            EntityModel::new("Post")
                .with_field(Field::new("title", "String"))
                .with_field(Field::new("body", "String")),
            EntityModel::new("Comment")
                .with_field(Field::new("text", "String"))
                .with_relationship(Relationship::new("Post", Cardinality::ManyToOne)),
        ],
        enumerations: Vec::new(),
        apis: vec![ApiModel::new("Posts", Purpose::ContentManagement, "Post")],
    };
    let h2 = DatabaseProfile {
        id: "h2".into(),
        name: "H2".into(),
        description: "In-memory database".into(),
        features: vec!["Embedded".into()],
        use_case: "Development".into(),
        storage: StorageStyle::Relational,
        properties: vec![(
            "spring.datasource.url".into(),
            "jdbc:h2:mem:{dbname}".into(),
        )],
        dependencies: vec![MavenDependency::new("com.h2database", "h2").scope("runtime")],
    };
    Arc::new(Catalog {
        templates: vec![blog],
        profiles: vec![h2],
    })
}

#[derive(Default)]
struct Disk {
    dirs: Mutex<BTreeSet<PathBuf>>,
    files: Mutex<BTreeMap<PathBuf, String>>,
    fail_on: Option<&'static str>,
}

/// Records writes in memory; fails any write whose path ends with `fail_on`.
/// Clones share one disk.
#[derive(Clone, Default)]
struct RecordingFs(Arc<Disk>);

impl RecordingFs {
    fn failing_on(suffix: &'static str) -> Self {
        Self(Arc::new(Disk {
            fail_on: Some(suffix),
            ..Disk::default()
        }))
    }

    fn file_count(&self) -> usize {
        self.0.files.lock().unwrap().len()
    }

    fn read(&self, path: &Path) -> Option<String> {
        self.0.files.lock().unwrap().get(path).cloned()
    }
}

impl Filesystem for RecordingFs {
    fn create_dir_all(&self, path: &Path) -> BootforgeResult<()> {
        self.0.dirs.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> BootforgeResult<()> {
        if self.0.fail_on.is_some_and(|s| path.to_string_lossy().ends_with(s)) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into());
        }
        self.0.files.lock().unwrap().insert(path.to_path_buf(), content.into());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.dirs.lock().unwrap().contains(path) || self.0.files.lock().unwrap().contains_key(path)
    }

    fn remove_dir_all(&self, path: &Path) -> BootforgeResult<()> {
        self.0.dirs.lock().unwrap().retain(|d| !d.starts_with(path));
        self.0.files.lock().unwrap().retain(|f, _| !f.starts_with(path));
        Ok(())
    }
}

fn engine() -> GenerationService {
    GenerationService::new(catalog(), CompatibilityMatrix::builtin())
}

// ── Workflows ─────────────────────────────────────────────────────────────────

#[test]
fn test_template_workflow_writes_every_file() {
    let catalog = CatalogService::new(catalog());
    let listed = catalog.list_templates();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].entities, ["Post", "Comment"]);

    let spec = ProjectSpec::builder("My Blog").template("blog").build().unwrap();
    let generation = engine().generate(&spec).unwrap();
    assert_eq!(generation.spec.artifact_id(), "my-blog");
    assert_eq!(generation.database_profile.as_deref(), Some("h2"));

    let fs = RecordingFs::default();
    let writer = ProjectWriter::new(Box::new(fs.clone()));
    let root = Path::new("/out/my-blog");
    let report = writer.write(&generation.file_set, root, false).unwrap();

    assert_eq!(report.files, generation.file_set.len());
    assert_eq!(report.bytes, generation.file_set.total_bytes());
    assert!(!report.replaced);

    assert_eq!(fs.file_count(), generation.file_set.len());
    assert!(fs.exists(&root.join("pom.xml")));
    assert!(fs.exists(&root.join("src/main/java/com/example/myblog/entity/Comment.java")));
    let properties = fs
        .read(&root.join("src/main/resources/application.properties"))
        .unwrap();
    assert!(properties.contains("jdbc:h2:mem:my_blog"));
}

#[test]
fn test_custom_workflow_with_authentication() {
    let spec = ProjectSpec::builder("Accounts")
        .namespace("org.acme")
        .apis(vec![
            ApiModel::new("Users", Purpose::UserManagement, "User")
                .with_fields(["username", "email", "password"]),
        ])
        .build()
        .unwrap();

    let analysis = engine().analyze(&spec).unwrap();
    assert!(analysis.project.result.needs_authentication);
    assert!(analysis.project.result.needs_persistence);

    let generation = engine().generate(&spec).unwrap();
    assert!(
        generation
            .file_set
            .contains("src/main/java/org/acme/accounts/config/SecurityConfig.java")
    );
    let pom = generation.file_set.get("pom.xml").unwrap();
    assert!(pom.contains("spring-boot-starter-security"));
}

#[test]
fn test_unknown_template_falls_back_with_warning() {
    let spec = ProjectSpec::builder("Social").template("myspace").build().unwrap();
    let generation = engine().generate(&spec).unwrap();
    assert_eq!(generation.template.as_deref(), Some("blog"));
    assert!(generation.warnings.iter().any(|w| w.kind == WarningKind::UnknownTemplate));
}

#[test]
fn test_catalog_service_rejects_unknown_template() {
    let err = CatalogService::new(catalog()).describe_template("myspace").unwrap_err();
    assert!(err.to_string().contains("myspace"));
}

// ── Writer guarantees ─────────────────────────────────────────────────────────

#[test]
fn test_existing_root_is_kept_without_overwrite() {
    let spec = ProjectSpec::builder("Blog").template("blog").build().unwrap();
    let generation = engine().generate(&spec).unwrap();

    let fs = RecordingFs::default();
    let root = Path::new("/out/blog");
    fs.create_dir_all(root).unwrap();
    fs.write_file(&root.join("notes.txt"), "keep").unwrap();

    let writer = ProjectWriter::new(Box::new(fs.clone()));
    let err = writer.write(&generation.file_set, root, false).unwrap_err();
    assert!(matches!(
        err,
        BootforgeError::Application(ApplicationError::ProjectExists { .. })
    ));
    assert!(fs.exists(&root.join("notes.txt")));

    let report = writer.write(&generation.file_set, root, true).unwrap();
    assert!(report.replaced);
    assert!(!fs.exists(&root.join("notes.txt")));
}

#[test]
fn test_failed_write_leaves_nothing_behind() {
    let spec = ProjectSpec::builder("Blog").template("blog").build().unwrap();
    let generation = engine().generate(&spec).unwrap();

    let fs = RecordingFs::failing_on("application.properties");
    let writer = ProjectWriter::new(Box::new(fs.clone()));
    let root = Path::new("/out/blog");

    assert!(writer.write(&generation.file_set, root, false).is_err());
    assert!(!fs.exists(root));
    assert_eq!(fs.file_count(), 0);
}
