//! Project-level files: build descriptor, properties, entry point, README.

use crate::domain::{
    ArtifactKind, CompatibilityMatrix, Field, MavenDependency, Packaging, naming,
};

use super::{
    Location, ProjectFile, RenderContext, Storage,
    code::{Code, fill},
    controller::classify,
    dto::input_fields,
};

const BOOT: &str = "org.springframework.boot";
const JJWT_VERSION: &str = "0.11.5";
const COMMONS_FILEUPLOAD_VERSION: &str = "1.4";
const JWT_SECRET: &str = "change-this-secret-before-deploying-it-anywhere-0123456789";
const JWT_EXPIRATION_MS: u64 = 86_400_000;

fn starter(name: &str) -> MavenDependency {
    MavenDependency::new(BOOT, format!("spring-boot-starter-{name}"))
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Dependencies contributed by the analysis, then the requested extras,
/// de-duplicated by `group:artifact`. Unknown bare ids come back as comments.
fn pom_dependencies(
    ctx: &RenderContext<'_>,
    matrix: &CompatibilityMatrix,
) -> (Vec<MavenDependency>, Vec<String>) {
    let analysis = ctx.analysis();
    let mut deps = vec![starter("web"), starter("validation")];

    if analysis.needs_persistence {
        match ctx.storage() {
            Storage::Document => {}
            Storage::Relational | Storage::InMemory => deps.push(starter("data-jpa")),
        }
        match ctx.profile {
            Some(profile) => deps.extend(profile.dependencies.iter().cloned()),
            None => deps.push(MavenDependency::new("com.h2database", "h2").scope("runtime")),
        }
    }
    if analysis.needs_authentication {
        deps.push(starter("security"));
        deps.push(MavenDependency::new("io.jsonwebtoken", "jjwt-api").version(JJWT_VERSION));
        deps.push(
            MavenDependency::new("io.jsonwebtoken", "jjwt-impl")
                .version(JJWT_VERSION)
                .scope("runtime"),
        );
        deps.push(
            MavenDependency::new("io.jsonwebtoken", "jjwt-jackson")
                .version(JJWT_VERSION)
                .scope("runtime"),
        );
    }
    if analysis.needs_file_upload {
        deps.push(
            MavenDependency::new("commons-fileupload", "commons-fileupload")
                .version(COMMONS_FILEUPLOAD_VERSION),
        );
    }
    if analysis.needs_notifications {
        deps.push(starter("mail"));
    }

    let mut unknown = Vec::new();
    for id in ctx.spec.dependencies() {
        if let Some(def) = matrix.find_dependency(id) {
            let mut dep = MavenDependency::new(def.group_id, def.artifact_id);
            if let Some(scope) = def.scope {
                dep = dep.scope(scope);
            }
            deps.push(dep);
        } else if let Some(dep) = parse_coordinates(id) {
            deps.push(dep);
        } else {
            unknown.push(id.clone());
        }
    }

    if ctx.spec.packaging() == Packaging::War {
        deps.push(starter("tomcat").scope("provided"));
    }
    deps.push(starter("test").scope("test"));

    let mut seen = std::collections::HashSet::new();
    deps.retain(|d| seen.insert(d.key()));
    (deps, unknown)
}

/// `group:artifact[:version]`
fn parse_coordinates(id: &str) -> Option<MavenDependency> {
    let mut parts = id.split(':').map(str::trim);
    let group = parts.next().filter(|s| !s.is_empty())?;
    let artifact = parts.next().filter(|s| !s.is_empty())?;
    let dep = MavenDependency::new(group, artifact);
    match parts.next().filter(|s| !s.is_empty()) {
        Some(version) => Some(dep.version(version)),
        None => Some(dep),
    }
}

pub(super) fn build_descriptor(ctx: &RenderContext<'_>, matrix: &CompatibilityMatrix) -> ProjectFile {
    let spec = ctx.spec;
    let (deps, unknown) = pom_dependencies(ctx, matrix);

    let mut out = Code::new();
    out.line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.line(concat!(
        r#"<project xmlns="http://maven.apache.org/POM/4.0.0""#,
        r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#
    ));
    out.line(concat!(
        r#"         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0""#,
        r#" https://maven.apache.org/xsd/maven-4.0.0.xsd">"#
    ));
    out.line("    <modelVersion>4.0.0</modelVersion>");
    out.blank();
    out.line("    <parent>");
    out.line(format!("        <groupId>{BOOT}</groupId>"));
    out.line("        <artifactId>spring-boot-starter-parent</artifactId>");
    out.line(format!("        <version>{}</version>", spec.framework_version()));
    out.line("        <relativePath/>");
    out.line("    </parent>");
    out.blank();
    out.line(format!("    <groupId>{}</groupId>", spec.namespace()));
    out.line(format!("    <artifactId>{}</artifactId>", spec.artifact_id()));
    out.line("    <version>0.0.1-SNAPSHOT</version>");
    out.line(format!("    <packaging>{}</packaging>", spec.packaging()));
    out.line(format!("    <name>{}</name>", xml_escape(spec.name())));
    out.line(format!("    <description>{}</description>", xml_escape(spec.description())));
    out.blank();
    out.line("    <properties>");
    out.line(format!("        <java.version>{}</java.version>", spec.runtime_version()));
    out.line("    </properties>");
    out.blank();
    out.line("    <dependencies>");
    for dep in &deps {
        out.line("        <dependency>");
        out.line(format!("            <groupId>{}</groupId>", dep.group_id));
        out.line(format!("            <artifactId>{}</artifactId>", dep.artifact_id));
        if let Some(version) = &dep.version {
            out.line(format!("            <version>{version}</version>"));
        }
        if let Some(scope) = &dep.scope {
            out.line(format!("            <scope>{scope}</scope>"));
        }
        out.line("        </dependency>");
    }
    for id in &unknown {
        out.line(format!(
            "        <!-- Unknown dependency '{}': add its coordinates here -->",
            xml_escape(id).replace("--", "- -")
        ));
    }
    out.line("    </dependencies>");
    out.blank();
    out.line("    <build>");
    out.line("        <plugins>");
    out.line("            <plugin>");
    out.line(format!("                <groupId>{BOOT}</groupId>"));
    out.line("                <artifactId>spring-boot-maven-plugin</artifactId>");
    out.line("            </plugin>");
    out.line("        </plugins>");
    out.line("    </build>");
    out.line("</project>");

    ProjectFile::new(Location::Root("pom.xml".into()), ArtifactKind::BuildDescriptor, out.finish())
}

pub(super) fn properties(ctx: &RenderContext<'_>) -> ProjectFile {
    let spec = ctx.spec;
    let analysis = ctx.analysis();
    let mut out = Code::new();

    out.line("# Server");
    out.line(format!("server.port={}", spec.server_port()));
    out.line(format!("spring.application.name={}", spec.artifact_id()));
    out.line(format!("spring.profiles.active={}", spec.active_profile()));
    out.blank();
    out.line("# Logging");
    out.line("logging.level.root=INFO");
    out.line(format!("logging.level.{}=DEBUG", ctx.package()));

    if analysis.needs_persistence {
        if let Some(profile) = ctx.profile {
            out.blank();
            out.line(format!("# Database ({})", profile.name));
            for (key, value) in profile.render_properties(&spec.database_name()) {
                out.line(format!("{key}={value}"));
            }
            if profile.is_relational() {
                out.line("spring.jpa.defer-datasource-initialization=true");
            }
        }
    }

    if analysis.needs_file_upload {
        out.blank();
        out.line("# File upload");
        out.line("spring.servlet.multipart.enabled=true");
        out.line("spring.servlet.multipart.max-file-size=10MB");
        out.line("spring.servlet.multipart.max-request-size=10MB");
        out.line("file.upload-dir=./uploads");
    }

    if analysis.needs_authentication {
        out.blank();
        out.line("# JWT");
        out.line(format!("jwt.secret={JWT_SECRET}"));
        out.line(format!("jwt.expiration={JWT_EXPIRATION_MS}"));
    }

    if analysis.needs_notifications {
        out.blank();
        out.line("# Mail");
        out.line("spring.mail.host=localhost");
        out.line("spring.mail.port=587");
        out.line("notification.from=noreply@example.com");
    }

    ProjectFile::new(
        Location::Resources("application.properties".into()),
        ArtifactKind::Properties,
        out.finish(),
    )
}

const APPLICATION: &str = r#"package {{PACKAGE}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class {{CLASS}} {

    public static void main(String[] args) {
        SpringApplication.run({{CLASS}}.class, args);
    }
}
"#;

const WAR_APPLICATION: &str = r#"package {{PACKAGE}};

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;
import org.springframework.boot.builder.SpringApplicationBuilder;
import org.springframework.boot.web.servlet.support.SpringBootServletInitializer;

@SpringBootApplication
public class {{CLASS}} extends SpringBootServletInitializer {

    @Override
    protected SpringApplicationBuilder configure(SpringApplicationBuilder builder) {
        return builder.sources({{CLASS}}.class);
    }

    public static void main(String[] args) {
        SpringApplication.run({{CLASS}}.class, args);
    }
}
"#;

pub(super) fn application(ctx: &RenderContext<'_>) -> ProjectFile {
    let class = ctx.spec.application_class();
    let template = match ctx.spec.packaging() {
        Packaging::Jar => APPLICATION,
        Packaging::War => WAR_APPLICATION,
    };
    ProjectFile::new(
        Location::Source(format!("{class}.java")),
        ArtifactKind::Application,
        fill(template, &[("PACKAGE", ctx.package()), ("CLASS", &class)]),
    )
}

const WEB_CONFIG: &str = r#"package {{PACKAGE}}.config;

import org.springframework.context.annotation.Configuration;
import org.springframework.web.servlet.config.annotation.CorsRegistry;
import org.springframework.web.servlet.config.annotation.WebMvcConfigurer;

@Configuration
public class WebConfig implements WebMvcConfigurer {

    @Override
    public void addCorsMappings(CorsRegistry registry) {
        registry.addMapping("/api/**")
                .allowedOrigins("http://localhost:3000")
                .allowedMethods("GET", "POST", "PUT", "PATCH", "DELETE", "OPTIONS");
    }
}
"#;

pub(super) fn web_config(ctx: &RenderContext<'_>) -> ProjectFile {
    ProjectFile::new(
        Location::Source("config/WebConfig.java".into()),
        ArtifactKind::Configuration,
        fill(WEB_CONFIG, &[("PACKAGE", ctx.package())]),
    )
}

/// SQL literal used as a placeholder value in commented seed rows.
fn sample_value(ctx: &RenderContext<'_>, field: &Field) -> String {
    match field.declared_type.as_str() {
        "String" => format!("'{}'", field.name),
        "BigDecimal" | "Double" | "Float" => "0.00".to_string(),
        "Integer" | "Long" | "Short" => "0".to_string(),
        "Boolean" => "FALSE".to_string(),
        "LocalDateTime" | "Instant" => "CURRENT_TIMESTAMP".to_string(),
        "LocalDate" => "CURRENT_DATE".to_string(),
        other => ctx
            .project
            .enumerations
            .iter()
            .find(|e| e.name == other)
            .and_then(|e| e.constants.first())
            .map(|c| format!("'{c}'"))
            .unwrap_or_else(|| "NULL".to_string()),
    }
}

pub(super) fn seed_data(ctx: &RenderContext<'_>) -> ProjectFile {
    let mut out = Code::new();
    out.line(format!("-- Seed data for {}.", ctx.spec.name()));
    out.line("-- Uncomment and adjust the statements below to preload rows.");
    for entity in &ctx.project.entities {
        let fields = input_fields(entity);
        out.blank();
        out.line(format!("-- {}", entity.name));
        if fields.is_empty() {
            out.line(format!(
                "-- INSERT INTO {} DEFAULT VALUES;",
                naming::table_name(&entity.name)
            ));
            continue;
        }
        let columns: Vec<String> = fields.iter().map(|f| naming::to_snake_case(&f.name)).collect();
        let values: Vec<String> = fields.iter().map(|f| sample_value(ctx, f)).collect();
        out.line(format!(
            "-- INSERT INTO {} ({}) VALUES ({});",
            naming::table_name(&entity.name),
            columns.join(", "),
            values.join(", ")
        ));
    }
    ProjectFile::new(Location::Resources("data.sql".into()), ArtifactKind::SeedData, out.finish())
}

const APPLICATION_TEST: &str = r#"package {{PACKAGE}};

import org.junit.jupiter.api.Test;
import org.springframework.boot.test.context.SpringBootTest;

@SpringBootTest
class {{CLASS}}Tests {

    @Test
    void contextLoads() {
    }
}
"#;

pub(super) fn application_test(ctx: &RenderContext<'_>) -> ProjectFile {
    let class = ctx.spec.application_class();
    ProjectFile::new(
        Location::TestSource(format!("{class}Tests.java")),
        ArtifactKind::Test,
        fill(APPLICATION_TEST, &[("PACKAGE", ctx.package()), ("CLASS", &class)]),
    )
}

pub(super) fn readme(ctx: &RenderContext<'_>) -> ProjectFile {
    let spec = ctx.spec;
    let analysis = ctx.analysis();
    let mut out = Code::new();

    out.line(format!("# {}", spec.name()));
    out.blank();
    out.line(spec.description());
    out.blank();

    out.line("## Features");
    out.blank();
    if ctx.project.apis.is_empty() {
        for entity in &ctx.project.entities {
            out.line(format!("- **{}**: CRUD endpoints", entity.name));
        }
    }
    for api in &ctx.project.apis {
        out.line(format!("### {}", api.name));
        out.blank();
        if !api.description.is_empty() {
            out.line(&api.description);
            out.blank();
        }
        out.line(format!("- Purpose: {}", api.purpose.display_name()));
        out.line(format!("- Entity: `{}`", api.entity));
        if !api.endpoints.is_empty() {
            out.line("- Endpoints:");
            for endpoint in &api.endpoints {
                let marker = if classify(endpoint).is_some() { "" } else { " (stub)" };
                out.line(format!("  - `{endpoint}`{marker}"));
            }
        }
        if let Some(entity) = ctx.project.entity(&api.entity) {
            let names: Vec<&str> = entity.fields.iter().map(|f| f.name.as_str()).collect();
            if !names.is_empty() {
                out.line(format!("- Fields: {}", names.join(", ")));
            }
        }
        out.blank();
    }
    let mut capabilities = Vec::new();
    if analysis.needs_authentication {
        capabilities.push("JWT authentication");
    }
    if analysis.needs_file_upload {
        capabilities.push("file upload");
    }
    if analysis.needs_notifications {
        capabilities.push("email notifications");
    }
    if analysis.needs_validation {
        capabilities.push("request validation");
    }
    if !capabilities.is_empty() {
        out.line(format!("Also included: {}.", capabilities.join(", ")));
        out.blank();
    }

    out.line("## Getting Started");
    out.blank();
    out.line("Prerequisites:");
    out.blank();
    out.line(format!("- Java {}", spec.runtime_version()));
    out.line("- Maven 3.6+");
    out.blank();
    out.line("```bash");
    out.line("mvn spring-boot:run");
    out.line("```");
    out.blank();

    out.line("## API");
    out.blank();
    for entity in &ctx.project.entities {
        out.line(format!(
            "- `{}`: http://localhost:{}/api/{}",
            entity.name,
            spec.server_port(),
            naming::collection_segment(&entity.name)
        ));
    }
    out.blank();

    out.line("## Database");
    out.blank();
    match (ctx.storage(), ctx.profile) {
        (Storage::InMemory, _) => {
            out.line("No database: data is kept in memory and lost on restart.");
        }
        (_, Some(profile)) => {
            out.line(format!("**{}**: {}", profile.name, profile.description));
            if !profile.use_case.is_empty() {
                out.blank();
                out.line(format!("Best for: {}", profile.use_case));
            }
            out.blank();
            out.line("Connection settings live in `src/main/resources/application.properties`.");
        }
        (_, None) => {
            out.line("Embedded H2 database with default settings.");
        }
    }
    out.blank();

    out.line("## Project Structure");
    out.blank();
    out.line("```");
    out.line(format!("src/main/java/{}/", spec.package_dir()));
    let mut packages = vec!["config", "controller", "dto", "entity"];
    if analysis.needs_notifications {
        packages.push("notification");
    }
    if analysis.needs_persistence {
        packages.push("repository");
    }
    if analysis.needs_authentication {
        packages.push("security");
    }
    packages.push("service");
    if analysis.needs_file_upload {
        packages.push("storage");
    }
    if ctx.storage() == Storage::InMemory {
        packages.push("support");
    }
    for package in packages {
        out.line(format!("├── {package}/"));
    }
    out.line(format!("└── {}.java", spec.application_class()));
    out.line("```");
    out.blank();

    out.line("## License");
    out.blank();
    out.line("MIT");

    ProjectFile::new(Location::Root("README.md".into()), ArtifactKind::Documentation, out.finish())
}

const GITIGNORE: &str = "target/
!.mvn/wrapper/maven-wrapper.jar
*.class
*.log
uploads/

### IntelliJ IDEA ###
.idea/
*.iml

### Eclipse ###
.classpath
.project
.settings/

### VS Code ###
.vscode/

.DS_Store
";

pub(super) fn gitignore() -> ProjectFile {
    ProjectFile::new(
        Location::Root(".gitignore".into()),
        ArtifactKind::Documentation,
        GITIGNORE.to_string(),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::api_analyzer::AnalyzedProject;
    use crate::application::services::renderer::tests::{blog, files_only, h2, mongo, shop};
    use crate::domain::{DatabaseProfile, ProjectSpec};

    fn ctx_spec(deps: &[&str], packaging: Packaging) -> ProjectSpec {
        ProjectSpec::builder("Shop API")
            .namespace("com.acme")
            .description("Shops & <things>")
            .dependencies(deps.iter().copied())
            .packaging(packaging)
            .build()
            .unwrap()
    }

    fn pom(project: &AnalyzedProject, profile: Option<&DatabaseProfile>, deps: &[&str]) -> String {
        let spec = ctx_spec(deps, Packaging::Jar);
        let ctx = RenderContext::new(&spec, project, profile, true);
        build_descriptor(&ctx, &CompatibilityMatrix::builtin()).content
    }

    // ── pom.xml ─────────────────────────────────────────────────────────────

    #[test]
    fn pom_carries_coordinates_and_versions() {
        let source = pom(&blog(), Some(&h2()), &[]);
        assert!(source.contains("<version>3.3.0</version>\n        <relativePath/>"));
        assert!(source.contains("<groupId>com.acme</groupId>"));
        assert!(source.contains("<artifactId>shop-api</artifactId>"));
        assert!(source.contains("<java.version>17</java.version>"));
        assert!(source.contains("<description>Shops &amp; &lt;things&gt;</description>"));
        assert!(source.contains("<artifactId>spring-boot-maven-plugin</artifactId>"));
    }

    #[test]
    fn persistence_adds_jpa_and_profile_drivers() {
        let source = pom(&blog(), Some(&h2()), &[]);
        assert!(source.contains("spring-boot-starter-data-jpa"));
        assert!(source.contains("<artifactId>h2</artifactId>\n            <scope>runtime</scope>"));

        let mongo_pom = pom(&blog(), Some(&mongo()), &[]);
        assert!(!mongo_pom.contains("data-jpa"));
        assert!(mongo_pom.contains("spring-boot-starter-data-mongodb"));

        let in_memory = pom(&files_only(), None, &[]);
        assert!(!in_memory.contains("data-jpa"));
        assert!(in_memory.contains("<artifactId>commons-fileupload</artifactId>\n            <version>1.4</version>"));
    }

    #[test]
    fn authentication_adds_security_and_jjwt() {
        let source = pom(&shop(), Some(&h2()), &[]);
        assert!(source.contains("spring-boot-starter-security"));
        assert_eq!(source.matches("<version>0.11.5</version>").count(), 3);
    }

    #[test]
    fn requested_dependencies_are_resolved_and_deduplicated() {
        let source = pom(
            &blog(),
            Some(&h2()),
            &["web", "actuator", "org.projectlombok:lombok:1.18.30", "mystery"],
        );
        assert_eq!(source.matches("<artifactId>spring-boot-starter-web</artifactId>").count(), 1);
        assert!(source.contains("spring-boot-starter-actuator"));
        assert!(source.contains("<artifactId>lombok</artifactId>\n            <version>1.18.30</version>"));
        assert!(source.contains("<!-- Unknown dependency 'mystery'"));
        let test_pos = source.find("spring-boot-starter-test").unwrap();
        assert!(source.find("lombok").unwrap() < test_pos);
    }

    #[test]
    fn war_packaging() {
        let spec = ctx_spec(&[], Packaging::War);
        let project = blog();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let pom = build_descriptor(&ctx, &CompatibilityMatrix::builtin()).content;
        assert!(pom.contains("<packaging>war</packaging>"));
        assert!(pom.contains("<artifactId>spring-boot-starter-tomcat</artifactId>\n            <scope>provided</scope>"));
        let app = application(&ctx).content;
        assert!(app.contains("public class ShopApiApplication extends SpringBootServletInitializer {"));
    }

    // ── properties ──────────────────────────────────────────────────────────

    #[test]
    fn properties_blocks_follow_requirements() {
        let spec = ctx_spec(&[], Packaging::Jar);
        let project = shop();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let props = properties(&ctx).content;
        assert!(props.starts_with("# Server\nserver.port=8080\nspring.application.name=shop-api\n"));
        assert!(props.contains("spring.datasource.url=jdbc:h2:mem:shop_api"));
        assert!(props.contains("spring.jpa.defer-datasource-initialization=true"));
        assert!(props.contains("jwt.secret="));
        assert!(!props.contains("multipart"));

        let files = files_only();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &files, Some(&profile), true);
        let props = properties(&ctx).content;
        assert!(props.contains("spring.servlet.multipart.max-file-size=10MB"));
        assert!(props.contains("file.upload-dir=./uploads"));
        assert!(!props.contains("datasource"));
    }

    // ── the rest ────────────────────────────────────────────────────────────

    #[test]
    fn seed_data_uses_table_and_column_names() {
        let spec = ctx_spec(&[], Packaging::Jar);
        let project = blog();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let sql = seed_data(&ctx).content;
        assert!(sql.contains("-- INSERT INTO articles (title, status) VALUES ('title', 'DRAFT');"));
        assert!(sql.contains("-- INSERT INTO authors (email, password) VALUES ('email', 'password');"));
        assert!(sql.lines().all(|l| l.is_empty() || l.starts_with("--")));
    }

    #[test]
    fn readme_sections() {
        let spec = ctx_spec(&[], Packaging::Jar);
        let project = shop();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let readme = readme(&ctx).content;
        for heading in [
            "# Shop API",
            "## Features",
            "## Getting Started",
            "## API",
            "## Database",
            "## Project Structure",
            "## License",
        ] {
            assert!(readme.contains(heading), "missing {heading}");
        }
        assert!(readme.contains("- Java 17\n- Maven 3.6+"));
        assert!(readme.contains("http://localhost:8080/api/products"));
        assert!(readme.contains("`PATCH /api/products/{id}/price` (stub)"));
        assert!(readme.contains("├── security/"));
    }

    #[test]
    fn application_and_test_class_names() {
        let spec = ctx_spec(&[], Packaging::Jar);
        let project = blog();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let app = application(&ctx);
        assert_eq!(app.location, Location::Source("ShopApiApplication.java".into()));
        assert!(app.content.contains("SpringApplication.run(ShopApiApplication.class, args);"));
        let test = application_test(&ctx);
        assert_eq!(test.location, Location::TestSource("ShopApiApplicationTests.java".into()));
        assert!(test.content.contains("class ShopApiApplicationTests {"));
    }
}
