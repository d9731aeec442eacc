//! Repositories and services.

use crate::domain::{EntityModel, Field, naming};

use super::{
    RenderContext, Storage,
    code::{Code, Imports, type_import},
    dto::input_fields,
    model::trim_trailing_blank,
};

/// Derived query methods for well-known field names.
enum Finder {
    /// `Optional<E> findByX(T x)`
    Unique,
    /// `List<E> findByX(T x)`
    Many,
}

fn finder_for(field: &Field) -> Option<Finder> {
    let lower = field.name.to_ascii_lowercase();
    if lower.contains("email") || lower == "username" {
        Some(Finder::Unique)
    } else if lower == "category" || lower.ends_with("status") {
        Some(Finder::Many)
    } else {
        None
    }
}

pub(super) fn render_repository(ctx: &RenderContext<'_>, entity: &EntityModel) -> String {
    let name = &entity.name;
    let entity_package = ctx.subpackage("entity");
    let finders: Vec<(&Field, Finder)> = entity
        .fields
        .iter()
        .filter_map(|f| finder_for(f).map(|finder| (f, finder)))
        .collect();

    let mut imports = Imports::new();
    imports.add(format!("{entity_package}.{name}"));
    let base = match ctx.storage() {
        Storage::Document => {
            imports.add("org.springframework.data.mongodb.repository.MongoRepository");
            "MongoRepository"
        }
        Storage::Relational | Storage::InMemory => {
            imports.add("org.springframework.data.jpa.repository.JpaRepository");
            "JpaRepository"
        }
    };
    for (field, finder) in &finders {
        imports.add(match finder {
            Finder::Unique => "java.util.Optional",
            Finder::Many => "java.util.List",
        });
        let is_enum = ctx.is_enumeration(&field.declared_type);
        if let Some(import) = type_import(&field.declared_type, is_enum, Some(&entity_package)) {
            imports.add(import);
        }
    }

    let mut code = Code::new();
    imports.write_header(&mut code, &ctx.subpackage("repository"));
    code.open(format!(
        "public interface {name}Repository extends {base}<{name}, {}> {{",
        ctx.id_type()
    ));
    for (field, finder) in &finders {
        let method = format!("findBy{}", naming::capitalize(&field.name));
        let param = format!("{} {}", field.declared_type, field.name);
        code.blank();
        match finder {
            Finder::Unique => code.line(format!("Optional<{name}> {method}({param});")),
            Finder::Many => code.line(format!("List<{name}> {method}({param});")),
        };
    }
    code.close("}");
    trim_trailing_blank(code.finish())
}

pub(super) fn render_service(ctx: &RenderContext<'_>, entity: &EntityModel, exposed: &[&Field]) -> String {
    let name = &entity.name;
    let storage = ctx.storage();
    let id = ctx.id_type();
    let repository = format!("{name}Repository");
    let repo_var = naming::decapitalize(&repository);
    let request = format!("{name}CreateRequest");
    let response = format!("{name}Response");
    let inputs = input_fields(entity);
    let encodes = ctx.analysis().needs_authentication
        && inputs.iter().any(|f| is_secret(f));

    let mut imports = Imports::new();
    imports
        .add(format!("{}.entity.{name}", ctx.package()))
        .add(format!("{}.dto.{request}", ctx.package()))
        .add(format!("{}.dto.{response}", ctx.package()))
        .add("org.springframework.stereotype.Service")
        .add("java.util.List")
        .add("java.util.Optional")
        .add("java.util.stream.Collectors");
    match storage {
        Storage::InMemory => {
            imports
                .add(format!("{}.support.IdSequence", ctx.package()))
                .add("java.time.LocalDateTime")
                .add("java.util.Collections")
                .add("java.util.LinkedHashMap")
                .add("java.util.Map");
        }
        Storage::Document => {
            imports
                .add(format!("{}.repository.{repository}", ctx.package()))
                .add("java.time.LocalDateTime");
        }
        Storage::Relational => {
            imports
                .add(format!("{}.repository.{repository}", ctx.package()))
                .add("org.springframework.transaction.annotation.Transactional");
        }
    }
    if encodes {
        imports.add("org.springframework.security.crypto.password.PasswordEncoder");
    }

    let mut code = Code::new();
    imports.write_header(&mut code, &ctx.subpackage("service"));
    code.line("@Service");
    if storage == Storage::Relational {
        code.line("@Transactional");
    }
    code.open(format!("public class {name}Service {{")).blank();

    match storage {
        Storage::InMemory => {
            code.line(format!(
                "private final Map<{id}, {name}> store = Collections.synchronizedMap(new LinkedHashMap<>());"
            ))
            .line("private final IdSequence idSequence = new IdSequence();");
            if encodes {
                code.line("private final PasswordEncoder passwordEncoder;");
            }
            code.blank();
            if encodes {
                code.open(format!("public {name}Service(PasswordEncoder passwordEncoder) {{"))
                    .line("this.passwordEncoder = passwordEncoder;")
                    .close("}")
                    .blank();
            }
        }
        Storage::Relational | Storage::Document => {
            code.line(format!("private final {repository} {repo_var};"));
            if encodes {
                code.line("private final PasswordEncoder passwordEncoder;");
            }
            code.blank();
            if encodes {
                code.open(format!(
                    "public {name}Service({repository} {repo_var}, PasswordEncoder passwordEncoder) {{"
                ))
                .line(format!("this.{repo_var} = {repo_var};"))
                .line("this.passwordEncoder = passwordEncoder;");
            } else {
                code.open(format!("public {name}Service({repository} {repo_var}) {{"))
                    .line(format!("this.{repo_var} = {repo_var};"));
            }
            code.close("}").blank();
        }
    }

    match storage {
        Storage::InMemory => in_memory_operations(&mut code, name, id, &response, &request),
        Storage::Relational | Storage::Document => {
            repository_operations(&mut code, name, id, &repo_var, &response, &request, storage)
        }
    }

    // apply
    code.open(format!("private void apply({name} entity, {request} request) {{"));
    for field in &inputs {
        let cap = naming::capitalize(&field.name);
        if encodes && is_secret(field) {
            code.open(format!("if (request.get{cap}() != null) {{"))
                .line(format!("entity.set{cap}(passwordEncoder.encode(request.get{cap}()));"))
                .close("}");
        } else {
            code.line(format!("entity.set{cap}(request.get{cap}());"));
        }
    }
    code.close("}").blank();

    // toResponse
    code.open(format!("private {response} toResponse({name} entity) {{"))
        .line(format!("{response} response = new {response}();"))
        .line("response.setId(entity.getId());");
    for field in exposed {
        let cap = naming::capitalize(&field.name);
        code.line(format!("response.set{cap}(entity.get{cap}());"));
    }
    code.line("response.setCreatedAt(entity.getCreatedAt());")
        .line("response.setUpdatedAt(entity.getUpdatedAt());")
        .line("return response;")
        .close("}");

    code.close("}");
    trim_trailing_blank(code.finish())
}

/// Password-like inputs are stored as hashes.
fn is_secret(field: &Field) -> bool {
    field.declared_type == "String" && field.name.to_ascii_lowercase().contains("password")
}

fn repository_operations(
    code: &mut Code,
    name: &str,
    id: &str,
    repo_var: &str,
    response: &str,
    request: &str,
    storage: Storage,
) {
    code.open(format!("public List<{response}> findAll() {{"))
        .line(format!("return {repo_var}.findAll().stream()"))
        .line("        .map(this::toResponse)")
        .line("        .collect(Collectors.toList());")
        .close("}")
        .blank();

    code.open(format!("public Optional<{response}> findById({id} id) {{"))
        .line(format!("return {repo_var}.findById(id).map(this::toResponse);"))
        .close("}")
        .blank();

    code.open(format!("public {response} create({request} request) {{"))
        .line(format!("{name} entity = new {name}();"))
        .line("apply(entity, request);")
        .line(format!("return toResponse({repo_var}.save(entity));"))
        .close("}")
        .blank();

    code.open(format!(
        "public Optional<{response}> update({id} id, {request} request) {{"
    ))
    .open(format!("return {repo_var}.findById(id).map(entity -> {{"))
    .line("apply(entity, request);");
    if storage == Storage::Document {
        code.line("entity.setUpdatedAt(LocalDateTime.now());");
    }
    code.line(format!("return toResponse({repo_var}.save(entity));"))
        .close("});")
        .close("}")
        .blank();

    code.open(format!("public boolean delete({id} id) {{"))
        .open(format!("if (!{repo_var}.existsById(id)) {{"))
        .line("return false;")
        .close("}")
        .line(format!("{repo_var}.deleteById(id);"))
        .line("return true;")
        .close("}")
        .blank();
}

fn in_memory_operations(code: &mut Code, name: &str, id: &str, response: &str, request: &str) {
    code.open(format!("public List<{response}> findAll() {{"))
        .open("synchronized (store) {")
        .line("return store.values().stream()")
        .line("        .map(this::toResponse)")
        .line("        .collect(Collectors.toList());")
        .close("}")
        .close("}")
        .blank();

    code.open(format!("public Optional<{response}> findById({id} id) {{"))
        .line("return Optional.ofNullable(store.get(id)).map(this::toResponse);")
        .close("}")
        .blank();

    code.open(format!("public {response} create({request} request) {{"))
        .line(format!("{name} entity = new {name}();"))
        .line("apply(entity, request);")
        .line("entity.setId(idSequence.next());")
        .line("store.put(entity.getId(), entity);")
        .line("return toResponse(entity);")
        .close("}")
        .blank();

    code.open(format!(
        "public Optional<{response}> update({id} id, {request} request) {{"
    ))
    .line(format!("{name} entity = store.get(id);"))
    .open("if (entity == null) {")
    .line("return Optional.empty();")
    .close("}")
    .line("apply(entity, request);")
    .line("entity.setUpdatedAt(LocalDateTime.now());")
    .line("return Optional.of(toResponse(entity));")
    .close("}")
    .blank();

    code.open(format!("public boolean delete({id} id) {{"))
        .line("return store.remove(id) != null;")
        .close("}")
        .blank();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::renderer::tests::{blog, files_only, h2, mongo, shop, spec};

    #[test]
    fn repository_finders() {
        let spec = spec();
        let project = shop();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let source = render_repository(&ctx, project.entity("User").unwrap());
        assert!(source.contains("public interface UserRepository extends JpaRepository<User, Long> {"));
        assert!(source.contains("Optional<User> findByEmail(String email);"));
        assert!(source.contains("Optional<User> findByUsername(String username);"));
        assert!(!source.contains("@Repository"));

        let blog = blog();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &blog, Some(&profile), true);
        let source = render_repository(&ctx, blog.entity("Article").unwrap());
        assert!(source.contains("List<Article> findByStatus(ArticleStatus status);"));
        assert!(source.contains("import com.acme.shopapi.entity.ArticleStatus;"));
    }

    #[test]
    fn repository_without_finders_is_an_empty_interface() {
        let spec = spec();
        let project = shop();
        let profile = mongo();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let source = render_repository(&ctx, project.entity("Product").unwrap());
        assert!(source.ends_with("public interface ProductRepository extends MongoRepository<Product, String> {\n}\n"));
    }

    #[test]
    fn relational_service_is_transactional() {
        let spec = spec();
        let project = shop();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let product = project.entity("Product").unwrap();
        let exposed: Vec<&Field> = product.fields.iter().collect();
        let source = render_service(&ctx, product, &exposed);
        assert!(source.contains("@Service\n@Transactional\npublic class ProductService {"));
        assert!(source.contains("public ProductService(ProductRepository productRepository) {"));
        assert!(source.contains("entity.setPrice(request.getPrice());"));
        assert!(source.contains("response.setStock(entity.getStock());"));
        assert!(!source.contains("PasswordEncoder"));
    }

    #[test]
    fn in_memory_service_uses_id_sequence() {
        let spec = spec();
        let project = files_only();
        let ctx = RenderContext::new(&spec, &project, None, true);
        let document = project.entity("Document").unwrap();
        let source = render_service(&ctx, document, &[]);
        assert!(source.contains("import com.acme.shopapi.support.IdSequence;"));
        assert!(source.contains("entity.setId(idSequence.next());"));
        assert!(source.contains("Collections.synchronizedMap(new LinkedHashMap<>())"));
        assert!(!source.contains("@Transactional"));
    }
}
