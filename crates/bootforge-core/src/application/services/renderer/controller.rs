//! REST controllers and the endpoint → operation mapping.

use serde::Serialize;

use crate::domain::{ApiModel, Endpoint, EntityModel, HttpVerb, Warning, WarningKind, naming};

use super::{
    RenderContext,
    code::{Code, Imports, java_string},
    model::trim_trailing_blank,
};

/// Service operation an endpoint maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ListAll,
    GetById,
    Create,
    UpdateById,
    DeleteById,
}

impl Operation {
    /// Canonical method order inside a controller.
    pub const ALL: [Operation; 5] = [
        Self::ListAll,
        Self::GetById,
        Self::Create,
        Self::UpdateById,
        Self::DeleteById,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ListAll => "list-all",
            Self::GetById => "get-by-id",
            Self::Create => "create",
            Self::UpdateById => "update-by-id",
            Self::DeleteById => "delete-by-id",
        }
    }
}

/// Map an endpoint onto a CRUD operation, or `None` for a stub.
pub fn classify(endpoint: &Endpoint) -> Option<Operation> {
    let param = endpoint.has_path_parameter();
    match (&endpoint.verb, param) {
        (HttpVerb::Get, false) => Some(Operation::ListAll),
        (HttpVerb::Get, true) => Some(Operation::GetById),
        (HttpVerb::Post, _) => Some(Operation::Create),
        (HttpVerb::Put, true) => Some(Operation::UpdateById),
        (HttpVerb::Delete, true) => Some(Operation::DeleteById),
        _ => None,
    }
}

/// Endpoints a handler serves: the union of its APIs' endpoints, or the
/// five canonical CRUD routes when there are none.
fn endpoints_for(entity: &EntityModel, apis: &[&ApiModel]) -> Vec<Endpoint> {
    let mut endpoints: Vec<Endpoint> = Vec::new();
    for endpoint in apis.iter().flat_map(|api| &api.endpoints) {
        if !endpoints.contains(endpoint) {
            endpoints.push(endpoint.clone());
        }
    }
    if endpoints.is_empty() {
        let base = format!("/api/{}", naming::collection_segment(&entity.name));
        let item = format!("{base}/{{id}}");
        endpoints = vec![
            Endpoint::new(HttpVerb::Get, base.clone()),
            Endpoint::new(HttpVerb::Get, item.clone()),
            Endpoint::new(HttpVerb::Post, base),
            Endpoint::new(HttpVerb::Put, item.clone()),
            Endpoint::new(HttpVerb::Delete, item),
        ];
    }
    endpoints
}

pub(super) fn render(
    ctx: &RenderContext<'_>,
    entity: &EntityModel,
    apis: &[&ApiModel],
) -> (String, Vec<Warning>) {
    let name = &entity.name;
    let service = format!("{name}Service");
    let service_var = naming::decapitalize(&service);
    let request = format!("{name}CreateRequest");
    let response = format!("{name}Response");
    let id = ctx.id_type();
    let ee = ctx.ee();

    let endpoints = endpoints_for(entity, apis);
    let mut served: Vec<(Operation, Vec<&Endpoint>)> = Vec::new();
    let mut stubs: Vec<&Endpoint> = Vec::new();
    for endpoint in &endpoints {
        match classify(endpoint) {
            Some(op) => match served.iter_mut().find(|(o, _)| *o == op) {
                Some((_, list)) => list.push(endpoint),
                None => served.push((op, vec![endpoint])),
            },
            None => stubs.push(endpoint),
        }
    }
    served.sort_by_key(|(op, _)| *op);

    // Method mappings are joined onto the class mapping, so the collection
    // base moves down to the methods when a stub lives outside it.
    let base = format!("/api/{}", naming::collection_segment(name));
    let class_base = stubs
        .iter()
        .all(|e| relative_to(&base, &e.path).is_some())
        .then_some(base.as_str());
    let route = |suffix: &str| match class_base {
        Some(_) => suffix.to_string(),
        None => format!("{base}{suffix}"),
    };

    let warnings: Vec<Warning> = stubs
        .iter()
        .map(|e| {
            Warning::new(
                WarningKind::UnrecognizedEndpoint,
                format!("{name}Controller: no operation for {e}; emitted a stub"),
            )
        })
        .collect();

    let uses = |op: Operation| served.iter().any(|(o, _)| *o == op);
    let mut imports = Imports::new();
    imports
        .add(format!("{}.service.{service}", ctx.package()))
        .add(format!("{}.dto.{response}", ctx.package()))
        .add("org.springframework.web.bind.annotation.*");
    if uses(Operation::ListAll) {
        imports.add("java.util.List");
    }
    if uses(Operation::Create) || uses(Operation::UpdateById) {
        imports
            .add(format!("{}.dto.{request}", ctx.package()))
            .add(format!("{ee}.validation.Valid"));
    }
    if uses(Operation::Create) || !stubs.is_empty() {
        imports.add("org.springframework.http.HttpStatus");
    }
    if uses(Operation::GetById) || uses(Operation::UpdateById) || uses(Operation::DeleteById) {
        imports.add("org.springframework.http.ResponseEntity");
    }

    let mut code = Code::new();
    imports.write_header(&mut code, &ctx.subpackage("controller"));

    let api_names: Vec<&str> = apis.iter().map(|a| a.name.as_str()).collect();
    if !api_names.is_empty() {
        code.line(format!("/** Serves {}. */", comment_text(&api_names.join(", "))));
    }
    code.line("@RestController");
    if let Some(base) = class_base {
        code.line(format!("@RequestMapping(\"{}\")", java_string(base)));
    }
    code.open(format!("public class {name}Controller {{"))
        .blank()
        .line(format!("private final {service} {service_var};"))
        .blank()
        .open(format!("public {name}Controller({service} {service_var}) {{"))
        .line(format!("this.{service_var} = {service_var};"))
        .close("}")
        .blank();

    for (op, sources) in &served {
        javadoc(&mut code, sources);
        match op {
            Operation::ListAll => {
                code.line(mapping("GetMapping", &route("")))
                    .open(format!("public List<{response}> findAll() {{"))
                    .line(format!("return {service_var}.findAll();"))
                    .close("}");
            }
            Operation::GetById => {
                code.line(mapping("GetMapping", &route("/{id}")))
                    .open(format!(
                        "public ResponseEntity<{response}> findById(@PathVariable {id} id) {{"
                    ))
                    .line(format!("return {service_var}.findById(id)"))
                    .line("        .map(ResponseEntity::ok)")
                    .line("        .orElse(ResponseEntity.notFound().build());")
                    .close("}");
            }
            Operation::Create => {
                code.line(mapping("PostMapping", &route("")))
                    .line("@ResponseStatus(HttpStatus.CREATED)")
                    .open(format!(
                        "public {response} create(@Valid @RequestBody {request} request) {{"
                    ))
                    .line(format!("return {service_var}.create(request);"))
                    .close("}");
            }
            Operation::UpdateById => {
                code.line(mapping("PutMapping", &route("/{id}")))
                    .open(format!(
                        "public ResponseEntity<{response}> update(@PathVariable {id} id, @Valid @RequestBody {request} request) {{"
                    ))
                    .line(format!("return {service_var}.update(id, request)"))
                    .line("        .map(ResponseEntity::ok)")
                    .line("        .orElse(ResponseEntity.notFound().build());")
                    .close("}");
            }
            Operation::DeleteById => {
                code.line(mapping("DeleteMapping", &route("/{id}")))
                    .open(format!(
                        "public ResponseEntity<Void> delete(@PathVariable {id} id) {{"
                    ))
                    .open(format!("if ({service_var}.delete(id)) {{"))
                    .line("return ResponseEntity.noContent().build();")
                    .close("}")
                    .line("return ResponseEntity.notFound().build();")
                    .close("}");
            }
        }
        code.blank();
    }

    for (i, endpoint) in stubs.iter().enumerate() {
        let path = match class_base {
            Some(base) => relative_to(base, &endpoint.path).unwrap_or_default(),
            None => endpoint.path.as_str(),
        };
        let mut attrs = Vec::new();
        if !path.is_empty() {
            attrs.push(format!("path = \"{}\"", java_string(path)));
        }
        if let Some(method) = stub_method(&endpoint.verb) {
            attrs.push(format!("method = RequestMethod.{method}"));
        }
        code.line(format!("// NOT IMPLEMENTED: {}", comment_text(&endpoint.to_string())));
        if attrs.is_empty() {
            code.line("@RequestMapping");
        } else {
            code.line(format!("@RequestMapping({})", attrs.join(", ")));
        }
        code.line("@ResponseStatus(HttpStatus.NOT_IMPLEMENTED)")
            .open(format!("public void notImplemented{}() {{", i + 1))
            .close("}")
            .blank();
    }

    code.close("}");
    (trim_trailing_blank(code.finish()), warnings)
}

/// `@GetMapping` or `@GetMapping("/path")`.
fn mapping(annotation: &str, path: &str) -> String {
    if path.is_empty() {
        format!("@{annotation}")
    } else {
        format!("@{annotation}(\"{}\")", java_string(path))
    }
}

/// Remainder of `path` below `base` (`""` for `base` itself), or `None`
/// when the path is elsewhere.
fn relative_to<'a>(base: &str, path: &'a str) -> Option<&'a str> {
    let rest = path.strip_prefix(base)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

/// Free text made safe for a Java comment: `*/` would close it early and a
/// line break would end a `//` comment.
fn comment_text(text: &str) -> String {
    text.replace("*/", "*&#47;").replace(['\r', '\n'], " ")
}

fn javadoc(code: &mut Code, sources: &[&Endpoint]) {
    match sources {
        [single] => {
            code.line(format!("/** {} */", comment_text(&single.to_string())));
        }
        many => {
            code.line("/**");
            for endpoint in many {
                code.line(format!(" * {}", comment_text(&endpoint.to_string())));
            }
            code.line(" */");
        }
    }
}

/// `RequestMethod` constant for a stub. Unknown verbs have none, so their
/// stub answers every method the rest of the controller leaves unmapped.
fn stub_method(verb: &HttpVerb) -> Option<&'static str> {
    match verb {
        HttpVerb::Get => Some("GET"),
        HttpVerb::Post => Some("POST"),
        HttpVerb::Put => Some("PUT"),
        HttpVerb::Patch => Some("PATCH"),
        HttpVerb::Delete => Some("DELETE"),
        HttpVerb::Head => Some("HEAD"),
        HttpVerb::Options => Some("OPTIONS"),
        HttpVerb::Other(_) => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::renderer::tests::{blog, h2, spec};
    use crate::domain::Purpose;

    fn op(s: &str) -> Option<Operation> {
        classify(&Endpoint::parse(s))
    }

    // ── classification ──────────────────────────────────────────────────────

    #[test]
    fn crud_table() {
        assert_eq!(op("GET /api/posts"), Some(Operation::ListAll));
        assert_eq!(op("GET /api/posts/{id}"), Some(Operation::GetById));
        assert_eq!(op("POST /api/posts"), Some(Operation::Create));
        assert_eq!(op("POST /api/posts/{id}/like"), Some(Operation::Create));
        assert_eq!(op("PUT /api/posts/{id}"), Some(Operation::UpdateById));
        assert_eq!(op("DELETE /api/posts/{id}"), Some(Operation::DeleteById));
    }

    #[test]
    fn everything_else_is_a_stub() {
        assert_eq!(op("PUT /api/users/profile"), None);
        assert_eq!(op("DELETE /api/posts"), None);
        assert_eq!(op("PATCH /api/posts/{id}"), None);
        assert_eq!(op("PURGE /cache"), None);
    }

    // ── rendering ───────────────────────────────────────────────────────────

    fn controller(apis: &[ApiModel]) -> (String, Vec<Warning>) {
        let spec = spec();
        let project = blog();
        let profile = h2();
        let ctx = RenderContext::new(&spec, &project, Some(&profile), true);
        let entity = project.entity("Article").unwrap();
        let refs: Vec<&ApiModel> = apis.iter().collect();
        render(&ctx, entity, &refs)
    }

    #[test]
    fn entity_without_api_gets_canonical_crud() {
        let (source, warnings) = controller(&[]);
        assert!(warnings.is_empty());
        assert!(source.contains("@RequestMapping(\"/api/articles\")"));
        for method in [
            "findAll()",
            "findById(@PathVariable Long id)",
            "create(@Valid",
            "update(@PathVariable Long id",
            "delete(@PathVariable Long id)",
        ] {
            assert!(source.contains(method), "missing {method}");
        }
        assert!(source.contains("/** GET /api/articles/{id} */"));
    }

    #[test]
    fn repeated_operations_are_emitted_once() {
        let api = ApiModel::new("Articles", Purpose::ContentManagement, "Article")
            .with_endpoints(["POST /api/articles", "POST /api/articles/{id}/publish"]);
        let (source, warnings) = controller(&[api]);
        assert!(warnings.is_empty());
        assert_eq!(source.matches("@PostMapping").count(), 1);
        assert!(source.contains(" * POST /api/articles/{id}/publish"));
        assert!(!source.contains("findAll"));
        assert!(!source.contains("import java.util.List;"));
    }

    #[test]
    fn stubs_are_marked_and_warned() {
        let api = ApiModel::new("Articles", Purpose::ContentManagement, "Article")
            .with_endpoints([
                "GET /api/articles",
                "PATCH /api/articles/{id}/title",
                "PURGE /api/articles",
            ]);
        let (source, warnings) = controller(&[api]);
        assert!(source.contains("// NOT IMPLEMENTED: PATCH /api/articles/{id}/title"));
        assert!(source.contains("// NOT IMPLEMENTED: PURGE /api/articles"));
        assert!(source.contains("public void notImplemented2()"));
        assert!(source.contains("@RequestMapping(\"/api/articles\")"));
        assert!(source.contains(
            "@RequestMapping(path = \"/{id}/title\", method = RequestMethod.PATCH)"
        ));
        assert!(source.lines().any(|l| l.trim() == "@RequestMapping"));
        assert!(!source.contains("path = \"/api/articles"));
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.kind == WarningKind::UnrecognizedEndpoint));
    }

    #[test]
    fn duplicate_endpoints_across_apis_are_merged() {
        let a = ApiModel::new("A", Purpose::Custom, "Article").with_endpoint("PATCH /x");
        let b = ApiModel::new("B", Purpose::Custom, "Article").with_endpoint("PATCH /x");
        let (source, warnings) = controller(&[a, b]);
        assert_eq!(warnings.len(), 1);
        assert_eq!(source.matches("NOT IMPLEMENTED").count(), 1);
        assert!(source.contains("/** Serves A, B. */"));
    }

    #[test]
    fn stub_outside_the_collection_keeps_its_full_path() {
        let api = ApiModel::new("Articles", Purpose::ContentManagement, "Article")
            .with_endpoints(["GET /api/articles/{id}", "PATCH /api/feed/refresh"]);
        let (source, _) = controller(&[api]);
        assert!(!source.contains("@RequestMapping(\"/api/articles\")"));
        assert!(source.contains("@GetMapping(\"/api/articles/{id}\")"));
        assert!(source.contains(
            "@RequestMapping(path = \"/api/feed/refresh\", method = RequestMethod.PATCH)"
        ));
    }

    #[test]
    fn similar_prefix_is_not_the_collection() {
        assert_eq!(relative_to("/api/articles", "/api/articles"), Some(""));
        assert_eq!(relative_to("/api/articles", "/api/articles/{id}"), Some("/{id}"));
        assert_eq!(relative_to("/api/articles", "/api/articlesx"), None);
    }

    #[test]
    fn comment_terminators_are_escaped() {
        let api = ApiModel::new("Articles", Purpose::ContentManagement, "Article")
            .with_endpoints(["POST /api/articles", "POST /api/articles/*/x"]);
        let (source, _) = controller(&[api]);
        assert!(source.contains(" * POST /api/articles/*&#47;x"));
        assert!(!source.contains("*/x"));
    }
}
