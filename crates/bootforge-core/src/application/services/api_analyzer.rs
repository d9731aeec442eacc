//! Requirement analysis over a set of APIs or a catalog template.
//!
//! Both modes produce the same [`AnalyzedProject`]: the booleans that decide
//! which project-wide artifacts exist, the entity set to render, and the
//! relationships between entities.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::services::type_inferencer::TypeInferencer,
    domain::{
        AnalysisResult, ApiModel, Cardinality, Endpoint, EntityModel, EnumModel, FeatureToggles,
        Field, Purpose, Relationship, RelationshipRef, TemplateEntry, Warning, WarningKind,
        capabilities::{preset_for, requirements_for},
        naming,
    },
};

/// Everything the renderer needs to know about one run's data model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalyzedProject {
    pub result: AnalysisResult,
    /// Entities in declaration order. Each name appears once.
    pub entities: Vec<EntityModel>,
    pub enumerations: Vec<EnumModel>,
    /// APIs that survived analysis, with `entity` and `purpose` normalized.
    pub apis: Vec<ApiModel>,
    pub warnings: Vec<Warning>,
}

impl AnalyzedProject {
    pub fn entity(&self, name: &str) -> Option<&EntityModel> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// APIs that serve `entity`, in declaration order.
    pub fn apis_for<'a>(&'a self, entity: &'a str) -> impl Iterator<Item = &'a ApiModel> + 'a {
        self.apis.iter().filter(move |api| api.entity == entity)
    }

    pub fn is_enumeration(&self, type_name: &str) -> bool {
        self.enumerations.iter().any(|e| e.name == type_name)
    }
}

/// Accumulated requirement flags.
#[derive(Debug, Default, Clone, Copy)]
struct Needs {
    persistence: bool,
    authentication: bool,
    file_upload: bool,
    notifications: bool,
}

impl Needs {
    fn from_features(features: FeatureToggles) -> Self {
        Self {
            persistence: features.enable_persistence,
            authentication: features.enable_security,
            ..Self::default()
        }
    }

    fn apply(&mut self, purpose: Purpose) {
        if let Some(req) = requirements_for(purpose) {
            self.persistence |= req.persistence;
            self.authentication |= req.authentication;
            self.file_upload |= req.file_upload;
            self.notifications |= req.notifications;
        }
    }

    fn into_result(
        self,
        needs_validation: bool,
        entities: Vec<String>,
        relationships: Vec<RelationshipRef>,
    ) -> AnalysisResult {
        AnalysisResult {
            needs_persistence: self.persistence,
            needs_authentication: self.authentication,
            needs_validation,
            needs_file_upload: self.file_upload,
            needs_notifications: self.notifications,
            entities,
            relationships,
        }
        .normalized()
    }
}

/// What a `<name>Id` field points at.
enum ForeignKey<'a> {
    Resolved(&'a str),
    /// Looks like a reference, but no entity of that name exists.
    Unresolved(String),
    NotAReference,
}

/// Derives requirements, entities and relationships. Pure and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiAnalyzer {
    inferencer: TypeInferencer,
}

impl ApiAnalyzer {
    pub fn new(inferencer: TypeInferencer) -> Self {
        Self { inferencer }
    }

    // ── custom mode ─────────────────────────────────────────────────────────

    /// Analyze user-described APIs.
    ///
    /// Entities are built from the APIs that name them. Field types come from
    /// the inference table and `<entity>Id` fields become many-to-one
    /// relationships when the entity exists in this run.
    #[instrument(skip_all, fields(apis = apis.len()))]
    pub fn analyze_custom(&self, apis: &[ApiModel], features: FeatureToggles) -> AnalyzedProject {
        let mut warnings = Vec::new();
        let mut needs = Needs::from_features(features);

        // Entity name → merged field names, in first-seen order.
        let mut collected: Vec<(String, Vec<String>)> = Vec::new();
        let mut normalized = Vec::with_capacity(apis.len());

        for (index, api) in apis.iter().enumerate() {
            needs.apply(api.purpose);
            let mut api = with_preset(api);
            api.entity = entity_name_for(&api, index);

            let slot = match collected.iter().position(|(name, _)| *name == api.entity) {
                Some(i) => i,
                None => {
                    collected.push((api.entity.clone(), Vec::new()));
                    collected.len() - 1
                }
            };
            let fields = &mut collected[slot].1;
            for name in api.fields.iter().filter_map(|raw| naming::field_identifier(raw)) {
                if !name.eq_ignore_ascii_case("id") && !fields.contains(&name) {
                    fields.push(name);
                }
            }
            normalized.push(api);
        }

        normalized.retain(|api| {
            let defined = collected
                .iter()
                .any(|(name, fields)| *name == api.entity && !fields.is_empty());
            if !defined {
                warnings.push(Warning::new(
                    WarningKind::MissingEntityForApi,
                    format!(
                        "API '{}' declares no fields and no other API defines entity '{}'; skipped",
                        api.name, api.entity
                    ),
                ));
            }
            defined
        });

        let known: Vec<&str> = collected
            .iter()
            .filter(|(_, fields)| !fields.is_empty())
            .map(|(name, _)| name.as_str())
            .collect();

        let mut relationships = Vec::new();
        let mut entities = Vec::with_capacity(known.len());
        for (name, field_names) in collected.iter().filter(|(_, f)| !f.is_empty()) {
            let mut entity = EntityModel::new(name);
            for field_name in field_names {
                entity
                    .fields
                    .push(self.inferencer.infer(field_name).into_field(field_name));

                match foreign_key(field_name, &known) {
                    ForeignKey::Resolved(target) => {
                        let mut property = naming::property_name(target);
                        if field_names.contains(&property) {
                            property.push_str("Ref");
                        }
                        debug!(entity = %name, field = %field_name, to = target, "Inferred many-to-one");
                        relationships.push(RelationshipRef {
                            source: name.clone(),
                            target: target.to_string(),
                            cardinality: Cardinality::ManyToOne,
                            via: Some(field_name.clone()),
                        });
                        entity.relationships.push(
                            Relationship::new(target, Cardinality::ManyToOne)
                                .named(property)
                                .via_field(field_name),
                        );
                    }
                    ForeignKey::Unresolved(guess) => warnings.push(Warning::new(
                        WarningKind::UnresolvedRelationship,
                        format!(
                            "Field '{field_name}' on {name} looks like a reference to '{guess}', \
                             which is not an entity in this project; kept as a plain column"
                        ),
                    )),
                    ForeignKey::NotAReference => {}
                }
            }
            entities.push(entity);
        }

        let result = needs.into_result(
            !apis.is_empty(),
            entities.iter().map(|e| e.name.clone()).collect(),
            relationships,
        );

        debug!(
            entities = result.entities.len(),
            relationships = result.relationships.len(),
            persistence = result.needs_persistence,
            authentication = result.needs_authentication,
            "Custom APIs analyzed"
        );

        AnalyzedProject {
            result,
            entities,
            enumerations: Vec::new(),
            apis: normalized,
            warnings,
        }
    }

    // ── template mode ───────────────────────────────────────────────────────

    /// Analyze a catalog template.
    ///
    /// Purposes come from the API display names. Relationships are copied,
    /// except those whose target is not one of the template's entities.
    #[instrument(skip_all, fields(template = %entry.id))]
    pub fn analyze_template(&self, entry: &TemplateEntry, features: FeatureToggles) -> AnalyzedProject {
        let mut warnings = Vec::new();
        let mut needs = Needs::from_features(features);
        let names: Vec<&str> = entry.entity_names().collect();

        let mut apis = Vec::with_capacity(entry.apis.len());
        for api in &entry.apis {
            let purpose = Purpose::from_api_name(&api.name);
            needs.apply(purpose);
            if !names.contains(&api.entity.as_str()) {
                warnings.push(Warning::new(
                    WarningKind::MissingEntityForApi,
                    format!(
                        "API '{}' serves entity '{}', which template '{}' does not define; skipped",
                        api.name, api.entity, entry.id
                    ),
                ));
                continue;
            }
            apis.push(ApiModel {
                purpose,
                ..api.clone()
            });
        }

        let mut relationships = Vec::new();
        let mut entities = Vec::with_capacity(entry.entities.len());
        for declared in &entry.entities {
            let mut entity = EntityModel::new(&declared.name);
            entity.fields = declared
                .fields
                .iter()
                .filter(|f| !f.name.eq_ignore_ascii_case("id"))
                .map(|f| self.enrich_declared(f))
                .collect();

            for rel in &declared.relationships {
                if !names.contains(&rel.target.as_str()) {
                    warnings.push(Warning::new(
                        WarningKind::UnresolvedRelationship,
                        format!(
                            "{} {} {} is dropped: '{}' is not an entity of template '{}'",
                            declared.name, rel.cardinality, rel.target, rel.target, entry.id
                        ),
                    ));
                    continue;
                }
                relationships.push(RelationshipRef {
                    source: declared.name.clone(),
                    target: rel.target.clone(),
                    cardinality: rel.cardinality,
                    via: None,
                });
                entity.relationships.push(rel.clone());
            }
            entities.push(entity);
        }

        let result = needs.into_result(
            !entry.apis.is_empty(),
            names.iter().map(|n| n.to_string()).collect(),
            relationships,
        );

        debug!(
            entities = result.entities.len(),
            apis = apis.len(),
            relationships = result.relationships.len(),
            "Template analyzed"
        );

        AnalyzedProject {
            result,
            entities,
            enumerations: entry.enumerations.clone(),
            apis,
            warnings,
        }
    }

    /// Fill validation metadata the catalog leaves implicit.
    fn enrich_declared(&self, field: &Field) -> Field {
        let mut field = field.clone();
        field.write_only |= !self.inferencer.is_exposed(&field.name);
        if field.constraints.is_empty() {
            field.constraints = self
                .inferencer
                .constraints_for_declared(&field.name, &field.declared_type);
        }
        field
    }
}

/// Non-custom APIs that leave endpoints or fields empty get the purpose's
/// suggested surface.
fn with_preset(api: &ApiModel) -> ApiModel {
    let mut api = api.clone();
    if let Some(preset) = preset_for(api.purpose) {
        if api.endpoints.is_empty() {
            api.endpoints = preset.endpoints.iter().map(|e| Endpoint::parse(e)).collect();
        }
        if api.fields.is_empty() {
            api.fields = preset.fields.iter().map(|f| f.to_string()).collect();
        }
        if api.description.trim().is_empty() {
            api.description = preset.description.to_string();
        }
    }
    api
}

fn entity_name_for(api: &ApiModel, index: usize) -> String {
    naming::type_identifier(&api.entity)
        .or_else(|| naming::type_identifier(&api.name))
        .unwrap_or_else(|| format!("Resource{}", index + 1))
}

/// Classify a field name against the entities known in this run.
///
/// Matching is case-insensitive and tolerates underscores, so `userId`,
/// `user_id` and `USERID` all point at `User`. A bare `id` never matches.
fn foreign_key<'a>(field: &str, known: &[&'a str]) -> ForeignKey<'a> {
    let lower = field.to_ascii_lowercase();
    let Some(stem) = lower.strip_suffix("id") else {
        return ForeignKey::NotAReference;
    };
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        return ForeignKey::NotAReference;
    }

    let squashed = stem.replace('_', "");
    if let Some(target) = known.iter().copied().find(|k| k.to_ascii_lowercase() == squashed) {
        return ForeignKey::Resolved(target);
    }

    // Only a word-boundary "Id" suffix is worth a warning; "paid" is not a key.
    let words = naming::split_words(field);
    match words.split_last() {
        Some((last, rest)) if last == "id" && !rest.is_empty() => {
            ForeignKey::Unresolved(naming::to_pascal_case(&rest.join(" ")))
        }
        _ => ForeignKey::NotAReference,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
