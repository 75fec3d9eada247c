//! Axum route handlers for the Skills API.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::skills::catalog::{SkillCatalog, SkillDefinition, SkillSuggestion};
use crate::skills::extractor::ScoredSkill;
use crate::skills::suggestions::suggest_complementary;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillData {
    pub category: String,
    pub weight: f64,
    pub aliases: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AllSkillsResponse {
    pub ok: bool,
    pub skills: Vec<String>,
    pub skills_data: BTreeMap<String, SkillData>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub ok: bool,
    pub suggestions: Vec<SkillSuggestion>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub ok: bool,
    pub extracted_skills: Vec<String>,
    pub scores: Vec<ScoredSkill>,
    pub suggested_skills: Vec<String>,
    pub skills_by_category: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ComplementaryRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ComplementaryResponse {
    pub ok: bool,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DefinitionResponse {
    pub ok: bool,
    pub skill: SkillDefinition,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/skills/all
pub async fn handle_all_skills(State(state): State<AppState>) -> Json<AllSkillsResponse> {
    let skills_data = state
        .catalog
        .definitions()
        .map(|d| {
            (
                d.canonical_name.clone(),
                SkillData {
                    category: d.category.clone(),
                    weight: d.weight,
                    aliases: d.aliases.clone(),
                },
            )
        })
        .collect();

    Json(AllSkillsResponse {
        ok: true,
        skills: state.catalog.all_skills().into_iter().map(String::from).collect(),
        skills_data,
    })
}

/// GET /api/skills/suggestions?query=
pub async fn handle_skill_suggestions(
    State(state): State<AppState>,
    Query(params): Query<SuggestionQuery>,
) -> Json<SuggestionResponse> {
    Json(SuggestionResponse {
        ok: true,
        suggestions: state.catalog.search_suggestions(&params.query),
    })
}

/// GET /api/skills/definition/:name
pub async fn handle_skill_definition(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DefinitionResponse>, AppError> {
    let skill = state
        .catalog
        .definition_of(&name)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Skill '{name}' not found")))?;

    Ok(Json(DefinitionResponse { ok: true, skill }))
}

/// POST /api/skills/extract
///
/// Runs the keyword engine over plain text. Text below the length floor is not
/// an error; it simply yields no skills.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let scores = state.extractor.extract_scored(&request.text);
    let extracted_skills: Vec<String> = scores.iter().map(|s| s.name.clone()).collect();
    let suggested_skills = suggest_complementary(&extracted_skills);
    let skills_by_category = group_by_category(&state.catalog, &extracted_skills);

    Json(ExtractResponse {
        ok: true,
        extracted_skills,
        scores,
        suggested_skills,
        skills_by_category,
    })
}

/// POST /api/skills/complementary
pub async fn handle_complementary(
    Json(request): Json<ComplementaryRequest>,
) -> Json<ComplementaryResponse> {
    Json(ComplementaryResponse {
        ok: true,
        suggestions: suggest_complementary(&request.skills),
    })
}

/// Groups catalog skills by display category, keeping input order within a
/// category. Names unknown to the catalog are skipped.
pub fn group_by_category(
    catalog: &SkillCatalog,
    skills: &[String],
) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for skill in skills {
        if let Some(definition) = catalog.definition_of(skill) {
            grouped
                .entry(definition.category.clone())
                .or_default()
                .push(skill.clone());
        }
    }
    grouped
}
