use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::ats::{analyze_overlap, AtsReport};
use crate::analysis::readiness::{evaluate_roles, RoleReadiness};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Serialize)]
pub struct EvaluateResponse {
    pub ok: bool,
    pub analysis: Vec<RoleReadiness>,
}

#[derive(Deserialize)]
pub struct AtsRequest {
    pub job_description: String,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// POST /api/analysis/evaluate
pub async fn handle_evaluate(Json(req): Json<EvaluateRequest>) -> Json<EvaluateResponse> {
    tracing::debug!(skills = req.skills.len(), "Evaluating role readiness");
    Json(EvaluateResponse {
        ok: true,
        analysis: evaluate_roles(&req.skills),
    })
}

/// POST /api/ats/analyze
///
/// Uses the caller's skill list when given; otherwise extracts skills from
/// `resume_text` first.
pub async fn handle_ats_analyze(
    State(state): State<AppState>,
    Json(req): Json<AtsRequest>,
) -> Result<Json<AtsReport>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let skills = if req.skills.is_empty() {
        req.resume_text
            .as_deref()
            .map(|text| state.extractor.extract(text))
            .unwrap_or_default()
    } else {
        req.skills
    };

    Ok(Json(analyze_overlap(&req.job_description, &skills)))
}
