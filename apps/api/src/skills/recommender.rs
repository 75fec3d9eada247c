//! Secondary skill recommender: pluggable, trait-based second opinion on a
//! resume's skills.
//!
//! Default: none (keyword extraction only). With an API key the service uses
//! `LlmSkillRecommender`. `AppState` holds an `Option<Arc<dyn SkillRecommender>>`.
//!
//! Recommendations are untrusted. Callers must pass them through
//! `merge::merge_verified` before they reach a response.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{parse_repaired, LlmClient, LlmError};
use crate::skills::catalog::SkillCatalog;
use crate::skills::prompts::build_skill_extract_prompt;

/// Response cap for the extraction call.
pub const RECOMMENDER_MAX_TOKENS: u32 = 800;
/// Most skills kept when salvaging a response that is not valid JSON.
const SALVAGE_LIMIT: usize = 8;

static QUOTED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([A-Za-z][A-Za-z0-9\s\.\+\-/]+)""#).expect("valid regex"));

/// JSON keys that the salvage pass must not mistake for skills.
const RESPONSE_KEYS: &[&str] = &[
    "extractedSkills",
    "suggestedSkills",
    "title",
    "description",
    "readiness",
    "missingSkills",
    "pathways",
];

#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Malformed skill suggestion: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait SkillRecommender: Send + Sync {
    /// Skill names the recommender believes appear in `text`.
    async fn recommend(&self, text: &str) -> Result<Vec<String>, RecommendError>;

    /// Short label used in `extraction_method`.
    fn label(&self) -> &'static str;
}

#[derive(Debug, Deserialize)]
struct ExtractedSkillsPayload {
    #[serde(rename = "extractedSkills", default)]
    extracted_skills: Vec<String>,
}

/// Recommender backed by the Claude API.
pub struct LlmSkillRecommender {
    llm: LlmClient,
    catalog: Arc<SkillCatalog>,
}

impl LlmSkillRecommender {
    pub fn new(llm: LlmClient, catalog: Arc<SkillCatalog>) -> Self {
        Self {
            llm: llm.with_max_tokens(RECOMMENDER_MAX_TOKENS),
            catalog,
        }
    }
}

#[async_trait]
impl SkillRecommender for LlmSkillRecommender {
    async fn recommend(&self, text: &str) -> Result<Vec<String>, RecommendError> {
        let prompt = build_skill_extract_prompt(&self.catalog, text);
        let raw = self.llm.call_text(&prompt, JSON_ONLY_SYSTEM).await?;
        let skills = parse_recommendation(&raw)?;
        debug!("LLM recommender returned {} skills", skills.len());
        Ok(skills)
    }

    fn label(&self) -> &'static str {
        "llm"
    }
}

/// Reads `{"extractedSkills": [...]}` from model output, repairing it first
/// and salvaging quoted tokens when it still will not parse.
pub fn parse_recommendation(raw: &str) -> Result<Vec<String>, RecommendError> {
    if let Ok(payload) = parse_repaired::<ExtractedSkillsPayload>(raw) {
        return Ok(payload.extracted_skills);
    }

    let salvaged = salvage_quoted_skills(raw);
    if salvaged.is_empty() {
        let preview: String = raw.chars().take(80).collect();
        return Err(RecommendError::Malformed(preview));
    }
    Ok(salvaged)
}

/// Harvests plausible skill names from quoted strings in broken JSON.
fn salvage_quoted_skills(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for capture in QUOTED_TOKEN.captures_iter(raw) {
        let token = capture[1].trim();
        let plausible = token.chars().count() > 2
            && !RESPONSE_KEYS.contains(&token)
            && !token.chars().all(|c| c.is_ascii_digit())
            && token.split_whitespace().count() <= 3;
        if plausible && !skills.iter().any(|s| s.as_str() == token) {
            skills.push(token.to_string());
        }
    }
    skills.truncate(SALVAGE_LIMIT);
    skills
}
