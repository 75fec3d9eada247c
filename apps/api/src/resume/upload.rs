//! Resume analysis pipeline: text in, skill report out.
//!
//! Keyword extraction is authoritative. The optional recommender may only add
//! skills that the catalog knows and the text literally contains, and its
//! failures never fail the upload.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::skills::catalog::SkillCatalog;
use crate::skills::extractor::SkillExtractor;
use crate::skills::handlers::group_by_category;
use crate::skills::merge::{dedup_preserving_order, merge_verified};
use crate::skills::recommender::SkillRecommender;
use crate::skills::suggestions::{suggest_complementary, NO_SKILLS_FALLBACK};

/// Most skills reported for one resume.
pub const MAX_RESUME_SKILLS: usize = 20;
/// Shortest text worth sending to the recommender.
pub const RECOMMENDER_MIN_CHARS: usize = 50;
pub const PREVIEW_CHARS: usize = 400;

const BASE_METHOD: &str = "enhanced_keyword_matching";

#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub ok: bool,
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub extracted_skills: Vec<String>,
    pub suggested_skills: Vec<String>,
    pub skills_by_category: BTreeMap<String, Vec<String>>,
    pub extraction_method: String,
    pub text_preview: String,
    pub total_text_length: usize,
}

/// Runs primary extraction, the optional verified second opinion, and builds
/// the report.
pub async fn analyze_resume_text(
    extractor: &SkillExtractor,
    recommender: Option<&dyn SkillRecommender>,
    text: &str,
) -> ResumeAnalysis {
    let catalog = extractor.catalog();
    let mut extracted_skills = extractor.extract(text);
    debug!("Keyword extraction found {} skills", extracted_skills.len());

    let mut extraction_method = BASE_METHOD.to_string();
    if let Some(recommender) = recommender {
        if text.chars().count() > RECOMMENDER_MIN_CHARS {
            if let Some(label) =
                apply_recommender(catalog, recommender, &mut extracted_skills, text).await
            {
                extraction_method = format!("{BASE_METHOD} + {label}");
            }
        }
    }

    dedup_preserving_order(&mut extracted_skills);
    extracted_skills.truncate(MAX_RESUME_SKILLS);

    let suggested_skills = if extracted_skills.is_empty() {
        info!("No technical skills found in resume");
        NO_SKILLS_FALLBACK.iter().map(|s| s.to_string()).collect()
    } else {
        suggest_complementary(&extracted_skills)
    };

    let skills_by_category = group_by_category(catalog, &extracted_skills);

    ResumeAnalysis {
        ok: true,
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        extracted_skills,
        suggested_skills,
        skills_by_category,
        extraction_method,
        text_preview: preview(text),
        total_text_length: text.chars().count(),
    }
}

/// Asks the recommender for a second opinion and merges what survives
/// verification. Returns the recommender's label if it produced any skills.
async fn apply_recommender(
    catalog: &SkillCatalog,
    recommender: &dyn SkillRecommender,
    extracted: &mut Vec<String>,
    text: &str,
) -> Option<&'static str> {
    match recommender.recommend(text).await {
        Ok(suggested) if suggested.is_empty() => None,
        Ok(suggested) => {
            let added = merge_verified(catalog, extracted, &suggested, text);
            debug!(
                "Recommender suggested {} skills, {} admitted",
                suggested.len(),
                added
            );
            Some(recommender.label())
        }
        Err(e) => {
            warn!("Skill recommender failed, using keyword results only: {e}");
            None
        }
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
