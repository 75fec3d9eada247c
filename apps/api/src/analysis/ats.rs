//! ATS keyword overlap: which of a candidate's skills a job description mentions.
//!
//! Deliberately literal: a skill counts as matched when its lowercase form is a
//! substring of the lowercase job description. No stemming, no weighting.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    /// 0 – 100, floor of the matched percentage.
    pub score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Core overlap algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Splits `skills` into those the job description mentions and those it does
/// not. Both lists keep input order. No skills scores 0.
pub fn analyze_overlap<S: AsRef<str>>(job_description: &str, skills: &[S]) -> AtsReport {
    let description = job_description.to_lowercase();

    let (matched_skills, missing_skills): (Vec<String>, Vec<String>) = skills
        .iter()
        .map(|s| s.as_ref().to_string())
        .partition(|s| description.contains(&s.to_lowercase()));

    let score = if skills.is_empty() {
        0
    } else {
        (matched_skills.len() * 100 / skills.len()) as u32
    };

    AtsReport {
        score,
        matched_skills,
        missing_skills,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
