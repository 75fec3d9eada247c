//! Skill extraction engine.
//!
//! Algorithm:
//! 1. Reject text shorter than 10 characters after trimming.
//! 2. Collapse whitespace runs to one space and lowercase.
//! 3. For every alias longer than one character, find every occurrence
//!    (overlapping search) that sits on whole-word boundaries.
//! 4. Score each occurrence from its context window, keeping the maximum per
//!    canonical skill.
//! 5. Skills above the candidate threshold get `final = max × weight`, sorted
//!    descending (stable on catalog order).
//! 6. Report skills whose final score clears the reporting threshold, capped.
//!
//! Pure and deterministic: per-call state only, the catalog is never written.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::skills::catalog::SkillCatalog;
use crate::skills::confidence::{score_occurrence, ConfidenceWeights};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Inputs shorter than this many characters (after trimming) yield nothing.
pub const MIN_TEXT_CHARS: usize = 10;

#[derive(Debug, Clone)]
pub struct ExtractionThresholds {
    /// Max confidence must exceed this for a skill to be ranked at all.
    pub candidate: f64,
    /// Final score must exceed this for a skill to be reported.
    pub report: f64,
    pub max_results: usize,
}

impl Default for ExtractionThresholds {
    fn default() -> Self {
        Self {
            candidate: 0.3,
            report: 0.4,
            max_results: 25,
        }
    }
}

/// A ranked skill with the numbers behind its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSkill {
    pub name: String,
    pub category: String,
    /// Best occurrence confidence across all aliases and positions.
    pub confidence: f64,
    /// `confidence × weight`
    pub final_score: f64,
}

pub struct SkillExtractor {
    catalog: Arc<SkillCatalog>,
    weights: ConfidenceWeights,
    thresholds: ExtractionThresholds,
}

impl SkillExtractor {
    pub fn new(catalog: Arc<SkillCatalog>) -> Self {
        Self::with_settings(
            catalog,
            ConfidenceWeights::default(),
            ExtractionThresholds::default(),
        )
    }

    pub fn with_settings(
        catalog: Arc<SkillCatalog>,
        weights: ConfidenceWeights,
        thresholds: ExtractionThresholds,
    ) -> Self {
        Self {
            catalog,
            weights,
            thresholds,
        }
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Canonical names of the skills genuinely present in `text`, best first.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_scored(text)
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    /// Reported skills with their scores, best first.
    pub fn extract_scored(&self, text: &str) -> Vec<ScoredSkill> {
        let reported: Vec<ScoredSkill> = self
            .rank_candidates(text)
            .into_iter()
            .filter(|s| s.final_score > self.thresholds.report)
            .take(self.thresholds.max_results)
            .collect();

        debug!("Skill extraction reported {} skills", reported.len());
        reported
    }

    /// Every skill whose best confidence clears the candidate threshold, sorted
    /// by final score. Includes the gray zone the reporting threshold drops.
    pub fn rank_candidates(&self, text: &str) -> Vec<ScoredSkill> {
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return Vec::new();
        }

        let normalized = normalize(text);

        let mut candidates: Vec<ScoredSkill> = Vec::new();
        for definition in self.catalog.definitions() {
            let best = definition
                .aliases
                .iter()
                .filter(|alias| alias.chars().count() > 1)
                .flat_map(|alias| {
                    word_occurrences(&normalized, alias).map(move |pos| (pos, alias.len()))
                })
                .map(|(pos, len)| score_occurrence(&normalized, pos, len, &self.weights))
                .fold(0.0_f64, f64::max);

            if best > self.thresholds.candidate {
                candidates.push(ScoredSkill {
                    name: definition.canonical_name.clone(),
                    category: definition.category.clone(),
                    confidence: best,
                    final_score: best * definition.weight,
                });
            }
        }

        // sort_by is stable: equal scores keep catalog order
        candidates.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
        candidates
    }
}

/// Collapses whitespace runs to a single space and lowercases.
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").to_lowercase()
}

/// Byte offsets of every occurrence of `needle` in `haystack`, including
/// overlapping ones (the search resumes one character after each hit).
pub fn occurrences<'a>(haystack: &'a str, needle: &'a str) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() || from > haystack.len() {
            return None;
        }
        let pos = from + haystack[from..].find(needle)?;
        let step = haystack[pos..].chars().next().map_or(1, char::len_utf8);
        from = pos + step;
        Some(pos)
    })
}

/// Occurrences whose neighbouring characters (if any) are not alphanumeric.
pub fn word_occurrences<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    occurrences(haystack, needle).filter(move |&pos| is_whole_word(haystack, pos, needle.len()))
}

fn is_whole_word(text: &str, pos: usize, len: usize) -> bool {
    let before_ok = text[..pos]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());
    let after_ok = text[pos + len..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric());
    before_ok && after_ok
}
