//! Context-window confidence scoring for a single skill occurrence.
//!
//! Heuristic, not a probability model. Indicator phrases are matched by plain
//! substring containment inside the window, so "experiences" and
//! "inexperienced" both count for "experience". Scores stay comparable across
//! calls only because the vocabulary and weights never change at runtime.

/// Phrases that suggest hands-on competency near a mention.
pub const POSITIVE_INDICATORS: &[&str] = &[
    "experience",
    "worked",
    "using",
    "with",
    "in",
    "knowledge",
    "familiar",
    "proficient",
    "expert",
    "skilled",
    "developed",
    "built",
    "created",
    "implemented",
    "programming",
    "coding",
    "development",
    "project",
    "years",
    "months",
    "framework",
    "library",
    "language",
    "database",
    "tool",
    "platform",
    "technology",
    "stack",
    "api",
    "application",
];

/// Phrases that suggest aspiration rather than competency.
pub const NEGATIVE_INDICATORS: &[&str] = &[
    "learning",
    "want to learn",
    "interested in",
    "planning to",
    "considering",
    "might",
    "could",
    "should",
    "wish",
    "hope",
];

/// Resume section headers. Presence anywhere in the window earns a flat bonus.
pub const SECTION_HEADERS: &[&str] = &[
    "technical skills",
    "programming",
    "technologies",
    "experience",
    "projects",
    "work experience",
    "skills",
    "expertise",
    "tools",
];

#[derive(Debug, Clone)]
pub struct ConfidenceWeights {
    pub base: f64,
    pub positive_step: f64,
    pub positive_cap: f64,
    pub negative_step: f64,
    pub negative_cap: f64,
    pub section_bonus: f64,
    /// Characters taken on each side of the match.
    pub window_radius: usize,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            base: 0.5,
            positive_step: 0.1,
            positive_cap: 0.3,
            negative_step: 0.2,
            negative_cap: 0.4,
            section_bonus: 0.2,
            window_radius: 100,
        }
    }
}

/// Scores the occurrence at byte offset `position` of length `match_len` bytes
/// inside the lowercase, whitespace-normalized `text`. Returns a value in [0, 1].
///
/// `position` and `position + match_len` must lie on char boundaries.
pub fn score_occurrence(
    text: &str,
    position: usize,
    match_len: usize,
    weights: &ConfidenceWeights,
) -> f64 {
    let window = context_window(text, position, position + match_len, weights.window_radius);

    let positive = count_present(window, POSITIVE_INDICATORS);
    let negative = count_present(window, NEGATIVE_INDICATORS);
    let in_section = SECTION_HEADERS.iter().any(|h| window.contains(h));

    let mut confidence = weights.base;
    confidence += (positive as f64 * weights.positive_step).min(weights.positive_cap);
    confidence -= (negative as f64 * weights.negative_step).min(weights.negative_cap);
    if in_section {
        confidence += weights.section_bonus;
    }

    confidence.clamp(0.0, 1.0)
}

/// Slice of `text` spanning `radius` characters before `start` and `radius`
/// characters after `end`, clamped to the text bounds.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let window_start = if radius == 0 {
        start
    } else {
        text[..start]
            .char_indices()
            .rev()
            .nth(radius - 1)
            .map(|(i, _)| i)
            .unwrap_or(0)
    };
    let window_end = text[end..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| end + i)
        .unwrap_or(text.len());

    &text[window_start..window_end]
}

/// Number of distinct vocabulary entries contained in `window`.
fn count_present(window: &str, vocabulary: &[&str]) -> usize {
    vocabulary.iter().filter(|phrase| window.contains(*phrase)).count()
}
