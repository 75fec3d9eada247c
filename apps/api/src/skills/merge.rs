//! Verified merge of externally suggested skills into an extraction result.
//!
//! A suggestion is only admitted when it is a catalog canonical name AND that
//! name appears verbatim (case-insensitively) in the source text. Anything
//! else is dropped silently.

use crate::skills::catalog::SkillCatalog;

/// Appends every admissible suggestion to `primary`, preserving order and
/// skipping anything already present. Returns the number of skills added.
pub fn merge_verified<S: AsRef<str>>(
    catalog: &SkillCatalog,
    primary: &mut Vec<String>,
    suggestions: &[S],
    source_text: &str,
) -> usize {
    let source_lower = source_text.to_lowercase();
    let before = primary.len();

    for suggestion in suggestions {
        let skill = suggestion.as_ref().trim();
        if !catalog.contains(skill) || primary.iter().any(|p| p.as_str() == skill) {
            continue;
        }
        if source_lower.contains(&skill.to_lowercase()) {
            primary.push(skill.to_string());
        }
    }

    primary.len() - before
}

/// Removes repeated names, keeping the first occurrence.
pub fn dedup_preserving_order(skills: &mut Vec<String>) {
    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    skills.retain(|skill| {
        if seen.contains(skill) {
            false
        } else {
            seen.push(skill.clone());
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_suggestions_are_dropped() {
        let catalog = SkillCatalog::builtin();
        let mut skills = vec!["Python".to_string()];
        let added = merge_verified(
            &catalog,
            &mut skills,
            &["Quantum Basket Weaving", "NoSuchSkill"],
            "Quantum Basket Weaving and NoSuchSkill with Python",
        );
        assert_eq!(added, 0);
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn test_suggestion_must_appear_in_source_text() {
        let catalog = SkillCatalog::builtin();
        let mut skills = Vec::new();
        let added = merge_verified(
            &catalog,
            &mut skills,
            &["Kubernetes", "Docker"],
            "Shipped containers with DOCKER every day",
        );
        assert_eq!(added, 1);
        assert_eq!(skills, vec!["Docker"]);
    }

    #[test]
    fn test_canonical_match_is_case_sensitive_on_catalog_side() {
        let catalog = SkillCatalog::builtin();
        let mut skills = Vec::new();
        merge_verified(&catalog, &mut skills, &["docker"], "docker");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_existing_skills_are_not_duplicated() {
        let catalog = SkillCatalog::builtin();
        let mut skills = vec!["Docker".to_string()];
        let added = merge_verified(&catalog, &mut skills, &["Docker", "Docker"], "docker");
        assert_eq!(added, 0);
        assert_eq!(skills, vec!["Docker"]);
    }

    #[test]
    fn test_dedup_preserving_order() {
        let mut skills: Vec<String> = ["Go", "Rust", "Go", "Python", "Rust"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        dedup_preserving_order(&mut skills);
        assert_eq!(skills, vec!["Go", "Rust", "Python"]);
    }
}
