//! Complementary-skill suggestions derived from a static pairing table.
//!
//! Output order is deterministic: complements of each input skill in input
//! order (each complement list in table order), then the universal skills in
//! declaration order. First occurrence wins.

/// Upper bound on suggestions returned.
pub const MAX_SUGGESTIONS: usize = 6;

/// Returned when there is nothing to build on.
pub const BOOTSTRAP_SKILLS: &[&str] = &["Git", "Linux", "Docker", "REST API", "SQL", "Testing"];

/// Returned by the upload pipeline when a resume yields no skills at all.
pub const NO_SKILLS_FALLBACK: &[&str] =
    &["Git", "Linux", "Problem Solving", "Communication", "Teamwork"];

const UNIVERSAL_SKILLS: &[&str] = &["Git", "Linux", "Docker", "Testing", "CI/CD", "REST API"];

const SKILL_PAIRINGS: &[(&str, &[&str])] = &[
    ("JavaScript", &["TypeScript", "Node.js", "React", "HTML", "CSS"]),
    ("Python", &["Django", "Flask", "Pandas", "NumPy", "SQL"]),
    ("React", &["JavaScript", "TypeScript", "Redux", "Next.js"]),
    ("Java", &["Spring", "Maven", "Hibernate", "JUnit"]),
    ("Node.js", &["Express.js", "MongoDB", "JavaScript", "npm"]),
    ("HTML", &["CSS", "JavaScript", "Bootstrap"]),
    ("CSS", &["HTML", "JavaScript", "Sass", "Bootstrap"]),
    ("AWS", &["Docker", "Kubernetes", "Linux", "Terraform"]),
    ("Docker", &["Kubernetes", "Linux", "CI/CD"]),
    ("SQL", &["MySQL", "PostgreSQL", "Database Design"]),
    ("Git", &["GitHub", "GitLab", "CI/CD"]),
];

fn complements_of(skill: &str) -> &'static [&'static str] {
    SKILL_PAIRINGS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, complements)| *complements)
        .unwrap_or(&[])
}

/// Skills that round out `extracted`, never repeating anything already in it.
pub fn suggest_complementary<S: AsRef<str>>(extracted: &[S]) -> Vec<String> {
    if extracted.is_empty() {
        return BOOTSTRAP_SKILLS.iter().map(|s| s.to_string()).collect();
    }

    let already_has = |skill: &str| extracted.iter().any(|e| e.as_ref() == skill);

    let mut suggestions: Vec<String> = Vec::new();
    let candidates = extracted
        .iter()
        .flat_map(|skill| complements_of(skill.as_ref()).iter())
        .chain(UNIVERSAL_SKILLS.iter());

    for &candidate in candidates {
        if !already_has(candidate) && !suggestions.iter().any(|s| s.as_str() == candidate) {
            suggestions.push(candidate.to_string());
        }
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_bootstrap_set() {
        let empty: [&str; 0] = [];
        for _ in 0..3 {
            assert_eq!(
                suggest_complementary(&empty),
                vec!["Git", "Linux", "Docker", "REST API", "SQL", "Testing"]
            );
        }
    }

    #[test]
    fn test_complements_follow_input_then_table_order() {
        let suggestions = suggest_complementary(&["Python"]);
        assert_eq!(
            suggestions,
            vec!["Django", "Flask", "Pandas", "NumPy", "SQL", "Git"]
        );
    }

    #[test]
    fn test_never_suggests_existing_skills() {
        let have = ["JavaScript", "TypeScript", "React", "Git"];
        let suggestions = suggest_complementary(&have);
        for skill in have {
            assert!(!suggestions.iter().any(|s| s.as_str() == skill), "{skill} suggested again");
        }
        assert_eq!(suggestions[0], "Node.js");
    }

    #[test]
    fn test_no_duplicates_and_capped() {
        let suggestions = suggest_complementary(&["HTML", "CSS", "Docker", "AWS"]);
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        let mut deduped = suggestions.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), suggestions.len());
    }

    #[test]
    fn test_unpaired_skill_falls_back_to_universal_set() {
        let suggestions = suggest_complementary(&["Svelte".to_string()]);
        assert_eq!(
            suggestions,
            vec!["Git", "Linux", "Docker", "Testing", "CI/CD", "REST API"]
        );
    }
}
