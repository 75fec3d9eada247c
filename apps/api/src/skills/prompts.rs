//! Prompts for the secondary (LLM) skill extractor.

use crate::skills::catalog::SkillCatalog;

/// Characters of resume text sent to the model.
pub const PROMPT_TEXT_LIMIT: usize = 2500;
/// Number of catalog names offered as naming examples.
pub const PROMPT_EXAMPLE_COUNT: usize = 15;

pub const SKILL_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract ONLY technical skills that are explicitly mentioned in this resume.

{no_invention}

Return ONLY valid JSON in this format:
{
    "extractedSkills": ["skill1", "skill2", "skill3"]
}

RULES:
1. ONLY include skills clearly mentioned in the resume
2. Use standard names (e.g., "JavaScript" not "JS")
3. Maximum 15 skills to avoid noise
4. Focus on technical skills: programming languages, frameworks, tools, databases
5. Examples: {examples}

Resume Text:
{resume_text}

Return only JSON, no explanation."#;

/// Builds the extraction prompt, truncating the resume text on a char boundary.
pub fn build_skill_extract_prompt(catalog: &SkillCatalog, resume_text: &str) -> String {
    let examples = catalog
        .all_skills()
        .into_iter()
        .take(PROMPT_EXAMPLE_COUNT)
        .collect::<Vec<_>>()
        .join(", ");
    let truncated: String = resume_text.chars().take(PROMPT_TEXT_LIMIT).collect();

    SKILL_EXTRACT_PROMPT_TEMPLATE
        .replace("{no_invention}", crate::llm_client::prompts::NO_INVENTION_INSTRUCTION)
        .replace("{examples}", &examples)
        .replace("{resume_text}", &truncated)
}
