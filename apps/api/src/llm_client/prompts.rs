// Shared prompt fragments. Each feature that needs LLM calls defines its own
// prompts.rs alongside it and composes these.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to every extraction prompt.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    CRITICAL: Only report items that are explicitly written in the provided text. \
    Do NOT infer, generalize, or invent. If in doubt, leave it out.";
