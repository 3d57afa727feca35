// Shared prompt fragments used across every LLM call.
// Task-specific prompts live next to the service that uses them.

/// System instruction that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Value the model must emit for any scalar field it cannot find.
pub const NOT_FOUND: &str = "Not Found";

/// Prefixes `role` to the JSON-only instruction, forming a full system prompt.
pub fn json_only_system(role: &str) -> String {
    format!("{role} {JSON_ONLY_SYSTEM}")
}
