// Shared prompt fragments. Feature modules keep their own prompts.rs alongside them.

/// Closing directive appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_DIRECTIVE: &str = "Return only the JSON object, no additional text:";
