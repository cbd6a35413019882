//! Writing prompts

const GENERIC_IDEAS: [&str; 4] = [
    "Write about a personal experience that changed your perspective",
    "Describe a place that holds special meaning to you",
    "Create a dialogue between two contrasting characters",
    "Write about a moment of realization or discovery",
];

/// Produce writing prompts
///
/// A non-empty `topic` yields three prompts about it; otherwise the four
/// generic prompts are returned. `_context` is accepted for future use.
pub fn generate_ideas(_context: &str, topic: &str) -> Vec<String> {
    if topic.is_empty() {
        return GENERIC_IDEAS.iter().map(|idea| idea.to_string()).collect();
    }
    vec![
        format!("Explore different perspectives on '{}'", topic),
        format!("Write a story about '{}' from a unique angle", topic),
        format!("Create a detailed description of '{}'", topic),
    ]
}
