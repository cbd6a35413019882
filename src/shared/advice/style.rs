//! Style suggestions
//!
//! Sentences are approximated by splitting on `.`, paragraphs by splitting
//! on a blank line. Only the first paragraph is measured. Lengths are in
//! characters.

use serde::{Deserialize, Serialize};

pub const LONG_SENTENCE_CHARS: usize = 100;
pub const LONG_PARAGRAPH_CHARS: usize = 500;

pub const LONG_SENTENCE_SUGGESTION: &str =
    "Consider breaking up long sentences for better readability.";
pub const LONG_PARAGRAPH_SUGGESTION: &str =
    "Consider splitting long paragraphs into shorter ones.";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleReport {
    pub suggestions: Vec<String>,
    /// Currently always the input, unchanged
    pub improved_text: String,
}

/// Analyse `text` for overly long sentences and a long opening paragraph
pub fn suggest_style(text: &str) -> StyleReport {
    let mut suggestions = Vec::new();

    if text
        .split('.')
        .any(|sentence| sentence.chars().count() > LONG_SENTENCE_CHARS)
    {
        suggestions.push(LONG_SENTENCE_SUGGESTION.to_string());
    }

    let first_paragraph = text.split("\n\n").next().unwrap_or("");
    if first_paragraph.chars().count() > LONG_PARAGRAPH_CHARS {
        suggestions.push(LONG_PARAGRAPH_SUGGESTION.to_string());
    }

    StyleReport {
        improved_text: apply_improvements(text, &suggestions),
        suggestions,
    }
}

// TODO: rewrite flagged sentences once a real language backend is wired in.
fn apply_improvements(text: &str, _suggestions: &[String]) -> String {
    text.to_string()
}
