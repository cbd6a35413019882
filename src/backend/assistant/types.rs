/**
 * Assistant Handler Types
 *
 * Request and response bodies for the advice endpoints. Request fields
 * may be missing or `null`; both read as empty strings (export format reads
 * as `txt`).
 */

use serde::{Deserialize, Serialize};
use crate::shared::advice::{ExportFormat, GrammarIssue};

/// Chat request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ChatRequest {
    /// The user's message
    pub message: Option<String>,
    /// Current draft, sent along for context
    pub context: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    pub fn context(&self) -> &str {
        self.context.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
}

/// Body of the grammar and style endpoints
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct TextRequest {
    pub text: Option<String>,
}

impl TextRequest {
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GrammarResponse {
    pub success: bool,
    pub issues: Vec<GrammarIssue>,
    pub suggestions: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct StyleResponse {
    pub success: bool,
    pub suggestions: Vec<String>,
    pub improved_text: String,
}

/// Idea request; an empty `topic` asks for generic prompts
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct IdeasRequest {
    pub context: Option<String>,
    pub topic: Option<String>,
}

impl IdeasRequest {
    pub fn context(&self) -> &str {
        self.context.as_deref().unwrap_or_default()
    }

    pub fn topic(&self) -> &str {
        self.topic.as_deref().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct IdeasResponse {
    pub success: bool,
    pub ideas: Vec<String>,
}

/// Export request
///
/// `format` stays a raw string so unknown values reach the handler and get
/// the "Unsupported format" error instead of a deserialization rejection.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ExportRequest {
    pub content: Option<String>,
    pub format: Option<String>,
}

impl ExportRequest {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Requested format; missing or `null` means `txt`
    pub fn format(&self) -> &str {
        self.format
            .as_deref()
            .unwrap_or(ExportFormat::default().as_str())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ExportResponse {
    pub success: bool,
    pub format: ExportFormat,
    pub content: String,
}
