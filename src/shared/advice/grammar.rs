//! Grammar checks
//!
//! Only one rule exists today: a double space is reported once, at its first
//! occurrence. Positions are 0-based character offsets, not byte offsets.

use serde::{Deserialize, Serialize};

/// Category of a grammar issue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Formatting,
}

impl IssueKind {
    /// Suggestion shown for an issue of this kind
    pub fn suggestion(self) -> &'static str {
        match self {
            IssueKind::Formatting => "Remove extra spaces for better formatting.",
        }
    }
}

/// A single detected issue
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrammarIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub position: usize,
}

/// Result of a grammar check; `suggestions` is derived 1:1 from `issues`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrammarReport {
    pub issues: Vec<GrammarIssue>,
    pub suggestions: Vec<String>,
}

/// Check `text` and derive suggestions from the issues found
pub fn check_grammar(text: &str) -> GrammarReport {
    let issues = find_issues(text);
    let suggestions = issues
        .iter()
        .map(|issue| issue.kind.suggestion().to_string())
        .collect();
    GrammarReport { issues, suggestions }
}

fn find_issues(text: &str) -> Vec<GrammarIssue> {
    let mut issues = Vec::new();
    if let Some(byte_offset) = text.find("  ") {
        issues.push(GrammarIssue {
            kind: IssueKind::Formatting,
            message: "Double spaces detected".to_string(),
            position: text[..byte_offset].chars().count(),
        });
    }
    issues
}
