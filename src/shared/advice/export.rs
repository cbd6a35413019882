/**
 * Document Export
 *
 * Renders document content in one of the supported formats. `txt` and
 * `markdown` pass the content through untouched; `html` wraps it in a
 * minimal page with the text inside `<pre>`. Content is not escaped.
 */

use crate::shared::error::SharedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported export formats
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Txt,
    Html,
    Markdown,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Html => "html",
            ExportFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = SharedError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "txt" => Ok(ExportFormat::Txt),
            "html" => Ok(ExportFormat::Html),
            "markdown" => Ok(ExportFormat::Markdown),
            other => Err(SharedError::unsupported_format(other)),
        }
    }
}

/// Exported content tagged with its format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportedDocument {
    pub format: ExportFormat,
    pub content: String,
}

/// Export `content` in the format named by `format`
pub fn export_document(content: &str, format: &str) -> Result<ExportedDocument, SharedError> {
    let format: ExportFormat = format.parse()?;
    let content = match format {
        ExportFormat::Txt | ExportFormat::Markdown => content.to_string(),
        ExportFormat::Html => format!(
            "<html><head><title>Exported Document</title></head><body><pre>{}</pre></body></html>",
            content
        ),
    };
    Ok(ExportedDocument { format, content })
}
