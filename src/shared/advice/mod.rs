//! Text-Advice Engine
//!
//! Stateless, rule-based text helpers behind the assistant endpoints. Every
//! function here is pure: text in, plain data out, no I/O and no state.
//!
//! # Architecture
//!
//! - **`chat`** - Ordered keyword rule table producing chat replies
//! - **`grammar`** - Formatting checks and the suggestions derived from them
//! - **`style`** - Sentence and paragraph length hints
//! - **`ideas`** - Writing prompts, optionally about a topic
//! - **`export`** - Rendering content as txt, html or markdown
//!
//! # Example
//!
//! ```rust
//! use rubricy::shared::advice::{chat_reply, generate_ideas};
//!
//! assert!(chat_reply("Can you check my spelling?", "").contains("grammar"));
//! assert_eq!(generate_ideas("", "forests").len(), 3);
//! ```

/// Chat keyword rules
pub mod chat;

/// Grammar checks
pub mod grammar;

/// Style suggestions
pub mod style;

/// Idea prompts
pub mod ideas;

/// Document export
pub mod export;

pub use chat::{chat_reply, ChatRule, CHAT_RULES};
pub use grammar::{check_grammar, GrammarIssue, GrammarReport, IssueKind};
pub use style::{suggest_style, StyleReport};
pub use ideas::generate_ideas;
pub use export::{export_document, ExportFormat, ExportedDocument};
