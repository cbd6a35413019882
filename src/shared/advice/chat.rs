/**
 * Chat Replies
 *
 * Replies are chosen from an ordered rule table. The lower-cased message is
 * tested against each rule's keywords as plain substrings; the first rule
 * with any hit wins. Keywords are not word-bounded, so "this" matches the
 * `hi` rule.
 */

/// A keyword rule: any keyword present selects `reply`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl ChatRule {
    /// Whether this rule fires for an already lower-cased message
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Rules in priority order
pub const CHAT_RULES: &[ChatRule] = &[
    ChatRule {
        keywords: &["grammar", "spell"],
        reply: "I can help you check grammar and spelling! Try using the 'Check Grammar' button or paste your text here.",
    },
    ChatRule {
        keywords: &["style", "improve"],
        reply: "I can help improve your writing style! Use the 'Improve Style' button for suggestions.",
    },
    ChatRule {
        keywords: &["idea", "suggest"],
        reply: "I can help generate writing ideas! Use the 'Generate Ideas' button or tell me what you're writing about.",
    },
    ChatRule {
        keywords: &["hello", "hi"],
        reply: "Hello! I'm Rubricy, your writing assistant. How can I help you with your writing today?",
    },
    ChatRule {
        keywords: &["help"],
        reply: "I can help you with:\n• Grammar and spelling checks\n• Writing style improvements\n• Generating ideas\n• Organizing your thoughts\n\nWhat would you like help with?",
    },
];

/// Reply to a chat message
///
/// `_context` carries the user's current draft; no rule reads it yet.
pub fn chat_reply(message: &str, _context: &str) -> String {
    let lowered = message.to_lowercase();
    match CHAT_RULES.iter().find(|rule| rule.matches(&lowered)) {
        Some(rule) => rule.reply.to_string(),
        None => fallback_reply(message),
    }
}

fn fallback_reply(message: &str) -> String {
    format!(
        "I understand you're asking about '{}'. I'm here to help with your writing! Try asking about grammar, style, or ideas for your piece.",
        message
    )
}
