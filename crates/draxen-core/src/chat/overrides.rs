//! Canned replies that bypass the external generation call.
//!
//! Matching runs on a normalized copy of the message (trimmed, lower-cased).
//! Identity phrases must match exactly; origin phrases match anywhere in the
//! message. The table is static data and is never mutated.

/// Reply to "who are you" and its transliterated equivalents.
pub const IDENTITY_REPLY: &str = "li hwak";

/// Reply to any "where are you from" question.
pub const ORIGIN_REPLY: &str = "I'm from Morocco";

/// How a rule's phrases are compared against the normalized message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole normalized message equals a phrase.
    Exact,
    /// A phrase occurs somewhere in the normalized message.
    Contains,
}

/// One row of the override table.
#[derive(Debug)]
pub struct OverrideRule {
    pub name: &'static str,
    pub kind: MatchKind,
    pub phrases: &'static [&'static str],
    pub reply: &'static str,
}

impl OverrideRule {
    fn matches(&self, normalized: &str) -> bool {
        match self.kind {
            MatchKind::Exact => self.phrases.iter().any(|p| *p == normalized),
            MatchKind::Contains => self.phrases.iter().any(|p| normalized.contains(p)),
        }
    }
}

/// Rules in precedence order; the first match wins.
pub static OVERRIDE_TABLE: [OverrideRule; 2] = [
    OverrideRule {
        name: "identity",
        kind: MatchKind::Exact,
        phrases: &["chkon nta", "chkoun nta", "شكون نتا", "who r u", "who are you"],
        reply: IDENTITY_REPLY,
    },
    OverrideRule {
        name: "origin",
        kind: MatchKind::Contains,
        phrases: &["where are you from", "where r u from"],
        reply: ORIGIN_REPLY,
    },
];

/// Normalize a message for override lookup only; the original text is what
/// gets forwarded to the provider.
///
/// A byte-order mark counts as whitespace, since clients often prepend one.
pub fn normalize(message: &str) -> String {
    message
        .to_lowercase()
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .to_string()
}

/// Find the rule answering `message`, if any.
pub fn find_rule(message: &str) -> Option<&'static OverrideRule> {
    let normalized = normalize(message);
    OVERRIDE_TABLE.iter().find(|rule| rule.matches(&normalized))
}

/// Canned reply for `message`, if one applies.
pub fn lookup(message: &str) -> Option<&'static str> {
    find_rule(message).map(|rule| rule.reply)
}
