//! Prompt classification
//!
//! Ordered rules, first match wins. The default styling applies when no
//! rule matches.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Styling {
    Command,
    Question,
    Creation,
    Fix,
    Refactor,
    Default,
}

impl Styling {
    /// ANSI SGR color code
    pub(crate) fn color(self) -> &'static str {
        match self {
            Styling::Command => "33",
            Styling::Question => "34",
            Styling::Creation => "32",
            Styling::Fix => "31",
            Styling::Refactor => "35",
            Styling::Default => "37",
        }
    }

    pub(crate) fn icon(self) -> &'static str {
        match self {
            Styling::Command => "⚡",
            Styling::Question => "❓",
            Styling::Creation => "💡",
            Styling::Fix => "🐛",
            Styling::Refactor => "♻️",
            Styling::Default => "💬",
        }
    }
}

/// A prompt predicate gets the raw prompt and its lowercase form
type Predicate = fn(raw: &str, lower: &str) -> bool;

const CREATION_WORDS: &[&str] = &["create", "write", "add", "implement", "build"];
const FIX_WORDS: &[&str] = &["fix", "debug", "error", "issue"];
const REFACTOR_WORDS: &[&str] = &["refactor", "improve", "optimize"];

fn is_command(raw: &str, _lower: &str) -> bool {
    raw.starts_with('/')
}

fn is_question(raw: &str, _lower: &str) -> bool {
    raw.contains('?')
}

fn mentions_any(lower: &str, words: &[&str]) -> bool {
    words.iter().any(|word| lower.contains(word))
}

fn is_creation(_raw: &str, lower: &str) -> bool {
    mentions_any(lower, CREATION_WORDS)
}

fn is_fix(_raw: &str, lower: &str) -> bool {
    mentions_any(lower, FIX_WORDS)
}

fn is_refactor(_raw: &str, lower: &str) -> bool {
    mentions_any(lower, REFACTOR_WORDS)
}

pub(crate) const RULES: &[(Predicate, Styling)] = &[
    (is_command, Styling::Command),
    (is_question, Styling::Question),
    (is_creation, Styling::Creation),
    (is_fix, Styling::Fix),
    (is_refactor, Styling::Refactor),
];

pub(crate) fn classify(prompt: &str) -> Styling {
    let lower = prompt.to_lowercase();
    RULES
        .iter()
        .find(|(matches, _)| matches(prompt, &lower))
        .map_or(Styling::Default, |&(_, styling)| styling)
}
