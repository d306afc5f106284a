//! Title derivation from the first prompt of a session

use crate::consts::{DEFAULT_TITLE, TITLE_MAX_CHARS};

/// Split a leading `/command` token off an already trimmed prompt.
///
/// Command names are ASCII letters, digits, `-` and `_`. Returns the name
/// (without the slash) and the remainder after the token and any whitespace
/// following it.
fn split_slash_command(prompt: &str) -> Option<(&str, &str)> {
    let rest = prompt.strip_prefix('/')?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let (command, remainder) = rest.split_at(end);
    Some((command, remainder.trim_start()))
}

/// Derive a short session title from a prompt.
pub(crate) fn derive_title(prompt: &str) -> String {
    let prompt = prompt.trim();
    let base = match split_slash_command(prompt) {
        Some((command, "")) => command,
        Some((_, remainder)) => remainder,
        None if prompt.is_empty() => DEFAULT_TITLE,
        None => prompt,
    };

    let collapsed = base.replace(['\r', '\n'], " ");
    let title: String = collapsed.trim().chars().take(TITLE_MAX_CHARS).collect();

    if title.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        title
    }
}
