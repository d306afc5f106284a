//! Hook event parsing
//!
//! Claude Code passes one JSON object per hook invocation on stdin.

use serde::Deserialize;

use crate::error::AppError;

/// Raw hook payload. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct HookInput {
    #[serde(default)]
    hook_event_name: Option<String>,
    #[serde(default)]
    session_id: Option<String>,
    /// Only present for UserPromptSubmit; absent reads as empty
    #[serde(default)]
    prompt: Option<String>,
}

/// The hook events the title hook reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HookEvent {
    UserPromptSubmit { session_id: String, prompt: String },
    Notification { session_id: String },
    Stop { session_id: String },
    SessionStart { session_id: String },
    SessionEnd { session_id: String },
    /// Event kind this hook has no handling for
    Unrecognized { name: Option<String> },
    /// Known or unknown event without a session id
    MissingSession,
}

impl HookEvent {
    /// Parse a hook payload. Only invalid JSON is an error.
    pub(crate) fn parse(json: &str) -> Result<Self, AppError> {
        let input: HookInput = serde_json::from_str(json)?;
        Ok(Self::from_input(input))
    }

    /// Session the event belongs to, if any
    pub(crate) fn session_id(&self) -> Option<&str> {
        match self {
            HookEvent::UserPromptSubmit { session_id, .. }
            | HookEvent::Notification { session_id }
            | HookEvent::Stop { session_id }
            | HookEvent::SessionStart { session_id }
            | HookEvent::SessionEnd { session_id } => Some(session_id),
            HookEvent::Unrecognized { .. } | HookEvent::MissingSession => None,
        }
    }

    fn from_input(input: HookInput) -> Self {
        let Some(session_id) = input.session_id.filter(|id| !id.is_empty()) else {
            return HookEvent::MissingSession;
        };

        match input.hook_event_name.as_deref() {
            Some("UserPromptSubmit") => HookEvent::UserPromptSubmit {
                session_id,
                prompt: input.prompt.unwrap_or_default(),
            },
            Some("Notification") => HookEvent::Notification { session_id },
            Some("Stop") => HookEvent::Stop { session_id },
            Some("SessionStart") => HookEvent::SessionStart { session_id },
            Some("SessionEnd") => HookEvent::SessionEnd { session_id },
            _ => HookEvent::Unrecognized {
                name: input.hook_event_name,
            },
        }
    }
}
