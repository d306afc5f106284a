//! Title hook dispatch
//!
//! Maps each hook event to an action on the session title store and the
//! terminal title.

mod event;

pub(crate) use event::HookEvent;

use crate::consts::DEFAULT_TITLE;
use crate::error::AppError;
use crate::title::{SessionTitles, TitleStore};
use crate::utils::debug_enabled;

/// Marker shown in front of the session title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    Working,
    Notification,
    Completed,
}

impl Marker {
    pub(crate) fn icon(self) -> &'static str {
        match self {
            Marker::Working => "⏳",
            Marker::Notification => "🔔",
            Marker::Completed => "✅",
        }
    }
}

/// Title shown at session start, independent of stored state
pub(crate) const SESSION_START_ICON: &str = "🚀";

/// What to do with the terminal title after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TitleAction {
    /// Set the terminal title to this text
    Set(String),
    /// Leave the terminal title alone
    None,
}

fn compose(icon: &str, title: &str) -> String {
    format!("{icon} {title}")
}

fn marked<S: TitleStore>(
    titles: &SessionTitles<S>,
    session_id: &str,
    marker: Marker,
) -> TitleAction {
    TitleAction::Set(compose(marker.icon(), &titles.get(session_id)))
}

/// Apply an event to the store and decide the resulting terminal title.
pub(crate) fn dispatch<S: TitleStore>(
    event: &HookEvent,
    titles: &mut SessionTitles<S>,
) -> Result<TitleAction, AppError> {
    let action = match event {
        HookEvent::UserPromptSubmit { session_id, prompt } => {
            titles.capture(session_id, prompt)?;
            marked(titles, session_id, Marker::Working)
        }
        HookEvent::Notification { session_id } => {
            marked(titles, session_id, Marker::Notification)
        }
        HookEvent::Stop { session_id } => marked(titles, session_id, Marker::Completed),
        HookEvent::SessionStart { .. } => {
            TitleAction::Set(compose(SESSION_START_ICON, DEFAULT_TITLE))
        }
        HookEvent::SessionEnd { session_id } => {
            titles.delete(session_id)?;
            TitleAction::None
        }
        HookEvent::Unrecognized { name } => {
            if debug_enabled() {
                eprintln!(
                    "Ignoring hook event {}",
                    name.as_deref().unwrap_or("<unnamed>")
                );
            }
            TitleAction::None
        }
        HookEvent::MissingSession => TitleAction::None,
    };
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::MemoryTitleStore;

    fn titles() -> SessionTitles<MemoryTitleStore> {
        SessionTitles::new(MemoryTitleStore::default())
    }

    fn prompt(session_id: &str, text: &str) -> HookEvent {
        HookEvent::UserPromptSubmit {
            session_id: session_id.to_string(),
            prompt: text.to_string(),
        }
    }

    #[test]
    fn prompt_submit_captures_and_marks_working() {
        let mut t = titles();
        let action = dispatch(&prompt("s", "Fix the login bug"), &mut t).unwrap();
        assert_eq!(action, TitleAction::Set("⏳ Fix the login bug".to_string()));
        assert_eq!(t.get("s"), "Fix the login bug");
    }

    #[test]
    fn prompt_submit_without_prompt_leaves_title_open() {
        let mut t = titles();
        let bare = HookEvent::parse(r#"{"hook_event_name":"UserPromptSubmit","session_id":"s"}"#)
            .unwrap();
        assert_eq!(
            dispatch(&bare, &mut t).unwrap(),
            TitleAction::Set("⏳ claude".to_string())
        );
        assert!(t.store().records.is_empty());

        dispatch(&prompt("s", "Fix the login bug"), &mut t).unwrap();
        assert_eq!(t.get("s"), "Fix the login bug");
    }

    #[test]
    fn later_prompts_keep_first_title() {
        let mut t = titles();
        dispatch(&prompt("s", "first"), &mut t).unwrap();
        let action = dispatch(&prompt("s", "second"), &mut t).unwrap();
        assert_eq!(action, TitleAction::Set("⏳ first".to_string()));
    }

    #[test]
    fn notification_and_stop_use_stored_title() {
        let mut t = titles();
        dispatch(&prompt("s", "deploy"), &mut t).unwrap();
        let notify = HookEvent::Notification { session_id: "s".into() };
        let stop = HookEvent::Stop { session_id: "s".into() };
        assert_eq!(
            dispatch(&notify, &mut t).unwrap(),
            TitleAction::Set("🔔 deploy".to_string())
        );
        assert_eq!(
            dispatch(&stop, &mut t).unwrap(),
            TitleAction::Set("✅ deploy".to_string())
        );
    }

    #[test]
    fn stop_without_record_uses_default() {
        let mut t = titles();
        let stop = HookEvent::Stop { session_id: "s".into() };
        assert_eq!(
            dispatch(&stop, &mut t).unwrap(),
            TitleAction::Set("✅ claude".to_string())
        );
    }

    #[test]
    fn session_start_ignores_stored_state() {
        let mut t = titles();
        dispatch(&prompt("s", "deploy"), &mut t).unwrap();
        let start = HookEvent::SessionStart { session_id: "s".into() };
        assert_eq!(
            dispatch(&start, &mut t).unwrap(),
            TitleAction::Set("🚀 claude".to_string())
        );
        assert_eq!(t.get("s"), "deploy");
    }

    #[test]
    fn session_end_deletes_record() {
        let mut t = titles();
        dispatch(&prompt("s", "deploy"), &mut t).unwrap();
        let end = HookEvent::SessionEnd { session_id: "s".into() };
        assert_eq!(dispatch(&end, &mut t).unwrap(), TitleAction::None);
        assert_eq!(t.get("s"), "claude");
    }

    #[test]
    fn unrecognized_and_missing_session_do_nothing() {
        let mut t = titles();
        let unknown = HookEvent::Unrecognized {
            name: Some("PreToolUse".into()),
        };
        assert_eq!(dispatch(&unknown, &mut t).unwrap(), TitleAction::None);
        assert_eq!(
            dispatch(&HookEvent::MissingSession, &mut t).unwrap(),
            TitleAction::None
        );
        assert!(t.store().records.is_empty());
    }
}
