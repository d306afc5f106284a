//! Session title store
//!
//! Captures a short title from the first prompt of a session, hands it back
//! for every later event and forgets it when the session ends.

mod derive;
mod store;

pub(crate) use derive::derive_title;
pub(crate) use store::{FileTitleStore, TitleStore};

#[cfg(test)]
pub(crate) use store::MemoryTitleStore;

use crate::consts::DEFAULT_TITLE;
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Title operations over an injected store
pub(crate) struct SessionTitles<S: TitleStore> {
    store: S,
}

impl<S: TitleStore> SessionTitles<S> {
    pub(crate) fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a title derived from `prompt` unless the session already has one.
    ///
    /// An empty prompt does not qualify and leaves the session untitled.
    /// Returns `true` when a record was written.
    pub(crate) fn capture(&mut self, session_id: &str, prompt: &str) -> Result<bool, AppError> {
        if prompt.is_empty() || self.store.contains(session_id) {
            return Ok(false);
        }
        let title = derive_title(prompt);
        if debug_enabled() {
            eprintln!("Captured title {title:?} for session {session_id}");
        }
        self.store.write(session_id, &title)?;
        Ok(true)
    }

    /// Stored title, or the default when there is none
    pub(crate) fn get(&self, session_id: &str) -> String {
        self.store
            .read(session_id)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    pub(crate) fn delete(&mut self, session_id: &str) -> Result<(), AppError> {
        self.store.remove(session_id)
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
