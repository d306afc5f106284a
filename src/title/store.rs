//! Title record storage
//!
//! Records are keyed by session id. Production uses one flat file per
//! session inside the state directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::consts::{TITLE_FILE_PREFIX, TITLE_FILE_SUFFIX};
use crate::error::AppError;
use crate::utils::debug_enabled;

/// Key-value storage for session titles
pub(crate) trait TitleStore {
    /// Whether any record exists for the session, readable or not
    fn contains(&self, session_id: &str) -> bool;

    /// Stored title, `None` when absent or unreadable
    fn read(&self, session_id: &str) -> Option<String>;

    fn write(&mut self, session_id: &str, title: &str) -> Result<(), AppError>;

    /// Remove the record; absent records are not an error
    fn remove(&mut self, session_id: &str) -> Result<(), AppError>;
}

/// Title files under a state directory
#[derive(Debug, Clone)]
pub(crate) struct FileTitleStore {
    dir: PathBuf,
}

impl FileTitleStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the record for a session id
    pub(crate) fn path_for(&self, session_id: &str) -> PathBuf {
        let key: String = session_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir
            .join(format!("{TITLE_FILE_PREFIX}{key}{TITLE_FILE_SUFFIX}"))
    }
}

fn read_record(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let title = content.trim();
            if title.is_empty() {
                None
            } else {
                Some(title.to_string())
            }
        }
        Err(err) => {
            if err.kind() != io::ErrorKind::NotFound && debug_enabled() {
                eprintln!("Failed to read title file {}: {}", path.display(), err);
            }
            None
        }
    }
}

impl TitleStore for FileTitleStore {
    fn contains(&self, session_id: &str) -> bool {
        self.path_for(session_id).exists()
    }

    fn read(&self, session_id: &str) -> Option<String> {
        read_record(&self.path_for(session_id))
    }

    fn write(&mut self, session_id: &str, title: &str) -> Result<(), AppError> {
        let path = self.path_for(session_id);
        fs::write(&path, title).map_err(|source| AppError::TitleWrite { path, source })
    }

    fn remove(&mut self, session_id: &str) -> Result<(), AppError> {
        let path = self.path_for(session_id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(AppError::TitleRemove { path, source }),
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryTitleStore {
    pub(crate) records: std::collections::HashMap<String, String>,
    pub(crate) writes: usize,
}

#[cfg(test)]
impl TitleStore for MemoryTitleStore {
    fn contains(&self, session_id: &str) -> bool {
        self.records.contains_key(session_id)
    }

    fn read(&self, session_id: &str) -> Option<String> {
        self.records.get(session_id).cloned()
    }

    fn write(&mut self, session_id: &str, title: &str) -> Result<(), AppError> {
        self.writes += 1;
        self.records
            .insert(session_id.to_string(), title.to_string());
        Ok(())
    }

    fn remove(&mut self, session_id: &str) -> Result<(), AppError> {
        self.records.remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_stays_inside_state_dir() {
        let store = FileTitleStore::new("/state");
        assert_eq!(
            store.path_for("abc-123_X"),
            PathBuf::from("/state/claude_session_abc-123_X_prompt.txt")
        );
        assert_eq!(
            store.path_for("../../etc/passwd"),
            PathBuf::from("/state/claude_session_______etc_passwd_prompt.txt")
        );
    }

    #[test]
    fn write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileTitleStore::new(dir.path());

        assert!(!store.contains("s1"));
        assert_eq!(store.read("s1"), None);

        store.write("s1", "fix login").unwrap();
        assert!(store.contains("s1"));
        assert_eq!(store.read("s1").as_deref(), Some("fix login"));
        assert_eq!(
            fs::read_to_string(store.path_for("s1")).unwrap(),
            "fix login"
        );

        store.remove("s1").unwrap();
        assert!(!store.contains("s1"));
        assert_eq!(store.read("s1"), None);
    }

    #[test]
    fn remove_absent_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileTitleStore::new(dir.path());
        assert!(store.remove("never-written").is_ok());
    }

    #[test]
    fn empty_record_reads_as_absent_but_exists() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTitleStore::new(dir.path());
        fs::write(store.path_for("s1"), "  \n").unwrap();
        assert!(store.contains("s1"));
        assert_eq!(store.read("s1"), None);
    }

    #[test]
    fn unreadable_record_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTitleStore::new(dir.path());
        // A directory in place of the record cannot be read as a string
        fs::create_dir(store.path_for("s1")).unwrap();
        assert!(store.contains("s1"));
        assert_eq!(store.read("s1"), None);
    }

    #[test]
    fn write_into_missing_dir_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileTitleStore::new(dir.path().join("missing"));
        let err = store.write("s1", "title").unwrap_err();
        assert!(matches!(err, AppError::TitleWrite { .. }));
    }
}
