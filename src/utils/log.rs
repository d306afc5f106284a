//! Append-only statusline diagnostic log (one JSON object per line)

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use super::debug_enabled;

#[derive(Debug, Serialize)]
pub(crate) struct LogRecord<'a> {
    pub(crate) timestamp: String,
    #[serde(rename = "input_data")]
    pub(crate) input: &'a serde_json::Value,
    #[serde(rename = "status_line_output")]
    pub(crate) output: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<&'a str>,
}

impl<'a> LogRecord<'a> {
    pub(crate) fn new(
        input: &'a serde_json::Value,
        output: &'a str,
        error: Option<&'a str>,
    ) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            input,
            output,
            error,
        }
    }
}

fn append(path: &Path, record: &LogRecord<'_>) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut line = serde_json::to_string(record)?;
    line.push('\n');
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}

/// Append a record; failures are reported only in debug mode
pub(crate) fn append_log(path: &Path, record: &LogRecord<'_>) {
    if let Err(err) = append(path, record)
        && debug_enabled()
    {
        eprintln!("Failed to write log {}: {}", path.display(), err);
    }
}
