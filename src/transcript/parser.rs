//! Claude Code transcript (JSONL) parser
//!
//! Pulls user prompts out of a session transcript, oldest first.

use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::TranscriptError;
use crate::utils::debug_enabled;

// ============================================================================
// Internal types for JSONL parsing
// ============================================================================

#[derive(Debug, Deserialize)]
struct TranscriptEntry {
    #[serde(rename = "type")]
    kind: Option<String>,
    message: Option<Message>,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Content {
    Text(String),
    Parts(Vec<Part>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Part {
    Text(String),
    Block {
        #[serde(rename = "type")]
        kind: Option<String>,
        text: Option<String>,
    },
    #[allow(dead_code)]
    Other(serde_json::Value),
}

// ============================================================================
// Extraction
// ============================================================================

impl Content {
    fn into_text(self) -> String {
        match self {
            Content::Text(text) => text,
            Content::Parts(parts) => parts
                .into_iter()
                .filter_map(|part| match part {
                    Part::Text(text) => Some(text),
                    Part::Block {
                        kind: Some(kind),
                        text: Some(text),
                    } if kind == "text" => Some(text),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Prompt text of a user entry, `None` for anything else
fn prompt_from_entry(entry: TranscriptEntry) -> Option<String> {
    if entry.kind.as_deref() != Some("user") {
        return None;
    }
    let text = entry.message?.content?.into_text();
    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

/// Read every user prompt from a transcript, oldest first.
///
/// Lines that are not valid entries are skipped. A transcript with no
/// prompts yields an empty list, while a missing path or file, or a read
/// failure part way through, is an error.
pub(crate) fn extract_prompts(path: Option<&Path>) -> Result<Vec<String>, TranscriptError> {
    let path = path.ok_or(TranscriptError::NoPath)?;

    let file = File::open(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            TranscriptError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            TranscriptError::Open {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let reader = BufReader::new(file);

    let mut prompts = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        // A failed read may repeat forever (e.g. a directory), so stop here
        let line = line.map_err(|source| {
            if debug_enabled() {
                eprintln!(
                    "Failed to read line {} in {}: {}",
                    line_no + 1,
                    path.display(),
                    source
                );
            }
            TranscriptError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if line.trim().is_empty() {
            continue;
        }

        let entry: TranscriptEntry = match serde_json::from_str(&line) {
            Ok(entry) => entry,
            Err(err) => {
                if debug_enabled() {
                    eprintln!(
                        "Invalid JSON at {}:{}: {}",
                        path.display(),
                        line_no + 1,
                        err
                    );
                }
                continue;
            }
        };

        if let Some(prompt) = prompt_from_entry(entry) {
            prompts.push(prompt);
        }
    }
    Ok(prompts)
}
