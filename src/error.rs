use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid JSON input: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("Failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to write title file {}: {source}", .path.display())]
    TitleWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove title file {}: {source}", .path.display())]
    TitleRemove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to set terminal title: {0}")]
    Terminal(std::io::Error),
}

/// Reasons a transcript cannot be read at all
#[derive(Debug, Error)]
pub(crate) enum TranscriptError {
    #[error("No transcript path provided")]
    NoPath,

    #[error("Transcript file {} does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error reading transcript file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading transcript file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}
