//! CLI subcommand definitions
//!
//! One subcommand per hook integration.

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Terminal title hook (UserPromptSubmit, Notification, Stop, SessionStart, SessionEnd)
    Title {
        /// Write the title escape sequence to stdout instead of the controlling terminal
        #[arg(long)]
        stdout: bool,
    },
    /// Render a single statusline from the statusline input and transcript
    Statusline {
        /// Output the rendered statusline as JSON
        #[arg(short, long)]
        json: bool,
    },
}
