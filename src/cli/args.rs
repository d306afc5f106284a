//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors (default, the host renders ANSI from a pipe)
    #[default]
    Always,
    /// Never use colors
    Never,
}

impl From<ConfigColorMode> for ColorMode {
    fn from(mode: ConfigColorMode) -> Self {
        match mode {
            ConfigColorMode::Auto => ColorMode::Auto,
            ConfigColorMode::Always => ColorMode::Always,
            ConfigColorMode::Never => ColorMode::Never,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ccsession")]
#[command(about = "Terminal title and statusline hooks for Claude Code", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Directory holding per-session title files (default: system temp dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) state_dir: Option<PathBuf>,

    /// Statusline diagnostic log file
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) log_file: Option<PathBuf>,

    /// Disable the statusline diagnostic log
    #[arg(long, global = true)]
    pub(crate) no_log: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "always")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.no_log && config.no_log {
            self.no_log = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // Only override the color mode when the CLI is at its default
        if let Some(color) = config.color
            && self.color == ColorMode::default()
        {
            self.color = color.into();
        }

        if self.state_dir.is_none() {
            self.state_dir = config.state_dir.clone();
        }
        if self.log_file.is_none() {
            self.log_file = config.log_file.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Directory for title records
    pub(crate) fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// Statusline log destination, `None` when logging is disabled
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        if self.no_log {
            return None;
        }
        if let Some(path) = &self.log_file {
            return Some(path.clone());
        }
        Some(match dirs::home_dir() {
            Some(home) => home
                .join(".claude")
                .join("logs")
                .join("ccsession-statusline.jsonl"),
            None => std::env::temp_dir().join("ccsession-statusline.jsonl"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["ccsession"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn parses_title_subcommand() {
        let cli = parse(&["title", "--stdout"]);
        assert!(matches!(cli.command, Commands::Title { stdout: true }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["statusline", "--json", "--no-log", "--state-dir", "/x"]);
        assert!(matches!(cli.command, Commands::Statusline { json: true }));
        assert!(cli.no_log);
        assert_eq!(cli.state_dir, Some(PathBuf::from("/x")));
        assert_eq!(cli.log_file(), None);
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            no_log: true,
            color: Some(ConfigColorMode::Never),
            state_dir: Some(PathBuf::from("/cfg/state")),
            log_file: Some(PathBuf::from("/cfg/log.jsonl")),
            ..Config::default()
        };
        let cli = parse(&["statusline"]).with_config(&config);
        assert!(cli.no_log);
        assert_eq!(cli.color, ColorMode::Never);
        assert_eq!(cli.state_dir(), PathBuf::from("/cfg/state"));
    }

    #[test]
    fn cli_overrides_config() {
        let config = Config {
            color: Some(ConfigColorMode::Never),
            state_dir: Some(PathBuf::from("/cfg/state")),
            log_file: Some(PathBuf::from("/cfg/log.jsonl")),
            ..Config::default()
        };
        let cli = parse(&[
            "statusline",
            "--color",
            "auto",
            "--state-dir",
            "/cli/state",
            "--log-file",
            "/cli/log.jsonl",
        ])
        .with_config(&config);
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.state_dir(), PathBuf::from("/cli/state"));
        assert_eq!(cli.log_file(), Some(PathBuf::from("/cli/log.jsonl")));
    }

    #[test]
    fn no_color_flag_disables_color() {
        let cli = parse(&["statusline", "--no-color"]);
        assert!(!cli.use_color());
    }
}
