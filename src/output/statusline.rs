use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AGENT_NAME, DEFAULT_MODEL, LATEST_PROMPT_MAX, OLDER_PROMPT_MAX, PREVIOUS_PROMPT_MAX, SEPARATOR,
};
use crate::error::AppError;
use crate::output::classify::{Styling, classify};
use crate::output::format::{paint, truncate};
use crate::transcript::extract_prompts;

const AGENT_COLOR: &str = "91";
const MODEL_COLOR: &str = "34";
const NEUTRAL_COLOR: &str = "90";
const ERROR_COLOR: &str = "31";

const NO_SESSION_DATA: &str = "💭 No session data";
const NO_PROMPTS_YET: &str = "💭 No prompts yet";
const JSON_ERROR: &str = "💭 JSON Error";

/// Statusline input piped by Claude Code. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct StatusInput {
    #[serde(default)]
    model: Option<ModelInfo>,
    #[serde(default)]
    transcript_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ModelInfo {
    #[serde(default)]
    display_name: Option<String>,
}

impl StatusInput {
    /// Parse the statusline input, keeping the raw JSON value for logging.
    pub(crate) fn parse(raw: &str) -> Result<(serde_json::Value, Self), AppError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(AppError::InputParse(serde::de::Error::custom(
                "statusline input must be a JSON object",
            )));
        }
        let input = Self::deserialize(&value)?;
        Ok((value, input))
    }

    fn model_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    fn transcript_path(&self) -> Option<&Path> {
        self.transcript_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(Path::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    /// Printed uncolored in front of the text
    icon: Option<&'static str>,
    text: String,
    color: &'static str,
}

impl Segment {
    fn new(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            icon: None,
            text: text.into(),
            color,
        }
    }

    fn with_icon(icon: &'static str, text: impl Into<String>, color: &'static str) -> Self {
        Self {
            icon: Some(icon),
            text: text.into(),
            color,
        }
    }

    fn render(&self, use_color: bool) -> String {
        let text = paint(&self.text, self.color, use_color);
        match self.icon {
            Some(icon) => format!("{icon} {text}"),
            None => text,
        }
    }
}

fn tags(model: &str) -> Vec<Segment> {
    vec![
        Segment::new(format!("[{AGENT_NAME}]"), AGENT_COLOR),
        Segment::new(format!("[{model}]"), MODEL_COLOR),
    ]
}

/// A rendered statusline, kept as segments until printed
#[derive(Debug, Clone)]
pub(crate) struct Statusline {
    segments: Vec<Segment>,
    /// Full lines use `SEPARATOR`, degraded lines a single space
    separator: &'static str,
    styling: Option<Styling>,
    prompt_count: Option<usize>,
    error: Option<String>,
}

#[derive(Serialize)]
struct StatuslineJson<'a> {
    line: String,
    segments: Vec<String>,
    classification: Option<Styling>,
    prompt_count: Option<usize>,
    error: Option<&'a str>,
}

impl Statusline {
    fn degraded(model: &str, last: Segment, error: String) -> Self {
        let mut segments = tags(model);
        segments.push(last);
        Self {
            segments,
            separator: " ",
            styling: None,
            prompt_count: None,
            error: Some(error),
        }
    }

    /// Minimal line for input that could not be used at all.
    ///
    /// Malformed JSON gets a fixed marker; anything else shows its message.
    pub(crate) fn input_error(err: &AppError) -> Self {
        let last = match err {
            AppError::InputParse(e) if e.is_syntax() || e.is_eof() => {
                Segment::new(JSON_ERROR, ERROR_COLOR)
            }
            AppError::InputParse(e) => Segment::new(format!("💭 Error: {e}"), ERROR_COLOR),
            other => Segment::new(format!("💭 Error: {other}"), ERROR_COLOR),
        };
        Self::degraded(DEFAULT_MODEL, last, err.to_string())
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn line(&self, use_color: bool) -> String {
        self.segments
            .iter()
            .map(|s| s.render(use_color))
            .collect::<Vec<_>>()
            .join(self.separator)
    }

    pub(crate) fn to_json(&self) -> String {
        let output = StatuslineJson {
            line: self.line(false),
            segments: self.segments.iter().map(|s| s.render(false)).collect(),
            classification: self.styling,
            prompt_count: self.prompt_count,
            error: self.error(),
        };
        serde_json::to_string(&output).unwrap_or_else(|e| {
            eprintln!("Failed to serialize JSON output: {}", e);
            "{}".to_string()
        })
    }
}

/// Compose the statusline for one input.
///
/// Transcript problems degrade the line; they are reported through
/// [`Statusline::error`] rather than returned.
pub(crate) fn render(input: &StatusInput) -> Statusline {
    let model = input.model_name();
    let prompts = match extract_prompts(input.transcript_path()) {
        Ok(prompts) => prompts,
        Err(err) => {
            return Statusline::degraded(
                model,
                Segment::new(NO_SESSION_DATA, NEUTRAL_COLOR),
                err.to_string(),
            );
        }
    };

    let mut segments = tags(model);
    let mut recent = prompts.iter().rev();
    let styling = match recent.next() {
        Some(latest) => {
            let styling = classify(latest);
            segments.push(Segment::with_icon(
                styling.icon(),
                truncate(latest, LATEST_PROMPT_MAX),
                styling.color(),
            ));
            for (prompt, max_len) in recent.zip([PREVIOUS_PROMPT_MAX, OLDER_PROMPT_MAX]) {
                segments.push(Segment::new(truncate(prompt, max_len), NEUTRAL_COLOR));
            }
            Some(styling)
        }
        None => {
            segments.push(Segment::new(NO_PROMPTS_YET, NEUTRAL_COLOR));
            None
        }
    };

    Statusline {
        segments,
        separator: SEPARATOR,
        styling,
        prompt_count: Some(prompts.len()),
        error: None,
    }
}
