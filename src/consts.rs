/// Title used when no session title has been captured
pub(crate) const DEFAULT_TITLE: &str = "claude";

/// Maximum length (in chars) of a captured session title
pub(crate) const TITLE_MAX_CHARS: usize = 20;

/// File name parts for per-session title records inside the state dir
pub(crate) const TITLE_FILE_PREFIX: &str = "claude_session_";
pub(crate) const TITLE_FILE_SUFFIX: &str = "_prompt.txt";

/// Model name shown when the statusline input has none
pub(crate) const DEFAULT_MODEL: &str = "Claude";

/// Agent name leading every statusline, shown as `[Agent]`
pub(crate) const AGENT_NAME: &str = "Agent";

/// Separator between statusline segments (degraded lines use a space)
pub(crate) const SEPARATOR: &str = " | ";

/// Truncation limits for the latest, previous and third-latest prompts
pub(crate) const LATEST_PROMPT_MAX: usize = 250;
pub(crate) const PREVIOUS_PROMPT_MAX: usize = 100;
pub(crate) const OLDER_PROMPT_MAX: usize = 75;
