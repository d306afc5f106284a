use std::io::{self, Read};

use crate::cli::Cli;
use crate::error::AppError;
use crate::hook::{HookEvent, TitleAction, dispatch};
use crate::output::{StatusInput, Statusline, render};
use crate::terminal::set_title;
use crate::title::{FileTitleStore, SessionTitles};
use crate::utils::{LogRecord, append_log, debug_enabled};

fn read_stdin() -> Result<String, AppError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(AppError::Stdin)?;
    Ok(buf)
}

fn run_title(cli: &Cli, to_stdout: bool) -> Result<(), AppError> {
    let event = HookEvent::parse(&read_stdin()?)?;
    if debug_enabled() {
        eprintln!(
            "Hook event {:?} for session {}",
            event,
            event.session_id().unwrap_or("<none>")
        );
    }

    let mut titles = SessionTitles::new(FileTitleStore::new(cli.state_dir()));
    match dispatch(&event, &mut titles)? {
        TitleAction::Set(title) => set_title(&title, to_stdout),
        TitleAction::None => Ok(()),
    }
}

/// Handle the title hook. Returns the process exit code.
pub(crate) fn handle_title(cli: &Cli, to_stdout: bool) -> i32 {
    match run_title(cli, to_stdout) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("ccsession: {e}");
            1
        }
    }
}

/// Handle the statusline command. Always prints exactly one line.
pub(crate) fn handle_statusline(cli: &Cli, json: bool) {
    let (snapshot, statusline) = match read_stdin() {
        Ok(raw) => match StatusInput::parse(&raw) {
            Ok((value, input)) => (value, render(&input)),
            Err(e) => (serde_json::Value::String(raw), Statusline::input_error(&e)),
        },
        Err(e) => (serde_json::Value::Null, Statusline::input_error(&e)),
    };

    if json {
        println!("{}", statusline.to_json());
    } else {
        println!("{}", statusline.line(cli.use_color()));
    }

    if let Some(path) = cli.log_file() {
        let plain = statusline.line(false);
        append_log(&path, &LogRecord::new(&snapshot, &plain, statusline.error()));
    }
}
