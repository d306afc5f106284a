//! Terminal window title side channel

use std::fs::OpenOptions;
use std::io::{self, Write};

use crate::error::AppError;

/// Build the `ESC ] 0 ; <title> BEL` sequence, dropping control characters
/// from the title so it cannot terminate the sequence early.
pub(crate) fn title_sequence(title: &str) -> String {
    let clean: String = title.chars().filter(|c| !c.is_control()).collect();
    format!("\x1b]0;{clean}\x07")
}

pub(crate) fn write_title<W: Write>(out: &mut W, title: &str) -> Result<(), AppError> {
    out.write_all(title_sequence(title).as_bytes())
        .and_then(|()| out.flush())
        .map_err(AppError::Terminal)
}

/// Set the title on the controlling terminal, or on stdout when there is
/// none (or when `to_stdout` is requested).
pub(crate) fn set_title(title: &str, to_stdout: bool) -> Result<(), AppError> {
    if !to_stdout
        && let Ok(mut tty) = OpenOptions::new().write(true).open("/dev/tty")
    {
        return write_title(&mut tty, title);
    }
    write_title(&mut io::stdout().lock(), title)
}
