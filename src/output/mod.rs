mod classify;
mod format;
mod statusline;

pub(crate) use statusline::{StatusInput, Statusline, render};
