pub(crate) mod debug;
pub(crate) mod log;

pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use log::{LogRecord, append_log};
