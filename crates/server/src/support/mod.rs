#![forbid(unsafe_code)]

mod runtime;
mod session_log;
mod time;

pub(crate) use runtime::{parse_port, parse_storage_dir};
pub(crate) use session_log::SessionLog;
pub(crate) use time::{now_ms_i64, ts_ms_to_rfc3339};
