#![forbid(unsafe_code)]

mod http;
mod missions;
mod support;

pub(crate) use support::*;

use std::fmt::Write as _;
use std::net::TcpListener;
use tb_storage::SqliteStore;

const SERVER_NAME: &str = "tb_server";
const SERVER_VERSION: &str = "0.1.0";

fn usage() -> &'static str {
    "tb_server — TRACKBYTE mission tracker HTTP service\n\n\
USAGE:\n\
  tb_server [--storage-dir DIR] [--port N]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
NOTES:\n\
  - Storage default: ./.trackbyte (override with TRACKBYTE_STORAGE_DIR)\n\
  - Port default: 4173 (override with TRACKBYTE_PORT)\n"
}

fn version_line() -> String {
    format!("{SERVER_NAME} {SERVER_VERSION}")
}

fn write_last_crash(storage_dir: &std::path::Path, kind: &str, detail: &str) {
    // Best-effort crash report; never logs request bodies.
    let _ = std::fs::create_dir_all(storage_dir);
    let path = storage_dir.join("trackbyte_server_last_crash.txt");

    let mut out = String::new();
    let ts_ms = crate::now_ms_i64();
    let _ = writeln!(out, "ts={}", crate::ts_ms_to_rfc3339(ts_ms));
    let _ = writeln!(out, "pid={}", std::process::id());
    let _ = writeln!(out, "kind={kind}");
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let _ = writeln!(out, "cwd={}", cwd.to_string_lossy());
    let _ = writeln!(out, "args={:?}", std::env::args().collect::<Vec<_>>());
    let _ = writeln!(out, "detail={detail}");

    let _ = std::fs::write(path, out);
}

fn install_crash_reporter(storage_dir: std::path::PathBuf) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut detail = info.to_string();
        let backtrace = std::backtrace::Backtrace::force_capture();
        let _ = write!(&mut detail, "\nbacktrace:\n{backtrace}");
        write_last_crash(&storage_dir, "panic", &detail);
        default_hook(info);
    }));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{}", version_line());
        return Ok(());
    }

    let storage_dir = parse_storage_dir();
    install_crash_reporter(storage_dir.clone());
    let mut session_log = SessionLog::new(&storage_dir);
    let port = parse_port();

    let store = match SqliteStore::open(&storage_dir) {
        Ok(store) => store,
        Err(err) => {
            session_log.note_error(&format!("store: {err}"));
            session_log.note_exit("store open failed");
            return Err(err.into());
        }
    };

    let listener = match TcpListener::bind(("127.0.0.1", port)) {
        Ok(listener) => listener,
        Err(err) => {
            session_log.note_error(&format!("bind 127.0.0.1:{port}: {err}"));
            session_log.note_exit("bind failed");
            return Err(err.into());
        }
    };
    session_log.note_bind(&format!("127.0.0.1:{port}"));

    let result = http::run_server(listener, store, &mut session_log);
    if let Err(err) = &result {
        write_last_crash(&storage_dir, "error", &format!("{err:?}"));
    }
    result.map_err(Into::into)
}
