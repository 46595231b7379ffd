#![forbid(unsafe_code)]

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 4173;

pub(crate) fn parse_storage_dir() -> PathBuf {
    let mut args = std::env::args().skip(1);
    let mut storage_dir: Option<PathBuf> = None;
    while let Some(arg) = args.next() {
        if arg.as_str() == "--storage-dir"
            && let Some(value) = args.next()
        {
            storage_dir = Some(PathBuf::from(value));
        }
    }
    if let Some(dir) = storage_dir {
        return dir;
    }
    if let Ok(dir) = std::env::var("TRACKBYTE_STORAGE_DIR")
        && !dir.trim().is_empty()
    {
        return PathBuf::from(dir);
    }
    PathBuf::from(".trackbyte")
}

pub(crate) fn parse_port() -> u16 {
    let mut args = std::env::args().skip(1);
    let mut cli: Option<String> = None;
    while let Some(arg) = args.next() {
        if arg.as_str() == "--port"
            && let Some(value) = args.next()
        {
            cli = Some(value);
            break;
        }
    }

    let value = cli.or_else(|| std::env::var("TRACKBYTE_PORT").ok());
    value
        .as_deref()
        .map(str::trim)
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}
