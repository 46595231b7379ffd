#![forbid(unsafe_code)]

use crate::SessionLog;
use serde_json::json;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;
use tb_storage::SqliteStore;

pub(crate) struct HttpRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) body: Vec<u8>,
}

pub(crate) fn run_server(
    listener: TcpListener,
    mut store: SqliteStore,
    session_log: &mut SessionLog,
) -> std::io::Result<()> {
    loop {
        match listener.accept() {
            Ok((stream, _)) => {
                if let Err(err) = handle_connection(stream, &mut store, session_log) {
                    session_log.note_error(&format!("connection: {err}"));
                }
            }
            Err(err) => {
                session_log.note_error(&format!("accept: {err}"));
                std::thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

fn handle_connection(
    mut stream: TcpStream,
    store: &mut SqliteStore,
    session_log: &mut SessionLog,
) -> std::io::Result<()> {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let Some(request) = read_request(&mut stream)? else {
        return Ok(());
    };

    session_log.note_request(&format!("{} {}", request.method, request.path));
    crate::missions::dispatch(&mut stream, store, session_log, &request)
}

const MAX_HEADER_BYTES: usize = 8 * 1024;
const MAX_BODY_BYTES: usize = 16 * 1024;

fn read_request(stream: &mut TcpStream) -> std::io::Result<Option<HttpRequest>> {
    let mut buf = [0u8; 4096];
    let mut data = Vec::<u8>::new();
    loop {
        let read = match stream.read(&mut buf) {
            Ok(read) => read,
            Err(err)
                if matches!(
                    err.kind(),
                    std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                ) =>
            {
                break;
            }
            Err(err) => return Err(err),
        };
        if read == 0 {
            break;
        }
        data.extend_from_slice(&buf[..read]);
        if data.windows(4).any(|w| w == b"\r\n\r\n") || data.len() > MAX_HEADER_BYTES {
            break;
        }
    }
    if data.is_empty() {
        return Ok(None);
    }

    let header_end = data
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4)
        .unwrap_or(data.len());
    let header_end = header_end.min(data.len());
    let header_bytes = &data[..header_end];
    let mut body = data[header_end..].to_vec();

    let header_text = String::from_utf8_lossy(header_bytes);
    let mut lines = header_text.split("\r\n");
    let Some(request_line) = lines.next() else {
        return Ok(None);
    };
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("").to_string();
    let path = parts.next().unwrap_or("/").to_string();

    let mut content_length: usize = 0;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        if name.trim().eq_ignore_ascii_case("content-length") {
            content_length = value.trim().parse::<usize>().unwrap_or(0);
        }
    }
    if content_length > MAX_BODY_BYTES {
        content_length = MAX_BODY_BYTES;
    }

    if content_length > body.len() {
        let mut remaining = content_length - body.len();
        while remaining > 0 {
            let read = match stream.read(&mut buf) {
                Ok(read) => read,
                Err(err)
                    if matches!(
                        err.kind(),
                        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                    ) =>
                {
                    break;
                }
                Err(err) => return Err(err),
            };
            if read == 0 {
                break;
            }
            let take = read.min(remaining);
            body.extend_from_slice(&buf[..take]);
            remaining -= take;
        }
    } else {
        body.truncate(content_length);
    }

    Ok(Some(HttpRequest { method, path, body }))
}

pub(crate) fn normalize_path(raw: &str) -> String {
    let raw = raw.trim();
    let raw = raw.split('?').next().unwrap_or(raw);
    let raw = raw.trim();
    if raw.is_empty() {
        return "/".to_string();
    }
    if raw.len() > 256 || raw.contains("..") || raw.contains('\\') {
        return "/".to_string();
    }
    raw.to_string()
}

pub(crate) fn extract_query_param_raw(raw: &str, key: &str) -> Option<String> {
    let query = raw.split_once('?')?.1;
    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let name = parts.next().unwrap_or("").trim();
        if name != key {
            continue;
        }
        let value = parts.next().unwrap_or("").trim();
        if value.is_empty() {
            return None;
        }
        return Some(value.to_string());
    }
    None
}

pub(crate) fn decode_query_value(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.len() > 256 {
        return None;
    }

    let mut out: Vec<u8> = Vec::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut idx = 0usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'+' => {
                out.push(b' ');
                idx += 1;
            }
            b'%' if idx + 2 < bytes.len() => {
                let hex = |b: u8| match b {
                    b'0'..=b'9' => Some(b - b'0'),
                    b'a'..=b'f' => Some(b - b'a' + 10),
                    b'A'..=b'F' => Some(b - b'A' + 10),
                    _ => None,
                };
                let hi = hex(bytes[idx + 1])?;
                let lo = hex(bytes[idx + 2])?;
                out.push((hi << 4) | lo);
                idx += 3;
            }
            byte => {
                out.push(byte);
                idx += 1;
            }
        }
    }

    String::from_utf8(out).ok()
}

pub(crate) fn write_response(
    stream: &mut TcpStream,
    status: &str,
    content_type: &str,
    body: &[u8],
) -> std::io::Result<()> {
    let mut headers = String::new();
    headers.push_str("HTTP/1.1 ");
    headers.push_str(status);
    headers.push_str("\r\n");
    headers.push_str("Content-Type: ");
    headers.push_str(content_type);
    headers.push_str("\r\n");
    headers.push_str("Cache-Control: no-store\r\n");
    headers.push_str("X-Content-Type-Options: nosniff\r\n");
    headers.push_str("Content-Length: ");
    headers.push_str(&body.len().to_string());
    headers.push_str("\r\n\r\n");

    stream.write_all(headers.as_bytes())?;
    stream.write_all(body)?;
    Ok(())
}

/// Opaque failure body: the caller learns only that the operation failed.
pub(crate) fn write_failure(stream: &mut TcpStream, message: &str) -> std::io::Result<()> {
    let body = json!({ "error": message }).to_string();
    write_response(
        stream,
        "500 Internal Server Error",
        "application/json; charset=utf-8",
        body.as_bytes(),
    )
}
