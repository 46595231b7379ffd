#![forbid(unsafe_code)]

use crate::http::{
    HttpRequest, decode_query_value, extract_query_param_raw, normalize_path, write_failure,
    write_response,
};
use crate::{SessionLog, ts_ms_to_rfc3339};
use serde_json::{Value, json};
use std::net::TcpStream;
use tb_core::model::Mission;
use tb_storage::{
    DeleteMissionRequest, ListMissionsRequest, MissionCreateRequest, SetMissionStatusRequest,
    SqliteStore, StoreError,
};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

pub(crate) fn dispatch(
    stream: &mut TcpStream,
    store: &mut SqliteStore,
    session_log: &mut SessionLog,
    request: &HttpRequest,
) -> std::io::Result<()> {
    let method = request.method.as_str();
    if !matches!(method, "GET" | "POST" | "PATCH" | "DELETE") {
        return write_response(
            stream,
            "405 Method Not Allowed",
            "text/plain; charset=utf-8",
            b"Method not allowed.",
        );
    }

    let path = normalize_path(&request.path);
    match (method, path.as_str()) {
        ("GET", "/missions") => list_missions(stream, store, session_log, &request.path),
        ("POST", "/missions") => create_mission(stream, store, session_log, &request.body),
        (_, "/missions") => write_response(
            stream,
            "405 Method Not Allowed",
            "text/plain; charset=utf-8",
            b"Method not allowed.",
        ),
        (method, path) if path.starts_with("/missions/") => {
            let mission_id = path.trim_start_matches("/missions/").trim();
            match method {
                "PATCH" => {
                    set_mission_status(stream, store, session_log, mission_id, &request.body)
                }
                "DELETE" => delete_mission(stream, store, session_log, mission_id),
                _ => write_response(
                    stream,
                    "405 Method Not Allowed",
                    "text/plain; charset=utf-8",
                    b"Method not allowed.",
                ),
            }
        }
        _ => write_response(
            stream,
            "404 Not Found",
            "text/plain; charset=utf-8",
            b"Not found.",
        ),
    }
}

fn list_missions(
    stream: &mut TcpStream,
    store: &mut SqliteStore,
    session_log: &mut SessionLog,
    raw_path: &str,
) -> std::io::Result<()> {
    let player_name = extract_query_param_raw(raw_path, "playerName")
        .as_deref()
        .and_then(decode_query_value);

    match store.list_missions(ListMissionsRequest { player_name }) {
        Ok(missions) => {
            let body =
                Value::Array(missions.iter().map(mission_json).collect::<Vec<_>>()).to_string();
            write_response(stream, "200 OK", JSON_CONTENT_TYPE, body.as_bytes())
        }
        Err(err) => store_failure(stream, session_log, "List Failed", &err),
    }
}

fn create_mission(
    stream: &mut TcpStream,
    store: &mut SqliteStore,
    session_log: &mut SessionLog,
    body: &[u8],
) -> std::io::Result<()> {
    let Ok(payload) = serde_json::from_slice::<Value>(body) else {
        session_log.note_error("create: request body is not JSON");
        return write_failure(stream, "Create Failed");
    };

    // Field contents are passed through as-is; a request without a title
    // produces a mission with an empty one.
    let title = payload
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();
    let is_boss = payload
        .get("isBoss")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let player_name = payload
        .get("playerName")
        .and_then(|v| v.as_str())
        .map(|v| v.to_string());

    match store.create_mission(MissionCreateRequest {
        title,
        is_boss,
        player_name,
    }) {
        Ok(mission) => {
            let body = json!({ "acknowledged": true, "id": mission.id() }).to_string();
            write_response(stream, "200 OK", JSON_CONTENT_TYPE, body.as_bytes())
        }
        Err(err) => store_failure(stream, session_log, "Create Failed", &err),
    }
}

fn set_mission_status(
    stream: &mut TcpStream,
    store: &mut SqliteStore,
    session_log: &mut SessionLog,
    mission_id: &str,
    body: &[u8],
) -> std::io::Result<()> {
    let Ok(payload) = serde_json::from_slice::<Value>(body) else {
        session_log.note_error("status: request body is not JSON");
        return write_failure(stream, "Update Failed");
    };
    let status = payload
        .get("status")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string();

    match store.set_mission_status(SetMissionStatusRequest {
        id: mission_id.to_string(),
        status,
    }) {
        Ok(ack) => {
            let body = json!({
                "message": "Status Updated",
                "result": { "matched": ack.matched }
            })
            .to_string();
            write_response(stream, "200 OK", JSON_CONTENT_TYPE, body.as_bytes())
        }
        Err(err) => store_failure(stream, session_log, "Update Failed", &err),
    }
}

fn delete_mission(
    stream: &mut TcpStream,
    store: &mut SqliteStore,
    session_log: &mut SessionLog,
    mission_id: &str,
) -> std::io::Result<()> {
    match store.delete_mission(DeleteMissionRequest {
        id: mission_id.to_string(),
    }) {
        Ok(_ack) => {
            let body = json!({ "message": "Mission Deleted" }).to_string();
            write_response(stream, "200 OK", JSON_CONTENT_TYPE, body.as_bytes())
        }
        Err(err) => store_failure(stream, session_log, "Delete Failed", &err),
    }
}

fn store_failure(
    stream: &mut TcpStream,
    session_log: &mut SessionLog,
    message: &str,
    err: &StoreError,
) -> std::io::Result<()> {
    // The detail goes to the session log only; the wire gets the opaque body.
    session_log.note_error(&format!("{message}: {err}"));
    write_failure(stream, message)
}

fn mission_json(mission: &Mission) -> Value {
    json!({
        "id": mission.id(),
        "title": mission.title(),
        "status": mission.status(),
        "isBoss": mission.is_boss(),
        "playerName": mission.player_name(),
        "createdAt": ts_ms_to_rfc3339(mission.created_at_ms()),
    })
}
