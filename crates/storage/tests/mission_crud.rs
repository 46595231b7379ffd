#![forbid(unsafe_code)]

use std::path::PathBuf;
use tb_storage::{
    DeleteMissionRequest, ListMissionsRequest, MissionCreateRequest, SetMissionStatusRequest,
    SqliteStore, StoreError,
};

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = base.join(format!("tb_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn create(store: &mut SqliteStore, title: &str, is_boss: bool, player: Option<&str>) -> String {
    store
        .create_mission(MissionCreateRequest {
            title: title.to_string(),
            is_boss,
            player_name: player.map(|p| p.to_string()),
        })
        .expect("create mission")
        .id()
        .to_string()
}

#[test]
fn create_defaults_and_round_trip() {
    let storage_dir = temp_dir("create_defaults_and_round_trip");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let mission = store
        .create_mission(MissionCreateRequest {
            title: "Patrol".to_string(),
            is_boss: false,
            player_name: None,
        })
        .expect("create mission");

    assert_eq!(mission.id(), "MSN-001");
    assert_eq!(mission.title(), "Patrol");
    assert_eq!(mission.status(), "Pending");
    assert!(!mission.is_boss());
    assert_eq!(mission.player_name(), None);
    assert!(mission.created_at_ms() > 0);

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], mission);
}

#[test]
fn list_returns_all_in_insertion_order() {
    let storage_dir = temp_dir("list_returns_all_in_insertion_order");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    create(&mut store, "Patrol", false, None);
    create(&mut store, "Slay the dragon", true, Some("ayla"));
    // Duplicate titles are permitted.
    create(&mut store, "Patrol", false, Some("rook"));

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed.len(), 3);
    assert_eq!(
        listed.iter().map(|m| m.id()).collect::<Vec<_>>(),
        vec!["MSN-001", "MSN-002", "MSN-003"]
    );
    assert_eq!(listed[0].title(), "Patrol");
    assert_eq!(listed[2].title(), "Patrol");
    assert!(listed[1].is_boss());
    assert_eq!(listed[1].player_name(), Some("ayla"));
}

#[test]
fn status_update_shows_in_list_and_is_idempotent() {
    let storage_dir = temp_dir("status_update_shows_in_list_and_is_idempotent");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let id = create(&mut store, "Patrol", false, None);

    let ack = store
        .set_mission_status(SetMissionStatusRequest {
            id: id.clone(),
            status: "Completed".to_string(),
        })
        .expect("set status");
    assert_eq!(ack.matched, 1);

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed[0].status(), "Completed");

    let repeat = store
        .set_mission_status(SetMissionStatusRequest {
            id,
            status: "Completed".to_string(),
        })
        .expect("repeat set status");
    assert_eq!(repeat.matched, 1);

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status(), "Completed");
}

#[test]
fn status_is_written_verbatim_and_can_toggle_back() {
    let storage_dir = temp_dir("status_is_written_verbatim_and_can_toggle_back");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let id = create(&mut store, "Patrol", false, None);

    store
        .set_mission_status(SetMissionStatusRequest {
            id: id.clone(),
            status: "Completed".to_string(),
        })
        .expect("set completed");
    store
        .set_mission_status(SetMissionStatusRequest {
            id: id.clone(),
            status: "Pending".to_string(),
        })
        .expect("toggle back");

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed[0].status(), "Pending");

    // The store does not police the value set.
    store
        .set_mission_status(SetMissionStatusRequest {
            id,
            status: "Parked".to_string(),
        })
        .expect("set arbitrary status");
    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed[0].status(), "Parked");
}

#[test]
fn update_of_absent_id_acks_zero_without_side_effects() {
    let storage_dir = temp_dir("update_of_absent_id_acks_zero_without_side_effects");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let id = create(&mut store, "Patrol", false, None);

    let ack = store
        .set_mission_status(SetMissionStatusRequest {
            id: "MSN-999".to_string(),
            status: "Completed".to_string(),
        })
        .expect("update absent id");
    assert_eq!(ack.matched, 0);

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id(), id);
    assert_eq!(listed[0].status(), "Pending");
}

#[test]
fn malformed_ids_are_rejected_as_invalid_input() {
    let storage_dir = temp_dir("malformed_ids_are_rejected_as_invalid_input");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let update = store.set_mission_status(SetMissionStatusRequest {
        id: "../escape".to_string(),
        status: "Completed".to_string(),
    });
    assert!(matches!(update, Err(StoreError::InvalidInput(_))));

    let delete = store.delete_mission(DeleteMissionRequest {
        id: String::new(),
    });
    assert!(matches!(delete, Err(StoreError::InvalidInput(_))));
}

#[test]
fn delete_removes_mission_and_is_idempotent() {
    let storage_dir = temp_dir("delete_removes_mission_and_is_idempotent");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    let id = create(&mut store, "Patrol", false, None);

    let ack = store
        .delete_mission(DeleteMissionRequest { id: id.clone() })
        .expect("delete mission");
    assert_eq!(ack.deleted, 1);

    let listed = store
        .list_missions(ListMissionsRequest::default())
        .expect("list missions");
    assert!(listed.is_empty());

    let repeat = store
        .delete_mission(DeleteMissionRequest { id })
        .expect("delete again");
    assert_eq!(repeat.deleted, 0);
}

#[test]
fn player_filter_is_exact_match_only() {
    let storage_dir = temp_dir("player_filter_is_exact_match_only");
    let mut store = SqliteStore::open(&storage_dir).expect("open store");

    create(&mut store, "Patrol", false, Some("ayla"));
    create(&mut store, "Forge a sword", false, Some("rook"));
    create(&mut store, "Unowned chore", false, None);

    let ayla = store
        .list_missions(ListMissionsRequest {
            player_name: Some("ayla".to_string()),
        })
        .expect("list for ayla");
    assert_eq!(ayla.len(), 1);
    assert_eq!(ayla[0].title(), "Patrol");

    // Prefixes do not match, and untagged missions never match a filter.
    let partial = store
        .list_missions(ListMissionsRequest {
            player_name: Some("ay".to_string()),
        })
        .expect("list for partial name");
    assert!(partial.is_empty());
}

#[test]
fn id_counter_survives_reopen() {
    let storage_dir = temp_dir("id_counter_survives_reopen");

    {
        let mut store = SqliteStore::open(&storage_dir).expect("open store");
        let id = create(&mut store, "Patrol", false, None);
        assert_eq!(id, "MSN-001");
    }

    let mut store = SqliteStore::open(&storage_dir).expect("reopen store");
    let id = create(&mut store, "Second shift", false, None);
    assert_eq!(id, "MSN-002");
}
