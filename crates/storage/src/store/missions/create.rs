#![forbid(unsafe_code)]

use super::super::*;
use rusqlite::params;
use tb_core::model::{Mission, MissionStatus};

impl SqliteStore {
    pub fn create_mission(
        &mut self,
        request: MissionCreateRequest,
    ) -> Result<Mission, StoreError> {
        let MissionCreateRequest {
            title,
            is_boss,
            player_name,
        } = request;

        let now_ms = now_ms();
        let tx = self.conn.transaction()?;

        let seq = next_counter_tx(&tx, MISSION_ID_COUNTER)?;
        let id = format!("MSN-{seq:03}");

        tx.execute(
            r#"
            INSERT INTO missions(id, title, status, is_boss, player_name, created_at_ms, updated_at_ms)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                id,
                title,
                MissionStatus::Pending.as_str(),
                if is_boss { 1i64 } else { 0i64 },
                player_name,
                now_ms,
                now_ms
            ],
        )?;

        tx.commit()?;

        Mission::try_new(
            id,
            title,
            MissionStatus::Pending.as_str().to_string(),
            is_boss,
            player_name,
            now_ms,
        )
        .map_err(|_| StoreError::InvalidInput("invalid mission row"))
    }
}
