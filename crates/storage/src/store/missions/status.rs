#![forbid(unsafe_code)]

use super::super::*;
use rusqlite::params;

impl SqliteStore {
    /// Writes the supplied status string verbatim; value legality is a
    /// client policy, so a Completed mission can be toggled back to Pending.
    pub fn set_mission_status(
        &mut self,
        request: SetMissionStatusRequest,
    ) -> Result<StatusAck, StoreError> {
        let SetMissionStatusRequest { id, status } = request;
        let id = canonicalize_mission_id(&id)?;

        let now_ms = now_ms();
        let matched = self.conn.execute(
            "UPDATE missions SET status = ?2, updated_at_ms = ?3 WHERE id = ?1",
            params![id, status, now_ms],
        )?;

        Ok(StatusAck { matched })
    }
}
