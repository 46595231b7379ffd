#![forbid(unsafe_code)]

use super::super::*;
use rusqlite::params;

impl SqliteStore {
    /// Hard delete, no tombstone. Deleting an absent id acks with zero.
    pub fn delete_mission(
        &mut self,
        request: DeleteMissionRequest,
    ) -> Result<DeleteAck, StoreError> {
        let DeleteMissionRequest { id } = request;
        let id = canonicalize_mission_id(&id)?;

        let deleted = self
            .conn
            .execute("DELETE FROM missions WHERE id = ?1", params![id])?;

        Ok(DeleteAck { deleted })
    }
}
