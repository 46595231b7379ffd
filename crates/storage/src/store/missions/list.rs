#![forbid(unsafe_code)]

use super::super::*;
use rusqlite::params;
use tb_core::model::Mission;

impl SqliteStore {
    /// Missions in insertion order. A `player_name` filter is exact-match:
    /// rows without an owner tag are excluded when a filter is present.
    pub fn list_missions(
        &self,
        request: ListMissionsRequest,
    ) -> Result<Vec<Mission>, StoreError> {
        let ListMissionsRequest { player_name } = request;

        let mut out = Vec::new();
        match player_name {
            Some(player) => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, title, status, is_boss, player_name, created_at_ms \
                     FROM missions \
                     WHERE player_name = ?1 \
                     ORDER BY rowid ASC",
                )?;
                let mut rows = stmt.query(params![player])?;
                while let Some(row) = rows.next()? {
                    out.push(
                        Mission::try_new(
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, i64>(3)? != 0,
                            row.get::<_, Option<String>>(4)?,
                            row.get::<_, i64>(5)?,
                        )
                        .map_err(|_| StoreError::InvalidInput("invalid mission row"))?,
                    );
                }
            }
            None => {
                let mut stmt = self.conn.prepare(
                    "SELECT id, title, status, is_boss, player_name, created_at_ms \
                     FROM missions \
                     ORDER BY rowid ASC",
                )?;
                let mut rows = stmt.query([])?;
                while let Some(row) = rows.next()? {
                    out.push(
                        Mission::try_new(
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, i64>(3)? != 0,
                            row.get::<_, Option<String>>(4)?,
                            row.get::<_, i64>(5)?,
                        )
                        .map_err(|_| StoreError::InvalidInput("invalid mission row"))?,
                    );
                }
            }
        }

        Ok(out)
    }
}
