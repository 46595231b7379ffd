#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissionCreateRequest {
    pub title: String,
    pub is_boss: bool,
    pub player_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListMissionsRequest {
    pub player_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetMissionStatusRequest {
    pub id: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteMissionRequest {
    pub id: String,
}

/// Acknowledgment for a status update. A missing id is not an error; it
/// simply matches zero rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusAck {
    pub matched: usize,
}

/// Acknowledgment for a delete. Deleting an absent id is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeleteAck {
    pub deleted: usize,
}
