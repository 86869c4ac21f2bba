use crate::scores::models::LeaderboardEntry;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LeaderboardError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<LeaderboardEntry>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LeaderboardError {
    BackendUnavailable,
}
