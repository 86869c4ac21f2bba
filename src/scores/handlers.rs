use crate::app_context::AppContext;
use crate::scores::responses::{LeaderboardError, LeaderboardResponse};
use crate::storage::matches::HashMapMatchStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn leaderboard(
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<LeaderboardResponse> {
    match app_context.scores.leaderboard().await {
        Ok(players) => Json(LeaderboardResponse {
            error: false,
            error_code: None,
            players: Some(players),
        }),
        Err(err) => {
            tracing::warn!(task = "leaderboard", error = %err);
            Json(LeaderboardResponse {
                error: true,
                error_code: Some(LeaderboardError::BackendUnavailable),
                players: None,
            })
        }
    }
}
