use crate::scores::errors::SubmissionError;
use crate::scores::models::{Ack, LeaderboardEntry, ScoreSubmission};
use async_trait::async_trait;

/// Where final scores are persisted and ranked.
#[async_trait]
pub trait ScoreBackend: Send + Sync {
    async fn submit_score(&self, submission: ScoreSubmission) -> Result<Ack, SubmissionError>;

    /// Best players first.
    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, SubmissionError>;
}
