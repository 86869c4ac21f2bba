use crate::scores::consts::LEADERBOARD_SIZE;
use crate::scores::errors::SubmissionError;
use crate::scores::interface::ScoreBackend;
use crate::scores::models::{Ack, LeaderboardEntry, ScoreSubmission};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps the latest score of every player in memory.
#[derive(Clone, Default)]
pub struct InMemoryScoreBackend {
    storage: Arc<RwLock<HashMap<String, LeaderboardEntry>>>,
}

#[async_trait]
impl ScoreBackend for InMemoryScoreBackend {
    async fn submit_score(&self, submission: ScoreSubmission) -> Result<Ack, SubmissionError> {
        self.storage.write().await.insert(
            submission.player_id,
            LeaderboardEntry {
                name: submission.name,
                score: submission.score,
            },
        );
        Ok(Ack {
            message: String::from("Score saved successfully"),
        })
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, SubmissionError> {
        let mut entries = self
            .storage
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
        entries.truncate(LEADERBOARD_SIZE);
        Ok(entries)
    }
}
