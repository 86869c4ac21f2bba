use crate::game::ScoreSubmitter;
use crate::matches::message_types::{self, ServerSentSocketMessage, SubmissionFailedPayload};
use crate::matches::models::Player;
use crate::scores::interface::ScoreBackend;
use crate::scores::models::{ScoreSubmission, SubmissionStatus};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tokio::sync::broadcast;

/// Hands final scores to the backend on a background task.
///
/// Holds the status cell weakly: once the match that owns it is replaced, a
/// late backend answer is logged and otherwise dropped.
pub struct BackgroundScoreSubmitter {
    backend: Arc<dyn ScoreBackend>,
    player: Player,
    status: Weak<Mutex<SubmissionStatus>>,
    events: broadcast::Sender<ServerSentSocketMessage>,
}

impl BackgroundScoreSubmitter {
    pub fn new(
        backend: Arc<dyn ScoreBackend>,
        player: Player,
        status: Arc<Mutex<SubmissionStatus>>,
        events: broadcast::Sender<ServerSentSocketMessage>,
    ) -> Self {
        Self {
            backend,
            player,
            status: Arc::downgrade(&status),
            events,
        }
    }
}

impl ScoreSubmitter for BackgroundScoreSubmitter {
    fn submit_score(&self, total_score: u64) {
        if let Some(status) = self.status.upgrade() {
            set_status(&status, SubmissionStatus::Pending);
        }
        let backend = self.backend.clone();
        let status = self.status.clone();
        let events = self.events.clone();
        let submission = ScoreSubmission {
            player_id: self.player.public_id.clone(),
            name: self.player.name.clone(),
            score: total_score,
        };
        tokio::spawn(async move {
            let outcome = backend.submit_score(submission.clone()).await;
            let Some(status) = status.upgrade() else {
                tracing::info!(
                    task = "score_submission",
                    public_id = submission.player_id,
                    score = submission.score,
                    accepted = outcome.is_ok(),
                    stale = true,
                );
                return;
            };
            match outcome {
                Ok(_ack) => {
                    tracing::info!(
                        task = "score_submission",
                        public_id = submission.player_id,
                        score = submission.score,
                        accepted = true,
                    );
                    set_status(&status, SubmissionStatus::Accepted);
                }
                Err(err) => {
                    tracing::warn!(
                        task = "score_submission",
                        public_id = submission.player_id,
                        score = submission.score,
                        accepted = false,
                        error = %err,
                    );
                    set_status(
                        &status,
                        SubmissionStatus::Failed {
                            reason: err.to_string(),
                        },
                    );
                    let _ = events.send(ServerSentSocketMessage::SubmissionFailed {
                        r#type: message_types::SubmissionFailed,
                        payload: SubmissionFailedPayload {
                            reason: err.to_string(),
                        },
                    });
                }
            }
        });
    }
}

pub fn set_status(status: &Mutex<SubmissionStatus>, value: SubmissionStatus) {
    *status.lock().unwrap_or_else(PoisonError::into_inner) = value;
}

pub fn read_status(status: &Mutex<SubmissionStatus>) -> SubmissionStatus {
    status
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
