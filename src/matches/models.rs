use crate::game::models::{MatchState, MatchSummary};
use crate::game::Match;
use crate::matches::message_types::ServerSentSocketMessage;
use crate::scores::models::SubmissionStatus;
use crate::scores::submitter;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub public_id: String,
    pub name: String,
}

/// Everything the server keeps about one player's current match.
pub struct MatchSession {
    pub player: Player,
    pub game: Match,
    pub submission: Arc<Mutex<SubmissionStatus>>,
    pub events: broadcast::Sender<ServerSentSocketMessage>,
}

impl MatchSession {
    /// Pushes an event to connected sockets. Nobody listening is fine.
    pub fn notify(&self, message: ServerSentSocketMessage) {
        let _ = self.events.send(message);
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSnapshot {
    pub player_name: String,
    #[serde(flatten)]
    pub state: MatchState,
    pub summary: MatchSummary,
    pub submission: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clue: Option<RoundClue>,
}

/// What the player gets to see of the landmark while guessing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundClue {
    pub hint: String,
    pub image_url: String,
}

impl MatchSnapshot {
    pub fn of(session: &MatchSession) -> Self {
        let state = session.game.state().clone();
        let clue = state.current_location.as_ref().map(|location| RoundClue {
            hint: location.hint.clone(),
            image_url: location.image_url.clone(),
        });
        Self {
            player_name: session.player.name.clone(),
            state,
            summary: session.game.summary(),
            submission: submitter::read_status(&session.submission),
            clue,
        }
    }
}
