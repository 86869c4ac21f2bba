use crate::game::models::{MatchSummary, RoundResult};
use serde::{Deserialize, Serialize};
use serde_unit_struct::{Deserialize_unit_struct, Serialize_unit_struct};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClientSentSocketMessage {
    Ping {
        #[allow(dead_code)]
        // Only matched on to pick the variant.
        r#type: Ping,
    },
}

#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    Tick {
        r#type: Tick,
        payload: u32,
    },
    RoundStarted {
        r#type: RoundStarted,
        payload: RoundStartedPayload,
    },
    RoundResolved {
        r#type: RoundResolved,
        payload: RoundResult,
    },
    TimedOut {
        r#type: TimedOut,
    },
    MatchOver {
        r#type: MatchOver,
        payload: MatchOverPayload,
    },
    SubmissionFailed {
        r#type: SubmissionFailed,
        payload: SubmissionFailedPayload,
    },
    Pong {
        r#type: Pong,
    },
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStartedPayload {
    pub round_number: usize,
    pub rounds_per_match: usize,
    pub hint: String,
    pub image_url: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOverPayload {
    pub timed_out: bool,
    pub summary: MatchSummary,
}

#[derive(Clone, Debug, Serialize)]
pub struct SubmissionFailedPayload {
    pub reason: String,
}

#[derive(Clone, Debug, Serialize_unit_struct, Deserialize_unit_struct)]
pub struct Ping;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct Pong;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct Tick;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct RoundStarted;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct RoundResolved;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct TimedOut;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct MatchOver;

#[derive(Clone, Debug, Serialize_unit_struct)]
pub struct SubmissionFailed;
