use crate::game::models::RoundResult;
use crate::matches::errors::MatchActionError;
use crate::matches::models::MatchSnapshot;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<MatchResponseError>,
    #[serde(rename = "match")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<MatchSnapshot>,
}

impl MatchResponse {
    pub fn ok(game: MatchSnapshot) -> Self {
        Self {
            error: false,
            error_code: None,
            game: Some(game),
        }
    }

    pub fn failed(error_code: MatchResponseError) -> Self {
        Self {
            error: true,
            error_code: Some(error_code),
            game: None,
        }
    }
}

impl From<Result<MatchSnapshot, MatchActionError>> for MatchResponse {
    fn from(result: Result<MatchSnapshot, MatchActionError>) -> Self {
        match result {
            Ok(game) => Self::ok(game),
            Err(err) => Self::failed(err.into()),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<MatchResponseError>,
    /// Data for the result overlay of the round that was just resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
    /// Present only when this confirmation completed the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<u64>,
    #[serde(rename = "match")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<MatchSnapshot>,
}

/// All possible reasons why a match action may be refused.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchResponseError {
    MatchNotFound,
    InvalidState,
    InvalidCoordinate,
    UsernameEmpty,
    UsernameTooLong,
}

impl From<MatchActionError> for MatchResponseError {
    fn from(err: MatchActionError) -> Self {
        match err {
            MatchActionError::MatchNotFound => Self::MatchNotFound,
            MatchActionError::Game(_) => Self::InvalidState,
        }
    }
}
