use crate::game::GameError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchActionError {
    #[error("no match found for this player")]
    MatchNotFound,
    #[error(transparent)]
    Game(#[from] GameError),
}
