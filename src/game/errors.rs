use crate::game::models::RoundPhase;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("`{operation}` is not allowed while the round is {phase:?}")]
    InvalidState {
        operation: &'static str,
        phase: RoundPhase,
    },
}
