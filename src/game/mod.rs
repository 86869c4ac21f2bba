pub use engine::{Match, ScoreSubmitter};
pub use errors::GameError;

pub mod consts;
pub mod engine;
pub mod errors;
pub mod models;
