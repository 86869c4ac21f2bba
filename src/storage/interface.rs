use crate::game::models::{RoundResolution, TickOutcome};
use crate::geo::Coordinate;
use crate::matches::errors::MatchActionError;
use crate::matches::message_types::ServerSentSocketMessage;
use crate::matches::models::{MatchSnapshot, Player};
use tokio::sync::broadcast;

pub trait IMatchStorage: MatchRepo + MatchFlowHandler + MatchClock {}

pub trait MatchRepo {
    /// Starts a new match for the player, replacing any previous one.
    async fn start(&self, player: Player) -> MatchSnapshot;

    async fn snapshot(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError>;

    async fn subscribe(
        &self,
        public_id: &str,
    ) -> Option<broadcast::Receiver<ServerSentSocketMessage>>;
}

pub trait MatchFlowHandler {
    async fn open_guess_map(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError>;

    async fn place_guess(
        &self,
        public_id: &str,
        coordinate: Coordinate,
    ) -> Result<MatchSnapshot, MatchActionError>;

    async fn confirm_guess(
        &self,
        public_id: &str,
    ) -> Result<(RoundResolution, MatchSnapshot), MatchActionError>;

    async fn advance_round(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError>;

    async fn reset(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError>;
}

pub trait MatchClock {
    /// Applies one countdown tick if `round_id` is still the current round.
    async fn tick(&self, public_id: &str, round_id: u64) -> TickOutcome;
}
