use crate::geo::Coordinate;
use crate::locations::Location;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundPhase {
    /// Fresh match, no round started yet.
    Idle,
    AwaitingGuess,
    /// Guess map is open but nothing is placed on it.
    GuessPending,
    /// A pin is on the map, waiting for confirmation.
    GuessPlaced,
    Resolved,
    TimedOut,
    MatchOver,
}

impl RoundPhase {
    /// Whether the countdown is running in this phase.
    pub fn awaits_input(self) -> bool {
        matches!(
            self,
            RoundPhase::AwaitingGuess | RoundPhase::GuessPending | RoundPhase::GuessPlaced
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Guess {
    pub coordinate: Coordinate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub location: Location,
    pub guess: Guess,
    pub distance_km: f64,
    pub score: u64,
    pub accuracy_pct: f64,
    pub bonus: u64,
}

impl RoundResult {
    pub fn total(&self) -> u64 {
        self.score + self.bonus
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchState {
    pub rounds: Vec<RoundResult>,
    /// Revealed to the player only through the round result.
    #[serde(skip_serializing)]
    pub current_location: Option<Location>,
    pub current_guess: Option<Guess>,
    pub timer_seconds: u32,
    pub phase: RoundPhase,
    pub is_over: bool,
    pub timed_out: bool,
    /// `0` until the first round starts.
    pub round_id: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub rounds_played: usize,
    pub total_score: u64,
    pub average_accuracy_pct: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStarted {
    pub round_number: usize,
    pub round_id: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundResolution {
    pub result: RoundResult,
    /// Set when this round finished the match.
    pub final_score: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Ignored,
    Ticked { remaining: u32 },
    TimedOut,
}
