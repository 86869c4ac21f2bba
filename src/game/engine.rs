use crate::game::consts::{MAX_ROUNDS, TIMER_SECONDS};
use crate::game::errors::GameError;
use crate::game::models::{
    Guess, MatchState, MatchSummary, RoundPhase, RoundResolution, RoundResult, RoundStarted,
    TickOutcome,
};
use crate::geo::{self, Coordinate, CountryAreas};
use crate::locations::Location;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

pub static NEXT_ROUND_ID: AtomicU64 = AtomicU64::new(1);

/// Receives the final score of a match that was played to the end.
///
/// Implementations must not block: the engine calls this while the match
/// state is being mutated and does not look at the outcome.
pub trait ScoreSubmitter: Send + Sync {
    fn submit_score(&self, total_score: u64);
}

/// Round state machine of a single-player match.
pub struct Match {
    state: MatchState,
    areas: Arc<CountryAreas>,
    submitter: Arc<dyn ScoreSubmitter>,
}

impl Match {
    pub fn new(areas: Arc<CountryAreas>, submitter: Arc<dyn ScoreSubmitter>) -> Self {
        Self {
            state: fresh_state(),
            areas,
            submitter,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn round_id(&self) -> u64 {
        self.state.round_id
    }

    pub fn start_round(&mut self, location: Location) -> Result<RoundStarted, GameError> {
        match self.state.phase {
            RoundPhase::Idle | RoundPhase::AwaitingGuess => {}
            RoundPhase::Resolved if !self.state.is_over => {}
            phase => {
                return Err(GameError::InvalidState {
                    operation: "start_round",
                    phase,
                })
            }
        }
        Ok(self.begin_round(location))
    }

    pub fn open_guess_map(&mut self) -> Result<(), GameError> {
        self.expect_phase("open_guess_map", &[RoundPhase::AwaitingGuess])?;
        self.state.phase = RoundPhase::GuessPending;
        Ok(())
    }

    /// Moves the pin; may be called any number of times before confirming.
    pub fn place_guess(&mut self, coordinate: Coordinate) -> Result<(), GameError> {
        self.expect_phase(
            "place_guess",
            &[RoundPhase::GuessPending, RoundPhase::GuessPlaced],
        )?;
        self.state.current_guess = Some(Guess { coordinate });
        self.state.phase = RoundPhase::GuessPlaced;
        Ok(())
    }

    pub fn confirm_guess(&mut self) -> Result<RoundResolution, GameError> {
        self.expect_phase("confirm_guess", &[RoundPhase::GuessPlaced])?;
        let invalid_state = GameError::InvalidState {
            operation: "confirm_guess",
            phase: self.state.phase,
        };
        let Some(guess) = self.state.current_guess else {
            return Err(invalid_state);
        };
        let Some(location) = self.state.current_location.take() else {
            return Err(invalid_state);
        };
        self.state.current_guess = None;
        let distance_km = geo::distance_km(location.coordinates, guess.coordinate);
        let result = RoundResult {
            score: geo::score(distance_km, &location.country, &self.areas),
            accuracy_pct: geo::accuracy_pct(distance_km, &location.country, &self.areas),
            bonus: geo::bonus(distance_km),
            distance_km,
            guess,
            location,
        };
        self.state.rounds.push(result.clone());
        self.state.phase = RoundPhase::Resolved;

        let mut final_score = None;
        if self.state.rounds.len() == MAX_ROUNDS {
            let total_score = self.summary().total_score;
            self.state.is_over = true;
            self.state.phase = RoundPhase::MatchOver;
            self.submitter.submit_score(total_score);
            final_score = Some(total_score);
        }
        Ok(RoundResolution {
            result,
            final_score,
        })
    }

    pub fn advance_round(&mut self, next_location: Location) -> Result<RoundStarted, GameError> {
        if self.state.phase != RoundPhase::Resolved || self.state.is_over {
            return Err(GameError::InvalidState {
                operation: "advance_round",
                phase: self.state.phase,
            });
        }
        self.start_round(next_location)
    }

    /// One second of the countdown. Ignored unless the round awaits input.
    pub fn tick_timer(&mut self) -> TickOutcome {
        if !self.state.phase.awaits_input() {
            return TickOutcome::Ignored;
        }
        self.state.timer_seconds = self.state.timer_seconds.saturating_sub(1);
        if self.state.timer_seconds > 0 {
            return TickOutcome::Ticked {
                remaining: self.state.timer_seconds,
            };
        }
        // A timeout ends the whole match and never submits a score.
        self.state.phase = RoundPhase::TimedOut;
        self.state.timed_out = true;
        self.state.is_over = true;
        self.state.phase = RoundPhase::MatchOver;
        TickOutcome::TimedOut
    }

    pub fn reset_match(&mut self, location: Location) -> RoundStarted {
        self.state = fresh_state();
        self.begin_round(location)
    }

    pub fn summary(&self) -> MatchSummary {
        let rounds = &self.state.rounds;
        let average_accuracy_pct = if rounds.is_empty() {
            0.0
        } else {
            let sum: f64 = rounds.iter().map(|round| round.accuracy_pct).sum();
            (sum / rounds.len() as f64 * 10.0).round() / 10.0
        };
        MatchSummary {
            rounds_played: rounds.len(),
            total_score: rounds.iter().map(RoundResult::total).sum(),
            average_accuracy_pct,
        }
    }

    fn begin_round(&mut self, location: Location) -> RoundStarted {
        let round_id = NEXT_ROUND_ID.fetch_add(1, Ordering::Relaxed);
        self.state.current_location = Some(location);
        self.state.current_guess = None;
        self.state.phase = RoundPhase::AwaitingGuess;
        self.state.timer_seconds = TIMER_SECONDS;
        self.state.round_id = round_id;
        RoundStarted {
            round_number: self.state.rounds.len() + 1,
            round_id,
        }
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: &[RoundPhase],
    ) -> Result<(), GameError> {
        if allowed.contains(&self.state.phase) {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                operation,
                phase: self.state.phase,
            })
        }
    }
}

fn fresh_state() -> MatchState {
    MatchState {
        rounds: Vec::with_capacity(MAX_ROUNDS),
        current_location: None,
        current_guess: None,
        timer_seconds: TIMER_SECONDS,
        phase: RoundPhase::Idle,
        is_over: false,
        timed_out: false,
        round_id: 0,
    }
}
