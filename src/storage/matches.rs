use crate::game::consts::MAX_ROUNDS;
use crate::game::models::{RoundResolution, RoundStarted, TickOutcome};
use crate::game::Match;
use crate::geo::{Coordinate, CountryAreas};
use crate::locations::{Location, LocationCatalog};
use crate::matches::consts::EVENTS_CHANNEL_CAPACITY;
use crate::matches::errors::MatchActionError;
use crate::matches::message_types::{
    self, MatchOverPayload, RoundStartedPayload, ServerSentSocketMessage,
};
use crate::matches::models::{MatchSession, MatchSnapshot, Player};
use crate::scores::models::SubmissionStatus;
use crate::scores::{BackgroundScoreSubmitter, ScoreBackend};
use crate::storage::interface::{IMatchStorage, MatchClock, MatchFlowHandler, MatchRepo};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};

/// One match per player, keyed by the player's public id.
#[derive(Clone)]
pub struct HashMapMatchStorage {
    storage: Arc<RwLock<HashMap<String, MatchSession>>>,
    catalog: Arc<LocationCatalog>,
    areas: Arc<CountryAreas>,
    scores: Arc<dyn ScoreBackend>,
    tick_interval: Duration,
}

impl HashMapMatchStorage {
    pub fn new(
        catalog: Arc<LocationCatalog>,
        areas: Arc<CountryAreas>,
        scores: Arc<dyn ScoreBackend>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            catalog,
            areas,
            scores,
            tick_interval,
        }
    }

    /// A fresh engine with its own submission status cell. Submissions still
    /// running for a replaced match cannot reach the new one.
    fn new_game(
        &self,
        player: &Player,
        events: &broadcast::Sender<ServerSentSocketMessage>,
    ) -> (Match, Arc<Mutex<SubmissionStatus>>) {
        let submission = Arc::new(Mutex::new(SubmissionStatus::NotSubmitted));
        let submitter = BackgroundScoreSubmitter::new(
            self.scores.clone(),
            player.clone(),
            submission.clone(),
            events.clone(),
        );
        let game = Match::new(self.areas.clone(), Arc::new(submitter));
        (game, submission)
    }

    /// Ticks the given round once per `tick_interval` until it stops awaiting input.
    fn arm_countdown(&self, public_id: &str, round_id: u64) {
        let storage = self.clone();
        let public_id = public_id.to_string();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(storage.tick_interval).await;
                match storage.tick(&public_id, round_id).await {
                    TickOutcome::Ticked { .. } => continue,
                    TickOutcome::TimedOut | TickOutcome::Ignored => return,
                }
            }
        });
    }
}

impl IMatchStorage for HashMapMatchStorage {}

impl MatchRepo for HashMapMatchStorage {
    async fn start(&self, player: Player) -> MatchSnapshot {
        let (events, _) = broadcast::channel(EVENTS_CHANNEL_CAPACITY);
        let (mut game, submission) = self.new_game(&player, &events);
        let location = self.catalog.pick_random();
        let started = game.reset_match(location.clone());
        let session = MatchSession {
            player,
            game,
            submission,
            events,
        };
        let snapshot = MatchSnapshot::of(&session);
        let public_id = session.player.public_id.clone();
        on_round_started(&session, started, &location);
        self.storage.write().await.insert(public_id.clone(), session);
        self.arm_countdown(&public_id, started.round_id);
        snapshot
    }

    async fn snapshot(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError> {
        self.storage
            .read()
            .await
            .get(public_id)
            .map(MatchSnapshot::of)
            .ok_or(MatchActionError::MatchNotFound)
    }

    async fn subscribe(
        &self,
        public_id: &str,
    ) -> Option<broadcast::Receiver<ServerSentSocketMessage>> {
        self.storage
            .read()
            .await
            .get(public_id)
            .map(|session| session.events.subscribe())
    }
}

impl MatchFlowHandler for HashMapMatchStorage {
    async fn open_guess_map(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(public_id)
            .ok_or(MatchActionError::MatchNotFound)?;
        session.game.open_guess_map()?;
        Ok(MatchSnapshot::of(session))
    }

    async fn place_guess(
        &self,
        public_id: &str,
        coordinate: Coordinate,
    ) -> Result<MatchSnapshot, MatchActionError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(public_id)
            .ok_or(MatchActionError::MatchNotFound)?;
        session.game.place_guess(coordinate)?;
        Ok(MatchSnapshot::of(session))
    }

    async fn confirm_guess(
        &self,
        public_id: &str,
    ) -> Result<(RoundResolution, MatchSnapshot), MatchActionError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(public_id)
            .ok_or(MatchActionError::MatchNotFound)?;
        let resolution = session.game.confirm_guess()?;
        tracing::info!(
            task = "round_resolved",
            public_id = public_id,
            round_number = session.game.state().rounds.len(),
            country = resolution.result.location.country.as_str(),
            distance_km = resolution.result.distance_km,
            score = resolution.result.score,
            bonus = resolution.result.bonus,
        );
        session.notify(ServerSentSocketMessage::RoundResolved {
            r#type: message_types::RoundResolved,
            payload: resolution.result.clone(),
        });
        if resolution.final_score.is_some() {
            session.notify(ServerSentSocketMessage::MatchOver {
                r#type: message_types::MatchOver,
                payload: MatchOverPayload {
                    timed_out: false,
                    summary: session.game.summary(),
                },
            });
        }
        let snapshot = MatchSnapshot::of(session);
        Ok((resolution, snapshot))
    }

    async fn advance_round(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(public_id)
            .ok_or(MatchActionError::MatchNotFound)?;
        let location = self.catalog.pick_random();
        let started = session.game.advance_round(location.clone())?;
        on_round_started(session, started, &location);
        let snapshot = MatchSnapshot::of(session);
        drop(storage_guard);
        self.arm_countdown(public_id, started.round_id);
        Ok(snapshot)
    }

    async fn reset(&self, public_id: &str) -> Result<MatchSnapshot, MatchActionError> {
        let mut storage_guard = self.storage.write().await;
        let session = storage_guard
            .get_mut(public_id)
            .ok_or(MatchActionError::MatchNotFound)?;
        let (game, submission) = self.new_game(&session.player, &session.events);
        session.game = game;
        session.submission = submission;
        let location = self.catalog.pick_random();
        let started = session.game.reset_match(location.clone());
        on_round_started(session, started, &location);
        let snapshot = MatchSnapshot::of(session);
        drop(storage_guard);
        self.arm_countdown(public_id, started.round_id);
        Ok(snapshot)
    }
}

impl MatchClock for HashMapMatchStorage {
    async fn tick(&self, public_id: &str, round_id: u64) -> TickOutcome {
        let mut storage_guard = self.storage.write().await;
        let Some(session) = storage_guard.get_mut(public_id) else {
            return TickOutcome::Ignored;
        };
        // A countdown armed for an earlier round must not touch this one.
        if session.game.round_id() != round_id {
            return TickOutcome::Ignored;
        }
        let outcome = session.game.tick_timer();
        match outcome {
            TickOutcome::Ticked { remaining } => {
                session.notify(ServerSentSocketMessage::Tick {
                    r#type: message_types::Tick,
                    payload: remaining,
                });
            }
            TickOutcome::TimedOut => {
                tracing::info!(
                    task = "match_timed_out",
                    public_id = public_id,
                    rounds_played = session.game.state().rounds.len(),
                );
                session.notify(ServerSentSocketMessage::TimedOut {
                    r#type: message_types::TimedOut,
                });
                session.notify(ServerSentSocketMessage::MatchOver {
                    r#type: message_types::MatchOver,
                    payload: MatchOverPayload {
                        timed_out: true,
                        summary: session.game.summary(),
                    },
                });
            }
            TickOutcome::Ignored => {}
        }
        outcome
    }
}

fn on_round_started(session: &MatchSession, started: RoundStarted, location: &Location) {
    tracing::info!(
        task = "round_started",
        public_id = session.player.public_id.as_str(),
        round_number = started.round_number,
        round_id = started.round_id,
    );
    session.notify(ServerSentSocketMessage::RoundStarted {
        r#type: message_types::RoundStarted,
        payload: RoundStartedPayload {
            round_number: started.round_number,
            rounds_per_match: MAX_ROUNDS,
            hint: location.hint.clone(),
            image_url: location.image_url.clone(),
        },
    });
}
