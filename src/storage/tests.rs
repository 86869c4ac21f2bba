use crate::game::models::{RoundPhase, TickOutcome};
use crate::geo::{Coordinate, CountryAreas};
use crate::locations::{Location, LocationCatalog};
use crate::matches::errors::MatchActionError;
use crate::matches::message_types::ServerSentSocketMessage;
use crate::matches::models::Player;
use crate::scores::errors::SubmissionError;
use crate::scores::models::{Ack, LeaderboardEntry, ScoreSubmission, SubmissionStatus};
use crate::scores::{InMemoryScoreBackend, ScoreBackend};
use crate::storage::interface::{MatchClock, MatchFlowHandler, MatchRepo};
use crate::storage::matches::HashMapMatchStorage;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

const PUBLIC_ID: &str = "testPublicId";
const SLOW_BACKEND_DELAY: Duration = Duration::from_millis(200);

/// Answers every submission after `SLOW_BACKEND_DELAY`.
struct SlowScoreBackend {
    fails: bool,
}

#[async_trait]
impl ScoreBackend for SlowScoreBackend {
    async fn submit_score(&self, _submission: ScoreSubmission) -> Result<Ack, SubmissionError> {
        tokio::time::sleep(SLOW_BACKEND_DELAY).await;
        if self.fails {
            Err(SubmissionError::Network(String::from("connection reset")))
        } else {
            Ok(Ack::default())
        }
    }

    async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, SubmissionError> {
        Ok(Vec::new())
    }
}

fn storage() -> HashMapMatchStorage {
    storage_with(Arc::new(InMemoryScoreBackend::default()))
}

fn storage_with(scores: Arc<dyn ScoreBackend>) -> HashMapMatchStorage {
    let paris = Location {
        coordinates: Coordinate::new(48.8566, 2.3522),
        country: String::from("France"),
        city: String::from("Paris"),
        hint: String::from("City of light"),
        image_url: String::from("https://example.com/paris.jpg"),
    };
    let catalog = LocationCatalog::new(vec![paris], Some(7)).expect("Failed to build catalog.");
    // Long enough that the countdown task never fires during a test.
    HashMapMatchStorage::new(
        Arc::new(catalog),
        Arc::new(CountryAreas::default()),
        scores,
        Duration::from_secs(3600),
    )
}

fn player() -> Player {
    Player {
        public_id: String::from(PUBLIC_ID),
        name: String::from("Eratosthenes"),
    }
}

async fn play_full_match(storage: &HashMapMatchStorage) {
    for round in 0..5 {
        if round > 0 {
            storage.advance_round(PUBLIC_ID).await.unwrap();
        }
        storage.open_guess_map(PUBLIC_ID).await.unwrap();
        storage
            .place_guess(PUBLIC_ID, Coordinate::new(48.8566, 2.3522))
            .await
            .unwrap();
        storage.confirm_guess(PUBLIC_ID).await.unwrap();
    }
}

#[tokio::test]
async fn test_tick_for_unknown_player_is_ignored() {
    let storage = storage();

    assert_eq!(storage.tick(PUBLIC_ID, 1).await, TickOutcome::Ignored);
}

#[tokio::test]
async fn test_tick_for_stale_round_is_ignored() {
    let storage = storage();
    let started = storage.start(player()).await;
    let round_id = started.state.round_id;

    assert_eq!(
        storage.tick(PUBLIC_ID, round_id + 1_000_000).await,
        TickOutcome::Ignored
    );
    assert_eq!(
        storage.tick(PUBLIC_ID, round_id).await,
        TickOutcome::Ticked { remaining: 29 }
    );
}

#[tokio::test]
async fn test_tick_from_previous_round_does_not_touch_next_round() {
    let storage = storage();
    let first_round_id = storage.start(player()).await.state.round_id;
    storage.open_guess_map(PUBLIC_ID).await.unwrap();
    storage
        .place_guess(PUBLIC_ID, Coordinate::new(48.8566, 2.3522))
        .await
        .unwrap();
    storage.confirm_guess(PUBLIC_ID).await.unwrap();
    assert_eq!(
        storage.tick(PUBLIC_ID, first_round_id).await,
        TickOutcome::Ignored
    );

    let second = storage.advance_round(PUBLIC_ID).await.unwrap();

    assert_ne!(second.state.round_id, first_round_id);
    assert_eq!(
        storage.tick(PUBLIC_ID, first_round_id).await,
        TickOutcome::Ignored
    );
    let snapshot = storage.snapshot(PUBLIC_ID).await.unwrap();
    assert_eq!(snapshot.state.timer_seconds, 30);
    assert_eq!(snapshot.state.phase, RoundPhase::AwaitingGuess);
}

#[tokio::test]
async fn test_events_are_broadcast_to_subscribers() {
    let storage = storage();
    let round_id = storage.start(player()).await.state.round_id;
    let mut events = storage
        .subscribe(PUBLIC_ID)
        .await
        .expect("No match to subscribe to.");

    storage.tick(PUBLIC_ID, round_id).await;
    storage.open_guess_map(PUBLIC_ID).await.unwrap();
    storage
        .place_guess(PUBLIC_ID, Coordinate::new(48.8566, 2.3522))
        .await
        .unwrap();
    storage.confirm_guess(PUBLIC_ID).await.unwrap();
    storage.advance_round(PUBLIC_ID).await.unwrap();

    match events.recv().await {
        Ok(ServerSentSocketMessage::Tick { payload, .. }) => assert_eq!(payload, 29),
        other => panic!("Expected a tick, got {other:?}."),
    }
    match events.recv().await {
        Ok(ServerSentSocketMessage::RoundResolved { payload, .. }) => {
            assert_eq!(payload.score, 1000);
            assert_eq!(payload.bonus, 200);
        }
        other => panic!("Expected a round resolution, got {other:?}."),
    }
    match events.recv().await {
        Ok(ServerSentSocketMessage::RoundStarted { payload, .. }) => {
            assert_eq!(payload.round_number, 2);
            assert_eq!(payload.rounds_per_match, 5);
            assert_eq!(payload.hint, "City of light");
        }
        other => panic!("Expected a round start, got {other:?}."),
    }
}

#[tokio::test]
async fn test_timeout_broadcasts_match_over() {
    let storage = storage();
    let round_id = storage.start(player()).await.state.round_id;
    let mut events = storage.subscribe(PUBLIC_ID).await.unwrap();

    for _ in 0..29 {
        storage.tick(PUBLIC_ID, round_id).await;
    }
    assert_eq!(storage.tick(PUBLIC_ID, round_id).await, TickOutcome::TimedOut);

    let mut received = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert!(matches!(
        received.as_slice(),
        [.., ServerSentSocketMessage::TimedOut { .. }, ServerSentSocketMessage::MatchOver { payload, .. }]
            if payload.timed_out
    ));
    let snapshot = storage.snapshot(PUBLIC_ID).await.unwrap();
    assert!(snapshot.state.timed_out);
    assert_eq!(snapshot.state.phase, RoundPhase::MatchOver);
}

#[tokio::test]
async fn test_actions_on_missing_match() {
    let storage = storage();

    assert!(matches!(
        storage.snapshot(PUBLIC_ID).await,
        Err(MatchActionError::MatchNotFound)
    ));
    assert!(storage.subscribe(PUBLIC_ID).await.is_none());
    assert!(matches!(
        storage.open_guess_map(PUBLIC_ID).await,
        Err(MatchActionError::MatchNotFound)
    ));
    assert!(matches!(
        storage.reset(PUBLIC_ID).await,
        Err(MatchActionError::MatchNotFound)
    ));
}

#[tokio::test]
async fn test_reset_clears_rounds() {
    let storage = storage();
    storage.start(player()).await;
    storage.open_guess_map(PUBLIC_ID).await.unwrap();
    storage
        .place_guess(PUBLIC_ID, Coordinate::new(0.0, 0.0))
        .await
        .unwrap();
    storage.confirm_guess(PUBLIC_ID).await.unwrap();

    let snapshot = storage.reset(PUBLIC_ID).await.unwrap();

    assert!(snapshot.state.rounds.is_empty());
    assert_eq!(snapshot.state.phase, RoundPhase::AwaitingGuess);
    assert_eq!(snapshot.summary.total_score, 0);
}

#[tokio::test]
async fn test_late_submission_does_not_leak_into_reset_match() {
    let storage = storage_with(Arc::new(SlowScoreBackend { fails: false }));
    storage.start(player()).await;
    play_full_match(&storage).await;
    assert_eq!(
        storage.snapshot(PUBLIC_ID).await.unwrap().submission,
        SubmissionStatus::Pending
    );

    storage.reset(PUBLIC_ID).await.unwrap();
    tokio::time::sleep(SLOW_BACKEND_DELAY * 2).await;

    let snapshot = storage.snapshot(PUBLIC_ID).await.unwrap();
    assert_eq!(snapshot.submission, SubmissionStatus::NotSubmitted);
    assert!(snapshot.state.rounds.is_empty());
    assert_eq!(snapshot.state.phase, RoundPhase::AwaitingGuess);
}

#[tokio::test]
async fn test_late_submission_failure_is_not_reported_to_reset_match() {
    let storage = storage_with(Arc::new(SlowScoreBackend { fails: true }));
    storage.start(player()).await;
    play_full_match(&storage).await;
    storage.reset(PUBLIC_ID).await.unwrap();
    let mut events = storage.subscribe(PUBLIC_ID).await.unwrap();

    tokio::time::sleep(SLOW_BACKEND_DELAY * 2).await;

    assert_eq!(
        storage.snapshot(PUBLIC_ID).await.unwrap().submission,
        SubmissionStatus::NotSubmitted
    );
    while let Ok(event) = events.try_recv() {
        assert!(
            !matches!(event, ServerSentSocketMessage::SubmissionFailed { .. }),
            "Unexpected submission failure after reset."
        );
    }
}

#[tokio::test]
async fn test_submission_settles_when_match_is_kept() {
    let storage = storage_with(Arc::new(SlowScoreBackend { fails: false }));
    storage.start(player()).await;
    play_full_match(&storage).await;

    tokio::time::sleep(SLOW_BACKEND_DELAY * 2).await;

    assert_eq!(
        storage.snapshot(PUBLIC_ID).await.unwrap().submission,
        SubmissionStatus::Accepted
    );
}
