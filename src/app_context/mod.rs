use crate::auth::extractors::User;
use crate::cli::Args;
use crate::geo::CountryAreas;
use crate::locations::LocationCatalog;
use crate::scores::{HttpScoreBackend, InMemoryScoreBackend, ScoreBackend};
use crate::storage::interface::IMatchStorage;
use crate::storage::matches::HashMapMatchStorage;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext<MS: IMatchStorage> {
    pub matches: MS,
    pub scores: Arc<dyn ScoreBackend>,
}

pub struct RequestContext {
    pub public_id: String,
}

impl From<User> for RequestContext {
    fn from(user: User) -> Self {
        Self {
            public_id: user.public_id,
        }
    }
}

/// Loads the landmark catalog and country areas and picks the score backend.
pub fn init(args: &Args) -> anyhow::Result<AppContext<HashMapMatchStorage>> {
    let catalog = LocationCatalog::load(&args.locations, args.seed)
        .with_context(|| format!("Failed to load locations from {:?}.", args.locations))?;
    let areas = match &args.country_areas {
        Some(path) => CountryAreas::load(path)
            .with_context(|| format!("Failed to load country areas from {path:?}."))?,
        None => CountryAreas::default(),
    };
    let scores: Arc<dyn ScoreBackend> = match &args.scores_backend_url {
        Some(url) => Arc::new(HttpScoreBackend::new(
            url,
            Duration::from_millis(args.scores_timeout_ms),
        )?),
        None => Arc::new(InMemoryScoreBackend::default()),
    };
    tracing::info!(
        task = "startup",
        locations = catalog.len(),
        countries = areas.country_count(),
        remote_scores = args.scores_backend_url.is_some(),
    );
    let matches = HashMapMatchStorage::new(
        Arc::new(catalog),
        Arc::new(areas),
        scores.clone(),
        Duration::from_millis(args.tick_interval_ms),
    );
    Ok(AppContext { matches, scores })
}
