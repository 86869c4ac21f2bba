use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::storage::matches::HashMapMatchStorage;
use crate::{auth, health, matches, scores};
use axum::{
    routing::{any, get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapMatchStorage>) -> Router {
    let cors_policy = cors::layer(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let auth_routes = Router::new()
        .route("/passcode/acquire", post(auth::handlers::acquire_passcode))
        .route("/passcode/decode", get(auth::handlers::decode_passcode));
    let current_match_routes = Router::new()
        .route("/", get(matches::handlers::current::current))
        .route("/open-map", post(matches::handlers::current::open_map))
        .route("/guess", post(matches::handlers::current::guess))
        .route("/confirm", post(matches::handlers::current::confirm))
        .route("/next", post(matches::handlers::current::next))
        .route("/reset", post(matches::handlers::current::reset))
        .route("/ws", any(matches::handlers::ws::ws));
    let matches_routes = Router::new()
        .route("/", post(matches::handlers::current::start))
        .nest("/current", current_match_routes);

    Router::new()
        .nest("/health", health_routes)
        .nest("/auth", auth_routes)
        .nest("/matches", matches_routes)
        .route("/leaderboard", get(scores::handlers::leaderboard))
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
