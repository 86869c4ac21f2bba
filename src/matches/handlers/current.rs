use crate::app_context::{AppContext, RequestContext};
use crate::auth::extractors::User;
use crate::geo::Coordinate;
use crate::http::query_params::UsernameQueryParam;
use crate::matches::services::http::MatchHttpHandler;
use crate::matches::services::responses::{ConfirmGuessResponse, MatchResponse};
use crate::storage::matches::HashMapMatchStorage;
use axum::extract::{Query, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn start(
    user: User,
    Query(UsernameQueryParam { username }): Query<UsernameQueryParam>,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<MatchResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .start(username)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn current(
    user: User,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<MatchResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .current()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn open_map(
    user: User,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<MatchResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .open_guess_map()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn guess(
    user: User,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
    Json(coordinate): Json<Coordinate>,
) -> Json<MatchResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .place_guess(coordinate)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn confirm(
    user: User,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<ConfirmGuessResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .confirm_guess()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn next(
    user: User,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<MatchResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .advance_round()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn reset(
    user: User,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Json<MatchResponse> {
    let request_context = RequestContext::from(user);
    let response = MatchHttpHandler::new(app_context, &request_context)
        .reset()
        .await;
    Json(response)
}
