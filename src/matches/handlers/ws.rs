use crate::app_context::AppContext;
use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use crate::http::query_params::PasscodeQueryParam;
use crate::matches::message_types::{self, ClientSentSocketMessage, ServerSentSocketMessage};
use crate::matches::services::responses::{MatchResponse, MatchResponseError};
use crate::storage::interface::MatchRepo;
use crate::storage::matches::HashMapMatchStorage;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;

/// Streams match events to the player. Browsers cannot set headers on a
/// WebSocket handshake, hence the passcode in the query string.
#[axum::debug_handler]
pub async fn ws(
    ws: WebSocketUpgrade,
    Query(PasscodeQueryParam { passcode }): Query<PasscodeQueryParam>,
    State(app_context): State<AppContext<HashMapMatchStorage>>,
) -> Response {
    let Ok(jwt_payload) = passcode::decode(&passcode) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(PasscodeExtractionError {
                error: true,
                reason: PasscodeExtractionReason::InvalidPasscode,
            }),
        )
            .into_response();
    };
    let Some(events) = app_context.matches.subscribe(&jwt_payload.public_id).await else {
        return (
            StatusCode::NOT_FOUND,
            Json(MatchResponse::failed(MatchResponseError::MatchNotFound)),
        )
            .into_response();
    };
    let handler = MatchWsHandler {
        public_id: jwt_payload.public_id,
        events,
    };
    ws.on_upgrade(move |socket| handler.on_connected(socket))
}

pub struct MatchWsHandler {
    public_id: String,
    events: Receiver<ServerSentSocketMessage>,
}

impl MatchWsHandler {
    async fn on_connected(self, socket: WebSocket) {
        let MatchWsHandler {
            public_id,
            mut events,
        } = self;
        tracing::info!(task = "ws_connected", public_id = public_id);
        let (mut sender, mut receiver) = socket.split();
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Ok(message) => {
                        if send(&mut sender, &message).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(task = "ws_lagged", public_id = public_id, skipped);
                    }
                    // The match was replaced by a new one.
                    Err(RecvError::Closed) => break,
                },
                incoming = receiver.next() => match incoming {
                    Some(Ok(Message::Text(raw_message))) => {
                        if on_new_message(&mut sender, &public_id, &raw_message).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                },
            }
        }
        tracing::info!(task = "ws_disconnected", public_id = public_id);
    }
}

async fn on_new_message(
    sender: &mut SplitSink<WebSocket, Message>,
    public_id: &str,
    raw_message: &str,
) -> Result<(), axum::Error> {
    match serde_json::from_str::<ClientSentSocketMessage>(raw_message) {
        Ok(ClientSentSocketMessage::Ping { .. }) => {
            let pong = ServerSentSocketMessage::Pong {
                r#type: message_types::Pong,
            };
            send(sender, &pong).await
        }
        Err(err) => {
            tracing::warn!(
                task = "client_sent_ws_message",
                public_id = public_id,
                error = %err,
            );
            Ok(())
        }
    }
}

async fn send(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &ServerSentSocketMessage,
) -> Result<(), axum::Error> {
    match serde_json::to_string(message) {
        Ok(raw_message) => sender.send(Message::Text(raw_message)).await,
        Err(err) => {
            tracing::warn!(task = "server_sent_ws_message", error = %err);
            Ok(())
        }
    }
}
