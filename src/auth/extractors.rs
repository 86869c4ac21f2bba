use crate::auth::passcode;
use crate::auth::responses::{PasscodeExtractionError, PasscodeExtractionReason};
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::Json;

pub struct User {
    pub public_id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for User
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PasscodeExtractionError>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(passcode) = parts.headers.get("Passcode") else {
            return Err(rejection(PasscodeExtractionReason::NoPasscodeHeaderProvided));
        };
        let Ok(passcode) = passcode.to_str() else {
            return Err(rejection(PasscodeExtractionReason::InvalidPasscode));
        };
        match passcode::decode(passcode) {
            Ok(jwt_payload) => Ok(User {
                public_id: jwt_payload.public_id,
            }),
            Err(_) => Err(rejection(PasscodeExtractionReason::InvalidPasscode)),
        }
    }
}

fn rejection(reason: PasscodeExtractionReason) -> (StatusCode, Json<PasscodeExtractionError>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PasscodeExtractionError {
            error: true,
            reason,
        }),
    )
}
