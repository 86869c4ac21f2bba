use crate::auth::extractors::User;
use crate::auth::passcode::{self, JwtPayload};
use crate::auth::responses::{AcquirePasscodeResponse, DecodePasscodeResponse};
use axum::response::Json;

#[axum::debug_handler]
pub async fn acquire_passcode() -> Json<AcquirePasscodeResponse> {
    let jwt_payload = JwtPayload::generate();
    match passcode::encode(&jwt_payload) {
        Ok(passcode) => Json(AcquirePasscodeResponse {
            error: false,
            passcode: Some(passcode),
            public_id: Some(jwt_payload.public_id),
        }),
        Err(err) => {
            tracing::error!(task = "acquire_passcode", error = %err);
            Json(AcquirePasscodeResponse {
                error: true,
                passcode: None,
                public_id: None,
            })
        }
    }
}

#[axum::debug_handler]
pub async fn decode_passcode(user: User) -> Json<DecodePasscodeResponse> {
    Json(DecodePasscodeResponse {
        error: false,
        public_id: user.public_id,
    })
}
