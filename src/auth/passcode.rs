use crate::auth::JWT_SIGNING_KEY;
use hmac::Hmac;
use jwt::{SignWithKey, VerifyWithKey};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

const PUBLIC_ID_LENGTH: usize = 16;

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtPayload {
    pub public_id: String,
    pub private_id: String,
}

impl JwtPayload {
    /// A fresh identity: a short shareable public id and a secret private one.
    pub fn generate() -> Self {
        let public_id = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(PUBLIC_ID_LENGTH)
            .map(char::from)
            .collect();
        Self {
            public_id,
            private_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PasscodeError {
    #[error("the JWT signing key is not initialized")]
    SigningKeyMissing,
    #[error("the JWT signing key is invalid")]
    InvalidSigningKey,
    #[error(transparent)]
    Jwt(#[from] jwt::Error),
}

pub fn decode(passcode: &str) -> Result<JwtPayload, PasscodeError> {
    Ok(passcode.verify_with_key(signing_key()?)?)
}

pub fn encode(payload: &JwtPayload) -> Result<String, PasscodeError> {
    Ok(payload.sign_with_key(signing_key()?)?)
}

fn signing_key() -> Result<&'static Hmac<Sha256>, PasscodeError> {
    JWT_SIGNING_KEY.get().ok_or(PasscodeError::SigningKeyMissing)
}
