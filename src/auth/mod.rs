use crate::cli::Args;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::OnceLock;

pub use passcode::PasscodeError;

pub mod extractors;
pub mod handlers;
pub mod passcode;
pub mod responses;

static JWT_SIGNING_KEY: OnceLock<Hmac<Sha256>> = OnceLock::new();

/// Installs the passcode signing key. Later calls keep the first key.
pub fn init(args: &Args) -> Result<(), PasscodeError> {
    if JWT_SIGNING_KEY.get().is_none() {
        let key = Hmac::new_from_slice(args.jwt_signing_key.as_bytes())
            .map_err(|_| PasscodeError::InvalidSigningKey)?;
        let _ = JWT_SIGNING_KEY.set(key);
    }
    Ok(())
}
