//! Authentication errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}
