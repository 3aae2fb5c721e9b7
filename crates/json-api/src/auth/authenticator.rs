//! Pluggable credential verification.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use mockall::automock;

use super::{AuthError, Credentials, Principal};

/// Verifies credentials presented to the API.
#[automock]
#[async_trait]
pub(crate) trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Principal, AuthError>;
}

/// Accepts a single configured username and password.
pub(crate) struct StaticAuthenticator {
    username: String,
    password: String,
}

impl StaticAuthenticator {
    #[must_use]
    pub(crate) fn new(username: String, password: String) -> Self {
        Self { username, password }
    }
}

impl Debug for StaticAuthenticator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StaticAuthenticator")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Principal, AuthError> {
        if credentials.username != self.username || credentials.password != self.password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(Principal {
            username: credentials.username.clone(),
        })
    }
}
