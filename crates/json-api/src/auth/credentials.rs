//! HTTP Basic credentials.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Username and password presented by a client.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl Credentials {
    /// Parse an `Authorization: Basic <base64(username:password)>` value.
    pub(crate) fn from_basic_header(value: &str) -> Option<Self> {
        let (scheme, encoded) = value.trim().split_once(' ')?;

        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (username, password) = decoded.split_once(':')?;

        if username.is_empty() {
            return None;
        }

        Some(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Identity established by the authentication middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Principal {
    pub(crate) username: String,
}
