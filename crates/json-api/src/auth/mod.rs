//! Authentication

mod authenticator;
mod credentials;
mod errors;
pub(crate) mod middleware;

pub(crate) use authenticator::*;
pub(crate) use credentials::*;
pub(crate) use errors::*;
