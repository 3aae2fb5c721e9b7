//! Carts

pub mod errors;
pub mod merge;
pub mod models;
mod repositories;
pub mod service;
pub mod store;

pub use errors::CartsServiceError;
pub use service::*;
