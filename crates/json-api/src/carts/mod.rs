//! Carts

mod errors;
mod handlers;
pub(crate) mod items;
mod models;

pub(crate) use handlers::{create, delete, get};
