//! Cart Repositories

mod carts;
mod items;

pub(crate) use carts::SqliteCartsRepository;
pub(crate) use items::SqliteLineItemsRepository;
