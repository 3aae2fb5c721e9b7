//! Cart storage contract.
//!
//! A [`CartStore`] hands out [`CartTransaction`]s. All reads and writes go
//! through a transaction, and a transaction cannot open another one.

mod errors;
mod sqlite;

use async_trait::async_trait;
use mockall::automock;

use crate::domain::carts::models::{Cart, CartId, LineItem, LineItemId, NewLineItem, UserId};

pub use errors::StoreError;
pub use sqlite::{SqliteCartStore, SqliteTransaction};

/// Access mode requested when opening a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionMode {
    ReadOnly,
    ReadWrite,
}

#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Open a new transaction.
    async fn begin(&self, mode: TransactionMode) -> Result<Box<dyn CartTransaction>, StoreError>;
}

/// Transaction-scoped cart storage.
///
/// Dropping a transaction that was not committed rolls it back.
#[automock]
#[async_trait]
pub trait CartTransaction: Send {
    /// Insert a cart owned by `user`. The returned cart has no items.
    async fn create_cart(&mut self, user: UserId) -> Result<Cart, StoreError>;

    /// Bump the cart's `updated_at`, claiming it for writing until the
    /// transaction ends. Fails with [`StoreError::NotFound`] for unknown carts.
    async fn touch_cart(&mut self, cart: CartId) -> Result<(), StoreError>;

    /// Fetch a cart together with its line items.
    async fn cart_with_items(&mut self, cart: CartId) -> Result<Cart, StoreError>;

    /// Delete every line item of a cart, returning the number removed.
    async fn empty_cart(&mut self, cart: CartId) -> Result<u64, StoreError>;

    /// Insert or update line items keyed by `(cart, product)`.
    ///
    /// An existing row takes the given quantity. Items come back in input order.
    async fn upsert_line_items(
        &mut self,
        cart: CartId,
        items: Vec<NewLineItem>,
    ) -> Result<Vec<LineItem>, StoreError>;

    /// Delete one line item, returning the number removed.
    async fn remove_line_item(&mut self, cart: CartId, item: LineItemId)
    -> Result<u64, StoreError>;

    async fn commit(&mut self) -> Result<(), StoreError>;

    async fn rollback(&mut self) -> Result<(), StoreError>;
}
