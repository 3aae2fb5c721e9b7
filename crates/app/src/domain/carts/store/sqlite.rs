//! SQLite cart store.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::debug;

use crate::domain::carts::{
    models::{Cart, CartId, LineItem, LineItemId, NewLineItem, UserId},
    repositories::{SqliteCartsRepository, SqliteLineItemsRepository},
};

use super::{CartStore, CartTransaction, StoreError, TransactionMode};

type SqliteTx = Transaction<'static, Sqlite>;

#[derive(Debug, Clone)]
pub struct SqliteCartStore {
    pool: SqlitePool,
}

impl SqliteCartStore {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartStore for SqliteCartStore {
    async fn begin(&self, mode: TransactionMode) -> Result<Box<dyn CartTransaction>, StoreError> {
        let tx = self.pool.begin().await?;

        Ok(Box::new(SqliteTransaction::new(tx, mode)))
    }
}

/// An open SQLite transaction.
///
/// SQLite serialises writers. Read-write operations issue a write as their
/// first statement so the write lock is taken before anything is read and
/// `busy_timeout` governs waiting for it.
pub struct SqliteTransaction {
    tx: Option<SqliteTx>,
    mode: TransactionMode,
    carts: SqliteCartsRepository,
    items: SqliteLineItemsRepository,
}

impl SqliteTransaction {
    #[must_use]
    pub fn new(tx: SqliteTx, mode: TransactionMode) -> Self {
        Self {
            tx: Some(tx),
            mode,
            carts: SqliteCartsRepository::new(),
            items: SqliteLineItemsRepository::new(),
        }
    }
}

impl Debug for SqliteTransaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SqliteTransaction")
            .field("mode", &self.mode)
            .field("open", &self.tx.is_some())
            .finish_non_exhaustive()
    }
}

fn readable(tx: &mut Option<SqliteTx>) -> Result<&mut SqliteTx, StoreError> {
    tx.as_mut().ok_or(StoreError::Finished)
}

fn writable(tx: &mut Option<SqliteTx>, mode: TransactionMode) -> Result<&mut SqliteTx, StoreError> {
    if mode == TransactionMode::ReadOnly {
        return Err(StoreError::ReadOnly);
    }

    readable(tx)
}

#[async_trait]
impl CartTransaction for SqliteTransaction {
    async fn create_cart(&mut self, user: UserId) -> Result<Cart, StoreError> {
        let tx = writable(&mut self.tx, self.mode)?;

        Ok(self.carts.create_cart(tx, user).await?)
    }

    async fn touch_cart(&mut self, cart: CartId) -> Result<(), StoreError> {
        let tx = writable(&mut self.tx, self.mode)?;

        if self.carts.touch_cart(tx, cart).await? == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }

    async fn cart_with_items(&mut self, cart: CartId) -> Result<Cart, StoreError> {
        let tx = readable(&mut self.tx)?;

        let mut found = self.carts.get_cart(tx, cart).await?;
        let items = self.items.get_line_items(tx, cart).await?;

        found.items.extend(items);

        Ok(found)
    }

    async fn empty_cart(&mut self, cart: CartId) -> Result<u64, StoreError> {
        let tx = writable(&mut self.tx, self.mode)?;

        Ok(self.items.delete_line_items(tx, cart).await?)
    }

    async fn upsert_line_items(
        &mut self,
        cart: CartId,
        items: Vec<NewLineItem>,
    ) -> Result<Vec<LineItem>, StoreError> {
        let tx = writable(&mut self.tx, self.mode)?;

        let mut upserted = Vec::with_capacity(items.len());

        for item in items {
            upserted.push(self.items.upsert_line_item(tx, cart, &item).await?);
        }

        Ok(upserted)
    }

    async fn remove_line_item(
        &mut self,
        cart: CartId,
        item: LineItemId,
    ) -> Result<u64, StoreError> {
        let tx = writable(&mut self.tx, self.mode)?;

        Ok(self.items.delete_line_item(tx, cart, item).await?)
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        let tx = self.tx.take().ok_or(StoreError::Finished)?;

        tx.commit().await?;

        debug!(mode = ?self.mode, "transaction committed");

        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), StoreError> {
        let tx = self.tx.take().ok_or(StoreError::Finished)?;

        tx.rollback().await?;

        debug!(mode = ?self.mode, "transaction rolled back");

        Ok(())
    }
}
