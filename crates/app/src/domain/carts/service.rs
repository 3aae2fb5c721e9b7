//! Carts service.

use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    domain::carts::{
        errors::{CartsServiceError, InvalidArgument, Phase},
        merge::{merge_line_items, validate},
        models::{Cart, CartId, LineItem, LineItemId, NewLineItem, UserId},
        store::{CartStore, StoreError, TransactionMode},
    },
    operation::OperationContext,
};

#[derive(Clone)]
pub struct StoreCartsService {
    store: Arc<dyn CartStore>,
}

impl StoreCartsService {
    #[must_use]
    pub fn new(store: Arc<dyn CartStore>) -> Self {
        Self { store }
    }
}

/// Run one storage call under `ctx`, tagging failures with `phase`.
///
/// A storage error raised after the context fired is reported as the
/// interruption instead.
async fn step<T, F>(ctx: &OperationContext, phase: Phase, future: F) -> Result<T, CartsServiceError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    match ctx.run(future).await? {
        Ok(value) => Ok(value),
        Err(source) => {
            ctx.check()?;

            Err(CartsServiceError::storage(phase, source))
        }
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn create_cart(
        &self,
        ctx: &OperationContext,
        user: UserId,
        items: Vec<NewLineItem>,
    ) -> Result<Cart, CartsServiceError> {
        ctx.check()?;

        if !user.is_valid() {
            return Err(InvalidArgument::UserId(user).into());
        }

        let items = merge_line_items(&[], items)?;

        let mut tx = step(ctx, Phase::Begin, self.store.begin(TransactionMode::ReadWrite)).await?;

        let mut cart = step(ctx, Phase::Cart, tx.create_cart(user)).await?;

        if !items.is_empty() {
            cart.items = step(ctx, Phase::Items, tx.upsert_line_items(cart.id, items)).await?;
        }

        step(ctx, Phase::Commit, tx.commit()).await?;

        debug!(cart_id = %cart.id, user_id = %user, items = cart.items.len(), "created cart");

        Ok(cart)
    }

    async fn show_cart(
        &self,
        ctx: &OperationContext,
        cart: CartId,
    ) -> Result<Cart, CartsServiceError> {
        ctx.check()?;

        let mut tx = step(ctx, Phase::Begin, self.store.begin(TransactionMode::ReadOnly)).await?;

        let found = step(ctx, Phase::Cart, tx.cart_with_items(cart)).await?;

        step(ctx, Phase::Commit, tx.commit()).await?;

        Ok(found)
    }

    async fn empty_cart(&self, ctx: &OperationContext, cart: CartId) -> Result<(), CartsServiceError> {
        ctx.check()?;

        let mut tx = step(ctx, Phase::Begin, self.store.begin(TransactionMode::ReadWrite)).await?;

        let removed = step(ctx, Phase::Items, tx.empty_cart(cart)).await?;

        step(ctx, Phase::Commit, tx.commit()).await?;

        debug!(cart_id = %cart, removed, "emptied cart");

        Ok(())
    }

    async fn add_line_items(
        &self,
        ctx: &OperationContext,
        cart: CartId,
        items: Vec<NewLineItem>,
    ) -> Result<Vec<LineItem>, CartsServiceError> {
        ctx.check()?;

        for item in &items {
            validate(item)?;
        }

        let mut tx = step(ctx, Phase::Begin, self.store.begin(TransactionMode::ReadWrite)).await?;

        step(ctx, Phase::Cart, tx.touch_cart(cart)).await?;

        let current = step(ctx, Phase::Cart, tx.cart_with_items(cart)).await?;

        let merged = merge_line_items(&current.items, items)?;

        let upserted = if merged.is_empty() {
            Vec::new()
        } else {
            step(ctx, Phase::Items, tx.upsert_line_items(cart, merged)).await?
        };

        step(ctx, Phase::Commit, tx.commit()).await?;

        debug!(cart_id = %cart, items = upserted.len(), "added line items");

        Ok(upserted)
    }

    async fn remove_line_item(
        &self,
        ctx: &OperationContext,
        cart: CartId,
        item: LineItemId,
    ) -> Result<(), CartsServiceError> {
        ctx.check()?;

        let mut tx = step(ctx, Phase::Begin, self.store.begin(TransactionMode::ReadWrite)).await?;

        let removed = step(ctx, Phase::Items, tx.remove_line_item(cart, item)).await?;

        step(ctx, Phase::Commit, tx.commit()).await?;

        debug!(cart_id = %cart, line_item_id = %item, removed, "removed line item");

        Ok(())
    }
}

/// Cart operations. Each call runs in a single storage transaction.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Create a cart for `user` holding `items`.
    async fn create_cart(
        &self,
        ctx: &OperationContext,
        user: UserId,
        items: Vec<NewLineItem>,
    ) -> Result<Cart, CartsServiceError>;

    /// Retrieve a cart with its line items.
    async fn show_cart(&self, ctx: &OperationContext, cart: CartId)
    -> Result<Cart, CartsServiceError>;

    /// Remove every line item from a cart. The cart itself is kept.
    async fn empty_cart(&self, ctx: &OperationContext, cart: CartId) -> Result<(), CartsServiceError>;

    /// Merge `items` into the cart, returning the resulting line items.
    async fn add_line_items(
        &self,
        ctx: &OperationContext,
        cart: CartId,
        items: Vec<NewLineItem>,
    ) -> Result<Vec<LineItem>, CartsServiceError>;

    /// Remove a line item. Unknown items are ignored.
    async fn remove_line_item(
        &self,
        ctx: &OperationContext,
        cart: CartId,
        item: LineItemId,
    ) -> Result<(), CartsServiceError>;
}
