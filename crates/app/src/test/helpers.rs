//! Test Helpers

use jiff::Timestamp;

use crate::domain::carts::models::{Cart, CartId, LineItem, LineItemId, NewLineItem, ProductId, UserId};

pub(crate) fn new_item(product: i64, quantity: i64) -> NewLineItem {
    NewLineItem::new(ProductId::new(product), quantity)
}

pub(crate) fn make_cart(id: i64, user: i64) -> Cart {
    Cart {
        id: CartId::new(id),
        user_id: UserId::new(user),
        items: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_item(id: i64, cart: i64, product: i64, quantity: i64) -> LineItem {
    LineItem {
        id: LineItemId::new(id),
        cart_id: CartId::new(cart),
        product_id: ProductId::new(product),
        quantity,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// `(product, quantity)` pairs sorted by product.
pub(crate) fn quantities(items: &[LineItem]) -> Vec<(i64, i64)> {
    let mut pairs: Vec<_> = items
        .iter()
        .map(|item| (item.product_id.into_i64(), item.quantity))
        .collect();

    pairs.sort_unstable();

    pairs
}
