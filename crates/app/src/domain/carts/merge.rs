//! Quantity merging for line items added to an existing cart.

use crate::domain::carts::{
    errors::InvalidArgument,
    models::{LineItem, NewLineItem},
};

/// Merge `incoming` into the items already held by a cart.
///
/// Incoming entries for the same product are folded into the first one.
/// Each result is then matched against `existing` by product: the first
/// existing item with that product lends its id and its quantity is added.
/// Unmatched products keep `id: None`. The result follows `incoming` order.
///
/// # Errors
///
/// Returns [`InvalidArgument`] for non-positive product ids or quantities and
/// for quantities that do not fit in an `i64` once combined.
pub fn merge_line_items(
    existing: &[LineItem],
    incoming: Vec<NewLineItem>,
) -> Result<Vec<NewLineItem>, InvalidArgument> {
    let mut merged: Vec<NewLineItem> = Vec::with_capacity(incoming.len());

    for item in incoming {
        validate(&item)?;

        if let Some(seen) = merged
            .iter_mut()
            .find(|seen| seen.product_id == item.product_id)
        {
            seen.quantity = add(seen, item.quantity)?;
            continue;
        }

        merged.push(NewLineItem::new(item.product_id, item.quantity));
    }

    for item in &mut merged {
        if let Some(current) = existing
            .iter()
            .find(|current| current.product_id == item.product_id)
        {
            item.id = Some(current.id);
            item.quantity = add(item, current.quantity)?;
        }
    }

    Ok(merged)
}

/// Reject items that may not be persisted.
///
/// # Errors
///
/// Returns [`InvalidArgument`] for non-positive product ids or quantities.
pub fn validate(item: &NewLineItem) -> Result<(), InvalidArgument> {
    if !item.product_id.is_valid() {
        return Err(InvalidArgument::ProductId(item.product_id));
    }

    if item.quantity <= 0 {
        return Err(InvalidArgument::Quantity {
            product_id: item.product_id,
            quantity: item.quantity,
        });
    }

    Ok(())
}

fn add(item: &NewLineItem, quantity: i64) -> Result<i64, InvalidArgument> {
    item.quantity
        .checked_add(quantity)
        .ok_or(InvalidArgument::QuantityOverflow(item.product_id))
}
