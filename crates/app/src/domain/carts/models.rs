//! Cart Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Cart ID
pub type CartId = TypedId<Cart>;

/// Line Item ID
pub type LineItemId = TypedId<LineItem>;

/// Marker for user identifiers. Users live outside this service.
#[derive(Debug)]
pub enum User {}

/// User ID
pub type UserId = TypedId<User>;

/// Marker for product identifiers. Products live outside this service.
#[derive(Debug)]
pub enum Product {}

/// Product ID
pub type ProductId = TypedId<Product>;

/// Cart Model
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    pub items: Vec<LineItem>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Line Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Line Item Model
///
/// `id` is set once the item has been matched against a persisted line item
/// for the same product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    pub id: Option<LineItemId>,
    pub product_id: ProductId,
    pub quantity: i64,
}

impl NewLineItem {
    #[must_use]
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            id: None,
            product_id,
            quantity,
        }
    }
}
