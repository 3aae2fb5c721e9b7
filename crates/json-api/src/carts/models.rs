//! Cart request and response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use trolley_app::domain::carts::models::{Cart, LineItem, NewLineItem, ProductId};

/// Line Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemRequest {
    /// Product to add
    pub product_id: i64,

    /// Quantity to add; must be positive
    pub quantity: i64,
}

impl From<LineItemRequest> for NewLineItem {
    fn from(request: LineItemRequest) -> Self {
        NewLineItem::new(ProductId::new(request.product_id), request.quantity)
    }
}

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The identifier of the cart
    pub id: i64,

    /// The owner of the cart
    pub user_id: i64,

    /// The items in the cart
    pub line_items: Vec<LineItemResponse>,

    /// The date and time the cart was created
    pub created_at: String,

    /// The date and time the cart was last updated
    pub updated_at: String,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id.into_i64(),
            user_id: cart.user_id.into_i64(),
            line_items: cart.items.into_iter().map(LineItemResponse::from).collect(),
            created_at: cart.created_at.to_string(),
            updated_at: cart.updated_at.to_string(),
        }
    }
}

/// Line Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    /// The identifier of the line item
    pub id: i64,

    /// The cart holding the line item
    pub cart_id: i64,

    /// The product in the line item
    pub product_id: i64,

    /// How many of the product are in the cart
    pub quantity: i64,

    /// The date and time the line item was created
    pub created_at: String,

    /// The date and time the line item was last updated
    pub updated_at: String,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.id.into_i64(),
            cart_id: item.cart_id.into_i64(),
            product_id: item.product_id.into_i64(),
            quantity: item.quantity,
            created_at: item.created_at.to_string(),
            updated_at: item.updated_at.to_string(),
        }
    }
}
