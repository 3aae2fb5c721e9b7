//! Remove Line Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use trolley_app::domain::carts::CartsServiceError;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Remove Line Item Handler
///
/// Removing an item that is not in the cart, or from a cart that does not
/// exist, succeeds.
#[endpoint(
    tags("carts"),
    summary = "Remove Line Item",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Line item removed"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::REQUEST_TIMEOUT, description = "Request Timeout"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.remove",
    skip(cart, item, depot),
    fields(
        cart_id = tracing::field::Empty,
        item_id = tracing::field::Empty,
        principal = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    item: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let cart = cart.into_id("cart")?;
    let item = item.into_id("item")?;

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("item_id", tracing::field::display(item));
    span.record("principal", principal.username.as_str());

    match state
        .app
        .carts
        .remove_line_item(&state.operation_context(), cart, item)
        .await
    {
        Ok(()) | Err(CartsServiceError::NotFound) => {}
        Err(error) => return Err(into_status_error(error)),
    }

    Ok(StatusCode::NO_CONTENT)
}
