//! Create Cart Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use trolley_app::domain::carts::models::UserId;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, LineItemRequest},
    },
    extensions::*,
    state::State,
};

/// Create Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateCartRequest {
    /// Owner of the new cart
    pub user_id: Option<i64>,

    /// Items to place in the new cart
    #[serde(default)]
    pub line_items: Vec<LineItemRequest>,
}

/// Create Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Create Cart",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Cart created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::REQUEST_TIMEOUT, description = "Request Timeout"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.create",
    skip(json, depot, res),
    fields(
        user_id = tracing::field::Empty,
        cart_id = tracing::field::Empty,
        principal = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateCartRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let request = json.into_inner();

    let user = request
        .user_id
        .map(UserId::new)
        .filter(|user| user.is_valid())
        .ok_or_else(|| StatusError::bad_request().brief("user_id must be a positive integer"))?;

    let span = tracing::Span::current();

    span.record("user_id", tracing::field::display(user));
    span.record("principal", principal.username.as_str());

    let cart = state
        .app
        .carts
        .create_cart(
            &state.operation_context(),
            user,
            request.line_items.into_iter().map(Into::into).collect(),
        )
        .await
        .map_err(into_status_error)?;

    span.record("cart_id", tracing::field::display(cart.id));

    tracing::info!(cart_id = %cart.id, "created cart");

    res.add_header(LOCATION, format!("/v1/carts/{}", cart.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(cart.into()))
}
