//! Empty Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Empty Cart Handler
///
/// Removes every line item. The cart itself remains.
#[endpoint(
    tags("carts"),
    summary = "Empty Cart",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Cart emptied"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::REQUEST_TIMEOUT, description = "Request Timeout"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.empty",
    skip(cart, depot),
    fields(cart_id = tracing::field::Empty, principal = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let cart = cart.into_id("cart")?;

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("principal", principal.username.as_str());

    state
        .app
        .carts
        .empty_cart(&state.operation_context(), cart)
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_id = %cart, "emptied cart");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use trolley_app::domain::carts::{CartsServiceError, MockCartsService, models::CartId};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("v1/carts/{cart}").delete(handler))
    }

    #[tokio::test]
    async fn test_empty_cart_returns_204() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_empty_cart()
            .once()
            .withf(|_, cart| *cart == CartId::new(7))
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete("http://example.com/v1/carts/7")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_invalid_id_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_empty_cart().never();

        let res = TestClient::delete("http://example.com/v1/carts/0")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_cart_cancelled_returns_408() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_empty_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Cancelled));

        let res = TestClient::delete("http://example.com/v1/carts/7")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::REQUEST_TIMEOUT));

        Ok(())
    }
}
