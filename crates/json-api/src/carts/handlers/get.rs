//! Show Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Show Cart Handler
///
/// Returns a cart with its line items.
#[endpoint(
    tags("carts"),
    summary = "Show Cart",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Cart found"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::REQUEST_TIMEOUT, description = "Request Timeout"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.show",
    skip(cart, depot),
    fields(cart_id = tracing::field::Empty, principal = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let cart = cart.into_id("cart")?;

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("principal", principal.username.as_str());

    let cart = state
        .app
        .carts
        .show_cart(&state.operation_context(), cart)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley_app::domain::carts::{CartsServiceError, MockCartsService, models::CartId};

    use salvo::affix_state::inject;

    use crate::test_helpers::{carts_service, make_cart, make_item, state_with_carts};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("v1/carts/{cart}").get(handler))
    }

    #[tokio::test]
    async fn test_show_returns_200() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_show_cart()
            .once()
            .withf(|_, cart| *cart == CartId::new(7))
            .return_once(|_, _| {
                Ok(make_cart(
                    7,
                    10,
                    vec![make_item(1, 7, 1, 1), make_item(2, 7, 2, 2)],
                ))
            });

        let mut res = TestClient::get("http://example.com/v1/carts/7")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, 7);
        assert_eq!(
            body.line_items
                .iter()
                .map(|item| (item.product_id, item.quantity))
                .collect::<Vec<_>>(),
            vec![(1, 1), (2, 2)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_show_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_show_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::get("http://example.com/v1/carts/7")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_show_timed_out_returns_408() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_show_cart()
            .once()
            .return_once(|_, _| Err(CartsServiceError::DeadlineExceeded));

        let res = TestClient::get("http://example.com/v1/carts/7")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::REQUEST_TIMEOUT));

        Ok(())
    }

    #[tokio::test]
    async fn test_show_without_principal_returns_401() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_show_cart().never();

        let service = Service::new(
            Router::new()
                .hoop(inject(state_with_carts(carts)))
                .push(Router::with_path("v1/carts/{cart}").get(handler)),
        );

        let res = TestClient::get("http://example.com/v1/carts/7")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_show_invalid_id_returns_400() -> TestResult {
        for path in ["abc", "0", "-3"] {
            let mut carts = MockCartsService::new();

            carts.expect_show_cart().never();

            let res = TestClient::get(format!("http://example.com/v1/carts/{path}"))
                .send(&make_service(carts))
                .await;

            assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "{path}");
        }

        Ok(())
    }
}
