//! Add Line Items Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    carts::{
        errors::into_status_error,
        models::{LineItemRequest, LineItemResponse},
    },
    extensions::*,
    state::State,
};

/// Add Line Items Handler
///
/// Merges the items into the cart. Quantities for products already in the
/// cart are added to the existing line item.
#[endpoint(
    tags("carts"),
    summary = "Add Line Items",
    security(("basic_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Line items added"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::REQUEST_TIMEOUT, description = "Request Timeout"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.items.add",
    skip(cart, json, depot, res),
    fields(
        cart_id = tracing::field::Empty,
        items = tracing::field::Empty,
        principal = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    cart: PathParam<i64>,
    json: JsonBody<Vec<LineItemRequest>>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Vec<LineItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let principal = depot.principal_or_401()?;
    let cart = cart.into_id("cart")?;
    let items = json.into_inner();

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(cart));
    span.record("items", items.len());
    span.record("principal", principal.username.as_str());

    let items = state
        .app
        .carts
        .add_line_items(
            &state.operation_context(),
            cart,
            items.into_iter().map(Into::into).collect(),
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(items.into_iter().map(LineItemResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use trolley_app::domain::carts::{
        CartsServiceError, MockCartsService,
        errors::Phase,
        models::{CartId, NewLineItem, ProductId},
        store::StoreError,
    };

    use crate::test_helpers::{carts_service, make_item};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("v1/carts/{cart}/items").put(handler),
        )
    }

    #[tokio::test]
    async fn test_add_items_returns_merged_items() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_line_items()
            .once()
            .withf(|_, cart, items| {
                *cart == CartId::new(7)
                    && *items
                        == vec![
                            NewLineItem::new(ProductId::new(1), 1),
                            NewLineItem::new(ProductId::new(2), 2),
                        ]
            })
            .return_once(|_, _, _| Ok(vec![make_item(1, 7, 1, 2), make_item(2, 7, 2, 2)]));

        let mut res = TestClient::put("http://example.com/v1/carts/7/items")
            .json(&json!([
                { "product_id": 1, "quantity": 1 },
                { "product_id": 2, "quantity": 2 },
            ]))
            .send(&make_service(carts))
            .await;

        let body: Vec<LineItemResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(
            body.iter()
                .map(|item| (item.id, item.product_id, item.quantity))
                .collect::<Vec<_>>(),
            vec![(1, 1, 2), (2, 2, 2)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_add_items_to_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_add_line_items()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotFound));

        let res = TestClient::put("http://example.com/v1/carts/7/items")
            .json(&json!([{ "product_id": 1, "quantity": 1 }]))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_items_malformed_body_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_line_items().never();

        let res = TestClient::put("http://example.com/v1/carts/7/items")
            .json(&json!({ "product_id": 1 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_items_storage_failure_returns_500() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_add_line_items().once().return_once(|_, _, _| {
            Err(CartsServiceError::storage(Phase::Commit, StoreError::InvalidData))
        });

        let res = TestClient::put("http://example.com/v1/carts/7/items")
            .json(&json!([{ "product_id": 1, "quantity": 1 }]))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
