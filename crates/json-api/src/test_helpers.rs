//! Test helpers.

use std::{sync::Arc, time::Duration};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use trolley_app::{
    context::AppContext,
    domain::carts::{
        MockCartsService,
        models::{Cart, CartId, LineItem, LineItemId, ProductId, UserId},
    },
};

use crate::{
    auth::{MockAuthenticator, Principal},
    extensions::*,
    state::State,
};

pub(crate) const TEST_USERNAME: &str = "tester";

const TEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[salvo::handler]
pub(crate) async fn inject_principal(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal {
        username: TEST_USERNAME.to_string(),
    });
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthenticator {
    let mut auth = MockAuthenticator::new();

    auth.expect_authenticate().never();

    auth
}

fn strict_carts_mock() -> MockCartsService {
    let mut carts = MockCartsService::new();

    carts.expect_create_cart().never();
    carts.expect_show_cart().never();
    carts.expect_empty_cart().never();
    carts.expect_add_line_items().never();
    carts.expect_remove_line_item().never();

    carts
}

fn app_with(carts: MockCartsService) -> AppContext {
    AppContext {
        carts: Arc::new(carts),
    }
}

pub(crate) fn state_with_carts(carts: MockCartsService) -> Arc<State> {
    State::shared(
        app_with(carts),
        Arc::new(strict_auth_mock()),
        TEST_REQUEST_TIMEOUT,
    )
}

pub(crate) fn state_with_auth(auth: MockAuthenticator) -> Arc<State> {
    State::shared(
        app_with(strict_carts_mock()),
        Arc::new(auth),
        TEST_REQUEST_TIMEOUT,
    )
}

pub(crate) fn carts_service(carts: MockCartsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_carts(carts)))
            .hoop(inject_principal)
            .push(route),
    )
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

pub(crate) fn make_cart(id: i64, user: i64, items: Vec<LineItem>) -> Cart {
    Cart {
        id: CartId::new(id),
        user_id: UserId::new(user),
        items,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
