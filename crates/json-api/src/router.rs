//! App Router

use salvo::Router;

use crate::{auth, carts};

/// Authenticated cart routes under `/v1`.
pub fn app_router() -> Router {
    Router::with_path("v1").hoop(auth::middleware::handler).push(
        Router::with_path("carts").post(carts::create::handler).push(
            Router::with_path("{cart}")
                .get(carts::get::handler)
                .delete(carts::delete::handler)
                .push(
                    Router::with_path("items")
                        .put(carts::items::create::handler)
                        .push(Router::with_path("{item}").delete(carts::items::delete::handler)),
                ),
        ),
    )
}
