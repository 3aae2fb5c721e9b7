//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tracing::warn;

use crate::{
    auth::{AuthError, Credentials},
    extensions::*,
    state::State,
};

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(credentials) = extract_basic_credentials(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));
        ctrl.skip_rest();

        return;
    };

    let state = match depot.obtain::<Arc<State>>() {
        Ok(state) => state,
        Err(_error) => {
            res.render(StatusError::internal_server_error());
            ctrl.skip_rest();

            return;
        }
    };

    let principal = match state.auth.authenticate(&credentials).await {
        Ok(principal) => principal,
        Err(AuthError::InvalidCredentials) => {
            warn!(username = %credentials.username, "rejected credentials");

            res.render(StatusError::forbidden().brief("Invalid credentials"));
            ctrl.skip_rest();

            return;
        }
    };

    depot.insert_principal(principal);

    ctrl.call_next(req, depot, res).await;
}

fn extract_basic_credentials(req: &Request) -> Option<Credentials> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;

    Credentials::from_basic_header(value)
}
