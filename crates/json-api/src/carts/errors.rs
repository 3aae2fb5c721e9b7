//! Errors

use std::error::Error;

use salvo::http::StatusError;
use tracing::{error, warn};

use trolley_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::Cancelled | CartsServiceError::DeadlineExceeded => {
            warn!("cart operation did not finish: {error}");

            StatusError::request_timeout()
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::InvalidArgument(reason) => {
            StatusError::bad_request().brief(reason.to_string())
        }
        CartsServiceError::Storage { .. } => {
            error!("cart operation failed: {}", error_chain(&error));

            StatusError::internal_server_error()
        }
    }
}

/// Render an error and all of its sources, outermost first.
fn error_chain(error: &dyn Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }

    rendered
}
