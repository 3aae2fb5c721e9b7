//! Request-level logging and request IDs.

mod request_ids;

use std::time::Instant;

use salvo::{
    Request, handler,
    http::StatusCode,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};

use super::settings;

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

/// Wrap each request in an `http.request` span and log how it finished.
#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();
    let request_id = request_ids::resolve(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    request_ids::echo(res, &request_id);

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path(),
        remote_addr = %req.remote_addr(),
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id);

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    completed(
        &span,
        res.status_code.unwrap_or(StatusCode::OK),
        started.elapsed().as_millis(),
    );
}

fn completed(span: &Span, status: StatusCode, duration_ms: u128) {
    let threshold_ms = u128::from(settings::slow_request_threshold_ms());
    let code = status.as_u16();

    span.record("status", code);
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        if status.is_server_error() {
            error!(status = code, duration_ms, "request.failed");
        } else if status.is_client_error() {
            warn!(status = code, duration_ms, "request.rejected");
        } else {
            info!(status = code, duration_ms, "request.completed");
        }

        if duration_ms > threshold_ms {
            warn!(duration_ms, threshold_ms, "request.slow");
        }
    });
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[salvo::handler]
    async fn echo_request_id(depot: &mut Depot, res: &mut Response) {
        let request_id = depot
            .get::<String>(REQUEST_ID_DEPOT_KEY)
            .map_or_else(|_| "missing".to_string(), Clone::clone);

        res.render(request_id);
    }

    #[salvo::handler]
    async fn fail(res: &mut Response) {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn make_service() -> Service {
        Service::new(
            Router::new()
                .hoop(request_logging)
                .push(Router::with_path("echo").get(echo_request_id))
                .push(Router::with_path("fail").get(fail)),
        )
    }

    fn request_id_header(res: &Response) -> Option<String> {
        res.headers()
            .get(request_ids::REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(ToOwned::to_owned)
    }

    #[tokio::test]
    async fn test_incoming_request_id_is_propagated() -> TestResult {
        let mut res = TestClient::get("http://example.com/echo")
            .add_header(request_ids::REQUEST_ID_HEADER, "req-123", true)
            .send(&make_service())
            .await;

        assert_eq!(request_id_header(&res).as_deref(), Some("req-123"));
        assert_eq!(res.take_string().await?, "req-123");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_request_id_is_generated() -> TestResult {
        let mut res = TestClient::get("http://example.com/echo")
            .send(&make_service())
            .await;

        let header = request_id_header(&res);
        let body = res.take_string().await?;

        assert_eq!(header, Some(body.clone()));
        assert!(uuid::Uuid::parse_str(&body).is_ok(), "expected uuid, got {body}");

        Ok(())
    }

    #[tokio::test]
    async fn test_error_responses_still_carry_request_id() {
        let res = TestClient::get("http://example.com/fail")
            .add_header(request_ids::REQUEST_ID_HEADER, "req-500", true)
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(request_id_header(&res).as_deref(), Some("req-500"));
    }
}
