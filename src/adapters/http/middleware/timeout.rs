//! Request deadline.
//!
//! A request that outlives the configured deadline is dropped and answered
//! with a 503 in the standard error envelope, the same answer a failed store
//! access gets.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::adapters::http::error::ApiError;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Runs the rest of the stack under `deadline`.
pub async fn timeout_middleware(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(%method, %path, ?deadline, "Request timed out");
            ApiError(DomainError::new(
                ErrorCode::InternalError,
                "Service temporarily unavailable",
            ))
            .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    fn app(deadline: Duration, work: Duration) -> Router {
        Router::new()
            .route(
                "/",
                get(move || async move {
                    tokio::time::sleep(work).await;
                    "done"
                }),
            )
            .layer(axum::middleware::from_fn_with_state(deadline, timeout_middleware))
    }

    async fn call(router: Router) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn fast_request_passes_through() {
        let (status, _) = call(app(Duration::from_secs(5), Duration::ZERO)).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn slow_request_gets_503_envelope() {
        let (status, body) =
            call(app(Duration::from_millis(20), Duration::from_secs(5))).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Service temporarily unavailable");
    }
}
