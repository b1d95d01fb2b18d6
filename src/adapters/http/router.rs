//! Top-level router: resource routers, auth middleware and tower layers.

use axum::{middleware, routing::get, Router};
use http::{header, HeaderValue, Method};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use super::auth::auth_routes;
use super::booking::booking_routes;
use super::cafe::cafe_routes;
use super::health::health;
use super::middleware::{auth_middleware, timeout_middleware};
use super::state::AppState;
use crate::config::ServerConfig;

/// Builds the complete application.
///
/// # Routes
///
/// - `GET /health`
/// - `/api/auth/*`, `/api/cafes/*`, `/api/bookings/*`
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let verifier = state.verifier.clone();

    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", auth_routes())
        .nest("/api/cafes", cafe_routes())
        .nest("/api/bookings", booking_routes())
        .with_state(state)
        .layer(middleware::from_fn_with_state(verifier, auth_middleware))
        .layer(middleware::from_fn_with_state(
            server.request_timeout(),
            timeout_middleware,
        ))
        .layer(cors_layer(server))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Permissive when no origins are configured, otherwise the listed origins only.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

