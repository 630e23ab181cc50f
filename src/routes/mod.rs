//! Route definitions for the Excelia dashboard API.

pub mod dashboard;
pub mod health;

use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full application router.
///
/// Dashboard routes are served both at the root and under `/api/v1`.
pub fn router(state: AppState) -> Router {
    let cors = match HeaderValue::from_str(&state.config.frontend_url) {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            tracing::warn!(
                frontend_url = %state.config.frontend_url,
                "Invalid FRONTEND_URL, allowing any origin"
            );
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods([Method::GET])
    .allow_headers(Any);

    let dashboard_routes = Router::new().route("/dashboard/stats", get(dashboard::stats));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .merge(dashboard_routes.clone())
        .nest("/api/v1", dashboard_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
