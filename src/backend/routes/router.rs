/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (signup, login, protected, user)
 * 2. Fallback handlers (JSON 404 for unknown paths, JSON 405 for a known
 *    path with the wrong method)
 * 3. Layers: request tracing, then permissive CORS
 */

use axum::{http::StatusCode, response::IntoResponse, Json, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::ErrorBody;

async fn not_found() -> impl IntoResponse {
    let status = StatusCode::NOT_FOUND;
    (status, Json(ErrorBody::new("Not Found", status.as_u16())))
}

async fn method_not_allowed() -> impl IntoResponse {
    let status = StatusCode::METHOD_NOT_ALLOWED;
    (status, Json(ErrorBody::new("Method Not Allowed", status.as_u16())))
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the user store, hasher and
///   token issuer
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}
