/**
 * API Route Handlers
 *
 * This module defines the authentication endpoints.
 *
 * # Routes
 *
 * - `POST /signup` - User registration
 * - `POST /login` - User login
 * - `GET /protected` - Current user (requires authentication)
 * - `GET /user` - Hello endpoint
 */

use axum::{middleware, routing::{get, post}, Router};

use crate::backend::auth::{login, protected, signup, user_hello};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// `/protected` sits behind `auth_middleware`, which rejects requests
/// without a valid bearer token before the handler runs. The other
/// routes are public.
pub fn configure_api_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let protected_routes = Router::new()
        .route("/protected", get(protected))
        .route_layer(middleware::from_fn_with_state(
            state.tokens.clone(),
            auth_middleware,
        ));

    router
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/user", get(user_hello))
        .merge(protected_routes)
}
