pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup        create account (public)
/// /auth/signin        login (public)
/// /auth/me            current identity (requires auth)
///
/// /admin/users        list users (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/signin", post(handlers::auth::signin))
        .route("/auth/me", get(handlers::auth::me))
        .route("/admin/users", get(handlers::users::list_users))
}
