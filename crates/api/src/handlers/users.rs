//! Handlers for the admin `/admin/users` resource.

use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use commerce_db::models::user::UserResponse;
use commerce_db::repositories::{RoleRepo, UserRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/users
///
/// List all users with their resolved role names. Admin only.
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;

    // Resolve role names with a single roles read instead of one lookup
    // per user.
    let role_names: HashMap<i64, String> = RoleRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|r| (r.id, r.name))
        .collect();

    let response = users
        .into_iter()
        .map(|u| UserResponse {
            id: u.id,
            username: u.username,
            email: u.email,
            role: role_names
                .get(&u.role_id)
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            role_id: u.role_id,
            is_active: u.is_active,
            last_login_at: u.last_login_at,
            created_at: u.created_at,
        })
        .collect();

    Ok(Json(response))
}
