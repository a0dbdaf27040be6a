//! Startup role seeding.
//!
//! Runs once at process launch, after migrations and before the HTTP
//! listener binds, with exclusive access to the store assumed.

use commerce_core::roles::RoleKind;
use sqlx::PgPool;

use crate::models::role::CreateRole;
use crate::repositories::RoleRepo;

/// Insert the canonical roles and log the resulting store contents.
///
/// Inserts one row per kind in [`RoleKind::ALL`] order, then re-reads the
/// full table and logs every row with its assigned id.
///
/// Errors are not caught here; a failed insert propagates to the caller and
/// aborts startup. The routine is NOT idempotent: `roles.name` is unique,
/// so running it against an already-seeded store fails on the first
/// duplicate insert, and rows inserted earlier in the same run stay behind.
pub async fn seed_roles(pool: &PgPool) -> Result<(), sqlx::Error> {
    for kind in RoleKind::ALL {
        let input = CreateRole {
            name: kind.as_str().to_string(),
            description: Some(kind.description().to_string()),
        };
        RoleRepo::create(pool, &input).await?;
    }

    for role in RoleRepo::list(pool).await? {
        tracing::info!(id = role.id, name = %role.name, "Seeded role");
    }

    Ok(())
}
