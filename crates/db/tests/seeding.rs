//! Integration tests for the startup role seeder.
//!
//! Covers the fresh-store path and the known non-idempotence: re-running
//! the seeder against a populated store hits the `uq_roles_name` constraint
//! instead of silently succeeding.

use sqlx::PgPool;

use commerce_db::models::role::CreateRole;
use commerce_db::repositories::RoleRepo;
use commerce_db::seed::seed_roles;

// ---------------------------------------------------------------------------
// Fresh store: one run inserts exactly the three canonical roles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn seeding_fresh_store_creates_three_roles(pool: PgPool) {
    seed_roles(&pool).await.expect("seeding a fresh store must succeed");

    let roles = RoleRepo::list(&pool).await.unwrap();
    assert_eq!(roles.len(), 3);

    // Read-all order is id ascending, which matches insertion order.
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["user", "moderator", "admin"]);

    // Each role got a distinct store-assigned identifier.
    let mut ids: Vec<i64> = roles.iter().map(|r| r.id).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3, "role ids must be distinct");
}

#[sqlx::test(migrations = "./migrations")]
async fn seeded_roles_are_resolvable_by_name(pool: PgPool) {
    seed_roles(&pool).await.unwrap();

    for name in ["user", "moderator", "admin"] {
        let role = RoleRepo::find_by_name(&pool, name)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("role {name} should exist after seeding"));
        assert_eq!(role.name, name);
        assert!(role.description.is_some());
    }

    // Names outside the closed set resolve to nothing.
    let missing = RoleRepo::find_by_name(&pool, "superuser").await.unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Non-idempotence: the documented defect
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn seeding_twice_fails_with_unique_violation(pool: PgPool) {
    seed_roles(&pool).await.unwrap();

    let err = seed_roles(&pool)
        .await
        .expect_err("second run must fail on the duplicate insert");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_roles_name"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }

    // The failed run inserted nothing new.
    let roles = RoleRepo::list(&pool).await.unwrap();
    assert_eq!(roles.len(), 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn seeding_stops_at_first_duplicate(pool: PgPool) {
    // Pre-populate only the first name in the seed list.
    RoleRepo::create(
        &pool,
        &CreateRole {
            name: "user".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let err = seed_roles(&pool).await.expect_err("seeding must fail");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }

    // The run is not atomic, but because "user" is first in the seed list
    // the failure happens before "moderator" or "admin" are attempted.
    let roles = RoleRepo::list(&pool).await.unwrap();
    let names: Vec<&str> = roles.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["user"]);
}
