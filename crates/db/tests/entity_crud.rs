//! Integration tests for the repository layer against a real database:
//! - User CRUD, unique and foreign-key violations
//! - Product CRUD
//! - Orders with composite-key line items and cascade delete

use sqlx::PgPool;

use commerce_db::models::order::CreateOrder;
use commerce_db::models::order_product::CreateOrderProduct;
use commerce_db::models::product::{CreateProduct, UpdateProduct};
use commerce_db::models::user::{CreateUser, UpdateUser};
use commerce_db::repositories::{OrderProductRepo, OrderRepo, ProductRepo, RoleRepo, UserRepo};
use commerce_db::seed::seed_roles;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(username: &str, role_id: i64) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "$argon2id$fake-hash-for-tests".to_string(),
        role_id,
    }
}

fn new_product(name: &str, price_cents: i64) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        price_cents,
        picture_url: None,
    }
}

/// Seed roles and return the id of the `user` role.
async fn default_role_id(pool: &PgPool) -> i64 {
    seed_roles(pool).await.unwrap();
    RoleRepo::find_by_name(pool, "user")
        .await
        .unwrap()
        .expect("user role must exist after seeding")
        .id
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn user_crud_roundtrip(pool: PgPool) {
    let role_id = default_role_id(&pool).await;

    let created = UserRepo::create(&pool, &new_user("alice", role_id)).await.unwrap();
    assert_eq!(created.username, "alice");
    assert_eq!(created.role_id, role_id);
    assert!(created.is_active);
    assert_eq!(created.failed_login_count, 0);

    let found = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.email, "alice@example.com");

    let by_name = UserRepo::find_by_username(&pool, "alice").await.unwrap();
    assert!(by_name.is_some());

    let by_email = UserRepo::find_by_email(&pool, "alice@example.com").await.unwrap();
    assert!(by_email.is_some());

    // Partial update: only the email changes.
    let updated = UserRepo::update(
        &pool,
        created.id,
        &UpdateUser {
            username: None,
            email: Some("alice@corp.example.com".to_string()),
            role_id: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.username, "alice");
    assert_eq!(updated.email, "alice@corp.example.com");

    // Deactivation is a soft delete.
    assert!(UserRepo::deactivate(&pool, created.id).await.unwrap());
    let deactivated = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert!(!deactivated.is_active);

    // A second deactivation is a no-op.
    assert!(!UserRepo::deactivate(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_username_is_rejected(pool: PgPool) {
    let role_id = default_role_id(&pool).await;

    UserRepo::create(&pool, &new_user("bob", role_id)).await.unwrap();

    let mut dup = new_user("bob", role_id);
    dup.email = "other@example.com".to_string();
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn user_with_unknown_role_is_rejected(pool: PgPool) {
    // No seeding: the roles table is empty, so any role_id violates the FK.
    let err = UserRepo::create(&pool, &new_user("carol", 999)).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            // PostgreSQL foreign-key violation.
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn login_counters_roundtrip(pool: PgPool) {
    let role_id = default_role_id(&pool).await;
    let user = UserRepo::create(&pool, &new_user("dave", role_id)).await.unwrap();

    UserRepo::increment_failed_login(&pool, user.id).await.unwrap();
    UserRepo::increment_failed_login(&pool, user.id).await.unwrap();

    let lock_until = chrono::Utc::now() + chrono::Duration::minutes(15);
    UserRepo::lock_account(&pool, user.id, lock_until).await.unwrap();

    let locked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(locked.failed_login_count, 2);
    assert!(locked.locked_until.is_some());

    UserRepo::record_successful_login(&pool, user.id).await.unwrap();
    let unlocked = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(unlocked.failed_login_count, 0);
    assert!(unlocked.locked_until.is_none());
    assert!(unlocked.last_login_at.is_some());
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn product_crud_roundtrip(pool: PgPool) {
    let created = ProductRepo::create(&pool, &new_product("Keyboard", 4999)).await.unwrap();
    assert_eq!(created.price_cents, 4999);
    assert!(created.picture_url.is_none());

    let updated = ProductRepo::update(
        &pool,
        created.id,
        &UpdateProduct {
            name: None,
            price_cents: Some(3999),
            picture_url: Some("https://cdn.example.com/kbd.png".to_string()),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.name, "Keyboard");
    assert_eq!(updated.price_cents, 3999);

    let all = ProductRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);

    assert!(ProductRepo::delete(&pool, created.id).await.unwrap());
    assert!(ProductRepo::find_by_id(&pool, created.id).await.unwrap().is_none());

    // Deleting a missing row reports false rather than erroring.
    assert!(!ProductRepo::delete(&pool, created.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Orders and line items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn order_with_line_items_roundtrip(pool: PgPool) {
    let keyboard = ProductRepo::create(&pool, &new_product("Keyboard", 4999)).await.unwrap();
    let mouse = ProductRepo::create(&pool, &new_product("Mouse", 1999)).await.unwrap();

    let order = OrderRepo::create(&pool, &CreateOrder::default()).await.unwrap();
    assert_eq!(order.status, "NEW");

    for (product_id, quantity) in [(keyboard.id, 1), (mouse.id, 2)] {
        OrderProductRepo::create(
            &pool,
            &CreateOrderProduct {
                order_id: order.id,
                product_id,
                quantity,
            },
        )
        .await
        .unwrap();
    }

    let items = OrderProductRepo::list_for_order(&pool, order.id).await.unwrap();
    assert_eq!(items.len(), 2);

    let line = OrderProductRepo::find(&pool, order.id, mouse.id).await.unwrap().unwrap();
    assert_eq!(line.quantity, 2);

    let bumped = OrderProductRepo::update_quantity(&pool, order.id, mouse.id, 3)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bumped.quantity, 3);

    let paid = OrderRepo::update_status(&pool, order.id, "PAID").await.unwrap().unwrap();
    assert_eq!(paid.status, "PAID");

    // Deleting the order cascades to its line items.
    assert!(OrderRepo::delete(&pool, order.id).await.unwrap());
    let orphans = OrderProductRepo::list_for_order(&pool, order.id).await.unwrap();
    assert!(orphans.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_line_item_is_rejected(pool: PgPool) {
    let product = ProductRepo::create(&pool, &new_product("Keyboard", 4999)).await.unwrap();
    let order = OrderRepo::create(&pool, &CreateOrder::default()).await.unwrap();

    let line = CreateOrderProduct {
        order_id: order.id,
        product_id: product.id,
        quantity: 1,
    };
    OrderProductRepo::create(&pool, &line).await.unwrap();

    // Same (order, product) pair again: composite primary-key violation.
    let err = OrderProductRepo::create(&pool, &line).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn line_item_requires_existing_product(pool: PgPool) {
    let order = OrderRepo::create(&pool, &CreateOrder::default()).await.unwrap();

    let err = OrderProductRepo::create(
        &pool,
        &CreateOrderProduct {
            order_id: order.id,
            product_id: 999,
            quantity: 1,
        },
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected a database error, got: {other:?}"),
    }
}
