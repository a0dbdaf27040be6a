//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every query is an explicit
//! SQL statement; there is no query derivation.

pub mod order_product_repo;
pub mod order_repo;
pub mod product_repo;
pub mod role_repo;
pub mod user_repo;

pub use order_product_repo::OrderProductRepo;
pub use order_repo::OrderRepo;
pub use product_repo::ProductRepo;
pub use role_repo::RoleRepo;
pub use user_repo::UserRepo;
