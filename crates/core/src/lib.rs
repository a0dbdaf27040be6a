//! Domain types shared across the workspace: ID/timestamp aliases, the
//! domain error enum, and the closed role-kind enumeration.

pub mod error;
pub mod roles;
pub mod types;
