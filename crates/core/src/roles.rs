//! The closed set of role kinds known to the system.
//!
//! Role rows are created at startup by the db crate's seeder; the enum here
//! is the single source of truth for their names and seeding order.

use serde::{Deserialize, Serialize};

/// A role kind. The set is closed: every row in the `roles` table carries
/// one of these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleKind {
    /// Ordinary authenticated user.
    User,
    /// Can manage content created by users.
    Moderator,
    /// Full administrative access.
    Admin,
}

impl RoleKind {
    /// All role kinds in seeding order.
    pub const ALL: [RoleKind; 3] = [RoleKind::User, RoleKind::Moderator, RoleKind::Admin];

    /// The stable name stored in the `roles.name` column.
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::User => "user",
            RoleKind::Moderator => "moderator",
            RoleKind::Admin => "admin",
        }
    }

    /// Short human-readable description, stored in `roles.description`.
    pub fn description(self) -> &'static str {
        match self {
            RoleKind::User => "Ordinary user",
            RoleKind::Moderator => "Content moderator",
            RoleKind::Admin => "Administrator",
        }
    }

    /// Parse a stored role name back into a kind. Returns `None` for names
    /// outside the closed set.
    pub fn parse(name: &str) -> Option<RoleKind> {
        match name {
            "user" => Some(RoleKind::User),
            "moderator" => Some(RoleKind::Moderator),
            "admin" => Some(RoleKind::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
