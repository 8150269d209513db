//! Role entity - a named role assignable to users

use chrono::{DateTime, Utc};

/// Role entity. Permissions are not stored on the row; they come from the
/// [`crate::value_objects::RolePermissionTable`] loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Create a new Role
    pub fn new(id: i64, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }
}
