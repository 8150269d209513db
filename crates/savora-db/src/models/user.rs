//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::User;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Convert into the domain entity, attaching the role names loaded
    /// from the `user_roles` join
    pub fn into_user(self, roles: Vec<String>) -> User {
        User {
            id: self.id,
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            roles,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
