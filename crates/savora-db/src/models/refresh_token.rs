//! Refresh token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::traits::RefreshToken;

/// Database model for refresh_tokens table. Rows are never deleted; a
/// token that is used, invalidated or expired stays as an audit trail.
#[derive(Debug, Clone, FromRow)]
pub struct RefreshTokenModel {
    pub id: String,
    pub jwt_id: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub used: bool,
    pub invalidated: bool,
}

impl From<RefreshTokenModel> for RefreshToken {
    fn from(m: RefreshTokenModel) -> Self {
        Self {
            id: m.id,
            jwt_id: m.jwt_id,
            user_id: m.user_id,
            created_at: m.created_at,
            expires_at: m.expires_at,
            used: m.used,
            invalidated: m.invalidated,
        }
    }
}
