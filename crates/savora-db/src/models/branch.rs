//! Branch database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::Branch;

/// Database model for branches table
#[derive(Debug, Clone, FromRow)]
pub struct BranchModel {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BranchModel> for Branch {
    fn from(m: BranchModel) -> Self {
        Self {
            id: m.id,
            restaurant_id: m.restaurant_id,
            name: m.name,
            address: m.address,
            phone: m.phone,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
