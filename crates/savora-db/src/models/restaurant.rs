//! Restaurant database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::Restaurant;

/// Database model for restaurants table
#[derive(Debug, Clone, FromRow)]
pub struct RestaurantModel {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RestaurantModel> for Restaurant {
    fn from(m: RestaurantModel) -> Self {
        Self {
            id: m.id,
            owner_id: m.owner_id,
            name: m.name,
            description: m.description,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
