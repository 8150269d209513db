//! Cuisine type database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::CuisineType;

/// Database model for cuisine_types table
#[derive(Debug, Clone, FromRow)]
pub struct CuisineTypeModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CuisineTypeModel> for CuisineType {
    fn from(m: CuisineTypeModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
