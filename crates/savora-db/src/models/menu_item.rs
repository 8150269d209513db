//! Menu item database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::MenuItem;

/// Database model for menu_items table
#[derive(Debug, Clone, FromRow)]
pub struct MenuItemModel {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuItemModel> for MenuItem {
    fn from(m: MenuItemModel) -> Self {
        Self {
            id: m.id,
            menu_id: m.menu_id,
            name: m.name,
            description: m.description,
            price_cents: m.price_cents,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
