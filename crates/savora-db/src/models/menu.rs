//! Menu database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use savora_core::entities::Menu;

/// Database model for menus table
#[derive(Debug, Clone, FromRow)]
pub struct MenuModel {
    pub id: i64,
    pub branch_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MenuModel> for Menu {
    fn from(m: MenuModel) -> Self {
        Self {
            id: m.id,
            branch_id: m.branch_id,
            name: m.name,
            description: m.description,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
