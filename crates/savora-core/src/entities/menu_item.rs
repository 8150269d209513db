//! MenuItem entity - a priced item on a menu

use chrono::{DateTime, Utc};

use crate::search::SearchSchema;

/// MenuItem entity. Prices are stored in integer cents to avoid floating
/// point rounding in order totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: i64,
    pub menu_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MenuItem {
    /// Create a new MenuItem
    pub fn new(id: i64, menu_id: i64, name: String, price_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id,
            menu_id,
            name,
            description: None,
            price_cents,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allow-listed searchable fields for menu items
    pub fn search_schema() -> SearchSchema<Self> {
        SearchSchema::new(|a: &Self, b: &Self| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("name", |a, b| a.name.cmp(&b.name))
            .sortable("price", |a, b| a.price_cents.cmp(&b.price_cents))
            .filterable("id", |m, v| v.as_i64().is_some_and(|id| m.id == id))
            .filterable("name", |m, v| {
                v.as_text().is_some_and(|s| m.name.contains(s))
            })
    }
}
