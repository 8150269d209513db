//! Restaurant entity - the tenant root of the ordering domain

use chrono::{DateTime, Utc};

use crate::search::SearchSchema;

/// Restaurant entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Restaurant {
    /// Create a new Restaurant
    pub fn new(id: i64, owner_id: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            owner_id,
            name,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allow-listed searchable fields for restaurants
    pub fn search_schema() -> SearchSchema<Self> {
        SearchSchema::new(|a: &Self, b: &Self| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("name", |a, b| a.name.cmp(&b.name))
            .filterable("id", |r, v| v.as_i64().is_some_and(|id| r.id == id))
            .filterable("name", |r, v| {
                v.as_text().is_some_and(|s| r.name.contains(s))
            })
    }
}
