//! Menu entity - a named collection of items offered by a branch

use chrono::{DateTime, Utc};

use crate::search::SearchSchema;

/// Menu entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub id: i64,
    pub branch_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Menu {
    /// Create a new Menu
    pub fn new(id: i64, branch_id: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            branch_id,
            name,
            description: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allow-listed searchable fields for menus
    pub fn search_schema() -> SearchSchema<Self> {
        SearchSchema::new(|a: &Self, b: &Self| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("name", |a, b| a.name.cmp(&b.name))
            .filterable("id", |m, v| v.as_i64().is_some_and(|id| m.id == id))
            .filterable("name", |m, v| {
                v.as_text().is_some_and(|s| m.name.contains(s))
            })
    }
}
