//! CuisineType entity - a cuisine category restaurants can be tagged with

use chrono::{DateTime, Utc};

use crate::search::SearchSchema;

/// CuisineType entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineType {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CuisineType {
    /// Create a new CuisineType
    pub fn new(id: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allow-listed searchable fields for cuisine types
    pub fn search_schema() -> SearchSchema<Self> {
        SearchSchema::new(|a: &Self, b: &Self| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("name", |a, b| a.name.cmp(&b.name))
            .filterable("id", |c, v| v.as_i64().is_some_and(|id| c.id == id))
            .filterable("name", |c, v| {
                v.as_text().is_some_and(|s| c.name.contains(s))
            })
    }
}
