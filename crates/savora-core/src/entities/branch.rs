//! Branch entity - a physical location of a restaurant

use chrono::{DateTime, Utc};

use crate::search::SearchSchema;

/// Branch entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub id: i64,
    pub restaurant_id: i64,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Branch {
    /// Create a new Branch
    pub fn new(id: i64, restaurant_id: i64, name: String, address: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            restaurant_id,
            name,
            address,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allow-listed searchable fields for branches
    pub fn search_schema() -> SearchSchema<Self> {
        SearchSchema::new(|a: &Self, b: &Self| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("name", |a, b| a.name.cmp(&b.name))
            .filterable("id", |br, v| v.as_i64().is_some_and(|id| br.id == id))
            .filterable("name", |br, v| {
                v.as_text().is_some_and(|s| br.name.contains(s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{FilterValue, FilteringOption, SearchArgs, SortingOption};

    fn branches() -> Vec<Branch> {
        vec![
            Branch::new(3, 1, "Uptown".into(), "12 High St".into()),
            Branch::new(1, 1, "Downtown".into(), "5 Low Rd".into()),
            Branch::new(2, 1, "Midtown".into(), "9 Mid Ave".into()),
        ]
    }

    #[test]
    fn test_schema_sorts_by_name() {
        let args = SearchArgs {
            sorting_options: vec![SortingOption::asc("name")],
            ..SearchArgs::default()
        };
        let page = crate::search::search(&Branch::search_schema(), branches(), &args);
        let names: Vec<_> = page.items.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Downtown", "Midtown", "Uptown"]);
    }

    #[test]
    fn test_schema_filters_by_substring() {
        let args = SearchArgs {
            filtering_options: vec![FilteringOption::new("name", FilterValue::text("town"))],
            ..SearchArgs::default()
        };
        let page = crate::search::search(&Branch::search_schema(), branches(), &args);
        assert_eq!(page.total_count, 3);

        let args = SearchArgs {
            filtering_options: vec![FilteringOption::new("name", FilterValue::text("Down"))],
            ..SearchArgs::default()
        };
        let page = crate::search::search(&Branch::search_schema(), branches(), &args);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, 1);
    }
}
