//! Search request building blocks: sorting, filtering, and paging options.

use serde::{Deserialize, Serialize};

/// Direction of one ordering clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One ordering key. Multiple options compose a multi-key ordering applied
/// in the order supplied: the first is the primary key, each subsequent one
/// refines ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingOption {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortingOption {
    /// Ascending sort on `field`
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on `field`
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// A filter value as supplied by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Bool(bool),
    Text(String),
}

impl FilterValue {
    /// Build a text value
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Build an integer value
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Integer view, `None` when the value is not an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Text view, `None` when the value is not text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean view, `None` when the value is not a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// One predicate. All recognized predicates in a request are conjoined
/// (logical AND). `operator` is a reserved extension point: it is accepted
/// on the wire but not interpreted; new comparison kinds are added as
/// schema cases, not operator values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteringOption {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    pub value: FilterValue,
}

impl FilteringOption {
    /// Build a filter on `field` matching `value`
    pub fn new(field: impl Into<String>, value: FilterValue) -> Self {
        Self {
            field: field.into(),
            operator: None,
            value,
        }
    }
}

/// How paging bounds are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagingStrategy {
    /// Apply `page_index`/`page_size` bounds
    #[default]
    Paged,
    /// Return the full filtered, ordered set; page bounds are ignored
    NoPaging,
}

/// Paging window. `page_index` is 0-based. `page_size >= 1` is a caller
/// precondition, enforced at the API boundary rather than validated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingArgs {
    pub page_index: usize,
    pub page_size: usize,
    #[serde(default)]
    pub strategy: PagingStrategy,
}

impl Default for PagingArgs {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 20,
            strategy: PagingStrategy::Paged,
        }
    }
}

/// A complete search request as consumed by [`super::search`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchArgs {
    #[serde(default)]
    pub sorting_options: Vec<SortingOption>,
    #[serde(default)]
    pub filtering_options: Vec<FilteringOption>,
    #[serde(default)]
    pub paging: PagingArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_value_views() {
        assert_eq!(FilterValue::int(7).as_i64(), Some(7));
        assert_eq!(FilterValue::int(7).as_text(), None);
        assert_eq!(FilterValue::text("x").as_text(), Some("x"));
        assert_eq!(FilterValue::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn test_search_args_deserialization() {
        let json = r#"{
            "sorting_options": [{"field": "name", "direction": "DESC"}],
            "filtering_options": [{"field": "name", "value": "pizza"}],
            "paging": {"page_index": 2, "page_size": 10}
        }"#;
        let args: SearchArgs = serde_json::from_str(json).unwrap();
        assert_eq!(args.sorting_options[0].direction, SortDirection::Desc);
        assert_eq!(
            args.filtering_options[0].value,
            FilterValue::text("pizza")
        );
        assert!(args.filtering_options[0].operator.is_none());
        assert_eq!(args.paging.page_index, 2);
        assert_eq!(args.paging.strategy, PagingStrategy::Paged);
    }

    #[test]
    fn test_search_args_defaults() {
        let args: SearchArgs = serde_json::from_str("{}").unwrap();
        assert!(args.sorting_options.is_empty());
        assert!(args.filtering_options.is_empty());
        assert_eq!(args.paging.page_size, 20);
    }

    #[test]
    fn test_untagged_filter_value() {
        let opt: FilteringOption =
            serde_json::from_str(r#"{"field": "id", "value": 42}"#).unwrap();
        assert_eq!(opt.value, FilterValue::Int(42));
    }
}
