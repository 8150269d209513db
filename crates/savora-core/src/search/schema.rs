//! Per-entity field allow-lists and the search algorithm.

use std::cmp::Ordering;

use super::options::{FilterValue, FilteringOption, PagingStrategy, SearchArgs, SortDirection};
use super::paged_list::PagedList;

type SortFn<T> = fn(&T, &T) -> Ordering;
type FilterFn<T> = fn(&T, &FilterValue) -> bool;

/// The allow-list for one entity type: which field names may be sorted or
/// filtered on, and the strongly typed comparator/predicate each maps to.
///
/// Built once per entity type (see the `search_schema` constructors on the
/// entities). The identifier comparator passed to [`SearchSchema::new`] is
/// the fallback ordering, so paging stays deterministic even when a request
/// supplies no usable sort key.
pub struct SearchSchema<T> {
    id_sort: SortFn<T>,
    sorts: Vec<(&'static str, SortFn<T>)>,
    filters: Vec<(&'static str, FilterFn<T>)>,
}

impl<T> SearchSchema<T> {
    /// Create a schema whose default ordering is `id_sort` ascending
    pub fn new(id_sort: SortFn<T>) -> Self {
        Self {
            id_sort,
            sorts: Vec::new(),
            filters: Vec::new(),
        }
    }

    /// Register a sortable field
    #[must_use]
    pub fn sortable(mut self, field: &'static str, sort: SortFn<T>) -> Self {
        self.sorts.push((field, sort));
        self
    }

    /// Register a filterable field
    #[must_use]
    pub fn filterable(mut self, field: &'static str, filter: FilterFn<T>) -> Self {
        self.filters.push((field, filter));
        self
    }

    fn sort_for(&self, field: &str) -> Option<SortFn<T>> {
        self.sorts
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, sort)| *sort)
    }

    fn filter_for(&self, field: &str) -> Option<FilterFn<T>> {
        self.filters
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, filter)| *filter)
    }

    /// Whether `item` passes every recognized filter. Unknown fields are
    /// skipped, so a list of only unrecognized fields matches everything.
    fn matches(&self, item: &T, filters: &[FilteringOption]) -> bool {
        filters.iter().all(|opt| match self.filter_for(&opt.field) {
            Some(filter) => filter(item, &opt.value),
            None => true,
        })
    }

    /// Resolve the ordering clauses for a request: recognized sort fields in
    /// request order, or the identifier fallback when none survive.
    fn ordering(&self, args: &SearchArgs) -> Vec<(SortFn<T>, SortDirection)> {
        let clauses: Vec<_> = args
            .sorting_options
            .iter()
            .filter_map(|opt| self.sort_for(&opt.field).map(|sort| (sort, opt.direction)))
            .collect();

        if clauses.is_empty() {
            vec![(self.id_sort, SortDirection::Asc)]
        } else {
            clauses
        }
    }
}

impl<T> std::fmt::Debug for SearchSchema<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSchema")
            .field("sorts", &self.sorts.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field(
                "filters",
                &self.filters.iter().map(|(n, _)| n).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Apply a search request to a collection: filter, order, page.
///
/// The total count is taken from the filtered set before paging. This
/// function is purely functional over its inputs and safe for unbounded
/// concurrent invocation.
pub fn search<T>(schema: &SearchSchema<T>, items: Vec<T>, args: &SearchArgs) -> PagedList<T> {
    let mut matched: Vec<T> = items
        .into_iter()
        .filter(|item| schema.matches(item, &args.filtering_options))
        .collect();

    let total_count = matched.len();

    let clauses = schema.ordering(args);
    matched.sort_by(|a, b| {
        for (sort, direction) in &clauses {
            let ord = match direction {
                SortDirection::Asc => sort(a, b),
                SortDirection::Desc => sort(b, a),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    let paging = args.paging;
    let items = match paging.strategy {
        PagingStrategy::NoPaging => matched,
        PagingStrategy::Paged => matched
            .into_iter()
            .skip(paging.page_index.saturating_mul(paging.page_size))
            .take(paging.page_size)
            .collect(),
    };

    PagedList::new(items, total_count, paging.page_index, paging.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::options::{PagingArgs, SortingOption};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Dish {
        id: i64,
        name: String,
        spice: i64,
    }

    fn dish(id: i64, name: &str, spice: i64) -> Dish {
        Dish {
            id,
            name: name.to_string(),
            spice,
        }
    }

    fn schema() -> SearchSchema<Dish> {
        SearchSchema::new(|a: &Dish, b: &Dish| a.id.cmp(&b.id))
            .sortable("id", |a, b| a.id.cmp(&b.id))
            .sortable("name", |a, b| a.name.cmp(&b.name))
            .sortable("spice", |a, b| a.spice.cmp(&b.spice))
            .filterable("id", |d, v| v.as_i64().is_some_and(|id| d.id == id))
            .filterable("name", |d, v| {
                v.as_text().is_some_and(|s| d.name.contains(s))
            })
    }

    fn dishes() -> Vec<Dish> {
        vec![
            dish(4, "Rogan Josh", 3),
            dish(2, "Pad Thai", 1),
            dish(1, "Vindaloo", 3),
            dish(3, "Korma", 0),
        ]
    }

    fn args(sorting: Vec<SortingOption>, filtering: Vec<FilteringOption>) -> SearchArgs {
        SearchArgs {
            sorting_options: sorting,
            filtering_options: filtering,
            paging: PagingArgs::default(),
        }
    }

    #[test]
    fn test_unknown_sort_fields_fall_back_to_id_ascending() {
        let request = args(
            vec![SortingOption::desc("calories"), SortingOption::asc("typo")],
            Vec::new(),
        );
        let page = search(&schema(), dishes(), &request);
        let ids: Vec<_> = page.items.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_sort_list_falls_back_to_id_ascending() {
        let page = search(&schema(), dishes(), &args(Vec::new(), Vec::new()));
        let ids: Vec<_> = page.items.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_multi_key_ordering_with_tie_breaks() {
        // Primary: spice descending; ties broken by name ascending.
        let request = args(
            vec![SortingOption::desc("spice"), SortingOption::asc("name")],
            Vec::new(),
        );
        let page = search(&schema(), dishes(), &request);
        let names: Vec<_> = page.items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Rogan Josh", "Vindaloo", "Pad Thai", "Korma"]);
    }

    #[test]
    fn test_unknown_filter_fields_match_everything() {
        let request = args(
            Vec::new(),
            vec![
                FilteringOption::new("calories", FilterValue::int(100)),
                FilteringOption::new("typo", FilterValue::text("x")),
            ],
        );
        let page = search(&schema(), dishes(), &request);
        assert_eq!(page.total_count, 4);
        assert_eq!(page.len(), 4);
    }

    #[test]
    fn test_filters_are_conjoined() {
        let request = args(
            Vec::new(),
            vec![
                FilteringOption::new("name", FilterValue::text("o")),
                FilteringOption::new("id", FilterValue::int(3)),
            ],
        );
        let page = search(&schema(), dishes(), &request);
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Korma");
    }

    #[test]
    fn test_substring_filter_is_case_sensitive() {
        let request = args(
            Vec::new(),
            vec![FilteringOption::new("name", FilterValue::text("korma"))],
        );
        let page = search(&schema(), dishes(), &request);
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_type_mismatched_filter_value_matches_nothing() {
        let request = args(
            Vec::new(),
            vec![FilteringOption::new("id", FilterValue::text("3"))],
        );
        let page = search(&schema(), dishes(), &request);
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_paging_window_and_total_count() {
        // N = 10 items, P = 3: pages hold 3, 3, 3, 1, 0 items.
        let items: Vec<Dish> = (1..=10).map(|i| dish(i, "d", 0)).collect();
        for (page_index, expected_len) in [(0, 3), (1, 3), (2, 3), (3, 1), (4, 0)] {
            let request = SearchArgs {
                paging: PagingArgs {
                    page_index,
                    page_size: 3,
                    strategy: PagingStrategy::Paged,
                },
                ..SearchArgs::default()
            };
            let page = search(&schema(), items.clone(), &request);
            assert_eq!(page.len(), expected_len, "page {page_index}");
            assert_eq!(page.total_count, 10, "page {page_index}");
        }
    }

    #[test]
    fn test_total_count_reflects_filtered_set_not_page() {
        let items: Vec<Dish> = (1..=10)
            .map(|i| dish(i, if i % 2 == 0 { "even" } else { "odd" }, 0))
            .collect();
        let request = SearchArgs {
            filtering_options: vec![FilteringOption::new("name", FilterValue::text("even"))],
            paging: PagingArgs {
                page_index: 0,
                page_size: 2,
                strategy: PagingStrategy::Paged,
            },
            ..SearchArgs::default()
        };
        let page = search(&schema(), items, &request);
        assert_eq!(page.len(), 2);
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_no_paging_strategy_returns_full_set() {
        let request = SearchArgs {
            paging: PagingArgs {
                page_index: 7,
                page_size: 1,
                strategy: PagingStrategy::NoPaging,
            },
            ..SearchArgs::default()
        };
        let page = search(&schema(), dishes(), &request);
        assert_eq!(page.len(), 4);
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn test_filter_then_sort_then_page() {
        let request = SearchArgs {
            sorting_options: vec![SortingOption::desc("name")],
            filtering_options: vec![FilteringOption::new("name", FilterValue::text("a"))],
            paging: PagingArgs {
                page_index: 0,
                page_size: 2,
                strategy: PagingStrategy::Paged,
            },
        };
        // Matches: Rogan Josh, Pad Thai, Vindaloo, Korma (contain "a").
        let page = search(&schema(), dishes(), &request);
        assert_eq!(page.total_count, 4);
        let names: Vec<_> = page.items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Vindaloo", "Rogan Josh"]);
    }
}
