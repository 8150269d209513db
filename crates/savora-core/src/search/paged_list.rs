//! Paged result container.

use serde::Serialize;

/// A bounded slice of a larger filtered/sorted collection.
///
/// Invariant: `total_count` reflects the filtered set before paging was
/// applied, and `items.len() <= page_size` under the `Paged` strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> PagedList<T> {
    /// Create a paged list
    pub fn new(items: Vec<T>, total_count: usize, page_index: usize, page_size: usize) -> Self {
        Self {
            items,
            total_count,
            page_index,
            page_size,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map the page's items, keeping the paging metadata
    pub fn map<U, F>(self, f: F) -> PagedList<U>
    where
        F: FnMut(T) -> U,
    {
        PagedList {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }
}
