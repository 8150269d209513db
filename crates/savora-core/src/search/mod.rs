//! Generic paged search over entity collections.
//!
//! Every repository `search` operation funnels through this module: a
//! [`SearchSchema`] declares the allow-listed sortable/filterable fields for
//! one entity type, and [`search`] applies a [`SearchArgs`] request
//! (ordering, conjoined filters, paging) to a collection, producing a
//! [`PagedList`] that carries the total match count from before paging.
//!
//! Field names not present in the schema are dropped silently; search
//! endpoints stay tolerant of unknown client-supplied keys.

mod options;
mod paged_list;
mod schema;

pub use options::{
    FilterValue, FilteringOption, PagingArgs, PagingStrategy, SearchArgs, SortDirection,
    SortingOption,
};
pub use paged_list::PagedList;
pub use schema::{search, SearchSchema};
