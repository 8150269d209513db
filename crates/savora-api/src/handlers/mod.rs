//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod branches;
pub mod cuisine_types;
pub mod health;
pub mod menu_items;
pub mod menus;
pub mod orders;
pub mod restaurants;
pub mod users;

use savora_core::search::{PagingStrategy, SearchArgs};

/// Largest page a client may request
const MAX_PAGE_SIZE: usize = 100;

/// Clamp client-supplied page bounds before they reach the search pipeline.
/// `page_size >= 1` is a precondition of the paging math, so it is enforced
/// here, at the boundary.
pub(crate) fn sanitize_paging(args: &mut SearchArgs) {
    if args.paging.strategy == PagingStrategy::NoPaging {
        return;
    }
    args.paging.page_size = args.paging.page_size.clamp(1, MAX_PAGE_SIZE);
}
