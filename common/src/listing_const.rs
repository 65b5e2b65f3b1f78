//! Shared constants for listing search and pagination.

/// Pages are 1-based everywhere: in the URL, in requests and in responses.
pub const FIRST_PAGE: u64 = 1;

pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Hard cap on the page size a client can request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Delay before a keystroke in the search box becomes a new query.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Upper bound on photos shown on a listing detail page.
pub const MAX_LISTING_PHOTOS: usize = 12;
