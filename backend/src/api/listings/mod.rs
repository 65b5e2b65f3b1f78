//! Listing API route handlers and module exports.

mod search_listings;
pub use search_listings::search_listings;

mod get_listing;
pub use get_listing::get_listing;

mod publish_listing;
pub use publish_listing::publish_listing;

pub mod listing_sql;
