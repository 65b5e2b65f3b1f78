pub mod filter_query;
pub mod debounce;
