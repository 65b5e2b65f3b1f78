//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod listing_filter;
pub mod listing_result;
pub mod listing_draft;
pub mod catalog;
pub mod listing_const;
