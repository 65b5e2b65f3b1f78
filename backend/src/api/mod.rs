//! API route handlers and module exports.

pub mod listings;
pub mod catalog;
pub mod describe;
