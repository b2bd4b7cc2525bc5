//! Request parameter definitions backing the web routes.

pub mod search;
