//! Various procedures for closing and querying a context.
//!
//! For the most part these are methods accessed via a context, and primarily placed here for documentation.

pub mod closure;
pub mod evaluate;
pub mod query;
