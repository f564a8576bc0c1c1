//! brewdex - a read-oriented query API over a brewery dataset
//!
//! Filtering, name search, sorting, and limit/offset pagination over a
//! single collection of brewery records. The core is the query module:
//! validated filter predicates folded into an immutable query expression.

pub mod api;
pub mod cli;
pub mod config;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
