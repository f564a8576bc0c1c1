//! # HTTP API Module
//!
//! Thin axum binding over the query core: a listing endpoint with optional
//! filters and sort, a single-record lookup, and a free-text name search.

pub mod errors;
pub mod params;
pub mod response;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use params::{ListingParams, SearchParams};
pub use response::{Page, SingleResponse};
pub use server::ApiServer;
