//! # Record Store
//!
//! Capability interface over the persisted brewery collection. The query
//! core depends only on this trait, never on a concrete storage backend.
//! All methods are read-only; this crate performs no writes.

pub mod memory;

use std::collections::BTreeSet;
use std::future::Future;

use crate::model::BreweryRecord;
use crate::query::QueryExpression;

pub use memory::{MemoryStore, SeedError};

/// A dimension with a data-derived vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    City,
    State,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::City => "city",
            Dimension::State => "state",
        }
    }
}

/// A limit/offset window into a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

/// One window of matched records plus the total match count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWindow {
    pub records: Vec<BreweryRecord>,
    /// Matches across the whole expression, not just this window
    pub total: usize,
}

/// Read capabilities the query core needs from storage.
///
/// Reads may run concurrently with other requests' reads and with writes
/// outside this crate, so vocabulary membership can change between a
/// validation read and the subsequent filtered query. Zero rows at
/// execution time is an empty result, not an error.
pub trait RecordStore: Send + Sync {
    /// Distinct values currently present for a dimension.
    ///
    /// Computed from live data on every call; never cached.
    fn distinct_values(&self, dimension: Dimension)
        -> impl Future<Output = BTreeSet<String>> + Send;

    /// Execute a composed expression and return one page of matches
    fn find(
        &self,
        expr: &QueryExpression,
        page: PageRequest,
    ) -> impl Future<Output = QueryWindow> + Send;

    /// Fetch a single record by identifier
    fn get(&self, id: u64) -> impl Future<Output = Option<BreweryRecord>> + Send;
}
