//! # Filter Criteria
//!
//! The request-scoped bundle of optional filter values. No two filters are
//! mutually exclusive; any subset (including none or all) may be present.

use serde::Deserialize;

/// Raw filter values as supplied by the caller.
///
/// Values here are unvalidated text; validation happens when the criteria
/// are composed into a query expression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterCriteria {
    /// Filter by city (validated against live data)
    pub by_city: Option<String>,

    /// Filter by name substring, case-insensitive
    pub by_name: Option<String>,

    /// Filter by state (validated against live data)
    pub by_state: Option<String>,

    /// Filter by postal code substring (shape-checked upstream)
    pub by_postal: Option<String>,

    /// Filter by brewery type (closed set, case-sensitive)
    pub by_type: Option<String>,

    /// Sort token: optional leading `-`, then a sortable field name
    pub sort: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no filter and no sort is present
    pub fn is_empty(&self) -> bool {
        self.by_city.is_none()
            && self.by_name.is_none()
            && self.by_state.is_none()
            && self.by_postal.is_none()
            && self.by_type.is_none()
            && self.sort.is_none()
    }
}
