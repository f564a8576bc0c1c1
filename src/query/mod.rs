//! # Query Core
//!
//! Builds a filtered-and-sorted query expression from an arbitrary
//! combination of optional filter criteria. Every value is validated
//! against its vocabulary before it is folded into the expression;
//! a validation failure aborts the whole composition.

pub mod compose;
pub mod criteria;
pub mod expr;
pub mod validate;

use thiserror::Error;

pub use compose::compose;
pub use criteria::FilterCriteria;
pub use expr::{Predicate, QueryExpression, SortSpec};

/// Result type for query composition
pub type QueryResult<T> = Result<T, QueryError>;

/// Validation errors raised while composing a query.
///
/// All variants are per-request and recoverable by the caller issuing a
/// corrected request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Brewery type not in the closed set
    #[error("{0} is not a brewery type")]
    InvalidEnumValue(String),

    /// Sort token malformed or not a known field
    #[error("'{0}' is not a sortable field")]
    InvalidSortField(String),

    /// City absent from the current dataset
    #[error("{0} is not a city in this dataset")]
    UnknownCity(String),

    /// State absent from the current dataset
    #[error("{0} is not a state in this dataset")]
    UnknownState(String),
}
