//! # Query Expression
//!
//! An accumulating, immutable-per-step representation of "the record set
//! matching all applied filters so far, in an optional order."
//!
//! The expression starts as "all records"; each `and` produces a new,
//! strictly narrower expression, and `order_by` changes only ordering,
//! never membership. Predicates are conjunctive and commute.

use std::cmp::Ordering;

use crate::model::{BreweryRecord, BreweryType, SortField};

/// One conjunctive filter constraint.
///
/// Inputs are assumed validated and normalized: city and state values are
/// title-cased, the brewery type has passed the closed-enum check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// City equals the normalized input exactly
    CityEq(String),

    /// State equals the normalized input exactly
    StateEq(String),

    /// Brewery type equals the input exactly
    TypeEq(BreweryType),

    /// Name contains the input as a substring, case-insensitively
    NameContains(String),

    /// Postal code contains the input as a substring (partial zip match)
    PostalContains(String),
}

impl Predicate {
    /// Check whether a record satisfies this constraint
    pub fn matches(&self, record: &BreweryRecord) -> bool {
        match self {
            Predicate::CityEq(city) => record.city == *city,
            Predicate::StateEq(state) => record.state == *state,
            Predicate::TypeEq(brewery_type) => record.brewery_type == *brewery_type,
            Predicate::NameContains(needle) => {
                record.name.to_lowercase().contains(&needle.to_lowercase())
            }
            Predicate::PostalContains(needle) => record
                .postal_code
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// A single-field ordering directive.
///
/// Only one sort field per query; ties keep the store's natural order,
/// which callers must treat as unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub descending: bool,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            descending: false,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Compare two records under this directive
    pub fn compare(&self, a: &BreweryRecord, b: &BreweryRecord) -> Ordering {
        let ordering = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::BreweryType => a.brewery_type.as_str().cmp(b.brewery_type.as_str()),
            SortField::City => a.city.cmp(&b.city),
            SortField::State => a.state.cmp(&b.state),
            SortField::PostalCode => a.postal_code.cmp(&b.postal_code),
        };

        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// The accumulating query expression.
///
/// Conceptually persistent: `and` and `order_by` consume the expression and
/// return a new one, so no step ever observes a partially-mutated query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryExpression {
    predicates: Vec<Predicate>,
    sort: Option<SortSpec>,
}

impl QueryExpression {
    /// The expression denoting the entire unfiltered, unordered collection
    pub fn all() -> Self {
        Self::default()
    }

    /// Narrow the expression with one more conjunctive constraint
    pub fn and(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Set the ordering directive. Ordering never changes membership.
    pub fn order_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// True when the expression denotes the whole collection, unordered
    pub fn is_unconstrained(&self) -> bool {
        self.predicates.is_empty() && self.sort.is_none()
    }

    /// Check whether a record matches every applied constraint
    pub fn matches(&self, record: &BreweryRecord) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}
