//! # Predicate Composer
//!
//! Folds request criteria into a single query expression. Each present
//! dimension is validated, then applied as one more conjunctive constraint;
//! the first validation failure aborts the whole composition, so no partial
//! query is ever handed to the store.
//!
//! The fold order (city, type, name, state, postal, sort) is fixed for
//! readability only; conjunctive filters commute.

use crate::store::{Dimension, RecordStore};

use super::criteria::FilterCriteria;
use super::expr::{Predicate, QueryExpression};
use super::validate::{validate_brewery_type, validate_derived, validate_sort_token};
use super::QueryResult;

/// Build a filtered-and-sorted expression from request criteria.
///
/// Suspends only at derived-vocabulary reads against the store. Empty
/// criteria compose to the all-records, unordered expression.
pub async fn compose<S: RecordStore>(
    criteria: &FilterCriteria,
    store: &S,
) -> QueryResult<QueryExpression> {
    let mut expr = QueryExpression::all();

    if let Some(city) = criteria.by_city.as_deref() {
        let city = validate_derived(city, store, Dimension::City).await?;
        expr = expr.and(Predicate::CityEq(city));
    }

    if let Some(by_type) = criteria.by_type.as_deref() {
        let brewery_type = validate_brewery_type(by_type)?;
        expr = expr.and(Predicate::TypeEq(brewery_type));
    }

    if let Some(name) = criteria.by_name.as_deref() {
        expr = expr.and(Predicate::NameContains(name.to_string()));
    }

    if let Some(state) = criteria.by_state.as_deref() {
        let state = validate_derived(state, store, Dimension::State).await?;
        expr = expr.and(Predicate::StateEq(state));
    }

    if let Some(postal) = criteria.by_postal.as_deref() {
        expr = expr.and(Predicate::PostalContains(postal.to_string()));
    }

    if let Some(sort) = criteria.sort.as_deref() {
        expr = expr.order_by(validate_sort_token(sort)?);
    }

    Ok(expr)
}
