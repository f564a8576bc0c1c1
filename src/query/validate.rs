//! # Field Validator
//!
//! Checks proposed filter and sort values against their vocabularies before
//! they reach the query expression. Brewery types and sort fields are closed
//! sets fixed at build time; city and state vocabularies are derived from
//! live data on every check and are never cached.

use crate::model::{BreweryType, SortField};
use crate::store::{Dimension, RecordStore};

use super::expr::SortSpec;
use super::{QueryError, QueryResult};

/// Lead characters a sort token may start with (after the optional `-`).
/// Derived from the sortable field names plus the literal `id`.
const SORT_LEAD_CHARS: [char; 6] = ['i', 'n', 'b', 'c', 's', 'p'];

/// Exact, case-sensitive membership check against the closed type set
pub fn validate_brewery_type(value: &str) -> QueryResult<BreweryType> {
    BreweryType::from_wire(value).ok_or_else(|| QueryError::InvalidEnumValue(value.to_string()))
}

/// Parse and validate a sort token.
///
/// At most one leading minus sign is stripped and marks descending order;
/// the remainder must be a known sortable field. `"-name"` and `"name"`
/// check the same membership. A token like `"--name"` or an interior
/// hyphen is malformed.
pub fn validate_sort_token(token: &str) -> QueryResult<SortSpec> {
    let (descending, name) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let lead_ok = name
        .chars()
        .next()
        .map(|c| SORT_LEAD_CHARS.contains(&c))
        .unwrap_or(false);
    if !lead_ok {
        return Err(QueryError::InvalidSortField(token.to_string()));
    }

    let field = SortField::from_wire(name)
        .ok_or_else(|| QueryError::InvalidSortField(token.to_string()))?;

    Ok(SortSpec { field, descending })
}

/// Title-case normalization: first letter of each whitespace-separated word
/// upper-cased, the rest lowered. Matches how city and state values are
/// stored in the dataset.
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a value against the live derived vocabulary for a dimension.
///
/// Returns the normalized value on success. An empty or non-matching
/// dataset fails deterministically with the dimension's error kind. The
/// vocabulary may drift between this check and query execution; a later
/// empty result is not an error.
pub async fn validate_derived<S: RecordStore>(
    value: &str,
    store: &S,
    dimension: Dimension,
) -> QueryResult<String> {
    let normalized = title_case(value);
    let vocabulary = store.distinct_values(dimension).await;

    if vocabulary.contains(&normalized) {
        Ok(normalized)
    } else {
        match dimension {
            Dimension::City => Err(QueryError::UnknownCity(value.to_string())),
            Dimension::State => Err(QueryError::UnknownState(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BreweryRecord, BreweryType};
    use crate::store::MemoryStore;

    fn portland_store() -> MemoryStore {
        MemoryStore::with_records(vec![BreweryRecord {
            id: 1,
            name: "Cascade Brewing".to_string(),
            brewery_type: BreweryType::Micro,
            city: "Portland".to_string(),
            state: "Oregon".to_string(),
            postal_code: "97201".to_string(),
        }])
    }

    #[test]
    fn test_brewery_type_membership() {
        assert_eq!(validate_brewery_type("micro"), Ok(BreweryType::Micro));
        assert_eq!(
            validate_brewery_type("not_a_type"),
            Err(QueryError::InvalidEnumValue("not_a_type".to_string()))
        );
        // Case-sensitive
        assert!(validate_brewery_type("Micro").is_err());
    }

    #[test]
    fn test_sort_token_accepts_known_fields() {
        let spec = validate_sort_token("name").unwrap();
        assert_eq!(spec.field, SortField::Name);
        assert!(!spec.descending);

        let spec = validate_sort_token("-name").unwrap();
        assert_eq!(spec.field, SortField::Name);
        assert!(spec.descending);

        assert_eq!(validate_sort_token("id").unwrap().field, SortField::Id);
        assert_eq!(
            validate_sort_token("-postal_code").unwrap().field,
            SortField::PostalCode
        );
    }

    #[test]
    fn test_sort_token_strips_at_most_one_minus() {
        assert_eq!(
            validate_sort_token("--name"),
            Err(QueryError::InvalidSortField("--name".to_string()))
        );
        // An interior hyphen is not a descending marker
        assert!(validate_sort_token("na-me").is_err());
    }

    #[test]
    fn test_sort_token_rejects_unknown_and_empty() {
        assert!(validate_sort_token("street").is_err());
        assert!(validate_sort_token("").is_err());
        assert!(validate_sort_token("-").is_err());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("portland"), "Portland");
        assert_eq!(title_case("NEW YORK"), "New York");
        assert_eq!(title_case("new  york"), "New York");
        assert_eq!(title_case(""), "");
    }

    #[tokio::test]
    async fn test_derived_vocabulary_normalizes_and_matches() {
        let store = portland_store();
        assert_eq!(
            validate_derived("portland", &store, Dimension::City).await,
            Ok("Portland".to_string())
        );
        assert_eq!(
            validate_derived("PORTLAND", &store, Dimension::City).await,
            Ok("Portland".to_string())
        );
    }

    #[tokio::test]
    async fn test_derived_vocabulary_miss() {
        let store = portland_store();
        assert_eq!(
            validate_derived("Atlantis", &store, Dimension::City).await,
            Err(QueryError::UnknownCity("Atlantis".to_string()))
        );
        assert_eq!(
            validate_derived("Narnia", &store, Dimension::State).await,
            Err(QueryError::UnknownState("Narnia".to_string()))
        );
    }

    #[tokio::test]
    async fn test_derived_vocabulary_empty_store_fails_deterministically() {
        let store = MemoryStore::new();
        assert_eq!(
            validate_derived("Portland", &store, Dimension::City).await,
            Err(QueryError::UnknownCity("Portland".to_string()))
        );
    }
}
