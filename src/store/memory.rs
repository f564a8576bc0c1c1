//! # In-Memory Record Store
//!
//! Holds the brewery collection in memory, seedable from a JSON array file.
//! Filtering and sorting happen over the full collection; the page window
//! is cut last so the total count reflects every match.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::RwLock;

use thiserror::Error;

use crate::model::BreweryRecord;
use crate::query::QueryExpression;

use super::{Dimension, PageRequest, QueryWindow, RecordStore};

/// Errors loading a seed file
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// In-memory record store
pub struct MemoryStore {
    records: RwLock<Vec<BreweryRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<BreweryRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Load a store from a JSON array of brewery records
    pub fn load_seed(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        let records: Vec<BreweryRecord> = serde_json::from_str(&raw)?;
        Ok(Self::with_records(records))
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryStore {
    async fn distinct_values(&self, dimension: Dimension) -> BTreeSet<String> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => return BTreeSet::new(),
        };

        records
            .iter()
            .map(|r| match dimension {
                Dimension::City => r.city.clone(),
                Dimension::State => r.state.clone(),
            })
            .collect()
    }

    async fn find(&self, expr: &QueryExpression, page: PageRequest) -> QueryWindow {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => {
                return QueryWindow {
                    records: Vec::new(),
                    total: 0,
                }
            }
        };

        let mut matched: Vec<BreweryRecord> =
            records.iter().filter(|r| expr.matches(r)).cloned().collect();

        // Stable sort keeps natural order for ties
        if let Some(sort) = expr.sort() {
            matched.sort_by(|a, b| sort.compare(a, b));
        }

        let total = matched.len();
        let records = matched
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect();

        QueryWindow { records, total }
    }

    async fn get(&self, id: u64) -> Option<BreweryRecord> {
        let records = self.records.read().ok()?;
        records.iter().find(|r| r.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::model::{BreweryType, SortField};
    use crate::query::{Predicate, SortSpec};

    fn sample_records() -> Vec<BreweryRecord> {
        vec![
            BreweryRecord {
                id: 1,
                name: "Cascade Brewing".to_string(),
                brewery_type: BreweryType::Micro,
                city: "Portland".to_string(),
                state: "Oregon".to_string(),
                postal_code: "97201-1234".to_string(),
            },
            BreweryRecord {
                id: 2,
                name: "Deschutes Brewery".to_string(),
                brewery_type: BreweryType::Regional,
                city: "Bend".to_string(),
                state: "Oregon".to_string(),
                postal_code: "97701".to_string(),
            },
            BreweryRecord {
                id: 3,
                name: "Allagash Brewing".to_string(),
                brewery_type: BreweryType::Micro,
                city: "Portland".to_string(),
                state: "Maine".to_string(),
                postal_code: "04103".to_string(),
            },
        ]
    }

    fn full_page() -> PageRequest {
        PageRequest {
            limit: 100,
            offset: 0,
        }
    }

    #[tokio::test]
    async fn test_distinct_values_reflect_live_data() {
        let store = MemoryStore::with_records(sample_records());

        let cities = store.distinct_values(Dimension::City).await;
        assert_eq!(
            cities.into_iter().collect::<Vec<_>>(),
            vec!["Bend".to_string(), "Portland".to_string()]
        );

        let states = store.distinct_values(Dimension::State).await;
        assert!(states.contains("Oregon"));
        assert!(states.contains("Maine"));
    }

    #[tokio::test]
    async fn test_distinct_values_on_empty_store() {
        let store = MemoryStore::new();
        assert!(store.distinct_values(Dimension::City).await.is_empty());
    }

    #[tokio::test]
    async fn test_find_unconstrained_returns_everything() {
        let store = MemoryStore::with_records(sample_records());
        let window = store.find(&QueryExpression::all(), full_page()).await;

        assert_eq!(window.total, 3);
        assert_eq!(window.records.len(), 3);
    }

    #[tokio::test]
    async fn test_find_filters_and_sorts() {
        let store = MemoryStore::with_records(sample_records());
        let expr = QueryExpression::all()
            .and(Predicate::CityEq("Portland".to_string()))
            .order_by(SortSpec::descending(SortField::Name));

        let window = store.find(&expr, full_page()).await;
        assert_eq!(window.total, 2);
        let names: Vec<&str> = window.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Cascade Brewing", "Allagash Brewing"]);
    }

    #[tokio::test]
    async fn test_find_window_keeps_total() {
        let store = MemoryStore::with_records(sample_records());
        let window = store
            .find(
                &QueryExpression::all(),
                PageRequest {
                    limit: 1,
                    offset: 1,
                },
            )
            .await;

        assert_eq!(window.total, 3);
        assert_eq!(window.records.len(), 1);
    }

    #[tokio::test]
    async fn test_find_offset_past_end_is_empty_not_error() {
        let store = MemoryStore::with_records(sample_records());
        let window = store
            .find(
                &QueryExpression::all(),
                PageRequest {
                    limit: 10,
                    offset: 50,
                },
            )
            .await;

        assert_eq!(window.total, 3);
        assert!(window.records.is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = MemoryStore::with_records(sample_records());
        assert_eq!(store.get(2).await.map(|r| r.name), Some("Deschutes Brewery".to_string()));
        assert_eq!(store.get(99).await, None);
    }

    #[test]
    fn test_load_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let seed = serde_json::to_string(&sample_records()).unwrap();
        file.write_all(seed.as_bytes()).unwrap();

        let store = MemoryStore::load_seed(file.path()).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_load_seed_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        assert!(matches!(
            MemoryStore::load_seed(file.path()),
            Err(SeedError::Parse(_))
        ));
    }
}
