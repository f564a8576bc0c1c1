//! # Response Formatting
//!
//! Standard response types: a paginated page of records and a single-record
//! envelope.

use serde::Serialize;

use crate::store::{PageRequest, QueryWindow};

/// One page of results with pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct Page<T: Serialize> {
    pub data: Vec<T>,
    /// Records in this page
    pub count: usize,
    /// Matches across the whole query
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T: Serialize> Page<T> {
    pub fn new(data: Vec<T>, total: usize, page: PageRequest) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            total,
            limit: page.limit,
            offset: page.offset,
        }
    }
}

impl Page<crate::model::BreweryRecord> {
    /// Wrap a store window in response metadata
    pub fn from_window(window: QueryWindow, page: PageRequest) -> Self {
        Self::new(window.records, window.total, page)
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_serialization() {
        let page = Page::new(
            vec![json!({"id": 1}), json!({"id": 2})],
            7,
            PageRequest {
                limit: 2,
                offset: 4,
            },
        );

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["total"], 7);
        assert_eq!(value["limit"], 2);
        assert_eq!(value["offset"], 4);
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(json!({"id": 1, "name": "Cascade"}));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"]["id"], 1);
    }
}
