//! # Query Parameter Parser
//!
//! Parses raw query parameters into filter criteria and a page window.
//! Structural checks (postal shape, limit bounds) happen here, before any
//! domain logic runs.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::query::FilterCriteria;
use crate::store::PageRequest;

use super::errors::{ApiError, ApiResult};

/// Maximum number of records that can be returned per page
pub const MAX_LIMIT: usize = 200;

/// Default page size if not specified
pub const DEFAULT_LIMIT: usize = 50;

/// Parsed parameters for the listing endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub criteria: FilterCriteria,
    pub page: PageRequest,
}

/// Parsed parameters for the search endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub page: PageRequest,
}

fn postal_shape() -> &'static Regex {
    static POSTAL: OnceLock<Regex> = OnceLock::new();
    POSTAL.get_or_init(|| Regex::new(r"^\d{5}(-\d{4})?$").expect("postal regex is valid"))
}

impl ListingParams {
    /// Parse listing parameters from the raw query map.
    ///
    /// Unknown keys are rejected rather than silently ignored.
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        let mut criteria = FilterCriteria::new();
        let mut limit = DEFAULT_LIMIT;
        let mut offset = 0;

        for (key, value) in params {
            match key.as_str() {
                "by_city" => criteria.by_city = Some(value.clone()),
                "by_name" => criteria.by_name = Some(value.clone()),
                "by_state" => criteria.by_state = Some(value.clone()),
                "by_postal" => criteria.by_postal = Some(parse_postal(value)?),
                "by_type" => criteria.by_type = Some(value.clone()),
                "sort" => criteria.sort = Some(value.clone()),
                "limit" => limit = parse_limit(value)?,
                "offset" => offset = parse_offset(value)?,
                other => {
                    return Err(ApiError::InvalidQueryParam(other.to_string()));
                }
            }
        }

        if limit > MAX_LIMIT {
            return Err(ApiError::LimitExceeded(limit, MAX_LIMIT));
        }

        Ok(Self {
            criteria,
            page: PageRequest { limit, offset },
        })
    }
}

impl SearchParams {
    /// Parse search parameters; the query term is required
    pub fn parse(params: &HashMap<String, String>) -> ApiResult<Self> {
        let mut query = None;
        let mut limit = DEFAULT_LIMIT;
        let mut offset = 0;

        for (key, value) in params {
            match key.as_str() {
                "query" => query = Some(value.clone()),
                "limit" => limit = parse_limit(value)?,
                "offset" => offset = parse_offset(value)?,
                other => {
                    return Err(ApiError::InvalidQueryParam(other.to_string()));
                }
            }
        }

        if limit > MAX_LIMIT {
            return Err(ApiError::LimitExceeded(limit, MAX_LIMIT));
        }

        let query = query.ok_or_else(|| ApiError::MissingParam("query".to_string()))?;

        Ok(Self {
            query,
            page: PageRequest { limit, offset },
        })
    }
}

/// Shape check for the postal filter: `DDDDD` or `DDDDD-DDDD`
fn parse_postal(value: &str) -> ApiResult<String> {
    if value.len() < 5 || value.len() > 10 || !postal_shape().is_match(value) {
        return Err(ApiError::InvalidPostal(value.to_string()));
    }
    Ok(value.to_string())
}

fn parse_limit(value: &str) -> ApiResult<usize> {
    value
        .parse()
        .map_err(|_| ApiError::InvalidQueryParam(format!("limit: {}", value)))
}

fn parse_offset(value: &str) -> ApiResult<usize> {
    value
        .parse()
        .map_err(|_| ApiError::InvalidQueryParam(format!("offset: {}", value)))
}
