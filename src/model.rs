//! # Data Model
//!
//! The brewery record plus the closed vocabularies fixed at build time:
//! brewery types and sortable field names. Open-ended vocabularies (which
//! cities and states actually exist) live in the store, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single brewery record.
///
/// Owned and persisted by the record store; the query core only reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreweryRecord {
    /// Unique, immutable identifier
    pub id: u64,
    pub name: String,
    pub brewery_type: BreweryType,
    pub city: String,
    pub state: String,
    /// Shape `DDDDD` or `DDDDD-DDDD`
    pub postal_code: String,
}

/// Closed set of brewery types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreweryType {
    Micro,
    Nano,
    Regional,
    Brewpub,
    Large,
    Planning,
    Bar,
    Contract,
    Proprietor,
    Closed,
}

impl BreweryType {
    /// All members, in wire-name order
    pub const ALL: [BreweryType; 10] = [
        BreweryType::Micro,
        BreweryType::Nano,
        BreweryType::Regional,
        BreweryType::Brewpub,
        BreweryType::Large,
        BreweryType::Planning,
        BreweryType::Bar,
        BreweryType::Contract,
        BreweryType::Proprietor,
        BreweryType::Closed,
    ];

    /// Get the wire-name string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BreweryType::Micro => "micro",
            BreweryType::Nano => "nano",
            BreweryType::Regional => "regional",
            BreweryType::Brewpub => "brewpub",
            BreweryType::Large => "large",
            BreweryType::Planning => "planning",
            BreweryType::Bar => "bar",
            BreweryType::Contract => "contract",
            BreweryType::Proprietor => "proprietor",
            BreweryType::Closed => "closed",
        }
    }

    /// Exact, case-sensitive lookup by wire name
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for BreweryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Closed set of sortable field names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Name,
    BreweryType,
    City,
    State,
    PostalCode,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::Name,
        SortField::BreweryType,
        SortField::City,
        SortField::State,
        SortField::PostalCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::BreweryType => "brewery_type",
            SortField::City => "city",
            SortField::State => "state",
            SortField::PostalCode => "postal_code",
        }
    }

    /// Exact lookup by wire name
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == value)
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
