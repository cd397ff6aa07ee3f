//! Ordering helpers for occurrence tables
//!
//! Occurrence maps are unordered; callers that display them pick an ordering
//! here. Ties are broken arbitrarily.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// What to sort entries by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Sort by entry key
    #[default]
    Key,
    /// Sort by entry value
    Value,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "key" => Ok(SortOption::Key),
            "value" => Ok(SortOption::Value),
            _ => Err(Error::Configuration(format!("Unknown sort option: {s}"))),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" => Ok(SortDirection::Ascending),
            "descending" | "desc" => Ok(SortDirection::Descending),
            _ => Err(Error::Configuration(format!("Unknown sort direction: {s}"))),
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Key => write!(f, "key"),
            SortOption::Value => write!(f, "value"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Sort `(key, value)` pairs by key or by value
pub fn sort_entries<K, V, I>(entries: I, option: SortOption, direction: SortDirection) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Ord,
    V: Ord,
{
    let mut sorted: Vec<(K, V)> = entries.into_iter().collect();

    match (option, direction) {
        (SortOption::Key, SortDirection::Ascending) => sorted.sort_by(|a, b| a.0.cmp(&b.0)),
        (SortOption::Key, SortDirection::Descending) => sorted.sort_by(|a, b| b.0.cmp(&a.0)),
        (SortOption::Value, SortDirection::Ascending) => sorted.sort_by(|a, b| a.1.cmp(&b.1)),
        (SortOption::Value, SortDirection::Descending) => sorted.sort_by(|a, b| b.1.cmp(&a.1)),
    }

    sorted
}

/// Sorted views over a map
pub trait SortedEntries<K, V> {
    /// Entries ordered by key or value
    fn sorted_by(&self, option: SortOption, direction: SortDirection) -> Vec<(K, V)>;
}

impl<K, V, S> SortedEntries<K, V> for HashMap<K, V, S>
where
    K: Ord + Hash + Clone,
    V: Ord + Clone,
{
    fn sorted_by(&self, option: SortOption, direction: SortDirection) -> Vec<(K, V)> {
        sort_entries(
            self.iter().map(|(k, v)| (k.clone(), v.clone())),
            option,
            direction,
        )
    }
}
