//! Configuration enums shared by the comparers and [`SortConfig`](crate::SortConfig).
//!
//! - [`SortStrategy`] selects which string comparer orders page and file names
//! - [`SortDirection`] flips any ordering into descending order

use std::cmp::Ordering;
use std::fmt;

/// Which comparer is used to order file and page names.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub enum SortStrategy {
    #[default]
    Natural, // Case-insensitive, separators alike, numbers by value
    Numeric, // Ordinal characters, numbers by value
    Logical, // Symbol-led names first, then numbers, symbols, letters
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortStrategy::Natural => "natural",
            SortStrategy::Numeric => "numeric",
            SortStrategy::Logical => "logical",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}
