//! Well-known chapter and volume numbers and extraction of numbers from names.
//!
//! The comparers never assume a particular sentinel; these constants are the
//! values the library scanner assigns and are what the shared
//! [`ChapterSortComparer`](crate::comparer::ChapterSortComparer) instances use.

use lazy_static::lazy_static;
use regex::Regex;

/// Assigned to a chapter when no chapter number could be parsed.
pub const DEFAULT_CHAPTER_NUMBER: f64 = -100_000.0;
/// Volume that holds chapters which belong to no volume.
pub const LOOSE_LEAF_VOLUME_NUMBER: f64 = -100_000.0;
/// Volume that holds specials (bonus chapters, omake, artbooks).
pub const SPECIAL_VOLUME_NUMBER: f64 = 100_000.0;

lazy_static! {
    /// Default Regex for extracting numeric values from chapter/page names.
    /// Matches "001", "1", "1.5" etc.
    pub static ref DEFAULT_NUMBER_REGEX: Regex = Regex::new(r"\d+(?:\.\d+)?").unwrap();
}

/// Extracts the last number in `name` using `regex`.
///
/// If the regex has a capture group, group 1 is parsed, otherwise the whole
/// match. The last match is used since it is usually the most specific one
/// (`"Vol 2 Ch 15"` → `15`).
pub fn extract_number(name: &str, regex: &Regex) -> Option<f64> {
    regex
        .captures_iter(name)
        .last()
        .and_then(|cap| cap.get(1).or_else(|| cap.get(0)))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Like [`extract_number`], falling back to `sentinel` when nothing matches.
pub fn chapter_number_or(name: &str, regex: &Regex, sentinel: f64) -> f64 {
    extract_number(name, regex).unwrap_or_else(|| {
        log::debug!("No chapter number in {name:?}, using {sentinel}");
        sentinel
    })
}
