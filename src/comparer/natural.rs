//! General purpose natural ordering for archive, chapter and page names.

use std::cmp::Ordering;
use std::fmt;

use super::{Reversed, SortComparer};
use super::token::{compare_units, ordinal_unit_cmp};
use crate::types::SortDirection;

/// Case and separator folding applied to every non-digit character.
///
/// Spaces, underscores and hyphens all separate words in scanned file names,
/// so they compare equal to each other.
fn fold(c: char) -> char {
    match c {
        ' ' | '_' | '-' => ' ',
        c => c.to_lowercase().next().unwrap_or(c),
    }
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    compare_units(a, b, |x, y| ordinal_unit_cmp(x, y, fold))
}

/// Natural order comparer for file and archive names.
///
/// Digit runs compare by value, text compares case-insensitively with word
/// separators treated alike, and a name that is a prefix of another sorts
/// first. Names that only differ in case, separators or leading zeros are
/// ordered by their raw text, so distinct names never compare equal.
///
/// ```
/// use shiori::prelude::*;
///
/// let mut names = vec!["3and4.cbz", "The World God Only Knows - Oneshot.cbz", "5.cbz", "1and2.cbz"];
/// names.sort_by(|a, b| NaturalSortComparer::new().compare(a, b));
/// assert_eq!(names, vec!["1and2.cbz", "3and4.cbz", "5.cbz", "The World God Only Knows - Oneshot.cbz"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalSortComparer {
    direction: SortDirection,
}

impl NaturalSortComparer {
    pub const fn new() -> Self {
        Self {
            direction: SortDirection::Ascending,
        }
    }

    pub const fn descending() -> Self {
        Self {
            direction: SortDirection::Descending,
        }
    }

    pub const fn with_direction(direction: SortDirection) -> Self {
        Self { direction }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Same as [`SortComparer::reversed`], without naming the compared type.
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<S: AsRef<str> + ?Sized> SortComparer<S> for NaturalSortComparer {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        let (a, b) = (a.as_ref(), b.as_ref());
        let ordering = compare_folded(a, b).then_with(|| a.cmp(b));
        self.direction.apply(ordering)
    }
}

/// Owned sort key ordering exactly like an ascending [`NaturalSortComparer`].
///
/// The folded form is computed once, which makes it the better choice for
/// `sort_by_cached_key` on long lists.
#[derive(Clone, PartialEq, Eq)]
pub struct NaturalSortKey {
    original: String,
    folded: String,
}

impl NaturalSortKey {
    pub fn new(s: impl Into<String>) -> Self {
        let original = s.into();
        let folded = original.chars().map(fold).collect();
        Self { original, folded }
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn into_original(self) -> String {
        self.original
    }
}

impl From<&str> for NaturalSortKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NaturalSortKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Ord for NaturalSortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Already folded, so the plain ordinal unit comparison is enough
        compare_units(&self.folded, &other.folded, |x, y| ordinal_unit_cmp(x, y, |c| c))
            .then_with(|| self.original.cmp(&other.original))
    }
}

impl PartialOrd for NaturalSortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for NaturalSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NaturalSortKey")
            .field("original", &self.original)
            .field("folded", &self.folded)
            .finish()
    }
}
