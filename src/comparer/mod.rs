//! Comparison strategies for chapter numbers and library file names.
//!
//! All comparers are stateless and implement [`SortComparer`], so any of them
//! can be handed to a sorting routine, shared between threads, or reversed.
//! [`logical_compare`] is additionally exposed as a bare function for
//! `slice::sort_by`.

use std::borrow::Borrow;
use std::cmp::Ordering;

pub mod chapter;
pub mod logical;
pub mod natural;
pub mod numeric;
pub mod token;

pub use chapter::{ChapterNumber, ChapterSortComparer, SpecialPlacement};
pub use logical::{StringLogicalComparer, logical_compare};
pub use natural::{NaturalSortComparer, NaturalSortKey};
pub use numeric::NumericComparer;

/// A total order over `T`.
///
/// Implementations must be antisymmetric, transitive and must only return
/// [`Ordering::Equal`] for values that are interchangeable in a sorted list.
///
/// The string comparers implement this for every `S: AsRef<str>`, so calls
/// where nothing pins down the compared type need it named:
///
/// ```
/// use shiori::prelude::*;
///
/// let mut names = vec!["x10.jpg".to_string(), "x9.jpg".to_string()];
/// SortComparer::<str>::sort(&NaturalSortComparer::new(), &mut names);
/// assert_eq!(names, ["x9.jpg", "x10.jpg"]);
/// ```
pub trait SortComparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Stable sort of `items` in this comparer's order.
    fn sort<X: Borrow<T>>(&self, items: &mut [X]) {
        items.sort_by(|a, b| self.compare(a.borrow(), b.borrow()));
    }

    /// This comparer in descending order.
    fn reversed(self) -> Reversed<Self>
    where
        Self: Sized,
    {
        Reversed(self)
    }

    /// Like [`compare`](SortComparer::compare), with missing values sorting first.
    fn compare_option(&self, a: Option<&T>, b: Option<&T>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }
}

/// Flips any comparer into descending order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: SortComparer<T>> SortComparer<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T: ?Sized, C: SortComparer<T> + ?Sized> SortComparer<T> for &C {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}
