//! Ordering of parsed chapter and volume numbers around a sentinel value.
//!
//! The parser that turns file names into numbers emits one reserved value
//! when no number could be found (see [`crate::numbering`]). Listings either
//! want those entries grouped before every numbered chapter or after them;
//! [`ChapterSortComparer`] handles both with the same numeric core.

use std::cmp::Ordering;

use super::{Reversed, SortComparer};
use crate::numbering::{DEFAULT_CHAPTER_NUMBER, SPECIAL_VOLUME_NUMBER};

/// Where entries carrying the sentinel end up.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "specta", derive(specta::Type))]
pub enum SpecialPlacement {
    First,
    #[default]
    Last,
}

/// A chapter or volume number the comparer can order.
///
/// Implemented for every primitive integer and float. Integers wider than
/// 53 bits are compared after conversion to `f64`, so ids above 2^53 that
/// differ only in their low bits compare equal.
pub trait ChapterNumber: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_chapter_number {
    ($($t:ty),*) => {
        $(
            impl ChapterNumber for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_chapter_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Ascending numeric order with one sentinel value pushed to either end.
///
/// Any [`ChapterNumber`] can be compared, so the same comparer sorts `i32`
/// or `u64` volume numbers and `f32`/`f64` chapter numbers alike. `NaN`
/// is treated as equal to itself and greater than every other ordinary
/// number, which keeps the order total.
///
/// ```
/// use shiori::prelude::*;
///
/// let mut chapters = vec![1, 2, 0];
/// chapters.sort_by(|a, b| ChapterSortComparer::specials_first(0.0).compare(a, b));
/// assert_eq!(chapters, vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChapterSortComparer {
    sentinel: f64,
    placement: SpecialPlacement,
}

impl ChapterSortComparer {
    /// Chapters without a parsed number go last.
    pub const DEFAULT_LAST: Self = Self::specials_last(DEFAULT_CHAPTER_NUMBER);
    /// Chapters without a parsed number go first.
    pub const DEFAULT_FIRST: Self = Self::specials_first(DEFAULT_CHAPTER_NUMBER);
    /// Legacy numbering where `0` meant "no chapter".
    pub const ZERO_FIRST: Self = Self::specials_first(0.0);
    pub const ZERO_LAST: Self = Self::specials_last(0.0);
    /// The specials volume goes after every numbered volume.
    pub const SPECIALS_LAST: Self = Self::specials_last(SPECIAL_VOLUME_NUMBER);

    pub const fn new(sentinel: f64, placement: SpecialPlacement) -> Self {
        Self {
            sentinel,
            placement,
        }
    }

    pub const fn specials_first(sentinel: f64) -> Self {
        Self::new(sentinel, SpecialPlacement::First)
    }

    pub const fn specials_last(sentinel: f64) -> Self {
        Self::new(sentinel, SpecialPlacement::Last)
    }

    /// Same as [`SortComparer::reversed`], without naming the compared type.
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }

    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    pub fn placement(&self) -> SpecialPlacement {
        self.placement
    }

    pub fn is_sentinel(&self, n: f64) -> bool {
        n == self.sentinel || (n.is_nan() && self.sentinel.is_nan())
    }

    fn compare_f64(&self, a: f64, b: f64) -> Ordering {
        let special = match self.placement {
            SpecialPlacement::First => Ordering::Less,
            SpecialPlacement::Last => Ordering::Greater,
        };

        match (self.is_sentinel(a), self.is_sentinel(b)) {
            (true, true) => Ordering::Equal,
            (true, false) => special,
            (false, true) => special.reverse(),
            (false, false) => ascending(a, b),
        }
    }
}

impl Default for ChapterSortComparer {
    fn default() -> Self {
        Self::DEFAULT_LAST
    }
}

fn ascending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl<N: ChapterNumber> SortComparer<N> for ChapterSortComparer {
    fn compare(&self, a: &N, b: &N) -> Ordering {
        self.compare_f64(a.to_f64(), b.to_f64())
    }
}
