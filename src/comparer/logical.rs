//! Explorer-style logical ordering, exposed as a plain function.
//!
//! Names that start with a symbol come before anything starting with a letter
//! or a digit, which is how a `!cover.png` ends up as the first page of a
//! chapter. After that, numbers sort before symbols and symbols before
//! letters at every position.

use std::cmp::Ordering;

use super::{Reversed, SortComparer};
use super::token::{Unit, compare_units};

/// Relative weight of a unit class: numbers, then symbols, then letters.
fn rank(unit: &Unit<'_>) -> u8 {
    match unit {
        Unit::Number(_) => 0,
        Unit::Char(c) if c.is_alphabetic() => 2,
        Unit::Char(_) => 1,
    }
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn logical_unit_cmp(x: &Unit<'_>, y: &Unit<'_>) -> Ordering {
    rank(x).cmp(&rank(y)).then_with(|| match (x, y) {
        // On equal value the longer run, i.e. the one with more leading zeros, goes first
        (Unit::Number(a), Unit::Number(b)) => a
            .cmp_value(b)
            .then_with(|| b.leading_zeros().cmp(&a.leading_zeros())),
        (Unit::Char(c), Unit::Char(d)) if c.is_alphabetic() => lower(*c).cmp(&lower(*d)),
        (Unit::Char(c), Unit::Char(d)) => c.cmp(d),
        // Equal ranks always pair units of the same kind
        _ => Ordering::Equal,
    })
}

/// Compares two names in logical order.
///
/// This is a free function so it can be passed straight to a sort:
///
/// ```
/// use shiori::comparer::logical_compare;
///
/// let mut pages = vec!["a.jpg", "aaa.jpg", "1.jpg", "!cover.png"];
/// pages.sort_by(logical_compare);
/// assert_eq!(pages, vec!["!cover.png", "1.jpg", "a.jpg", "aaa.jpg"]);
/// ```
pub fn logical_compare<S: AsRef<str> + ?Sized>(a: &S, b: &S) -> Ordering {
    let (a, b) = (a.as_ref(), b.as_ref());

    let leading = match (a.chars().next(), b.chars().next()) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        // false < true, so symbol-led names come first
        (Some(x), Some(y)) => x.is_alphanumeric().cmp(&y.is_alphanumeric()),
    };

    leading
        .then_with(|| compare_units(a, b, logical_unit_cmp))
        .then_with(|| a.cmp(b))
}

/// [`logical_compare`] as a [`SortComparer`] value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StringLogicalComparer;

impl StringLogicalComparer {
    /// Same as [`SortComparer::reversed`], without naming the compared type.
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<S: AsRef<str> + ?Sized> SortComparer<S> for StringLogicalComparer {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        logical_compare(a, b)
    }
}
