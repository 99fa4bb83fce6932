use std::cmp::Ordering;

use super::{Reversed, SortComparer};
use super::token::{compare_units, ordinal_unit_cmp};

/// Orders names by comparing digit runs numerically and everything else by
/// ordinal, case-sensitive character value.
///
/// This is the comparer used when a list of files is handed out in the order
/// it will be packed or downloaded, where `"x2.jpg"` must precede `"x10.jpg"`
/// but no other normalisation is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericComparer;

impl NumericComparer {
    pub const fn new() -> Self {
        Self
    }

    /// Same as [`SortComparer::reversed`], without naming the compared type.
    pub const fn reversed(self) -> Reversed<Self> {
        Reversed(self)
    }
}

impl<S: AsRef<str> + ?Sized> SortComparer<S> for NumericComparer {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        let (a, b) = (a.as_ref(), b.as_ref());
        compare_units(a, b, |x, y| ordinal_unit_cmp(x, y, |c| c)).then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(a: &str, b: &str) -> Ordering {
        NumericComparer.compare(a, b)
    }

    fn lt(a: &str, b: &str) {
        assert_eq!(compare(a, b), Ordering::Less, "{a:?} < {b:?}");
        assert_eq!(compare(b, a), Ordering::Greater, "{b:?} > {a:?}");
    }

    #[test]
    fn digits_compare_by_value() {
        lt("x1.jpg", "x3.jpg");
        lt("x4.jpg", "x10.jpg");
        lt("x10.jpg", "x11.jpg");
        lt("9", "10");
    }

    #[test]
    fn slash_sorts_after_dot() {
        lt("10.jpg", "10/001.jpg");
    }

    #[test]
    fn ordinal_characters() {
        lt("B.jpg", "a.jpg");
        lt("!cover.png", "1.jpg");
        lt("1.jpg", "a.jpg");
    }

    #[test]
    fn empty_and_prefix() {
        assert_eq!(compare("", ""), Ordering::Equal);
        lt("", "a");
        lt("abc", "abcd");
        lt("abc", "abc1");
    }

    #[test]
    fn equal_values_tie_break_on_raw_text() {
        lt("01", "1");
        lt("x01.jpg", "x1.jpg");
        lt("a01b", "a1c");
        assert_eq!(compare("x01.jpg", "x01.jpg"), Ordering::Equal);
    }

    #[test]
    fn fullwidth_digits_are_numbers() {
        lt("第２話", "第１０話");
    }

    #[test]
    fn sorts_scenario() {
        let mut files = vec!["x1.jpg", "x10.jpg", "x3.jpg", "x4.jpg", "x11.jpg"];
        files.sort_by(|a, b| NumericComparer.compare(a, b));
        assert_eq!(files, vec!["x1.jpg", "x3.jpg", "x4.jpg", "x10.jpg", "x11.jpg"]);
    }
}
