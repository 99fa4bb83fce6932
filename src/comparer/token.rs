//! Splitting of file and chapter names into text and digit runs.
//!
//! Every string comparer in this crate walks two names in lock-step. The
//! [`Tokens`] iterator yields the maximal text/digit runs of a name, and
//! [`Units`] flattens those runs into single characters and whole numbers,
//! which is the granularity the comparers actually compare at.

use std::cmp::Ordering;
use std::str::Chars;

/// Ordinal position a number takes when compared against a plain character.
///
/// Numbers sit where the ASCII digits sit, so `"!1"` < `"1"` < `"a"`.
pub const NUMBER_BAND: char = '0';

/// Returns the decimal value of `c` if it is an ASCII or fullwidth digit.
pub fn digit_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        '\u{FF10}'..='\u{FF19}' => Some(c as u32 - 0xFF10),
        _ => None,
    }
}

/// Whether `c` starts or continues a number.
pub fn is_digit(c: char) -> bool {
    digit_value(c).is_some()
}

/// A maximal run of digits, compared by value without ever parsing it into a
/// fixed-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digits<'a> {
    raw: &'a str,
}

impl<'a> Digits<'a> {
    /// The digits exactly as they appear in the name.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    fn values(self) -> impl Iterator<Item = u32> + 'a {
        self.raw.chars().filter_map(digit_value)
    }

    /// Number of digits in the run, leading zeros included.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn leading_zeros(&self) -> usize {
        self.values().take_while(|d| *d == 0).count()
    }

    /// Number of digits left once leading zeros are stripped.
    pub fn significant(&self) -> usize {
        self.len() - self.leading_zeros()
    }

    /// Compares two runs by numeric value. `"007"` and `"7"` are equal.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.significant().cmp(&other.significant()).then_with(|| {
            self.values()
                .skip(self.leading_zeros())
                .cmp(other.values().skip(other.leading_zeros()))
        })
    }
}

/// One maximal run of a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Number(Digits<'a>),
}

impl<'a> Token<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Text(text) => text,
            Token::Number(digits) => digits.as_str(),
        }
    }
}

/// Splits `s` at the boundary between its leading run and the rest.
fn split_run(s: &str, numeric: bool) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| is_digit(*c) != numeric)
        .map_or(s.len(), |(i, _)| i);
    s.split_at(end)
}

/// Iterator over the alternating text and digit runs of a name.
///
/// Concatenating the yielded tokens gives back the original string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let numeric = is_digit(first);
        let (run, rest) = split_run(self.rest, numeric);
        self.rest = rest;

        Some(if numeric {
            Token::Number(Digits { raw: run })
        } else {
            Token::Text(run)
        })
    }
}

pub fn tokens(s: &str) -> Tokens<'_> {
    Tokens { rest: s }
}

/// A single comparison step: one character, or a whole digit run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit<'a> {
    Char(char),
    Number(Digits<'a>),
}

/// Iterator over the units of a name: the characters of each text run, and
/// each digit run as a whole.
#[derive(Debug, Clone)]
pub struct Units<'a> {
    tokens: Tokens<'a>,
    text: Chars<'a>,
}

impl<'a> Iterator for Units<'a> {
    type Item = Unit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(c) = self.text.next() {
            return Some(Unit::Char(c));
        }
        match self.tokens.next()? {
            Token::Number(digits) => Some(Unit::Number(digits)),
            Token::Text(text) => {
                // Text runs are never empty
                self.text = text.chars();
                self.text.next().map(Unit::Char)
            }
        }
    }
}

pub fn units(s: &str) -> Units<'_> {
    Units {
        tokens: tokens(s),
        text: "".chars(),
    }
}

/// Walks both names unit by unit until `unit_cmp` finds a difference.
///
/// A name that runs out first sorts first, so the empty string precedes
/// everything else.
pub(crate) fn compare_units<'a, F>(a: &'a str, b: &'a str, mut unit_cmp: F) -> Ordering
where
    F: FnMut(&Unit<'a>, &Unit<'a>) -> Ordering,
{
    let mut a_units = units(a);
    let mut b_units = units(b);
    loop {
        match (a_units.next(), b_units.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = unit_cmp(&x, &y);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Ordinal unit comparison after mapping every non-digit through `fold`.
///
/// `fold` must never map a non-digit to a digit, otherwise a number and a
/// character could compare equal.
pub(crate) fn ordinal_unit_cmp<F>(x: &Unit<'_>, y: &Unit<'_>, fold: F) -> Ordering
where
    F: Fn(char) -> char,
{
    match (x, y) {
        (Unit::Number(a), Unit::Number(b)) => a.cmp_value(b),
        (Unit::Number(_), Unit::Char(c)) => NUMBER_BAND.cmp(&fold(*c)),
        (Unit::Char(c), Unit::Number(_)) => fold(*c).cmp(&NUMBER_BAND),
        (Unit::Char(c), Unit::Char(d)) => fold(*c).cmp(&fold(*d)),
    }
}
