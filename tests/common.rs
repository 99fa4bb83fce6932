//! Common test utilities for the shiori crate.
//!
//! Provides seeded random name generation for the ordering property tests
//! and assertion helpers shared by the fixture tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use shiori::prelude::*;

/// Fixed seed so property failures are reproducible.
#[allow(dead_code)]
pub const SEED: u64 = 0x5E1_0B00C;
#[allow(dead_code)]
pub const SAMPLE_SIZE: usize = 80;

/// Characters biased towards what shows up in real file names: digits
/// (including fullwidth and leading zeros), mixed case, separators and
/// punctuation that sits on both sides of `'0'` in code point order.
#[allow(dead_code)]
const CHARACTERS: &[char] = &[
    '0', '0', '1', '2', '5', '9', '0', '1', '０', '９', 'a', 'A', 'b', 'B', 'z', 'Z', 'é', 'É', ' ',
    '_', '-', '.', '!', '#', '(', ')', '[', ']', '~', '/', '話', 'ß',
];

#[allow(dead_code)]
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// A random name of 0..=12 characters.
#[allow(dead_code)]
pub fn random_name(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..=12);
    (0..len)
        .map(|_| CHARACTERS[rng.gen_range(0..CHARACTERS.len())])
        .collect()
}

/// Random names plus a few hand-picked ones that share prefixes, so equal
/// folded keys and prefix relations actually occur.
#[allow(dead_code)]
pub fn random_names(count: usize) -> Vec<String> {
    let mut rng = rng();
    let mut names: Vec<String> = (0..count).map(|_| random_name(&mut rng)).collect();
    names.extend(
        [
            "", "a", "A", "a1", "a01", "a001", "a 1", "a_1", "a-1", "a1b", "a10", "a２", "!a",
            "0", "00", "x", "X", "x.", "x0",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    names
}

/// Random chapter numbers including the usual sentinels and NaN.
#[allow(dead_code)]
pub fn random_chapter_numbers(count: usize) -> Vec<f64> {
    let mut rng = rng();
    let mut numbers: Vec<f64> = (0..count)
        .map(|_| (rng.gen_range(-20..200) as f64) / 2.0)
        .collect();
    numbers.extend([
        DEFAULT_CHAPTER_NUMBER,
        DEFAULT_CHAPTER_NUMBER,
        SPECIAL_VOLUME_NUMBER,
        0.0,
        -0.0,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ]);
    numbers
}

#[allow(dead_code)]
pub fn shuffled<T: Clone>(items: &[T], rng: &mut StdRng) -> Vec<T> {
    let mut items = items.to_vec();
    items.shuffle(rng);
    items
}

/// Sorts `input` with `comparer` and checks the result is `expected`.
#[allow(dead_code)]
pub fn assert_sorted<C: SortComparer<str>>(comparer: C, input: &[&str], expected: &[&str]) {
    let mut actual = input.to_vec();
    actual.sort_by(|a, b| comparer.compare(*a, *b));
    assert_eq!(actual, expected, "input: {input:?}");
}

#[allow(dead_code)]
pub fn assert_less<C: SortComparer<str>>(comparer: &C, a: &str, b: &str) {
    assert_eq!(comparer.compare(a, b), Ordering::Less, "{a:?} < {b:?}");
    assert_eq!(comparer.compare(b, a), Ordering::Greater, "{b:?} > {a:?}");
}
