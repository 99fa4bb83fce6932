//! Total order properties for every comparer over seeded random inputs.

use shiori::prelude::*;

mod common;
use common::{SAMPLE_SIZE, random_chapter_numbers, random_names, rng, shuffled};

fn check_total_order<T, C>(comparer: &C, values: &[T], label: &str)
where
    T: std::fmt::Debug,
    C: SortComparer<T>,
{
    for a in values {
        assert_eq!(comparer.compare(a, a), Ordering::Equal, "{label}: reflexive {a:?}");

        for b in values {
            let ab = comparer.compare(a, b);
            let ba = comparer.compare(b, a);
            assert_eq!(ab, ba.reverse(), "{label}: antisymmetric {a:?} {b:?}");

            if ab == Ordering::Greater {
                continue;
            }
            for c in values {
                if comparer.compare(b, c) != Ordering::Greater {
                    assert_ne!(
                        comparer.compare(a, c),
                        Ordering::Greater,
                        "{label}: transitive {a:?} <= {b:?} <= {c:?}"
                    );
                }
            }
        }
    }
}

fn check_sorting<T, C>(comparer: &C, values: &[T], label: &str)
where
    T: Clone + std::fmt::Debug,
    C: SortComparer<T>,
{
    let mut rng = rng();
    let mut expected = values.to_vec();
    expected.sort_by(|a, b| comparer.compare(a, b));

    // Sorting the sorted output changes nothing
    let mut again = expected.clone();
    again.sort_by(|a, b| comparer.compare(a, b));
    assert_same(comparer, &again, &expected, label);

    for _ in 0..5 {
        let mut permuted = shuffled(values, &mut rng);
        permuted.sort_by(|a, b| comparer.compare(a, b));
        assert_same(comparer, &permuted, &expected, label);
    }
}

/// Element-wise equality under the comparer, so `NaN` and `-0.0` compare
/// the way the comparer sees them.
fn assert_same<T, C>(comparer: &C, actual: &[T], expected: &[T], label: &str)
where
    T: std::fmt::Debug,
    C: SortComparer<T>,
{
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(
            comparer.compare(a, e),
            Ordering::Equal,
            "{label}: {actual:?} != {expected:?}"
        );
    }
}

#[test]
fn test_natural_sort_total_order() {
    let names = random_names(SAMPLE_SIZE);
    check_total_order(&NaturalSortComparer::new(), &names, "natural");
    check_total_order(&NaturalSortComparer::descending(), &names, "natural desc");
    check_sorting(&NaturalSortComparer::new(), &names, "natural");
}

#[test]
fn test_numeric_total_order() {
    let names = random_names(SAMPLE_SIZE);
    check_total_order(&NumericComparer, &names, "numeric");
    check_sorting(&NumericComparer, &names, "numeric");
}

#[test]
fn test_logical_total_order() {
    let names = random_names(SAMPLE_SIZE);
    check_total_order(&StringLogicalComparer, &names, "logical");
    check_sorting(&StringLogicalComparer, &names, "logical");
}

#[test]
fn test_distinct_names_never_compare_equal() {
    let names = random_names(SAMPLE_SIZE);
    for a in &names {
        for b in &names {
            if a != b {
                assert_ne!(NaturalSortComparer::new().compare(a, b), Ordering::Equal);
                assert_ne!(NumericComparer.compare(a, b), Ordering::Equal);
                assert_ne!(logical_compare(a, b), Ordering::Equal);
            }
        }
    }
}

#[test]
fn test_chapter_total_order() {
    let numbers = random_chapter_numbers(SAMPLE_SIZE);
    let comparers = [
        ("default last", ChapterSortComparer::DEFAULT_LAST),
        ("default first", ChapterSortComparer::DEFAULT_FIRST),
        ("zero first", ChapterSortComparer::ZERO_FIRST),
        ("zero last", ChapterSortComparer::ZERO_LAST),
        ("specials last", ChapterSortComparer::SPECIALS_LAST),
        ("nan sentinel", ChapterSortComparer::specials_first(f64::NAN)),
    ];
    for (label, comparer) in comparers {
        check_total_order(&comparer, &numbers, label);
        check_sorting(&comparer, &numbers, label);
    }
}

#[test]
fn test_chapter_sentinel_at_the_ends() {
    let numbers = random_chapter_numbers(SAMPLE_SIZE);

    let mut last = numbers.clone();
    last.sort_by(|a, b| ChapterSortComparer::DEFAULT_LAST.compare(a, b));
    assert_eq!(last.last(), Some(&DEFAULT_CHAPTER_NUMBER));
    assert_ne!(last.first(), Some(&DEFAULT_CHAPTER_NUMBER));

    let mut first = numbers;
    first.sort_by(|a, b| ChapterSortComparer::DEFAULT_FIRST.compare(a, b));
    assert_eq!(first[0], DEFAULT_CHAPTER_NUMBER);
    assert_eq!(first[1], DEFAULT_CHAPTER_NUMBER);
    assert_eq!(first[2], f64::NEG_INFINITY);
}
