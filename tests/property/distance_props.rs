//! Metric properties of the distance functions, plus differential checks
//! against strsim's reference implementations.

use bkspell::{damerau_levenshtein, levenshtein};
use proptest::prelude::*;

/// Short words over a small alphabet, so transpositions and repeats are common.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abcd]{0,7}").unwrap()
}

/// Words mixing ASCII with multi-byte characters.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ü', 'ō', 'ట', 'ె']),
        0..6,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Differential test: agrees with strsim's unrestricted Damerau-Levenshtein.
    #[test]
    fn prop_matches_reference_damerau(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), strsim::damerau_levenshtein(&a, &b));
    }

    #[test]
    fn prop_matches_reference_damerau_unicode(
        a in unicode_word_strategy(),
        b in unicode_word_strategy(),
    ) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), strsim::damerau_levenshtein(&a, &b));
    }

    /// Differential test: agrees with strsim's Levenshtein.
    #[test]
    fn prop_matches_reference_levenshtein(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_identity(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(damerau_levenshtein(&a, &a), 0);
        prop_assert_eq!(damerau_levenshtein(&a, &b) == 0, a == b);
    }

    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), damerau_levenshtein(&b, &a));
    }

    #[test]
    fn prop_triangle_inequality(
        a in word_strategy(),
        b in word_strategy(),
        c in word_strategy(),
    ) {
        let ab = damerau_levenshtein(&a, &b);
        let bc = damerau_levenshtein(&b, &c);
        let ac = damerau_levenshtein(&a, &c);
        prop_assert!(ac <= ab + bc, "d({a},{c})={ac} > d({a},{b})={ab} + d({b},{c})={bc}");
    }

    /// Bounds: at least the length gap, at most the longer length, never
    /// more than Levenshtein.
    #[test]
    fn prop_bounds(a in word_strategy(), b in word_strategy()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = damerau_levenshtein(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
        prop_assert!(d <= levenshtein(&a, &b));
    }

    /// Swapping one adjacent pair costs at most one edit.
    #[test]
    fn prop_adjacent_swap_costs_one(a in "[abcd]{2,7}", i in 0usize..6) {
        let mut chars: Vec<char> = a.chars().collect();
        let i = i % (chars.len() - 1);
        chars.swap(i, i + 1);
        let swapped: String = chars.into_iter().collect();
        prop_assert!(damerau_levenshtein(&a, &swapped) <= 1);
    }
}
