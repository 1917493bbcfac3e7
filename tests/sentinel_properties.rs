//! Property tests for sentinel normalization.
//!
//! Random arrays mix the sentinel with ordinary finite samples; the
//! element-wise rule, shape preservation and idempotence must hold for all
//! of them.

use ndarray::{Array1, Array2};
use petrophys::sentinel::{
    convert_value_to_nan, convert_value_to_nan_in_place, count_sentinels, normalize,
    SentinelPolicy, DEFAULT_SENTINEL,
};
use proptest::prelude::*;

/// Equality where NaN == NaN.
fn same(x: f64, y: f64) -> bool {
    (x.is_nan() && y.is_nan()) || x == y
}

fn arb_sample(sentinel: f64) -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(sentinel),
        4 => -1.0e6f64..1.0e6,
    ]
}

fn arb_log(sentinel: f64) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_sample(sentinel), 0..200)
}

fn arb_table() -> impl Strategy<Value = Array2<f64>> {
    (0usize..8, 0usize..8).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(arb_sample(DEFAULT_SENTINEL), rows * cols).prop_map(move |v| {
            Array2::from_shape_vec((rows, cols), v).unwrap_or_else(|_| Array2::zeros((0, 0)))
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn output_has_input_length(samples in arb_log(DEFAULT_SENTINEL)) {
        let input = Array1::from(samples);
        prop_assert_eq!(normalize(&input).len(), input.len());
    }

    #[test]
    fn nan_exactly_where_sentinel(samples in arb_log(DEFAULT_SENTINEL)) {
        let input = Array1::from(samples);
        let out = normalize(&input);
        for (x, y) in input.iter().zip(out.iter()) {
            if *x == DEFAULT_SENTINEL {
                prop_assert!(y.is_nan());
            } else {
                prop_assert_eq!(x, y);
            }
        }
    }

    #[test]
    fn custom_sentinel_rule(sentinel in -10.0f64..10.0, samples in prop::collection::vec(-10.0f64..10.0, 0..50)) {
        let mut samples = samples;
        // Plant the sentinel at every third position
        for v in samples.iter_mut().step_by(3) {
            *v = sentinel;
        }
        let input = Array1::from(samples);
        let out = convert_value_to_nan(&input, sentinel);
        prop_assert_eq!(out.iter().filter(|y| y.is_nan()).count(), count_sentinels(&input, sentinel));
        for (x, y) in input.iter().zip(out.iter()) {
            prop_assert_eq!(*x == sentinel, y.is_nan());
        }
    }

    #[test]
    fn normalization_is_idempotent(samples in arb_log(DEFAULT_SENTINEL)) {
        let input = Array1::from(samples);
        let once = normalize(&input);
        let twice = normalize(&once);
        prop_assert!(once.iter().zip(twice.iter()).all(|(a, b)| same(*a, *b)));
    }

    #[test]
    fn two_dimensional_shape_preserved(table in arb_table()) {
        let out = normalize(&table);
        prop_assert_eq!(out.dim(), table.dim());
        for (x, y) in table.iter().zip(out.iter()) {
            let element_ok = if *x == DEFAULT_SENTINEL { y.is_nan() } else { x == y };
            prop_assert!(element_ok, "input {} became {}", x, y);
        }
    }

    #[test]
    fn in_place_agrees_with_pure(samples in arb_log(DEFAULT_SENTINEL)) {
        let input = Array1::from(samples);
        let pure = convert_value_to_nan(&input, DEFAULT_SENTINEL);
        let mut mutated = input.clone();
        let replaced = convert_value_to_nan_in_place(&mut mutated, DEFAULT_SENTINEL);
        prop_assert_eq!(replaced, count_sentinels(&input, DEFAULT_SENTINEL));
        prop_assert!(pure.iter().zip(mutated.iter()).all(|(a, b)| same(*a, *b)));
    }

    #[test]
    fn default_policy_agrees_with_normalize(table in arb_table()) {
        let via_policy = SentinelPolicy::default().apply(&table);
        let via_fn = normalize(&table);
        prop_assert!(via_policy.iter().zip(via_fn.iter()).all(|(a, b)| same(*a, *b)));
    }

    #[test]
    fn f32_policy_agrees_with_direct(sentinel in -10.0f64..10.0, samples in prop::collection::vec(-10.0f32..10.0, 0..50)) {
        let narrowed = sentinel as f32;
        let mut samples = samples;
        for v in samples.iter_mut().step_by(4) {
            *v = narrowed;
        }
        let input = Array1::from(samples);
        let direct = convert_value_to_nan(&input, narrowed);
        let via_policy = SentinelPolicy::new(sentinel).apply(&input);
        prop_assert_eq!(via_policy.iter().filter(|y| y.is_nan()).count(), count_sentinels(&input, narrowed));
        prop_assert!(direct
            .iter()
            .zip(via_policy.iter())
            .all(|(a, b)| (a.is_nan() && b.is_nan()) || a == b));
    }

    #[test]
    fn zero_tolerance_equals_exact(samples in arb_log(DEFAULT_SENTINEL)) {
        let input = Array1::from(samples);
        let exact = SentinelPolicy::default().apply(&input);
        let tolerant = SentinelPolicy::default().with_tolerance(0.0).apply(&input);
        prop_assert!(exact.iter().zip(tolerant.iter()).all(|(a, b)| same(*a, *b)));
    }
}

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn documented_scenarios() {
    let out = normalize(&Array1::from(vec![1.0, 2.0, -999.25, 4.0, -999.25]));
    let expected = [1.0, 2.0, f64::NAN, 4.0, f64::NAN];
    assert!(out.iter().zip(expected).all(|(a, b)| same(*a, b)));

    let out = convert_value_to_nan(&Array1::from(vec![1.0, 2.0, 0.0, 4.0, 0.0]), 0.0);
    assert!(out.iter().zip(expected).all(|(a, b)| same(*a, b)));

    let table = ndarray::array![[1.0, 2.0, -999.25], [4.0, -999.25, 6.0]];
    let out = normalize(&table);
    let expected = ndarray::array![[1.0, 2.0, f64::NAN], [4.0, f64::NAN, 6.0]];
    assert_eq!(out.dim(), (2, 3));
    assert!(out.iter().zip(expected.iter()).all(|(a, b)| same(*a, *b)));

    let empty: Array1<f64> = Array1::from(Vec::new());
    assert!(normalize(&empty).is_empty());
}
