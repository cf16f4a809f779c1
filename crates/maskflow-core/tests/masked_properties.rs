//! Property-based tests for the masked operations.
//!
//! Key invariants tested:
//! - masked reductions equal the plain reduction of the selected elements
//! - masked softmax rows are zero where masked and sum to one elsewhere
//! - fully masked rows give the documented degenerate values
//! - masking with an all-true mask is the unmasked operation
//! - without a mask every operation is the plain engine operation

use approx::abs_diff_eq;
use maskflow_core::ops::masked::{masked_max, masked_mean, masked_min, masked_softmax, masked_sum};
use maskflow_core::ops::{max, mean, min, softmax, sum};
use maskflow_core::Tensor;
use proptest::prelude::*;

const EPS: f64 = 1e-6;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Strategy for a `rows x cols` matrix of values with a mask of the same shape
fn arb_masked_matrix() -> impl Strategy<Value = (usize, usize, Vec<f64>, Vec<bool>)> {
    (1usize..6, 1usize..8).prop_flat_map(|(rows, cols)| {
        let n = rows * cols;
        (
            Just(rows),
            Just(cols),
            prop::collection::vec(-10.0f64..10.0, n),
            prop::collection::vec(any::<bool>(), n),
        )
    })
}

fn tensors(rows: usize, cols: usize, data: Vec<f64>, mask: Vec<bool>) -> (Tensor<f64>, Tensor<bool>) {
    (
        Tensor::from_vec(data, &[rows, cols]).unwrap(),
        Tensor::from_vec(mask, &[rows, cols]).unwrap(),
    )
}

fn selected_row(data: &[f64], mask: &[bool], cols: usize, i: usize) -> Vec<f64> {
    data[i * cols..(i + 1) * cols]
        .iter()
        .zip(&mask[i * cols..(i + 1) * cols])
        .filter(|&(_, &keep)| keep)
        .map(|(&v, _)| v)
        .collect()
}

// ── reductions ───────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Per-row sum and mean equal those of the selected elements.
    #[test]
    fn prop_row_sum_mean_match_selection((rows, cols, data, mask) in arb_masked_matrix()) {
        let (x, m) = tensors(rows, cols, data.clone(), mask.clone());
        let sums = masked_sum(&x, Some(&m), Some(&[-1]), false).unwrap();
        let means = masked_mean(&x, Some(&m), Some(&[-1]), false).unwrap();

        for i in 0..rows {
            let kept = selected_row(&data, &mask, cols, i);
            let total: f64 = kept.iter().sum();
            let mean = if kept.is_empty() { 0.0 } else { total / kept.len() as f64 };
            prop_assert!(abs_diff_eq!(sums.get(&[i]).unwrap(), total, epsilon = EPS));
            prop_assert!(abs_diff_eq!(means.get(&[i]).unwrap(), mean, epsilon = EPS));
        }
    }

    /// Per-row max and min equal those of the selected elements, or ∓inf when none are.
    #[test]
    fn prop_row_max_min_match_selection((rows, cols, data, mask) in arb_masked_matrix()) {
        let (x, m) = tensors(rows, cols, data.clone(), mask.clone());
        let maxes = masked_max(&x, Some(&m), Some(1), false).unwrap();
        let mins = masked_min(&x, Some(&m), Some(1), false).unwrap();

        for i in 0..rows {
            let kept = selected_row(&data, &mask, cols, i);
            let max = kept.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min = kept.iter().copied().fold(f64::INFINITY, f64::min);
            prop_assert_eq!(maxes.values().get(&[i]).unwrap(), max);
            prop_assert_eq!(mins.values().get(&[i]).unwrap(), min);

            if !kept.is_empty() {
                let idx = maxes.indices().unwrap().get(&[i]).unwrap();
                prop_assert!(mask[i * cols + idx]);
                prop_assert_eq!(data[i * cols + idx], max);
            }
        }
    }

    /// Full reductions agree with the selection over the whole tensor.
    #[test]
    fn prop_full_sum_matches_selection((rows, cols, data, mask) in arb_masked_matrix()) {
        let (x, m) = tensors(rows, cols, data.clone(), mask.clone());
        let total: f64 = data.iter().zip(&mask).filter(|&(_, &k)| k).map(|(&v, _)| v).sum();
        let count = mask.iter().filter(|&&k| k).count();

        let sum = masked_sum(&x, Some(&m), None, true).unwrap();
        prop_assert!(sum.is_scalar());
        prop_assert!(abs_diff_eq!(sum.to_scalar().unwrap(), total, epsilon = EPS));

        let mean = masked_mean(&x, Some(&m), None, false).unwrap().to_scalar().unwrap();
        let expected = if count == 0 { 0.0 } else { total / count as f64 };
        prop_assert!(abs_diff_eq!(mean, expected, epsilon = EPS));
    }

    /// Full max/min equal those of the selected elements; an all-masked input gives ∓inf.
    #[test]
    fn prop_full_max_min_match_selection((rows, cols, data, mask) in arb_masked_matrix()) {
        let (x, m) = tensors(rows, cols, data.clone(), mask.clone());
        let kept: Vec<f64> = data.iter().zip(&mask).filter(|&(_, &k)| k).map(|(&v, _)| v).collect();
        let expected_max = kept.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let expected_min = kept.iter().copied().fold(f64::INFINITY, f64::min);

        let max_out = masked_max(&x, Some(&m), None, false).unwrap();
        let min_out = masked_min(&x, Some(&m), None, true).unwrap();
        prop_assert!(max_out.indices().is_none());
        prop_assert!(min_out.values().is_scalar());
        prop_assert_eq!(max_out.values().to_scalar().unwrap(), expected_max);
        prop_assert_eq!(min_out.values().to_scalar().unwrap(), expected_min);

        let nothing = Tensor::full(&[rows, cols], false);
        prop_assert_eq!(
            masked_max(&x, Some(&nothing), None, false).unwrap().values().to_scalar().unwrap(),
            f64::NEG_INFINITY
        );
        prop_assert_eq!(
            masked_min(&x, Some(&nothing), None, false).unwrap().values().to_scalar().unwrap(),
            f64::INFINITY
        );
    }

    /// Without a mask each operation is exactly the plain engine operation.
    #[test]
    fn prop_absent_mask_is_plain_op(
        (rows, cols, data, _mask) in arb_masked_matrix(),
        axis in prop::sample::select(vec![None, Some(0), Some(1), Some(-1)]),
        keepdims in any::<bool>(),
    ) {
        let x = Tensor::from_vec(data, &[rows, cols]).unwrap();
        let none = None::<&Tensor<bool>>;
        let axes = axis.map(|a| [a]);
        let axes = axes.as_ref().map(|a| &a[..]);
        // A full reduction never forwards keepdims
        let plain_keepdims = axes.is_some() && keepdims;

        prop_assert_eq!(
            masked_sum(&x, none, axes, keepdims).unwrap(),
            sum(&x, axes, plain_keepdims).unwrap()
        );
        prop_assert_eq!(
            masked_mean(&x, none, axes, keepdims).unwrap(),
            mean(&x, axes, plain_keepdims).unwrap()
        );
        prop_assert_eq!(
            masked_max(&x, none, axis, keepdims).unwrap().into_values(),
            max(&x, axes, plain_keepdims).unwrap()
        );
        prop_assert_eq!(
            masked_min(&x, none, axis, keepdims).unwrap().into_values(),
            min(&x, axes, plain_keepdims).unwrap()
        );
        prop_assert_eq!(
            masked_softmax(&x, none, axis).unwrap(),
            softmax(&x, axis).unwrap()
        );
    }

    /// An all-true mask changes nothing.
    #[test]
    fn prop_all_true_mask_is_identity((rows, cols, data, _mask) in arb_masked_matrix()) {
        let x = Tensor::from_vec(data, &[rows, cols]).unwrap();
        let m = Tensor::full(&[rows, cols], true);

        prop_assert_eq!(
            masked_sum(&x, Some(&m), Some(&[0]), false).unwrap(),
            x.sum(Some(&[0]), false).unwrap()
        );
        prop_assert_eq!(
            masked_softmax(&x, Some(&m), Some(1)).unwrap(),
            x.softmax(Some(1)).unwrap()
        );
    }
}

// ── softmax ──────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Masked positions get zero, the rest sum to one; fully masked rows are NaN.
    #[test]
    fn prop_softmax_rows_normalized((rows, cols, data, mask) in arb_masked_matrix()) {
        let (x, m) = tensors(rows, cols, data, mask.clone());
        let probs = masked_softmax(&x, Some(&m), Some(-1)).unwrap().to_vec();

        for i in 0..rows {
            let row = &probs[i * cols..(i + 1) * cols];
            let row_mask = &mask[i * cols..(i + 1) * cols];

            if row_mask.iter().any(|&k| k) {
                for (p, &keep) in row.iter().zip(row_mask) {
                    if keep {
                        prop_assert!(*p >= 0.0 && *p <= 1.0);
                    } else {
                        prop_assert_eq!(*p, 0.0);
                    }
                }
                prop_assert!(abs_diff_eq!(row.iter().sum::<f64>(), 1.0, epsilon = EPS));
            } else {
                prop_assert!(row.iter().all(|p| p.is_nan()));
            }
        }
    }
}
