//! Argument-based reduction operations
//!
//! Reductions that report where the extremum sits: `argmax`/`argmin` and the
//! paired `max_with_indices`/`min_with_indices` used by axis-restricted max and
//! min. Ties resolve to the first occurrence along the axis; a NaN counts as
//! the extremum and its first position is reported.

use super::common::normalize_axis;
use super::statistical::full_reduction_result;
use crate::{Result, Tensor, TensorError};
use scirs2_core::ndarray::{ArrayView1, Axis};
use scirs2_core::num_traits::Float;

/// Position and value of the first extremum in a non-empty lane
fn lane_extremum<T, F>(lane: ArrayView1<'_, T>, better: F) -> (T, usize)
where
    T: Float,
    F: Fn(T, T) -> bool,
{
    let mut best = (lane[0], 0);
    for (idx, &value) in lane.iter().enumerate().skip(1) {
        if best.0.is_nan() {
            break;
        }
        if value.is_nan() || better(value, best.0) {
            best = (value, idx);
        }
    }
    best
}

fn is_greater<T: Float>(candidate: T, current: T) -> bool {
    candidate > current
}

fn is_less<T: Float>(candidate: T, current: T) -> bool {
    candidate < current
}

fn extremum_with_indices<T, F>(
    operation: &str,
    x: &Tensor<T>,
    axis: i32,
    keepdims: bool,
    better: F,
) -> Result<(Tensor<T>, Tensor<usize>)>
where
    T: Float,
    F: Fn(T, T) -> bool + Copy,
{
    let axis = normalize_axis(operation, axis, x.rank())?;
    if x.shape()[axis] == 0 {
        return Err(TensorError::invalid_argument_op(
            operation,
            &format!("cannot reduce over zero-length axis {axis}"),
        ));
    }

    let pairs = x
        .array()
        .map_axis(Axis(axis), |lane| lane_extremum(lane, better));
    let mut values = pairs.mapv(|(value, _)| value);
    let mut indices = pairs.mapv(|(_, idx)| idx);
    if keepdims {
        values = values.insert_axis(Axis(axis));
        indices = indices.insert_axis(Axis(axis));
    }

    Ok((Tensor::from_array(values), Tensor::from_array(indices)))
}

/// Maximum values along one axis together with their indices
pub fn max_with_indices<T>(
    x: &Tensor<T>,
    axis: i32,
    keepdims: bool,
) -> Result<(Tensor<T>, Tensor<usize>)>
where
    T: Float,
{
    extremum_with_indices("max", x, axis, keepdims, is_greater)
}

/// Minimum values along one axis together with their indices
pub fn min_with_indices<T>(
    x: &Tensor<T>,
    axis: i32,
    keepdims: bool,
) -> Result<(Tensor<T>, Tensor<usize>)>
where
    T: Float,
{
    extremum_with_indices("min", x, axis, keepdims, is_less)
}

fn arg_extremum<T, F>(
    operation: &str,
    x: &Tensor<T>,
    axis: Option<i32>,
    keepdims: bool,
    better: F,
) -> Result<Tensor<usize>>
where
    T: Float,
    F: Fn(T, T) -> bool + Copy,
{
    match axis {
        Some(axis) => Ok(extremum_with_indices(operation, x, axis, keepdims, better)?.1),
        None => {
            if x.is_empty() {
                return Err(TensorError::invalid_argument_op(
                    operation,
                    "cannot reduce an empty tensor",
                ));
            }
            // Flat index over the row-major element order
            let flat: Vec<T> = x.array().iter().copied().collect();
            let (_, idx) = lane_extremum(ArrayView1::from(flat.as_slice()), better);
            Ok(Tensor::from_array(full_reduction_result(
                x.rank(),
                keepdims,
                idx,
            )))
        }
    }
}

/// Compute argmax along an axis, or over the flattened tensor
pub fn argmax<T>(x: &Tensor<T>, axis: Option<i32>, keepdims: bool) -> Result<Tensor<usize>>
where
    T: Float,
{
    arg_extremum("argmax", x, axis, keepdims, is_greater)
}

/// Compute argmin along an axis, or over the flattened tensor
pub fn argmin<T>(x: &Tensor<T>, axis: Option<i32>, keepdims: bool) -> Result<Tensor<usize>>
where
    T: Float,
{
    arg_extremum("argmin", x, axis, keepdims, is_less)
}
