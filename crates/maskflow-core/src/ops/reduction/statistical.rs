//! Statistical reduction operations
//!
//! This module contains the value reductions the masked operations delegate to:
//! - `sum`: Sum reduction along specified axes
//! - `mean`: Mean (average) reduction along specified axes
//! - `max`: Maximum value reduction along specified axes
//! - `min`: Minimum value reduction along specified axes
//!
//! Every reduction takes `axes: Option<&[i32]>`. `None` reduces all elements;
//! `keepdims` then keeps one size-1 dimension per input dimension.

use super::common::normalize_axes;
use crate::{Result, Tensor, TensorError};
use scirs2_core::ndarray::{ArrayD, ArrayView1, Axis, IxDyn};
use scirs2_core::num_traits::{Float, FromPrimitive, Zero};

/// Wrap a full-reduction value as a 0-d tensor, or rank-preserving `[1, 1, ..]`
/// tensor when `keepdims` is set.
pub(crate) fn full_reduction_result<T: Clone>(rank: usize, keepdims: bool, value: T) -> ArrayD<T> {
    if keepdims {
        ArrayD::from_elem(IxDyn(&vec![1; rank]), value)
    } else {
        ArrayD::from_elem(IxDyn(&[]), value)
    }
}

/// Collapse `sorted_axes` (descending) one at a time with a lane reducer
fn reduce_lanes<T, F>(arr: &ArrayD<T>, sorted_axes: &[usize], keepdims: bool, reducer: F) -> ArrayD<T>
where
    T: Clone,
    F: Fn(ArrayView1<'_, T>) -> T,
{
    let mut result = arr.to_owned();
    for &axis in sorted_axes {
        result = result.map_axis(Axis(axis), |lane| reducer(lane));
        if keepdims {
            result = result.insert_axis(Axis(axis));
        }
    }
    result
}

/// Sum reduction along specified axes
///
/// Computes the sum of tensor elements along the specified axes.
/// If no axes are specified, computes the sum of all elements.
///
/// # Arguments
/// * `x` - Input tensor
/// * `axes` - Optional slice of axis indices to reduce along
/// * `keepdims` - Whether to keep reduced dimensions as size 1
pub fn sum<T>(x: &Tensor<T>, axes: Option<&[i32]>, keepdims: bool) -> Result<Tensor<T>>
where
    T: Clone + Zero + std::ops::Add<Output = T>,
{
    let arr = x.array();
    match axes {
        Some(axes) => {
            let sorted_axes = normalize_axes("sum", axes, x.rank())?;
            let mut result = arr.to_owned();
            for &axis in &sorted_axes {
                result = result.sum_axis(Axis(axis));
                if keepdims {
                    result = result.insert_axis(Axis(axis));
                }
            }
            Ok(Tensor::from_array(result))
        }
        None => Ok(Tensor::from_array(full_reduction_result(
            x.rank(),
            keepdims,
            arr.sum(),
        ))),
    }
}

/// Mean reduction along specified axes
///
/// Computes the mean (average) of tensor elements along the specified axes.
/// If no axes are specified, computes the mean of all elements. Reducing over
/// zero elements yields NaN.
pub fn mean<T>(x: &Tensor<T>, axes: Option<&[i32]>, keepdims: bool) -> Result<Tensor<T>>
where
    T: Float + FromPrimitive,
{
    let count = match axes {
        Some(axes) => normalize_axes("mean", axes, x.rank())?
            .iter()
            .map(|&axis| x.shape()[axis])
            .product::<usize>(),
        None => x.numel(),
    };
    let count = T::from_usize(count).ok_or_else(|| {
        TensorError::invalid_argument_op("mean", "element count not representable")
    })?;

    let total = sum(x, axes, keepdims)?;
    Ok(Tensor::from_array(total.into_array().mapv(|s| s / count)))
}

/// Larger of two values, with NaN winning over any number
#[inline]
pub(crate) fn nan_max<T: Float>(current: T, candidate: T) -> T {
    if current.is_nan() || candidate.is_nan() {
        T::nan()
    } else if candidate > current {
        candidate
    } else {
        current
    }
}

/// Smaller of two values, with NaN winning over any number
#[inline]
pub(crate) fn nan_min<T: Float>(current: T, candidate: T) -> T {
    if current.is_nan() || candidate.is_nan() {
        T::nan()
    } else if candidate < current {
        candidate
    } else {
        current
    }
}

fn extremum<T, F>(
    operation: &str,
    x: &Tensor<T>,
    axes: Option<&[i32]>,
    keepdims: bool,
    pick: F,
) -> Result<Tensor<T>>
where
    T: Float,
    F: Fn(T, T) -> T + Copy,
{
    if x.is_empty() {
        return Err(TensorError::invalid_argument_op(
            operation,
            "cannot reduce an empty tensor",
        ));
    }

    let arr = x.array();
    let fold_lane = |lane: ArrayView1<'_, T>| {
        lane.iter()
            .skip(1)
            .fold(lane[0], |current, &candidate| pick(current, candidate))
    };

    match axes {
        Some(axes) => {
            let sorted_axes = normalize_axes(operation, axes, x.rank())?;
            Ok(Tensor::from_array(reduce_lanes(
                arr,
                &sorted_axes,
                keepdims,
                fold_lane,
            )))
        }
        None => {
            let first = arr.iter().next().copied().unwrap_or_else(T::nan);
            let value = arr.iter().skip(1).fold(first, |current, &candidate| {
                pick(current, candidate)
            });
            Ok(Tensor::from_array(full_reduction_result(
                x.rank(),
                keepdims,
                value,
            )))
        }
    }
}

/// Maximum value reduction along specified axes
///
/// NaN propagates: a lane containing NaN reduces to NaN.
pub fn max<T>(x: &Tensor<T>, axes: Option<&[i32]>, keepdims: bool) -> Result<Tensor<T>>
where
    T: Float,
{
    extremum("max", x, axes, keepdims, nan_max)
}

/// Minimum value reduction along specified axes
///
/// NaN propagates: a lane containing NaN reduces to NaN.
pub fn min<T>(x: &Tensor<T>, axes: Option<&[i32]>, keepdims: bool) -> Result<Tensor<T>>
where
    T: Float,
{
    extremum("min", x, axes, keepdims, nan_min)
}
