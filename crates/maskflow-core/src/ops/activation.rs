//! Normalizing activations
//!
//! Softmax over one axis of a dynamic-rank tensor.

use super::reduction::normalize_axis;
use crate::{Result, Tensor};
use scirs2_core::ndarray::Axis;
use scirs2_core::num_traits::Float;

/// Softmax along `axis` (last axis when `None`)
///
/// The lane maximum is subtracted before exponentiation. A lane whose entries
/// are all negative infinity therefore computes `-inf - -inf` and comes out
/// as NaN in every position, as does any lane containing NaN.
///
/// A 0-d tensor is treated as a single-element lane; only axis `0`/`-1` is
/// accepted for it.
///
/// `None` always means the last axis, whatever the rank. There is no
/// rank-dependent implicit axis (such as axis 0 for 1-d and 3-d inputs and
/// axis 1 otherwise); pass the axis explicitly for that behavior.
pub fn softmax<T>(x: &Tensor<T>, axis: Option<i32>) -> Result<Tensor<T>>
where
    T: Float,
{
    if axis.is_none() {
        tracing::debug!(rank = x.rank(), "softmax without axis, using the last axis");
    }

    let is_scalar = x.is_scalar();
    let work = if is_scalar {
        x.array().clone().insert_axis(Axis(0))
    } else {
        x.array().clone()
    };
    let axis = normalize_axis("softmax", axis.unwrap_or(-1), work.ndim())?;

    let max_arr = work
        .map_axis(Axis(axis), |lane| {
            lane.iter().fold(T::neg_infinity(), |acc, &v| acc.max(v))
        })
        .insert_axis(Axis(axis));

    let exp_arr = (&work - &max_arr).mapv(|v| v.exp());
    let sum_arr = exp_arr.sum_axis(Axis(axis)).insert_axis(Axis(axis));
    let result = &exp_arr / &sum_arr;

    if is_scalar {
        Ok(Tensor::from_array(result.index_axis_move(Axis(0), 0)))
    } else {
        Ok(Tensor::from_array(result))
    }
}
