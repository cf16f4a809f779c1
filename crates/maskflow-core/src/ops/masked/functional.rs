//! Masked sum, mean, max, min and softmax
//!
//! Every operation here follows the same recipe: when no mask is given it is
//! exactly the plain engine operation; otherwise the masked-out elements are
//! overwritten with a sentinel that the following reduction naturally ignores
//! (0 for sum, -inf for max and softmax, +inf for min) and the engine
//! operation runs on the filled tensor.
//!
//! Degenerate slices (every element of a reduced slice masked out):
//! - sum gives 0, mean gives 0;
//! - max gives -inf, min gives +inf;
//! - softmax gives NaN in every position of the slice.

use super::dispatch::call_reduction;
use super::fill::fill_with_mask;
use super::mask::MaskElement;
use crate::ops::activation::softmax;
use crate::ops::manipulation::cast;
use crate::ops::manipulation::shape::{broadcast_shapes, broadcast_view};
use crate::ops::reduction::{max, max_with_indices, mean, min, min_with_indices, sum};
use crate::{Result, Tensor};
use scirs2_core::ndarray::Zip;
use scirs2_core::num_traits::{Float, FromPrimitive, NumCast, ToPrimitive, Zero};

/// Result of a max/min reduction
///
/// A full reduction yields a single value; reducing along an axis also
/// reports where each extremum was found.
#[derive(Debug, Clone, PartialEq)]
pub enum MaxMin<T> {
    Value(Tensor<T>),
    WithIndices {
        values: Tensor<T>,
        indices: Tensor<usize>,
    },
}

impl<T> MaxMin<T> {
    /// The extremum values, whichever form the result took
    pub fn values(&self) -> &Tensor<T> {
        match self {
            MaxMin::Value(values) | MaxMin::WithIndices { values, .. } => values,
        }
    }

    /// Indices of the extrema, present only for axis-restricted reductions
    pub fn indices(&self) -> Option<&Tensor<usize>> {
        match self {
            MaxMin::Value(_) => None,
            MaxMin::WithIndices { indices, .. } => Some(indices),
        }
    }

    pub fn into_values(self) -> Tensor<T> {
        match self {
            MaxMin::Value(values) | MaxMin::WithIndices { values, .. } => values,
        }
    }
}

fn single_axis(dim: Option<i32>) -> Option<[i32; 1]> {
    dim.map(|d| [d])
}

fn max_entry<T: Float>(x: &Tensor<T>, axes: Option<&[i32]>, keepdims: bool) -> Result<MaxMin<T>> {
    match axes {
        Some(&[axis]) => {
            let (values, indices) = max_with_indices(x, axis, keepdims)?;
            Ok(MaxMin::WithIndices { values, indices })
        }
        _ => Ok(MaxMin::Value(max(x, axes, keepdims)?)),
    }
}

fn min_entry<T: Float>(x: &Tensor<T>, axes: Option<&[i32]>, keepdims: bool) -> Result<MaxMin<T>> {
    match axes {
        Some(&[axis]) => {
            let (values, indices) = min_with_indices(x, axis, keepdims)?;
            Ok(MaxMin::WithIndices { values, indices })
        }
        _ => Ok(MaxMin::Value(min(x, axes, keepdims)?)),
    }
}

/// Softmax along `dim` treating masked-out elements as absent
///
/// Masked positions receive exactly zero probability and do not contribute
/// to the normalization of the remaining positions. `dim = None` selects the
/// last axis. A slice with every element masked out comes back as NaN.
///
/// # Examples
/// ```
/// use maskflow_core::{ops::masked::masked_softmax, Tensor};
///
/// let scores = Tensor::from_vec(vec![1.0f32, 5.0, 1.0], &[3]).unwrap();
/// let mask = Tensor::from_vec(vec![true, false, true], &[3]).unwrap();
/// let probs = masked_softmax(&scores, Some(&mask), Some(-1)).unwrap();
/// assert_eq!(probs.as_slice().unwrap(), &[0.5, 0.0, 0.5]);
/// ```
pub fn masked_softmax<T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    dim: Option<i32>,
) -> Result<Tensor<T>>
where
    T: Float,
    M: MaskElement,
{
    tracing::trace!(
        op = "masked_softmax",
        shape = %input.shape(),
        masked = mask.is_some(),
        ?dim
    );
    match mask {
        None => softmax(input, dim),
        Some(mask) => {
            let filled = fill_with_mask(input, mask, T::neg_infinity())?;
            softmax(&filled, dim)
        }
    }
}

/// [`masked_softmax`] computed in element type `U`
///
/// The input is converted to `U` before masking, so the sentinel and the
/// normalization both happen at the requested precision.
pub fn masked_softmax_as<U, T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    dim: Option<i32>,
) -> Result<Tensor<U>>
where
    T: ToPrimitive + Copy,
    U: Float,
    M: MaskElement,
{
    masked_softmax(&cast::<T, U>(input)?, mask, dim)
}

/// Sum over `axes` treating masked-out elements as absent
///
/// `axes = None` sums every element into a 0-d tensor and ignores
/// `keepdims`. A slice with every element masked out sums to exactly zero.
pub fn masked_sum<T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    axes: Option<&[i32]>,
    keepdims: bool,
) -> Result<Tensor<T>>
where
    T: Clone + Zero + std::ops::Add<Output = T>,
    M: MaskElement,
{
    tracing::trace!(
        op = "masked_sum",
        shape = %input.shape(),
        masked = mask.is_some(),
        ?axes,
        keepdims
    );
    match mask {
        None => call_reduction(sum::<T>, input, axes, keepdims),
        Some(mask) => {
            let filled = fill_with_mask(input, mask, T::zero())?;
            call_reduction(sum::<T>, &filled, axes, keepdims)
        }
    }
}

/// [`masked_sum`] computed in element type `U`
pub fn masked_sum_as<U, T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    axes: Option<&[i32]>,
    keepdims: bool,
) -> Result<Tensor<U>>
where
    T: ToPrimitive + Copy,
    U: NumCast + Clone + Zero + std::ops::Add<Output = U>,
    M: MaskElement,
{
    masked_sum(&cast::<T, U>(input)?, mask, axes, keepdims)
}

/// Mean over `axes` treating masked-out elements as absent
///
/// Computed as the masked sum divided by the number of included elements in
/// each reduced slice. The count is clamped to at least one, so a slice with
/// every element masked out yields exactly zero rather than NaN.
pub fn masked_mean<T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    axes: Option<&[i32]>,
    keepdims: bool,
) -> Result<Tensor<T>>
where
    T: Float + FromPrimitive,
    M: MaskElement,
{
    tracing::trace!(
        op = "masked_mean",
        shape = %input.shape(),
        masked = mask.is_some(),
        ?axes,
        keepdims
    );
    let Some(mask) = mask else {
        return call_reduction(mean::<T>, input, axes, keepdims);
    };

    let numerator = masked_sum(input, Some(mask), axes, keepdims)?;

    // Count over the same broadcast shape the sum ran on
    let common = broadcast_shapes("masked_mean", input.shape(), mask.shape())?;
    let included = broadcast_view("masked_mean", mask, &common)?.mapv(|m| {
        if m.is_unmasked() {
            T::one()
        } else {
            T::zero()
        }
    });
    let counts = call_reduction(sum::<T>, &Tensor::from_array(included), axes, keepdims)?;

    let result = Zip::from(numerator.array())
        .and(counts.array())
        .map_collect(|&total, &count| total / count.max(T::one()));
    Ok(Tensor::from_array(result))
}

/// [`masked_mean`] computed in element type `U`
///
/// The included-element count is built directly in `U` before dividing.
pub fn masked_mean_as<U, T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    axes: Option<&[i32]>,
    keepdims: bool,
) -> Result<Tensor<U>>
where
    T: ToPrimitive + Copy,
    U: Float + FromPrimitive,
    M: MaskElement,
{
    masked_mean(&cast::<T, U>(input)?, mask, axes, keepdims)
}

/// Maximum treating masked-out elements as absent
///
/// With `dim = Some(d)` the result carries values and first-occurrence
/// indices along `d`; with `dim = None` it is the single largest included
/// value. A slice with every element masked out yields negative infinity.
pub fn masked_max<T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    dim: Option<i32>,
    keepdims: bool,
) -> Result<MaxMin<T>>
where
    T: Float,
    M: MaskElement,
{
    tracing::trace!(
        op = "masked_max",
        shape = %input.shape(),
        masked = mask.is_some(),
        ?dim,
        keepdims
    );
    let axes = single_axis(dim);
    let axes = axes.as_ref().map(|a| &a[..]);
    match mask {
        None => call_reduction(max_entry::<T>, input, axes, keepdims),
        Some(mask) => {
            let filled = fill_with_mask(input, mask, T::neg_infinity())?;
            call_reduction(max_entry::<T>, &filled, axes, keepdims)
        }
    }
}

/// Minimum treating masked-out elements as absent
///
/// Mirror image of [`masked_max`]; a slice with every element masked out
/// yields positive infinity.
pub fn masked_min<T, M>(
    input: &Tensor<T>,
    mask: Option<&Tensor<M>>,
    dim: Option<i32>,
    keepdims: bool,
) -> Result<MaxMin<T>>
where
    T: Float,
    M: MaskElement,
{
    tracing::trace!(
        op = "masked_min",
        shape = %input.shape(),
        masked = mask.is_some(),
        ?dim,
        keepdims
    );
    let axes = single_axis(dim);
    let axes = axes.as_ref().map(|a| &a[..]);
    match mask {
        None => call_reduction(min_entry::<T>, input, axes, keepdims),
        Some(mask) => {
            let filled = fill_with_mask(input, mask, T::infinity())?;
            call_reduction(min_entry::<T>, &filled, axes, keepdims)
        }
    }
}
