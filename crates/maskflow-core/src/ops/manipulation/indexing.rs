//! Condition-driven selection: `where_op`, `masked_fill`, `masked_select`
//!
//! All three broadcast their operands to a common shape first; incompatible
//! shapes fail with `ShapeMismatch`.

use super::shape::{broadcast_shapes, broadcast_view};
use crate::{Result, Tensor};
use scirs2_core::ndarray::{Array1, Zip};

/// Where operation - select elements from x or y depending on condition
pub fn where_op<T: Clone>(
    condition: &Tensor<bool>,
    x: &Tensor<T>,
    y: &Tensor<T>,
) -> Result<Tensor<T>> {
    let xy_shape = broadcast_shapes("where", x.shape(), y.shape())?;
    let out_shape = broadcast_shapes("where", condition.shape(), &xy_shape)?;

    let cond = broadcast_view("where", condition, &out_shape)?;
    let x_view = broadcast_view("where", x, &out_shape)?;
    let y_view = broadcast_view("where", y, &out_shape)?;

    let result = Zip::from(&cond)
        .and(&x_view)
        .and(&y_view)
        .map_collect(|&c, a, b| if c { a.clone() } else { b.clone() });

    Ok(Tensor::from_array(result))
}

/// Replace every element where `mask` is true with `value`
///
/// Returns a new tensor with the broadcast shape of `x` and `mask`; `x` is
/// left untouched.
pub fn masked_fill<T: Clone>(x: &Tensor<T>, mask: &Tensor<bool>, value: T) -> Result<Tensor<T>> {
    let out_shape = broadcast_shapes("masked_fill", x.shape(), mask.shape())?;
    let x_view = broadcast_view("masked_fill", x, &out_shape)?;
    let mask_view = broadcast_view("masked_fill", mask, &out_shape)?;

    let result = Zip::from(&x_view)
        .and(&mask_view)
        .map_collect(|a, &fill| if fill { value.clone() } else { a.clone() });

    Ok(Tensor::from_array(result))
}

/// Gather the elements of `x` where `mask` is true into a 1-D tensor
///
/// Elements come out in row-major order of the broadcast shape.
pub fn masked_select<T: Clone>(x: &Tensor<T>, mask: &Tensor<bool>) -> Result<Tensor<T>> {
    let out_shape = broadcast_shapes("masked_select", x.shape(), mask.shape())?;
    let x_view = broadcast_view("masked_select", x, &out_shape)?;
    let mask_view = broadcast_view("masked_select", mask, &out_shape)?;

    let selected: Vec<T> = x_view
        .iter()
        .zip(mask_view.iter())
        .filter(|&(_, &keep)| keep)
        .map(|(v, _)| v.clone())
        .collect();

    Ok(Tensor::from_array(Array1::from(selected).into_dyn()))
}
