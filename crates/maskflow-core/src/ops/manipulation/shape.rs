//! Broadcasting helpers

use crate::{Result, Shape, Tensor, TensorError};
use scirs2_core::ndarray::{ArrayViewD, IxDyn};

/// Common broadcast shape of two shapes, or a `ShapeMismatch` naming `operation`
pub fn broadcast_shapes(operation: &str, lhs: &Shape, rhs: &Shape) -> Result<Shape> {
    lhs.broadcast_shape(rhs).ok_or_else(|| {
        TensorError::shape_mismatch(
            operation,
            &format!("shape broadcastable with {lhs}"),
            &rhs.to_string(),
        )
    })
}

/// Read-only view of `tensor` stretched to `target`
pub(crate) fn broadcast_view<'a, T>(
    operation: &str,
    tensor: &'a Tensor<T>,
    target: &Shape,
) -> Result<ArrayViewD<'a, T>> {
    tensor
        .array()
        .broadcast(IxDyn(target.dims()))
        .ok_or_else(|| {
            TensorError::shape_mismatch(
                operation,
                &format!("shape broadcastable to {target}"),
                &tensor.shape().to_string(),
            )
        })
}

/// Broadcast operation
///
/// Expands the tensor to match a target shape following NumPy broadcasting rules.
/// Dimensions are aligned from the right, and singleton dimensions can be expanded.
///
/// # Errors
/// Returns `ShapeMismatch` if broadcasting is not possible
pub fn broadcast_to<T: Clone>(tensor: &Tensor<T>, target_shape: &[usize]) -> Result<Tensor<T>> {
    let target = Shape::from_slice(target_shape);
    let view = broadcast_view("broadcast_to", tensor, &target)?;
    Ok(Tensor::from_array(view.to_owned()))
}
