//! Common helper functions for reduction operations
//!
//! Shared axis handling used by every reduction so that negative indices,
//! range checks and duplicate detection behave the same everywhere.

use crate::{Result, TensorError};

/// Normalize negative axis indices
///
/// Converts negative axis indices to positive ones and validates that the axis
/// is within the valid range for a tensor of the given rank.
///
/// # Examples
/// ```
/// use maskflow_core::ops::reduction::normalize_axis;
/// assert_eq!(normalize_axis("sum", 0, 3).unwrap(), 0);
/// assert_eq!(normalize_axis("sum", -1, 3).unwrap(), 2);
/// assert_eq!(normalize_axis("sum", -3, 3).unwrap(), 0);
///
/// assert!(normalize_axis("sum", 3, 3).is_err());
/// assert!(normalize_axis("sum", -4, 3).is_err());
/// ```
pub fn normalize_axis(operation: &str, axis: i32, rank: usize) -> Result<usize> {
    let rank_i = rank as i64;
    let normalized = if axis < 0 {
        rank_i + axis as i64
    } else {
        axis as i64
    };
    if normalized < 0 || normalized >= rank_i {
        Err(TensorError::invalid_axis(operation, axis, rank))
    } else {
        Ok(normalized as usize)
    }
}

/// Normalize a list of axes and sort them in descending order
///
/// Descending order lets callers collapse axes one at a time without the
/// remaining indices shifting. Repeated axes are rejected.
pub(crate) fn normalize_axes(operation: &str, axes: &[i32], rank: usize) -> Result<Vec<usize>> {
    let mut sorted_axes = axes
        .iter()
        .map(|&a| normalize_axis(operation, a, rank))
        .collect::<Result<Vec<_>>>()?;
    sorted_axes.sort_unstable_by(|a, b| b.cmp(a));

    if let Some(pair) = sorted_axes.windows(2).find(|pair| pair[0] == pair[1]) {
        return Err(TensorError::invalid_argument_op(
            operation,
            &format!("axis {} appears more than once", pair[0]),
        ));
    }

    Ok(sorted_axes)
}
