//! Full vs. axis-restricted reduction dispatch
//!
//! Engine reductions take `(tensor, axes, keepdims)`. A full reduction is the
//! `axes = None` entry point and never receives the caller's `keepdims`; only
//! an axis-restricted call forwards it. An empty axis list also selects the
//! full reduction.

use crate::{Result, Tensor};

/// Which form of a reduction to call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceDims<'a> {
    /// Reduce every element to a single value
    All,
    /// Reduce the listed axes, optionally keeping them as size 1
    Along { axes: &'a [i32], keepdims: bool },
}

impl<'a> ReduceDims<'a> {
    /// Resolve the caller's optional axes; `keepdims` is dropped for `All`
    pub fn new(axes: Option<&'a [i32]>, keepdims: bool) -> Self {
        match axes {
            None | Some([]) => ReduceDims::All,
            Some(axes) => ReduceDims::Along { axes, keepdims },
        }
    }
}

/// Invoke `op` with the argument set matching the requested reduction form
pub fn call_reduction<T, R, F>(
    op: F,
    x: &Tensor<T>,
    axes: Option<&[i32]>,
    keepdims: bool,
) -> Result<R>
where
    F: FnOnce(&Tensor<T>, Option<&[i32]>, bool) -> Result<R>,
{
    match ReduceDims::new(axes, keepdims) {
        ReduceDims::All => {
            if keepdims {
                tracing::debug!("full reduction requested, keepdims is not forwarded");
            }
            op(x, None, false)
        }
        ReduceDims::Along { axes, keepdims } => op(x, Some(axes), keepdims),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::reduction::sum;

    #[test]
    fn test_reduce_dims_new() {
        assert_eq!(ReduceDims::new(None, true), ReduceDims::All);
        assert_eq!(
            ReduceDims::new(Some(&[0, 1]), true),
            ReduceDims::Along {
                axes: &[0, 1],
                keepdims: true
            }
        );
    }

    #[test]
    fn test_empty_axis_list_is_full_reduction() {
        assert_eq!(ReduceDims::new(Some(&[]), true), ReduceDims::All);

        let x = Tensor::<f32>::ones(&[2, 3]);
        let total = call_reduction(sum::<f32>, &x, Some(&[]), true).unwrap();
        assert!(total.is_scalar());
        assert_eq!(total.get(&[]), Some(6.0));
    }

    #[test]
    fn test_full_reduction_drops_keepdims() {
        let x = Tensor::<f32>::ones(&[2, 3]);
        let mut seen = None;
        let total = call_reduction(
            |t, axes, keepdims| {
                seen = Some((axes.map(|a| a.to_vec()), keepdims));
                sum(t, axes, keepdims)
            },
            &x,
            None,
            true,
        )
        .unwrap();
        assert_eq!(seen, Some((None, false)));
        assert!(total.is_scalar());
        assert_eq!(total.get(&[]), Some(6.0));
    }

    #[test]
    fn test_axis_reduction_forwards_keepdims() {
        let x = Tensor::<f32>::ones(&[2, 3]);
        let rows = call_reduction(sum::<f32>, &x, Some(&[1]), true).unwrap();
        assert_eq!(rows.shape().dims(), &[2, 1]);
    }
}
