//! # maskflow-core
//!
//! Dense N-dimensional tensors over `ndarray` with mask-aware reductions.
//!
//! The [`ops::masked`] family computes sum, mean, max, min and softmax while
//! treating masked-out elements as absent. Masks are boolean or numeric
//! tensors broadcastable against the input; nonzero means included.
//!
//! ```
//! use maskflow_core::{ops::masked_mean, Tensor};
//!
//! let x = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
//! let mask = Tensor::from_vec(vec![true, false, true, false, false, false], &[2, 3]).unwrap();
//!
//! let rows = masked_mean(&x, Some(&mask), Some(&[-1]), false).unwrap();
//! assert_eq!(rows.as_slice().unwrap(), &[2.0, 0.0]);
//! ```

#![allow(clippy::result_large_err)]

pub mod error;
pub mod ops;
pub mod shape;
pub mod tensor;

pub use error::{Result, TensorError};
pub use ops::masked::{MaskElement, MaxMin};
pub use shape::Shape;
pub use tensor::Tensor;
