//! Reduction operations
//!
//! Value reductions (`sum`, `mean`, `max`, `min`) and index reductions
//! (`argmax`, `argmin`, `max_with_indices`, `min_with_indices`) over
//! dynamic-rank tensors.

pub mod argops;
pub mod common;
pub mod statistical;

pub use argops::{argmax, argmin, max_with_indices, min_with_indices};
pub use common::normalize_axis;
pub use statistical::{max, mean, min, sum};
