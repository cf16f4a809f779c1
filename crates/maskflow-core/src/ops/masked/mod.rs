//! Mask-aware reductions and softmax
//!
//! A mask marks which input elements take part in an operation. It is
//! broadcast against the input, so a mask of shape `[5]` applies the same
//! selection to every row of a `[3, 5]` input. Operations taking an
//! `Option` mask behave exactly like the plain engine operation when it is
//! `None`.
//!
//! - **mask**: interpretation of bool and numeric mask elements
//! - **fill**: sentinel substitution at masked-out positions
//! - **dispatch**: full vs. axis-restricted reduction calls
//! - **functional**: `masked_sum`, `masked_mean`, `masked_max`, `masked_min`,
//!   `masked_softmax` and their `_as` counterparts

pub mod dispatch;
pub mod fill;
pub mod functional;
pub mod mask;

pub use dispatch::{call_reduction, ReduceDims};
pub use fill::fill_with_mask;
pub use functional::{
    masked_max, masked_mean, masked_mean_as, masked_min, masked_softmax, masked_softmax_as,
    masked_sum, masked_sum_as, MaxMin,
};
pub use mask::{fill_positions, to_bool_mask, MaskElement};
