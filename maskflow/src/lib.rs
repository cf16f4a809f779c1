//! # maskflow - Masked reductions for padded sequence data
//!
//! Sum, mean, max, min and softmax over N-dimensional tensors that ignore
//! masked-out elements. Typical use is batches of variable-length sequences
//! padded to a common length, where padding must not leak into statistics
//! or attention weights.
//!
//! - **maskflow-core**: `Tensor<T>`, engine operations and the masked
//!   functional operations (`core::ops::masked`)
//! - **maskflow-neural**: the `MaskedSoftmax` layer, `MaskedSequential`
//!   pipelines and versioned layer configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use maskflow::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Two sequences padded to length 4; the second has only two real steps
//! let scores = Tensor::from_vec(
//!     vec![0.5f32, 1.0, -0.5, 2.0, 3.0, 1.0, 9.0, 9.0],
//!     &[2, 4],
//! )?;
//! let mask = Tensor::from_vec(
//!     vec![true, true, true, true, true, true, false, false],
//!     &[2, 4],
//! )?;
//!
//! let lengths = masked_sum(&Tensor::<f32>::ones(&[2, 4]), Some(&mask), Some(&[-1]), false)?;
//! assert_eq!(lengths.to_vec(), vec![4.0f32, 2.0]);
//!
//! let attention = MaskedSoftmax::new(Some(-1)).forward(&scores, Some(&mask))?;
//! assert_eq!(attention.get(&[1, 2]), Some(0.0));
//!
//! let peak = masked_max(&scores, Some(&mask), Some(-1), false)?;
//! assert_eq!(peak.values().to_vec(), vec![2.0, 3.0]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

// Re-export all public APIs from subcrates
pub use maskflow_core as core;
pub use maskflow_neural as neural;

/// Prelude module for convenient imports
///
/// ```rust
/// use maskflow::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::ops;
    pub use crate::core::{MaskElement, MaxMin, Shape, Tensor, TensorError};

    // Masked operations
    pub use crate::core::ops::masked::{
        masked_max, masked_mean, masked_mean_as, masked_min, masked_softmax, masked_softmax_as,
        masked_sum, masked_sum_as,
    };

    // Layers and pipelines
    pub use crate::neural::{Layer, MaskedLayer, MaskedSequential, MaskedSoftmax};
    pub use crate::neural::{MaskedSoftmaxConfig, SemanticVersion};
}

/// The version of the maskflow crates
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version string of maskflow
pub fn version() -> &'static str {
    VERSION
}
