//! # maskflow-neural
//!
//! Stateful masked layers built on the functional operations in
//! [`maskflow_core::ops::masked`].
//!
//! - [`layers::MaskedSoftmax`]: softmax over a fixed axis that ignores
//!   masked-out positions
//! - [`model::MaskedSequential`]: ordered pipeline threading one mask
//!   through every stage
//! - [`serialization`]: versioned, JSON-persistable layer configuration

#![allow(clippy::result_large_err)]

pub mod layers;
pub mod model;
pub mod serialization;

pub use layers::{Layer, LayerType, MaskedLayer, MaskedSoftmax};
pub use model::MaskedSequential;
pub use serialization::{MaskedSoftmaxConfig, SemanticVersion, CURRENT_VERSION};
