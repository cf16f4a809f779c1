//! Layer configuration persistence

pub mod layer_config;
pub mod versioned;

pub use layer_config::MaskedSoftmaxConfig;
pub use versioned::{SemanticVersion, CURRENT_VERSION};
