//! Layer traits and masked layers

pub mod masked_softmax;

pub use masked_softmax::MaskedSoftmax;

use maskflow_core::{Result, Tensor};

/// Represents the kinds of layer available for introspection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerType {
    MaskedSoftmax,
    Sequential,
    Unknown,
}

impl LayerType {
    /// Short operation name used in logs and reprs
    pub fn op_name(&self) -> &'static str {
        match self {
            LayerType::MaskedSoftmax => "MaskedSoftmax",
            LayerType::Sequential => "Sequential",
            LayerType::Unknown => "Unknown",
        }
    }
}

pub trait Layer<T> {
    fn forward(&self, input: &Tensor<T>) -> Result<Tensor<T>>;
    fn parameters(&self) -> Vec<&Tensor<T>>;
    fn parameters_mut(&mut self) -> Vec<&mut Tensor<T>>;
    fn set_training(&mut self, training: bool);
    fn clone_box(&self) -> Box<dyn Layer<T>>;

    /// Returns the type of this layer for introspection
    fn layer_type(&self) -> LayerType {
        LayerType::Unknown
    }
}

/// A layer whose forward pass can ignore masked-out input elements
///
/// `forward_masked(input, None)` must equal `Layer::forward(input)`.
pub trait MaskedLayer<T>: Layer<T> {
    fn forward_masked(&self, input: &Tensor<T>, mask: Option<&Tensor<bool>>) -> Result<Tensor<T>>;
    fn clone_masked_box(&self) -> Box<dyn MaskedLayer<T>>;
}
