//! Masked softmax layer

use super::{Layer, LayerType, MaskedLayer};
use crate::serialization::{MaskedSoftmaxConfig, CURRENT_VERSION};
use maskflow_core::ops::masked::{masked_softmax, MaskElement};
use maskflow_core::{Result, Tensor, TensorError};
use scirs2_core::num_traits::Float;

/// Softmax over one axis that assigns zero probability to masked-out positions
///
/// The axis is fixed at construction; `None` selects the last axis of each
/// input. The layer has no parameters and behaves the same in training and
/// evaluation.
///
/// # Examples
/// ```
/// use maskflow_core::Tensor;
/// use maskflow_neural::layers::MaskedSoftmax;
///
/// let layer = MaskedSoftmax::new(Some(-1));
/// let scores = Tensor::from_vec(vec![2.0f64, 2.0, 9.0], &[1, 3]).unwrap();
/// let mask = Tensor::from_vec(vec![1u8, 1, 0], &[1, 3]).unwrap();
///
/// let probs = layer.forward(&scores, Some(&mask)).unwrap();
/// assert_eq!(probs.as_slice().unwrap(), &[0.5, 0.5, 0.0]);
/// assert_eq!(layer.to_string(), "MaskedSoftmax(dim=-1)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskedSoftmax {
    dim: Option<i32>,
}

impl MaskedSoftmax {
    pub fn new(dim: Option<i32>) -> Self {
        Self { dim }
    }

    /// Axis the softmax runs along
    pub fn dim(&self) -> Option<i32> {
        self.dim
    }

    /// Apply [`masked_softmax`] along the configured axis
    pub fn forward<T, M>(&self, input: &Tensor<T>, mask: Option<&Tensor<M>>) -> Result<Tensor<T>>
    where
        T: Float,
        M: MaskElement,
    {
        masked_softmax(input, mask, self.dim)
    }

    /// Rebuild a layer from persisted configuration
    ///
    /// Configurations written before `dim` existed restore with `dim = None`.
    /// Configurations from a newer major format version are rejected.
    pub fn from_config(config: &MaskedSoftmaxConfig) -> Result<Self> {
        if config.version.is_newer_major_than(&CURRENT_VERSION) {
            return Err(TensorError::serialization_error(
                "MaskedSoftmax::from_config",
                &format!(
                    "config version {} is newer than supported version {}",
                    config.version, CURRENT_VERSION
                ),
            ));
        }
        if CURRENT_VERSION.needs_migration_from(&config.version) {
            tracing::debug!(version = %config.version, "restoring MaskedSoftmax from older config");
        }
        Ok(Self::new(config.dim))
    }

    /// Configuration describing this layer at the current format version
    pub fn config(&self) -> MaskedSoftmaxConfig {
        MaskedSoftmaxConfig {
            version: CURRENT_VERSION,
            dim: self.dim,
        }
    }
}

impl std::fmt::Display for MaskedSoftmax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.dim {
            Some(dim) => write!(f, "MaskedSoftmax(dim={dim})"),
            None => write!(f, "MaskedSoftmax(dim=None)"),
        }
    }
}

impl<T: Float + 'static> Layer<T> for MaskedSoftmax {
    fn forward(&self, input: &Tensor<T>) -> Result<Tensor<T>> {
        MaskedSoftmax::forward(self, input, None::<&Tensor<bool>>)
    }

    fn parameters(&self) -> Vec<&Tensor<T>> {
        Vec::new()
    }

    fn parameters_mut(&mut self) -> Vec<&mut Tensor<T>> {
        Vec::new()
    }

    fn set_training(&mut self, _training: bool) {}

    fn clone_box(&self) -> Box<dyn Layer<T>> {
        Box::new(*self)
    }

    fn layer_type(&self) -> LayerType {
        LayerType::MaskedSoftmax
    }
}

impl<T: Float + 'static> MaskedLayer<T> for MaskedSoftmax {
    fn forward_masked(&self, input: &Tensor<T>, mask: Option<&Tensor<bool>>) -> Result<Tensor<T>> {
        MaskedSoftmax::forward(self, input, mask)
    }

    fn clone_masked_box(&self) -> Box<dyn MaskedLayer<T>> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::SemanticVersion;
    use maskflow_core::ops::softmax;

    #[test]
    fn test_default_dim_is_none() {
        let layer = MaskedSoftmax::default();
        assert_eq!(layer.dim(), None);
        assert_eq!(layer.to_string(), "MaskedSoftmax(dim=None)");
    }

    #[test]
    fn test_unmasked_forward_is_softmax() {
        let x = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let layer = MaskedSoftmax::new(Some(0));
        assert_eq!(
            Layer::forward(&layer, &x).unwrap(),
            softmax(&x, Some(0)).unwrap()
        );
    }

    #[test]
    fn test_config_roundtrip_and_version_gate() {
        let layer = MaskedSoftmax::new(Some(1));
        assert_eq!(MaskedSoftmax::from_config(&layer.config()).unwrap(), layer);

        let future = MaskedSoftmaxConfig {
            version: SemanticVersion::new(CURRENT_VERSION.major + 1, 0, 0),
            dim: Some(1),
        };
        assert!(matches!(
            MaskedSoftmax::from_config(&future),
            Err(TensorError::SerializationError { .. })
        ));
    }

    #[test]
    fn test_older_and_same_major_configs_restore() {
        let legacy = MaskedSoftmaxConfig {
            version: SemanticVersion::default(),
            dim: None,
        };
        assert_eq!(MaskedSoftmax::from_config(&legacy).unwrap(), MaskedSoftmax::new(None));

        let later_minor = MaskedSoftmaxConfig {
            version: SemanticVersion::new(CURRENT_VERSION.major, CURRENT_VERSION.minor + 4, 0),
            dim: Some(-1),
        };
        assert_eq!(
            MaskedSoftmax::from_config(&later_minor).unwrap().dim(),
            Some(-1)
        );
    }
}
