//! Persisted layer configuration

use super::versioned::SemanticVersion;
#[cfg(feature = "serialize")]
use maskflow_core::{Result, TensorError};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Persisted state of a [`MaskedSoftmax`](crate::layers::MaskedSoftmax)
///
/// Every field has a default, so records written before a field existed
/// still load: a missing `version` reads as `0.0.0` and a missing `dim` as
/// `None`.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedSoftmaxConfig {
    pub version: SemanticVersion,
    pub dim: Option<i32>,
}

#[cfg(feature = "serialize")]
impl MaskedSoftmaxConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            TensorError::serialization_error("MaskedSoftmaxConfig::from_json", &e.to_string())
        })
    }

    /// Render the configuration as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            TensorError::serialization_error("MaskedSoftmaxConfig::to_json", &e.to_string())
        })
    }
}

#[cfg(all(test, feature = "serialize"))]
mod tests {
    use super::*;
    use crate::serialization::CURRENT_VERSION;

    #[test]
    fn test_json_roundtrip() {
        let config = MaskedSoftmaxConfig {
            version: CURRENT_VERSION,
            dim: Some(-1),
        };
        let json = config.to_json().unwrap();
        assert_eq!(MaskedSoftmaxConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = MaskedSoftmaxConfig::from_json("{}").unwrap();
        assert_eq!(config.dim, None);
        assert_eq!(config.version, SemanticVersion::default());

        let config = MaskedSoftmaxConfig::from_json(r#"{"dim": 2}"#).unwrap();
        assert_eq!(config.dim, Some(2));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MaskedSoftmaxConfig::from_json(r#"{"dim": "last"}"#),
            Err(TensorError::SerializationError { .. })
        ));
    }
}
