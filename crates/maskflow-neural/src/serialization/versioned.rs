//! Versioned serialization utilities
//!
//! Semantic versioning for persisted layer configuration.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Current serialization format version
pub const CURRENT_VERSION: SemanticVersion = SemanticVersion {
    major: 0,
    minor: 1,
    patch: 0,
};

/// Semantic version for compatibility checking
///
/// The default, `0.0.0`, marks data written before versioning existed.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    /// Create a new semantic version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Check if this version breaks compatibility by being a later major release
    pub fn is_newer_major_than(&self, other: &SemanticVersion) -> bool {
        self.major > other.major
    }

    /// Check if this version needs migration from another version
    pub fn needs_migration_from(&self, other: &SemanticVersion) -> bool {
        self > other
    }
}

impl std::fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_display() {
        let version = SemanticVersion::new(1, 2, 3);
        assert_eq!(format!("{}", version), "1.2.3");
    }

    #[test]
    fn test_version_ordering() {
        let v1 = SemanticVersion::new(1, 0, 0);
        let v2 = SemanticVersion::new(1, 1, 0);
        let v3 = SemanticVersion::new(2, 0, 0);

        assert!(v3.is_newer_major_than(&v2));
        assert!(!v2.is_newer_major_than(&v1));
        assert!(v2.needs_migration_from(&v1));
        assert!(!v1.needs_migration_from(&v2));
    }

    #[test]
    fn test_legacy_default() {
        assert_eq!(SemanticVersion::default(), SemanticVersion::new(0, 0, 0));
        assert!(CURRENT_VERSION.needs_migration_from(&SemanticVersion::default()));
    }
}
