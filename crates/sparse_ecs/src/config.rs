//! # Registry Configuration
//!
//! Sizing hints for a [`Registry`](crate::Registry), loaded once at startup
//! from TOML.
//!
//! ```toml
//! store_capacity = 1024
//! expected_types = 16
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{EcsError, EcsResult};

/// Largest per-store reserve a configuration may ask for.
pub const MAX_STORE_CAPACITY: usize = 1 << 24;

/// Largest number of expected component types a configuration may ask for.
pub const MAX_EXPECTED_TYPES: usize = 1 << 12;

/// Capacity hints applied when a registry creates its stores.
///
/// Both fields are hints only. Stores grow past them as needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Entries reserved up front in each lazily created component store.
    pub store_capacity: usize,
    /// Number of distinct component types the registry expects to see.
    pub expected_types: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            store_capacity: 0,
            expected_types: 8,
        }
    }
}

impl RegistryConfig {
    /// Parses and validates a configuration from a TOML string.
    ///
    /// Missing keys fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidConfig`] if the TOML is malformed, has
    /// unknown keys, or asks for more per-store capacity than there are
    /// entity ids.
    pub fn from_toml_str(source: &str) -> EcsResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| EcsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::ConfigIo`] if the file cannot be read, or any
    /// error from [`RegistryConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> EcsResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| EcsError::ConfigIo {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks that both hints are small enough to reserve up front.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::InvalidConfig`] if `store_capacity` exceeds
    /// [`MAX_STORE_CAPACITY`] or `expected_types` exceeds
    /// [`MAX_EXPECTED_TYPES`].
    pub fn validate(&self) -> EcsResult<()> {
        if self.store_capacity > MAX_STORE_CAPACITY {
            return Err(EcsError::InvalidConfig(format!(
                "store_capacity {} exceeds the limit of {MAX_STORE_CAPACITY}",
                self.store_capacity
            )));
        }
        if self.expected_types > MAX_EXPECTED_TYPES {
            return Err(EcsError::InvalidConfig(format!(
                "expected_types {} exceeds the limit of {MAX_EXPECTED_TYPES}",
                self.expected_types
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_toml() {
        let config = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RegistryConfig::default());
    }

    #[test]
    fn test_parse_values() {
        let config =
            RegistryConfig::from_toml_str("store_capacity = 256\nexpected_types = 4\n").unwrap();
        assert_eq!(config.store_capacity, 256);
        assert_eq!(config.expected_types, 4);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = RegistryConfig::from_toml_str("capacity = 3").unwrap_err();
        assert!(matches!(err, EcsError::InvalidConfig(_)));
    }

    #[test]
    fn test_oversized_store_capacity_rejected() {
        let err = RegistryConfig::from_toml_str("store_capacity = 4294967296").unwrap_err();
        assert!(matches!(err, EcsError::InvalidConfig(ref msg) if msg.contains("store_capacity")));

        let at_limit = format!("store_capacity = {MAX_STORE_CAPACITY}");
        assert!(RegistryConfig::from_toml_str(&at_limit).is_ok());
    }

    #[test]
    fn test_oversized_expected_types_rejected() {
        let err =
            RegistryConfig::from_toml_str("expected_types = 9223372036854775807").unwrap_err();
        assert!(matches!(err, EcsError::InvalidConfig(ref msg) if msg.contains("expected_types")));

        let config = RegistryConfig {
            store_capacity: 0,
            expected_types: MAX_EXPECTED_TYPES + 1,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = RegistryConfig::from_toml_file("/nonexistent/sparse_ecs.toml").unwrap_err();
        assert!(matches!(err, EcsError::ConfigIo { .. }));
    }
}
