//! Comparison configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::comparison::DEFAULT_PALETTE_SIZE;

/// Largest palette a presentation layer is expected to supply.
const MAX_PALETTE_SIZE: usize = 64;

/// Comparison registry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonConfig {
    /// Number of colors entries cycle through
    #[serde(default = "default_palette_size")]
    pub palette_size: usize,
}

impl ComparisonConfig {
    /// Validate comparison configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.palette_size == 0 || self.palette_size > MAX_PALETTE_SIZE {
            return Err(ValidationError::InvalidPaletteSize {
                max: MAX_PALETTE_SIZE,
                actual: self.palette_size,
            });
        }
        Ok(())
    }
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            palette_size: default_palette_size(),
        }
    }
}

fn default_palette_size() -> usize {
    DEFAULT_PALETTE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_config_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.palette_size, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_palette() {
        let config = ComparisonConfig { palette_size: 0 };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidPaletteSize { actual: 0, .. })
        ));
    }

    #[test]
    fn test_validation_rejects_oversized_palette() {
        let config = ComparisonConfig { palette_size: 65 };
        assert!(config.validate().is_err());
    }
}
