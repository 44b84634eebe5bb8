//! Configuration validation.

use super::types::ExportConfig;
use crate::spec::Spec;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for ExportConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let spec = Spec::for_version(self.spec_version);

        if !spec.supports_format(self.format) {
            let supported: Vec<_> = spec.formats().iter().map(|f| f.as_str()).collect();
            errors.push(ConfigError {
                field: "format".to_string(),
                message: format!(
                    "CycloneDX {} cannot be written as {}. Supported formats: {}",
                    self.spec_version,
                    self.format,
                    supported.join(", ")
                ),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Format, SpecVersion};

    #[test]
    fn test_default_is_valid() {
        assert!(ExportConfig::default().is_valid());
    }

    #[test]
    fn test_json_with_1_1_is_invalid() {
        let config = ExportConfig::builder()
            .spec_version(SpecVersion::V1_1)
            .format(Format::Json)
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "format");
        assert!(errors[0].to_string().starts_with("format: CycloneDX 1.1"));

        let config = ExportConfig::builder()
            .spec_version(SpecVersion::V1_1)
            .format(Format::Xml)
            .build();
        assert!(config.is_valid());
    }
}
