//! Unified error types for sbom-normalizer.
//!
//! Entity normalizers report [`NormalizeError`]; collection normalizers use it
//! as a skip signal and drop the failing item. [`ExportError`] covers the
//! serializer layer, where a normalization error can only be a rejected
//! format/version combination.

use crate::model::HashAlgorithm;
use crate::spec::{Format, SpecVersion};
use thiserror::Error;

// ============================================================================
// Normalization errors
// ============================================================================

/// Error raised while normalizing a single entity
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NormalizeError {
    /// The target version has no representation in the requested format
    #[error("{format} output is not supported by CycloneDX {version}")]
    UnsupportedFormat { format: Format, version: SpecVersion },

    /// Component type, or external-reference type after the `other` fallback
    #[error("Unsupported {entity} type '{type_name}' in CycloneDX {version}: {subject}")]
    UnsupportedType {
        entity: &'static str,
        type_name: &'static str,
        version: SpecVersion,
        /// Diagnostic identification of the offending entity
        subject: String,
    },

    #[error("Unsupported hash algorithm {algorithm} in CycloneDX {version}")]
    UnsupportedAlgorithm {
        algorithm: HashAlgorithm,
        version: SpecVersion,
    },

    #[error("Invalid {algorithm} hash content: '{content}'")]
    UnsupportedContent {
        algorithm: HashAlgorithm,
        content: String,
    },

    #[error("Malformed URL for {format} output: '{url}'")]
    MalformedUrl { url: String, format: Format },

    #[error("Property name must not be empty")]
    EmptyName,
}

// ============================================================================
// Export errors
// ============================================================================

/// Error raised while turning a BOM into a document
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExportError {
    #[error("Normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("XML rendering failed: {0}")]
    Xml(String),

    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendered document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    /// Create an XML rendering error from any displayable cause
    pub fn xml(cause: impl std::fmt::Display) -> Self {
        Self::Xml(cause.to_string())
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_type_message_names_subject() {
        let err = NormalizeError::UnsupportedType {
            entity: "component",
            type_name: "firmware",
            version: SpecVersion::V1_1,
            subject: "acme/widget@1.0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("firmware"));
        assert!(msg.contains("acme/widget@1.0"));
        assert!(msg.contains("1.1"));
    }

    #[test]
    fn test_export_error_wraps_normalize_error() {
        let err: ExportError = NormalizeError::UnsupportedFormat {
            format: Format::Json,
            version: SpecVersion::V1_1,
        }
        .into();
        assert!(matches!(
            err,
            ExportError::Normalize(NormalizeError::UnsupportedFormat { .. })
        ));
        assert_eq!(
            err.to_string(),
            "Normalization failed: JSON output is not supported by CycloneDX 1.1"
        );
    }
}
