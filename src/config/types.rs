//! Configuration types for BOM export.

use crate::serialize::{create_serializer, SerializeOptions, Serializer};
use crate::spec::{Format, SpecVersion};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Export Configuration
// ============================================================================

/// Configuration for turning a BOM into a document.
///
/// Every field has a default, so a config file only needs to name the values
/// it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExportConfig {
    /// Target CycloneDX version
    pub spec_version: SpecVersion,
    /// Output format
    pub format: Format,
    /// Indent nested elements/objects by two spaces
    pub pretty: bool,
    /// Make duplicate bom-ref values unique before export
    pub discriminate_bom_refs: bool,
    /// Start XML documents with `<?xml version="1.0" encoding="UTF-8"?>`
    pub xml_declaration: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            spec_version: SpecVersion::LATEST,
            format: Format::Json,
            pretty: true,
            discriminate_bom_refs: true,
            xml_declaration: true,
        }
    }
}

impl ExportConfig {
    /// Create a new `ExportConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `ExportConfig` builder.
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }

    /// Serializer options carried by this configuration
    #[must_use]
    pub const fn serialize_options(&self) -> SerializeOptions {
        SerializeOptions {
            pretty: self.pretty,
            discriminate_bom_refs: self.discriminate_bom_refs,
            xml_declaration: self.xml_declaration,
        }
    }

    /// Build the serializer this configuration describes.
    ///
    /// A format the target version cannot express is reported when the
    /// serializer runs; use [`Validatable`](super::Validatable) to catch it
    /// earlier.
    #[must_use]
    pub fn serializer(&self) -> Box<dyn Serializer> {
        create_serializer(self.format, self.spec_version, self.serialize_options())
    }
}

// ============================================================================
// Builder for ExportConfig
// ============================================================================

/// Builder for constructing `ExportConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct ExportConfigBuilder {
    config: ExportConfig,
}

impl ExportConfigBuilder {
    /// Set the target version.
    pub const fn spec_version(mut self, version: SpecVersion) -> Self {
        self.config.spec_version = version;
        self
    }

    /// Set the output format.
    pub const fn format(mut self, format: Format) -> Self {
        self.config.format = format;
        self
    }

    /// Set pretty printing.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Enable or disable bom-ref discrimination.
    pub const fn discriminate_bom_refs(mut self, discriminate: bool) -> Self {
        self.config.discriminate_bom_refs = discriminate;
        self
    }

    /// Enable or disable the XML declaration.
    pub const fn xml_declaration(mut self, declaration: bool) -> Self {
        self.config.xml_declaration = declaration;
        self
    }

    /// Build the `ExportConfig`.
    #[must_use]
    pub fn build(self) -> ExportConfig {
        self.config
    }
}
