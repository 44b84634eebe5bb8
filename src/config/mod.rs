//! Export configuration.
//!
//! This module provides:
//! - The [`ExportConfig`] structure and its builder
//! - Validation of format/version combinations
//! - YAML config file loading and discovery
//! - A JSON Schema for editor support
//!
//! # Quick Start
//!
//! ```
//! use sbom_normalizer::config::{ExportConfig, Validatable};
//! use sbom_normalizer::spec::{Format, SpecVersion};
//!
//! let config = ExportConfig::builder()
//!     .spec_version(SpecVersion::V1_4)
//!     .format(Format::Xml)
//!     .pretty(false)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-normalizer.yaml` file in your project root or
//! `~/.config/sbom-normalizer/`:
//!
//! ```yaml
//! spec_version: "1.5"
//! format: xml
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{ExportConfig, ExportConfigBuilder};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// Generate a JSON Schema for the `ExportConfig` configuration format.
///
/// This schema documents all options that can be set in
/// `.sbom-normalizer.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(ExportConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_names_fields() {
        let schema = generate_json_schema().unwrap();
        for field in [
            "spec_version",
            "format",
            "pretty",
            "discriminate_bom_refs",
            "xml_declaration",
        ] {
            assert!(schema.contains(field), "schema is missing {field}");
        }
    }
}
