//! CycloneDX specification versions and their capabilities.
//!
//! Every version is described by one immutable [`Spec`] record held in a
//! static table (see `table.rs`), so the differences between versions can be
//! audited in one place. Normalizers consult the record instead of branching
//! on version numbers.
//!
//! ```
//! use sbom_normalizer::spec::{Format, Spec, SpecVersion};
//!
//! let spec = Spec::for_version(SpecVersion::V1_2);
//! assert!(spec.supports_format(Format::Json));
//! assert!(spec.supports_metadata());
//! assert!(!spec.supports_bom_properties(Format::Json));
//! ```

mod table;

use crate::model::{ComponentType, ExternalReferenceType, HashAlgorithm};
use clap::ValueEnum;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

/// A CycloneDX specification version
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum SpecVersion {
    #[serde(rename = "1.1")]
    V1_1,
    #[serde(rename = "1.2")]
    V1_2,
    #[serde(rename = "1.3")]
    V1_3,
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.5")]
    V1_5,
    #[serde(rename = "1.6")]
    V1_6,
}

impl SpecVersion {
    /// All known versions, oldest first
    pub const ALL: [Self; 6] = [
        Self::V1_1,
        Self::V1_2,
        Self::V1_3,
        Self::V1_4,
        Self::V1_5,
        Self::V1_6,
    ];

    /// The newest known version
    pub const LATEST: Self = Self::V1_6;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V1_1 => "1.1",
            Self::V1_2 => "1.2",
            Self::V1_3 => "1.3",
            Self::V1_4 => "1.4",
            Self::V1_5 => "1.5",
            Self::V1_6 => "1.6",
        }
    }
}

impl Default for SpecVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a version string names no known version
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown CycloneDX version '{input}' (supported: 1.1, 1.2, 1.3, 1.4, 1.5, 1.6)")]
pub struct UnknownSpecVersion {
    pub input: String,
}

impl FromStr for SpecVersion {
    type Err = UnknownSpecVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == bare)
            .ok_or_else(|| UnknownSpecVersion {
                input: s.to_string(),
            })
    }
}

/// Output document format
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Xml,
    #[default]
    Json,
}

impl Format {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "XML",
            Self::Json => "JSON",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional structural features of a version
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Features {
    pub metadata: bool,
    pub bom_ref: bool,
    pub dependencies: bool,
    pub external_reference_hashes: bool,
    pub tool_external_references: bool,
    pub metadata_properties: bool,
    pub component_author: bool,
    pub component_properties: bool,
    pub component_evidence: bool,
    pub bom_properties_xml: bool,
    pub bom_properties_json: bool,
    pub license_expression: bool,
    pub license_acknowledgement: bool,
    /// Component `version` is a required element
    pub requires_component_version: bool,
}

/// Capability record of one specification version.
///
/// Obtain instances through [`Spec::for_version`]; they are static and
/// read-only.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Spec {
    version: SpecVersion,
    formats: &'static [Format],
    component_types: &'static [ComponentType],
    hash_algorithms: &'static [HashAlgorithm],
    external_reference_types: &'static [ExternalReferenceType],
    features: Features,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_schema: Option<&'static str>,
}

static HEX_32: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{32}$").expect("static regex"));
static HEX_40: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{40}$").expect("static regex"));
static HEX_64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{64}$").expect("static regex"));
static HEX_96: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{96}$").expect("static regex"));
static HEX_128: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{128}$").expect("static regex"));

fn hex_pattern(len: usize) -> Option<&'static Regex> {
    match len {
        32 => Some(&*HEX_32),
        40 => Some(&*HEX_40),
        64 => Some(&*HEX_64),
        96 => Some(&*HEX_96),
        128 => Some(&*HEX_128),
        _ => None,
    }
}

impl Spec {
    /// The capability record for a version
    #[must_use]
    pub fn for_version(version: SpecVersion) -> &'static Self {
        table::lookup(version)
    }

    #[must_use]
    pub const fn version(&self) -> SpecVersion {
        self.version
    }

    #[must_use]
    pub const fn features(&self) -> &Features {
        &self.features
    }

    /// XML namespace of the `bom` root element
    #[must_use]
    pub fn xml_namespace(&self) -> String {
        format!("http://cyclonedx.org/schema/bom/{}", self.version)
    }

    /// JSON `$schema` URL, when one is published for this version
    #[must_use]
    pub const fn json_schema(&self) -> Option<&'static str> {
        self.json_schema
    }

    #[must_use]
    pub fn supports_format(&self, format: Format) -> bool {
        self.formats.contains(&format)
    }

    #[must_use]
    pub fn formats(&self) -> &'static [Format] {
        self.formats
    }

    #[must_use]
    pub fn is_supported_component_type(&self, component_type: ComponentType) -> bool {
        self.component_types.contains(&component_type)
    }

    #[must_use]
    pub fn component_types(&self) -> &'static [ComponentType] {
        self.component_types
    }

    #[must_use]
    pub fn is_supported_hash_algorithm(&self, algorithm: HashAlgorithm) -> bool {
        self.hash_algorithms.contains(&algorithm)
    }

    #[must_use]
    pub fn hash_algorithms(&self) -> &'static [HashAlgorithm] {
        self.hash_algorithms
    }

    /// Whether `content` has the hex digest shape expected for `algorithm`
    #[must_use]
    pub fn is_supported_hash_content(&self, algorithm: HashAlgorithm, content: &str) -> bool {
        algorithm
            .digest_hex_lengths()
            .iter()
            .filter_map(|len| hex_pattern(*len))
            .any(|pattern| pattern.is_match(content))
    }

    #[must_use]
    pub fn is_supported_external_reference_type(&self, ref_type: ExternalReferenceType) -> bool {
        self.external_reference_types.contains(&ref_type)
    }

    #[must_use]
    pub fn external_reference_types(&self) -> &'static [ExternalReferenceType] {
        self.external_reference_types
    }

    /// Whether `id` is a known SPDX license identifier
    #[must_use]
    pub fn is_supported_license_identifier(&self, id: &str) -> bool {
        spdx::license_id(id).is_some()
    }

    #[must_use]
    pub const fn supports_metadata(&self) -> bool {
        self.features.metadata
    }

    #[must_use]
    pub const fn supports_bom_ref(&self) -> bool {
        self.features.bom_ref
    }

    #[must_use]
    pub const fn supports_dependencies(&self) -> bool {
        self.features.dependencies
    }

    #[must_use]
    pub const fn supports_external_reference_hashes(&self) -> bool {
        self.features.external_reference_hashes
    }

    #[must_use]
    pub const fn supports_tool_external_references(&self) -> bool {
        self.features.tool_external_references
    }

    #[must_use]
    pub const fn supports_metadata_properties(&self) -> bool {
        self.features.metadata_properties
    }

    #[must_use]
    pub const fn supports_component_author(&self) -> bool {
        self.features.component_author
    }

    #[must_use]
    pub const fn supports_component_properties(&self) -> bool {
        self.features.component_properties
    }

    #[must_use]
    pub const fn supports_component_evidence(&self) -> bool {
        self.features.component_evidence
    }

    /// BOM-level `properties`, which JSON gained later than XML
    #[must_use]
    pub const fn supports_bom_properties(&self, format: Format) -> bool {
        match format {
            Format::Xml => self.features.bom_properties_xml,
            Format::Json => self.features.bom_properties_json,
        }
    }

    /// True for every version; expressions are never downgraded
    #[must_use]
    pub const fn supports_license_expression(&self) -> bool {
        self.features.license_expression
    }

    #[must_use]
    pub const fn supports_license_acknowledgement(&self) -> bool {
        self.features.license_acknowledgement
    }

    #[must_use]
    pub const fn requires_component_version(&self) -> bool {
        self.features.requires_component_version
    }
}
