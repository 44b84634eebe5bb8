//! **Spec-aware normalization of CycloneDX Bills of Materials.**
//!
//! `sbom-normalizer` turns an in-memory BOM into a CycloneDX document (XML or
//! JSON) for any version from 1.1 to 1.6. Each version supports a different
//! subset of fields and vocabularies; the engine decides, per field and per
//! version, whether a value is representable and how to degrade when it is
//! not. One invalid leaf never aborts an export: it is dropped and logged.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the BOM object graph ([`Bom`], [`Component`], licenses,
//!   hashes, external references, properties, tools).
//! - **[`spec`]**: one immutable capability record per CycloneDX version.
//! - **[`normalize`]**: the [`Normalize`] trait, implemented on
//!   [`NormalizerFactory`] for every (entity, backend) pair. Normalizers are
//!   pure and return owned fragments.
//! - **[`serialize`]**: [`XmlSerializer`] / [`JsonSerializer`], which
//!   normalize a BOM and render the result.
//! - **[`config`]**: [`ExportConfig`] with YAML file discovery and validation.
//!
//! ## Getting Started
//!
//! ```
//! use sbom_normalizer::model::{Bom, Component, ComponentType, License, LicenseRepository};
//! use sbom_normalizer::serialize::{Serializer, XmlSerializer};
//! use sbom_normalizer::spec::SpecVersion;
//!
//! let bom = Bom::new().with_component(
//!     Component::new(ComponentType::Library, "left-pad")
//!         .with_version("1.3.0")
//!         .with_licenses(LicenseRepository::new().with(License::spdx("WTFPL"))),
//! );
//!
//! let xml = XmlSerializer::new(SpecVersion::V1_4).serialize(&bom)?;
//! assert!(xml.contains("<id>WTFPL</id>"));
//! # Ok::<(), sbom_normalizer::error::ExportError>(())
//! ```
//!
//! ## Degradation at a Glance
//!
//! - Unsupported component types fail the component; collections skip it.
//! - Hashes with an unknown algorithm or a malformed digest are skipped.
//! - Unsupported external-reference types fall back to `other`.
//! - A license set mixing an expression with other licenses keeps only the
//!   first expression.
//! - Without metadata support, the root component's external references move
//!   to the BOM level.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors sections are aspirational
    clippy::missing_errors_doc,
    // Capability records legitimately use many bools for feature flags
    clippy::struct_excessive_bools,
    // Variable names like `element`/`elements` are clear in context
    clippy::similar_names
)]

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod serialize;
pub mod spec;

// Re-export main types for convenience
pub use config::{ConfigError, ExportConfig, ExportConfigBuilder, Validatable};
pub use error::{ExportError, NormalizeError, Result};
pub use model::{Bom, BomRef, Component, ComponentType, Metadata};
pub use normalize::{
    discriminate_bom_refs, DependencyGraph, Json, Normalize, NormalizerFactory, Xml,
};
pub use serialize::{create_serializer, JsonSerializer, SerializeOptions, Serializer, XmlSerializer};
pub use spec::{Format, Spec, SpecVersion};
