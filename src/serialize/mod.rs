//! Turning a [`Bom`] into a document.
//!
//! A serializer binds a spec version and output options, normalizes the BOM
//! with the matching backend and renders the resulting fragment tree.
//!
//! ```
//! use sbom_normalizer::model::Bom;
//! use sbom_normalizer::serialize::{JsonSerializer, Serializer};
//! use sbom_normalizer::spec::SpecVersion;
//!
//! let serializer = JsonSerializer::new(SpecVersion::V1_2).pretty(false);
//! let document = serializer.serialize(&Bom::new().with_version(23))?;
//! assert!(document.starts_with(r#"{"$schema":"http://cyclonedx.org/schema/bom-1.2b.schema.json""#));
//! # Ok::<(), sbom_normalizer::error::ExportError>(())
//! ```

mod json;
mod xml;

pub use json::{render_json, JsonSerializer};
pub use xml::{render_xml, XmlSerializer};

use crate::error::Result;
use crate::model::Bom;
use crate::normalize::discriminate_bom_refs;
use crate::spec::{Format, SpecVersion};
use std::borrow::Cow;
use std::io::Write;

/// Trait for BOM serializers
pub trait Serializer {
    /// Normalize and render a BOM
    fn serialize(&self, bom: &Bom) -> Result<String>;

    /// Write the rendered BOM to a writer
    fn write_to(&self, bom: &Bom, writer: &mut dyn Write) -> Result<()> {
        let document = self.serialize(bom)?;
        writer.write_all(document.as_bytes())?;
        Ok(())
    }

    /// Get the format this serializer produces
    fn format(&self) -> Format;

    /// Get the spec version this serializer targets
    fn version(&self) -> SpecVersion;
}

/// Options shared by both serializers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Indent nested structures by two spaces
    pub pretty: bool,
    /// Make bom-ref values unique before normalization
    pub discriminate_bom_refs: bool,
    /// Start XML output with an XML declaration
    pub xml_declaration: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            discriminate_bom_refs: true,
            xml_declaration: true,
        }
    }
}

impl SerializeOptions {
    /// The BOM to normalize under these options
    fn prepare<'b>(&self, bom: &'b Bom) -> Cow<'b, Bom> {
        if self.discriminate_bom_refs {
            Cow::Owned(discriminate_bom_refs(bom))
        } else {
            Cow::Borrowed(bom)
        }
    }
}

/// Create a serializer for the given format and version
#[must_use]
pub fn create_serializer(
    format: Format,
    version: SpecVersion,
    options: SerializeOptions,
) -> Box<dyn Serializer> {
    match format {
        Format::Xml => Box::new(XmlSerializer::new(version).with_options(options)),
        Format::Json => Box::new(JsonSerializer::new(version).with_options(options)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_serializer() {
        let serializer =
            create_serializer(Format::Xml, SpecVersion::V1_3, SerializeOptions::default());
        assert_eq!(serializer.format(), Format::Xml);
        assert_eq!(serializer.version(), SpecVersion::V1_3);
    }

    #[test]
    fn test_write_to() {
        let serializer = create_serializer(
            Format::Json,
            SpecVersion::V1_4,
            SerializeOptions {
                pretty: false,
                ..SerializeOptions::default()
            },
        );
        let mut out = Vec::new();
        serializer.write_to(&Bom::new(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#""specVersion":"1.4""#));
    }
}
