use super::{SerializeOptions, Serializer};
use crate::error::{ExportError, Result};
use crate::model::Bom;
use crate::normalize::{Normalize, NormalizerFactory, Xml, XmlElement, XmlNode};
use crate::spec::{Format, Spec, SpecVersion};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// XML serializer
#[derive(Debug, Clone, Copy)]
pub struct XmlSerializer {
    version: SpecVersion,
    options: SerializeOptions,
}

impl XmlSerializer {
    #[must_use]
    pub fn new(version: SpecVersion) -> Self {
        Self {
            version,
            options: SerializeOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.options.pretty = pretty;
        self
    }

    #[must_use]
    pub const fn xml_declaration(mut self, declaration: bool) -> Self {
        self.options.xml_declaration = declaration;
        self
    }

    #[must_use]
    pub const fn discriminate_bom_refs(mut self, discriminate: bool) -> Self {
        self.options.discriminate_bom_refs = discriminate;
        self
    }
}

impl Serializer for XmlSerializer {
    fn serialize(&self, bom: &Bom) -> Result<String> {
        let factory = NormalizerFactory::<Xml>::new(Spec::for_version(self.version))?;
        let bom = self.options.prepare(bom);
        let root = factory.normalize(&*bom);
        tracing::debug!(
            version = %self.version,
            components = bom.component_count(),
            "Rendering XML document"
        );
        write_document(&root, self.options.pretty, self.options.xml_declaration)
    }

    fn format(&self) -> Format {
        Format::Xml
    }

    fn version(&self) -> SpecVersion {
        self.version
    }
}

/// Render a fragment compactly, without an XML declaration.
///
/// Empty elements keep explicit start and end tags.
pub fn render_xml(element: &XmlElement) -> Result<String> {
    write_document(element, false, false)
}

fn write_document(element: &XmlElement, pretty: bool, declaration: bool) -> Result<String> {
    let mut writer = if pretty {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };
    if declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(ExportError::xml)?;
    }
    write_element(&mut writer, element)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(ExportError::xml)?;
    for node in element.nodes() {
        match node {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(ExportError::xml)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(ExportError::xml)?;
    Ok(())
}
