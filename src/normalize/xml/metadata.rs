use super::XmlElement;
use crate::model::{Metadata, Tool, ToolRepository};
use crate::normalize::{rules, Normalize, NormalizerFactory, Xml};

impl Normalize<Metadata> for NormalizerFactory<'_, Xml> {
    /// Possibly childless; the BOM normalizer drops an empty `metadata`
    type Output = XmlElement;

    fn normalize(&self, metadata: &Metadata) -> Self::Output {
        let mut element = XmlElement::new("metadata");
        if let Some(timestamp) = &metadata.timestamp {
            element.push_child(XmlElement::text_element(
                "timestamp",
                rules::timestamp(timestamp),
            ));
        }
        element.push_optional(XmlElement::container("tools", self.normalize(&metadata.tools)));
        if let Some(component) = &metadata.component {
            match self.normalize(component) {
                Ok(component) => element.push_child(component),
                Err(e) => tracing::warn!(error = %e, "Omitting metadata component"),
            }
        }
        if self.spec().supports_metadata_properties() {
            element.push_optional(XmlElement::container(
                "properties",
                self.normalize(&metadata.properties),
            ));
        }
        element
    }
}

impl Normalize<Tool> for NormalizerFactory<'_, Xml> {
    type Output = XmlElement;

    fn normalize(&self, tool: &Tool) -> Self::Output {
        let mut element = XmlElement::new("tool");
        element.push_text_child("vendor", tool.vendor.as_deref());
        element.push_text_child("name", tool.name.as_deref());
        element.push_text_child("version", tool.version.as_deref());
        element.push_optional(XmlElement::container("hashes", self.normalize(&tool.hashes)));
        if self.spec().supports_tool_external_references() {
            element.push_optional(XmlElement::container(
                "externalReferences",
                self.normalize(&tool.external_references),
            ));
        }
        element
    }
}

impl Normalize<ToolRepository> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

    fn normalize(&self, tools: &ToolRepository) -> Self::Output {
        tools.iter().map(|tool: &Tool| self.normalize(tool)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, ComponentType, ExternalReference, ExternalReferenceType, Property};
    use crate::spec::{Spec, SpecVersion};
    use chrono::DateTime;

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Xml> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    fn tool() -> Tool {
        Tool::new("sbom-normalizer")
            .with_vendor("acme")
            .with_version("0.1.0")
            .with_external_reference(ExternalReference::new(
                ExternalReferenceType::Website,
                "https://example.com",
            ))
    }

    #[test]
    fn test_empty_metadata_has_no_children() {
        let element = factory(SpecVersion::V1_4).normalize(&Metadata::new());
        assert!(!element.has_children());
    }

    #[test]
    fn test_metadata_layout() {
        let metadata = Metadata::new()
            .with_timestamp(DateTime::parse_from_rfc3339("2024-01-02T03:04:05.678+01:00").unwrap())
            .with_tool(tool())
            .with_component(Component::new(ComponentType::Application, "app"))
            .with_property(Property::new("k", "v"));

        let element = factory(SpecVersion::V1_3).normalize(&metadata);
        assert_eq!(
            element.child_names(),
            vec!["timestamp", "tools", "component", "properties"]
        );
        assert_eq!(element.child("timestamp").unwrap().text(), "2024-01-02T02:04:05Z");

        let element = factory(SpecVersion::V1_2).normalize(&metadata);
        assert_eq!(element.child_names(), vec!["timestamp", "tools", "component"]);
    }

    #[test]
    fn test_unsupported_root_component_is_omitted() {
        let metadata = Metadata::new()
            .with_tool(tool())
            .with_component(Component::new(ComponentType::Data, "dataset"));
        let element = factory(SpecVersion::V1_4).normalize(&metadata);
        assert_eq!(element.child_names(), vec!["tools"]);
    }

    #[test]
    fn test_tool_references_need_support() {
        let element = factory(SpecVersion::V1_4).normalize(&tool());
        assert_eq!(
            element.child_names(),
            vec!["vendor", "name", "version", "externalReferences"]
        );
        let element = factory(SpecVersion::V1_3).normalize(&tool());
        assert_eq!(element.child_names(), vec!["vendor", "name", "version"]);
    }
}
