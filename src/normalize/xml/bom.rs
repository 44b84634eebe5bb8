use super::XmlElement;
use crate::model::Bom;
use crate::normalize::{rules, DependencyGraph, Normalize, NormalizerFactory, Xml};
use crate::spec::Format;

impl Normalize<Bom> for NormalizerFactory<'_, Xml> {
    type Output = XmlElement;

    fn normalize(&self, bom: &Bom) -> Self::Output {
        let spec = self.spec();
        let mut element = XmlElement::new("bom").with_attribute("xmlns", spec.xml_namespace());
        if let Some(serial_number) = rules::serial_number(bom) {
            element.push_attribute("serialNumber", serial_number);
        }
        element.push_attribute("version", bom.version.to_string());

        if spec.supports_metadata() {
            let metadata = self.normalize(&bom.metadata);
            if metadata.has_children() {
                element.push_child(metadata);
            }
        }

        let mut components = XmlElement::new("components");
        components.extend(self.normalize(&bom.components));
        element.push_child(components);

        let references = rules::bom_external_references(spec, bom);
        element.push_optional(XmlElement::container(
            "externalReferences",
            self.normalize(&*references),
        ));

        if spec.supports_dependencies() {
            element.push_optional(XmlElement::container(
                "dependencies",
                self.normalize(&DependencyGraph::from_bom(bom)),
            ));
        }

        if spec.supports_bom_properties(Format::Xml) {
            element.push_optional(XmlElement::container(
                "properties",
                self.normalize(&bom.properties),
            ));
        }

        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Component, ComponentType, ExternalReference, ExternalReferenceType, Metadata, Property,
    };
    use crate::spec::{Spec, SpecVersion};

    const SERIAL: &str = "urn:uuid:12345678-dead-1337-beef-123456789012";

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Xml> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    #[test]
    fn test_header_attributes() {
        let bom = Bom::new().with_version(23).with_serial_number(SERIAL);
        let element = factory(SpecVersion::V1_2).normalize(&bom);
        assert_eq!(element.name(), "bom");
        assert_eq!(
            element.attributes(),
            &[
                ("xmlns".to_string(), "http://cyclonedx.org/schema/bom/1.2".to_string()),
                ("serialNumber".to_string(), SERIAL.to_string()),
                ("version".to_string(), "23".to_string()),
            ]
        );
        assert_eq!(element.child_names(), vec!["components"]);
    }

    #[test]
    fn test_child_order() {
        let lib = Component::new(ComponentType::Library, "lib").with_bom_ref("lib");
        let bom = Bom::new()
            .with_metadata(Metadata::new().with_component(
                Component::new(ComponentType::Application, "app")
                    .with_bom_ref("app")
                    .depends_on(&lib.bom_ref),
            ))
            .with_component(lib)
            .with_external_reference(ExternalReference::new(
                ExternalReferenceType::Website,
                "https://example.com",
            ))
            .with_property(Property::new("k", "v"));

        let element = factory(SpecVersion::V1_5).normalize(&bom);
        assert_eq!(
            element.child_names(),
            vec![
                "metadata",
                "components",
                "externalReferences",
                "dependencies",
                "properties",
            ]
        );

        let element = factory(SpecVersion::V1_2).normalize(&bom);
        assert_eq!(
            element.child_names(),
            vec!["metadata", "components", "externalReferences", "dependencies"]
        );
    }

    #[test]
    fn test_root_references_merged_without_metadata() {
        let bom = Bom::new()
            .with_metadata(Metadata::new().with_component(
                Component::new(ComponentType::Application, "app").with_external_reference(
                    ExternalReference::new(ExternalReferenceType::Vcs, "https://root"),
                ),
            ))
            .with_external_reference(ExternalReference::new(
                ExternalReferenceType::Website,
                "https://bom",
            ));

        let element = factory(SpecVersion::V1_1).normalize(&bom);
        assert_eq!(element.child_names(), vec!["components", "externalReferences"]);
        let urls: Vec<String> = element
            .child("externalReferences")
            .unwrap()
            .children()
            .map(|r| r.child("url").unwrap().text())
            .collect();
        assert_eq!(urls, vec!["https://bom", "https://root"]);
    }
}
