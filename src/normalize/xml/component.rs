use super::XmlElement;
use crate::error::NormalizeError;
use crate::model::{Component, ComponentEvidence, ComponentRepository};
use crate::normalize::{escape_any_uri, rules, skip_on_error, Normalize, NormalizerFactory, Xml};

impl Normalize<Component> for NormalizerFactory<'_, Xml> {
    type Output = Result<XmlElement, NormalizeError>;

    fn normalize(&self, component: &Component) -> Self::Output {
        let spec = self.spec();
        rules::check_component_type(spec, component)?;

        let mut element =
            XmlElement::new("component").with_attribute("type", component.component_type.as_str());
        if spec.supports_bom_ref() {
            if let Some(bom_ref) = component.bom_ref.value() {
                element.push_attribute("bom-ref", bom_ref);
            }
        }

        if spec.supports_component_author() {
            element.push_text_child("author", component.author.as_deref());
        }
        element.push_text_child("group", component.group.as_deref());
        element.push_child(XmlElement::text_element("name", component.name.as_str()));
        element.push_text_child("version", rules::component_version(spec, component));
        element.push_text_child("description", component.description.as_deref());
        element.push_optional(XmlElement::container(
            "hashes",
            self.normalize(&component.hashes),
        ));
        element.push_optional(XmlElement::container(
            "licenses",
            self.normalize(&component.licenses),
        ));
        if let Some(purl) = &component.purl {
            let purl = purl.to_string();
            match escape_any_uri(&purl) {
                Some(escaped) => element.push_child(XmlElement::text_element("purl", escaped)),
                None => tracing::debug!(%purl, "Omitting purl that is not a valid anyURI"),
            }
        }
        element.push_optional(XmlElement::container(
            "externalReferences",
            self.normalize(&component.external_references),
        ));
        if spec.supports_component_properties() {
            element.push_optional(XmlElement::container(
                "properties",
                self.normalize(&component.properties),
            ));
        }
        if spec.supports_component_evidence() {
            if let Some(evidence) = &component.evidence {
                element.push_optional(self.normalize(evidence));
            }
        }
        Ok(element)
    }
}

impl Normalize<ComponentEvidence> for NormalizerFactory<'_, Xml> {
    /// `None` when nothing survives normalization
    type Output = Option<XmlElement>;

    fn normalize(&self, evidence: &ComponentEvidence) -> Self::Output {
        let mut element = XmlElement::new("evidence");
        element.push_optional(XmlElement::container(
            "licenses",
            self.normalize(&evidence.licenses),
        ));
        let copyright: Vec<XmlElement> = evidence
            .copyright
            .iter()
            .map(|text| XmlElement::text_element("text", text.as_str()))
            .collect();
        element.push_optional(XmlElement::container("copyright", copyright));
        element.has_children().then_some(element)
    }
}

impl Normalize<ComponentRepository> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

    fn normalize(&self, components: &ComponentRepository) -> Self::Output {
        skip_on_error(components, "component", |component: &Component| {
            self.normalize(component)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ComponentType, ExternalReference, ExternalReferenceType, HashAlgorithm, HashDictionary,
        License, LicenseRepository, Property,
    };
    use crate::spec::{Spec, SpecVersion};
    use packageurl::PackageUrl;

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Xml> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    fn full_component() -> Component {
        Component::new(ComponentType::Library, "serde")
            .with_group("dtolnay")
            .with_version("1.0.200")
            .with_description("Serialization framework")
            .with_author("David Tolnay")
            .with_bom_ref("pkg:cargo/serde@1.0.200")
            .with_hashes(
                HashDictionary::new().with(HashAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e"),
            )
            .with_licenses(LicenseRepository::new().with(License::expression("MIT OR Apache-2.0")))
            .with_purl(PackageUrl::new("cargo", "serde").unwrap())
            .with_external_reference(ExternalReference::new(
                ExternalReferenceType::Vcs,
                "https://github.com/serde-rs/serde",
            ))
            .with_property(Property::new("cdx:cargo:edition", "2021"))
            .with_evidence(ComponentEvidence {
                licenses: LicenseRepository::new().with(License::spdx("MIT")),
                copyright: vec!["Copyright (c) David Tolnay".to_string()],
            })
    }

    #[test]
    fn test_full_component_layout() {
        let element = factory(SpecVersion::V1_6).normalize(&full_component()).unwrap();
        assert_eq!(element.attribute("type"), Some("library"));
        assert_eq!(element.attribute("bom-ref"), Some("pkg:cargo/serde@1.0.200"));
        assert_eq!(
            element.child_names(),
            vec![
                "author",
                "group",
                "name",
                "version",
                "description",
                "hashes",
                "licenses",
                "purl",
                "externalReferences",
                "properties",
                "evidence",
            ]
        );
        let evidence = element.child("evidence").unwrap();
        assert_eq!(evidence.child_names(), vec!["licenses", "copyright"]);
    }

    #[test]
    fn test_1_1_layout_drops_newer_fields() {
        let element = factory(SpecVersion::V1_1).normalize(&full_component()).unwrap();
        assert_eq!(
            element.child_names(),
            vec![
                "group",
                "name",
                "version",
                "description",
                "hashes",
                "licenses",
                "purl",
                "externalReferences",
            ]
        );
    }

    #[test]
    fn test_missing_version_placeholder() {
        let component = Component::new(ComponentType::Library, "anon");
        let element = factory(SpecVersion::V1_2).normalize(&component).unwrap();
        assert_eq!(element.child("version").map(XmlElement::text).as_deref(), Some(""));

        let element = factory(SpecVersion::V1_4).normalize(&component).unwrap();
        assert!(element.child("version").is_none());
    }

    #[test]
    fn test_unsupported_type_fails() {
        let component = Component::new(ComponentType::MachineLearningModel, "model")
            .with_group("acme")
            .with_version("2");
        let err = factory(SpecVersion::V1_4).normalize(&component).unwrap_err();
        match err {
            NormalizeError::UnsupportedType { subject, .. } => assert_eq!(subject, "acme/model@2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_evidence_is_omitted() {
        let component = Component::new(ComponentType::Library, "x")
            .with_evidence(ComponentEvidence::default());
        let element = factory(SpecVersion::V1_5).normalize(&component).unwrap();
        assert!(element.child("evidence").is_none());
    }

    #[test]
    fn test_repository_skips_unsupported() {
        let components = ComponentRepository::new()
            .with(Component::new(ComponentType::Library, "kept"))
            .with(Component::new(ComponentType::Data, "dropped"));
        let elements = factory(SpecVersion::V1_3).normalize(&components);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].child("name").unwrap().text(), "kept");
    }
}
