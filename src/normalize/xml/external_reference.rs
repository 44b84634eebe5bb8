use super::XmlElement;
use crate::error::NormalizeError;
use crate::model::{ExternalReference, ExternalReferenceRepository};
use crate::normalize::{escape_any_uri, rules, skip_on_error, Normalize, NormalizerFactory, Xml};
use crate::spec::Format;

impl Normalize<ExternalReference> for NormalizerFactory<'_, Xml> {
    type Output = Result<XmlElement, NormalizeError>;

    fn normalize(&self, reference: &ExternalReference) -> Self::Output {
        let ref_type = rules::external_reference_type(self.spec(), reference)?;
        let url = escape_any_uri(&reference.url).ok_or_else(|| NormalizeError::MalformedUrl {
            url: reference.url.clone(),
            format: Format::Xml,
        })?;

        let mut element = XmlElement::new("reference").with_attribute("type", ref_type.as_str());
        element.push_child(XmlElement::text_element("url", url));
        element.push_text_child("comment", reference.comment.as_deref());
        if self.spec().supports_external_reference_hashes() {
            element.push_optional(XmlElement::container(
                "hashes",
                self.normalize(&reference.hashes),
            ));
        }
        Ok(element)
    }
}

impl Normalize<ExternalReferenceRepository> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

    fn normalize(&self, references: &ExternalReferenceRepository) -> Self::Output {
        skip_on_error(references, "external reference", |reference: &ExternalReference| {
            self.normalize(reference)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExternalReferenceType, HashAlgorithm, HashDictionary};
    use crate::spec::{Spec, SpecVersion};

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Xml> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    fn with_hash() -> ExternalReference {
        ExternalReference::new(ExternalReferenceType::Vcs, "https://example.com/repo.git")
            .with_comment("sources")
            .with_hashes(
                HashDictionary::new().with(HashAlgorithm::Md5, "d41d8cd98f00b204e9800998ecf8427e"),
            )
    }

    #[test]
    fn test_reference_layout() {
        let element = factory(SpecVersion::V1_3).normalize(&with_hash()).unwrap();
        assert_eq!(element.attribute("type"), Some("vcs"));
        assert_eq!(element.child_names(), vec!["url", "comment", "hashes"]);
    }

    #[test]
    fn test_hashes_need_support() {
        let element = factory(SpecVersion::V1_2).normalize(&with_hash()).unwrap();
        assert_eq!(element.child_names(), vec!["url", "comment"]);
    }

    #[test]
    fn test_url_is_escaped() {
        let reference = ExternalReference::new(ExternalReferenceType::Website, "https://x/a b");
        let element = factory(SpecVersion::V1_4).normalize(&reference).unwrap();
        assert_eq!(element.child("url").unwrap().text(), "https://x/a%20b");
    }

    #[test]
    fn test_malformed_url_is_skipped_by_repository() {
        let references = ExternalReferenceRepository::new()
            .with(ExternalReference::new(ExternalReferenceType::Website, "https://x#a#b"))
            .with(ExternalReference::new(ExternalReferenceType::Website, "https://y"));
        let factory = factory(SpecVersion::V1_4);

        assert!(matches!(
            factory.normalize(&references.as_slice()[0]),
            Err(NormalizeError::MalformedUrl { .. })
        ));
        let elements = factory.normalize(&references);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].child("url").unwrap().text(), "https://y");
    }
}
