use super::XmlElement;
use crate::error::NormalizeError;
use crate::model::{License, LicenseAcknowledgement, LicenseRepository};
use crate::normalize::{escape_any_uri, rules, skip_on_error, Normalize, NormalizerFactory, Xml};
use crate::spec::Format;

impl NormalizerFactory<'_, Xml> {
    fn license_element(
        &self,
        key: &str,
        value: &str,
        url: Option<&str>,
        acknowledgement: Option<LicenseAcknowledgement>,
    ) -> Result<XmlElement, NormalizeError> {
        let mut element = XmlElement::new("license");
        self.push_acknowledgement(&mut element, acknowledgement);
        element.push_child(XmlElement::text_element(key, value));
        if let Some(url) = url {
            let escaped = escape_any_uri(url).ok_or_else(|| NormalizeError::MalformedUrl {
                url: url.to_string(),
                format: Format::Xml,
            })?;
            element.push_child(XmlElement::text_element("url", escaped));
        }
        Ok(element)
    }

    fn push_acknowledgement(
        &self,
        element: &mut XmlElement,
        acknowledgement: Option<LicenseAcknowledgement>,
    ) {
        if !self.spec().supports_license_acknowledgement() {
            return;
        }
        if let Some(acknowledgement) = acknowledgement {
            element.push_attribute("acknowledgement", acknowledgement.as_str());
        }
    }
}

impl Normalize<License> for NormalizerFactory<'_, Xml> {
    type Output = Result<XmlElement, NormalizeError>;

    fn normalize(&self, license: &License) -> Self::Output {
        match license {
            License::Expression(e) => {
                let mut element = XmlElement::text_element("expression", e.expression.as_str());
                self.push_acknowledgement(&mut element, e.acknowledgement);
                Ok(element)
            }
            License::Spdx(l) => {
                self.license_element("id", &l.id, l.url.as_deref(), l.acknowledgement)
            }
            License::Named(l) => {
                self.license_element("name", &l.name, l.url.as_deref(), l.acknowledgement)
            }
        }
    }
}

impl Normalize<LicenseRepository> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

    fn normalize(&self, licenses: &LicenseRepository) -> Self::Output {
        skip_on_error(
            rules::effective_licenses(licenses),
            "license",
            |license: &License| self.normalize(license),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NamedLicense;
    use crate::spec::{Spec, SpecVersion};

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Xml> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    #[test]
    fn test_identified_license() {
        let element = factory(SpecVersion::V1_4)
            .normalize(&License::spdx("MIT"))
            .unwrap();
        assert_eq!(element.name(), "license");
        assert_eq!(element.child("id").unwrap().text(), "MIT");
    }

    #[test]
    fn test_unknown_id_is_kept_as_id() {
        let element = factory(SpecVersion::V1_4)
            .normalize(&License::spdx("Not-A-Real-Id"))
            .unwrap();
        assert_eq!(element.child_names(), vec!["id"]);
    }

    #[test]
    fn test_named_license_with_url() {
        let license =
            License::Named(NamedLicense::new("Custom").with_url("https://example.com/license"));
        let element = factory(SpecVersion::V1_4).normalize(&license).unwrap();
        assert_eq!(element.child_names(), vec!["name", "url"]);
    }

    #[test]
    fn test_acknowledgement_only_in_1_6() {
        let license = License::expression("MIT OR Apache-2.0")
            .acknowledged(LicenseAcknowledgement::Concluded);

        let element = factory(SpecVersion::V1_6).normalize(&license).unwrap();
        assert_eq!(element.name(), "expression");
        assert_eq!(element.attribute("acknowledgement"), Some("concluded"));

        let element = factory(SpecVersion::V1_5).normalize(&license).unwrap();
        assert_eq!(element.attribute("acknowledgement"), None);
    }

    #[test]
    fn test_mixed_set_keeps_first_expression() {
        let licenses = LicenseRepository::new()
            .with(License::spdx("MIT"))
            .with(License::expression("GPL-2.0-only OR BSD-3-Clause"))
            .with(License::expression("ISC"));
        let elements = factory(SpecVersion::V1_3).normalize(&licenses);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].text(), "GPL-2.0-only OR BSD-3-Clause");
    }

    #[test]
    fn test_malformed_license_url_is_skipped() {
        let licenses = LicenseRepository::new()
            .with(License::Named(NamedLicense::new("Bad").with_url("")))
            .with(License::spdx("MIT"));
        let elements = factory(SpecVersion::V1_4).normalize(&licenses);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].child("id").unwrap().text(), "MIT");
    }
}
