use super::XmlElement;
use crate::error::NormalizeError;
use crate::model::{Property, PropertyRepository};
use crate::normalize::{rules, skip_on_error, Normalize, NormalizerFactory, Xml};

impl Normalize<Property> for NormalizerFactory<'_, Xml> {
    type Output = Result<XmlElement, NormalizeError>;

    fn normalize(&self, property: &Property) -> Self::Output {
        rules::check_property(property)?;
        let mut element = XmlElement::new("property").with_attribute("name", property.name.as_str());
        if let Some(value) = &property.value {
            element.push_text(value.as_str());
        }
        Ok(element)
    }
}

impl Normalize<PropertyRepository> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

    fn normalize(&self, properties: &PropertyRepository) -> Self::Output {
        skip_on_error(properties, "property", |property: &Property| {
            self.normalize(property)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Spec, SpecVersion};

    #[test]
    fn test_empty_name_fails_for_every_version() {
        for version in SpecVersion::ALL {
            let factory = NormalizerFactory::<Xml>::new(Spec::for_version(version)).unwrap();
            assert_eq!(
                factory.normalize(&Property::new("", "x")),
                Err(NormalizeError::EmptyName)
            );
        }
    }

    #[test]
    fn test_repository_drops_nameless() {
        let factory = NormalizerFactory::<Xml>::new(Spec::for_version(SpecVersion::V1_3)).unwrap();
        let properties = PropertyRepository::new()
            .with(Property::new("a", "1"))
            .with(Property::new("", "2"))
            .with(Property::name_only("c"));

        let elements = factory.normalize(&properties);
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].attribute("name"), Some("a"));
        assert_eq!(elements[0].text(), "1");
        assert_eq!(elements[1].attribute("name"), Some("c"));
        assert!(!elements[1].has_children());
    }
}
