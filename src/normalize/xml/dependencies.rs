use super::XmlElement;
use crate::normalize::{DependencyGraph, Normalize, NormalizerFactory, Xml};

impl Normalize<DependencyGraph> for NormalizerFactory<'_, Xml> {
    type Output = Vec<XmlElement>;

    fn normalize(&self, graph: &DependencyGraph) -> Self::Output {
        graph
            .records()
            .iter()
            .map(|record| {
                let mut element =
                    XmlElement::new("dependency").with_attribute("ref", record.reference.as_str());
                element.extend(record.depends_on.iter().map(|target| {
                    XmlElement::new("dependency").with_attribute("ref", target.as_str())
                }));
                element
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Bom, Component, ComponentType};
    use crate::spec::{Spec, SpecVersion};

    #[test]
    fn test_nested_dependency_elements() {
        let lib = Component::new(ComponentType::Library, "lib").with_bom_ref("lib");
        let app = Component::new(ComponentType::Application, "app")
            .with_bom_ref("app")
            .depends_on(&lib.bom_ref);
        let bom = Bom::new().with_component(lib).with_component(app);

        let factory = NormalizerFactory::<Xml>::new(Spec::for_version(SpecVersion::V1_2)).unwrap();
        let elements = factory.normalize(&DependencyGraph::from_bom(&bom));

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].attribute("ref"), Some("lib"));
        assert!(!elements[0].has_children());
        assert_eq!(elements[1].attribute("ref"), Some("app"));
        let targets: Vec<_> = elements[1].children().filter_map(|c| c.attribute("ref")).collect();
        assert_eq!(targets, vec!["lib"]);
    }
}
