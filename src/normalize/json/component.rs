use super::{insert_array, insert_text, Object};
use crate::error::NormalizeError;
use crate::model::{Component, ComponentEvidence, ComponentRepository};
use crate::normalize::{is_iri_reference, rules, skip_on_error, Json, Normalize, NormalizerFactory};
use serde_json::Value;

impl Normalize<Component> for NormalizerFactory<'_, Json> {
    type Output = Result<Value, NormalizeError>;

    fn normalize(&self, component: &Component) -> Self::Output {
        let spec = self.spec();
        rules::check_component_type(spec, component)?;

        let mut object = Object::new();
        object.insert(
            "type".to_string(),
            Value::from(component.component_type.as_str()),
        );
        if spec.supports_bom_ref() {
            insert_text(&mut object, "bom-ref", component.bom_ref.value());
        }
        object.insert("name".to_string(), Value::from(component.name.as_str()));
        insert_text(&mut object, "version", rules::component_version(spec, component));
        insert_text(&mut object, "group", component.group.as_deref());
        insert_text(&mut object, "description", component.description.as_deref());
        if spec.supports_component_author() {
            insert_text(&mut object, "author", component.author.as_deref());
        }
        insert_array(&mut object, "licenses", self.normalize(&component.licenses));
        insert_array(&mut object, "hashes", self.normalize(&component.hashes));
        if let Some(purl) = &component.purl {
            let purl = purl.to_string();
            if is_iri_reference(&purl) {
                object.insert("purl".to_string(), Value::from(purl));
            } else {
                tracing::debug!(%purl, "Omitting purl that is not a valid iri-reference");
            }
        }
        insert_array(
            &mut object,
            "externalReferences",
            self.normalize(&component.external_references),
        );
        if spec.supports_component_properties() {
            insert_array(&mut object, "properties", self.normalize(&component.properties));
        }
        if spec.supports_component_evidence() {
            if let Some(evidence) = component.evidence.as_ref().and_then(|e| self.normalize(e)) {
                object.insert("evidence".to_string(), evidence);
            }
        }
        Ok(Value::Object(object))
    }
}

impl Normalize<ComponentEvidence> for NormalizerFactory<'_, Json> {
    /// `None` when nothing survives normalization
    type Output = Option<Value>;

    fn normalize(&self, evidence: &ComponentEvidence) -> Self::Output {
        let mut object = Object::new();
        insert_array(&mut object, "licenses", self.normalize(&evidence.licenses));
        let copyright = evidence
            .copyright
            .iter()
            .map(|text| {
                let mut entry = Object::new();
                entry.insert("text".to_string(), Value::from(text.as_str()));
                Value::Object(entry)
            })
            .collect();
        insert_array(&mut object, "copyright", copyright);
        (!object.is_empty()).then_some(Value::Object(object))
    }
}

impl Normalize<ComponentRepository> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, components: &ComponentRepository) -> Self::Output {
        skip_on_error(components, "component", |component: &Component| {
            self.normalize(component)
        })
    }
}
