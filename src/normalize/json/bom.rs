use super::{insert_array, Object};
use crate::model::Bom;
use crate::normalize::{rules, DependencyGraph, Json, Normalize, NormalizerFactory};
use crate::spec::Format;
use serde_json::Value;

const BOM_FORMAT: &str = "CycloneDX";

impl Normalize<Bom> for NormalizerFactory<'_, Json> {
    type Output = Value;

    fn normalize(&self, bom: &Bom) -> Self::Output {
        let spec = self.spec();
        let mut object = Object::new();
        if let Some(schema) = spec.json_schema() {
            object.insert("$schema".to_string(), Value::from(schema));
        }
        object.insert("bomFormat".to_string(), Value::from(BOM_FORMAT));
        object.insert("specVersion".to_string(), Value::from(spec.version().as_str()));
        if let Some(serial_number) = rules::serial_number(bom) {
            object.insert("serialNumber".to_string(), Value::from(serial_number));
        }
        object.insert("version".to_string(), Value::from(bom.version));

        if spec.supports_metadata() {
            let metadata = self.normalize(&bom.metadata);
            if !metadata.is_empty() {
                object.insert("metadata".to_string(), Value::Object(metadata));
            }
        }

        object.insert(
            "components".to_string(),
            Value::Array(self.normalize(&bom.components)),
        );

        let references = rules::bom_external_references(spec, bom);
        insert_array(&mut object, "externalReferences", self.normalize(&*references));

        if spec.supports_dependencies() {
            insert_array(
                &mut object,
                "dependencies",
                self.normalize(&DependencyGraph::from_bom(bom)),
            );
        }

        if spec.supports_bom_properties(Format::Json) {
            insert_array(&mut object, "properties", self.normalize(&bom.properties));
        }

        Value::Object(object)
    }
}
