use super::{insert_array, insert_text, Object};
use crate::model::{Metadata, Tool, ToolRepository};
use crate::normalize::{rules, Json, Normalize, NormalizerFactory};
use serde_json::Value;

impl Normalize<Metadata> for NormalizerFactory<'_, Json> {
    /// Possibly empty; the BOM normalizer drops an empty `metadata`
    type Output = Object;

    fn normalize(&self, metadata: &Metadata) -> Self::Output {
        let mut object = Object::new();
        if let Some(timestamp) = &metadata.timestamp {
            object.insert(
                "timestamp".to_string(),
                Value::from(rules::timestamp(timestamp)),
            );
        }
        insert_array(&mut object, "tools", self.normalize(&metadata.tools));
        if let Some(component) = &metadata.component {
            match self.normalize(component) {
                Ok(component) => {
                    object.insert("component".to_string(), component);
                }
                Err(e) => tracing::warn!(error = %e, "Omitting metadata component"),
            }
        }
        if self.spec().supports_metadata_properties() {
            insert_array(&mut object, "properties", self.normalize(&metadata.properties));
        }
        object
    }
}

impl Normalize<Tool> for NormalizerFactory<'_, Json> {
    type Output = Value;

    fn normalize(&self, tool: &Tool) -> Self::Output {
        let mut object = Object::new();
        insert_text(&mut object, "vendor", tool.vendor.as_deref());
        insert_text(&mut object, "name", tool.name.as_deref());
        insert_text(&mut object, "version", tool.version.as_deref());
        insert_array(&mut object, "hashes", self.normalize(&tool.hashes));
        if self.spec().supports_tool_external_references() {
            insert_array(
                &mut object,
                "externalReferences",
                self.normalize(&tool.external_references),
            );
        }
        Value::Object(object)
    }
}

impl Normalize<ToolRepository> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, tools: &ToolRepository) -> Self::Output {
        tools.iter().map(|tool: &Tool| self.normalize(tool)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, ComponentType, Property};
    use crate::spec::{Spec, SpecVersion};
    use chrono::DateTime;
    use serde_json::json;

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Json> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    #[test]
    fn test_metadata_object() {
        let metadata = Metadata::new()
            .with_timestamp(DateTime::parse_from_rfc3339("2023-06-01T00:00:00-05:00").unwrap())
            .with_tool(Tool::new("cargo-cyclonedx").with_version("0.5.0"))
            .with_component(Component::new(ComponentType::Application, "app").with_version("1"))
            .with_property(Property::new("k", "v"));

        assert_eq!(
            Value::Object(factory(SpecVersion::V1_4).normalize(&metadata)),
            json!({
                "timestamp": "2023-06-01T05:00:00Z",
                "tools": [{"name": "cargo-cyclonedx", "version": "0.5.0"}],
                "component": {"type": "application", "name": "app", "version": "1"},
                "properties": [{"name": "k", "value": "v"}],
            })
        );
    }

    #[test]
    fn test_unsupported_root_component_is_omitted() {
        let metadata = Metadata::new().with_component(Component::new(
            ComponentType::CryptographicAsset,
            "key",
        ));
        assert!(factory(SpecVersion::V1_5).normalize(&metadata).is_empty());
    }
}
