use super::Object;
use crate::normalize::{DependencyGraph, Json, Normalize, NormalizerFactory};
use serde_json::Value;

impl Normalize<DependencyGraph> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, graph: &DependencyGraph) -> Self::Output {
        graph
            .records()
            .iter()
            .map(|record| {
                let mut object = Object::new();
                object.insert("ref".to_string(), Value::from(record.reference.as_str()));
                if !record.depends_on.is_empty() {
                    object.insert(
                        "dependsOn".to_string(),
                        record.depends_on.iter().map(String::as_str).collect(),
                    );
                }
                Value::Object(object)
            })
            .collect()
    }
}
