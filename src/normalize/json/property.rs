use super::{insert_text, Object};
use crate::error::NormalizeError;
use crate::model::{Property, PropertyRepository};
use crate::normalize::{rules, skip_on_error, Json, Normalize, NormalizerFactory};
use serde_json::Value;

impl Normalize<Property> for NormalizerFactory<'_, Json> {
    type Output = Result<Value, NormalizeError>;

    fn normalize(&self, property: &Property) -> Self::Output {
        rules::check_property(property)?;
        let mut object = Object::new();
        object.insert("name".to_string(), Value::from(property.name.as_str()));
        insert_text(&mut object, "value", property.value.as_deref());
        Ok(Value::Object(object))
    }
}

impl Normalize<PropertyRepository> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, properties: &PropertyRepository) -> Self::Output {
        skip_on_error(properties, "property", |property: &Property| {
            self.normalize(property)
        })
    }
}
