//! JSON backend.
//!
//! Fragments are `serde_json` values. With `preserve_order` enabled, object
//! keys render in insertion order, which follows the CycloneDX JSON schema
//! property order.

mod bom;
mod component;
mod dependencies;
mod external_reference;
mod hash;
mod license;
mod metadata;
mod property;

use crate::error::NormalizeError;
use crate::normalize::is_iri_reference;
use crate::spec::Format;
use serde_json::{Map, Value};

/// A JSON object under construction
pub type Object = Map<String, Value>;

/// Insert `key: text` when `text` is present
fn insert_text(object: &mut Object, key: &str, text: Option<&str>) {
    if let Some(text) = text {
        object.insert(key.to_string(), Value::from(text));
    }
}

/// Insert `key: [..]` unless the list is empty
fn insert_array(object: &mut Object, key: &str, items: Vec<Value>) {
    if !items.is_empty() {
        object.insert(key.to_string(), Value::Array(items));
    }
}

fn iri_reference(url: &str) -> Result<&str, NormalizeError> {
    if is_iri_reference(url) {
        Ok(url)
    } else {
        Err(NormalizeError::MalformedUrl {
            url: url.to_string(),
            format: Format::Json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_helpers_skip_empty() {
        let mut object = Object::new();
        insert_text(&mut object, "a", None);
        insert_array(&mut object, "b", Vec::new());
        assert!(object.is_empty());

        insert_text(&mut object, "a", Some(""));
        insert_array(&mut object, "b", vec![Value::from(1)]);
        assert_eq!(Value::Object(object), serde_json::json!({"a": "", "b": [1]}));
    }

    #[test]
    fn test_iri_reference() {
        assert!(iri_reference("https://x#frag").is_ok());
        assert!(matches!(
            iri_reference("https://x#a#b"),
            Err(NormalizeError::MalformedUrl { format: Format::Json, .. })
        ));
    }
}
