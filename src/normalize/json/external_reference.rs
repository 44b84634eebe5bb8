use super::{insert_array, insert_text, iri_reference, Object};
use crate::error::NormalizeError;
use crate::model::{ExternalReference, ExternalReferenceRepository};
use crate::normalize::{rules, skip_on_error, Json, Normalize, NormalizerFactory};
use serde_json::Value;

impl Normalize<ExternalReference> for NormalizerFactory<'_, Json> {
    type Output = Result<Value, NormalizeError>;

    fn normalize(&self, reference: &ExternalReference) -> Self::Output {
        let ref_type = rules::external_reference_type(self.spec(), reference)?;
        let url = iri_reference(&reference.url)?;

        let mut object = Object::new();
        object.insert("url".to_string(), Value::from(url));
        insert_text(&mut object, "comment", reference.comment.as_deref());
        object.insert("type".to_string(), Value::from(ref_type.as_str()));
        if self.spec().supports_external_reference_hashes() {
            insert_array(&mut object, "hashes", self.normalize(&reference.hashes));
        }
        Ok(Value::Object(object))
    }
}

impl Normalize<ExternalReferenceRepository> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, references: &ExternalReferenceRepository) -> Self::Output {
        skip_on_error(references, "external reference", |reference: &ExternalReference| {
            self.normalize(reference)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExternalReferenceType;
    use crate::spec::{Format, Spec, SpecVersion};
    use serde_json::json;

    fn factory(version: SpecVersion) -> NormalizerFactory<'static, Json> {
        NormalizerFactory::new(Spec::for_version(version)).unwrap()
    }

    #[test]
    fn test_reference_object() {
        let reference = ExternalReference::new(ExternalReferenceType::ReleaseNotes, "https://x/notes")
            .with_comment("latest");
        assert_eq!(
            factory(SpecVersion::V1_4).normalize(&reference).unwrap(),
            json!({"url": "https://x/notes", "comment": "latest", "type": "release-notes"})
        );
        assert_eq!(
            factory(SpecVersion::V1_3).normalize(&reference).unwrap()["type"],
            "other"
        );
    }

    #[test]
    fn test_url_outside_iri_grammar_is_rejected() {
        for url in ["https://x/a b", "https://x/<script>", "https://x/\n", "http://x/\"q\""] {
            let reference = ExternalReference::new(ExternalReferenceType::Website, url);
            assert_eq!(
                factory(SpecVersion::V1_4).normalize(&reference),
                Err(NormalizeError::MalformedUrl {
                    url: url.to_string(),
                    format: Format::Json
                })
            );
        }
    }

    #[test]
    fn test_malformed_url() {
        let reference = ExternalReference::new(ExternalReferenceType::Website, "");
        assert_eq!(
            factory(SpecVersion::V1_4).normalize(&reference),
            Err(NormalizeError::MalformedUrl {
                url: String::new(),
                format: Format::Json
            })
        );
    }
}
