use super::{iri_reference, Object};
use crate::error::NormalizeError;
use crate::model::{License, LicenseAcknowledgement, LicenseRepository};
use crate::normalize::{rules, skip_on_error, Json, Normalize, NormalizerFactory};
use serde_json::Value;

impl NormalizerFactory<'_, Json> {
    fn license_object(
        &self,
        key: &str,
        value: &str,
        url: Option<&str>,
        acknowledgement: Option<LicenseAcknowledgement>,
    ) -> Result<Value, NormalizeError> {
        let mut license = Object::new();
        license.insert(key.to_string(), Value::from(value));
        if let Some(url) = url {
            license.insert("url".to_string(), Value::from(iri_reference(url)?));
        }
        self.insert_acknowledgement(&mut license, acknowledgement);

        let mut wrapper = Object::new();
        wrapper.insert("license".to_string(), Value::Object(license));
        Ok(Value::Object(wrapper))
    }

    fn insert_acknowledgement(
        &self,
        object: &mut Object,
        acknowledgement: Option<LicenseAcknowledgement>,
    ) {
        if !self.spec().supports_license_acknowledgement() {
            return;
        }
        if let Some(acknowledgement) = acknowledgement {
            object.insert(
                "acknowledgement".to_string(),
                Value::from(acknowledgement.as_str()),
            );
        }
    }
}

impl Normalize<License> for NormalizerFactory<'_, Json> {
    type Output = Result<Value, NormalizeError>;

    fn normalize(&self, license: &License) -> Self::Output {
        let spec = self.spec();
        match license {
            License::Expression(e) => {
                let mut object = Object::new();
                object.insert("expression".to_string(), Value::from(e.expression.as_str()));
                self.insert_acknowledgement(&mut object, e.acknowledgement);
                Ok(Value::Object(object))
            }
            License::Spdx(l) if spec.is_supported_license_identifier(&l.id) => {
                self.license_object("id", &l.id, l.url.as_deref(), l.acknowledgement)
            }
            License::Spdx(l) => {
                tracing::debug!(id = %l.id, "Unknown SPDX license id, emitting as name");
                self.license_object("name", &l.id, l.url.as_deref(), l.acknowledgement)
            }
            License::Named(l) => {
                self.license_object("name", &l.name, l.url.as_deref(), l.acknowledgement)
            }
        }
    }
}

impl Normalize<LicenseRepository> for NormalizerFactory<'_, Json> {
    type Output = Vec<Value>;

    fn normalize(&self, licenses: &LicenseRepository) -> Self::Output {
        skip_on_error(
            rules::effective_licenses(licenses),
            "license",
            |license: &License| self.normalize(license),
        )
    }
}
