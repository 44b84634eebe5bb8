use super::{SerializeOptions, Serializer};
use crate::error::Result;
use crate::model::Bom;
use crate::normalize::{Json, Normalize, NormalizerFactory};
use crate::spec::{Format, Spec, SpecVersion};
use serde_json::Value;

/// JSON serializer
#[derive(Debug, Clone, Copy)]
pub struct JsonSerializer {
    version: SpecVersion,
    options: SerializeOptions,
}

impl JsonSerializer {
    #[must_use]
    pub fn new(version: SpecVersion) -> Self {
        Self {
            version,
            options: SerializeOptions::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.options.pretty = pretty;
        self
    }

    #[must_use]
    pub const fn discriminate_bom_refs(mut self, discriminate: bool) -> Self {
        self.options.discriminate_bom_refs = discriminate;
        self
    }
}

impl Serializer for JsonSerializer {
    fn serialize(&self, bom: &Bom) -> Result<String> {
        let factory = NormalizerFactory::<Json>::new(Spec::for_version(self.version))?;
        let bom = self.options.prepare(bom);
        let document = factory.normalize(&*bom);
        tracing::debug!(
            version = %self.version,
            components = bom.component_count(),
            "Rendering JSON document"
        );
        if self.options.pretty {
            Ok(serde_json::to_string_pretty(&document)?)
        } else {
            render_json(&document)
        }
    }

    fn format(&self) -> Format {
        Format::Json
    }

    fn version(&self) -> SpecVersion {
        self.version
    }
}

/// Render a fragment compactly
pub fn render_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ExportError, NormalizeError};

    #[test]
    fn test_json_needs_1_2() {
        let err = JsonSerializer::new(SpecVersion::V1_1)
            .serialize(&Bom::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ExportError::Normalize(NormalizeError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_pretty_uses_two_spaces() {
        let text = JsonSerializer::new(SpecVersion::V1_6).serialize(&Bom::new()).unwrap();
        assert!(text.starts_with("{\n  \"$schema\""));
    }
}
