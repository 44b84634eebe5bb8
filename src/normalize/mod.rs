//! Spec-aware normalization of a [`Bom`](crate::model::Bom) into document fragments.
//!
//! A [`NormalizerFactory`] binds one [`Spec`] to one output backend ([`Xml`]
//! or [`Json`]). Every entity is normalized through the [`Normalize`] trait,
//! implemented once per (entity, backend) pair:
//!
//! - entity normalizers return `Result<Fragment, NormalizeError>`;
//! - collection normalizers return `Vec<Fragment>` and drop failing items;
//! - the BOM normalizer always returns a fragment.
//!
//! Normalizers are pure: they read the model and return owned fragments that
//! the caller attaches. Rendering to text lives in [`crate::serialize`].
//!
//! ```
//! use sbom_normalizer::model::Bom;
//! use sbom_normalizer::normalize::{Json, Normalize, NormalizerFactory};
//! use sbom_normalizer::spec::{Spec, SpecVersion};
//!
//! let factory = NormalizerFactory::<Json>::new(Spec::for_version(SpecVersion::V1_4))?;
//! let document = factory.normalize(&Bom::new());
//! assert_eq!(document["specVersion"], "1.4");
//! # Ok::<(), sbom_normalizer::error::NormalizeError>(())
//! ```

mod dependencies;
mod discriminator;
pub mod json;
mod rules;
mod uri;
pub mod xml;

pub use dependencies::{DependencyGraph, DependencyRecord};
pub use discriminator::discriminate_bom_refs;
pub use uri::{escape_any_uri, is_iri_reference};
pub use xml::{XmlElement, XmlNode};

use crate::error::NormalizeError;
use crate::spec::{Format, Spec};
use std::fmt;
use std::marker::PhantomData;

mod private {
    pub trait Sealed {}
    impl Sealed for super::Xml {}
    impl Sealed for super::Json {}
}

/// Output backend marker
pub trait Backend: private::Sealed {
    const FORMAT: Format;
}

/// XML backend: fragments are [`XmlElement`] trees
#[derive(Debug, Clone, Copy)]
pub struct Xml;

/// JSON backend: fragments are `serde_json` values
#[derive(Debug, Clone, Copy)]
pub struct Json;

impl Backend for Xml {
    const FORMAT: Format = Format::Xml;
}

impl Backend for Json {
    const FORMAT: Format = Format::Json;
}

/// Normalize one kind of entity.
///
/// Implemented on [`NormalizerFactory`] for every (entity, backend) pair.
pub trait Normalize<T: ?Sized> {
    type Output;

    fn normalize(&self, item: &T) -> Self::Output;
}

/// Normalization context: a spec bound to an output backend.
pub struct NormalizerFactory<'s, B> {
    spec: &'s Spec,
    backend: PhantomData<B>,
}

pub type XmlNormalizerFactory<'s> = NormalizerFactory<'s, Xml>;
pub type JsonNormalizerFactory<'s> = NormalizerFactory<'s, Json>;

impl<'s, B: Backend> NormalizerFactory<'s, B> {
    /// Bind a spec to this backend.
    ///
    /// Fails when the spec has no representation in the backend's format.
    pub fn new(spec: &'s Spec) -> Result<Self, NormalizeError> {
        if !spec.supports_format(B::FORMAT) {
            return Err(NormalizeError::UnsupportedFormat {
                format: B::FORMAT,
                version: spec.version(),
            });
        }
        Ok(Self {
            spec,
            backend: PhantomData,
        })
    }

    #[must_use]
    pub const fn spec(&self) -> &'s Spec {
        self.spec
    }

    #[must_use]
    pub const fn format(&self) -> Format {
        B::FORMAT
    }
}

impl<B> Clone for NormalizerFactory<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for NormalizerFactory<'_, B> {}

impl<B: Backend> fmt::Debug for NormalizerFactory<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizerFactory")
            .field("version", &self.spec.version())
            .field("format", &B::FORMAT)
            .finish()
    }
}

/// Normalize every item, dropping the ones that fail.
///
/// Each dropped item is logged at debug level with its error.
pub(crate) fn skip_on_error<'a, T: 'a, O>(
    items: impl IntoIterator<Item = &'a T>,
    entity: &'static str,
    mut normalize: impl FnMut(&'a T) -> Result<O, NormalizeError>,
) -> Vec<O> {
    items
        .into_iter()
        .filter_map(|item| match normalize(item) {
            Ok(fragment) => Some(fragment),
            Err(e) => {
                tracing::debug!(entity, error = %e, "Skipping item that cannot be normalized");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecVersion;

    #[test]
    fn test_factory_rejects_unsupported_format() {
        let err = NormalizerFactory::<Json>::new(Spec::for_version(SpecVersion::V1_1)).unwrap_err();
        assert_eq!(
            err,
            NormalizeError::UnsupportedFormat {
                format: Format::Json,
                version: SpecVersion::V1_1
            }
        );
        assert!(NormalizerFactory::<Xml>::new(Spec::for_version(SpecVersion::V1_1)).is_ok());
    }

    #[test]
    fn test_factory_reports_format() {
        let factory = NormalizerFactory::<Xml>::new(Spec::for_version(SpecVersion::V1_5)).unwrap();
        assert_eq!(factory.format(), Format::Xml);
        assert_eq!(factory.spec().version(), SpecVersion::V1_5);
    }

    #[test]
    fn test_skip_on_error_keeps_order() {
        let items = vec![1, -2, 3, -4, 5];
        let kept = skip_on_error(&items, "number", |n| {
            if *n > 0 {
                Ok(*n * 10)
            } else {
                Err(NormalizeError::EmptyName)
            }
        });
        assert_eq!(kept, vec![10, 30, 50]);
    }
}
