//! Name/value properties.

use super::Repository;

/// Key-value property.
///
/// The name must be non-empty to be representable; this is checked when the
/// property is normalized, not when it is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: Option<String>,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// A property that only carries a name
    #[must_use]
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

pub type PropertyRepository = Repository<Property>;
