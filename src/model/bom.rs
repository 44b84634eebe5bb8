//! The BOM root aggregate.

use super::{
    Component, ComponentRepository, ExternalReference, ExternalReferenceRepository, Metadata,
    Property, PropertyRepository,
};

/// Bill of Materials - the root of the object graph handed to the normalizers.
#[derive(Debug, Clone, Default)]
pub struct Bom {
    /// Revision of this BOM; starts at 1 for a fresh document
    pub version: u32,
    /// `urn:uuid:` serial number; emitted only when well-formed
    pub serial_number: Option<String>,
    pub metadata: Metadata,
    pub components: ComponentRepository,
    pub external_references: ExternalReferenceRepository,
    pub properties: PropertyRepository,
}

impl Bom {
    /// Create an empty BOM with version 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: 1,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    #[must_use]
    pub fn with_serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.components.add(component);
        self
    }

    #[must_use]
    pub fn with_external_reference(mut self, reference: ExternalReference) -> Self {
        self.external_references.add(reference);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.add(property);
        self
    }

    /// The metadata root component followed by all BOM components
    pub fn all_components(&self) -> impl Iterator<Item = &Component> {
        self.metadata
            .component
            .iter()
            .chain(self.components.iter())
    }

    /// Total number of components, including the metadata root component
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len() + usize::from(self.metadata.component.is_some())
    }
}
