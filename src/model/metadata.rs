//! BOM metadata and the tools that produced it.

use super::{
    Component, ExternalReference, ExternalReferenceRepository, HashDictionary, Property,
    PropertyRepository, Repository,
};
use chrono::{DateTime, FixedOffset};

/// Tool used to create the BOM
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tool {
    pub vendor: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub hashes: HashDictionary,
    pub external_references: ExternalReferenceRepository,
}

impl Tool {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_hashes(mut self, hashes: HashDictionary) -> Self {
        self.hashes = hashes;
        self
    }

    #[must_use]
    pub fn with_external_reference(mut self, reference: ExternalReference) -> Self {
        self.external_references.add(reference);
        self
    }
}

pub type ToolRepository = Repository<Tool>;

/// Document-level metadata
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Creation time in any offset; emitted in UTC
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub tools: ToolRepository,
    /// The component the BOM describes
    pub component: Option<Component>,
    pub properties: PropertyRepository,
}

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tools.add(tool);
        self
    }

    #[must_use]
    pub fn with_component(mut self, component: Component) -> Self {
        self.component = Some(component);
        self
    }

    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.add(property);
        self
    }
}
