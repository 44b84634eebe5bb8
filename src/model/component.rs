//! Components and their evidence.

use super::{
    BomRef, BomRefRepository, ExternalReference, ExternalReferenceRepository, HashDictionary,
    LicenseRepository, Property, PropertyRepository, Repository,
};
use packageurl::PackageUrl;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Component type classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    Application,
    Framework,
    #[default]
    Library,
    OperatingSystem,
    Device,
    File,
    Container,
    Firmware,
    Platform,
    DeviceDriver,
    MachineLearningModel,
    Data,
    CryptographicAsset,
}

impl ComponentType {
    /// Every type known to any version
    pub const ALL: [Self; 13] = [
        Self::Application,
        Self::Framework,
        Self::Library,
        Self::OperatingSystem,
        Self::Device,
        Self::File,
        Self::Container,
        Self::Firmware,
        Self::Platform,
        Self::DeviceDriver,
        Self::MachineLearningModel,
        Self::Data,
        Self::CryptographicAsset,
    ];

    /// Name as it appears in CycloneDX documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Application => "application",
            Self::Framework => "framework",
            Self::Library => "library",
            Self::OperatingSystem => "operating-system",
            Self::Device => "device",
            Self::File => "file",
            Self::Container => "container",
            Self::Firmware => "firmware",
            Self::Platform => "platform",
            Self::DeviceDriver => "device-driver",
            Self::MachineLearningModel => "machine-learning-model",
            Self::Data => "data",
            Self::CryptographicAsset => "cryptographic-asset",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evidence collected while identifying a component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentEvidence {
    pub licenses: LicenseRepository,
    /// Copyright statements, one per entry
    pub copyright: Vec<String>,
}

impl ComponentEvidence {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty() && self.copyright.is_empty()
    }
}

/// A software or hardware component
#[derive(Debug, Clone)]
pub struct Component {
    pub component_type: ComponentType,
    pub name: String,
    pub group: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    /// Identity used for dependency edges
    pub bom_ref: BomRef,
    pub licenses: LicenseRepository,
    pub hashes: HashDictionary,
    pub purl: Option<PackageUrl<'static>>,
    pub external_references: ExternalReferenceRepository,
    pub properties: PropertyRepository,
    pub evidence: Option<ComponentEvidence>,
    /// Refs of other components this one depends on
    pub dependencies: BomRefRepository,
}

impl Component {
    /// Create a component with an unresolved bom-ref
    #[must_use]
    pub fn new(component_type: ComponentType, name: impl Into<String>) -> Self {
        Self {
            component_type,
            name: name.into(),
            group: None,
            version: None,
            description: None,
            author: None,
            bom_ref: BomRef::unresolved(),
            licenses: LicenseRepository::new(),
            hashes: HashDictionary::new(),
            purl: None,
            external_references: ExternalReferenceRepository::new(),
            properties: PropertyRepository::new(),
            evidence: None,
            dependencies: BomRefRepository::new(),
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn with_bom_ref(mut self, bom_ref: impl Into<BomRef>) -> Self {
        self.bom_ref = bom_ref.into();
        self
    }

    #[must_use]
    pub fn with_licenses(mut self, licenses: LicenseRepository) -> Self {
        self.licenses = licenses;
        self
    }

    #[must_use]
    pub fn with_hashes(mut self, hashes: HashDictionary) -> Self {
        self.hashes = hashes;
        self
    }

    #[must_use]
    pub fn with_purl(mut self, purl: PackageUrl<'static>) -> Self {
        self.purl = Some(purl);
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

    #[must_use]
    pub fn with_evidence(mut self, evidence: ComponentEvidence) -> Self {
        self.evidence = Some(evidence);
        self
    }

    /// Declare a dependency on another component's ref
    #[must_use]
    pub fn depends_on(mut self, bom_ref: &BomRef) -> Self {
        self.dependencies.add(bom_ref.clone());
        self
    }

    /// `group/name@version` for diagnostics
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut out = String::new();
        if let Some(group) = &self.group {
            out.push_str(group);
            out.push('/');
        }
        out.push_str(&self.name);
        if let Some(version) = &self.version {
            out.push('@');
            out.push_str(version);
        }
        out
    }
}

pub type ComponentRepository = Repository<Component>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let comp = Component::new(ComponentType::Library, "core")
            .with_group("org.example")
            .with_version("1.2.3");
        assert_eq!(comp.display_name(), "org.example/core@1.2.3");
        assert_eq!(
            Component::new(ComponentType::File, "x").display_name(),
            "x"
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(ComponentType::OperatingSystem.to_string(), "operating-system");
        assert_eq!(
            serde_json::to_string(&ComponentType::CryptographicAsset).unwrap(),
            "\"cryptographic-asset\""
        );
    }

    #[test]
    fn test_depends_on_shares_identity() {
        let dep = Component::new(ComponentType::Library, "dep");
        let comp = Component::new(ComponentType::Application, "app").depends_on(&dep.bom_ref);
        let declared = comp.dependencies.iter().next().unwrap();
        assert!(declared.same_identity(&dep.bom_ref));
    }
}
