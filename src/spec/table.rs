//! Static capability table, one record per version.

use super::{Features, Format, Spec, SpecVersion};
use crate::model::ComponentType as C;
use crate::model::ExternalReferenceType as R;
use crate::model::HashAlgorithm as H;

const XML_ONLY: &[Format] = &[Format::Xml];
const XML_AND_JSON: &[Format] = &[Format::Xml, Format::Json];

const COMPONENT_TYPES_1_1: &[C] = &[
    C::Application,
    C::Framework,
    C::Library,
    C::OperatingSystem,
    C::Device,
    C::File,
];

const COMPONENT_TYPES_1_2: &[C] = &[
    C::Application,
    C::Framework,
    C::Library,
    C::Container,
    C::OperatingSystem,
    C::Device,
    C::Firmware,
    C::File,
];

const COMPONENT_TYPES_1_5: &[C] = &[
    C::Application,
    C::Framework,
    C::Library,
    C::Container,
    C::Platform,
    C::OperatingSystem,
    C::Device,
    C::DeviceDriver,
    C::Firmware,
    C::File,
    C::MachineLearningModel,
    C::Data,
];

const COMPONENT_TYPES_1_6: &[C] = &[
    C::Application,
    C::Framework,
    C::Library,
    C::Container,
    C::Platform,
    C::OperatingSystem,
    C::Device,
    C::DeviceDriver,
    C::Firmware,
    C::File,
    C::MachineLearningModel,
    C::Data,
    C::CryptographicAsset,
];

const HASH_ALGORITHMS_1_1: &[H] = &[
    H::Md5,
    H::Sha1,
    H::Sha256,
    H::Sha384,
    H::Sha512,
    H::Sha3_256,
    H::Sha3_384,
    H::Sha3_512,
];

const HASH_ALGORITHMS_1_2: &[H] = &[
    H::Md5,
    H::Sha1,
    H::Sha256,
    H::Sha384,
    H::Sha512,
    H::Sha3_256,
    H::Sha3_384,
    H::Sha3_512,
    H::Blake2b256,
    H::Blake2b384,
    H::Blake2b512,
    H::Blake3,
];

const REFERENCE_TYPES_1_1: &[R] = &[
    R::Vcs,
    R::IssueTracker,
    R::Website,
    R::Advisories,
    R::Bom,
    R::MailingList,
    R::Social,
    R::Chat,
    R::Documentation,
    R::Support,
    R::Distribution,
    R::License,
    R::BuildMeta,
    R::BuildSystem,
    R::Other,
];

const REFERENCE_TYPES_1_4: &[R] = &[
    R::Vcs,
    R::IssueTracker,
    R::Website,
    R::Advisories,
    R::Bom,
    R::MailingList,
    R::Social,
    R::Chat,
    R::Documentation,
    R::Support,
    R::Distribution,
    R::License,
    R::BuildMeta,
    R::BuildSystem,
    R::ReleaseNotes,
    R::Other,
];

const REFERENCE_TYPES_1_5: &[R] = &[
    R::Vcs,
    R::IssueTracker,
    R::Website,
    R::Advisories,
    R::Bom,
    R::MailingList,
    R::Social,
    R::Chat,
    R::Documentation,
    R::Support,
    R::Distribution,
    R::DistributionIntake,
    R::License,
    R::BuildMeta,
    R::BuildSystem,
    R::ReleaseNotes,
    R::SecurityContact,
    R::ModelCard,
    R::Log,
    R::Configuration,
    R::Evidence,
    R::Formulation,
    R::Attestation,
    R::ThreatModel,
    R::AdversaryModel,
    R::RiskAssessment,
    R::VulnerabilityAssertion,
    R::ExploitabilityStatement,
    R::PentestReport,
    R::StaticAnalysisReport,
    R::DynamicAnalysisReport,
    R::RuntimeAnalysisReport,
    R::ComponentAnalysisReport,
    R::MaturityReport,
    R::CertificationReport,
    R::CodifiedInfrastructure,
    R::QualityMetrics,
    R::Poam,
    R::Other,
];

const REFERENCE_TYPES_1_6: &[R] = &[
    R::Vcs,
    R::IssueTracker,
    R::Website,
    R::Advisories,
    R::Bom,
    R::MailingList,
    R::Social,
    R::Chat,
    R::Documentation,
    R::Support,
    R::SourceDistribution,
    R::Distribution,
    R::DistributionIntake,
    R::License,
    R::BuildMeta,
    R::BuildSystem,
    R::ReleaseNotes,
    R::SecurityContact,
    R::ModelCard,
    R::Log,
    R::Configuration,
    R::Evidence,
    R::Formulation,
    R::Attestation,
    R::ThreatModel,
    R::AdversaryModel,
    R::RiskAssessment,
    R::VulnerabilityAssertion,
    R::ExploitabilityStatement,
    R::PentestReport,
    R::StaticAnalysisReport,
    R::DynamicAnalysisReport,
    R::RuntimeAnalysisReport,
    R::ComponentAnalysisReport,
    R::MaturityReport,
    R::CertificationReport,
    R::CodifiedInfrastructure,
    R::QualityMetrics,
    R::Poam,
    R::ElectronicSignature,
    R::DigitalSignature,
    R::Rfc9116,
    R::Other,
];

const FEATURES_1_1: Features = Features {
    metadata: false,
    bom_ref: true,
    dependencies: false,
    external_reference_hashes: false,
    tool_external_references: false,
    metadata_properties: false,
    component_author: false,
    component_properties: false,
    component_evidence: false,
    bom_properties_xml: false,
    bom_properties_json: false,
    license_expression: true,
    license_acknowledgement: false,
    requires_component_version: true,
};

const FEATURES_1_2: Features = Features {
    metadata: true,
    dependencies: true,
    component_author: true,
    ..FEATURES_1_1
};

const FEATURES_1_3: Features = Features {
    external_reference_hashes: true,
    metadata_properties: true,
    component_properties: true,
    component_evidence: true,
    bom_properties_xml: true,
    ..FEATURES_1_2
};

const FEATURES_1_4: Features = Features {
    tool_external_references: true,
    requires_component_version: false,
    ..FEATURES_1_3
};

const FEATURES_1_5: Features = Features {
    bom_properties_json: true,
    ..FEATURES_1_4
};

const FEATURES_1_6: Features = Features {
    license_acknowledgement: true,
    ..FEATURES_1_5
};

static SPEC_1_1: Spec = Spec {
    version: SpecVersion::V1_1,
    formats: XML_ONLY,
    component_types: COMPONENT_TYPES_1_1,
    hash_algorithms: HASH_ALGORITHMS_1_1,
    external_reference_types: REFERENCE_TYPES_1_1,
    features: FEATURES_1_1,
    json_schema: None,
};

static SPEC_1_2: Spec = Spec {
    version: SpecVersion::V1_2,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_2,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: REFERENCE_TYPES_1_1,
    features: FEATURES_1_2,
    json_schema: Some("http://cyclonedx.org/schema/bom-1.2b.schema.json"),
};

static SPEC_1_3: Spec = Spec {
    version: SpecVersion::V1_3,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_2,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: REFERENCE_TYPES_1_1,
    features: FEATURES_1_3,
    json_schema: Some("http://cyclonedx.org/schema/bom-1.3a.schema.json"),
};

static SPEC_1_4: Spec = Spec {
    version: SpecVersion::V1_4,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_2,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: REFERENCE_TYPES_1_4,
    features: FEATURES_1_4,
    json_schema: Some("http://cyclonedx.org/schema/bom-1.4.schema.json"),
};

static SPEC_1_5: Spec = Spec {
    version: SpecVersion::V1_5,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_5,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: REFERENCE_TYPES_1_5,
    features: FEATURES_1_5,
    json_schema: Some("http://cyclonedx.org/schema/bom-1.5.schema.json"),
};

static SPEC_1_6: Spec = Spec {
    version: SpecVersion::V1_6,
    formats: XML_AND_JSON,
    component_types: COMPONENT_TYPES_1_6,
    hash_algorithms: HASH_ALGORITHMS_1_2,
    external_reference_types: REFERENCE_TYPES_1_6,
    features: FEATURES_1_6,
    json_schema: Some("http://cyclonedx.org/schema/bom-1.6.schema.json"),
};

pub(super) fn lookup(version: SpecVersion) -> &'static Spec {
    match version {
        SpecVersion::V1_1 => &SPEC_1_1,
        SpecVersion::V1_2 => &SPEC_1_2,
        SpecVersion::V1_3 => &SPEC_1_3,
        SpecVersion::V1_4 => &SPEC_1_4,
        SpecVersion::V1_5 => &SPEC_1_5,
        SpecVersion::V1_6 => &SPEC_1_6,
    }
}
