//! External references to resources related to a BOM, component or tool.

use super::{HashDictionary, Repository};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External reference types known to any CycloneDX version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExternalReferenceType {
    Vcs,
    IssueTracker,
    Website,
    Advisories,
    Bom,
    MailingList,
    Social,
    Chat,
    Documentation,
    Support,
    Distribution,
    License,
    BuildMeta,
    BuildSystem,
    Other,
    ReleaseNotes,
    DistributionIntake,
    SecurityContact,
    ModelCard,
    Log,
    Configuration,
    Evidence,
    Formulation,
    Attestation,
    ThreatModel,
    AdversaryModel,
    RiskAssessment,
    VulnerabilityAssertion,
    ExploitabilityStatement,
    PentestReport,
    StaticAnalysisReport,
    DynamicAnalysisReport,
    RuntimeAnalysisReport,
    ComponentAnalysisReport,
    MaturityReport,
    CertificationReport,
    CodifiedInfrastructure,
    QualityMetrics,
    Poam,
    SourceDistribution,
    ElectronicSignature,
    DigitalSignature,
    #[serde(rename = "rfc-9116")]
    Rfc9116,
}

impl ExternalReferenceType {
    /// Name as it appears in CycloneDX documents
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vcs => "vcs",
            Self::IssueTracker => "issue-tracker",
            Self::Website => "website",
            Self::Advisories => "advisories",
            Self::Bom => "bom",
            Self::MailingList => "mailing-list",
            Self::Social => "social",
            Self::Chat => "chat",
            Self::Documentation => "documentation",
            Self::Support => "support",
            Self::Distribution => "distribution",
            Self::License => "license",
            Self::BuildMeta => "build-meta",
            Self::BuildSystem => "build-system",
            Self::Other => "other",
            Self::ReleaseNotes => "release-notes",
            Self::DistributionIntake => "distribution-intake",
            Self::SecurityContact => "security-contact",
            Self::ModelCard => "model-card",
            Self::Log => "log",
            Self::Configuration => "configuration",
            Self::Evidence => "evidence",
            Self::Formulation => "formulation",
            Self::Attestation => "attestation",
            Self::ThreatModel => "threat-model",
            Self::AdversaryModel => "adversary-model",
            Self::RiskAssessment => "risk-assessment",
            Self::VulnerabilityAssertion => "vulnerability-assertion",
            Self::ExploitabilityStatement => "exploitability-statement",
            Self::PentestReport => "pentest-report",
            Self::StaticAnalysisReport => "static-analysis-report",
            Self::DynamicAnalysisReport => "dynamic-analysis-report",
            Self::RuntimeAnalysisReport => "runtime-analysis-report",
            Self::ComponentAnalysisReport => "component-analysis-report",
            Self::MaturityReport => "maturity-report",
            Self::CertificationReport => "certification-report",
            Self::CodifiedInfrastructure => "codified-infrastructure",
            Self::QualityMetrics => "quality-metrics",
            Self::Poam => "poam",
            Self::SourceDistribution => "source-distribution",
            Self::ElectronicSignature => "electronic-signature",
            Self::DigitalSignature => "digital-signature",
            Self::Rfc9116 => "rfc-9116",
        }
    }
}

impl fmt::Display for ExternalReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// External reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalReference {
    /// Reference type
    pub ref_type: ExternalReferenceType,
    /// URL or locator
    pub url: String,
    /// Comment or description
    pub comment: Option<String>,
    /// Hashes of the referenced content
    pub hashes: HashDictionary,
}

impl ExternalReference {
    #[must_use]
    pub fn new(ref_type: ExternalReferenceType, url: impl Into<String>) -> Self {
        Self {
            ref_type,
            url: url.into(),
            comment: None,
            hashes: HashDictionary::new(),
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_hashes(mut self, hashes: HashDictionary) -> Self {
        self.hashes = hashes;
        self
    }
}

pub type ExternalReferenceRepository = Repository<ExternalReference>;
