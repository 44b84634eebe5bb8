//! Format-independent degradation rules shared by both backends.

use crate::error::NormalizeError;
use crate::model::{
    Bom, Component, ExternalReference, ExternalReferenceRepository, ExternalReferenceType, Hash,
    License, LicenseRepository, Property,
};
use crate::spec::Spec;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static SERIAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^urn:uuid:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$",
    )
    .expect("static regex")
});

/// Serial number to emit, if the value is a well-formed `urn:uuid:`
pub(crate) fn serial_number(bom: &Bom) -> Option<&str> {
    let serial = bom.serial_number.as_deref()?;
    if SERIAL_NUMBER.is_match(serial) {
        Some(serial)
    } else {
        tracing::debug!(serial, "Omitting malformed serial number");
        None
    }
}

pub(crate) fn check_component_type(
    spec: &Spec,
    component: &Component,
) -> Result<(), NormalizeError> {
    if spec.is_supported_component_type(component.component_type) {
        Ok(())
    } else {
        Err(NormalizeError::UnsupportedType {
            entity: "component",
            type_name: component.component_type.as_str(),
            version: spec.version(),
            subject: component.display_name(),
        })
    }
}

/// Component version to emit.
///
/// Versions that require the element get an explicit empty value for a
/// component without one.
pub(crate) fn component_version<'c>(spec: &Spec, component: &'c Component) -> Option<&'c str> {
    match component.version.as_deref() {
        Some(version) => Some(version),
        None if spec.requires_component_version() => Some(""),
        None => None,
    }
}

pub(crate) fn check_hash(spec: &Spec, hash: &Hash) -> Result<(), NormalizeError> {
    if !spec.is_supported_hash_algorithm(hash.algorithm) {
        return Err(NormalizeError::UnsupportedAlgorithm {
            algorithm: hash.algorithm,
            version: spec.version(),
        });
    }
    if !spec.is_supported_hash_content(hash.algorithm, &hash.content) {
        return Err(NormalizeError::UnsupportedContent {
            algorithm: hash.algorithm,
            content: hash.content.clone(),
        });
    }
    Ok(())
}

/// Reference type to emit, falling back to `other`
pub(crate) fn external_reference_type(
    spec: &Spec,
    reference: &ExternalReference,
) -> Result<ExternalReferenceType, NormalizeError> {
    if spec.is_supported_external_reference_type(reference.ref_type) {
        return Ok(reference.ref_type);
    }
    if spec.is_supported_external_reference_type(ExternalReferenceType::Other) {
        tracing::debug!(
            ref_type = %reference.ref_type,
            url = %reference.url,
            "Degrading external reference type to 'other'"
        );
        return Ok(ExternalReferenceType::Other);
    }
    Err(NormalizeError::UnsupportedType {
        entity: "external reference",
        type_name: reference.ref_type.as_str(),
        version: spec.version(),
        subject: reference.url.clone(),
    })
}

pub(crate) fn check_property(property: &Property) -> Result<(), NormalizeError> {
    if property.name.is_empty() {
        Err(NormalizeError::EmptyName)
    } else {
        Ok(())
    }
}

/// Licenses to emit.
///
/// A set that mixes an expression with other licenses is reduced to its first
/// expression; an expression and a license list cannot share one container.
pub(crate) fn effective_licenses(licenses: &LicenseRepository) -> Vec<&License> {
    for license in licenses {
        if let License::Expression(e) = license {
            if !e.is_valid_spdx() {
                tracing::debug!(
                    expression = %e.expression,
                    "License expression does not parse as SPDX, emitting verbatim"
                );
            }
        }
    }

    let has_expression = licenses.iter().any(License::is_expression);
    if has_expression && licenses.len() > 1 {
        tracing::debug!(
            count = licenses.len(),
            "Mixed license set reduced to its first expression"
        );
        return licenses
            .iter()
            .find(|l| l.is_expression())
            .into_iter()
            .collect();
    }
    licenses.iter().collect()
}

/// BOM-level external references to emit.
///
/// Without metadata support the root component's references would be lost,
/// so they are appended after the BOM's own references.
pub(crate) fn bom_external_references<'b>(
    spec: &Spec,
    bom: &'b Bom,
) -> Cow<'b, ExternalReferenceRepository> {
    if spec.supports_metadata() {
        return Cow::Borrowed(&bom.external_references);
    }
    match &bom.metadata.component {
        Some(root) if !root.external_references.is_empty() => {
            let mut merged = bom.external_references.clone();
            merged.extend(root.external_references.iter().cloned());
            Cow::Owned(merged)
        }
        _ => Cow::Borrowed(&bom.external_references),
    }
}

/// UTC timestamp with second precision
pub(crate) fn timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    timestamp
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}
