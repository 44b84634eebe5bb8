//! Dependency graph restricted to the emitted component set.

use crate::model::Bom;
use std::collections::HashSet;

/// One `dependency` entry: a component and the refs it depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyRecord {
    pub reference: String,
    /// Resolved refs of known components, in declaration order
    pub depends_on: Vec<String>,
}

/// Flat edge list over all components of a BOM, metadata root included.
///
/// Only components with a resolved bom-ref get a record, and only refs that
/// belong to a component of the same BOM appear as `depends_on` targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    records: Vec<DependencyRecord>,
}

impl DependencyGraph {
    /// Build the graph for a BOM
    #[must_use]
    pub fn from_bom(bom: &Bom) -> Self {
        let known: HashSet<&str> = bom
            .all_components()
            .filter_map(|c| c.bom_ref.value())
            .collect();

        let mut records = Vec::with_capacity(known.len());
        for component in bom.all_components() {
            let Some(reference) = component.bom_ref.value() else {
                continue;
            };

            let mut depends_on: Vec<String> = Vec::new();
            for dependency in &component.dependencies {
                let Some(target) = dependency.value() else {
                    continue;
                };
                if !known.contains(target) {
                    tracing::debug!(
                        from = reference,
                        to = target,
                        "Dropping dependency on unknown bom-ref"
                    );
                    continue;
                }
                if !depends_on.iter().any(|d| d == target) {
                    depends_on.push(target.to_string());
                }
            }

            records.push(DependencyRecord {
                reference: reference.to_string(),
                depends_on,
            });
        }

        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[DependencyRecord] {
        &self.records
    }

    /// The record for a ref, if that component has one
    #[must_use]
    pub fn get(&self, reference: &str) -> Option<&DependencyRecord> {
        self.records.iter().find(|r| r.reference == reference)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
