//! Making bom-ref values unique before export.

use crate::model::{Bom, BomRef, Component};
use std::collections::{HashMap, HashSet};

/// Return a copy of `bom` in which every resolved bom-ref value is unique.
///
/// The first component holding a value keeps it. A later component holding
/// the same value through a *different* ref gets `<value>-<n>` with the
/// lowest free `n`. Dependency entries that share identity with a renamed ref
/// follow the rename; entries that only match by value keep pointing at the
/// first holder. Unresolved refs are left unresolved.
#[must_use]
pub fn discriminate_bom_refs(bom: &Bom) -> Bom {
    let mut bom = bom.clone();

    let original_values: HashSet<String> = bom
        .all_components()
        .filter_map(|c| c.bom_ref.value().map(str::to_string))
        .collect();

    let mut holders: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut renames: HashMap<usize, BomRef> = HashMap::new();

    let mut rename = |component: &mut Component| {
        let Some(value) = component.bom_ref.value().map(str::to_string) else {
            return;
        };
        let identity = component.bom_ref.identity();
        if let Some(renamed) = renames.get(&identity) {
            component.bom_ref = renamed.clone();
            return;
        }
        match holders.get(&value) {
            None => {
                holders.insert(value.clone(), identity);
                taken.insert(value);
            }
            Some(holder) if *holder == identity => {}
            Some(_) => {
                let fresh = (1..)
                    .map(|n| format!("{value}-{n}"))
                    .find(|candidate| {
                        !taken.contains(candidate) && !original_values.contains(candidate)
                    })
                    .unwrap_or_default();
                tracing::debug!(
                    original = %value,
                    renamed = %fresh,
                    "Discriminated duplicate bom-ref"
                );
                taken.insert(fresh.clone());
                let replacement = BomRef::new(fresh);
                renames.insert(identity, replacement.clone());
                component.bom_ref = replacement;
            }
        }
    };

    if let Some(root) = bom.metadata.component.as_mut() {
        rename(root);
    }
    for component in bom.components.iter_mut() {
        rename(component);
    }

    if renames.is_empty() {
        return bom;
    }

    let follow = |component: &mut Component| {
        for dependency in component.dependencies.iter_mut() {
            if let Some(renamed) = renames.get(&dependency.identity()) {
                *dependency = renamed.clone();
            }
        }
    };
    if let Some(root) = bom.metadata.component.as_mut() {
        follow(root);
    }
    for component in bom.components.iter_mut() {
        follow(component);
    }

    bom
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ComponentType, Metadata};
    use crate::normalize::DependencyGraph;

    fn values(bom: &Bom) -> Vec<Option<String>> {
        bom.all_components()
            .map(|c| c.bom_ref.value().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_unique_values_untouched() {
        let bom = Bom::new()
            .with_component(Component::new(ComponentType::Library, "a").with_bom_ref("a"))
            .with_component(Component::new(ComponentType::Library, "b").with_bom_ref("b"));
        let out = discriminate_bom_refs(&bom);
        assert_eq!(values(&out), values(&bom));
    }

    #[test]
    fn test_duplicates_get_suffixes() {
        let bom = Bom::new()
            .with_metadata(Metadata::new().with_component(
                Component::new(ComponentType::Application, "root").with_bom_ref("dup"),
            ))
            .with_component(Component::new(ComponentType::Library, "a").with_bom_ref("dup"))
            .with_component(Component::new(ComponentType::Library, "b").with_bom_ref("dup-1"))
            .with_component(Component::new(ComponentType::Library, "c").with_bom_ref("dup"))
            .with_component(Component::new(ComponentType::Library, "d"));

        let out = discriminate_bom_refs(&bom);
        assert_eq!(
            values(&out),
            vec![
                Some("dup".to_string()),
                Some("dup-2".to_string()),
                Some("dup-1".to_string()),
                Some("dup-3".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn test_dependencies_follow_renames() {
        let first = Component::new(ComponentType::Library, "first").with_bom_ref("x");
        let second = Component::new(ComponentType::Library, "second").with_bom_ref("x");
        let app = Component::new(ComponentType::Application, "app")
            .with_bom_ref("app")
            .depends_on(&second.bom_ref);

        let bom = Bom::new()
            .with_component(first)
            .with_component(second)
            .with_component(app);
        let out = discriminate_bom_refs(&bom);

        let graph = DependencyGraph::from_bom(&out);
        assert_eq!(graph.get("app").unwrap().depends_on, vec!["x-1"]);
        assert!(graph.get("x").is_some());
        assert!(graph.get("x-1").is_some());
    }

    #[test]
    fn test_value_only_dependencies_stay_with_first_holder() {
        let first = Component::new(ComponentType::Library, "first").with_bom_ref("x");
        let second = Component::new(ComponentType::Library, "second").with_bom_ref("x");
        let app = Component::new(ComponentType::Application, "app")
            .with_bom_ref("app")
            .depends_on(&BomRef::new("x"));

        let bom = Bom::new()
            .with_component(first)
            .with_component(second)
            .with_component(app);
        let out = discriminate_bom_refs(&bom);

        let graph = DependencyGraph::from_bom(&out);
        assert_eq!(graph.get("app").unwrap().depends_on, vec!["x"]);
    }

    #[test]
    fn test_input_is_not_modified() {
        let bom = Bom::new()
            .with_component(Component::new(ComponentType::Library, "a").with_bom_ref("same"))
            .with_component(Component::new(ComponentType::Library, "b").with_bom_ref("same"));
        let _ = discriminate_bom_refs(&bom);
        assert_eq!(
            values(&bom),
            vec![Some("same".to_string()), Some("same".to_string())]
        );
    }
}
