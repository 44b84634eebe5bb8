//! Component identity tokens used for dependency edges.

use std::fmt;
use std::sync::Arc;

/// Optional identity string attached to a component.
///
/// Clones share identity, so a dependency entry created by cloning another
/// component's `BomRef` stays linked to that component even when the ref has
/// no value. Two refs are equal when they are the same ref or when both carry
/// the same value. A ref without a value is *unresolved* and never appears as
/// a dependency endpoint.
#[derive(Clone, Default)]
pub struct BomRef(Arc<Option<String>>);

impl BomRef {
    /// Create a resolved ref with the given value
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(Arc::new(Some(value.into())))
    }

    /// Create an unresolved ref
    #[must_use]
    pub fn unresolved() -> Self {
        Self(Arc::new(None))
    }

    /// The identity value, if any
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Whether both handles point at the same ref, regardless of value
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared ref, stable for the lifetime of any handle.
    pub(crate) fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

impl PartialEq for BomRef {
    fn eq(&self, other: &Self) -> bool {
        if self.same_identity(other) {
            return true;
        }
        match (self.value(), other.value()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for BomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "BomRef({v:?})"),
            None => write!(f, "BomRef(<unresolved>)"),
        }
    }
}

impl From<&str> for BomRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BomRef {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Ordered set of refs a component depends on.
///
/// Adding a ref equal to one already present is a no-op.
#[derive(Debug, Clone, Default)]
pub struct BomRefRepository {
    refs: Vec<BomRef>,
}

impl BomRefRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ref unless an equal one is already present
    pub fn add(&mut self, bom_ref: BomRef) -> bool {
        if self.refs.contains(&bom_ref) {
            return false;
        }
        self.refs.push(bom_ref);
        true
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BomRef> {
        self.refs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, BomRef> {
        self.refs.iter_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}

impl FromIterator<BomRef> for BomRefRepository {
    fn from_iter<I: IntoIterator<Item = BomRef>>(iter: I) -> Self {
        let mut repo = Self::new();
        for bom_ref in iter {
            repo.add(bom_ref);
        }
        repo
    }
}

impl<'a> IntoIterator for &'a BomRefRepository {
    type Item = &'a BomRef;
    type IntoIter = std::slice::Iter<'a, BomRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.refs.iter()
    }
}
