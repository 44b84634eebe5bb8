//! XML backend.
//!
//! Fragments are [`XmlElement`] trees following the CycloneDX XSD element
//! order. Values that the schema types as `xs:anyURI` are escaped with
//! [`escape_any_uri`](super::escape_any_uri).

mod bom;
mod component;
mod dependencies;
mod element;
mod external_reference;
mod hash;
mod license;
mod metadata;
mod property;

pub use element::{XmlElement, XmlNode};
