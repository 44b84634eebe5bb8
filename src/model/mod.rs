//! In-memory BOM object graph.
//!
//! These structures are the input to the normalizers. They are plain owned
//! values built by the caller; normalization only ever reads them (or works on
//! a clone when a degradation rule needs to merge data).
//!
//! ```
//! use sbom_normalizer::model::{Bom, BomRef, Component, ComponentType};
//!
//! let lib = Component::new(ComponentType::Library, "left-pad").with_bom_ref("pkg-1");
//! let app = Component::new(ComponentType::Application, "app")
//!     .with_bom_ref("app")
//!     .depends_on(&lib.bom_ref);
//!
//! let bom = Bom::new().with_component(app).with_component(lib);
//! assert_eq!(bom.component_count(), 2);
//! ```

mod bom;
mod bom_ref;
mod component;
mod external_reference;
mod hash;
mod license;
mod metadata;
mod property;
mod repository;

pub use bom::*;
pub use bom_ref::*;
pub use component::*;
pub use external_reference::*;
pub use hash::*;
pub use license::*;
pub use metadata::*;
pub use property::*;
pub use repository::*;
