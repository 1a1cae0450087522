//! Material model trait and registry for Strata.
//!
//! [`MaterialModel`] is the capability a configured model exposes to the
//! host solver. [`MaterialModelPlugin`] is the unconfigured side: a name,
//! a description, a parameter schema and a constructor. [`ModelRegistry`]
//! maps names to plugins and is populated explicitly by the host.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod model;
pub mod registry;

pub use model::{MaterialModel, MaterialModelPlugin};
pub use registry::{ModelEntry, ModelRegistry, MATERIAL_MODEL_SECTION, MODEL_NAME_ENTRY};
