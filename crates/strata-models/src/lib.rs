//! Built-in material models for the Strata framework.
//!
//! - [`SimplerWithCrust`] (`"simpler with crust"`): constant thermal
//!   properties, a linear thermal-expansion density, and a viscosity that
//!   jumps from a lower to an upper value above a fixed height.
//!
//! Hosts make these selectable by calling [`register_builtin_models`]
//! on their registry during startup.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod simpler_with_crust;

pub use simpler_with_crust::{
    SimplerWithCrust, SimplerWithCrustBuilder, SimplerWithCrustConfig, SimplerWithCrustParameter,
};

use strata_core::RegistryError;
use strata_material::ModelRegistry;

/// Register every built-in model with `registry`.
///
/// # Errors
///
/// [`RegistryError::DuplicateModel`] if a built-in name is already taken.
pub fn register_builtin_models(registry: &mut ModelRegistry) -> Result<(), RegistryError> {
    registry.register::<SimplerWithCrust>()
}
