//! Strata: pluggable material models for mantle-convection solvers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Strata sub-crates. For most hosts, adding `strata` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//! use smallvec::smallvec;
//!
//! // Startup: populate the registry and declare every model's parameters.
//! let mut registry = ModelRegistry::new();
//! register_builtin_models(&mut registry).unwrap();
//! let mut prm = ParameterHandler::new();
//! registry.declare_parameters(&mut prm).unwrap();
//!
//! // Read the parameter file and build the selected model.
//! prm.parse_input(
//!     "subsection Material model\n\
//!        set Model name = simpler with crust\n\
//!      end\n",
//! )
//! .unwrap();
//! let model = registry.create_selected(&mut prm).unwrap();
//!
//! // Each assembly pass: evaluate a batch of quadrature points.
//! let inputs = MaterialInputs::new(
//!     Dimension::Two,
//!     vec![EvaluationPoint::new(smallvec![0.0, 150_000.0], 293.0)],
//! )
//! .unwrap();
//! let out = model.evaluate(&inputs);
//! assert_eq!(out[0].viscosity, 1e23);
//! assert_eq!(out[0].density, 3300.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Inputs, outputs, dependence metadata, errors |
//! | [`params`] | `strata-params` | Parameter tree and parameter-file reader |
//! | [`material`] | `strata-material` | `MaterialModel` trait and model registry |
//! | [`models`] | `strata-models` | Built-in material models |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`strata-core`).
pub use strata_core as types;

/// Parameter tree and parameter-file reader (`strata-params`).
pub use strata_params as params;

/// Material model traits and registry (`strata-material`).
///
/// [`material::MaterialModel`] is the extension point for user-defined
/// models; [`material::MaterialModelPlugin`] makes them registrable.
pub use strata_material as material;

/// Built-in material models (`strata-models`).
pub use strata_models as models;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use strata_core::{
        Dimension, EvaluationPoint, MaterialInputs, MaterialOutputs, ModelDependence, PointResult,
    };

    // Errors
    pub use strata_core::{ConfigError, InputError, ParameterError, RegistryError};

    // Parameters
    pub use strata_params::{ParameterHandler, Pattern};

    // Material models
    pub use strata_material::{MaterialModel, MaterialModelPlugin, ModelRegistry};
    pub use strata_models::{register_builtin_models, SimplerWithCrust};
}
