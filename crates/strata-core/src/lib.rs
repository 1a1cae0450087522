//! Core types and errors for the Strata material-model framework.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! data that crosses the boundary between a host solver and a material
//! model: evaluation inputs, per-point results, nonlinear-dependence
//! metadata, and the error enums shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dependence;
pub mod error;
pub mod inputs;
pub mod outputs;

pub use dependence::{Dependence, ModelDependence};
pub use error::{ConfigError, InputError, ParameterError, RegistryError};
pub use inputs::{Composition, Dimension, EvaluationPoint, MaterialInputs, Position};
pub use outputs::{MaterialOutputs, PointResult, ReactionTerms};
