//! The [`MaterialModel`] and [`MaterialModelPlugin`] traits.

use strata_core::{ConfigError, MaterialInputs, MaterialOutputs, ModelDependence, ParameterError};
use strata_params::ParameterHandler;

/// A configured material model.
///
/// # Contract
///
/// - `evaluate()` MUST be deterministic and side-effect free: the result
///   for point `i` depends only on input `i` and the model's configuration.
/// - `&self`: configuration is fixed at construction. Reconfiguring means
///   building a new model.
/// - The output has exactly one result per input point, and each result
///   has one reaction term per compositional field at that point.
///
/// # Object safety
///
/// This trait is object-safe; the registry hands out
/// `Box<dyn MaterialModel>`. `Send + Sync` lets one instance evaluate
/// disjoint batches from several threads at once.
///
/// # Examples
///
/// ```
/// use strata_core::{MaterialInputs, MaterialOutputs, ModelDependence};
/// use strata_material::MaterialModel;
///
/// struct Isoviscous { eta: f64 }
///
/// impl MaterialModel for Isoviscous {
///     fn name(&self) -> &str { "isoviscous" }
///     fn is_compressible(&self) -> bool { false }
///     fn reference_viscosity(&self) -> f64 { self.eta }
///     fn model_dependence(&self) -> ModelDependence { ModelDependence::none() }
///     fn evaluate(&self, inputs: &MaterialInputs) -> MaterialOutputs {
///         let mut out = MaterialOutputs::for_inputs(inputs);
///         for r in out.as_mut_slice() {
///             r.viscosity = self.eta;
///         }
///         out
///     }
/// }
///
/// let m = Isoviscous { eta: 1e21 };
/// assert_eq!(m.reference_viscosity(), 1e21);
/// ```
pub trait MaterialModel: Send + Sync + 'static {
    /// Registry name, for diagnostics.
    fn name(&self) -> &str;

    /// Whether the model's density depends on pressure.
    fn is_compressible(&self) -> bool;

    /// A viscosity typical of the model, used by the host to scale
    /// pressure against velocity. Not a per-point value.
    fn reference_viscosity(&self) -> f64;

    /// Which solution fields each coefficient depends on.
    fn model_dependence(&self) -> ModelDependence;

    /// Compute material coefficients for every point in `inputs`.
    fn evaluate(&self, inputs: &MaterialInputs) -> MaterialOutputs;
}

/// The unconfigured side of a material model: what the registry needs to
/// declare its parameters and construct it.
pub trait MaterialModelPlugin: MaterialModel + Sized {
    /// Unique registry identifier, e.g. `"simpler with crust"`.
    const NAME: &'static str;

    /// Human-readable description shown in parameter documentation.
    const DESCRIPTION: &'static str;

    /// Declare this model's entries into `prm`.
    ///
    /// Called with the cursor at the root; implementations enter and
    /// leave their own subsections.
    fn declare_parameters(prm: &mut ParameterHandler) -> Result<(), ParameterError>;

    /// Read this model's entries from `prm` and build a configured model.
    ///
    /// Called with the cursor at the root, after the parameter file has
    /// been read.
    fn parse_parameters(prm: &mut ParameterHandler) -> Result<Self, ConfigError>;
}
