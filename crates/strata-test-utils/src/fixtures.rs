//! Reusable material model fixtures.
//!
//! - [`ConstantModel`]: uniform viscosity and density, configurable from
//!   the `Material model/Constant model` subsection.
//! - [`RejectingModel`]: declares no parameters and always fails to
//!   configure.

use strata_core::{
    ConfigError, MaterialInputs, MaterialOutputs, ModelDependence, ParameterError,
};
use strata_material::{MaterialModel, MaterialModelPlugin, MATERIAL_MODEL_SECTION};
use strata_params::{ParameterHandler, Pattern};

/// Uniform viscosity and density everywhere.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantModel {
    pub viscosity: f64,
    pub density: f64,
}

impl ConstantModel {
    pub fn new(viscosity: f64, density: f64) -> Self {
        Self { viscosity, density }
    }
}

impl MaterialModel for ConstantModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_compressible(&self) -> bool {
        false
    }

    fn reference_viscosity(&self) -> f64 {
        self.viscosity
    }

    fn model_dependence(&self) -> ModelDependence {
        ModelDependence::none()
    }

    fn evaluate(&self, inputs: &MaterialInputs) -> MaterialOutputs {
        let mut out = MaterialOutputs::for_inputs(inputs);
        for r in out.as_mut_slice() {
            r.viscosity = self.viscosity;
            r.density = self.density;
        }
        out
    }
}

impl MaterialModelPlugin for ConstantModel {
    const NAME: &'static str = "constant";
    const DESCRIPTION: &'static str = "Uniform viscosity and density.";

    fn declare_parameters(prm: &mut ParameterHandler) -> Result<(), ParameterError> {
        prm.enter_subsection(MATERIAL_MODEL_SECTION);
        prm.enter_subsection("Constant model");
        prm.declare_entry("Viscosity", "1e21", Pattern::non_negative_double(), "Pa s")?;
        prm.declare_entry("Density", "3300", Pattern::non_negative_double(), "kg/m^3")?;
        prm.leave_subsection()?;
        prm.leave_subsection()
    }

    fn parse_parameters(prm: &mut ParameterHandler) -> Result<Self, ConfigError> {
        prm.enter_subsection(MATERIAL_MODEL_SECTION);
        prm.enter_subsection("Constant model");
        let viscosity = prm.get_double("Viscosity");
        let density = prm.get_double("Density");
        prm.leave_subsection()?;
        prm.leave_subsection()?;
        Ok(Self::new(viscosity?, density?))
    }
}

/// A model whose configuration always fails.
#[derive(Debug)]
pub struct RejectingModel;

impl MaterialModel for RejectingModel {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_compressible(&self) -> bool {
        false
    }

    fn reference_viscosity(&self) -> f64 {
        1.0
    }

    fn model_dependence(&self) -> ModelDependence {
        ModelDependence::all()
    }

    fn evaluate(&self, inputs: &MaterialInputs) -> MaterialOutputs {
        MaterialOutputs::for_inputs(inputs)
    }
}

impl MaterialModelPlugin for RejectingModel {
    const NAME: &'static str = "rejecting";
    const DESCRIPTION: &'static str = "Always fails to configure.";

    fn declare_parameters(_prm: &mut ParameterHandler) -> Result<(), ParameterError> {
        Ok(())
    }

    fn parse_parameters(_prm: &mut ParameterHandler) -> Result<Self, ConfigError> {
        Err(ConfigError::OutOfDomain {
            name: "anything".to_string(),
            value: -1.0,
        })
    }
}
