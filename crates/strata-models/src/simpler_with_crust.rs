//! Two-layer viscosity model with linear thermal expansion.
//!
//! Like a "simpler" constant-property model, but the viscosity takes one
//! value below a given height and another above it, representing a
//! crustal layer over a mantle analogue.
//!
//! # Semantics
//!
//! For each point, with `z` the vertical (second) coordinate:
//!
//! - viscosity: `eta_U` if `z > jump_height`, else `eta_L`. A point exactly
//!   at the jump height belongs to the lower layer.
//! - density: `rho_0 * (1 - alpha * (T - T_0))`. Not clamped; large
//!   temperature excursions can make it zero or negative.
//! - thermal expansion, specific heat, conductivity: the configured constants.
//! - compressibility, entropy derivatives, reaction terms: zero.
//!
//! Nothing depends on the solution, so every coefficient declares no
//! nonlinear dependence.
//!
//! # Construction
//!
//! From parsed parameters via [`MaterialModelPlugin::parse_parameters`],
//! or programmatically:
//!
//! ```
//! use strata_models::SimplerWithCrust;
//! use strata_material::MaterialModel;
//!
//! let model = SimplerWithCrust::builder()
//!     .jump_height(50_000.0)
//!     .upper_viscosity(1e24)
//!     .build()
//!     .unwrap();
//! assert_eq!(model.viscosity_at(60_000.0), 1e24);
//! assert_eq!(model.reference_viscosity(), 1e20);
//! ```

use strata_core::{
    ConfigError, MaterialInputs, MaterialOutputs, ModelDependence, ParameterError,
};
use strata_material::{MaterialModel, MaterialModelPlugin, MATERIAL_MODEL_SECTION};
use strata_params::{ParameterHandler, Pattern};

/// Subsection of `Material model` holding this model's parameters.
pub const SECTION: &str = "Simpler with crust model";

/// Configuration for [`SimplerWithCrust`]. Every value must be finite
/// and non-negative.
#[derive(Clone, Debug, PartialEq)]
pub struct SimplerWithCrustConfig {
    /// Reference density `rho_0` (kg/m^3). Default: 3300.
    pub reference_density: f64,
    /// Reference temperature `T_0` (K). Default: 293.
    pub reference_temperature: f64,
    /// Viscosity `eta_L` at and below the jump height (Pa s). Default: 1e20.
    pub lower_viscosity: f64,
    /// Viscosity `eta_U` above the jump height (Pa s). Default: 1e23.
    pub upper_viscosity: f64,
    /// Height at which the viscosity changes (m). Default: 100000.
    pub jump_height: f64,
    /// Thermal expansion coefficient `alpha` (1/K). Default: 2e-5.
    pub thermal_expansion_coefficient: f64,
    /// Specific heat capacity `c_p` (J/kg/K). Default: 1250.
    pub reference_specific_heat: f64,
    /// Thermal conductivity `k` (W/m/K). Default: 4.7.
    pub thermal_conductivity: f64,
}

impl Default for SimplerWithCrustConfig {
    fn default() -> Self {
        Self {
            reference_density: 3300.0,
            reference_temperature: 293.0,
            lower_viscosity: 1e20,
            upper_viscosity: 1e23,
            jump_height: 100_000.0,
            thermal_expansion_coefficient: 2e-5,
            reference_specific_heat: 1250.0,
            thermal_conductivity: 4.7,
        }
    }
}

impl SimplerWithCrustConfig {
    /// Check every value is finite and `>= 0`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfDomain`] naming the first offending parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for param in SimplerWithCrustParameter::ALL {
            let value = param.get(self);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfDomain {
                    name: param.name().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// The parameters this model declares, in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimplerWithCrustParameter {
    /// `Reference density`.
    ReferenceDensity,
    /// `Reference temperature`.
    ReferenceTemperature,
    /// `Lower viscosity`.
    LowerViscosity,
    /// `Upper viscosity`.
    UpperViscosity,
    /// `Jump height`.
    JumpHeight,
    /// `Thermal conductivity`.
    ThermalConductivity,
    /// `Reference specific heat`.
    ReferenceSpecificHeat,
    /// `Thermal expansion coefficient`.
    ThermalExpansionCoefficient,
}

impl SimplerWithCrustParameter {
    /// Every parameter, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::ReferenceDensity,
        Self::ReferenceTemperature,
        Self::LowerViscosity,
        Self::UpperViscosity,
        Self::JumpHeight,
        Self::ThermalConductivity,
        Self::ReferenceSpecificHeat,
        Self::ThermalExpansionCoefficient,
    ];

    /// Entry name in the parameter file.
    pub fn name(self) -> &'static str {
        match self {
            Self::ReferenceDensity => "Reference density",
            Self::ReferenceTemperature => "Reference temperature",
            Self::LowerViscosity => "Lower viscosity",
            Self::UpperViscosity => "Upper viscosity",
            Self::JumpHeight => "Jump height",
            Self::ThermalConductivity => "Thermal conductivity",
            Self::ReferenceSpecificHeat => "Reference specific heat",
            Self::ThermalExpansionCoefficient => "Thermal expansion coefficient",
        }
    }

    /// Default value, as written in the parameter file.
    pub fn default_value(self) -> &'static str {
        match self {
            Self::ReferenceDensity => "3300",
            Self::ReferenceTemperature => "293",
            Self::LowerViscosity => "1e20",
            Self::UpperViscosity => "1e23",
            Self::JumpHeight => "100000",
            Self::ThermalConductivity => "4.7",
            Self::ReferenceSpecificHeat => "1250",
            Self::ThermalExpansionCoefficient => "2e-5",
        }
    }

    /// Documentation shown alongside the entry.
    pub fn documentation(self) -> &'static str {
        match self {
            Self::ReferenceDensity => "Reference density rho_0. Units: kg/m^3.",
            Self::ReferenceTemperature => {
                "The reference temperature T_0. The reference temperature is used \
                 in the density formula. Units: K."
            }
            Self::LowerViscosity => "The value of the viscosity eta_L in the lower layer. Units: Pa s.",
            Self::UpperViscosity => "The value of the viscosity eta_U in the upper layer. Units: Pa s.",
            Self::JumpHeight => "The height at which the viscosity changes. Units: m.",
            Self::ThermalConductivity => "The value of the thermal conductivity k. Units: W/m/K.",
            Self::ReferenceSpecificHeat => {
                "The value of the specific heat capacity c_p. Units: J/kg/K."
            }
            Self::ThermalExpansionCoefficient => {
                "The value of the thermal expansion coefficient alpha. Units: 1/K."
            }
        }
    }

    /// Read this parameter's value from a config.
    pub fn get(self, config: &SimplerWithCrustConfig) -> f64 {
        match self {
            Self::ReferenceDensity => config.reference_density,
            Self::ReferenceTemperature => config.reference_temperature,
            Self::LowerViscosity => config.lower_viscosity,
            Self::UpperViscosity => config.upper_viscosity,
            Self::JumpHeight => config.jump_height,
            Self::ThermalConductivity => config.thermal_conductivity,
            Self::ReferenceSpecificHeat => config.reference_specific_heat,
            Self::ThermalExpansionCoefficient => config.thermal_expansion_coefficient,
        }
    }

    fn slot(self, config: &mut SimplerWithCrustConfig) -> &mut f64 {
        match self {
            Self::ReferenceDensity => &mut config.reference_density,
            Self::ReferenceTemperature => &mut config.reference_temperature,
            Self::LowerViscosity => &mut config.lower_viscosity,
            Self::UpperViscosity => &mut config.upper_viscosity,
            Self::JumpHeight => &mut config.jump_height,
            Self::ThermalConductivity => &mut config.thermal_conductivity,
            Self::ReferenceSpecificHeat => &mut config.reference_specific_heat,
            Self::ThermalExpansionCoefficient => &mut config.thermal_expansion_coefficient,
        }
    }
}

/// Two-layer viscosity material model. See the [module docs](self).
#[derive(Clone, Debug, PartialEq)]
pub struct SimplerWithCrust {
    config: SimplerWithCrustConfig,
}

/// Builder for [`SimplerWithCrust`]. Unset values keep their defaults.
#[derive(Clone, Debug, Default)]
pub struct SimplerWithCrustBuilder {
    config: SimplerWithCrustConfig,
}

impl SimplerWithCrust {
    /// Create a builder starting from the default configuration.
    pub fn builder() -> SimplerWithCrustBuilder {
        SimplerWithCrustBuilder::default()
    }

    /// Build a model from a full configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfDomain`] if any value is negative or non-finite.
    pub fn new(config: SimplerWithCrustConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The model's configuration.
    pub fn config(&self) -> &SimplerWithCrustConfig {
        &self.config
    }

    /// Viscosity at vertical coordinate `z`.
    pub fn viscosity_at(&self, z: f64) -> f64 {
        if z > self.config.jump_height {
            self.config.upper_viscosity
        } else {
            self.config.lower_viscosity
        }
    }

    /// Density at `temperature`.
    pub fn density_at(&self, temperature: f64) -> f64 {
        let c = &self.config;
        c.reference_density
            * (1.0 - c.thermal_expansion_coefficient * (temperature - c.reference_temperature))
    }
}

impl SimplerWithCrustBuilder {
    /// Set the reference density (default: 3300 kg/m^3).
    pub fn reference_density(mut self, value: f64) -> Self {
        self.config.reference_density = value;
        self
    }

    /// Set the reference temperature (default: 293 K).
    pub fn reference_temperature(mut self, value: f64) -> Self {
        self.config.reference_temperature = value;
        self
    }

    /// Set the lower-layer viscosity (default: 1e20 Pa s).
    pub fn lower_viscosity(mut self, value: f64) -> Self {
        self.config.lower_viscosity = value;
        self
    }

    /// Set the upper-layer viscosity (default: 1e23 Pa s).
    pub fn upper_viscosity(mut self, value: f64) -> Self {
        self.config.upper_viscosity = value;
        self
    }

    /// Set the jump height (default: 100000 m).
    pub fn jump_height(mut self, value: f64) -> Self {
        self.config.jump_height = value;
        self
    }

    /// Set the thermal expansion coefficient (default: 2e-5 1/K).
    pub fn thermal_expansion_coefficient(mut self, value: f64) -> Self {
        self.config.thermal_expansion_coefficient = value;
        self
    }

    /// Set the specific heat (default: 1250 J/kg/K).
    pub fn reference_specific_heat(mut self, value: f64) -> Self {
        self.config.reference_specific_heat = value;
        self
    }

    /// Set the thermal conductivity (default: 4.7 W/m/K).
    pub fn thermal_conductivity(mut self, value: f64) -> Self {
        self.config.thermal_conductivity = value;
        self
    }

    /// Build the model, validating all configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::OutOfDomain`] if any value is negative or non-finite.
    pub fn build(self) -> Result<SimplerWithCrust, ConfigError> {
        SimplerWithCrust::new(self.config)
    }
}

impl MaterialModel for SimplerWithCrust {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_compressible(&self) -> bool {
        false
    }

    fn reference_viscosity(&self) -> f64 {
        self.config.lower_viscosity
    }

    fn model_dependence(&self) -> ModelDependence {
        ModelDependence::none()
    }

    fn evaluate(&self, inputs: &MaterialInputs) -> MaterialOutputs {
        let c = &self.config;
        let mut out = MaterialOutputs::for_inputs(inputs);
        for (i, (point, r)) in inputs
            .points()
            .iter()
            .zip(out.as_mut_slice())
            .enumerate()
        {
            r.viscosity = self.viscosity_at(inputs.vertical(i));
            r.density = self.density_at(point.temperature);
            r.thermal_expansion_coefficient = c.thermal_expansion_coefficient;
            r.specific_heat = c.reference_specific_heat;
            r.thermal_conductivity = c.thermal_conductivity;
            r.compressibility = 0.0;
            r.entropy_derivative_pressure = 0.0;
            r.entropy_derivative_temperature = 0.0;
            r.reaction_terms.fill(0.0);
        }
        out
    }
}

impl MaterialModelPlugin for SimplerWithCrust {
    const NAME: &'static str = "simpler with crust";
    const DESCRIPTION: &'static str = "A material model that is like the ``simpler'' model but \
                                       has a jump in the viscosity at a specified depth.";

    fn declare_parameters(prm: &mut ParameterHandler) -> Result<(), ParameterError> {
        prm.enter_subsection(MATERIAL_MODEL_SECTION);
        prm.enter_subsection(SECTION);
        let declared = SimplerWithCrustParameter::ALL.iter().try_for_each(|p| {
            prm.declare_entry(
                p.name(),
                p.default_value(),
                Pattern::non_negative_double(),
                p.documentation(),
            )
        });
        prm.leave_subsection()?;
        prm.leave_subsection()?;
        declared
    }

    fn parse_parameters(prm: &mut ParameterHandler) -> Result<Self, ConfigError> {
        prm.enter_subsection(MATERIAL_MODEL_SECTION);
        prm.enter_subsection(SECTION);
        let mut config = SimplerWithCrustConfig::default();
        let read = SimplerWithCrustParameter::ALL.iter().try_for_each(|p| {
            *p.slot(&mut config) = prm.get_double(p.name())?;
            Ok::<(), ParameterError>(())
        });
        prm.leave_subsection()?;
        prm.leave_subsection()?;
        read?;

        let model = Self::new(config)?;
        log::debug!(
            "strata-models: '{}' configured: eta_L={} eta_U={} jump_height={} rho_0={} T_0={}",
            Self::NAME,
            model.config.lower_viscosity,
            model.config.upper_viscosity,
            model.config.jump_height,
            model.config.reference_density,
            model.config.reference_temperature,
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use smallvec::smallvec;
    use strata_core::{Dimension, MaterialInputs};
    use strata_test_utils::{batch_2d, column, point_2d, point_3d};

    fn default_model() -> SimplerWithCrust {
        SimplerWithCrust::builder().build().unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        let tol = 1e-12 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn defaults_match_declared_defaults() {
        let config = SimplerWithCrustConfig::default();
        for p in SimplerWithCrustParameter::ALL {
            let declared: f64 = p.default_value().parse().unwrap();
            assert_eq!(p.get(&config), declared, "{}", p.name());
        }
    }

    #[test]
    fn incompressible_with_lower_reference_viscosity() {
        let model = default_model();
        assert!(!model.is_compressible());
        assert_eq!(model.reference_viscosity(), 1e20);
        assert_eq!(model.name(), "simpler with crust");
        assert!(model.model_dependence().is_independent());
    }

    #[test]
    fn above_jump_at_reference_temperature() {
        let out = default_model().evaluate(&batch_2d(vec![point_2d(0.0, 150_000.0, 293.0)]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].viscosity, 1e23);
        assert_eq!(out[0].density, 3300.0);
    }

    #[test]
    fn below_jump_hot_point() {
        let out = default_model().evaluate(&batch_2d(vec![point_2d(0.0, 50_000.0, 1293.0)]));
        assert_eq!(out[0].viscosity, 1e20);
        assert_close(out[0].density, 3234.0);
    }

    #[test]
    fn exactly_at_jump_is_lower_layer() {
        let out = default_model().evaluate(&batch_2d(vec![point_2d(0.0, 100_000.0, 293.0)]));
        assert_eq!(out[0].viscosity, 1e20);
    }

    #[test]
    fn constants_copied_and_zeros_written() {
        let inputs = batch_2d(vec![point_2d(10.0, 20.0, 2000.0)
            .with_pressure(5e9)
            .with_composition(smallvec![0.3, 0.7, 1.0])]);
        let out = default_model().evaluate(&inputs);
        let r = &out[0];
        assert_eq!(r.thermal_expansion_coefficient, 2e-5);
        assert_eq!(r.specific_heat, 1250.0);
        assert_eq!(r.thermal_conductivity, 4.7);
        assert_eq!(r.compressibility, 0.0);
        assert_eq!(r.entropy_derivative_pressure, 0.0);
        assert_eq!(r.entropy_derivative_temperature, 0.0);
        assert_eq!(r.reaction_terms.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let out = default_model().evaluate(&MaterialInputs::empty(Dimension::Two));
        assert!(out.is_empty());
    }

    #[test]
    fn three_dimensional_uses_second_coordinate() {
        let inputs = MaterialInputs::new(
            Dimension::Three,
            vec![
                // Large third coordinate must not matter.
                point_3d(0.0, 50_000.0, 1e9, 293.0),
                point_3d(1e9, 150_000.0, 0.0, 293.0),
            ],
        )
        .unwrap();
        let out = default_model().evaluate(&inputs);
        assert_eq!(out[0].viscosity, 1e20);
        assert_eq!(out[1].viscosity, 1e23);
    }

    #[test]
    fn column_crosses_the_jump() {
        let inputs = column(Dimension::Two, &[0.0, 99_999.0, 100_000.0, 100_001.0], 293.0);
        let viscosities: Vec<f64> = default_model()
            .evaluate(&inputs)
            .iter()
            .map(|r| r.viscosity)
            .collect();
        assert_eq!(viscosities, vec![1e20, 1e20, 1e20, 1e23]);
    }

    #[test]
    fn density_unclamped_for_large_excursions() {
        let model = default_model();
        // alpha * dT = 1 at dT = 50000 K.
        assert_close(model.density_at(293.0 + 50_000.0), 0.0);
        assert!(model.density_at(293.0 + 100_000.0) < 0.0);
    }

    #[test]
    fn builder_rejects_negative_values() {
        let err = SimplerWithCrust::builder()
            .upper_viscosity(-1.0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::OutOfDomain {
                name: "Upper viscosity".into(),
                value: -1.0
            }
        );
    }

    #[test]
    fn builder_rejects_non_finite_values() {
        let err = SimplerWithCrust::builder()
            .thermal_conductivity(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfDomain { ref name, .. } if name == "Thermal conductivity"));
        assert!(SimplerWithCrust::builder()
            .jump_height(f64::NAN)
            .build()
            .is_err());
    }

    #[test]
    fn builder_accepts_zero() {
        let model = SimplerWithCrust::builder()
            .jump_height(0.0)
            .thermal_expansion_coefficient(0.0)
            .build()
            .unwrap();
        assert_eq!(model.density_at(5000.0), 3300.0);
        assert_eq!(model.viscosity_at(0.0), 1e20);
        assert_eq!(model.viscosity_at(1e-9), 1e23);
    }

    #[test]
    fn declare_then_parse_defaults() {
        let mut prm = ParameterHandler::new();
        SimplerWithCrust::declare_parameters(&mut prm).unwrap();
        assert_eq!(prm.current_path(), "");
        let model = SimplerWithCrust::parse_parameters(&mut prm).unwrap();
        assert_eq!(model.config(), &SimplerWithCrustConfig::default());
        assert_eq!(prm.current_path(), "");
    }

    #[test]
    fn declares_all_entries_with_documentation() {
        let mut prm = ParameterHandler::new();
        SimplerWithCrust::declare_parameters(&mut prm).unwrap();
        let entries = prm.entries();
        assert_eq!(entries.len(), 8);
        for (entry, p) in entries.iter().zip(SimplerWithCrustParameter::ALL) {
            assert_eq!(
                entry.path,
                format!("Material model/Simpler with crust model/{}", p.name())
            );
            assert_eq!(entry.default, p.default_value());
            assert!(entry.documentation.contains("Units:"));
        }
    }

    #[test]
    fn parse_without_declaration_is_missing_parameter() {
        let mut prm = ParameterHandler::new();
        let err = SimplerWithCrust::parse_parameters(&mut prm).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parameter(ParameterError::UndeclaredEntry {
                path: "Material model/Simpler with crust model/Reference density".into()
            })
        );
        assert_eq!(prm.current_path(), "");
    }

    fn arb_config() -> impl Strategy<Value = SimplerWithCrustConfig> {
        (
            1.0f64..10_000.0,
            0.0f64..3000.0,
            1e18f64..1e25,
            1e18f64..1e25,
            0.0f64..1e6,
            0.0f64..1e-4,
            0.0f64..10.0,
            0.0f64..3000.0,
        )
            .prop_map(|(rho, t0, eta_l, eta_u, jump, alpha, k, cp)| SimplerWithCrustConfig {
                reference_density: rho,
                reference_temperature: t0,
                lower_viscosity: eta_l,
                upper_viscosity: eta_u,
                jump_height: jump,
                thermal_expansion_coefficient: alpha,
                thermal_conductivity: k,
                reference_specific_heat: cp,
            })
    }

    proptest! {
        #[test]
        fn viscosity_is_step_in_z(config in arb_config(), z in -1e6f64..2e6, t in 0.0f64..4000.0) {
            let model = SimplerWithCrust::new(config.clone()).unwrap();
            let out = model.evaluate(&batch_2d(vec![point_2d(0.0, z, t)]));
            let expected = if z > config.jump_height {
                config.upper_viscosity
            } else {
                config.lower_viscosity
            };
            prop_assert_eq!(out[0].viscosity, expected);
            prop_assert_eq!(model.reference_viscosity(), config.lower_viscosity);
            prop_assert_eq!(out[0].thermal_expansion_coefficient, config.thermal_expansion_coefficient);
            prop_assert_eq!(out[0].thermal_conductivity, config.thermal_conductivity);
            prop_assert_eq!(out[0].specific_heat, config.reference_specific_heat);
            prop_assert_eq!(out[0].compressibility, 0.0);
        }

        #[test]
        fn viscosity_ignores_temperature_pressure_composition(
            z in 0.0f64..2e5,
            t in 0.0f64..4000.0,
            p in 0.0f64..1e11,
            c in prop::collection::vec(0.0f64..1.0, 0..6),
        ) {
            let model = default_model();
            let point = point_2d(0.0, z, t)
                .with_pressure(p)
                .with_composition(c.iter().copied().collect());
            let out = model.evaluate(&batch_2d(vec![point]));
            prop_assert_eq!(out[0].viscosity, model.viscosity_at(z));
            prop_assert_eq!(out[0].reaction_terms.len(), c.len());
            prop_assert!(out[0].reaction_terms.iter().all(|&v| v == 0.0));
        }

        #[test]
        fn density_at_reference_temperature_is_exact(config in arb_config()) {
            let model = SimplerWithCrust::new(config.clone()).unwrap();
            prop_assert_eq!(model.density_at(config.reference_temperature), config.reference_density);
        }

        #[test]
        fn density_is_affine_in_temperature(
            config in arb_config(),
            t1 in 0.0f64..4000.0,
            t2 in 0.0f64..4000.0,
        ) {
            let model = SimplerWithCrust::new(config).unwrap();
            let mid = model.density_at(0.5 * (t1 + t2));
            let avg = 0.5 * (model.density_at(t1) + model.density_at(t2));
            let scale = model.config().reference_density.max(1.0);
            prop_assert!((mid - avg).abs() <= 1e-9 * scale, "mid {} avg {}", mid, avg);
        }

        #[test]
        fn batch_equals_pointwise(
            points in prop::collection::vec((-1e5f64..3e5, 0.0f64..4000.0, 0usize..4), 0..40),
        ) {
            let model = default_model();
            let pts: Vec<_> = points
                .iter()
                .map(|&(z, t, n)| point_2d(0.0, z, t).with_composition(smallvec::SmallVec::from_elem(0.5, n)))
                .collect();
            let batched = model.evaluate(&batch_2d(pts.clone()));
            prop_assert_eq!(batched.len(), pts.len());
            for (i, p) in pts.into_iter().enumerate() {
                let single = model.evaluate(&batch_2d(vec![p]));
                prop_assert_eq!(&single[0], &batched[i]);
            }
        }
    }
}
