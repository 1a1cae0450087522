//! Integration tests for the built-in models through the full host path:
//! explicit registration, parameter declaration, parameter-file parsing,
//! model selection, and batched evaluation.

use std::sync::Arc;

use strata_core::{ConfigError, Dimension, MaterialInputs, ParameterError, RegistryError};
use strata_material::{MaterialModel, ModelRegistry};
use strata_models::register_builtin_models;
use strata_params::ParameterHandler;
use strata_test_utils::{batch_2d, column, point_2d, point_3d};

// ---------- Helpers ----------

fn host_setup(prm_file: &str) -> Result<Box<dyn MaterialModel>, RegistryError> {
    let mut registry = ModelRegistry::new();
    register_builtin_models(&mut registry)?;
    let mut prm = ParameterHandler::new();
    registry.declare_parameters(&mut prm)?;
    prm.parse_input(prm_file)?;
    registry.create_selected(&mut prm)
}

const SELECT_ONLY: &str = "\
subsection Material model
  set Model name = simpler with crust
end
";

// ---------- Scenarios with defaults ----------

#[test]
fn defaults_through_registry() {
    let model = host_setup(SELECT_ONLY).unwrap();
    assert_eq!(model.name(), "simpler with crust");
    assert!(!model.is_compressible());
    assert_eq!(model.reference_viscosity(), 1e20);
    assert!(model.model_dependence().is_independent());

    let out = model.evaluate(&batch_2d(vec![
        point_2d(0.0, 150_000.0, 293.0),
        point_2d(0.0, 50_000.0, 1293.0),
        point_2d(0.0, 100_000.0, 293.0),
    ]));
    assert_eq!(out.len(), 3);

    assert_eq!(out[0].viscosity, 1e23);
    assert_eq!(out[0].density, 3300.0);

    assert_eq!(out[1].viscosity, 1e20);
    assert!((out[1].density - 3234.0).abs() < 1e-9);

    assert_eq!(out[2].viscosity, 1e20);
}

// ---------- Parameter file overrides ----------

#[test]
fn parameter_file_values_reach_the_model() {
    let model = host_setup(
        "\
# thin crust, stiff lid
subsection Material model
  set Model name = simpler with crust
  subsection Simpler with crust model
    set Jump height = 20000
    set Upper viscosity = 1e25
    set Lower viscosity = 1e21
    set Reference density = 3000
    set Reference temperature = 273
    set Thermal expansion coefficient = 3e-5
    set Thermal conductivity = 2.5
    set Reference specific heat = 1000
  end
end
",
    )
    .unwrap();

    assert_eq!(model.reference_viscosity(), 1e21);
    let out = model.evaluate(&batch_2d(vec![
        point_2d(0.0, 20_001.0, 273.0),
        point_2d(0.0, 20_000.0, 273.0),
    ]));
    assert_eq!(out[0].viscosity, 1e25);
    assert_eq!(out[1].viscosity, 1e21);
    assert_eq!(out[0].density, 3000.0);
    assert_eq!(out[0].thermal_expansion_coefficient, 3e-5);
    assert_eq!(out[0].thermal_conductivity, 2.5);
    assert_eq!(out[0].specific_heat, 1000.0);
}

#[test]
fn negative_parameter_rejected_at_setup() {
    let err = host_setup(
        "\
subsection Material model
  set Model name = simpler with crust
  subsection Simpler with crust model
    set Thermal conductivity = -4.7
  end
end
",
    )
    .err()
    .unwrap();
    assert!(
        matches!(
            err,
            RegistryError::Parameter(ParameterError::PatternMismatch { ref path, .. })
                if path == "Material model/Simpler with crust model/Thermal conductivity"
        ),
        "{err:?}"
    );
}

#[test]
fn missing_schema_is_config_error() {
    let mut registry = ModelRegistry::new();
    register_builtin_models(&mut registry).unwrap();
    // Parameters never declared: the model cannot find its entries.
    let mut prm = ParameterHandler::new();
    let err = registry
        .create("simpler with crust", &mut prm)
        .err()
        .unwrap();
    assert!(
        matches!(
            err,
            RegistryError::Config {
                reason: ConfigError::Parameter(ParameterError::UndeclaredEntry { .. }),
                ..
            }
        ),
        "{err:?}"
    );
}

#[test]
fn builtins_register_once() {
    let mut registry = ModelRegistry::new();
    register_builtin_models(&mut registry).unwrap();
    assert_eq!(
        register_builtin_models(&mut registry).unwrap_err(),
        RegistryError::DuplicateModel {
            name: "simpler with crust".into()
        }
    );
}

// ---------- Batch behaviour ----------

#[test]
fn empty_batch_through_trait_object() {
    let model = host_setup(SELECT_ONLY).unwrap();
    let out = model.evaluate(&MaterialInputs::empty(Dimension::Three));
    assert!(out.is_empty());
}

#[test]
fn three_dimensional_batch() {
    let model = host_setup(SELECT_ONLY).unwrap();
    let inputs = MaterialInputs::new(
        Dimension::Three,
        vec![
            point_3d(5.0, 99_999.0, 300_000.0, 293.0),
            point_3d(5.0, 100_001.0, 0.0, 293.0),
        ],
    )
    .unwrap();
    let out = model.evaluate(&inputs);
    assert_eq!(out[0].viscosity, 1e20);
    assert_eq!(out[1].viscosity, 1e23);
}

#[test]
fn concurrent_disjoint_batches_match_sequential() {
    let model: Arc<dyn MaterialModel> = Arc::from(host_setup(SELECT_ONLY).unwrap());
    let heights: Vec<f64> = (0..1000).map(|i| i as f64 * 250.0).collect();
    let inputs = column(Dimension::Two, &heights, 1500.0);
    let sequential = model.evaluate(&inputs);

    let chunks: Vec<MaterialInputs> = inputs.chunks(128).collect();
    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|chunk| {
                let model = Arc::clone(&model);
                s.spawn(move || model.evaluate(chunk))
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap().into_vec())
            .collect()
    });

    assert_eq!(parallel.len(), sequential.len());
    assert_eq!(parallel.as_slice(), sequential.as_slice());
}
