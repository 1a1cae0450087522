//! Criterion micro-benchmarks for host-side setup: registry population,
//! parameter declaration, parameter-file parsing, and model construction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strata_bench::reference_prm;
use strata_material::ModelRegistry;
use strata_models::register_builtin_models;
use strata_params::ParameterHandler;

/// Benchmark: full setup from an empty registry to a configured model.
fn bench_full_setup(c: &mut Criterion) {
    c.bench_function("setup_registry_to_model", |b| {
        b.iter(|| {
            let mut registry = ModelRegistry::new();
            register_builtin_models(&mut registry).unwrap();
            let mut prm = ParameterHandler::new();
            registry.declare_parameters(&mut prm).unwrap();
            prm.parse_input(black_box(reference_prm())).unwrap();
            black_box(registry.create_selected(&mut prm).unwrap())
        });
    });
}

/// Benchmark: parsing the reference parameter file into a declared tree.
fn bench_parse_input(c: &mut Criterion) {
    let mut registry = ModelRegistry::new();
    register_builtin_models(&mut registry).unwrap();
    let mut declared = ParameterHandler::new();
    registry.declare_parameters(&mut declared).unwrap();

    c.bench_function("parse_reference_prm", |b| {
        b.iter(|| {
            let mut prm = declared.clone();
            prm.parse_input(black_box(reference_prm())).unwrap();
            black_box(prm)
        });
    });
}

criterion_group!(benches, bench_full_setup, bench_parse_input);
criterion_main!(benches);
