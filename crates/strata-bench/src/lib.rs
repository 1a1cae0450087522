//! Benchmark profiles and utilities for the Strata material-model framework.
//!
//! - [`random_batch`]: deterministic evaluation points spanning a
//!   crust/mantle column, seeded with ChaCha8.
//! - [`reference_prm`]: a parameter file selecting the built-in
//!   two-layer model with non-default values.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::{smallvec, SmallVec};
use strata_core::{Dimension, EvaluationPoint, MaterialInputs};

/// Model height (m) points are drawn from: `[0, DOMAIN_HEIGHT)`.
pub const DOMAIN_HEIGHT: f64 = 660_000.0;

/// Uniform sample in `[0, 1)` from the top 53 bits of a `u64`.
fn unit(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Build `n` deterministic points for `dim`, with heights in
/// `[0, DOMAIN_HEIGHT)`, temperatures in `[273, 3273)` K, pressures up to
/// 25 GPa, and `n_compositional_fields` fields per point.
pub fn random_batch(
    dim: Dimension,
    n: usize,
    n_compositional_fields: usize,
    seed: u64,
) -> MaterialInputs {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points = (0..n)
        .map(|_| {
            let x = unit(&mut rng) * 4.0 * DOMAIN_HEIGHT;
            let z = unit(&mut rng) * DOMAIN_HEIGHT;
            let position = match dim {
                Dimension::Two => smallvec![x, z],
                Dimension::Three => smallvec![x, z, unit(&mut rng) * 4.0 * DOMAIN_HEIGHT],
            };
            let composition: SmallVec<[f64; 4]> =
                (0..n_compositional_fields).map(|_| unit(&mut rng)).collect();
            EvaluationPoint::new(position, 273.0 + unit(&mut rng) * 3000.0)
                .with_pressure(unit(&mut rng) * 25e9)
                .with_composition(composition)
        })
        .collect();
    MaterialInputs::new(dim, points).expect("positions are built to match dim")
}

/// Parameter file selecting `simpler with crust` with a 35 km crust.
pub fn reference_prm() -> &'static str {
    "\
subsection Material model
  set Model name = simpler with crust
  subsection Simpler with crust model
    set Jump height = 625000
    set Upper viscosity = 1e24
    set Lower viscosity = 1e21
  end
end
"
}
