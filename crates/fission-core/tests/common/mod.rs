//! Synthetic nuclear data for the integration tests and benches.
//!
//! Liquid drop masses and separation energies, plus a double-humped U-235
//! independent yield table: a Gaussian light peak around A = 95.5 with the
//! unchanged charge distribution, mirrored into complementary heavy
//! fragments. Light yields sum to 1, the whole table to 2.
#![allow(dead_code)]

use fission_data::elements::format_label;
use fission_data::{InMemoryYields, LiquidDropModel, MassTable, SeparationEnergies, YieldLibrary};
use fission_types::error::FissionResult;
use fission_types::state::{FissionYieldDistribution, Nuclide, YieldSet, YieldValue};

pub const U235: Nuclide = Nuclide::new(235, 92);

/// Incident energies of the synthetic evaluation [MeV].
pub const ENERGIES: [f64; 3] = [2.53e-8, 0.5, 14.0];

pub struct SyntheticData {
    pub ldm: LiquidDropModel,
    pub yields: InMemoryYields,
}

impl MassTable for SyntheticData {
    fn mass(&self, nuclide: Nuclide) -> FissionResult<f64> {
        self.ldm.mass(nuclide)
    }
}

impl SeparationEnergies for SyntheticData {
    fn separation_energy(&self, nuclide: Nuclide) -> Option<f64> {
        self.ldm.separation_energy(nuclide)
    }
}

impl YieldLibrary for SyntheticData {
    fn fission_yields(&self, target: Nuclide) -> FissionResult<Vec<YieldSet>> {
        self.yields.fission_yields(target)
    }
}

/// Light fragments (A, Z) with unnormalized weights.
fn light_peak() -> Vec<(Nuclide, f64)> {
    let compound = Nuclide::new(U235.a + 1, U235.z);
    let z_over_a = compound.z as f64 / compound.a as f64;
    let mut out = Vec::new();
    for a in 80u32..118 {
        let w_a = (-0.5 * ((a as f64 - 95.5) / 5.5).powi(2)).exp();
        let z_centre = a as f64 * z_over_a - 0.5;
        let z0 = z_centre as i64;
        for z in (z0 - 3)..=(z0 + 3) {
            let w_z = (-0.5 * ((z as f64 - z_centre) / 0.6).powi(2)).exp();
            out.push((Nuclide::new(a, z as u32), w_a * w_z));
        }
    }
    out
}

pub fn u235_distribution() -> FissionYieldDistribution {
    let light = light_peak();
    let norm: f64 = light.iter().map(|&(_, w)| w).sum();
    let mut dist = FissionYieldDistribution::new();
    for (nuclide, w) in light {
        let y = YieldValue::nominal(w / norm);
        let heavy = Nuclide::new(U235.a + 1 - nuclide.a, U235.z - nuclide.z);
        for n in [nuclide, heavy] {
            if let Some(label) = format_label(n, 0) {
                dist.insert(label, y);
            }
        }
    }
    dist
}

pub fn synthetic_u235() -> SyntheticData {
    let dist = u235_distribution();
    let sets = ENERGIES
        .iter()
        .map(|&energy| YieldSet {
            energy,
            yields: dist.clone(),
        })
        .collect();
    SyntheticData {
        ldm: LiquidDropModel::default(),
        yields: InMemoryYields::new().with_target(U235, sets),
    }
}
