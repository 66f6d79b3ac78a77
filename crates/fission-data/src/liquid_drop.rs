// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Liquid Drop Masses
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Semi-empirical (Bethe–Weizsäcker) mass formula.
//!
//! Smooth stand-in for the tabulated masses and separation energies: covers
//! the whole chart, no shell effects. Used where evaluated tables are not
//! shipped, and by the test suites.

use crate::lookup::{MassTable, SeparationEnergies};
use fission_types::constants::{HYDROGEN_MASS, NEUTRON_MASS};
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::Nuclide;

/// Liquid drop coefficients [MeV].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidDropModel {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    /// Pairing term a_p / √A.
    pub pairing: f64,
}

impl Default for LiquidDropModel {
    fn default() -> Self {
        LiquidDropModel {
            volume: 15.75,
            surface: 17.8,
            coulomb: 0.711,
            asymmetry: 23.7,
            pairing: 11.18,
        }
    }
}

impl LiquidDropModel {
    /// Total binding energy B(A, Z) [MeV].
    pub fn binding_energy(&self, nuclide: Nuclide) -> f64 {
        let a = nuclide.a as f64;
        let z = nuclide.z as f64;
        let asym = nuclide.n() as f64 - z;
        let a13 = a.cbrt();

        let mut b = self.volume * a - self.surface * a13 * a13
            - self.coulomb * z * (z - 1.0) / a13
            - self.asymmetry * asym * asym / a;
        if nuclide.is_even_even() {
            b += self.pairing / a.sqrt();
        } else if nuclide.is_odd_odd() {
            b -= self.pairing / a.sqrt();
        }
        b
    }
}

impl MassTable for LiquidDropModel {
    fn mass(&self, nuclide: Nuclide) -> FissionResult<f64> {
        if nuclide.z == 0 {
            return Err(FissionError::NotAvailable(format!(
                "liquid drop mass undefined for {nuclide}"
            )));
        }
        Ok(nuclide.z as f64 * HYDROGEN_MASS + nuclide.n() as f64 * NEUTRON_MASS
            - self.binding_energy(nuclide))
    }
}

impl SeparationEnergies for LiquidDropModel {
    fn separation_energy(&self, nuclide: Nuclide) -> Option<f64> {
        let daughter = nuclide.without_neutron()?;
        if nuclide.z == 0 {
            return None;
        }
        Some(self.binding_energy(nuclide) - self.binding_energy(daughter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_per_nucleon_near_iron_peak() {
        let ldm = LiquidDropModel::default();
        let fe56 = ldm.binding_energy(Nuclide::new(56, 26)) / 56.0;
        let u238 = ldm.binding_energy(Nuclide::new(238, 92)) / 238.0;
        assert!((8.5..9.0).contains(&fe56), "B/A(Fe56) = {fe56}");
        assert!((7.4..7.8).contains(&u238), "B/A(U238) = {u238}");
        assert!(fe56 > u238);
    }

    #[test]
    fn test_separation_is_mass_difference() {
        let ldm = LiquidDropModel::default();
        let n = Nuclide::new(236, 92);
        let d = Nuclide::new(235, 92);
        let sn = ldm.separation_energy(n).unwrap();
        let from_masses = ldm.mass(d).unwrap() + NEUTRON_MASS - ldm.mass(n).unwrap();
        assert!((sn - from_masses).abs() < 1e-9);
        // even-N compound more bound than odd-N
        assert!(sn > ldm.separation_energy(d).unwrap());
    }

    #[test]
    fn test_fission_releases_energy() {
        let ldm = LiquidDropModel::default();
        let q = ldm.mass(Nuclide::new(236, 92)).unwrap()
            - ldm.mass(Nuclide::new(140, 54)).unwrap()
            - ldm.mass(Nuclide::new(96, 38)).unwrap();
        assert!((150.0..220.0).contains(&q), "Q = {q}");
    }

    #[test]
    fn test_separation_undefined_at_chart_edge() {
        let ldm = LiquidDropModel::default();
        assert_eq!(ldm.separation_energy(Nuclide::new(1, 1)), None);
        assert!(ldm.mass(Nuclide::new(1, 0)).is_err());
    }
}
