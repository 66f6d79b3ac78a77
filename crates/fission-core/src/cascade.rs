// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Neutron Evaporation Cascade
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Sequential single-neutron emission from an excited fragment.
//!
//! While E* > S_n(A, Z): emit one neutron, A ← A − 1,
//! E* ← E* − (S_n + ε), with ε the mean neutron kinetic energy.
//! Emission stops when E* ≤ S_n or when S_n of the current nucleus is not
//! tabulated. The energy left is released as gammas.

use fission_data::SeparationEnergies;
use fission_types::state::{CascadeResult, Nuclide};

/// Evaporate neutrons from `nuclide` at excitation `excitation` [MeV].
/// A strictly decreases, so the loop ends after at most N steps.
pub fn evaporate<S: SeparationEnergies + ?Sized>(
    separation: &S,
    nuclide: Nuclide,
    excitation: f64,
    ekin: f64,
) -> CascadeResult {
    let mut current = nuclide;
    let mut xe = excitation;
    let mut neutrons = 0u32;

    while let Some(sn) = separation.separation_energy(current) {
        if xe <= sn {
            break;
        }
        let Some(daughter) = current.without_neutron() else {
            break;
        };
        xe -= sn + ekin;
        neutrons += 1;
        log::trace!(
            "{current} → {daughter}: S_n = {sn:.3} MeV, E* left = {xe:.3} MeV"
        );
        current = daughter;
    }

    CascadeResult {
        neutrons,
        residual_energy: xe,
        final_nuclide: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fission_data::{LiquidDropModel, SeparationTable};

    fn flat_table(z: u32, a_range: std::ops::RangeInclusive<u32>, sn: f64) -> SeparationTable {
        SeparationTable::from_entries(a_range.map(|a| (Nuclide::new(a, z), sn)))
    }

    #[test]
    fn test_below_threshold_emits_nothing() {
        let table = flat_table(54, 130..=140, 5.0);
        let r = evaporate(&table, Nuclide::new(140, 54), 5.0, 2.0);
        assert_eq!(r.neutrons, 0);
        assert_eq!(r.residual_energy, 5.0);
        assert_eq!(r.final_nuclide, Nuclide::new(140, 54));
    }

    #[test]
    fn test_flat_separation_energy_steps() {
        // each step costs 5 + 2 = 7 MeV; 20 → 13 → 6 → -1
        let table = flat_table(54, 130..=140, 5.0);
        let r = evaporate(&table, Nuclide::new(140, 54), 20.0, 2.0);
        assert_eq!(r.neutrons, 3);
        assert!((r.residual_energy + 1.0).abs() < 1e-12);
        assert_eq!(r.final_nuclide, Nuclide::new(137, 54));
    }

    #[test]
    fn test_stops_when_separation_energy_missing() {
        let table = flat_table(54, 139..=140, 5.0);
        let r = evaporate(&table, Nuclide::new(140, 54), 50.0, 2.0);
        assert_eq!(r.neutrons, 2);
        assert_eq!(r.final_nuclide, Nuclide::new(138, 54));
        assert!((r.residual_energy - 36.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_excitation_returned_raw() {
        let ldm = LiquidDropModel::default();
        let r = evaporate(&ldm, Nuclide::new(96, 38), -3.0, 2.0);
        assert_eq!(r.neutrons, 0);
        assert_eq!(r.residual_energy, -3.0);
    }

    #[test]
    fn test_idempotent_on_termination() {
        let ldm = LiquidDropModel::default();
        let first = evaporate(&ldm, Nuclide::new(140, 54), 25.0, 2.0);
        let again = evaporate(&ldm, first.final_nuclide, first.residual_energy, 2.0);
        assert_eq!(again.neutrons, 0);
        assert_eq!(again.residual_energy, first.residual_energy);
    }

    #[test]
    fn test_zero_kinetic_energy() {
        let table = flat_table(38, 90..=96, 4.0);
        let r = evaporate(&table, Nuclide::new(96, 38), 12.5, 0.0);
        assert_eq!(r.neutrons, 3);
        assert!((r.residual_energy - 0.5).abs() < 1e-12);
    }
}
