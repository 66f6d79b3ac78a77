// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Energy Balance
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Q-value, total kinetic energy and total excitation energy of a
//! fragmentation.
//!
//! TKE uses two uniformly charged spheres in contact, separated further by
//! the quadrupole deformation β:
//!   TKE = k·Z_h·Z_l / ((R_h + R_l)(1 + 2β)),  R = r0·A^(1/3)

use fission_data::{MassTable, SeparationEnergies};
use fission_types::constants::{COULOMB_CONSTANT, NEUTRON_MASS, NUCLEAR_RADIUS_R0};
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::{EnergyBalance, FragmentPair, Nuclide};

/// Radius of an incompressible nucleus [fm].
pub fn nuclear_radius(a: u32) -> f64 {
    NUCLEAR_RADIUS_R0 * (a as f64).cbrt()
}

/// Coulomb energy of the two fragments at scission [MeV].
pub fn tke(heavy: Nuclide, light: Nuclide, beta: f64) -> f64 {
    let distance = (nuclear_radius(heavy.a) + nuclear_radius(light.a)) * (1.0 + 2.0 * beta);
    COULOMB_CONSTANT * heavy.z as f64 * light.z as f64 / distance
}

/// Q = M_t + m_n + S_n(t) + E − M_h − M_l [MeV].
///
/// `NotAvailable` if any of the three masses or the target separation
/// energy is missing.
pub fn q_value<D>(
    data: &D,
    target: Nuclide,
    heavy: Nuclide,
    light: Nuclide,
    energy: f64,
) -> FissionResult<f64>
where
    D: MassTable + SeparationEnergies + ?Sized,
{
    let m_target = data.mass(target)?;
    let sn_target = data.separation_energy(target).ok_or_else(|| {
        FissionError::NotAvailable(format!("separation energy of target {target} not tabulated"))
    })?;
    let m_heavy = data.mass(heavy)?;
    let m_light = data.mass(light)?;
    Ok(m_target + NEUTRON_MASS + sn_target + energy - m_heavy - m_light)
}

/// Q, TKE and TXE = Q − TKE of one pair. TXE is not clamped.
pub fn energy_balance<D>(
    data: &D,
    target: Nuclide,
    pair: &FragmentPair,
    energy: f64,
    beta: f64,
) -> FissionResult<EnergyBalance>
where
    D: MassTable + SeparationEnergies + ?Sized,
{
    let q = q_value(data, target, pair.heavy, pair.light, energy)?;
    let kinetic = tke(pair.heavy, pair.light, beta);
    Ok(EnergyBalance {
        q_value: q,
        tke: kinetic,
        txe: q - kinetic,
    })
}
