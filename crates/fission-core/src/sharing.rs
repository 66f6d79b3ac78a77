// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Excitation Energy Sharing
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Partition of the total excitation energy between the two fragments.
//!
//! Both models give the light fragment's share x. The anisothermal factor
//! rt rescales it to x_eff = rt²·x, then
//!   E*_l = x_eff·TXE,  E*_h = (1 − x_eff)·TXE.
//! For rt ≠ 1, x_eff may exceed 1 and drive E*_h negative.

use fission_data::{MassTable, SeparationEnergies};
use fission_types::config::SharingModel;
use fission_types::constants::{BSGF_P, BSGF_Q, BSGF_R};
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::{ExcitationSplit, FragmentPair, Nuclide};

/// Fong: nucleon gas at a common temperature, x = A_l / (A_l + A_h).
pub fn fong(heavy: Nuclide, light: Nuclide) -> f64 {
    light.a as f64 / (light.a as f64 + heavy.a as f64)
}

/// Three-point pairing gap
///   P_d = ½·(−1)^Z·(−M(A+2, Z+1) + 2·M(A, Z) − M(A−2, Z−1)).
pub fn pairing_gap<D: MassTable + ?Sized>(data: &D, nuclide: Nuclide) -> FissionResult<f64> {
    let off_chart = || {
        FissionError::NotAvailable(format!("pairing neighbours of {nuclide} leave the chart"))
    };
    let up = nuclide.offset(2, 1).ok_or_else(off_chart)?;
    let down = nuclide.offset(-2, -1).ok_or_else(off_chart)?;

    let sign = if nuclide.z % 2 == 0 { 1.0 } else { -1.0 };
    Ok(0.5 * sign * (-data.mass(up)? + 2.0 * data.mass(nuclide)? - data.mass(down)?))
}

/// Pairing shift δ of `nuclide`.
///
/// δ = +P_d/2 when A and Z are even, −P_d/2 when A and Z of `odd_reference`
/// are odd, 0 otherwise. Both fragments of a pair take the heavy fragment
/// as `odd_reference`. P_d is always evaluated, so missing neighbour
/// masses are `NotAvailable` even where δ would be zero.
pub fn pairing_shift<D: MassTable + ?Sized>(
    data: &D,
    nuclide: Nuclide,
    odd_reference: Nuclide,
) -> FissionResult<f64> {
    let p_d = pairing_gap(data, nuclide)?;
    if nuclide.a % 2 == 0 && nuclide.z % 2 == 0 {
        Ok(0.5 * p_d)
    } else if odd_reference.a % 2 == 1 && odd_reference.z % 2 == 1 {
        Ok(-0.5 * p_d)
    } else {
        Ok(0.0)
    }
}

/// Back-shifted Fermi gas level density weight d = A·(p + q·s + r·A)
/// with s = S_n − δ.
fn level_density_weight<D>(
    data: &D,
    nuclide: Nuclide,
    odd_reference: Nuclide,
) -> FissionResult<f64>
where
    D: MassTable + SeparationEnergies + ?Sized,
{
    let shift = pairing_shift(data, nuclide, odd_reference)?;
    let sn = data.separation_energy(nuclide).ok_or_else(|| {
        FissionError::NotAvailable(format!("separation energy of fragment {nuclide} not tabulated"))
    })?;
    let a = nuclide.a as f64;
    Ok(a * (BSGF_P + BSGF_Q * (sn - shift) + BSGF_R * a))
}

/// von Egidy & Bucurescu (BSGF) systematics: x = d_l / (d_l + d_h).
pub fn von_egidy<D>(data: &D, heavy: Nuclide, light: Nuclide) -> FissionResult<f64>
where
    D: MassTable + SeparationEnergies + ?Sized,
{
    let d_heavy = level_density_weight(data, heavy, heavy)?;
    let d_light = level_density_weight(data, light, heavy)?;
    Ok(d_light / (d_light + d_heavy))
}

/// Light-fragment share x of the selected model, before rt rescaling.
pub fn sharing_factor<D>(
    data: &D,
    model: SharingModel,
    heavy: Nuclide,
    light: Nuclide,
) -> FissionResult<f64>
where
    D: MassTable + SeparationEnergies + ?Sized,
{
    match model {
        SharingModel::Fong => Ok(fong(heavy, light)),
        SharingModel::VonEgidy => von_egidy(data, heavy, light),
    }
}

/// Split `txe` between the fragments of `pair`.
pub fn txe_sharing<D>(
    data: &D,
    txe: f64,
    pair: &FragmentPair,
    model: SharingModel,
    rt: f64,
) -> FissionResult<ExcitationSplit>
where
    D: MassTable + SeparationEnergies + ?Sized,
{
    let x = rt * rt * sharing_factor(data, model, pair.heavy, pair.light)?;
    Ok(ExcitationSplit {
        heavy: (1.0 - x) * txe,
        light: x * txe,
    })
}
