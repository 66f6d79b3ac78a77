// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Fragment Coupling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Independent yields → complementary fragment pairs.
//!
//! Algorithm:
//! 1. Decode each product label into (A, Z); unreadable labels are skipped.
//! 2. Sum isomers of the same (A, Z).
//! 3. Sort by (A, Z) ascending.
//! 4. The first ⌊len/2⌋ entries are light fragments. Each is paired with
//!    the complement (A_t + 1 − A_l, Z_t − Z_l) and carries its own yield.
//!
//! The pairing is an idealization: the complement is not looked up in the
//! distribution, and with an odd count the last entry is dropped.

use fission_data::elements;
use fission_types::state::{FissionYieldDistribution, FragmentPair, Nuclide};
use std::collections::BTreeMap;

/// Steps 1–3: isomer-merged fragments sorted by (A, Z), with their summed yields.
pub fn merged_fragments(distribution: &FissionYieldDistribution) -> Vec<(Nuclide, f64)> {
    let mut merged: BTreeMap<Nuclide, f64> = BTreeMap::new();
    for (label, y) in distribution.iter() {
        match elements::parse_label(label) {
            Some((nuclide, _state)) => *merged.entry(nuclide).or_insert(0.0) += y.value,
            None => log::debug!("Skipping unreadable product label '{label}'"),
        }
    }
    merged.into_iter().collect()
}

/// Complement of `light` in neutron-induced fission of `target`.
/// `None` when it has no protons or leaves the chart.
pub fn complement(target: Nuclide, light: Nuclide) -> Option<Nuclide> {
    let a = target.a as i64 + 1 - light.a as i64;
    let z = target.z as i64 - light.z as i64;
    Nuclide::try_new(a, z).filter(|n| n.z > 0)
}

/// Mass- and charge-conserving fragment pairs of `target`.
pub fn fission_fragments_coupled(
    target: Nuclide,
    distribution: &FissionYieldDistribution,
) -> Vec<FragmentPair> {
    let merged = merged_fragments(distribution);
    let half = merged.len() / 2;

    merged[..half]
        .iter()
        .filter_map(|&(light, probability)| match complement(target, light) {
            Some(heavy) => Some(FragmentPair {
                heavy,
                light,
                probability,
            }),
            None => {
                log::debug!("No complement of {light} in fission of {target}, pair skipped");
                None
            }
        })
        .collect()
}

/// Σ p over the coupled pairs. Close to 1 for a normalized evaluation.
pub fn coupled_probability_sum(pairs: &[FragmentPair]) -> f64 {
    pairs.iter().map(|p| p.probability).sum()
}
