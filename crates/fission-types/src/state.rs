// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Nucleus identified by mass number A and charge number Z.
/// Ordering is by (A, Z), the order used to sort fission products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Nuclide {
    pub a: u32,
    pub z: u32,
}

impl Nuclide {
    /// Caller guarantees 0 ≤ Z ≤ A.
    pub const fn new(a: u32, z: u32) -> Self {
        Nuclide { a, z }
    }

    /// Checked constructor from signed values. `None` unless 1 ≤ A and 0 ≤ Z ≤ A.
    pub fn try_new(a: i64, z: i64) -> Option<Self> {
        if a < 1 || z < 0 || z > a || a > u32::MAX as i64 {
            return None;
        }
        Some(Nuclide::new(a as u32, z as u32))
    }

    /// Neutron number N = A - Z.
    pub fn n(&self) -> u32 {
        self.a - self.z
    }

    /// Shifted nucleus (A + da, Z + dz), `None` if it leaves the chart.
    pub fn offset(&self, da: i64, dz: i64) -> Option<Self> {
        Nuclide::try_new(self.a as i64 + da, self.z as i64 + dz)
    }

    /// Nucleus left behind after one neutron emission.
    pub fn without_neutron(&self) -> Option<Self> {
        self.offset(-1, 0)
    }

    /// Even Z and even N.
    pub fn is_even_even(&self) -> bool {
        self.z % 2 == 0 && self.n() % 2 == 0
    }

    /// Odd Z and odd N.
    pub fn is_odd_odd(&self) -> bool {
        self.z % 2 == 1 && self.n() % 2 == 1
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(A={}, Z={})", self.a, self.z)
    }
}

/// Independent yield with its evaluated uncertainty. Only `value` enters
/// the averages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YieldValue {
    pub value: f64,
    #[serde(default)]
    pub uncertainty: f64,
}

impl YieldValue {
    pub fn new(value: f64, uncertainty: f64) -> Self {
        YieldValue { value, uncertainty }
    }

    pub fn nominal(value: f64) -> Self {
        YieldValue::new(value, 0.0)
    }
}

/// Independent fission yields at one incident energy, keyed by product
/// label (`Xe140`, `Xe140_m1`, ...). Label-sorted so iteration is
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FissionYieldDistribution {
    entries: BTreeMap<String, YieldValue>,
}

impl FissionYieldDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product yield. A repeated label accumulates.
    pub fn insert(&mut self, label: impl Into<String>, value: YieldValue) {
        let entry = self.entries.entry(label.into()).or_default();
        entry.value += value.value;
        entry.uncertainty = (entry.uncertainty.powi(2) + value.uncertainty.powi(2)).sqrt();
    }

    pub fn get(&self, label: &str) -> Option<&YieldValue> {
        self.entries.get(label)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &YieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of nominal yields (≈ 2 for an evaluated independent-yield set).
    pub fn total(&self) -> f64 {
        self.entries.values().map(|y| y.value).sum()
    }
}

impl<S: Into<String>> FromIterator<(S, YieldValue)> for FissionYieldDistribution {
    fn from_iter<I: IntoIterator<Item = (S, YieldValue)>>(iter: I) -> Self {
        let mut dist = FissionYieldDistribution::new();
        for (label, value) in iter {
            dist.insert(label, value);
        }
        dist
    }
}

/// Yield distribution tabulated at one incident neutron energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldSet {
    /// Incident neutron energy [MeV].
    pub energy: f64,
    pub yields: FissionYieldDistribution,
}

/// Complementary fragment pair with the light fragment's yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FragmentPair {
    pub heavy: Nuclide,
    pub light: Nuclide,
    pub probability: f64,
}

/// Energy balance of one fragmentation [MeV].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBalance {
    pub q_value: f64,
    pub tke: f64,
    /// Q - TKE, not clamped. Negative for unphysical data.
    pub txe: f64,
}

/// Excitation energy of each fragment [MeV].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExcitationSplit {
    pub heavy: f64,
    pub light: f64,
}

impl ExcitationSplit {
    pub fn total(&self) -> f64 {
        self.heavy + self.light
    }
}

/// Outcome of the neutron evaporation of one fragment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeResult {
    pub neutrons: u32,
    /// Excitation energy left when emission stops [MeV]. Released as gammas.
    pub residual_energy: f64,
    /// Nucleus reached at the end of the cascade.
    pub final_nuclide: Nuclide,
}

/// Decay of one fragmentation: both cascades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDecay {
    pub balance: EnergyBalance,
    pub split: ExcitationSplit,
    pub heavy: CascadeResult,
    pub light: CascadeResult,
}

impl PairDecay {
    pub fn neutrons(&self) -> u32 {
        self.heavy.neutrons + self.light.neutrons
    }

    pub fn gamma_energy(&self) -> f64 {
        self.heavy.residual_energy + self.light.residual_energy
    }
}

/// Yield-weighted decay averages at one incident energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyAverage {
    /// Incident neutron energy [MeV].
    pub energy: f64,
    /// Average neutron multiplicity.
    pub nubar: f64,
    /// Average total residual (gamma) energy [MeV].
    pub gamma_energy: f64,
    /// Probability mass of the fragmentations that survived.
    pub total_probability: f64,
    pub pairs_used: usize,
    pub pairs_skipped: usize,
}
