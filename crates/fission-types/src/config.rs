// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{FissionError, FissionResult};
use crate::state::Nuclide;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Top-level run configuration.
/// Maps 1:1 to configs/*.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FissionConfig {
    /// Fissile target nucleus.
    pub target: Nuclide,
    #[serde(default)]
    pub decay: DecayParams,
    #[serde(default)]
    pub data: DataPaths,
}

/// Excitation energy sharing model between the two fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SharingModel {
    /// Nucleon gases at equal temperature: mass-proportional sharing.
    #[serde(rename = "fong")]
    Fong,
    /// Back-shifted Fermi gas level densities.
    #[serde(rename = "von_egidy", alias = "edigy")]
    VonEgidy,
}

impl fmt::Display for SharingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharingModel::Fong => write!(f, "fong"),
            SharingModel::VonEgidy => write!(f, "von_egidy"),
        }
    }
}

impl FromStr for SharingModel {
    type Err = FissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fong" => Ok(SharingModel::Fong),
            "von_egidy" | "vonegidy" | "edigy" | "bsgf" => Ok(SharingModel::VonEgidy),
            other => Err(FissionError::InvalidInput(format!(
                "unknown sharing model '{other}' (expected 'fong' or 'von_egidy')"
            ))),
        }
    }
}

/// Physics parameters of the decay calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecayParams {
    /// Average kinetic energy of an evaporated neutron [MeV] (default: 2.0)
    #[serde(default = "default_ekin")]
    pub ekin: f64,
    /// Quadrupole deformation of the fragments at scission (default: 0.2)
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Sharing model (default: fong)
    #[serde(default = "default_model")]
    pub model: SharingModel,
    /// Anisothermal coefficient; 1.0 is thermal equilibrium (default: 1.0)
    #[serde(default = "default_rt")]
    pub rt: f64,
}

fn default_ekin() -> f64 {
    2.0
}
fn default_beta() -> f64 {
    0.2
}
fn default_model() -> SharingModel {
    SharingModel::Fong
}
fn default_rt() -> f64 {
    1.0
}

impl Default for DecayParams {
    fn default() -> Self {
        DecayParams {
            ekin: default_ekin(),
            beta: default_beta(),
            model: default_model(),
            rt: default_rt(),
        }
    }
}

impl DecayParams {
    pub fn with_beta(self, beta: f64) -> Self {
        DecayParams { beta, ..self }
    }

    pub fn validate(&self) -> FissionResult<()> {
        if !self.ekin.is_finite() || self.ekin < 0.0 {
            return Err(FissionError::ConfigError(format!(
                "neutron kinetic energy must be finite and non-negative, got {}",
                self.ekin
            )));
        }
        // 1 + 2β is the contact distance stretch; it must stay positive.
        if !self.beta.is_finite() || self.beta <= -0.5 {
            return Err(FissionError::ConfigError(format!(
                "deformation must be finite and > -0.5, got {}",
                self.beta
            )));
        }
        if !self.rt.is_finite() || self.rt < 0.0 {
            return Err(FissionError::ConfigError(format!(
                "anisothermal coefficient must be finite and non-negative, got {}",
                self.rt
            )));
        }
        Ok(())
    }
}

/// Locations of the evaluated data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPaths {
    /// AME2020 mass table (mass.txt)
    #[serde(default = "default_mass_table")]
    pub mass_table: PathBuf,
    /// LANL one/two-neutron separation energies (sepn.dat)
    #[serde(default = "default_separation_table")]
    pub separation_table: PathBuf,
    /// Directory of ENDF/B-VIII.0 nfy-*.endf files
    #[serde(default = "default_yields_dir")]
    pub yields_dir: PathBuf,
}

fn default_mass_table() -> PathBuf {
    PathBuf::from("data/mass.txt")
}
fn default_separation_table() -> PathBuf {
    PathBuf::from("data/sepn.dat")
}
fn default_yields_dir() -> PathBuf {
    PathBuf::from("data/yields")
}

impl Default for DataPaths {
    fn default() -> Self {
        DataPaths {
            mass_table: default_mass_table(),
            separation_table: default_separation_table(),
            yields_dir: default_yields_dir(),
        }
    }
}

impl DataPaths {
    /// Standard layout (mass.txt, sepn.dat, yields/) under one directory.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        DataPaths {
            mass_table: root.join("mass.txt"),
            separation_table: root.join("sepn.dat"),
            yields_dir: root.join("yields"),
        }
    }

    /// Resolve relative paths against `base` (usually the config file's directory).
    pub fn resolved_against(&self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let resolve = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        DataPaths {
            mass_table: resolve(&self.mass_table),
            separation_table: resolve(&self.separation_table),
            yields_dir: resolve(&self.yields_dir),
        }
    }
}

impl FissionConfig {
    /// Load from JSON file and check the physics parameters.
    pub fn from_file(path: &str) -> FissionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.decay.validate()?;
        Ok(config)
    }
}
