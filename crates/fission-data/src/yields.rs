//! Fission yield libraries.
//!
//! [`EndfYieldLibrary`] indexes a directory of ENDF/B-VIII.0
//! `nfy-ZZZ_Sym_A.endf` files and parses them all at load time.
//! [`InMemoryYields`] holds yield sets built by the caller.

use crate::elements;
use crate::endf;
use crate::lookup::YieldLibrary;
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::{Nuclide, YieldSet};
use std::collections::HashMap;
use std::path::Path;

/// File name of the evaluation of `target`, e.g. `nfy-092_U_235.endf`.
pub fn endf_file_name(target: Nuclide) -> FissionResult<String> {
    let sym = target_symbol(target)?;
    Ok(format!("nfy-{:03}_{}_{}.endf", target.z, sym, target.a))
}

/// Inverse of [`endf_file_name`]. `None` for unrelated files.
pub fn parse_endf_file_name(name: &str) -> Option<Nuclide> {
    let stem = name.strip_prefix("nfy-")?.strip_suffix(".endf")?;
    let mut parts = stem.split('_');
    let z: i64 = parts.next()?.parse().ok()?;
    let sym = parts.next()?;
    let a: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || elements::charge_number(sym)? as i64 != z {
        return None;
    }
    Nuclide::try_new(a, z)
}

fn target_symbol(target: Nuclide) -> FissionResult<&'static str> {
    elements::symbol(target.z).ok_or_else(|| {
        FissionError::InvalidInput(format!(
            "target Z={} has no element symbol in the yield data",
            target.z
        ))
    })
}

fn not_evaluated(target: Nuclide) -> FissionError {
    FissionError::NotAvailable(format!(
        "target nucleus {target} has no evaluated fission yields"
    ))
}

/// All ENDF yield evaluations found in one directory.
#[derive(Debug, Clone, Default)]
pub struct EndfYieldLibrary {
    sets: HashMap<Nuclide, Vec<YieldSet>>,
}

impl EndfYieldLibrary {
    /// Parse every `nfy-*.endf` file of `dir`.
    pub fn load(dir: impl AsRef<Path>) -> FissionResult<Self> {
        let dir = dir.as_ref();
        let mut sets = HashMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(target) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(parse_endf_file_name)
            else {
                continue;
            };
            let contents = std::fs::read_to_string(&path)?;
            let target_sets = endf::read_independent_yields(&contents)?;
            log::debug!(
                "{}: {} incident energies",
                path.display(),
                target_sets.len()
            );
            sets.insert(target, target_sets);
        }
        log::info!(
            "Loaded fission yields of {} targets from {}",
            sets.len(),
            dir.display()
        );
        Ok(EndfYieldLibrary { sets })
    }

    /// Targets with an evaluation, sorted.
    pub fn targets(&self) -> Vec<Nuclide> {
        let mut t: Vec<Nuclide> = self.sets.keys().copied().collect();
        t.sort();
        t
    }
}

impl YieldLibrary for EndfYieldLibrary {
    fn fission_yields(&self, target: Nuclide) -> FissionResult<Vec<YieldSet>> {
        target_symbol(target)?;
        self.sets
            .get(&target)
            .cloned()
            .ok_or_else(|| not_evaluated(target))
    }
}

/// Yield sets supplied directly by the caller.
#[derive(Debug, Clone, Default)]
pub struct InMemoryYields {
    sets: HashMap<Nuclide, Vec<YieldSet>>,
}

impl InMemoryYields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, target: Nuclide, sets: Vec<YieldSet>) {
        self.sets.insert(target, sets);
    }

    pub fn with_target(mut self, target: Nuclide, sets: Vec<YieldSet>) -> Self {
        self.insert(target, sets);
        self
    }
}

impl YieldLibrary for InMemoryYields {
    fn fission_yields(&self, target: Nuclide) -> FissionResult<Vec<YieldSet>> {
        target_symbol(target)?;
        self.sets
            .get(&target)
            .cloned()
            .ok_or_else(|| not_evaluated(target))
    }
}
