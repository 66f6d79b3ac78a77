// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Atomic Mass Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! AME2020 atomic mass evaluation reader.
//!
//! Fixed-width format (Fortran `a1,i3,i5,i5,i5,1x,a3,a4,1x,f14.6,...`).
//! Only Z, A and the mass excess are kept.

use crate::lookup::MassTable;
use fission_types::constants::{ATOMIC_MASS_UNIT, KEV_TO_MEV};
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::Nuclide;
use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;

/// Header lines preceding the first data row.
pub const AME_HEADER_LINES: usize = 39;

/// Column spans (byte offsets) of the fields we read.
const Z_COLS: Range<usize> = 9..14;
const A_COLS: Range<usize> = 14..19;
const MASS_EXCESS_COLS: Range<usize> = 28..42;

/// Mass excesses [keV] keyed by nuclide.
#[derive(Debug, Clone, Default)]
pub struct MassExcessTable {
    excess_kev: HashMap<Nuclide, f64>,
}

impl MassExcessTable {
    /// Build from (nuclide, mass excess in keV) entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (Nuclide, f64)>) -> Self {
        MassExcessTable {
            excess_kev: entries.into_iter().collect(),
        }
    }

    /// Read an AME2020 `mass.txt` file.
    pub fn from_ame_file(path: impl AsRef<Path>) -> FissionResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::parse_ame(&contents);
        log::info!(
            "Loaded {} atomic masses from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse AME2020 text. Rows whose mass excess is not a plain number
    /// (extrapolated values carry a `#`) are dropped.
    pub fn parse_ame(contents: &str) -> Self {
        let mut excess_kev = HashMap::new();
        let mut dropped = 0usize;
        for line in contents.lines().skip(AME_HEADER_LINES) {
            match parse_row(line) {
                Some((nuclide, excess)) => {
                    excess_kev.insert(nuclide, excess);
                }
                None => dropped += 1,
            }
        }
        log::debug!("AME2020: {} rows without a measured mass excess", dropped);
        MassExcessTable { excess_kev }
    }

    /// Mass excess [keV].
    pub fn mass_excess_kev(&self, nuclide: Nuclide) -> Option<f64> {
        self.excess_kev.get(&nuclide).copied()
    }

    pub fn len(&self) -> usize {
        self.excess_kev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.excess_kev.is_empty()
    }
}

impl MassTable for MassExcessTable {
    fn mass(&self, nuclide: Nuclide) -> FissionResult<f64> {
        self.mass_excess_kev(nuclide)
            .map(|excess| excess * KEV_TO_MEV + nuclide.a as f64 * ATOMIC_MASS_UNIT)
            .ok_or_else(|| {
                FissionError::NotAvailable(format!("mass of nucleus {nuclide} not tabulated"))
            })
    }
}

fn column(line: &str, cols: Range<usize>) -> Option<&str> {
    let end = cols.end.min(line.len());
    line.get(cols.start..end).map(str::trim)
}

fn parse_row(line: &str) -> Option<(Nuclide, f64)> {
    let z: i64 = column(line, Z_COLS)?.parse().ok()?;
    let a: i64 = column(line, A_COLS)?.parse().ok()?;
    let excess: f64 = column(line, MASS_EXCESS_COLS)?.parse().ok()?;
    Some((Nuclide::try_new(a, z)?, excess))
}
