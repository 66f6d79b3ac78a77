//! LANL neutron separation energy table reader.
//!
//! Whitespace-separated columns `Z N S1n S2n` in MeV. Unknown energies are
//! tagged with -2000 and dropped at load time.

use crate::lookup::SeparationEnergies;
use fission_types::constants::SEPARATION_UNKNOWN_TAG;
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::Nuclide;
use std::collections::HashMap;
use std::path::Path;

/// One-neutron separation energies [MeV].
#[derive(Debug, Clone, Default)]
pub struct SeparationTable {
    s1n: HashMap<Nuclide, f64>,
}

impl SeparationTable {
    pub fn from_entries(entries: impl IntoIterator<Item = (Nuclide, f64)>) -> Self {
        SeparationTable {
            s1n: entries.into_iter().collect(),
        }
    }

    /// Read a `sepn.dat` file.
    pub fn from_file(path: impl AsRef<Path>) -> FissionResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let table = Self::parse(&contents)?;
        log::info!(
            "Loaded {} neutron separation energies from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    pub fn parse(contents: &str) -> FissionResult<Self> {
        let mut s1n = HashMap::new();
        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parse_err = |message: String| FissionError::Parse {
                line: idx + 1,
                message,
            };
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 3 {
                return Err(parse_err(format!(
                    "expected 'Z N S1n [S2n]', got {} fields",
                    fields.len()
                )));
            }
            let z: i64 = fields[0]
                .parse()
                .map_err(|e| parse_err(format!("bad Z '{}': {e}", fields[0])))?;
            let n: i64 = fields[1]
                .parse()
                .map_err(|e| parse_err(format!("bad N '{}': {e}", fields[1])))?;
            let sn: f64 = fields[2]
                .parse()
                .map_err(|e| parse_err(format!("bad S1n '{}': {e}", fields[2])))?;
            if sn <= SEPARATION_UNKNOWN_TAG {
                continue;
            }
            let nuclide = Nuclide::try_new(z + n, z)
                .ok_or_else(|| parse_err(format!("Z={z}, N={n} is not a nucleus")))?;
            s1n.insert(nuclide, sn);
        }
        Ok(SeparationTable { s1n })
    }

    pub fn len(&self) -> usize {
        self.s1n.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s1n.is_empty()
    }
}

impl SeparationEnergies for SeparationTable {
    fn separation_energy(&self, nuclide: Nuclide) -> Option<f64> {
        self.s1n.get(&nuclide).copied()
    }
}
