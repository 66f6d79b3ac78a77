//! Evaluated tables bundled behind the lookup traits.

use crate::lookup::{MassTable, SeparationEnergies, YieldLibrary};
use crate::mass::MassExcessTable;
use crate::separation::SeparationTable;
use crate::yields::EndfYieldLibrary;
use fission_types::config::DataPaths;
use fission_types::error::FissionResult;
use fission_types::state::{Nuclide, YieldSet};

/// AME2020 masses, LANL separation energies and ENDF yields, loaded once.
#[derive(Debug, Clone)]
pub struct TabulatedData {
    pub masses: MassExcessTable,
    pub separation: SeparationTable,
    pub yields: EndfYieldLibrary,
}

impl TabulatedData {
    pub fn load(paths: &DataPaths) -> FissionResult<Self> {
        Ok(TabulatedData {
            masses: MassExcessTable::from_ame_file(&paths.mass_table)?,
            separation: SeparationTable::from_file(&paths.separation_table)?,
            yields: EndfYieldLibrary::load(&paths.yields_dir)?,
        })
    }
}

impl MassTable for TabulatedData {
    fn mass(&self, nuclide: Nuclide) -> FissionResult<f64> {
        self.masses.mass(nuclide)
    }
}

impl SeparationEnergies for TabulatedData {
    fn separation_energy(&self, nuclide: Nuclide) -> Option<f64> {
        self.separation.separation_energy(nuclide)
    }
}

impl YieldLibrary for TabulatedData {
    fn fission_yields(&self, target: Nuclide) -> FissionResult<Vec<YieldSet>> {
        self.yields.fission_yields(target)
    }
}
