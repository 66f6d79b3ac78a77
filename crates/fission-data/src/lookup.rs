//! Capability traits of the data providers.
//!
//! Implemented by the tabulated readers, by [`crate::LiquidDropModel`] and by
//! test doubles. Missing data is an explicit outcome, never a NaN or zero.

use fission_types::error::FissionResult;
use fission_types::state::{Nuclide, YieldSet};

/// Atomic masses.
pub trait MassTable {
    /// Mass of the neutral atom [MeV/c²]. `NotAvailable` if not tabulated.
    fn mass(&self, nuclide: Nuclide) -> FissionResult<f64>;
}

/// One-neutron separation energies.
pub trait SeparationEnergies {
    /// S1n [MeV], `None` outside the table coverage.
    fn separation_energy(&self, nuclide: Nuclide) -> Option<f64>;
}

/// Evaluated independent fission yields.
pub trait YieldLibrary {
    /// Yield sets of a neutron-induced fission target, in tabulated energy order.
    ///
    /// `InvalidInput` if Z has no element symbol, `NotAvailable` if the target
    /// has no evaluation.
    fn fission_yields(&self, target: Nuclide) -> FissionResult<Vec<YieldSet>>;
}

/// Everything the fission averager needs.
pub trait NuclearData: MassTable + SeparationEnergies + YieldLibrary {}

impl<T: MassTable + SeparationEnergies + YieldLibrary + ?Sized> NuclearData for T {}
