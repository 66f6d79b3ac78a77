// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Fission Data
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nuclear data lookup services.
//!
//! Read-only tables loaded once: AME2020 atomic masses, LANL neutron
//! separation energies, ENDF/B-VIII.0 independent fission yields.
//! The physics pipeline only sees the traits in [`lookup`].

pub mod elements;
pub mod endf;
pub mod liquid_drop;
pub mod lookup;
pub mod mass;
pub mod separation;
pub mod tabulated;
pub mod yields;

pub use liquid_drop::LiquidDropModel;
pub use lookup::{MassTable, NuclearData, SeparationEnergies, YieldLibrary};
pub use mass::MassExcessTable;
pub use separation::SeparationTable;
pub use tabulated::TabulatedData;
pub use yields::{EndfYieldLibrary, InMemoryYields};
