// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Deterministic decay of neutron-induced fission fragments.
//!
//! Pipeline: coupling → energy → sharing → cascade, driven per incident
//! energy by [`averager::FissionAverager`].

pub mod averager;
pub mod cascade;
pub mod coupling;
pub mod energy;
pub mod sharing;

pub use averager::{FissionAverager, NubarCurve};
