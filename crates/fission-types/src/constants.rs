// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Neutron rest mass (MeV/c²), CODATA 2018.
pub const NEUTRON_MASS: f64 = 939.56542052;

/// Hydrogen atom mass (MeV/c²). Proton plus electron minus 13.6 eV.
pub const HYDROGEN_MASS: f64 = 938.78307;

/// Atomic mass unit (MeV/c²). Same value as the AME2020 evaluation.
pub const ATOMIC_MASS_UNIT: f64 = 931.49402823;

/// keV to MeV.
pub const KEV_TO_MEV: f64 = 1e-3;

/// eV to MeV. ENDF incident energies are stored in eV.
pub const EV_TO_MEV: f64 = 1e-6;

/// Coulomb constant e²/(4πε₀) in MeV·fm.
pub const COULOMB_CONSTANT: f64 = 1.44;

/// Nuclear radius parameter r0 (fm), incompressible liquid drop.
pub const NUCLEAR_RADIUS_R0: f64 = 1.2;

/// Back-shifted Fermi gas level density parameters,
/// T. von Egidy and D. Bucurescu, Phys. Rev. C 72, 044311 (2005).
/// a = A·(p + q·S' + r·A)
pub const BSGF_P: f64 = 0.1271;
pub const BSGF_Q: f64 = 4.9813e-3;
pub const BSGF_R: f64 = -8.9553e-5;

/// Sentinel used by the LANL separation table for unknown values (MeV).
pub const SEPARATION_UNKNOWN_TAG: f64 = -2000.0;
