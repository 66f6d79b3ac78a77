// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Decay — Fission Averager
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Yield-weighted neutron multiplicity and gamma energy of a fissioning
//! target, per tabulated incident energy.
//!
//! Per energy:
//! 1. Couple the independent yields into fragment pairs.
//! 2. Per pair: energy balance → excitation sharing → two cascades.
//! 3. Pairs whose masses or separation energies are missing are dropped
//!    from numerator and denominator alike.
//! 4. ν̄ = Σ pᵢ·νᵢ / Σ pᵢ and E_γ = Σ pᵢ·E_γ,ᵢ / Σ pᵢ over the survivors.

use crate::cascade::evaporate;
use crate::coupling::fission_fragments_coupled;
use crate::energy::energy_balance;
use crate::sharing::txe_sharing;
use fission_data::NuclearData;
use fission_types::config::DecayParams;
use fission_types::error::{FissionError, FissionResult};
use fission_types::state::{EnergyAverage, FragmentPair, Nuclide, PairDecay, YieldSet};
use ndarray::Array1;

/// ν̄ versus incident energy at one deformation.
#[derive(Debug)]
pub struct NubarCurve {
    pub beta: f64,
    /// Incident energies [MeV], tabulated order.
    pub energies: Vec<f64>,
    pub nubar: Vec<FissionResult<f64>>,
}

/// Drives the decay pipeline over borrowed nuclear data.
pub struct FissionAverager<'a, D: NuclearData + ?Sized> {
    data: &'a D,
}

impl<'a, D: NuclearData + ?Sized> FissionAverager<'a, D> {
    pub fn new(data: &'a D) -> Self {
        FissionAverager { data }
    }

    /// Full decay of one fragmentation at incident energy `energy` [MeV].
    pub fn pair_decay(
        &self,
        target: Nuclide,
        pair: &FragmentPair,
        energy: f64,
        params: &DecayParams,
    ) -> FissionResult<PairDecay> {
        let balance = energy_balance(self.data, target, pair, energy, params.beta)?;
        let split = txe_sharing(self.data, balance.txe, pair, params.model, params.rt)?;
        Ok(PairDecay {
            balance,
            split,
            heavy: evaporate(self.data, pair.heavy, split.heavy, params.ekin),
            light: evaporate(self.data, pair.light, split.light, params.ekin),
        })
    }

    /// Averages over the fragmentations of one yield set.
    ///
    /// `DegenerateAverage` if no pair survives with positive probability.
    pub fn average_at(
        &self,
        target: Nuclide,
        set: &YieldSet,
        params: &DecayParams,
    ) -> FissionResult<EnergyAverage> {
        let pairs = fission_fragments_coupled(target, &set.yields);

        let mut weights = Vec::with_capacity(pairs.len());
        let mut neutrons = Vec::with_capacity(pairs.len());
        let mut gammas = Vec::with_capacity(pairs.len());
        let mut skipped = 0usize;

        for pair in &pairs {
            match self.pair_decay(target, pair, set.energy, params) {
                Ok(decay) => {
                    weights.push(pair.probability);
                    neutrons.push(decay.neutrons() as f64);
                    gammas.push(decay.gamma_energy());
                }
                Err(e) if e.is_not_available() => {
                    log::debug!(
                        "E = {:.3e} MeV: skipping {} + {}: {e}",
                        set.energy,
                        pair.heavy,
                        pair.light
                    );
                    skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        let weights = Array1::from(weights);
        let total = weights.sum();
        if weights.is_empty() || !total.is_finite() || total <= 0.0 {
            return Err(FissionError::DegenerateAverage { energy: set.energy });
        }

        let nubar = weights.dot(&Array1::from(neutrons)) / total;
        let gamma_energy = weights.dot(&Array1::from(gammas)) / total;

        Ok(EnergyAverage {
            energy: set.energy,
            nubar,
            gamma_energy,
            total_probability: total,
            pairs_used: weights.len(),
            pairs_skipped: skipped,
        })
    }

    /// (incident energy, average) per tabulated yield set, one lookup.
    fn averages_by_energy(
        &self,
        target: Nuclide,
        params: &DecayParams,
    ) -> FissionResult<Vec<(f64, FissionResult<EnergyAverage>)>> {
        params.validate()?;
        let sets = self.data.fission_yields(target)?;
        log::info!(
            "{target}: {} incident energies, model {}, β = {}, rt = {}",
            sets.len(),
            params.model,
            params.beta,
            params.rt
        );

        Ok(sets
            .iter()
            .map(|set| {
                let result = self.average_at(target, set, params);
                if let Err(FissionError::DegenerateAverage { energy }) = &result {
                    log::warn!("{target}: no usable fragmentation at E = {energy:.3e} MeV");
                }
                (set.energy, result)
            })
            .collect())
    }

    /// Averages at every tabulated incident energy of `target`.
    ///
    /// Fails as a whole only when the parameters are invalid or the yield
    /// lookup fails; a degenerate energy is reported in its own slot.
    pub fn decay(
        &self,
        target: Nuclide,
        params: &DecayParams,
    ) -> FissionResult<Vec<FissionResult<EnergyAverage>>> {
        Ok(self
            .averages_by_energy(target, params)?
            .into_iter()
            .map(|(_, result)| result)
            .collect())
    }

    /// Incident energies and ν̄ at each of them.
    pub fn nubar(
        &self,
        target: Nuclide,
        params: &DecayParams,
    ) -> FissionResult<(Vec<f64>, Vec<FissionResult<f64>>)> {
        Ok(self
            .averages_by_energy(target, params)?
            .into_iter()
            .map(|(energy, result)| (energy, result.map(|avg| avg.nubar)))
            .unzip())
    }

    /// ν̄ curves for each deformation in `betas`, other parameters fixed.
    pub fn scan_deformation(
        &self,
        target: Nuclide,
        params: &DecayParams,
        betas: &[f64],
    ) -> FissionResult<Vec<NubarCurve>> {
        betas
            .iter()
            .map(|&beta| {
                let (energies, nubar) = self.nubar(target, &params.with_beta(beta))?;
                Ok(NubarCurve {
                    beta,
                    energies,
                    nubar,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fission_data::{
        InMemoryYields, LiquidDropModel, MassTable, SeparationEnergies, YieldLibrary,
    };
    use fission_types::config::SharingModel;
    use fission_types::state::{FissionYieldDistribution, YieldValue};

    const U235: Nuclide = Nuclide::new(235, 92);

    /// Liquid drop physics with a hand-written yield table; masses listed in
    /// `missing` are reported as not tabulated.
    struct Fixture {
        ldm: LiquidDropModel,
        yields: InMemoryYields,
        missing: Vec<Nuclide>,
    }

    impl MassTable for Fixture {
        fn mass(&self, nuclide: Nuclide) -> FissionResult<f64> {
            if self.missing.contains(&nuclide) {
                return Err(FissionError::NotAvailable(format!("{nuclide}")));
            }
            self.ldm.mass(nuclide)
        }
    }

    impl SeparationEnergies for Fixture {
        fn separation_energy(&self, nuclide: Nuclide) -> Option<f64> {
            self.ldm.separation_energy(nuclide)
        }
    }

    impl YieldLibrary for Fixture {
        fn fission_yields(&self, target: Nuclide) -> FissionResult<Vec<YieldSet>> {
            self.yields.fission_yields(target)
        }
    }

    fn set(energy: f64, entries: &[(&str, f64)]) -> YieldSet {
        let yields: FissionYieldDistribution = entries
            .iter()
            .map(|&(l, v)| (l, YieldValue::nominal(v)))
            .collect();
        YieldSet { energy, yields }
    }

    /// Two fragmentations: Sr96 + Xe140 and Kr92 + Ba144.
    fn two_pair_set(energy: f64) -> YieldSet {
        set(
            energy,
            &[("Kr92", 0.4), ("Sr96", 0.6), ("Xe140", 0.6), ("Ba144", 0.4)],
        )
    }

    fn fixture(sets: Vec<YieldSet>, missing: Vec<Nuclide>) -> Fixture {
        Fixture {
            ldm: LiquidDropModel::default(),
            yields: InMemoryYields::new().with_target(U235, sets),
            missing,
        }
    }

    #[test]
    fn test_pair_decay_consistency() {
        let data = fixture(vec![], vec![]);
        let avg = FissionAverager::new(&data);
        let pair = FragmentPair {
            heavy: Nuclide::new(140, 54),
            light: Nuclide::new(96, 38),
            probability: 0.6,
        };
        let d = avg
            .pair_decay(U235, &pair, 14.0, &DecayParams::default())
            .unwrap();
        assert!((d.split.total() - d.balance.txe).abs() < 1e-9);
        assert_eq!(d.neutrons(), d.heavy.neutrons + d.light.neutrons);
        assert!(d.neutrons() > 0, "14 MeV fission should emit neutrons");
        assert_eq!(
            d.heavy.final_nuclide.a + d.heavy.neutrons,
            pair.heavy.a
        );
    }

    #[test]
    fn test_average_is_probability_weighted() {
        let data = fixture(vec![two_pair_set(14.0)], vec![]);
        let avg = FissionAverager::new(&data);
        let params = DecayParams::default();
        let result = avg.average_at(U235, &two_pair_set(14.0), &params).unwrap();

        let p1 = FragmentPair {
            heavy: Nuclide::new(144, 56),
            light: Nuclide::new(92, 36),
            probability: 0.4,
        };
        let p2 = FragmentPair {
            heavy: Nuclide::new(140, 54),
            light: Nuclide::new(96, 38),
            probability: 0.6,
        };
        let d1 = avg.pair_decay(U235, &p1, 14.0, &params).unwrap();
        let d2 = avg.pair_decay(U235, &p2, 14.0, &params).unwrap();
        let expected = 0.4 * d1.neutrons() as f64 + 0.6 * d2.neutrons() as f64;

        assert!((result.nubar - expected).abs() < 1e-12);
        assert!((result.total_probability - 1.0).abs() < 1e-12);
        assert_eq!(result.pairs_used, 2);
        assert_eq!(result.pairs_skipped, 0);
    }

    #[test]
    fn test_missing_heavy_mass_shrinks_denominator() {
        let params = DecayParams::default();
        let full = fixture(vec![], vec![]);
        let full_avg = FissionAverager::new(&full);
        let kept = FragmentPair {
            heavy: Nuclide::new(140, 54),
            light: Nuclide::new(96, 38),
            probability: 0.6,
        };
        let kept_decay = full_avg.pair_decay(U235, &kept, 14.0, &params).unwrap();

        let partial = fixture(vec![], vec![Nuclide::new(144, 56)]);
        let result = FissionAverager::new(&partial)
            .average_at(U235, &two_pair_set(14.0), &params)
            .unwrap();

        assert_eq!(result.pairs_used, 1);
        assert_eq!(result.pairs_skipped, 1);
        assert!((result.total_probability - 0.6).abs() < 1e-12);
        assert!((result.nubar - kept_decay.neutrons() as f64).abs() < 1e-12);
        assert!((result.gamma_energy - kept_decay.gamma_energy()).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_energy_does_not_abort_others() {
        // Second set: only one label, so no pair can be formed.
        let sets = vec![two_pair_set(2.53e-8), set(0.5, &[("Sr96", 1.0)])];
        let data = fixture(sets, vec![]);
        let results = FissionAverager::new(&data)
            .decay(U235, &DecayParams::default())
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        match &results[1] {
            Err(FissionError::DegenerateAverage { energy }) => assert_eq!(*energy, 0.5),
            other => panic!("expected degenerate average, got {other:?}"),
        }
    }

    #[test]
    fn test_all_pairs_missing_is_degenerate() {
        let data = fixture(vec![], vec![U235]);
        let err = FissionAverager::new(&data)
            .average_at(U235, &two_pair_set(0.0), &DecayParams::default())
            .unwrap_err();
        assert!(matches!(err, FissionError::DegenerateAverage { .. }));
    }

    #[test]
    fn test_yield_lookup_errors_abort() {
        let data = fixture(vec![two_pair_set(0.0)], vec![]);
        let avg = FissionAverager::new(&data);
        let params = DecayParams::default();

        let err = avg.decay(Nuclide::new(300, 150), &params).unwrap_err();
        assert!(matches!(err, FissionError::InvalidInput(_)));
        let err = avg.nubar(Nuclide::new(239, 94), &params).unwrap_err();
        assert!(err.is_not_available());
    }

    #[test]
    fn test_invalid_params_rejected() {
        let data = fixture(vec![two_pair_set(0.0)], vec![]);
        let params = DecayParams {
            ekin: -1.0,
            ..DecayParams::default()
        };
        let avg = FissionAverager::new(&data);
        let err = avg.decay(U235, &params).unwrap_err();
        assert!(matches!(err, FissionError::ConfigError(_)));
        // Parameters are checked before the yield lookup.
        let err = avg.nubar(Nuclide::new(239, 94), &params).unwrap_err();
        assert!(matches!(err, FissionError::ConfigError(_)), "{err}");
    }

    #[test]
    fn test_nan_yield_is_degenerate() {
        let nan_set = set(
            0.0,
            &[("Kr92", f64::NAN), ("Sr96", 0.6), ("Xe140", 0.6), ("Ba144", 0.4)],
        );
        let data = fixture(vec![], vec![]);
        let err = FissionAverager::new(&data)
            .average_at(U235, &nan_set, &DecayParams::default())
            .unwrap_err();
        assert!(matches!(err, FissionError::DegenerateAverage { energy } if energy == 0.0));
    }

    #[test]
    fn test_nubar_matches_decay() {
        let sets = vec![two_pair_set(2.53e-8), two_pair_set(14.0)];
        let data = fixture(sets, vec![]);
        let avg = FissionAverager::new(&data);
        let params = DecayParams {
            model: SharingModel::VonEgidy,
            ..DecayParams::default()
        };
        let (energies, nubar) = avg.nubar(U235, &params).unwrap();
        let decay = avg.decay(U235, &params).unwrap();
        assert_eq!(energies, vec![2.53e-8, 14.0]);
        for (nu, d) in nubar.iter().zip(&decay) {
            assert_eq!(*nu.as_ref().unwrap(), d.as_ref().unwrap().nubar);
        }
    }

    #[test]
    fn test_scan_deformation_one_curve_per_beta() {
        let data = fixture(vec![two_pair_set(14.0)], vec![]);
        let curves = FissionAverager::new(&data)
            .scan_deformation(U235, &DecayParams::default(), &[0.15, 0.2, 0.25])
            .unwrap();
        assert_eq!(curves.len(), 3);
        assert_eq!(curves[1].beta, 0.2);
        assert!(format!("{:?}", curves[0]).starts_with("NubarCurve"));
        assert!(curves.iter().all(|c| c.energies == vec![14.0] && c.nubar.len() == 1));
        let nu: Vec<f64> = curves
            .iter()
            .map(|c| *c.nubar[0].as_ref().unwrap())
            .collect();
        // Larger β lowers TKE, leaving more excitation for evaporation.
        assert!(nu[0] <= nu[1] && nu[1] <= nu[2], "{nu:?}");
    }
}
