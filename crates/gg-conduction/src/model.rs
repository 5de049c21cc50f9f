//! Gas-gap conductance from the continuum to the free-molecular regime.
//!
//! The coefficient is a series blend of two conductances:
//!
//! ```text
//! Hg = α·Λ·P·r · Kn / (Kn + a·α·Λ·P·r),    r = sqrt(T2 / T1)
//! ```
//!
//! where `Kn` is the continuum conductivity from the gas's cubic fit and `Λ`
//! the free-molecular conductance per unit pressure. For small `a·P` the
//! second denominator term vanishes and `Hg → α·Λ·P·r`; for large `a·P` it
//! dominates and `Hg → Kn / a`. No explicit regime switch is needed.

use crate::condition::{OperatingCondition, SurfaceTemperatures, SweptCondition};
use crate::error::{ConductionError, ConductionResult};
use gg_core::numeric::{Real, ensure_finite, ensure_positive};
use gg_core::units::constants::R0_J_PER_MOL_K;
use gg_core::units::{
    HeatTransfer, Length, Pressure, Temperature, ThermalConductivity, w_per_m2_k, w_per_m_k,
};
use gg_gases::GasProperties;
use rayon::prelude::*;
use std::f64::consts::PI;

/// What to do when the average temperature leaves the fit's validated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RangePolicy {
    /// Evaluate the polynomial anyway.
    #[default]
    Extrapolate,
    /// Fail with [`ConductionError::OutOfFitRange`].
    Strict,
}

/// How sweep samples are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ExecutionMode {
    /// One pass on the calling thread.
    #[default]
    Serial,
    /// Elementwise on the rayon pool; output order still follows input order.
    Parallel,
}

/// Continuum conductivity `A + B·T + C·T² + D·T³` at `average_temp`.
///
/// No range check: outside `[t_min, t_max]` this is an extrapolation.
pub fn thermal_conductivity_polynomial(
    gas: &GasProperties,
    average_temp: Temperature,
) -> ThermalConductivity {
    let t = average_temp.value;
    let fit = gas.fit;
    w_per_m_k(fit.a + t * (fit.b + t * (fit.c + t * fit.d)))
}

/// Free-molecular conductance per unit pressure [W/(m²·K·Pa)]:
/// `(γ+1)/(2(γ−1)) · sqrt(R0 / (2π·M·T2))`.
///
/// Only the second surface temperature enters; `surface_temp_1` is accepted
/// so the call reads like the other model operations.
pub fn free_molecular_conductance(
    gas: &GasProperties,
    _surface_temp_1: Temperature,
    surface_temp_2: Temperature,
) -> ConductionResult<Real> {
    let molar_mass = ensure_positive(gas.molar_mass_kg_mol, "molar mass")?;
    let t2 = ensure_positive(surface_temp_2.value, "surface temperature 2")?;
    let gamma = gas.gamma;
    let lambda = (gamma + 1.0) / (2.0 * (gamma - 1.0))
        * (R0_J_PER_MOL_K / (2.0 * PI * molar_mass * t2)).sqrt();
    Ok(ensure_finite(lambda, "free-molecular conductance")?)
}

/// Per-condition constants shared by every sample of a sweep.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BlendTerms {
    /// Continuum conductivity [W/(m·K)]
    pub kn: Real,
    /// `α·Λ·r` [W/(m²·K·Pa)]
    pub molecular: Real,
    pub free_lambda: Real,
}

impl BlendTerms {
    pub(crate) fn new(
        gas: &GasProperties,
        temps: SurfaceTemperatures,
        policy: RangePolicy,
    ) -> ConductionResult<Self> {
        let kn = conductivity_with_policy(gas, temps.average_temp(), policy)?.value;
        let free_lambda =
            free_molecular_conductance(gas, temps.surface_temp_1(), temps.surface_temp_2())?;
        Ok(Self {
            kn,
            molecular: gas.alpha * free_lambda * temps.ratio_factor(),
            free_lambda,
        })
    }

    /// Blend at one `(P, a)` point; `index` labels the sample in errors.
    pub(crate) fn blend(
        &self,
        pressure_pa: Real,
        separation_m: Real,
        index: usize,
    ) -> ConductionResult<Real> {
        let free = self.molecular * pressure_pa;
        let denom = self.kn + separation_m * free;
        if denom == 0.0 {
            return Err(ConductionError::DivisionByZero { index });
        }
        Ok(ensure_finite(free * self.kn / denom, "heat transfer coefficient")?)
    }
}

fn conductivity_with_policy(
    gas: &GasProperties,
    average_temp: Temperature,
    policy: RangePolicy,
) -> ConductionResult<ThermalConductivity> {
    let t_k = average_temp.value;
    if policy == RangePolicy::Strict && !gas.in_fit_range(t_k) {
        return Err(ConductionError::OutOfFitRange {
            gas: gas.name,
            t_k,
            t_min_k: gas.t_min_k,
            t_max_k: gas.t_max_k,
        });
    }
    Ok(thermal_conductivity_polynomial(gas, average_temp))
}

/// Heat transfer coefficient at a single point, silent extrapolation.
pub fn heat_transfer_coefficient(
    gas: &GasProperties,
    condition: &OperatingCondition,
) -> ConductionResult<HeatTransfer> {
    ConductionModel::default().heat_transfer_coefficient(gas, condition)
}

/// Heat transfer coefficients [W/(m²·K)] for every sample of a sweep, in sample order.
pub fn heat_transfer_coefficients(
    gas: &GasProperties,
    swept: &SweptCondition,
) -> ConductionResult<Vec<Real>> {
    ConductionModel::default().heat_transfer_coefficients(gas, swept)
}

/// `a · Hg` [W/(m·K)] for a single point.
pub fn effective_conductivity(
    gas: &GasProperties,
    condition: &OperatingCondition,
) -> ConductionResult<ThermalConductivity> {
    let hg = heat_transfer_coefficient(gas, condition)?;
    Ok(w_per_m_k(condition.separation().value * hg.value))
}

/// Rarefied asymptote `α·Λ·P·r`, reached as `a·P → 0`.
pub fn free_molecular_limit(
    gas: &GasProperties,
    temps: SurfaceTemperatures,
    pressure: Pressure,
) -> ConductionResult<HeatTransfer> {
    let p = ensure_positive(pressure.value, "pressure")?;
    let free_lambda =
        free_molecular_conductance(gas, temps.surface_temp_1(), temps.surface_temp_2())?;
    Ok(w_per_m2_k(gas.alpha * free_lambda * p * temps.ratio_factor()))
}

/// Continuum asymptote `Kn / a`, reached as `a·P → ∞`.
pub fn continuum_limit(
    gas: &GasProperties,
    temps: SurfaceTemperatures,
    separation: Length,
) -> ConductionResult<HeatTransfer> {
    let a = ensure_positive(separation.value, "separation")?;
    let kn = thermal_conductivity_polynomial(gas, temps.average_temp());
    Ok(w_per_m2_k(kn.value / a))
}

/// Evaluation settings for the conductance formula.
///
/// The model holds no state between calls; two calls with the same inputs
/// return the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConductionModel {
    pub range_policy: RangePolicy,
    pub execution: ExecutionMode,
}

impl ConductionModel {
    pub fn new(range_policy: RangePolicy, execution: ExecutionMode) -> Self {
        Self {
            range_policy,
            execution,
        }
    }

    pub fn strict() -> Self {
        Self {
            range_policy: RangePolicy::Strict,
            ..Self::default()
        }
    }

    /// Continuum conductivity, honouring the range policy.
    pub fn conductivity(
        &self,
        gas: &GasProperties,
        average_temp: Temperature,
    ) -> ConductionResult<ThermalConductivity> {
        conductivity_with_policy(gas, average_temp, self.range_policy)
    }

    pub fn heat_transfer_coefficient(
        &self,
        gas: &GasProperties,
        condition: &OperatingCondition,
    ) -> ConductionResult<HeatTransfer> {
        let terms = BlendTerms::new(gas, condition.temps(), self.range_policy)?;
        let hg = terms.blend(condition.pressure().value, condition.separation().value, 0)?;
        Ok(w_per_m2_k(hg))
    }

    pub fn heat_transfer_coefficients(
        &self,
        gas: &GasProperties,
        swept: &SweptCondition,
    ) -> ConductionResult<Vec<Real>> {
        let terms = BlendTerms::new(gas, swept.temps(), self.range_policy)?;
        self.blend_samples(&terms, swept)
    }

    /// Elementwise blend over the samples with precomputed terms.
    pub(crate) fn blend_samples(
        &self,
        terms: &BlendTerms,
        swept: &SweptCondition,
    ) -> ConductionResult<Vec<Real>> {
        let samples = swept.samples_si();
        match self.execution {
            ExecutionMode::Serial => samples
                .iter()
                .enumerate()
                .map(|(i, &x)| {
                    let (p, a) = swept.pair(x);
                    terms.blend(p, a, i)
                })
                .collect(),
            ExecutionMode::Parallel => samples
                .par_iter()
                .enumerate()
                .map(|(i, &x)| {
                    let (p, a) = swept.pair(x);
                    terms.blend(p, a, i)
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg_core::units::{k, m, pa};
    use gg_core::{GgError, Tolerances, nearly_equal};
    use gg_gases::{ConductivityFit, lookup};

    fn air_temps() -> SurfaceTemperatures {
        SurfaceTemperatures::from_kelvin(293.0, 292.0).unwrap()
    }

    #[test]
    fn air_polynomial_matches_reference_conductivity() {
        let air = lookup("Air").unwrap();
        let kn = thermal_conductivity_polynomial(air, k(292.5));
        // The fit reproduces the tabulated room-temperature conductivity.
        assert!((kn.value - air.lambda_ref_w_m_k).abs() < 1e-5, "kn = {}", kn.value);
        assert!((kn.value - 0.025_288_830_051_781).abs() < 1e-12);
    }

    #[test]
    fn air_free_molecular_conductance() {
        let air = lookup("Air").unwrap();
        let lambda = free_molecular_conductance(air, k(293.0), k(292.0)).unwrap();
        assert!((lambda - 1.181_646_501_788_859).abs() < 1e-9, "lambda = {lambda}");
    }

    #[test]
    fn free_molecular_conductance_ignores_first_surface() {
        let he = lookup("Helium").unwrap();
        let a = free_molecular_conductance(he, k(10.0), k(300.0)).unwrap();
        let b = free_molecular_conductance(he, k(900.0), k(300.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn free_molecular_conductance_rejects_non_positive_inputs() {
        let air = lookup("Air").unwrap();
        assert!(matches!(
            free_molecular_conductance(air, k(293.0), k(0.0)),
            Err(ConductionError::InvalidInput(GgError::NonPositive { .. }))
        ));

        let mut broken = *air;
        broken.molar_mass_kg_mol = 0.0;
        assert!(matches!(
            free_molecular_conductance(&broken, k(293.0), k(292.0)),
            Err(ConductionError::InvalidInput(GgError::NonPositive {
                what: "molar mass",
                ..
            }))
        ));
    }

    #[test]
    fn air_reference_point() {
        let air = lookup("Air").unwrap();
        let cond = OperatingCondition::new(k(293.0), k(292.0), pa(5.0), m(1e-6)).unwrap();
        let hg = heat_transfer_coefficient(air, &cond).unwrap().value;
        assert!((hg - 4.776_592_302_281_395).abs() < 1e-8, "hg = {hg}");
        assert!(hg < 0.025_288_830_051_781 / 1e-6);
    }

    #[test]
    fn zero_denominator_is_reported() {
        let mut broken = *lookup("Air").unwrap();
        broken.fit = ConductivityFit {
            a: 0.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
        };
        // Kn = 0 leaves only the a·P term; zero it by construction of the terms.
        let terms = BlendTerms::new(&broken, air_temps(), RangePolicy::Extrapolate).unwrap();
        assert_eq!(terms.kn, 0.0);
        assert!(matches!(
            terms.blend(5.0, 0.0, 7),
            Err(ConductionError::DivisionByZero { index: 7 })
        ));
    }

    #[test]
    fn strict_policy_rejects_extrapolation() {
        let xe = lookup("Xenon").unwrap();
        let cond = OperatingCondition::new(k(900.0), k(900.0), pa(5.0), m(1e-6)).unwrap();

        assert!(heat_transfer_coefficient(xe, &cond).is_ok());
        let err = ConductionModel::strict()
            .heat_transfer_coefficient(xe, &cond)
            .unwrap_err();
        assert!(matches!(
            err,
            ConductionError::OutOfFitRange { gas: "Xenon", .. }
        ));
    }

    #[test]
    fn strict_policy_accepts_in_range() {
        let air = lookup("Air").unwrap();
        let model = ConductionModel::strict();
        assert!(model.conductivity(air, k(292.5)).is_ok());
        assert!(model.conductivity(air, k(1470.0)).is_ok());
        assert!(model.conductivity(air, k(1470.5)).is_err());
    }

    #[test]
    fn sweep_matches_pointwise_evaluation() {
        let air = lookup("Air").unwrap();
        let pressures = vec![1e-2, 1.0, 1e2, 1e4, 1e6];
        let swept = SweptCondition::pressure_sweep(air_temps(), m(1e-6), pressures).unwrap();
        let hg = heat_transfer_coefficients(air, &swept).unwrap();
        assert_eq!(hg.len(), swept.len());
        for (i, value) in hg.iter().enumerate() {
            let single = heat_transfer_coefficient(air, &swept.condition(i).unwrap()).unwrap();
            assert_eq!(*value, single.value);
        }
    }

    #[test]
    fn parallel_and_serial_agree() {
        let n2 = lookup("Nitrogen").unwrap();
        let separations: Vec<f64> = (0..500).map(|i| 1e-9 * 1.03_f64.powi(i)).collect();
        let swept = SweptCondition::separation_sweep(air_temps(), pa(100.0), separations).unwrap();
        let serial = ConductionModel::default()
            .heat_transfer_coefficients(n2, &swept)
            .unwrap();
        let parallel = ConductionModel::new(RangePolicy::Extrapolate, ExecutionMode::Parallel)
            .heat_transfer_coefficients(n2, &swept)
            .unwrap();
        assert_eq!(serial, parallel);
    }

    #[test]
    fn effective_conductivity_depends_only_on_gap_pressure_product() {
        let ar = lookup("Argon").unwrap();
        let tol = Tolerances {
            abs: 0.0,
            rel: 1e-12,
        };
        for (a, p) in [(1e-6, 1e3), (1e-4, 1e1), (1e-2, 1e-1)] {
            let cond = OperatingCondition::new(k(300.0), k(310.0), pa(p), m(a)).unwrap();
            let reference = OperatingCondition::new(k(300.0), k(310.0), pa(1.0), m(1e-3)).unwrap();
            let lhs = effective_conductivity(ar, &cond).unwrap().value;
            let rhs = effective_conductivity(ar, &reference).unwrap().value;
            assert!(nearly_equal(lhs, rhs, tol), "{lhs} vs {rhs}");
        }
    }

    #[test]
    fn limits_bracket_the_blend() {
        let he = lookup("Helium").unwrap();
        let temps = SurfaceTemperatures::from_kelvin(400.0, 300.0).unwrap();
        let cond = OperatingCondition::at(temps, pa(50.0), m(1e-4)).unwrap();
        let hg = heat_transfer_coefficient(he, &cond).unwrap().value;
        let free = free_molecular_limit(he, temps, pa(50.0)).unwrap().value;
        let cont = continuum_limit(he, temps, m(1e-4)).unwrap().value;
        assert!(hg < free);
        assert!(hg < cont);
        // Series blend: 1/Hg = 1/free + 1/cont
        let series = 1.0 / (1.0 / free + 1.0 / cont);
        assert!((hg - series).abs() / series < 1e-12);
    }

    #[test]
    fn free_molecular_limit_rejects_bad_pressure() {
        let air = lookup("Air").unwrap();
        for p in [-5.0, 0.0, f64::NAN] {
            assert!(
                matches!(
                    free_molecular_limit(air, air_temps(), pa(p)),
                    Err(ConductionError::InvalidInput(_))
                ),
                "pressure {p} accepted"
            );
        }
        assert!(free_molecular_limit(air, air_temps(), pa(5.0)).is_ok());
    }
}
