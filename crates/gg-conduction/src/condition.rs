//! Operating conditions: the temperatures, pressure and gap a coefficient is evaluated at.

use crate::error::{ConductionError, ConductionResult};
use gg_core::numeric::{Real, ensure_positive};
use gg_core::units::{Length, Pressure, Temperature, k, m, pa};
use std::fmt;

/// Largest sweep accepted by the model; evaluation time is linear in this.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Validated pair of surface temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTemperatures {
    surface_temp_1: Temperature,
    surface_temp_2: Temperature,
}

impl SurfaceTemperatures {
    pub fn new(surface_temp_1: Temperature, surface_temp_2: Temperature) -> ConductionResult<Self> {
        ensure_positive(surface_temp_1.value, "surface temperature 1")?;
        ensure_positive(surface_temp_2.value, "surface temperature 2")?;
        Ok(Self {
            surface_temp_1,
            surface_temp_2,
        })
    }

    pub fn from_kelvin(t1_k: Real, t2_k: Real) -> ConductionResult<Self> {
        Self::new(k(t1_k), k(t2_k))
    }

    pub fn surface_temp_1(&self) -> Temperature {
        self.surface_temp_1
    }

    pub fn surface_temp_2(&self) -> Temperature {
        self.surface_temp_2
    }

    /// Arithmetic mean of the two surfaces; the conductivity fit is evaluated here.
    pub fn average_temp(&self) -> Temperature {
        k(0.5 * (self.surface_temp_1.value + self.surface_temp_2.value))
    }

    /// `sqrt(T2 / T1)`
    pub fn ratio_factor(&self) -> Real {
        (self.surface_temp_2.value / self.surface_temp_1.value).sqrt()
    }
}

/// A single evaluation point: both pressure and separation held as scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingCondition {
    temps: SurfaceTemperatures,
    pressure: Pressure,
    separation: Length,
}

impl OperatingCondition {
    pub fn new(
        surface_temp_1: Temperature,
        surface_temp_2: Temperature,
        pressure: Pressure,
        separation: Length,
    ) -> ConductionResult<Self> {
        let temps = SurfaceTemperatures::new(surface_temp_1, surface_temp_2)?;
        Self::at(temps, pressure, separation)
    }

    pub fn at(
        temps: SurfaceTemperatures,
        pressure: Pressure,
        separation: Length,
    ) -> ConductionResult<Self> {
        ensure_positive(pressure.value, "pressure")?;
        ensure_positive(separation.value, "separation")?;
        Ok(Self {
            temps,
            pressure,
            separation,
        })
    }

    pub fn temps(&self) -> SurfaceTemperatures {
        self.temps
    }

    pub fn average_temp(&self) -> Temperature {
        self.temps.average_temp()
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn separation(&self) -> Length {
        self.separation
    }
}

/// Which of pressure / separation is the independent variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepVariable {
    /// Wall separation [m], pressure held fixed
    Separation,
    /// Gas pressure [Pa], separation held fixed
    Pressure,
}

impl SweepVariable {
    /// SI unit symbol of the swept quantity.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Separation => "m",
            Self::Pressure => "Pa",
        }
    }

    /// SI unit symbol of the quantity held fixed.
    pub fn fixed_unit(&self) -> &'static str {
        match self {
            Self::Separation => "Pa",
            Self::Pressure => "m",
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Separation => write!(f, "separation"),
            Self::Pressure => write!(f, "pressure"),
        }
    }
}

/// Condition with exactly one of pressure / separation swept.
///
/// Samples are SI values (m or Pa) and are all checked positive on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SweptCondition {
    temps: SurfaceTemperatures,
    variable: SweepVariable,
    fixed_si: Real,
    samples_si: Vec<Real>,
}

impl SweptCondition {
    /// Sweep the separation at a fixed pressure.
    pub fn separation_sweep(
        temps: SurfaceTemperatures,
        pressure: Pressure,
        separations_m: Vec<Real>,
    ) -> ConductionResult<Self> {
        ensure_positive(pressure.value, "pressure")?;
        Self::build(temps, SweepVariable::Separation, pressure.value, separations_m)
    }

    /// Sweep the pressure at a fixed separation.
    pub fn pressure_sweep(
        temps: SurfaceTemperatures,
        separation: Length,
        pressures_pa: Vec<Real>,
    ) -> ConductionResult<Self> {
        ensure_positive(separation.value, "separation")?;
        Self::build(temps, SweepVariable::Pressure, separation.value, pressures_pa)
    }

    fn build(
        temps: SurfaceTemperatures,
        variable: SweepVariable,
        fixed_si: Real,
        samples_si: Vec<Real>,
    ) -> ConductionResult<Self> {
        if samples_si.len() > MAX_SWEEP_POINTS {
            return Err(ConductionError::InvalidSweep {
                reason: format!(
                    "{} samples exceeds the limit of {}",
                    samples_si.len(),
                    MAX_SWEEP_POINTS
                ),
            });
        }
        let what = match variable {
            SweepVariable::Separation => "separation",
            SweepVariable::Pressure => "pressure",
        };
        for &v in &samples_si {
            ensure_positive(v, what)?;
        }
        Ok(Self {
            temps,
            variable,
            fixed_si,
            samples_si,
        })
    }

    pub fn temps(&self) -> SurfaceTemperatures {
        self.temps
    }

    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    /// The scalar held fixed: pressure [Pa] or separation [m].
    pub fn fixed_si(&self) -> Real {
        self.fixed_si
    }

    pub fn samples_si(&self) -> &[Real] {
        &self.samples_si
    }

    pub fn len(&self) -> usize {
        self.samples_si.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples_si.is_empty()
    }

    /// `(pressure [Pa], separation [m])` for sample `i`.
    pub fn point(&self, i: usize) -> Option<(Real, Real)> {
        self.samples_si.get(i).map(|&x| self.pair(x))
    }

    pub(crate) fn pair(&self, sample: Real) -> (Real, Real) {
        match self.variable {
            SweepVariable::Separation => (self.fixed_si, sample),
            SweepVariable::Pressure => (sample, self.fixed_si),
        }
    }

    /// Scalar condition for sample `i`.
    pub fn condition(&self, i: usize) -> Option<OperatingCondition> {
        self.point(i).map(|(p, a)| OperatingCondition {
            temps: self.temps,
            pressure: pa(p),
            separation: m(a),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gg_core::GgError;

    fn temps() -> SurfaceTemperatures {
        SurfaceTemperatures::from_kelvin(293.0, 292.0).unwrap()
    }

    #[test]
    fn average_and_ratio() {
        let t = temps();
        assert_eq!(t.average_temp().value, 292.5);
        assert!((t.ratio_factor() - (292.0_f64 / 293.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn zero_surface_temperature_is_rejected() {
        let err = SurfaceTemperatures::from_kelvin(0.0, 292.0).unwrap_err();
        assert!(matches!(
            err,
            ConductionError::InvalidInput(GgError::NonPositive {
                what: "surface temperature 1",
                ..
            })
        ));
        assert!(SurfaceTemperatures::from_kelvin(293.0, -1.0).is_err());
        assert!(SurfaceTemperatures::from_kelvin(f64::NAN, 292.0).is_err());
    }

    #[test]
    fn scalar_condition_validates_pressure_and_gap() {
        assert!(OperatingCondition::new(k(293.0), k(292.0), pa(5.0), m(1e-6)).is_ok());
        assert!(OperatingCondition::new(k(293.0), k(292.0), pa(0.0), m(1e-6)).is_err());
        assert!(OperatingCondition::new(k(293.0), k(292.0), pa(5.0), m(-1e-6)).is_err());
    }

    #[test]
    fn swept_condition_pairs_fixed_and_sample() {
        let sweep = SweptCondition::separation_sweep(temps(), pa(5.0), vec![1e-6, 1e-5]).unwrap();
        assert_eq!(sweep.point(1), Some((5.0, 1e-5)));
        assert_eq!(sweep.point(2), None);

        let sweep = SweptCondition::pressure_sweep(temps(), m(1e-6), vec![1.0, 10.0]).unwrap();
        assert_eq!(sweep.point(0), Some((1.0, 1e-6)));
        let cond = sweep.condition(1).unwrap();
        assert_eq!(cond.pressure().value, 10.0);
        assert_eq!(cond.separation().value, 1e-6);
    }

    #[test]
    fn swept_condition_rejects_bad_samples() {
        assert!(SweptCondition::pressure_sweep(temps(), m(1e-6), vec![1.0, 0.0]).is_err());
        assert!(SweptCondition::separation_sweep(temps(), pa(-5.0), vec![1e-6]).is_err());
    }

    #[test]
    fn swept_condition_rejects_oversized_sweeps() {
        let samples = vec![1.0; MAX_SWEEP_POINTS + 1];
        let err = SweptCondition::pressure_sweep(temps(), m(1e-6), samples).unwrap_err();
        assert!(matches!(err, ConductionError::InvalidSweep { .. }));
    }
}
