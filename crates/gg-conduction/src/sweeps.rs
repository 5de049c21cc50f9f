//! Sweep sample generation.
//!
//! Builds the independent-variable arrays (separation or pressure) that a
//! sweep is evaluated over. Log spacing is the usual choice since both
//! quantities span many decades.

use crate::condition::{MAX_SWEEP_POINTS, SweepVariable};
use crate::error::{ConductionError, ConductionResult};
use std::fmt;

/// Number of samples a front end draws per curve unless told otherwise.
pub const DEFAULT_SWEEP_POINTS: usize = 10_000;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SweepSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single-variable sweep, bounds in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub variable: SweepVariable,
    pub start_si: f64,
    pub end_si: f64,
    pub num_points: usize,
    pub spacing: SweepSpacing,
}

impl SweepDefinition {
    pub fn new(
        variable: SweepVariable,
        start_si: f64,
        end_si: f64,
        num_points: usize,
        spacing: SweepSpacing,
    ) -> ConductionResult<Self> {
        let sweep = Self {
            variable,
            start_si,
            end_si,
            num_points,
            spacing,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    /// Check point count and bounds. Fields are public, so executors call
    /// this again before generating points.
    pub fn validate(&self) -> ConductionResult<()> {
        let invalid = |reason: String| ConductionError::InvalidSweep { reason };

        if self.num_points < 2 {
            return Err(invalid("sweep must have at least 2 points".to_string()));
        }
        if self.num_points > MAX_SWEEP_POINTS {
            return Err(invalid(format!(
                "{} points exceeds the limit of {MAX_SWEEP_POINTS}",
                self.num_points
            )));
        }
        for (label, v) in [("start", self.start_si), ("end", self.end_si)] {
            if !(v.is_finite() && v > 0.0) {
                return Err(invalid(format!(
                    "{label} {} must be positive, got {v}",
                    self.variable
                )));
            }
        }
        if self.start_si == self.end_si {
            return Err(invalid("start and end values must be different".to_string()));
        }
        Ok(())
    }

    /// Log-spaced sweep from `10^lo_exp` to `10^hi_exp`.
    pub fn from_log_exponents(
        variable: SweepVariable,
        lo_exp: i32,
        hi_exp: i32,
        num_points: usize,
    ) -> ConductionResult<Self> {
        Self::new(
            variable,
            10f64.powi(lo_exp),
            10f64.powi(hi_exp),
            num_points,
            SweepSpacing::Logarithmic,
        )
    }

    /// Generate all points in the sweep. Assumes a definition that passed
    /// [`validate`](Self::validate).
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            SweepSpacing::Linear => self.generate_linear(),
            SweepSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        let n = self.num_points;
        let delta = (self.end_si - self.start_si) / (n - 1) as f64;

        let mut points: Vec<f64> = (0..n).map(|i| self.start_si + i as f64 * delta).collect();
        // Ensure exact endpoint
        points[n - 1] = self.end_si;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        let n = self.num_points;
        let log_start = self.start_si.log10();
        let log_delta = (self.end_si.log10() - log_start) / (n - 1) as f64;

        let mut points: Vec<f64> = (0..n)
            .map(|i| 10f64.powf(log_start + i as f64 * log_delta))
            .collect();
        points[0] = self.start_si;
        points[n - 1] = self.end_si;
        points
    }
}

impl fmt::Display for SweepSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {:e} to {:e} {} ({} points, {})",
            self.variable,
            self.start_si,
            self.end_si,
            self.variable.unit(),
            self.num_points,
            self.spacing
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_sweep_generation() {
        let sweep =
            SweepDefinition::new(SweepVariable::Pressure, 100.0, 500.0, 5, SweepSpacing::Linear)
                .unwrap();

        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 100.0).abs() < 1e-9);
        assert!((points[2] - 300.0).abs() < 1e-9);
        assert!((points[4] - 500.0).abs() < 1e-9);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep =
            SweepDefinition::from_log_exponents(SweepVariable::Separation, -6, -3, 4).unwrap();

        let points = sweep.generate_points();
        assert_eq!(points.len(), 4);
        assert!((points[0] - 1e-6).abs() / 1e-6 < 1e-12);
        assert!((points[3] - 1e-3).abs() / 1e-3 < 1e-12);
        assert!((points[1] - 1e-5).abs() / 1e-5 < 1e-12);
        assert!((points[2] - 1e-4).abs() / 1e-4 < 1e-12);
    }

    #[test]
    fn logarithmic_sweep_is_strictly_increasing() {
        let sweep = SweepDefinition::from_log_exponents(
            SweepVariable::Pressure,
            -2,
            6,
            DEFAULT_SWEEP_POINTS,
        )
        .unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), DEFAULT_SWEEP_POINTS);
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn descending_sweep_is_allowed() {
        let sweep =
            SweepDefinition::new(SweepVariable::Pressure, 1e4, 1.0, 5, SweepSpacing::Logarithmic)
                .unwrap();
        let points = sweep.generate_points();
        assert_eq!(points[0], 1e4);
        assert!((points[1] - 1e3).abs() < 1e-9);
        assert_eq!(points[4], 1.0);
    }

    #[test]
    fn reject_invalid_point_count() {
        let result =
            SweepDefinition::new(SweepVariable::Pressure, 1.0, 2.0, 1, SweepSpacing::Linear);
        assert!(result.is_err());
        let result = SweepDefinition::new(
            SweepVariable::Pressure,
            1.0,
            2.0,
            MAX_SWEEP_POINTS + 1,
            SweepSpacing::Linear,
        );
        assert!(result.is_err());
    }

    #[test]
    fn reject_identical_or_non_positive_bounds() {
        assert!(
            SweepDefinition::new(SweepVariable::Pressure, 5.0, 5.0, 5, SweepSpacing::Linear)
                .is_err()
        );
        assert!(
            SweepDefinition::new(SweepVariable::Separation, 0.0, 1e-3, 5, SweepSpacing::Linear)
                .is_err()
        );
        assert!(
            SweepDefinition::new(
                SweepVariable::Separation,
                1e-6,
                f64::NAN,
                5,
                SweepSpacing::Logarithmic
            )
            .is_err()
        );
    }

    #[test]
    fn hand_built_definition_is_checked() {
        let mut sweep =
            SweepDefinition::from_log_exponents(SweepVariable::Pressure, -2, 6, 10).unwrap();
        assert!(sweep.validate().is_ok());
        sweep.num_points = 0;
        assert!(matches!(sweep.validate(), Err(ConductionError::InvalidSweep { .. })));
        sweep.num_points = usize::MAX;
        assert!(sweep.validate().is_err());
    }

    #[test]
    fn display_mentions_variable_and_unit() {
        let sweep =
            SweepDefinition::from_log_exponents(SweepVariable::Pressure, -2, 6, 10).unwrap();
        let text = sweep.to_string();
        assert!(text.contains("pressure"));
        assert!(text.contains("Pa"));
        assert!(text.contains("Logarithmic"));
    }
}
