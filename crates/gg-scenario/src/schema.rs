//! Scenario schema definitions.

use gg_conduction::{DEFAULT_SWEEP_POINTS, ExecutionMode, RangePolicy};
use serde::{Deserialize, Serialize};

/// Separation exponents the front end can request: `10^-10 ..= 10^0` m.
pub const SEPARATION_EXPONENT_WINDOW: (i32, i32) = (-10, 0);
/// Pressure exponents the front end can request: `10^-3 ..= 10^8` Pa.
pub const PRESSURE_EXPONENT_WINDOW: (i32, i32) = (-3, 8);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_gas")]
    pub gas: String,
    #[serde(default = "default_t1")]
    pub surface_temp_1_k: f64,
    #[serde(default = "default_t2")]
    pub surface_temp_2_k: f64,
    #[serde(default)]
    pub range_policy: RangePolicy,
    #[serde(default)]
    pub execution: ExecutionMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation_sweep: Option<SeparationSweepDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_sweep: Option<PressureSweepDef>,
}

/// Separation swept over `10^log_min ..= 10^log_max` m at a fixed pressure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeparationSweepDef {
    pub pressure_pa: f64,
    pub log_min: i32,
    pub log_max: i32,
    #[serde(default = "default_points")]
    pub points: usize,
}

/// Pressure swept over `10^log_min ..= 10^log_max` Pa at a fixed separation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PressureSweepDef {
    pub separation_m: f64,
    pub log_min: i32,
    pub log_max: i32,
    #[serde(default = "default_points")]
    pub points: usize,
}

fn default_gas() -> String {
    "Air".to_string()
}

fn default_t1() -> f64 {
    293.0
}

fn default_t2() -> f64 {
    292.0
}

fn default_points() -> usize {
    DEFAULT_SWEEP_POINTS
}

impl Default for SeparationSweepDef {
    fn default() -> Self {
        Self {
            pressure_pa: 5.0,
            log_min: -6,
            log_max: -3,
            points: DEFAULT_SWEEP_POINTS,
        }
    }
}

impl Default for PressureSweepDef {
    fn default() -> Self {
        Self {
            separation_m: 1e-6,
            log_min: -2,
            log_max: 6,
            points: DEFAULT_SWEEP_POINTS,
        }
    }
}

impl Default for Scenario {
    /// Air between 293 K and 292 K with both sweeps enabled.
    fn default() -> Self {
        Self {
            gas: default_gas(),
            surface_temp_1_k: default_t1(),
            surface_temp_2_k: default_t2(),
            range_policy: RangePolicy::default(),
            execution: ExecutionMode::default(),
            separation_sweep: Some(SeparationSweepDef::default()),
            pressure_sweep: Some(PressureSweepDef::default()),
        }
    }
}
