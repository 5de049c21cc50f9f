//! Sweep execution: evaluate the conductance over a generated sample array.
//!
//! Connects sweep definitions with the conduction model and collects the
//! curves a front end plots: `Hg` and `a·Hg` against the swept variable,
//! plus the gas constants used so they can be displayed alongside.

use crate::condition::{SurfaceTemperatures, SweepVariable, SweptCondition};
use crate::error::{ConductionError, ConductionResult};
use crate::model::{BlendTerms, ConductionModel};
use crate::sweeps::SweepDefinition;
use gg_core::units::{Length, Pressure};
use gg_gases::{Gas, GasProperties};

/// Result of a conductance sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    pub gas: Gas,
    pub variable: SweepVariable,
    /// Value held fixed: pressure [Pa] for a separation sweep, separation [m] otherwise
    pub fixed_value_si: f64,
    pub surface_temp_1_k: f64,
    pub surface_temp_2_k: f64,
    pub average_temp_k: f64,
    /// Continuum conductivity at the average temperature [W/(m·K)]
    pub kn_w_m_k: f64,
    /// Free-molecular conductance [W/(m²·K·Pa)]
    pub free_lambda: f64,
    /// Whether the average temperature lies inside the fit range
    pub in_fit_range: bool,
    /// Swept samples [m or Pa]
    pub independent_values: Vec<f64>,
    /// Heat transfer coefficient per sample [W/(m²·K)]
    pub heat_transfer_w_m2_k: Vec<f64>,
    /// `a · Hg` per sample [W/(m·K)]
    pub effective_conductivity_w_m_k: Vec<f64>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.independent_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.independent_values.is_empty()
    }

    /// `(sample, Hg, a·Hg)` rows in sample order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.independent_values
            .iter()
            .zip(&self.heat_transfer_w_m2_k)
            .zip(&self.effective_conductivity_w_m_k)
            .map(|((&x, &hg), &keff)| (x, hg, keff))
    }

    /// Separation [m] at sample `i`.
    fn separation_at(&self, i: usize) -> f64 {
        match self.variable {
            SweepVariable::Separation => self.independent_values[i],
            SweepVariable::Pressure => self.fixed_value_si,
        }
    }
}

/// Evaluate `Hg` and `a·Hg` over an explicit swept condition.
pub fn execute_sweep(
    model: &ConductionModel,
    gas: &GasProperties,
    swept: &SweptCondition,
) -> ConductionResult<SweepResult> {
    let temps = swept.temps();
    // Evaluated up front so the displayed constants match the curve exactly.
    let terms = BlendTerms::new(gas, temps, model.range_policy)?;
    let heat_transfer = model.blend_samples(&terms, swept)?;

    let mut result = SweepResult {
        gas: gas.gas,
        variable: swept.variable(),
        fixed_value_si: swept.fixed_si(),
        surface_temp_1_k: temps.surface_temp_1().value,
        surface_temp_2_k: temps.surface_temp_2().value,
        average_temp_k: temps.average_temp().value,
        kn_w_m_k: terms.kn,
        free_lambda: terms.free_lambda,
        in_fit_range: gas.in_fit_range(temps.average_temp().value),
        independent_values: swept.samples_si().to_vec(),
        heat_transfer_w_m2_k: heat_transfer,
        effective_conductivity_w_m_k: Vec::new(),
    };
    result.effective_conductivity_w_m_k = (0..result.len())
        .map(|i| result.separation_at(i) * result.heat_transfer_w_m2_k[i])
        .collect();
    Ok(result)
}

/// Sweep the wall separation at a fixed pressure.
pub fn execute_separation_sweep(
    model: &ConductionModel,
    gas: &GasProperties,
    temps: SurfaceTemperatures,
    fixed_pressure: Pressure,
    sweep_def: &SweepDefinition,
) -> ConductionResult<SweepResult> {
    if sweep_def.variable != SweepVariable::Separation {
        return Err(ConductionError::InvalidSweep {
            reason: "sweep definition must be for separation".to_string(),
        });
    }
    sweep_def.validate()?;
    let swept =
        SweptCondition::separation_sweep(temps, fixed_pressure, sweep_def.generate_points())?;
    execute_sweep(model, gas, &swept)
}

/// Sweep the gas pressure at a fixed wall separation.
pub fn execute_pressure_sweep(
    model: &ConductionModel,
    gas: &GasProperties,
    temps: SurfaceTemperatures,
    fixed_separation: Length,
    sweep_def: &SweepDefinition,
) -> ConductionResult<SweepResult> {
    if sweep_def.variable != SweepVariable::Pressure {
        return Err(ConductionError::InvalidSweep {
            reason: "sweep definition must be for pressure".to_string(),
        });
    }
    sweep_def.validate()?;
    let swept =
        SweptCondition::pressure_sweep(temps, fixed_separation, sweep_def.generate_points())?;
    execute_sweep(model, gas, &swept)
}
