//! Scenario execution.

use crate::schema::Scenario;
use crate::validate::validate_scenario;
use crate::ScenarioResult;
use gg_conduction::{
    ConductionModel, SurfaceTemperatures, SweepDefinition, SweepResult, SweepVariable,
    execute_pressure_sweep, execute_separation_sweep,
};
use gg_core::units::{m, pa};
use gg_gases::GasProperties;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, info_span, warn};

/// Everything a front end needs to draw a scenario: the gas constants and
/// one result per requested sweep.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub gas: GasProperties,
    pub average_temp_k: f64,
    /// Continuum conductivity at the average temperature [W/(m·K)]
    pub kn_w_m_k: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separation: Option<SweepResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure: Option<SweepResult>,
}

pub fn run_scenario(scenario: &Scenario) -> ScenarioResult<ScenarioReport> {
    validate_scenario(scenario)?;

    let gas = gg_gases::lookup(&scenario.gas)?;
    let _span = info_span!("scenario", gas = gas.name).entered();
    let started = Instant::now();

    let temps =
        SurfaceTemperatures::from_kelvin(scenario.surface_temp_1_k, scenario.surface_temp_2_k)?;
    let model = ConductionModel::new(scenario.range_policy, scenario.execution);
    let average_temp = temps.average_temp();
    let kn = model.conductivity(gas, average_temp)?;

    if !gas.in_fit_range(average_temp.value) {
        warn!(
            average_temp_k = average_temp.value,
            t_min_k = gas.t_min_k,
            t_max_k = gas.t_max_k,
            "average temperature outside conductivity fit range, extrapolating"
        );
    }

    let separation = match &scenario.separation_sweep {
        Some(def) => {
            let sweep = SweepDefinition::from_log_exponents(
                SweepVariable::Separation,
                def.log_min,
                def.log_max,
                def.points,
            )?;
            debug!(%sweep, pressure_pa = def.pressure_pa, "running separation sweep");
            Some(execute_separation_sweep(
                &model,
                gas,
                temps,
                pa(def.pressure_pa),
                &sweep,
            )?)
        }
        None => None,
    };

    let pressure = match &scenario.pressure_sweep {
        Some(def) => {
            let sweep = SweepDefinition::from_log_exponents(
                SweepVariable::Pressure,
                def.log_min,
                def.log_max,
                def.points,
            )?;
            debug!(%sweep, separation_m = def.separation_m, "running pressure sweep");
            Some(execute_pressure_sweep(
                &model,
                gas,
                temps,
                m(def.separation_m),
                &sweep,
            )?)
        }
        None => None,
    };

    info!(
        kn_w_m_k = kn.value,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "scenario complete"
    );

    Ok(ScenarioReport {
        gas: *gas,
        average_temp_k: average_temp.value,
        kn_w_m_k: kn.value,
        separation,
        pressure,
    })
}
