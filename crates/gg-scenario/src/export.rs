//! CSV and JSON rendering of sweep results.

use crate::ScenarioResult;
use gg_conduction::{SweepResult, SweepVariable};
use serde::Serialize;

/// One header row plus one row per sample, in sample order.
pub fn sweep_to_csv(result: &SweepResult) -> String {
    let x_column = match result.variable {
        SweepVariable::Separation => "separation_m",
        SweepVariable::Pressure => "pressure_pa",
    };
    let mut csv = format!("{x_column},heat_transfer_w_m2_k,effective_conductivity_w_m_k\n");
    for (x, hg, keff) in result.rows() {
        csv.push_str(&format!("{x:e},{hg:e},{keff:e}\n"));
    }
    csv
}

pub fn to_json<T: Serialize>(value: &T) -> ScenarioResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
