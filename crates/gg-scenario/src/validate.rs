use crate::schema::{PRESSURE_EXPONENT_WINDOW, SEPARATION_EXPONENT_WINDOW, Scenario};
use crate::{ScenarioError, ScenarioResult};
use gg_conduction::{MAX_SWEEP_POINTS, SurfaceTemperatures};

pub fn validate_scenario(scenario: &Scenario) -> ScenarioResult<()> {
    gg_gases::lookup(&scenario.gas)?;
    SurfaceTemperatures::from_kelvin(scenario.surface_temp_1_k, scenario.surface_temp_2_k)?;

    if scenario.separation_sweep.is_none() && scenario.pressure_sweep.is_none() {
        return Err(ScenarioError::Validation("scenario defines no sweep".to_string()));
    }

    if let Some(sweep) = &scenario.separation_sweep {
        check_positive("separation_sweep.pressure_pa", sweep.pressure_pa)?;
        check_window(
            "separation_sweep",
            sweep.log_min,
            sweep.log_max,
            SEPARATION_EXPONENT_WINDOW,
        )?;
        check_points("separation_sweep", sweep.points)?;
    }

    if let Some(sweep) = &scenario.pressure_sweep {
        check_positive("pressure_sweep.separation_m", sweep.separation_m)?;
        check_window(
            "pressure_sweep",
            sweep.log_min,
            sweep.log_max,
            PRESSURE_EXPONENT_WINDOW,
        )?;
        check_points("pressure_sweep", sweep.points)?;
    }

    Ok(())
}

fn check_positive(field: &str, value: f64) -> ScenarioResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ScenarioError::Validation(format!(
            "{field} must be positive, got {value}"
        )))
    }
}

fn check_window(field: &str, lo: i32, hi: i32, window: (i32, i32)) -> ScenarioResult<()> {
    if lo >= hi {
        return Err(ScenarioError::Validation(format!(
            "{field}: log_min ({lo}) must be below log_max ({hi})"
        )));
    }
    if lo < window.0 || hi > window.1 {
        return Err(ScenarioError::Validation(format!(
            "{field}: exponents [{lo}, {hi}] outside [{}, {}]",
            window.0, window.1
        )));
    }
    Ok(())
}

fn check_points(field: &str, points: usize) -> ScenarioResult<()> {
    if (2..=MAX_SWEEP_POINTS).contains(&points) {
        Ok(())
    } else {
        Err(ScenarioError::Validation(format!(
            "{field}: points must be in [2, {MAX_SWEEP_POINTS}], got {points}"
        )))
    }
}
