//! gg-scenario: scenario files, validation and the scenario runner.
//!
//! A scenario names a gas, the two surface temperatures, and up to two
//! sweeps (separation at fixed pressure, pressure at fixed separation).

pub mod export;
pub mod runner;
pub mod schema;
pub mod validate;

pub use export::{sweep_to_csv, to_json};
pub use runner::{ScenarioReport, run_scenario};
pub use schema::*;
pub use validate::validate_scenario;

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Gas(#[from] gg_gases::GasError),

    #[error("Conduction error: {0}")]
    Conduction(#[from] gg_conduction::ConductionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ScenarioResult<Scenario> {
    let scenario: Scenario = serde_yaml::from_str(content)?;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

pub fn load_yaml(path: &std::path::Path) -> ScenarioResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, scenario: &Scenario) -> ScenarioResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}
