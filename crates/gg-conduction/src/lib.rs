//! gg-conduction: gas-gap heat transfer from continuum to free-molecular flow.
//!
//! Provides:
//! - Operating conditions (surface temperatures, pressure, separation)
//! - The conductance model: conductivity fit, free-molecular conductance,
//!   and the blended heat transfer coefficient
//! - Sweep definitions and execution over pressure or separation
//!
//! Everything here is pure: no I/O, no logging, no shared mutable state.
//! Failures come back as [`ConductionError`].
//!
//! # Example
//!
//! ```
//! use gg_conduction::{OperatingCondition, heat_transfer_coefficient};
//! use gg_core::units::{k, m, pa};
//!
//! let air = gg_gases::lookup("Air").unwrap();
//! let cond = OperatingCondition::new(k(293.0), k(292.0), pa(5.0), m(1e-6)).unwrap();
//! let hg = heat_transfer_coefficient(air, &cond).unwrap();
//! assert!(hg.value > 0.0);
//! ```

pub mod condition;
pub mod error;
pub mod model;
pub mod sweep_executor;
pub mod sweeps;

// Re-exports for ergonomics
pub use condition::{
    MAX_SWEEP_POINTS, OperatingCondition, SurfaceTemperatures, SweepVariable, SweptCondition,
};
pub use error::{ConductionError, ConductionResult};
pub use model::{
    ConductionModel, ExecutionMode, RangePolicy, continuum_limit, effective_conductivity,
    free_molecular_conductance, free_molecular_limit, heat_transfer_coefficient,
    heat_transfer_coefficients, thermal_conductivity_polynomial,
};
pub use sweep_executor::{
    SweepResult, execute_pressure_sweep, execute_separation_sweep, execute_sweep,
};
pub use sweeps::{DEFAULT_SWEEP_POINTS, SweepDefinition, SweepSpacing};
