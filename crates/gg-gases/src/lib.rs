//! gg-gases: thermophysical constants for the gas-gap conduction model.
//!
//! Provides:
//! - Gas identifiers for the ten supported gases
//! - `GasProperties`, the immutable per-gas record
//! - The fixed property catalog and name lookup
//!
//! The catalog is a `static` table: it is built at compile time and never
//! mutated, so every `&'static GasProperties` handed out stays valid for the
//! life of the process.
//!
//! # Example
//!
//! ```
//! use gg_gases::lookup;
//!
//! let air = lookup("Air").unwrap();
//! assert!(air.alpha > 0.0 && air.alpha <= 1.0);
//! assert!(lookup("Unobtainium").is_err());
//! ```

pub mod catalog;
pub mod error;
pub mod gas;
pub mod properties;

// Re-exports for ergonomics
pub use catalog::{catalog, filter_catalog, lookup, lookup_gas};
pub use error::{GasError, GasResult};
pub use gas::Gas;
pub use properties::{ConductivityFit, GasProperties};
