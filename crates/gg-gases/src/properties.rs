//! Per-gas thermophysical record.

use crate::error::{GasError, GasResult};
use crate::gas::Gas;
use gg_core::units::{
    MolarMass, SpecHeatCapacity, Temperature, ThermalConductivity, j_per_kg_k, k, kg_per_mol,
    w_per_m_k,
};

/// Cubic fit of continuum thermal conductivity against temperature:
/// `λ(T) = a + b·T + c·T² + d·T³`, T in K, λ in W/(m·K).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConductivityFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Immutable constants for one catalog gas.
///
/// Values are stored as plain SI `f64` so the table can live in a `static`;
/// the accessor methods return the `uom` quantity for callers that want units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GasProperties {
    pub gas: Gas,
    /// Catalog key
    pub name: &'static str,
    /// Molar mass [kg/mol]
    pub molar_mass_kg_mol: f64,
    /// Heat capacity ratio cp/cv
    pub gamma: f64,
    /// Specific heat at constant pressure [J/(kg·K)]; 0 marks an unused entry
    pub cp_j_kg_k: f64,
    /// Conductivity polynomial coefficients
    pub fit: ConductivityFit,
    /// Reference thermal conductivity [W/(m·K)]
    pub lambda_ref_w_m_k: f64,
    /// Lower bound of the fit's validated range [K]
    pub t_min_k: f64,
    /// Upper bound of the fit's validated range [K]
    pub t_max_k: f64,
    /// Thermal accommodation coefficient
    pub alpha: f64,
}

impl GasProperties {
    pub fn molar_mass(&self) -> MolarMass {
        kg_per_mol(self.molar_mass_kg_mol)
    }

    /// `None` when the catalog carries no cp for this gas.
    pub fn cp(&self) -> Option<SpecHeatCapacity> {
        (self.cp_j_kg_k > 0.0).then(|| j_per_kg_k(self.cp_j_kg_k))
    }

    pub fn lambda_ref(&self) -> ThermalConductivity {
        w_per_m_k(self.lambda_ref_w_m_k)
    }

    pub fn t_min(&self) -> Temperature {
        k(self.t_min_k)
    }

    pub fn t_max(&self) -> Temperature {
        k(self.t_max_k)
    }

    /// Whether `t_k` lies inside the validated fit range (inclusive).
    pub fn in_fit_range(&self, t_k: f64) -> bool {
        t_k >= self.t_min_k && t_k <= self.t_max_k
    }

    /// Check the record invariants.
    pub fn validate(&self) -> GasResult<()> {
        let fail = |what| GasError::InconsistentRecord {
            gas: self.name,
            what,
        };
        if !(self.molar_mass_kg_mol.is_finite() && self.molar_mass_kg_mol > 0.0) {
            return Err(fail("molar mass must be positive"));
        }
        if !(self.gamma.is_finite() && self.gamma > 1.0) {
            return Err(fail("gamma must exceed 1"));
        }
        if !(self.cp_j_kg_k.is_finite() && self.cp_j_kg_k >= 0.0) {
            return Err(fail("cp must be non-negative"));
        }
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(fail("alpha must be in (0, 1]"));
        }
        if !(self.t_min_k.is_finite() && self.t_max_k.is_finite() && self.t_min_k < self.t_max_k) {
            return Err(fail("t_min must be below t_max"));
        }
        let fit = self.fit;
        if ![fit.a, fit.b, fit.c, fit.d, self.lambda_ref_w_m_k]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(fail("conductivity coefficients must be finite"));
        }
        Ok(())
    }
}
