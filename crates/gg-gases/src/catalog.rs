use crate::error::{GasError, GasResult};
use crate::gas::Gas;
use crate::properties::{ConductivityFit, GasProperties};

#[allow(clippy::too_many_arguments)]
const fn entry(
    gas: Gas,
    name: &'static str,
    molar_mass_kg_mol: f64,
    gamma: f64,
    cp_j_kg_k: f64,
    fit: [f64; 4],
    lambda_ref_w_m_k: f64,
    t_range_k: (f64, f64),
    alpha: f64,
) -> GasProperties {
    GasProperties {
        gas,
        name,
        molar_mass_kg_mol,
        gamma,
        cp_j_kg_k,
        fit: ConductivityFit {
            a: fit[0],
            b: fit[1],
            c: fit[2],
            d: fit[3],
        },
        lambda_ref_w_m_k,
        t_min_k: t_range_k.0,
        t_max_k: t_range_k.1,
        alpha,
    }
}

// Ordered as `Gas::ALL`.
static GAS_CATALOG: [GasProperties; 10] = [
    entry(
        Gas::CarbonDioxide,
        "Carbon dioxide",
        0.04401,
        1.304,
        832.0,
        [-7.2150e-03, 8.0150e-05, 5.4770e-09, -1.0530e-11],
        1.6434e-02,
        (185.0, 1670.0),
        0.92,
    ),
    entry(
        Gas::Ammonia,
        "Ammonia",
        0.01703,
        1.307,
        2188.0,
        [3.8110e-04, 5.3890e-05, 1.2270e-07, -3.6350e-11],
        2.5732e-02,
        (273.0, 1670.0),
        0.8,
    ),
    entry(
        Gas::Methane,
        "Methane",
        0.01604,
        1.31,
        2206.0,
        [-1.8690e-03, 8.7270e-05, 1.1790e-07, -3.6140e-11],
        3.2840e-02,
        (273.0, 1270.0),
        0.8,
    ),
    entry(
        Gas::Oxygen,
        "Oxygen",
        0.03199,
        1.401,
        909.0,
        [-3.2730e-04, 9.9660e-05, -3.7430e-08, 9.7320e-12],
        2.5864e-02,
        (115.0, 1470.0),
        0.85,
    ),
    entry(
        Gas::Nitrogen,
        "Nitrogen",
        0.028013,
        1.404,
        1036.0,
        [3.9190e-04, 9.8160e-05, -5.0670e-08, 1.5040e-11],
        2.5145e-02,
        (115.0, 1470.0),
        0.8,
    ),
    entry(
        Gas::Hydrogen,
        "Hydrogen",
        0.002016,
        1.41,
        14150.0,
        [8.0990e-03, 6.6890e-04, -4.1580e-07, 1.5620e-10],
        1.7209e-01,
        (115.0, 1470.0),
        0.286,
    ),
    entry(
        Gas::Helium,
        "Helium",
        0.004,
        1.66,
        5225.0,
        [3.7220e-02, 3.8960e-04, -7.4500e-08, 1.2900e-11],
        1.4513e-01,
        (115.0, 1070.0),
        0.4,
    ),
    entry(
        Gas::Xenon,
        "Xenon",
        0.1313,
        1.66,
        0.0,
        [5.6667e-04, 1.2431e-05, 1.9325e-08, 2.1300e-11],
        6.3892e-03,
        (100.0, 600.0),
        0.8,
    ),
    entry(
        Gas::Argon,
        "Argon",
        0.039948,
        1.668,
        524.0,
        [2.7140e-03, 5.5400e-05, -2.1780e-08, 5.5280e-12],
        1.7193e-02,
        (115.0, 1470.0),
        0.8,
    ),
    entry(
        Gas::Air,
        "Air",
        0.0288,
        1.4034,
        1010.6,
        [2.4806e-04, 9.8460e-05, -4.8022e-08, 1.3978e-11],
        2.5289e-02,
        (115.0, 1470.0),
        0.81,
    ),
];

/// All catalog records, in selection-list order.
pub fn catalog() -> &'static [GasProperties] {
    &GAS_CATALOG
}

/// Record for a known gas. Infallible: every `Gas` has an entry.
pub fn lookup_gas(gas: Gas) -> &'static GasProperties {
    &GAS_CATALOG[gas.index()]
}

/// Look a gas up by catalog key or chemical formula (case-insensitive).
pub fn lookup(name: &str) -> GasResult<&'static GasProperties> {
    name.parse::<Gas>()
        .map(lookup_gas)
        .map_err(|_| GasError::UnknownGas {
            name: name.to_string(),
        })
}

/// Catalog entries whose key or formula contains `query`.
pub fn filter_catalog(query: &str) -> Vec<&'static GasProperties> {
    let query = query.trim().to_ascii_lowercase();
    catalog()
        .iter()
        .filter(|props| {
            query.is_empty()
                || props.name.to_ascii_lowercase().contains(&query)
                || props
                    .gas
                    .formula()
                    .is_some_and(|f| f.to_ascii_lowercase().contains(&query))
        })
        .collect()
}
