//! Property tests for the shape of the conductance curves.

use gg_conduction::{OperatingCondition, SurfaceTemperatures, heat_transfer_coefficient};
use gg_core::units::{m, pa};
use gg_gases::{Gas, lookup_gas};
use proptest::prelude::*;

fn hg(gas: Gas, temps: SurfaceTemperatures, p: f64, a: f64) -> f64 {
    let cond = OperatingCondition::at(temps, pa(p), m(a)).unwrap();
    heat_transfer_coefficient(lookup_gas(gas), &cond)
        .unwrap()
        .value
}

fn any_gas() -> impl Strategy<Value = Gas> {
    (0..Gas::ALL.len()).prop_map(|i| Gas::ALL[i])
}

proptest! {
    #[test]
    fn non_decreasing_in_pressure(
        gas in any_gas(),
        t1 in 250.0_f64..600.0,
        t2 in 250.0_f64..600.0,
        log_a in -9.0_f64..-1.0,
        log_p in -3.0_f64..8.0,
        factor in 1.01_f64..100.0,
    ) {
        let temps = SurfaceTemperatures::from_kelvin(t1, t2).unwrap();
        let a = 10f64.powf(log_a);
        let p = 10f64.powf(log_p);
        let low = hg(gas, temps, p, a);
        let high = hg(gas, temps, p * factor, a);
        prop_assert!(high >= low * (1.0 - 1e-12), "{gas}: {low} -> {high}");
    }

    #[test]
    fn non_increasing_in_separation(
        gas in any_gas(),
        t1 in 250.0_f64..600.0,
        t2 in 250.0_f64..600.0,
        log_a in -9.0_f64..-1.0,
        log_p in -3.0_f64..8.0,
        factor in 1.01_f64..100.0,
    ) {
        let temps = SurfaceTemperatures::from_kelvin(t1, t2).unwrap();
        let a = 10f64.powf(log_a);
        let p = 10f64.powf(log_p);
        let narrow = hg(gas, temps, p, a);
        let wide = hg(gas, temps, p, a * factor);
        prop_assert!(wide <= narrow * (1.0 + 1e-12), "{gas}: {narrow} -> {wide}");
    }

    #[test]
    fn bounded_by_both_asymptotes(
        gas in any_gas(),
        log_a in -9.0_f64..-1.0,
        log_p in -3.0_f64..8.0,
    ) {
        let temps = SurfaceTemperatures::from_kelvin(293.0, 292.0).unwrap();
        let a = 10f64.powf(log_a);
        let p = 10f64.powf(log_p);
        let props = lookup_gas(gas);
        let value = hg(gas, temps, p, a);
        let free = gg_conduction::free_molecular_limit(props, temps, pa(p)).unwrap().value;
        let cont = gg_conduction::continuum_limit(props, temps, m(a)).unwrap().value;
        prop_assert!(value > 0.0);
        prop_assert!(value <= free * (1.0 + 1e-12));
        prop_assert!(value <= cont * (1.0 + 1e-12));
    }
}
