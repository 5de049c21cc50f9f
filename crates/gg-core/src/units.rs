// gg-core/src/units.rs

use uom::si::f64::{
    HeatTransfer as UomHeatTransfer, Length as UomLength, MolarMass as UomMolarMass,
    Pressure as UomPressure, Ratio as UomRatio,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type HeatTransfer = UomHeatTransfer;
pub type Length = UomLength;
pub type MolarMass = UomMolarMass;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type SpecHeatCapacity = UomSpecificHeatCapacity;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalConductivity = UomThermalConductivity;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn kg_per_mol(v: f64) -> MolarMass {
    use uom::si::molar_mass::kilogram_per_mole;
    MolarMass::new::<kilogram_per_mole>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn w_per_m2_k(v: f64) -> HeatTransfer {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    HeatTransfer::new::<watt_per_square_meter_kelvin>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecHeatCapacity {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeatCapacity::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Universal gas constant [J/(mol·K)], at the precision the conductivity fits were made with.
    pub const R0_J_PER_MOL_K: f64 = 8.314;
}
