//! Gas identifiers.

/// Gases with a conductivity fit in the property catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Gas {
    /// Carbon dioxide (CO₂)
    CarbonDioxide,
    /// Ammonia (NH₃)
    Ammonia,
    /// Methane (CH₄)
    Methane,
    /// Oxygen (O₂)
    Oxygen,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Hydrogen (H₂)
    Hydrogen,
    /// Helium (He)
    Helium,
    /// Xenon (Xe)
    Xenon,
    /// Argon (Ar)
    Argon,
    /// Air (treated as a pseudo-pure gas)
    Air,
}

impl Gas {
    /// Catalog order, which is also the order of the front-end selection list.
    pub const ALL: [Gas; 10] = [
        Gas::CarbonDioxide,
        Gas::Ammonia,
        Gas::Methane,
        Gas::Oxygen,
        Gas::Nitrogen,
        Gas::Hydrogen,
        Gas::Helium,
        Gas::Xenon,
        Gas::Argon,
        Gas::Air,
    ];

    /// Catalog key.
    pub fn key(&self) -> &'static str {
        match self {
            Gas::CarbonDioxide => "Carbon dioxide",
            Gas::Ammonia => "Ammonia",
            Gas::Methane => "Methane",
            Gas::Oxygen => "Oxygen",
            Gas::Nitrogen => "Nitrogen",
            Gas::Hydrogen => "Hydrogen",
            Gas::Helium => "Helium",
            Gas::Xenon => "Xenon",
            Gas::Argon => "Argon",
            Gas::Air => "Air",
        }
    }

    /// Chemical formula, or `None` for Air.
    pub fn formula(&self) -> Option<&'static str> {
        match self {
            Gas::CarbonDioxide => Some("CO2"),
            Gas::Ammonia => Some("NH3"),
            Gas::Methane => Some("CH4"),
            Gas::Oxygen => Some("O2"),
            Gas::Nitrogen => Some("N2"),
            Gas::Hydrogen => Some("H2"),
            Gas::Helium => Some("He"),
            Gas::Xenon => Some("Xe"),
            Gas::Argon => Some("Ar"),
            Gas::Air => None,
        }
    }

    /// Position in [`Gas::ALL`] and in the catalog table.
    pub(crate) fn index(&self) -> usize {
        match self {
            Gas::CarbonDioxide => 0,
            Gas::Ammonia => 1,
            Gas::Methane => 2,
            Gas::Oxygen => 3,
            Gas::Nitrogen => 4,
            Gas::Hydrogen => 5,
            Gas::Helium => 6,
            Gas::Xenon => 7,
            Gas::Argon => 8,
            Gas::Air => 9,
        }
    }
}

impl std::fmt::Display for Gas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Gas {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CARBON DIOXIDE" | "CARBONDIOXIDE" | "CO2" => Ok(Gas::CarbonDioxide),
            "AMMONIA" | "NH3" => Ok(Gas::Ammonia),
            "METHANE" | "CH4" => Ok(Gas::Methane),
            "OXYGEN" | "O2" => Ok(Gas::Oxygen),
            "NITROGEN" | "N2" => Ok(Gas::Nitrogen),
            "HYDROGEN" | "H2" => Ok(Gas::Hydrogen),
            "HELIUM" | "HE" => Ok(Gas::Helium),
            "XENON" | "XE" => Ok(Gas::Xenon),
            "ARGON" | "AR" => Ok(Gas::Argon),
            "AIR" => Ok(Gas::Air),
            _ => Err("unknown gas"),
        }
    }
}
