//! # Unit Conversions
//!
//! Static factor tables for the unit families a tiler or bricklayer runs
//! into on site: length, area, volume, weight, temperature, plus bulk
//! density of common aggregates.
//!
//! Each linear family stores one factor per unit converting *to* the SI
//! base (metre, square metre, cubic metre, kilogram). A conversion is
//! `value * from.factor() / to.factor()`.
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::units::{convert_length, convert_weight, LengthUnit, WeightUnit};
//!
//! let feet = convert_length(1.0, LengthUnit::Metre, LengthUnit::Foot);
//! assert!((feet - 3.28084).abs() < 1e-3);
//!
//! let kg = convert_weight(1.0, WeightUnit::Tonne, WeightUnit::Kilogram);
//! assert_eq!(kg, 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A unit that converts to its family's base unit by a constant factor.
pub trait LinearUnit: Copy + PartialEq {
    /// Multiplier taking 1 of this unit to the family base unit
    fn factor(self) -> f64;
}

/// Convert `value` between two units of the same linear family.
pub fn convert<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    value * from.factor() / to.factor()
}

// ============================================================================
// Table macro (one enum per family, keeps code/label/factor in one row)
// ============================================================================

macro_rules! unit_table {
    (
        $(#[$meta:meta])*
        $name:ident, family = $family:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $code:literal, $label:literal, $factor:expr $(; $alias:literal)*
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            /// All units of this family, in display order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Short code (e.g. "mm", "ft2")
            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Label for selection lists
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($alias),*],)+
                }
            }

            /// Parse a code or alias, ignoring case and surrounding space
            pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|unit| {
                        unit.code().eq_ignore_ascii_case(wanted)
                            || unit.aliases().iter().any(|a| a.eq_ignore_ascii_case(wanted))
                    })
                    .ok_or_else(|| CalcError::unknown_unit($family, wanted))
            }
        }

        impl LinearUnit for $name {
            fn factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

unit_table! {
    /// Length units (base: metre)
    LengthUnit, family = "length" {
        Millimetre => "mm", "Millimetres (mm)", 0.001; "millimetres"; "millimeters",
        Centimetre => "cm", "Centimetres (cm)", 0.01; "centimetres"; "centimeters",
        Metre => "m", "Metres (m)", 1.0; "metres"; "meters",
        Inch => "in", "Inches (in)", 0.0254; "inches",
        Foot => "ft", "Feet (ft)", 0.3048; "feet",
        Yard => "yd", "Yards (yd)", 0.9144; "yards",
    }
}

unit_table! {
    /// Area units (base: square metre)
    AreaUnit, family = "area" {
        SquareMillimetre => "mm2", "mm²", 1e-6; "mm²",
        SquareCentimetre => "cm2", "cm²", 1e-4; "cm²",
        SquareMetre => "m2", "m²", 1.0; "m²"; "sqm",
        SquareFoot => "ft2", "ft²", 0.092_903_04; "ft²"; "sqft",
        SquareYard => "yd2", "yd²", 0.836_127_36; "yd²"; "sqyd",
    }
}

unit_table! {
    /// Volume units (base: cubic metre)
    VolumeUnit, family = "volume" {
        CubicMetre => "m3", "Cubic metres (m³)", 1.0; "m³",
        Litre => "litres", "Litres (L)", 0.001; "l"; "liters",
        CubicFoot => "ft3", "Cubic feet (ft³)", 0.028_316_8; "ft³",
        CubicYard => "yd3", "Cubic yards (yd³)", 0.764_555; "yd³",
        UkGallon => "gallons_uk", "UK Gallons", 0.004_546_09; "gal",
    }
}

unit_table! {
    /// Weight units (base: kilogram)
    WeightUnit, family = "weight" {
        Gram => "g", "Grams (g)", 0.001; "grams",
        Kilogram => "kg", "Kilograms (kg)", 1.0; "kilograms",
        Ounce => "oz", "Ounces (oz)", 0.028_349_523_1; "ounces",
        Pound => "lb", "Pounds (lb)", 0.453_592_37; "lbs"; "pounds",
        Tonne => "tonnes", "Tonnes (t)", 1000.0; "t"; "tonne",
        Stone => "stones", "Stones (st)", 6.350_293_18; "st"; "stone",
    }
}

/// Convert a length value between two units.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    convert(value, from, to)
}

/// Convert an area value between two units.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    convert(value, from, to)
}

/// Convert a volume value between two units.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    convert(value, from, to)
}

/// Convert a weight value between two units.
pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    convert(value, from, to)
}

// ============================================================================
// Temperature (affine, so not a LinearUnit)
// ============================================================================

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "C", alias = "c")]
    Celsius,
    #[serde(rename = "F", alias = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: &'static [TemperatureUnit] =
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit];

    pub fn code(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Fahrenheit => "F",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius (°C)",
            TemperatureUnit::Fahrenheit => "Fahrenheit (°F)",
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(CalcError::unknown_unit("temperature", other)),
        }
    }
}

/// Convert a temperature between Celsius and Fahrenheit.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    match (from, to) {
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
        _ => value,
    }
}

// ============================================================================
// Bulk density
// ============================================================================

/// Loose materials with a tabulated bulk density
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DensityMaterial {
    Concrete,
    Hardcore,
    Sand,
    Gravel,
    Ballast,
}

impl DensityMaterial {
    pub const ALL: [DensityMaterial; 5] = [
        DensityMaterial::Concrete,
        DensityMaterial::Hardcore,
        DensityMaterial::Sand,
        DensityMaterial::Gravel,
        DensityMaterial::Ballast,
    ];

    /// Bulk density in tonnes per cubic metre
    pub fn tonnes_per_m3(self) -> f64 {
        match self {
            DensityMaterial::Concrete => 2.4,
            DensityMaterial::Hardcore => 2.1,
            DensityMaterial::Sand => 1.6,
            DensityMaterial::Gravel => 1.8,
            DensityMaterial::Ballast => 1.8,
        }
    }

    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concrete" => Ok(DensityMaterial::Concrete),
            "hardcore" => Ok(DensityMaterial::Hardcore),
            "sand" => Ok(DensityMaterial::Sand),
            "gravel" => Ok(DensityMaterial::Gravel),
            "ballast" => Ok(DensityMaterial::Ballast),
            other => Err(CalcError::unknown_unit("density material", other)),
        }
    }
}

/// Weight in tonnes of `volume_m3` of loose `material`.
pub fn convert_density_to_weight(volume_m3: f64, material: DensityMaterial) -> f64 {
    volume_m3 * material.tonnes_per_m3()
}

// ============================================================================
// String-keyed entry point (for front ends)
// ============================================================================

/// Unit family selector for [`convert_by_code`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Length,
    Area,
    Volume,
    Weight,
    Temperature,
}

/// Convert using unit codes, e.g. `("length", 10.0, "ft", "m")`.
pub fn convert_by_code(family: UnitFamily, value: f64, from: &str, to: &str) -> CalcResult<f64> {
    let converted = match family {
        UnitFamily::Length => convert_length(
            value,
            LengthUnit::from_str_flexible(from)?,
            LengthUnit::from_str_flexible(to)?,
        ),
        UnitFamily::Area => convert_area(
            value,
            AreaUnit::from_str_flexible(from)?,
            AreaUnit::from_str_flexible(to)?,
        ),
        UnitFamily::Volume => convert_volume(
            value,
            VolumeUnit::from_str_flexible(from)?,
            VolumeUnit::from_str_flexible(to)?,
        ),
        UnitFamily::Weight => convert_weight(
            value,
            WeightUnit::from_str_flexible(from)?,
            WeightUnit::from_str_flexible(to)?,
        ),
        UnitFamily::Temperature => convert_temperature(
            value,
            TemperatureUnit::from_str_flexible(from)?,
            TemperatureUnit::from_str_flexible(to)?,
        ),
    };
    Ok(converted)
}
