//! Tile adhesive catalog.
//!
//! Coverage rates are kg of mixed adhesive per m² at the manufacturer's
//! recommended notch for the application. Wet-area rates are higher
//! because those installations call for solid-bed (no voids) fixing.
//!
//! The built-in list is the default for
//! [`AdhesiveSettings::products`](crate::calculations::adhesive::AdhesiveSettings);
//! a settings file can replace it with figures from current data sheets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Where the adhesive is going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    /// Walls and floors in dry rooms
    #[default]
    DryWall,
    /// Showers, wet rooms and splashbacks
    WetArea,
}

impl FromStr for ApplicationType {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().replace([' ', '_'], "-").as_str() {
            "dry" | "dry-wall" => Ok(ApplicationType::DryWall),
            "wet" | "wet-area" => Ok(ApplicationType::WetArea),
            _ => Err(CalcError::invalid_input(
                "application",
                s,
                "Application type must be dry-wall or wet-area.",
            )),
        }
    }
}

/// How the product is sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackageKind {
    #[default]
    Bag,
    Tub,
}

impl PackageKind {
    pub fn plural(&self) -> &'static str {
        match self {
            PackageKind::Bag => "bags",
            PackageKind::Tub => "tubs",
        }
    }
}

/// One adhesive product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdhesiveProduct {
    /// Lookup key (kebab-case)
    pub key: String,
    /// Display name
    pub name: String,
    pub dry_wall_rate_kg_per_m2: f64,
    pub wet_area_rate_kg_per_m2: f64,
    /// Pack size (kg)
    pub bag_size_kg: f64,
    #[serde(default)]
    pub package: PackageKind,
}

impl AdhesiveProduct {
    fn new(key: &str, name: &str, dry: f64, wet: f64, bag_size_kg: f64, package: PackageKind) -> Self {
        AdhesiveProduct {
            key: key.to_string(),
            name: name.to_string(),
            dry_wall_rate_kg_per_m2: dry,
            wet_area_rate_kg_per_m2: wet,
            bag_size_kg,
            package,
        }
    }

    /// Coverage rate for an application
    pub fn rate_for(&self, application: ApplicationType) -> f64 {
        match application {
            ApplicationType::DryWall => self.dry_wall_rate_kg_per_m2,
            ApplicationType::WetArea => self.wet_area_rate_kg_per_m2,
        }
    }
}

/// Built-in adhesive catalog.
pub fn default_catalog() -> Vec<AdhesiveProduct> {
    vec![
        AdhesiveProduct::new(
            "standard-set-flexible",
            "Standard-set flexible powder (S1)",
            3.5,
            4.0,
            20.0,
            PackageKind::Bag,
        ),
        AdhesiveProduct::new(
            "rapid-set-flexible",
            "Rapid-set flexible powder (S1)",
            3.5,
            4.5,
            20.0,
            PackageKind::Bag,
        ),
        AdhesiveProduct::new(
            "large-format-flexible",
            "Large-format highly flexible powder (S2)",
            5.0,
            5.5,
            20.0,
            PackageKind::Bag,
        ),
        AdhesiveProduct::new(
            "ready-mixed-paste",
            "Ready-mixed wall tile paste",
            1.5,
            2.0,
            15.0,
            PackageKind::Tub,
        ),
    ]
}

/// Find a product by key (case-insensitive).
pub fn find_product<'a>(catalog: &'a [AdhesiveProduct], key: &str) -> CalcResult<&'a AdhesiveProduct> {
    catalog
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(key.trim()))
        .ok_or_else(|| CalcError::product_not_found(key))
}
