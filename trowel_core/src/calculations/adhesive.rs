//! # Adhesive Estimator
//!
//! Kilograms of tile adhesive, and the bags or tubs to buy, for a tiled area.
//!
//! There is one formula:
//!
//! ```text
//! rate = base_rate * (1.2 if the substrate is uneven)
//! kg   = area * rate * (1 + wastage/100)
//! bags = ceil(kg / bag_size)
//! ```
//!
//! and several ways of choosing `base_rate`, selected by [`CoverageSource`]:
//!
//! | Source      | Base rate                                              |
//! |-------------|--------------------------------------------------------|
//! | `fixed`     | Given directly (from a product data sheet)             |
//! | `tile-size` | Banded on the longest tile edge (2.0 / 3.5 / 5.0 / 5.5)|
//! | `product`   | Catalog rate for a dry-wall or wet-area application    |
//! | `bed-depth` | 2.0 kg/m² at a 3 mm bed, scaled linearly with depth    |
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::calculations::adhesive::{calculate, AdhesiveInput, CoverageSource, Substrate};
//!
//! let input = AdhesiveInput {
//!     label: "Bathroom walls".to_string(),
//!     area_m2: 10.0,
//!     coverage: CoverageSource::TileSize { largest_edge_mm: 300.0 },
//!     bag_size_kg: Some(20.0),
//!     substrate: Substrate::Even,
//!     wastage_percent: 10.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.base_rate_kg_per_m2, 3.5);
//! assert_eq!(result.bags_needed, 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::adhesives::{default_catalog, find_product, AdhesiveProduct, ApplicationType, PackageKind};
use crate::rounding::{packages_needed, require_positive, require_wastage, wastage_multiplier};
use crate::settings::DEFAULT_SETTINGS;

/// Condition of the surface being tiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Substrate {
    #[default]
    Even,
    /// Needs a thicker bed to take up the irregularities
    Uneven,
}

/// Where the base coverage rate comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "kebab-case")]
pub enum CoverageSource {
    /// Explicit rate (kg/m²)
    Fixed { kg_per_m2: f64 },
    /// Rate banded on the longest tile edge
    TileSize { largest_edge_mm: f64 },
    /// Catalog product
    Product {
        product: String,
        #[serde(default)]
        application: ApplicationType,
    },
    /// Rate scaled by bed depth (solid-bed fixing)
    BedDepth { bed_depth_mm: f64 },
}

/// One row of the tile-size coverage table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageBand {
    /// Inclusive upper bound on the longest tile edge (mm)
    pub up_to_mm: f64,
    pub kg_per_m2: f64,
}

/// Adhesive rates and catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdhesiveSettings {
    /// Rate multiplier for uneven substrates
    pub uneven_substrate_factor: f64,
    /// Tile-size bands, ascending by `up_to_mm`
    pub size_bands: Vec<CoverageBand>,
    /// Rate for tiles larger than the last band
    pub oversize_kg_per_m2: f64,
    /// Rate at the reference bed depth
    pub bed_depth_base_kg_per_m2: f64,
    pub bed_depth_reference_mm: f64,
    pub products: Vec<AdhesiveProduct>,
}

impl Default for AdhesiveSettings {
    fn default() -> Self {
        AdhesiveSettings {
            uneven_substrate_factor: 1.2,
            size_bands: vec![
                CoverageBand { up_to_mm: 200.0, kg_per_m2: 2.0 },
                CoverageBand { up_to_mm: 400.0, kg_per_m2: 3.5 },
                CoverageBand { up_to_mm: 600.0, kg_per_m2: 5.0 },
            ],
            oversize_kg_per_m2: 5.5,
            bed_depth_base_kg_per_m2: 2.0,
            bed_depth_reference_mm: 3.0,
            products: default_catalog(),
        }
    }
}

impl AdhesiveSettings {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive(
            "adhesive.uneven_substrate_factor",
            self.uneven_substrate_factor,
            "Uneven substrate factor must be greater than zero.",
        )?;
        require_positive(
            "adhesive.oversize_kg_per_m2",
            self.oversize_kg_per_m2,
            "Coverage rate must be greater than zero.",
        )?;
        require_positive(
            "adhesive.bed_depth_base_kg_per_m2",
            self.bed_depth_base_kg_per_m2,
            "Coverage rate must be greater than zero.",
        )?;
        require_positive(
            "adhesive.bed_depth_reference_mm",
            self.bed_depth_reference_mm,
            "Bed depth must be greater than zero.",
        )?;

        let mut previous = 0.0;
        for (i, band) in self.size_bands.iter().enumerate() {
            let field = format!("adhesive.size_bands[{}]", i);
            require_positive(&field, band.kg_per_m2, "Coverage rate must be greater than zero.")?;
            if band.up_to_mm <= previous {
                return Err(CalcError::invalid_input(
                    field,
                    band.up_to_mm.to_string(),
                    "Coverage bands must be in ascending order of tile size.",
                ));
            }
            previous = band.up_to_mm;
        }

        for (i, product) in self.products.iter().enumerate() {
            let field = format!("adhesive.products[{}]", i);
            require_positive(&field, product.dry_wall_rate_kg_per_m2, "Coverage rate must be greater than zero.")?;
            require_positive(&field, product.wet_area_rate_kg_per_m2, "Coverage rate must be greater than zero.")?;
            require_positive(&field, product.bag_size_kg, "Bag size must be greater than zero.")?;
        }
        Ok(())
    }

    /// Base rate for a tile whose longest edge is `edge_mm`.
    pub fn rate_for_tile_size(&self, edge_mm: f64) -> f64 {
        self.size_bands
            .iter()
            .find(|band| edge_mm <= band.up_to_mm)
            .map_or(self.oversize_kg_per_m2, |band| band.kg_per_m2)
    }

    /// Base rate for a bed of `depth_mm`.
    pub fn rate_for_bed_depth(&self, depth_mm: f64) -> f64 {
        self.bed_depth_base_kg_per_m2 * (depth_mm / self.bed_depth_reference_mm)
    }
}

/// Input parameters for an adhesive estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Shower enclosure",
///   "area_m2": 6.5,
///   "coverage": { "source": "product", "product": "rapid-set-flexible", "application": "wet-area" },
///   "substrate": "uneven",
///   "wastage_percent": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdhesiveInput {
    #[serde(default)]
    pub label: String,
    /// Tiled area (m²)
    pub area_m2: f64,
    pub coverage: CoverageSource,
    /// Bag or tub size (kg). Optional when a catalog product supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bag_size_kg: Option<f64>,
    #[serde(default)]
    pub substrate: Substrate,
    pub wastage_percent: f64,
}

/// Adhesive estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdhesiveResult {
    /// Adhesive including substrate factor and wastage (kg)
    pub kg_needed: f64,
    pub bags_needed: u32,
    pub bag_size_kg: f64,
    pub package: PackageKind,
    /// Rate before the substrate factor (kg/m²)
    pub base_rate_kg_per_m2: f64,
    /// Rate actually applied (kg/m²)
    pub coverage_rate_kg_per_m2: f64,
}

/// Resolved rate, pack size and packaging for an input.
struct RateSource {
    base_rate: f64,
    bag_size_kg: Option<f64>,
    package: PackageKind,
}

fn resolve_rate(coverage: &CoverageSource, settings: &AdhesiveSettings) -> CalcResult<RateSource> {
    let manual = |base_rate| RateSource {
        base_rate,
        bag_size_kg: None,
        package: PackageKind::Bag,
    };

    match coverage {
        CoverageSource::Fixed { kg_per_m2 } => {
            require_positive("coverage.kg_per_m2", *kg_per_m2, "Coverage rate must be greater than zero.")?;
            Ok(manual(*kg_per_m2))
        }
        CoverageSource::TileSize { largest_edge_mm } => {
            require_positive(
                "coverage.largest_edge_mm",
                *largest_edge_mm,
                "Tile size must be greater than zero.",
            )?;
            Ok(manual(settings.rate_for_tile_size(*largest_edge_mm)))
        }
        CoverageSource::Product { product, application } => {
            let found = find_product(&settings.products, product)?;
            Ok(RateSource {
                base_rate: found.rate_for(*application),
                bag_size_kg: Some(found.bag_size_kg),
                package: found.package,
            })
        }
        CoverageSource::BedDepth { bed_depth_mm } => {
            require_positive(
                "coverage.bed_depth_mm",
                *bed_depth_mm,
                "Bed depth must be greater than zero.",
            )?;
            Ok(manual(settings.rate_for_bed_depth(*bed_depth_mm)))
        }
    }
}

/// Estimate adhesive with the default rates and catalog.
pub fn calculate(input: &AdhesiveInput) -> CalcResult<AdhesiveResult> {
    calculate_with(input, &DEFAULT_SETTINGS.adhesive)
}

/// Estimate adhesive.
///
/// An explicit `bag_size_kg` overrides the product's pack size.
///
/// # Errors
///
/// * `InvalidInput` for a non-positive area, rate, tile size, bed depth or
///   bag size, or wastage outside 0-100
/// * `ProductNotFound` for an unknown catalog key
/// * `MissingField` if no bag size is given and the source has none
pub fn calculate_with(input: &AdhesiveInput, settings: &AdhesiveSettings) -> CalcResult<AdhesiveResult> {
    require_positive("area_m2", input.area_m2, "Area must be greater than zero.")?;
    let source = resolve_rate(&input.coverage, settings)?;
    // catalog and band rates are only checked by `AdhesiveSettings::validate`
    require_positive("coverage", source.base_rate, "Coverage rate must be greater than zero.")?;
    if let Some(bag) = input.bag_size_kg {
        require_positive("bag_size_kg", bag, "Bag size must be greater than zero.")?;
    }
    require_wastage("wastage_percent", input.wastage_percent)?;

    let bag_size_kg = input
        .bag_size_kg
        .or(source.bag_size_kg)
        .ok_or_else(|| CalcError::missing_field("bag_size_kg"))?;

    let coverage_rate = match input.substrate {
        Substrate::Even => source.base_rate,
        Substrate::Uneven => source.base_rate * settings.uneven_substrate_factor,
    };
    let kg_needed = input.area_m2 * coverage_rate * wastage_multiplier(input.wastage_percent);
    let bags_needed = packages_needed(kg_needed, bag_size_kg)?;

    tracing::debug!(
        label = %input.label,
        area_m2 = input.area_m2,
        coverage_rate,
        kg_needed,
        bags_needed,
        "adhesive estimate"
    );

    Ok(AdhesiveResult {
        kg_needed,
        bags_needed,
        bag_size_kg,
        package: source.package,
        base_rate_kg_per_m2: source.base_rate,
        coverage_rate_kg_per_m2: coverage_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn by_tile_size(area: f64, edge: f64, wastage: f64) -> AdhesiveInput {
        AdhesiveInput {
            label: String::new(),
            area_m2: area,
            coverage: CoverageSource::TileSize { largest_edge_mm: edge },
            bag_size_kg: Some(20.0),
            substrate: Substrate::Even,
            wastage_percent: wastage,
        }
    }

    #[test]
    fn test_small_tiles() {
        let result = calculate(&by_tile_size(10.0, 150.0, 10.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 22.0, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 2);
        assert_eq!(result.coverage_rate_kg_per_m2, 2.0);
    }

    #[test]
    fn test_medium_tiles() {
        let result = calculate(&by_tile_size(10.0, 300.0, 10.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 38.5, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 2);
        assert_eq!(result.coverage_rate_kg_per_m2, 3.5);
    }

    #[test]
    fn test_large_tiles() {
        let result = calculate(&by_tile_size(15.0, 500.0, 5.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 78.75, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 4);
    }

    #[test]
    fn test_extra_large_tiles() {
        let result = calculate(&by_tile_size(8.0, 900.0, 10.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 48.4, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 3);
        assert_eq!(result.coverage_rate_kg_per_m2, 5.5);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let settings = AdhesiveSettings::default();
        assert_eq!(settings.rate_for_tile_size(200.0), 2.0);
        assert_eq!(settings.rate_for_tile_size(200.5), 3.5);
        assert_eq!(settings.rate_for_tile_size(400.0), 3.5);
        assert_eq!(settings.rate_for_tile_size(600.0), 5.0);
        assert_eq!(settings.rate_for_tile_size(601.0), 5.5);
    }

    #[test]
    fn test_zero_wastage() {
        let result = calculate(&by_tile_size(10.0, 300.0, 0.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 35.0, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 2);
    }

    #[test]
    fn test_uneven_substrate() {
        let input = AdhesiveInput {
            substrate: Substrate::Uneven,
            ..by_tile_size(10.0, 300.0, 10.0)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.base_rate_kg_per_m2, 3.5);
        assert_abs_diff_eq!(result.coverage_rate_kg_per_m2, 4.2, epsilon = 1e-9);
        // 10 * 4.2 * 1.1 = 46.2
        assert_abs_diff_eq!(result.kg_needed, 46.2, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 3);
    }

    #[test]
    fn test_uneven_substrate_fixed_rate() {
        let input = AdhesiveInput {
            coverage: CoverageSource::Fixed { kg_per_m2: 4.0 },
            substrate: Substrate::Uneven,
            ..by_tile_size(10.0, 300.0, 10.0)
        };
        let result = calculate(&input).unwrap();
        assert_abs_diff_eq!(result.coverage_rate_kg_per_m2, 4.8, epsilon = 1e-9);
        // 10 * 4.8 * 1.1 = 52.8
        assert_abs_diff_eq!(result.kg_needed, 52.8, epsilon = 1e-9);
        assert_eq!(result.bag_size_kg, 20.0);
        assert_eq!(result.bags_needed, 3);
    }

    #[test]
    fn test_zero_rate_product_rejected_without_validate() {
        let settings = AdhesiveSettings {
            products: vec![AdhesiveProduct {
                key: "broken".to_string(),
                name: "Broken".to_string(),
                dry_wall_rate_kg_per_m2: 0.0,
                wet_area_rate_kg_per_m2: 0.0,
                bag_size_kg: 20.0,
                package: PackageKind::Bag,
            }],
            ..AdhesiveSettings::default()
        };
        let input = AdhesiveInput {
            coverage: CoverageSource::Product {
                product: "broken".to_string(),
                application: ApplicationType::DryWall,
            },
            bag_size_kg: None,
            ..by_tile_size(10.0, 300.0, 10.0)
        };
        let err = calculate_with(&input, &settings).unwrap_err();
        assert_eq!(err.to_string(), "Coverage rate must be greater than zero.");
        assert_eq!(err.field(), Some("coverage"));
    }

    #[test]
    fn test_fixed_rate() {
        let input = AdhesiveInput {
            coverage: CoverageSource::Fixed { kg_per_m2: 4.0 },
            ..by_tile_size(10.0, 300.0, 10.0)
        };
        let result = calculate(&input).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 44.0, epsilon = 1e-9);
        assert_eq!(result.bags_needed, 3);

        let zero = AdhesiveInput {
            coverage: CoverageSource::Fixed { kg_per_m2: 0.0 },
            ..input
        };
        assert_eq!(
            calculate(&zero).unwrap_err().to_string(),
            "Coverage rate must be greater than zero."
        );
    }

    #[test]
    fn test_bed_depth_scales_linearly() {
        let input = AdhesiveInput {
            coverage: CoverageSource::BedDepth { bed_depth_mm: 6.0 },
            ..by_tile_size(10.0, 300.0, 0.0)
        };
        let result = calculate(&input).unwrap();
        assert_abs_diff_eq!(result.base_rate_kg_per_m2, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.kg_needed, 40.0, epsilon = 1e-9);

        let err = calculate(&AdhesiveInput {
            coverage: CoverageSource::BedDepth { bed_depth_mm: 0.0 },
            ..input
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Bed depth must be greater than zero.");
    }

    #[test]
    fn test_product_supplies_bag_size() {
        let input = AdhesiveInput {
            coverage: CoverageSource::Product {
                product: "ready-mixed-paste".to_string(),
                application: ApplicationType::DryWall,
            },
            bag_size_kg: None,
            ..by_tile_size(10.0, 300.0, 0.0)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.bag_size_kg, 15.0);
        assert_eq!(result.package, PackageKind::Tub);
        // 10 * 1.5 = 15 kg, exactly one tub
        assert_eq!(result.bags_needed, 1);

        let overridden = calculate(&AdhesiveInput {
            bag_size_kg: Some(5.0),
            ..input
        })
        .unwrap();
        assert_eq!(overridden.bags_needed, 3);
    }

    #[test]
    fn test_wet_area_rate() {
        let input = AdhesiveInput {
            coverage: CoverageSource::Product {
                product: "standard-set-flexible".to_string(),
                application: ApplicationType::WetArea,
            },
            bag_size_kg: None,
            ..by_tile_size(10.0, 300.0, 0.0)
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.base_rate_kg_per_m2, 4.0);
        assert_eq!(result.bags_needed, 2);
    }

    #[test]
    fn test_unknown_product() {
        let input = AdhesiveInput {
            coverage: CoverageSource::Product {
                product: "mystery-gunk".to_string(),
                application: ApplicationType::DryWall,
            },
            ..by_tile_size(10.0, 300.0, 0.0)
        };
        let err = calculate(&input).unwrap_err();
        assert!(matches!(err, CalcError::ProductNotFound { .. }));
    }

    #[test]
    fn test_missing_bag_size() {
        let input = AdhesiveInput {
            bag_size_kg: None,
            ..by_tile_size(10.0, 300.0, 0.0)
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::missing_field("bag_size_kg"));
    }

    #[test]
    fn test_invalid_inputs() {
        let err = calculate(&by_tile_size(0.0, 300.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Area must be greater than zero.");

        let err = calculate(&by_tile_size(10.0, -100.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Tile size must be greater than zero.");

        let err = calculate(&AdhesiveInput {
            bag_size_kg: Some(0.0),
            ..by_tile_size(10.0, 300.0, 10.0)
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Bag size must be greater than zero.");

        let err = calculate(&by_tile_size(10.0, 300.0, 101.0)).unwrap_err();
        assert_eq!(err.to_string(), "Wastage must be between 0 and 100.");
    }

    #[test]
    fn test_settings_validation() {
        assert!(AdhesiveSettings::default().validate().is_ok());

        let mut unordered = AdhesiveSettings::default();
        unordered.size_bands.swap(0, 1);
        let err = unordered.validate().unwrap_err();
        assert_eq!(err.field(), Some("adhesive.size_bands[1]"));
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "area_m2": 6.5,
            "coverage": { "source": "product", "product": "rapid-set-flexible", "application": "wet-area" },
            "substrate": "uneven",
            "wastage_percent": 10.0
        }"#;
        let input: AdhesiveInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.bag_size_kg, None);
        let result = calculate(&input).unwrap();
        assert_eq!(result.base_rate_kg_per_m2, 4.5);

        let tile_size: CoverageSource =
            serde_json::from_str(r#"{ "source": "tile-size", "largest_edge_mm": 600 }"#).unwrap();
        assert_eq!(tile_size, CoverageSource::TileSize { largest_edge_mm: 600.0 });
    }
}
