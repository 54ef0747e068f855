//! # Spacer Estimator
//!
//! Tile spacers by layout pattern. Spacers sit where joints meet, so the
//! count per tile depends on how many joints meet at each corner.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::rounding::{ceil_safe, packages_needed, require_positive, require_wastage, wastage_multiplier};

/// Tile layout pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPattern {
    /// Straight grid, cross spacers at every corner
    #[default]
    #[serde(alias = "cross")]
    Grid,
    /// Offset rows, T-junctions
    #[serde(alias = "t-junction", alias = "brick-bond")]
    Brick,
    /// Grid rotated 45°
    Diagonal,
    Herringbone,
}

impl LayoutPattern {
    pub const ALL: [LayoutPattern; 4] = [
        LayoutPattern::Grid,
        LayoutPattern::Brick,
        LayoutPattern::Diagonal,
        LayoutPattern::Herringbone,
    ];

    pub fn spacers_per_tile(&self) -> u32 {
        match self {
            LayoutPattern::Grid | LayoutPattern::Diagonal => 4,
            LayoutPattern::Brick => 3,
            LayoutPattern::Herringbone => 2,
        }
    }

    /// Typical tile wastage for the pattern (%)
    pub fn suggested_wastage_percent(&self) -> f64 {
        match self {
            LayoutPattern::Grid => 10.0,
            LayoutPattern::Brick => 12.0,
            LayoutPattern::Diagonal | LayoutPattern::Herringbone => 15.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutPattern::Grid => "Grid (cross spacers)",
            LayoutPattern::Brick => "Brick bond (T-junction spacers)",
            LayoutPattern::Diagonal => "Diagonal",
            LayoutPattern::Herringbone => "Herringbone",
        }
    }
}

impl FromStr for LayoutPattern {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().replace([' ', '_'], "-").as_str() {
            "grid" | "cross" => Ok(LayoutPattern::Grid),
            "brick" | "t-junction" | "brick-bond" | "offset" => Ok(LayoutPattern::Brick),
            "diagonal" => Ok(LayoutPattern::Diagonal),
            "herringbone" => Ok(LayoutPattern::Herringbone),
            _ => Err(CalcError::invalid_input(
                "layout",
                s,
                "Layout must be one of grid, brick, diagonal or herringbone.",
            )),
        }
    }
}

/// How many tiles are being laid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "by", rename_all = "kebab-case")]
pub enum TileQuantity {
    /// A known tile count
    Count { tiles: f64 },
    /// Derived from area and tile size
    Area {
        area_m2: f64,
        tile_width_mm: f64,
        tile_height_mm: f64,
    },
}

impl TileQuantity {
    /// Whole tile count, validated.
    pub fn resolve(&self) -> CalcResult<u32> {
        match *self {
            TileQuantity::Count { tiles } => {
                require_positive("tiles", tiles, "Number of tiles must be greater than zero.")?;
                ceil_safe(tiles)
            }
            TileQuantity::Area {
                area_m2,
                tile_width_mm,
                tile_height_mm,
            } => {
                require_positive("area_m2", area_m2, "Area must be greater than zero.")?;
                require_positive("tile_width_mm", tile_width_mm, "Tile dimensions must be greater than zero.")?;
                require_positive("tile_height_mm", tile_height_mm, "Tile dimensions must be greater than zero.")?;
                ceil_safe(area_m2 / ((tile_width_mm / 1000.0) * (tile_height_mm / 1000.0)))
            }
        }
    }
}

/// Input parameters for a spacer count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpacersInput {
    #[serde(default)]
    pub label: String,
    pub tiles: TileQuantity,
    #[serde(default)]
    pub layout: LayoutPattern,
    pub wastage_percent: f64,
}

/// Spacer count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacersResult {
    pub tile_count: u32,
    pub spacers_per_tile: u32,
    pub spacers_needed: u32,
    pub packs_100: u32,
    pub packs_250: u32,
}

/// Count spacers.
pub fn calculate(input: &SpacersInput) -> CalcResult<SpacersResult> {
    let tile_count = input.tiles.resolve()?;
    require_wastage("wastage_percent", input.wastage_percent)?;

    let spacers_per_tile = input.layout.spacers_per_tile();
    let raw = f64::from(tile_count) * f64::from(spacers_per_tile);
    let spacers_needed = ceil_safe(raw * wastage_multiplier(input.wastage_percent))?;
    let n = f64::from(spacers_needed);

    tracing::debug!(label = %input.label, tile_count, spacers_needed, "spacer count");

    Ok(SpacersResult {
        tile_count,
        spacers_per_tile,
        spacers_needed,
        packs_100: packages_needed(n, 100.0)?,
        packs_250: packages_needed(n, 250.0)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_count(tiles: f64, layout: LayoutPattern, wastage: f64) -> SpacersInput {
        SpacersInput {
            label: String::new(),
            tiles: TileQuantity::Count { tiles },
            layout,
            wastage_percent: wastage,
        }
    }

    #[test]
    fn test_grid_pattern() {
        let result = calculate(&by_count(80.0, LayoutPattern::Grid, 10.0)).unwrap();
        assert_eq!(result.spacers_needed, 352);
        assert_eq!(result.spacers_per_tile, 4);
        assert_eq!(result.packs_100, 4);
        assert_eq!(result.packs_250, 2);
    }

    #[test]
    fn test_brick_pattern() {
        let result = calculate(&by_count(80.0, LayoutPattern::Brick, 10.0)).unwrap();
        assert_eq!(result.spacers_needed, 264);
        assert_eq!(result.spacers_per_tile, 3);
    }

    #[test]
    fn test_zero_wastage() {
        let result = calculate(&by_count(100.0, LayoutPattern::Grid, 0.0)).unwrap();
        assert_eq!(result.spacers_needed, 400);
        assert_eq!(result.packs_100, 4);
    }

    #[test]
    fn test_rounds_up() {
        // 28 * 1.1 = 30.8
        let result = calculate(&by_count(7.0, LayoutPattern::Grid, 10.0)).unwrap();
        assert_eq!(result.spacers_needed, 31);
    }

    #[test]
    fn test_other_layouts() {
        assert_eq!(
            calculate(&by_count(50.0, LayoutPattern::Herringbone, 0.0)).unwrap().spacers_needed,
            100
        );
        assert_eq!(
            calculate(&by_count(50.0, LayoutPattern::Diagonal, 0.0)).unwrap().spacers_needed,
            200
        );
    }

    #[test]
    fn test_count_from_area() {
        let input = SpacersInput {
            label: String::new(),
            tiles: TileQuantity::Area {
                area_m2: 7.2,
                tile_width_mm: 300.0,
                tile_height_mm: 300.0,
            },
            layout: LayoutPattern::Grid,
            wastage_percent: 0.0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.tile_count, 80);
        assert_eq!(result.spacers_needed, 320);
    }

    #[test]
    fn test_invalid_tile_count() {
        let err = calculate(&by_count(0.0, LayoutPattern::Grid, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Number of tiles must be greater than zero.");
        assert!(calculate(&by_count(-5.0, LayoutPattern::Grid, 10.0)).is_err());
        assert!(calculate(&by_count(10.0, LayoutPattern::Grid, 150.0)).is_err());
    }

    #[test]
    fn test_layout_aliases() {
        let input: SpacersInput = serde_json::from_str(
            r#"{ "tiles": { "by": "count", "tiles": 10 }, "layout": "t-junction", "wastage_percent": 0 }"#,
        )
        .unwrap();
        assert_eq!(input.layout, LayoutPattern::Brick);
        assert_eq!("cross".parse::<LayoutPattern>().unwrap(), LayoutPattern::Grid);
        assert!("basketweave".parse::<LayoutPattern>().is_err());
    }

    #[test]
    fn test_suggested_wastage() {
        assert_eq!(LayoutPattern::Grid.suggested_wastage_percent(), 10.0);
        assert_eq!(LayoutPattern::Brick.suggested_wastage_percent(), 12.0);
        for layout in LayoutPattern::ALL {
            assert!(layout.suggested_wastage_percent() <= 15.0);
        }
    }
}
