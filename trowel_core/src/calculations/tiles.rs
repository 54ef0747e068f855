//! # Tile Estimator
//!
//! Whole tiles needed to cover a rectangular area, with a wastage allowance
//! for cuts and breakages.
//!
//! ```text
//! raw   = (width * height) / (tile_w/1000 * tile_h/1000)
//! tiles = ceil(raw * (1 + wastage/100))
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::calculations::tiles::{calculate, TileInput};
//!
//! let input = TileInput {
//!     label: "Kitchen floor".to_string(),
//!     area_width_m: 3.0,
//!     area_height_m: 2.4,
//!     tile_width_mm: 300.0,
//!     tile_height_mm: 300.0,
//!     wastage_percent: 10.0,
//!     pack_size: Some(10),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.tiles_needed, 88);
//! assert_eq!(result.packs_needed, Some(9));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::rounding::{ceil_safe, packages_needed, require_positive, require_wastage, wastage_multiplier};

/// Input parameters for a tile count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileInput {
    #[serde(default)]
    pub label: String,
    /// Area width (m)
    pub area_width_m: f64,
    /// Area height or length (m)
    pub area_height_m: f64,
    pub tile_width_mm: f64,
    pub tile_height_mm: f64,
    /// Allowance for cuts and breakages (%)
    pub wastage_percent: f64,
    /// Tiles per box, when buying by the box
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_size: Option<u32>,
}

impl TileInput {
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("area_width_m", self.area_width_m),
            ("area_height_m", self.area_height_m),
        ] {
            require_positive(field, value, "Area dimensions must be greater than zero.")?;
        }
        for (field, value) in [
            ("tile_width_mm", self.tile_width_mm),
            ("tile_height_mm", self.tile_height_mm),
        ] {
            require_positive(field, value, "Tile dimensions must be greater than zero.")?;
        }
        require_wastage("wastage_percent", self.wastage_percent)?;
        if self.pack_size == Some(0) {
            return Err(CalcError::invalid_input(
                "pack_size",
                "0",
                "Pack size must be greater than zero.",
            ));
        }
        Ok(())
    }

    /// Area to cover (m²)
    pub fn area_m2(&self) -> f64 {
        self.area_width_m * self.area_height_m
    }

    /// Face area of one tile (m²)
    pub fn tile_area_m2(&self) -> f64 {
        (self.tile_width_mm / 1000.0) * (self.tile_height_mm / 1000.0)
    }
}

/// Tile count for an area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileResult {
    /// Tiles to buy, including wastage
    pub tiles_needed: u32,
    /// Area covered (m²)
    pub coverage_area_m2: f64,
    /// Tiles attributable to the wastage allowance alone
    pub wastage_tiles: u32,
    /// Boxes to buy, if a pack size was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packs_needed: Option<u32>,
}

/// Count tiles for a rectangular area.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] for non-positive area or tile
/// dimensions, wastage outside 0-100, or a zero pack size.
pub fn calculate(input: &TileInput) -> CalcResult<TileResult> {
    input.validate()?;

    let coverage_area_m2 = input.area_m2();
    let raw_tiles = coverage_area_m2 / input.tile_area_m2();

    let tiles_needed = ceil_safe(raw_tiles * wastage_multiplier(input.wastage_percent))?;
    let wastage_tiles = ceil_safe(raw_tiles * (input.wastage_percent / 100.0))?;
    let packs_needed = input
        .pack_size
        .map(|pack| packages_needed(f64::from(tiles_needed), f64::from(pack)))
        .transpose()?;

    tracing::debug!(
        label = %input.label,
        area_m2 = coverage_area_m2,
        raw_tiles,
        tiles_needed,
        "tile count"
    );

    Ok(TileResult {
        tiles_needed,
        coverage_area_m2,
        wastage_tiles,
        packs_needed,
    })
}
