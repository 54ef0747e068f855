//! Common tile sizes, joint widths and spacer sizes offered as presets.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Nominal tile face size in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl TileSize {
    pub const fn new(width_mm: f64, height_mm: f64) -> Self {
        TileSize { width_mm, height_mm }
    }

    /// Face area (m²)
    pub fn area_m2(&self) -> f64 {
        (self.width_mm / 1000.0) * (self.height_mm / 1000.0)
    }

    /// Longest edge (mm), used to pick an adhesive coverage band
    pub fn largest_edge_mm(&self) -> f64 {
        self.width_mm.max(self.height_mm)
    }

    /// Parse "WxH" in millimetres, e.g. "300x600" or "300 × 600".
    pub fn parse(s: &str) -> CalcResult<Self> {
        let invalid = || {
            CalcError::invalid_input(
                "tile_size",
                s,
                "Tile size must be written as WIDTHxHEIGHT in millimetres.",
            )
        };
        let normalized = s.trim().to_ascii_lowercase().replace('×', "x");
        let (w, h) = normalized.split_once('x').ok_or_else(invalid)?;
        let width_mm: f64 = w.trim().parse().map_err(|_| invalid())?;
        let height_mm: f64 = h.trim().parse().map_err(|_| invalid())?;
        Ok(TileSize::new(width_mm, height_mm))
    }
}

/// A named tile size preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePreset {
    pub key: &'static str,
    pub label: &'static str,
    pub size: TileSize,
}

/// Tile sizes stocked by most UK merchants
pub const COMMON_TILE_SIZES: &[TilePreset] = &[
    TilePreset { key: "75x245", label: "Brick metro - 75 x 245", size: TileSize::new(75.0, 245.0) },
    TilePreset { key: "100x200", label: "Metro - 100 x 200", size: TileSize::new(100.0, 200.0) },
    TilePreset { key: "150x150", label: "Small square - 150 x 150", size: TileSize::new(150.0, 150.0) },
    TilePreset { key: "200x250", label: "Small rectangular - 200 x 250", size: TileSize::new(200.0, 250.0) },
    TilePreset { key: "250x400", label: "Medium rectangular - 250 x 400", size: TileSize::new(250.0, 400.0) },
    TilePreset { key: "250x500", label: "Large rectangular - 250 x 500", size: TileSize::new(250.0, 500.0) },
    TilePreset { key: "300x300", label: "Standard square - 300 x 300", size: TileSize::new(300.0, 300.0) },
    TilePreset { key: "300x600", label: "Standard rectangular - 300 x 600", size: TileSize::new(300.0, 600.0) },
    TilePreset { key: "600x600", label: "Large square - 600 x 600", size: TileSize::new(600.0, 600.0) },
    TilePreset { key: "600x1200", label: "Extra-large rectangular - 600 x 1200", size: TileSize::new(600.0, 1200.0) },
];

/// Look up a preset by key, falling back to parsing "WxH".
pub fn tile_size(key: &str) -> CalcResult<TileSize> {
    match COMMON_TILE_SIZES.iter().find(|p| p.key == key.trim()) {
        Some(preset) => Ok(preset.size),
        None => TileSize::parse(key),
    }
}

/// Joint widths offered for grout (mm)
pub const COMMON_JOINT_WIDTHS_MM: &[f64] = &[1.5, 2.0, 3.0, 5.0, 10.0];

/// Spacer sizes sold in packs (mm)
pub const SPACER_SIZES_MM: &[f64] = &[2.0, 3.0, 4.0, 5.0];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_presets_parse_back_to_themselves() {
        for preset in COMMON_TILE_SIZES {
            assert_eq!(TileSize::parse(preset.key).unwrap(), preset.size, "{}", preset.key);
        }
    }

    #[test]
    fn test_tile_size_lookup() {
        assert_eq!(tile_size("600x1200").unwrap().largest_edge_mm(), 1200.0);
        assert_eq!(tile_size("330 × 330").unwrap(), TileSize::new(330.0, 330.0));
        assert!(tile_size("big").is_err());
    }

    #[test]
    fn test_area() {
        assert_abs_diff_eq!(TileSize::new(300.0, 300.0).area_m2(), 0.09, epsilon = 1e-12);
    }
}
