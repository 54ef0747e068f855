//! # Grout Estimator
//!
//! Grout mass from joint geometry. For a grid of `w × h` tiles the joint
//! length per m² is `(w + h) / (w · h)`; multiplied by the joint cross
//! section (width · depth) and the grout density that gives kg/m².
//!
//! ```text
//! kg_per_m2 = ((w + h) / (w * h)) * joint * depth * density
//! kg        = area * kg_per_m2 * (1 + wastage/100)
//! ```
//!
//! All tile and joint dimensions are in millimetres.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::rounding::{packages_needed, require_positive, require_wastage, wastage_multiplier};
use crate::settings::DEFAULT_SETTINGS;

/// Density for dense cementitious wall and floor grouts (kg/L)
pub const GROUT_DENSITY_DENSE: f64 = 2.0;
/// Density for lightweight standard grouts (kg/L)
pub const GROUT_DENSITY_STANDARD: f64 = 1.6;

/// Grout material constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroutSettings {
    /// Mixed grout density (kg/L)
    pub density: f64,
}

impl Default for GroutSettings {
    fn default() -> Self {
        GroutSettings {
            density: GROUT_DENSITY_DENSE,
        }
    }
}

impl GroutSettings {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("grout.density", self.density, "Grout density must be greater than zero.")
    }
}

/// Input parameters for a grout estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroutInput {
    #[serde(default)]
    pub label: String,
    pub area_m2: f64,
    pub tile_width_mm: f64,
    pub tile_height_mm: f64,
    pub joint_width_mm: f64,
    /// Tile thickness, i.e. joint depth (mm)
    pub tile_depth_mm: f64,
    pub wastage_percent: f64,
}

impl GroutInput {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("area_m2", self.area_m2, "Area must be greater than zero.")?;
        require_positive("tile_width_mm", self.tile_width_mm, "Tile dimensions must be greater than zero.")?;
        require_positive("tile_height_mm", self.tile_height_mm, "Tile dimensions must be greater than zero.")?;
        require_positive(
            "joint_width_mm",
            self.joint_width_mm,
            "Joint width and tile depth must be greater than zero.",
        )?;
        require_positive(
            "tile_depth_mm",
            self.tile_depth_mm,
            "Joint width and tile depth must be greater than zero.",
        )?;
        require_wastage("wastage_percent", self.wastage_percent)
    }
}

/// Grout estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroutResult {
    pub kg_per_m2: f64,
    /// Grout including wastage (kg)
    pub kg_needed: f64,
    pub bags_5kg: u32,
    pub bags_2_5kg: u32,
}

/// Grout consumption per m² of tiling (kg).
pub fn grout_kg_per_m2(
    tile_width_mm: f64,
    tile_height_mm: f64,
    joint_width_mm: f64,
    tile_depth_mm: f64,
    density: f64,
) -> f64 {
    ((tile_width_mm + tile_height_mm) / (tile_width_mm * tile_height_mm))
        * joint_width_mm
        * tile_depth_mm
        * density
}

/// Estimate grout with the default density.
pub fn calculate(input: &GroutInput) -> CalcResult<GroutResult> {
    calculate_with(input, &DEFAULT_SETTINGS.grout)
}

/// Estimate grout.
pub fn calculate_with(input: &GroutInput, settings: &GroutSettings) -> CalcResult<GroutResult> {
    input.validate()?;

    let kg_per_m2 = grout_kg_per_m2(
        input.tile_width_mm,
        input.tile_height_mm,
        input.joint_width_mm,
        input.tile_depth_mm,
        settings.density,
    );
    let kg_needed = input.area_m2 * kg_per_m2 * wastage_multiplier(input.wastage_percent);

    tracing::debug!(label = %input.label, kg_per_m2, kg_needed, "grout estimate");

    Ok(GroutResult {
        kg_per_m2,
        kg_needed,
        bags_5kg: packages_needed(kg_needed, 5.0)?,
        bags_2_5kg: packages_needed(kg_needed, 2.5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn input(area: f64, w: f64, h: f64, joint: f64, depth: f64, wastage: f64) -> GroutInput {
        GroutInput {
            label: String::new(),
            area_m2: area,
            tile_width_mm: w,
            tile_height_mm: h,
            joint_width_mm: joint,
            tile_depth_mm: depth,
            wastage_percent: wastage,
        }
    }

    #[test]
    fn test_standard_300_tiles() {
        // (600 / 90000) * 3 * 8 * 2.0 = 0.32 kg/m²; * 10 * 1.1 = 3.52 kg
        let result = calculate(&input(10.0, 300.0, 300.0, 3.0, 8.0, 10.0)).unwrap();
        assert_abs_diff_eq!(result.kg_per_m2, 0.32, epsilon = 1e-12);
        assert_abs_diff_eq!(result.kg_needed, 3.52, epsilon = 1e-9);
        assert_eq!(result.bags_5kg, 1);
        assert_eq!(result.bags_2_5kg, 2);
    }

    #[test]
    fn test_large_tiles_wide_joints() {
        // (1200 / 360000) * 5 * 10 * 2.0 = 0.333; * 20 * 1.1 = 7.33 kg
        let result = calculate(&input(20.0, 600.0, 600.0, 5.0, 10.0, 10.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 7.3333, epsilon = 1e-3);
        assert_eq!(result.bags_5kg, 2);
        assert_eq!(result.bags_2_5kg, 3);
    }

    #[test]
    fn test_mosaic_tiles() {
        let result = calculate(&input(5.0, 50.0, 50.0, 2.0, 4.0, 10.0)).unwrap();
        assert_abs_diff_eq!(result.kg_per_m2, 0.64, epsilon = 1e-12);
        assert_abs_diff_eq!(result.kg_needed, 3.52, epsilon = 1e-9);
        assert_eq!(result.bags_5kg, 1);
    }

    #[test]
    fn test_rectangular_tiles() {
        let result = calculate(&input(10.0, 600.0, 300.0, 3.0, 8.0, 0.0)).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 2.4, epsilon = 1e-9);
        assert_eq!(result.bags_5kg, 1);
        assert_eq!(result.bags_2_5kg, 1);
    }

    #[test]
    fn test_standard_density_setting() {
        let settings = GroutSettings {
            density: GROUT_DENSITY_STANDARD,
        };
        let result = calculate_with(&input(10.0, 300.0, 300.0, 3.0, 8.0, 10.0), &settings).unwrap();
        assert_abs_diff_eq!(result.kg_needed, 2.816, epsilon = 1e-9);
    }

    #[test]
    fn test_wider_joints_need_more_grout() {
        let narrow = calculate(&input(10.0, 300.0, 300.0, 2.0, 8.0, 10.0)).unwrap();
        let wide = calculate(&input(10.0, 300.0, 300.0, 5.0, 8.0, 10.0)).unwrap();
        assert!(wide.kg_needed > narrow.kg_needed);
    }

    #[test]
    fn test_invalid_inputs() {
        let err = calculate(&input(0.0, 300.0, 300.0, 3.0, 8.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Area must be greater than zero.");

        let err = calculate(&input(10.0, 0.0, 300.0, 3.0, 8.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Tile dimensions must be greater than zero.");

        let err = calculate(&input(10.0, 300.0, 300.0, 3.0, 0.0, 10.0)).unwrap_err();
        assert_eq!(err.to_string(), "Joint width and tile depth must be greater than zero.");
        assert_eq!(err.field(), Some("tile_depth_mm"));

        assert!(calculate(&input(10.0, 300.0, 300.0, 3.0, 8.0, -5.0)).is_err());
    }
}
