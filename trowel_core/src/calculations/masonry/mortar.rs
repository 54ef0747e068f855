//! Mortar volume and its cement/sand split.
//!
//! ```text
//! wet  = net_area * rate(wall_type) * (1 + waste/100)
//! dry  = wet * bulking factor
//! cement_kg = dry * 1/(S+1) * cement density      -> 25 kg bags
//! sand_kg   = dry * S/(S+1) * sand density        -> jumbo or large bags
//! ```

use serde::{Deserialize, Serialize};

use super::{MortarMixRatio, SandBagSize, WallType};
use crate::errors::CalcResult;
use crate::rounding::{packages_needed, require_positive, wastage_multiplier};
use crate::settings::DEFAULT_SETTINGS;

/// Wet mortar per m² of half-brick wall (m³)
pub const MORTAR_HALF_BRICK_M3_PER_M2: f64 = 0.043;
/// Wet mortar per m² of one-brick wall (m³)
pub const MORTAR_ONE_BRICK_M3_PER_M2: f64 = 0.086;
/// Wet mortar per m² of blockwork (m³)
pub const MORTAR_BLOCKWORK_M3_PER_M2: f64 = 0.011;

/// Wet mortar per m² of wall face (m³). Cavity walls need both leaves.
pub fn mortar_m3_per_m2(wall_type: WallType) -> f64 {
    match wall_type {
        WallType::HalfBrick => MORTAR_HALF_BRICK_M3_PER_M2,
        WallType::OneBrick => MORTAR_ONE_BRICK_M3_PER_M2,
        WallType::Blockwork => MORTAR_BLOCKWORK_M3_PER_M2,
        WallType::Cavity => MORTAR_HALF_BRICK_M3_PER_M2 + MORTAR_BLOCKWORK_M3_PER_M2,
    }
}

/// Material constants for mortar proportioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortarSettings {
    /// Dry volume of loose materials per unit of wet mortar
    pub dry_bulking_factor: f64,
    /// Bulk density of cement (kg/m³)
    pub cement_density_kg_m3: f64,
    /// Bulk density of building sand (kg/m³)
    pub sand_density_kg_m3: f64,
    /// Cement bag size (kg)
    pub cement_bag_kg: f64,
}

impl Default for MortarSettings {
    fn default() -> Self {
        MortarSettings {
            dry_bulking_factor: 1.33,
            cement_density_kg_m3: 1440.0,
            sand_density_kg_m3: 1600.0,
            cement_bag_kg: 25.0,
        }
    }
}

impl MortarSettings {
    pub fn validate(&self) -> CalcResult<()> {
        require_positive(
            "mortar.dry_bulking_factor",
            self.dry_bulking_factor,
            "Dry bulking factor must be greater than zero.",
        )?;
        require_positive(
            "mortar.cement_density_kg_m3",
            self.cement_density_kg_m3,
            "Cement density must be greater than zero.",
        )?;
        require_positive(
            "mortar.sand_density_kg_m3",
            self.sand_density_kg_m3,
            "Sand density must be greater than zero.",
        )?;
        require_positive(
            "mortar.cement_bag_kg",
            self.cement_bag_kg,
            "Cement bag size must be greater than zero.",
        )?;
        Ok(())
    }
}

/// Mortar quantities for a wall
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MortarResult {
    /// Mixed mortar volume including waste (m³)
    pub wet_volume_m3: f64,
    /// Loose dry materials before mixing (m³)
    pub dry_volume_m3: f64,
    pub cement_kg: f64,
    pub cement_bags: u32,
    pub sand_kg: f64,
    pub sand_tonnes: f64,
    pub sand_bags: u32,
    pub sand_bag_size_kg: f64,
}

/// Mortar for `net_area_m2` of wall with the default constants.
pub fn calculate_mortar(
    net_area_m2: f64,
    wall_type: WallType,
    mix_ratio: MortarMixRatio,
    wastage_percent: f64,
    sand_bag_size: SandBagSize,
) -> CalcResult<MortarResult> {
    calculate_mortar_with(
        net_area_m2,
        wall_type,
        mix_ratio,
        wastage_percent,
        sand_bag_size,
        &DEFAULT_SETTINGS.mortar,
    )
}

/// Mortar for `net_area_m2` of wall.
pub fn calculate_mortar_with(
    net_area_m2: f64,
    wall_type: WallType,
    mix_ratio: MortarMixRatio,
    wastage_percent: f64,
    sand_bag_size: SandBagSize,
    settings: &MortarSettings,
) -> CalcResult<MortarResult> {
    let wet_volume_m3 = net_area_m2 * mortar_m3_per_m2(wall_type) * wastage_multiplier(wastage_percent);
    let dry_volume_m3 = wet_volume_m3 * settings.dry_bulking_factor;

    let cement_kg = dry_volume_m3 * mix_ratio.cement_fraction() * settings.cement_density_kg_m3;
    let sand_kg = dry_volume_m3 * mix_ratio.sand_fraction() * settings.sand_density_kg_m3;
    let sand_bag_size_kg = sand_bag_size.kg();

    Ok(MortarResult {
        wet_volume_m3,
        dry_volume_m3,
        cement_kg,
        cement_bags: packages_needed(cement_kg, settings.cement_bag_kg)?,
        sand_kg,
        sand_tonnes: sand_kg / 1000.0,
        sand_bags: packages_needed(sand_kg, sand_bag_size_kg)?,
        sand_bag_size_kg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn mortar(area: f64, wall_type: WallType, mix: MortarMixRatio, waste: f64) -> MortarResult {
        calculate_mortar(area, wall_type, mix, waste, SandBagSize::Jumbo).unwrap()
    }

    #[test]
    fn test_wet_volume_per_wall_type() {
        let mix = MortarMixRatio::OneToFour;
        assert_abs_diff_eq!(mortar(10.0, WallType::HalfBrick, mix, 0.0).wet_volume_m3, 0.43, epsilon = 1e-9);
        assert_abs_diff_eq!(mortar(10.0, WallType::OneBrick, mix, 0.0).wet_volume_m3, 0.86, epsilon = 1e-9);
        assert_abs_diff_eq!(mortar(10.0, WallType::Blockwork, mix, 0.0).wet_volume_m3, 0.11, epsilon = 1e-9);
        // brick leaf + block leaf
        assert_abs_diff_eq!(mortar(10.0, WallType::Cavity, mix, 0.0).wet_volume_m3, 0.54, epsilon = 1e-9);
    }

    #[test]
    fn test_one_to_four_split() {
        // dry = 0.43 * 1.33 = 0.5719; cement = 0.5719 / 5 * 1440 = 164.7 kg
        let result = mortar(10.0, WallType::HalfBrick, MortarMixRatio::OneToFour, 0.0);
        assert_abs_diff_eq!(result.dry_volume_m3, 0.5719, epsilon = 1e-9);
        assert_abs_diff_eq!(result.cement_kg, 164.7072, epsilon = 1e-6);
        assert_eq!(result.cement_bags, 7);
        // sand = 0.5719 * 4/5 * 1600 = 732.0 kg
        assert_abs_diff_eq!(result.sand_kg, 732.032, epsilon = 1e-6);
        assert_abs_diff_eq!(result.sand_tonnes, 0.732032, epsilon = 1e-9);
        assert_eq!(result.sand_bags, 1);
    }

    #[test]
    fn test_mortar_waste() {
        let result = mortar(10.0, WallType::HalfBrick, MortarMixRatio::OneToFour, 10.0);
        assert_abs_diff_eq!(result.wet_volume_m3, 0.473, epsilon = 1e-9);
    }

    #[test]
    fn test_richer_mix_needs_more_cement() {
        let rich = mortar(10.0, WallType::HalfBrick, MortarMixRatio::OneToThree, 0.0);
        let weak = mortar(10.0, WallType::HalfBrick, MortarMixRatio::OneToSix, 0.0);
        assert!(rich.cement_bags > weak.cement_bags);

        for wall_type in WallType::ALL {
            for area in [1.0, 12.0, 57.5] {
                let bags: Vec<u32> = MortarMixRatio::ALL
                    .iter()
                    .map(|mix| mortar(area, wall_type, *mix, 10.0).cement_bags)
                    .collect();
                assert!(bags.windows(2).all(|pair| pair[0] >= pair[1]), "{:?}", bags);
            }
        }
    }

    #[test]
    fn test_large_sand_bags() {
        let result = calculate_mortar(
            10.0,
            WallType::HalfBrick,
            MortarMixRatio::OneToFour,
            0.0,
            SandBagSize::Large,
        )
        .unwrap();
        assert_eq!(result.sand_bag_size_kg, 35.0);
        // 732.032 / 35 = 20.9
        assert_eq!(result.sand_bags, 21);
    }

    #[test]
    fn test_zero_area_zero_bags() {
        let result = mortar(0.0, WallType::Cavity, MortarMixRatio::OneToFour, 10.0);
        assert_eq!(result.cement_bags, 0);
        assert_eq!(result.sand_bags, 0);
        assert_eq!(result.wet_volume_m3, 0.0);
    }

    #[test]
    fn test_custom_settings() {
        let settings = MortarSettings {
            cement_bag_kg: 20.0,
            ..MortarSettings::default()
        };
        let result = calculate_mortar_with(
            10.0,
            WallType::HalfBrick,
            MortarMixRatio::OneToFour,
            0.0,
            SandBagSize::Jumbo,
            &settings,
        )
        .unwrap();
        // 164.7 / 20 = 8.2
        assert_eq!(result.cement_bags, 9);
        assert!(settings.validate().is_ok());

        let broken = MortarSettings {
            sand_density_kg_m3: 0.0,
            ..MortarSettings::default()
        };
        assert_eq!(
            broken.validate().unwrap_err().to_string(),
            "Sand density must be greater than zero."
        );
    }
}
