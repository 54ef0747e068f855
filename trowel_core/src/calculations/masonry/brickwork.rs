//! Brick and block counts from net wall area.
//!
//! Rates are per m² of wall face, for standard 215 × 102.5 × 65 mm bricks
//! and 440 × 215 mm block faces laid with 10 mm joints.

use super::{BlockWidth, WallType};
use crate::errors::CalcResult;
use crate::rounding::{ceil_safe, wastage_multiplier};

/// Bricks per m² of wall face
pub fn bricks_per_m2(wall_type: WallType) -> f64 {
    match wall_type {
        WallType::HalfBrick => 60.0,
        WallType::OneBrick => 120.0,
        // outer leaf only
        WallType::Cavity => 60.0,
        WallType::Blockwork => 0.0,
    }
}

/// Blocks per m² of wall face
pub fn blocks_per_m2(wall_type: WallType) -> f64 {
    match wall_type {
        WallType::Blockwork => 10.0,
        // inner leaf only
        WallType::Cavity => 10.0,
        WallType::HalfBrick | WallType::OneBrick => 0.0,
    }
}

/// Bricks to order, including waste.
pub fn calculate_bricks(net_area_m2: f64, wall_type: WallType, wastage_percent: f64) -> CalcResult<u32> {
    ceil_safe(net_area_m2 * bricks_per_m2(wall_type) * wastage_multiplier(wastage_percent))
}

/// Blocks to order, including waste.
///
/// `block_width` does not affect the count: 100 mm and 140 mm blocks share a
/// face size. It is accepted so callers can cost the two widths separately.
pub fn calculate_blocks(
    net_area_m2: f64,
    wall_type: WallType,
    _block_width: BlockWidth,
    wastage_percent: f64,
) -> CalcResult<u32> {
    ceil_safe(net_area_m2 * blocks_per_m2(wall_type) * wastage_multiplier(wastage_percent))
}
