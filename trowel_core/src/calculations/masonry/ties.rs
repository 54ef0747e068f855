//! Cavity wall ties.

use serde::{Deserialize, Serialize};

use super::Opening;
use crate::errors::CalcResult;
use crate::rounding::{ceil_safe, sum_counts};

/// Ties per m² across the cavity field
pub const TIES_PER_M2: f64 = 2.5;
/// Extra tie spacing around an opening's perimeter (m)
pub const OPENING_TIE_SPACING_M: f64 = 0.3;

/// Wall tie counts. All zero for single-leaf walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallTiesResult {
    pub general: u32,
    pub at_openings: u32,
    pub total: u32,
}

/// Ties for a cavity wall: 2.5/m² plus one every 300 mm around each opening.
pub fn calculate_wall_ties(net_area_m2: f64, openings: &[Opening]) -> CalcResult<WallTiesResult> {
    let general = ceil_safe(net_area_m2 * TIES_PER_M2)?;
    let per_opening = openings
        .iter()
        .map(|opening| ceil_safe(opening.perimeter_m() / OPENING_TIE_SPACING_M))
        .collect::<CalcResult<Vec<u32>>>()?;
    let at_openings = sum_counts(per_opening)?;

    Ok(WallTiesResult {
        general,
        at_openings,
        total: sum_counts([general, at_openings])?,
    })
}
