//! Wall geometry: net area, lintels over openings, DPC run.

use serde::{Deserialize, Serialize};

use super::{Opening, WallSection, WallType};
use crate::errors::{CalcError, CalcResult};
use crate::rounding::{require_non_negative, require_positive};

/// Lintel bearing onto the wall at each end (mm)
pub const LINTEL_END_BEARING_MM: f64 = 150.0;

/// DPC width for a half-brick wall (mm)
pub const DPC_WIDTH_HALF_BRICK_MM: f64 = 112.5;
/// DPC width for one-brick and cavity walls (mm)
pub const DPC_WIDTH_FULL_MM: f64 = 225.0;
/// DPC width used when no specific width is tabulated (mm)
pub const DPC_WIDTH_DEFAULT_MM: f64 = 100.0;

/// Gross, opening and net wall areas (m²)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WallAreaResult {
    pub gross_area_m2: f64,
    pub opening_area_m2: f64,
    /// `max(0, gross - opening)`
    pub net_area_m2: f64,
}

/// Lintel for one opening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LintelResult {
    /// Clear opening width (m)
    pub width_m: f64,
    /// Lintel length including end bearings (mm)
    pub lintel_length_mm: f64,
}

/// Damp-proof course run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DpcResult {
    /// Total wall run (m)
    pub length_m: f64,
    /// Roll width (mm)
    pub width_mm: f64,
}

/// Net wall area after deducting openings.
///
/// # Errors
///
/// * no wall sections
/// * a wall with zero, negative or non-finite length/height
/// * an opening with negative or non-finite width/height (zero is allowed)
pub fn calculate_wall_area(walls: &[WallSection], openings: &[Opening]) -> CalcResult<WallAreaResult> {
    if walls.is_empty() {
        return Err(CalcError::invalid_input(
            "walls",
            "[]",
            "At least one wall section is required.",
        ));
    }

    for (i, wall) in walls.iter().enumerate() {
        for (name, value) in [("length_m", wall.length_m), ("height_m", wall.height_m)] {
            require_positive(
                &format!("walls[{}].{}", i, name),
                value,
                "Wall dimensions must be greater than zero.",
            )?;
        }
    }

    for (i, opening) in openings.iter().enumerate() {
        for (name, value) in [("width_m", opening.width_m), ("height_m", opening.height_m)] {
            require_non_negative(
                &format!("openings[{}].{}", i, name),
                value,
                "Opening dimensions must not be negative.",
            )?;
        }
    }

    let gross_area_m2: f64 = walls.iter().map(WallSection::area_m2).sum();
    let opening_area_m2: f64 = openings.iter().map(Opening::area_m2).sum();

    if opening_area_m2 >= gross_area_m2 && opening_area_m2 > 0.0 {
        tracing::warn!(
            gross_area_m2,
            opening_area_m2,
            "openings cover the whole wall; net area clamped to zero"
        );
    }

    Ok(WallAreaResult {
        gross_area_m2,
        opening_area_m2,
        net_area_m2: (gross_area_m2 - opening_area_m2).max(0.0),
    })
}

/// One lintel per opening, `width + 2 x 150 mm` long.
pub fn calculate_lintels(openings: &[Opening]) -> Vec<LintelResult> {
    openings
        .iter()
        .map(|opening| LintelResult {
            width_m: opening.width_m,
            lintel_length_mm: opening.width_m * 1000.0 + 2.0 * LINTEL_END_BEARING_MM,
        })
        .collect()
}

/// DPC length is the sum of wall lengths; width follows the wall type.
pub fn calculate_dpc(walls: &[WallSection], wall_type: WallType) -> DpcResult {
    let width_mm = match wall_type {
        WallType::HalfBrick => DPC_WIDTH_HALF_BRICK_MM,
        WallType::OneBrick | WallType::Cavity => DPC_WIDTH_FULL_MM,
        // No blockwork-specific width is tabulated yet.
        WallType::Blockwork => DPC_WIDTH_DEFAULT_MM,
    };

    DpcResult {
        length_m: walls.iter().map(|w| w.length_m).sum(),
        width_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_single_wall() {
        let result = calculate_wall_area(&[WallSection::new(5.0, 2.4)], &[]).unwrap();
        assert_eq!(
            result,
            WallAreaResult {
                gross_area_m2: 12.0,
                opening_area_m2: 0.0,
                net_area_m2: 12.0,
            }
        );
    }

    #[test]
    fn test_openings_are_deducted() {
        let result =
            calculate_wall_area(&[WallSection::new(5.0, 2.4)], &[Opening::new(1.2, 2.1)]).unwrap();
        assert_abs_diff_eq!(result.opening_area_m2, 2.52, epsilon = 1e-9);
        assert_abs_diff_eq!(result.net_area_m2, 9.48, epsilon = 1e-9);
    }

    #[test]
    fn test_multiple_walls() {
        let walls = [WallSection::new(5.0, 2.4), WallSection::new(3.0, 2.4)];
        let result = calculate_wall_area(&walls, &[]).unwrap();
        assert_abs_diff_eq!(result.gross_area_m2, 19.2, epsilon = 1e-9);
        assert_eq!(result.net_area_m2, result.gross_area_m2);
    }

    #[test]
    fn test_net_area_clamps_to_zero() {
        let result =
            calculate_wall_area(&[WallSection::new(1.0, 1.0)], &[Opening::new(2.0, 2.0)]).unwrap();
        assert_eq!(result.net_area_m2, 0.0);
        assert_eq!(result.opening_area_m2, 4.0);
    }

    #[test]
    fn test_zero_sized_opening_allowed() {
        let result =
            calculate_wall_area(&[WallSection::new(4.0, 2.4)], &[Opening::new(0.0, 0.0)]).unwrap();
        assert_abs_diff_eq!(result.net_area_m2, 9.6, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_walls_rejected() {
        let err = calculate_wall_area(&[], &[]).unwrap_err();
        assert_eq!(err.to_string(), "At least one wall section is required.");
    }

    #[test]
    fn test_zero_wall_dimension_rejected() {
        let err = calculate_wall_area(&[WallSection::new(0.0, 2.4)], &[]).unwrap_err();
        assert_eq!(err.to_string(), "Wall dimensions must be greater than zero.");
        assert_eq!(err.field(), Some("walls[0].length_m"));
    }

    #[test]
    fn test_non_finite_wall_rejected() {
        let err = calculate_wall_area(&[WallSection::new(f64::INFINITY, 2.0)], &[]).unwrap_err();
        assert_eq!(err.to_string(), "Wall dimensions must be greater than zero.");

        let walls = [WallSection::new(5.0, 2.4), WallSection::new(3.0, f64::NAN)];
        let err = calculate_wall_area(&walls, &[]).unwrap_err();
        assert_eq!(err.field(), Some("walls[1].height_m"));
    }

    #[test]
    fn test_non_finite_opening_rejected() {
        let err = calculate_wall_area(&[WallSection::new(5.0, 2.4)], &[Opening::new(1.0, f64::INFINITY)])
            .unwrap_err();
        assert_eq!(err.to_string(), "Opening dimensions must not be negative.");
        assert_eq!(err.field(), Some("openings[0].height_m"));
    }

    #[test]
    fn test_negative_opening_rejected() {
        let err = calculate_wall_area(&[WallSection::new(5.0, 2.4)], &[Opening::new(-1.0, 2.0)])
            .unwrap_err();
        assert_eq!(err.to_string(), "Opening dimensions must not be negative.");
    }

    #[test]
    fn test_lintels() {
        let lintels = calculate_lintels(&[Opening::new(0.9, 1.2), Opening::new(1.8, 2.1)]);
        assert_eq!(lintels.len(), 2);
        assert_eq!(lintels[0].width_m, 0.9);
        assert_abs_diff_eq!(lintels[0].lintel_length_mm, 1200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(lintels[1].lintel_length_mm, 2100.0, epsilon = 1e-9);
        assert!(calculate_lintels(&[]).is_empty());
    }

    #[test]
    fn test_dpc() {
        let walls = [WallSection::new(5.0, 2.4), WallSection::new(3.0, 2.4)];
        let dpc = calculate_dpc(&walls, WallType::HalfBrick);
        assert_eq!(dpc.length_m, 8.0);
        assert_eq!(dpc.width_mm, 112.5);

        assert_eq!(calculate_dpc(&walls, WallType::Cavity).width_mm, 225.0);
        assert_eq!(calculate_dpc(&walls, WallType::OneBrick).width_mm, 225.0);
        assert_eq!(calculate_dpc(&walls, WallType::Blockwork).width_mm, 100.0);
    }
}
