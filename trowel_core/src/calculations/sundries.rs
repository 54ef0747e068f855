//! # Tiling Sundries
//!
//! Preparation materials bought alongside tiles: primer, cement backer
//! board, tanking membrane and floor levelling compound. Each follows the
//! same validate → quantity → packages shape as the main estimators.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::board_sizes::{BoardSize, DEFAULT_BACKER_BOARD};
use crate::rounding::{
    ceil_safe, packages_needed, require_positive, require_wastage, wastage_multiplier,
};

fn default_primer_coverage() -> f64 {
    5.0
}
fn default_primer_bottle() -> f64 {
    5.0
}
fn default_one_coat() -> u32 {
    1
}
fn default_two_coats() -> u32 {
    2
}
fn default_board_width() -> f64 {
    DEFAULT_BACKER_BOARD.width_mm
}
fn default_board_height() -> f64 {
    DEFAULT_BACKER_BOARD.height_mm
}
fn default_board_wastage() -> f64 {
    10.0
}
fn default_tanking_coverage() -> f64 {
    0.7
}
fn default_tanking_tub() -> f64 {
    5.0
}
fn default_slc_coverage() -> f64 {
    1.7
}
fn default_slc_depth() -> f64 {
    3.0
}
fn default_slc_bag() -> f64 {
    20.0
}

fn require_coats(field: &str, coats: u32) -> CalcResult<()> {
    require_positive(field, f64::from(coats), "Number of coats must be greater than zero.")
}

// --- Primer ---

/// Primer for a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerInput {
    #[serde(default)]
    pub label: String,
    pub area_m2: f64,
    /// Spread rate (m² per litre)
    #[serde(default = "default_primer_coverage")]
    pub coverage_m2_per_litre: f64,
    #[serde(default = "default_primer_bottle")]
    pub bottle_litres: f64,
    #[serde(default = "default_one_coat")]
    pub coats: u32,
}

impl PrimerInput {
    /// Primer with the usual spread rate, bottle and single coat.
    pub fn for_area(area_m2: f64) -> Self {
        PrimerInput {
            label: String::new(),
            area_m2,
            coverage_m2_per_litre: default_primer_coverage(),
            bottle_litres: default_primer_bottle(),
            coats: default_one_coat(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimerResult {
    pub litres: f64,
    pub bottles: u32,
}

pub fn primer(input: &PrimerInput) -> CalcResult<PrimerResult> {
    require_positive("area_m2", input.area_m2, "Area must be greater than zero.")?;
    require_positive(
        "coverage_m2_per_litre",
        input.coverage_m2_per_litre,
        "Coverage rate must be greater than zero.",
    )?;
    require_positive("bottle_litres", input.bottle_litres, "Bottle size must be greater than zero.")?;
    require_coats("coats", input.coats)?;

    let litres = input.area_m2 / input.coverage_m2_per_litre * f64::from(input.coats);
    let bottles = packages_needed(litres, input.bottle_litres)?;
    tracing::debug!(label = %input.label, litres, bottles, "primer estimate");

    Ok(PrimerResult { litres, bottles })
}

// --- Backer board ---

/// Cement backer boards for a surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackerBoardInput {
    #[serde(default)]
    pub label: String,
    pub area_m2: f64,
    #[serde(default = "default_board_width")]
    pub board_width_mm: f64,
    #[serde(default = "default_board_height")]
    pub board_height_mm: f64,
    #[serde(default = "default_board_wastage")]
    pub wastage_percent: f64,
}

impl BackerBoardInput {
    /// 1200 × 800 mm boards with 10 % wastage.
    pub fn for_area(area_m2: f64) -> Self {
        BackerBoardInput {
            label: String::new(),
            area_m2,
            board_width_mm: default_board_width(),
            board_height_mm: default_board_height(),
            wastage_percent: default_board_wastage(),
        }
    }

    /// Another sheet size, e.g. a [`BOARD_PRESETS`](crate::materials::BOARD_PRESETS) entry.
    pub fn for_board(area_m2: f64, board: BoardSize) -> Self {
        BackerBoardInput {
            board_width_mm: board.width_mm,
            board_height_mm: board.height_mm,
            ..BackerBoardInput::for_area(area_m2)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackerBoardResult {
    pub board_area_m2: f64,
    pub boards: u32,
    /// Area the bought boards cover (m²)
    pub covered_area_m2: f64,
}

pub fn backer_boards(input: &BackerBoardInput) -> CalcResult<BackerBoardResult> {
    require_positive("area_m2", input.area_m2, "Area must be greater than zero.")?;
    require_positive("board_width_mm", input.board_width_mm, "Board dimensions must be greater than zero.")?;
    require_positive("board_height_mm", input.board_height_mm, "Board dimensions must be greater than zero.")?;
    require_wastage("wastage_percent", input.wastage_percent)?;

    let board_area_m2 = (input.board_width_mm / 1000.0) * (input.board_height_mm / 1000.0);
    let boards = ceil_safe(input.area_m2 / board_area_m2 * wastage_multiplier(input.wastage_percent))?;
    tracing::debug!(label = %input.label, boards, "backer board estimate");

    Ok(BackerBoardResult {
        board_area_m2,
        boards,
        covered_area_m2: f64::from(boards) * board_area_m2,
    })
}

// --- Tanking ---

/// Liquid tanking membrane for a wet area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankingInput {
    #[serde(default)]
    pub label: String,
    pub area_m2: f64,
    #[serde(default = "default_tanking_coverage")]
    pub coverage_kg_per_m2_per_coat: f64,
    #[serde(default = "default_two_coats")]
    pub coats: u32,
    #[serde(default = "default_tanking_tub")]
    pub tub_kg: f64,
}

impl TankingInput {
    /// Two coats at 0.7 kg/m², 5 kg tubs.
    pub fn for_area(area_m2: f64) -> Self {
        TankingInput {
            label: String::new(),
            area_m2,
            coverage_kg_per_m2_per_coat: default_tanking_coverage(),
            coats: default_two_coats(),
            tub_kg: default_tanking_tub(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankingResult {
    pub kg: f64,
    pub tubs: u32,
}

pub fn tanking(input: &TankingInput) -> CalcResult<TankingResult> {
    require_positive("area_m2", input.area_m2, "Area must be greater than zero.")?;
    require_positive(
        "coverage_kg_per_m2_per_coat",
        input.coverage_kg_per_m2_per_coat,
        "Coverage rate must be greater than zero.",
    )?;
    require_coats("coats", input.coats)?;
    require_positive("tub_kg", input.tub_kg, "Tub size must be greater than zero.")?;

    let kg = input.area_m2 * input.coverage_kg_per_m2_per_coat * f64::from(input.coats);
    let tubs = packages_needed(kg, input.tub_kg)?;
    tracing::debug!(label = %input.label, kg, tubs, "tanking estimate");

    Ok(TankingResult { kg, tubs })
}

// --- Self-levelling compound ---

/// Floor levelling compound poured to a depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfLevellingInput {
    #[serde(default)]
    pub label: String,
    pub area_m2: f64,
    #[serde(default = "default_slc_depth")]
    pub depth_mm: f64,
    /// Powder per m² per mm of depth (kg)
    #[serde(default = "default_slc_coverage")]
    pub coverage_kg_per_m2_per_mm: f64,
    #[serde(default = "default_slc_bag")]
    pub bag_kg: f64,
    #[serde(default)]
    pub wastage_percent: f64,
}

impl SelfLevellingInput {
    /// 3 mm pour at 1.7 kg/m²/mm, 20 kg bags, no wastage.
    pub fn for_area(area_m2: f64) -> Self {
        SelfLevellingInput {
            label: String::new(),
            area_m2,
            depth_mm: default_slc_depth(),
            coverage_kg_per_m2_per_mm: default_slc_coverage(),
            bag_kg: default_slc_bag(),
            wastage_percent: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfLevellingResult {
    /// Powder including wastage (kg)
    pub kg: f64,
    pub bags: u32,
}

pub fn self_levelling(input: &SelfLevellingInput) -> CalcResult<SelfLevellingResult> {
    require_positive("area_m2", input.area_m2, "Area must be greater than zero.")?;
    require_positive("depth_mm", input.depth_mm, "Depth must be greater than zero.")?;
    require_positive(
        "coverage_kg_per_m2_per_mm",
        input.coverage_kg_per_m2_per_mm,
        "Coverage rate must be greater than zero.",
    )?;
    require_positive("bag_kg", input.bag_kg, "Bag size must be greater than zero.")?;
    require_wastage("wastage_percent", input.wastage_percent)?;

    let kg = input.area_m2
        * input.depth_mm
        * input.coverage_kg_per_m2_per_mm
        * wastage_multiplier(input.wastage_percent);
    let bags = packages_needed(kg, input.bag_kg)?;
    tracing::debug!(label = %input.label, kg, bags, "self-levelling estimate");

    Ok(SelfLevellingResult { kg, bags })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::board_size;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primer_defaults() {
        let result = primer(&PrimerInput::for_area(10.0)).unwrap();
        assert_abs_diff_eq!(result.litres, 2.0, epsilon = 1e-12);
        assert_eq!(result.bottles, 1);

        let two_coats = primer(&PrimerInput {
            coats: 2,
            ..PrimerInput::for_area(15.0)
        })
        .unwrap();
        // 15 / 5 * 2 = 6 L
        assert_eq!(two_coats.bottles, 2);
    }

    #[test]
    fn test_backer_boards() {
        // 12 / 0.96 * 1.1 = 13.75
        let result = backer_boards(&BackerBoardInput::for_area(12.0)).unwrap();
        assert_abs_diff_eq!(result.board_area_m2, 0.96, epsilon = 1e-12);
        assert_eq!(result.boards, 14);
        assert_abs_diff_eq!(result.covered_area_m2, 13.44, epsilon = 1e-9);
    }

    #[test]
    fn test_backer_boards_plasterboard_preset() {
        // 20 / 2.88 * 1.1 = 7.64
        let board = board_size("2400x1200").unwrap();
        let result = backer_boards(&BackerBoardInput::for_board(20.0, board)).unwrap();
        assert_abs_diff_eq!(result.board_area_m2, 2.88, epsilon = 1e-12);
        assert_eq!(result.boards, 8);
        assert_abs_diff_eq!(result.covered_area_m2, 23.04, epsilon = 1e-9);
    }

    #[test]
    fn test_tanking() {
        // 10 * 0.7 * 2 = 14 kg
        let result = tanking(&TankingInput::for_area(10.0)).unwrap();
        assert_abs_diff_eq!(result.kg, 14.0, epsilon = 1e-9);
        assert_eq!(result.tubs, 3);
    }

    #[test]
    fn test_self_levelling() {
        // 10 * 3 * 1.7 * 1.1 = 56.1 kg
        let result = self_levelling(&SelfLevellingInput {
            wastage_percent: 10.0,
            ..SelfLevellingInput::for_area(10.0)
        })
        .unwrap();
        assert_abs_diff_eq!(result.kg, 56.1, epsilon = 1e-9);
        assert_eq!(result.bags, 3);
    }

    #[test]
    fn test_json_defaults() {
        let input: TankingInput = serde_json::from_str(r#"{ "area_m2": 4.0 }"#).unwrap();
        assert_eq!(input, TankingInput::for_area(4.0));
        let input: BackerBoardInput = serde_json::from_str(r#"{ "area_m2": 4.0 }"#).unwrap();
        assert_eq!(input.board_width_mm, 1200.0);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let err = primer(&PrimerInput::for_area(0.0)).unwrap_err();
        assert_eq!(err.field(), Some("area_m2"));

        let err = primer(&PrimerInput {
            coats: 0,
            ..PrimerInput::for_area(10.0)
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Number of coats must be greater than zero.");

        let err = tanking(&TankingInput {
            tub_kg: 0.0,
            ..TankingInput::for_area(10.0)
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("tub_kg"));

        let err = backer_boards(&BackerBoardInput {
            board_height_mm: -1.0,
            ..BackerBoardInput::for_area(10.0)
        })
        .unwrap_err();
        assert_eq!(err.field(), Some("board_height_mm"));

        let err = self_levelling(&SelfLevellingInput {
            depth_mm: 0.0,
            ..SelfLevellingInput::for_area(10.0)
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Depth must be greater than zero.");
    }
}
