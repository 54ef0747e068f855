//! # Estimators
//!
//! Every estimator follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Quantities in raw units and purchasable packages
//! - `calculate(input) -> CalcResult<*Result>` - Pure calculation function
//!
//! Estimators with tunable constants also expose `calculate_with(input, settings)`.
//!
//! ## Available Estimators
//!
//! - [`masonry`] - Walls: bricks, blocks, mortar, ties, lintels, DPC
//! - [`tiles`] - Tile count for an area
//! - [`adhesive`] - Tile adhesive by rate, tile size, product or bed depth
//! - [`grout`] - Grout from joint geometry
//! - [`spacers`] - Spacers by layout pattern
//! - [`sundries`] - Primer, backer board, tanking, self-levelling compound

pub mod adhesive;
pub mod grout;
pub mod masonry;
pub mod spacers;
pub mod sundries;
pub mod tiles;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::settings::EstimatorSettings;

// Re-export commonly used types
pub use adhesive::{AdhesiveInput, AdhesiveResult};
pub use grout::{GroutInput, GroutResult};
pub use masonry::{MasonryInput, MasonryResult};
pub use spacers::{SpacersInput, SpacersResult};
pub use sundries::{
    BackerBoardInput, BackerBoardResult, PrimerInput, PrimerResult, SelfLevellingInput,
    SelfLevellingResult, TankingInput, TankingResult,
};
pub use tiles::{TileInput, TileResult};

/// Enum wrapper for all estimator inputs.
///
/// Lets a job file hold a mixed list of estimates:
///
/// ```json
/// [
///   { "type": "Tiles", "area_width_m": 3.0, "area_height_m": 2.4,
///     "tile_width_mm": 300, "tile_height_mm": 300, "wastage_percent": 10 },
///   { "type": "Primer", "area_m2": 7.2 }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Tiles(TileInput),
    Adhesive(AdhesiveInput),
    Grout(GroutInput),
    Spacers(SpacersInput),
    Primer(PrimerInput),
    BackerBoards(BackerBoardInput),
    Tanking(TankingInput),
    SelfLevelling(SelfLevellingInput),
    Masonry(MasonryInput),
}

/// Result of running a [`CalculationItem`], tagged the same way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Tiles(TileResult),
    Adhesive(AdhesiveResult),
    Grout(GroutResult),
    Spacers(SpacersResult),
    Primer(PrimerResult),
    BackerBoards(BackerBoardResult),
    Tanking(TankingResult),
    SelfLevelling(SelfLevellingResult),
    Masonry(MasonryResult),
}

impl CalculationItem {
    /// Parse a JSON job: an array of tagged estimator inputs.
    pub fn list_from_json(text: &str) -> CalcResult<Vec<CalculationItem>> {
        serde_json::from_str(text).map_err(|e| CalcError::serialization(e.to_string()))
    }

    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Tiles(i) => &i.label,
            CalculationItem::Adhesive(i) => &i.label,
            CalculationItem::Grout(i) => &i.label,
            CalculationItem::Spacers(i) => &i.label,
            CalculationItem::Primer(i) => &i.label,
            CalculationItem::BackerBoards(i) => &i.label,
            CalculationItem::Tanking(i) => &i.label,
            CalculationItem::SelfLevelling(i) => &i.label,
            CalculationItem::Masonry(i) => &i.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Tiles(_) => "Tiles",
            CalculationItem::Adhesive(_) => "Adhesive",
            CalculationItem::Grout(_) => "Grout",
            CalculationItem::Spacers(_) => "Spacers",
            CalculationItem::Primer(_) => "Primer",
            CalculationItem::BackerBoards(_) => "BackerBoards",
            CalculationItem::Tanking(_) => "Tanking",
            CalculationItem::SelfLevelling(_) => "SelfLevelling",
            CalculationItem::Masonry(_) => "Masonry",
        }
    }

    /// Run the matching estimator.
    pub fn run(&self, settings: &EstimatorSettings) -> CalcResult<CalculationOutput> {
        tracing::debug!(calc_type = self.calc_type(), label = self.label(), "running estimate");
        let output = match self {
            CalculationItem::Tiles(i) => CalculationOutput::Tiles(tiles::calculate(i)?),
            CalculationItem::Adhesive(i) => {
                CalculationOutput::Adhesive(adhesive::calculate_with(i, &settings.adhesive)?)
            }
            CalculationItem::Grout(i) => {
                CalculationOutput::Grout(grout::calculate_with(i, &settings.grout)?)
            }
            CalculationItem::Spacers(i) => CalculationOutput::Spacers(spacers::calculate(i)?),
            CalculationItem::Primer(i) => CalculationOutput::Primer(sundries::primer(i)?),
            CalculationItem::BackerBoards(i) => {
                CalculationOutput::BackerBoards(sundries::backer_boards(i)?)
            }
            CalculationItem::Tanking(i) => CalculationOutput::Tanking(sundries::tanking(i)?),
            CalculationItem::SelfLevelling(i) => {
                CalculationOutput::SelfLevelling(sundries::self_levelling(i)?)
            }
            CalculationItem::Masonry(i) => {
                CalculationOutput::Masonry(masonry::calculate_with(i, &settings.mortar)?)
            }
        };
        Ok(output)
    }
}
