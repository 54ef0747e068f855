//! # Tiling Project
//!
//! Runs the tile, adhesive, grout and spacer estimators (and any sundries
//! the job needs) against one rectangular room, and collects the results
//! into a single shopping list.
//!
//! ## Structure
//!
//! ```text
//! TilingProject
//! ├── room and tile dimensions
//! ├── adhesive / grout / spacers: per-material options (all defaulted)
//! └── primer, backer_boards, tanking, self_levelling: opt-in sundries
//!
//! TilingPlan
//! ├── one result per estimator run
//! └── materials_list: Vec<MaterialLine>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::project::TilingProject;
//! use trowel_core::settings::DEFAULT_SETTINGS;
//!
//! let project: TilingProject = serde_json::from_str(r#"{
//!     "label": "Utility room",
//!     "room_length_m": 3.0,
//!     "room_width_m": 2.4,
//!     "tile_width_mm": 300,
//!     "tile_height_mm": 300,
//!     "primer": true
//! }"#).unwrap();
//!
//! let plan = project.plan(&DEFAULT_SETTINGS).unwrap();
//! assert_eq!(plan.tiles.tiles_needed, 88);
//! for line in &plan.materials_list {
//!     println!("{:>4}  {} ({})", line.quantity, line.item, line.package);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::adhesive::{self, AdhesiveInput, AdhesiveResult, CoverageSource, Substrate};
use crate::calculations::grout::{self, GroutInput, GroutResult};
use crate::calculations::spacers::{self, LayoutPattern, SpacersInput, SpacersResult, TileQuantity};
use crate::calculations::sundries::{
    self, BackerBoardInput, BackerBoardResult, PrimerInput, PrimerResult, SelfLevellingInput,
    SelfLevellingResult, TankingInput, TankingResult,
};
use crate::calculations::tiles::{self, TileInput, TileResult};
use crate::errors::CalcResult;
use crate::settings::EstimatorSettings;

fn default_tile_wastage() -> f64 {
    10.0
}

/// Adhesive options for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdhesiveOptions {
    /// Rate source. Banded on the tile's longest edge when absent.
    pub coverage: Option<CoverageSource>,
    pub bag_size_kg: Option<f64>,
    pub substrate: Substrate,
    pub wastage_percent: f64,
}

impl Default for AdhesiveOptions {
    fn default() -> Self {
        AdhesiveOptions {
            coverage: None,
            bag_size_kg: Some(20.0),
            substrate: Substrate::Even,
            wastage_percent: 10.0,
        }
    }
}

/// Grout options for a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroutOptions {
    pub joint_width_mm: f64,
    pub tile_depth_mm: f64,
    pub wastage_percent: f64,
}

impl Default for GroutOptions {
    fn default() -> Self {
        GroutOptions {
            joint_width_mm: 3.0,
            tile_depth_mm: 8.0,
            wastage_percent: 10.0,
        }
    }
}

/// Spacer options for a project. Spacers are counted on the tiles bought,
/// which already include the tile wastage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerOptions {
    pub layout: LayoutPattern,
    pub wastage_percent: f64,
}

/// One room to tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingProject {
    #[serde(default)]
    pub label: String,
    pub room_length_m: f64,
    pub room_width_m: f64,
    pub tile_width_mm: f64,
    pub tile_height_mm: f64,
    #[serde(default = "default_tile_wastage")]
    pub tile_wastage_percent: f64,
    /// Tiles per box
    #[serde(default)]
    pub pack_size: Option<u32>,
    #[serde(default)]
    pub adhesive: AdhesiveOptions,
    #[serde(default)]
    pub grout: GroutOptions,
    #[serde(default)]
    pub spacers: SpacerOptions,
    #[serde(default)]
    pub primer: bool,
    #[serde(default)]
    pub backer_boards: bool,
    #[serde(default)]
    pub tanking: bool,
    #[serde(default)]
    pub self_levelling: bool,
}

/// One purchasable line on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialLine {
    pub item: String,
    pub quantity: u32,
    /// Unit of purchase, e.g. "20 kg bags"
    pub package: String,
}

impl MaterialLine {
    fn new(item: &str, quantity: u32, package: impl Into<String>) -> Self {
        MaterialLine {
            item: item.to_string(),
            quantity,
            package: package.into(),
        }
    }
}

/// Materials for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilingPlan {
    pub label: String,
    pub area_m2: f64,
    pub tiles: TileResult,
    pub adhesive: AdhesiveResult,
    pub grout: GroutResult,
    pub spacers: SpacersResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primer: Option<PrimerResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backer_boards: Option<BackerBoardResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanking: Option<TankingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_levelling: Option<SelfLevellingResult>,
    pub materials_list: Vec<MaterialLine>,
}

impl TilingProject {
    /// Floor or wall area (m²)
    pub fn area_m2(&self) -> f64 {
        self.room_length_m * self.room_width_m
    }

    fn tile_input(&self) -> TileInput {
        TileInput {
            label: self.label.clone(),
            area_width_m: self.room_width_m,
            area_height_m: self.room_length_m,
            tile_width_mm: self.tile_width_mm,
            tile_height_mm: self.tile_height_mm,
            wastage_percent: self.tile_wastage_percent,
            pack_size: self.pack_size,
        }
    }

    /// Run every estimator the project needs.
    ///
    /// # Errors
    ///
    /// The first estimator error, starting with the room and tile
    /// dimensions. No plan is returned unless every estimate succeeds.
    pub fn plan(&self, settings: &EstimatorSettings) -> CalcResult<TilingPlan> {
        let tiles = tiles::calculate(&self.tile_input())?;
        let area_m2 = tiles.coverage_area_m2;

        let coverage = self.adhesive.coverage.clone().unwrap_or(CoverageSource::TileSize {
            largest_edge_mm: self.tile_width_mm.max(self.tile_height_mm),
        });
        let adhesive = adhesive::calculate_with(
            &AdhesiveInput {
                label: self.label.clone(),
                area_m2,
                coverage,
                bag_size_kg: self.adhesive.bag_size_kg,
                substrate: self.adhesive.substrate,
                wastage_percent: self.adhesive.wastage_percent,
            },
            &settings.adhesive,
        )?;

        let grout = grout::calculate_with(
            &GroutInput {
                label: self.label.clone(),
                area_m2,
                tile_width_mm: self.tile_width_mm,
                tile_height_mm: self.tile_height_mm,
                joint_width_mm: self.grout.joint_width_mm,
                tile_depth_mm: self.grout.tile_depth_mm,
                wastage_percent: self.grout.wastage_percent,
            },
            &settings.grout,
        )?;

        let spacers = spacers::calculate(&SpacersInput {
            label: self.label.clone(),
            tiles: TileQuantity::Count {
                tiles: f64::from(tiles.tiles_needed),
            },
            layout: self.spacers.layout,
            wastage_percent: self.spacers.wastage_percent,
        })?;

        let primer = self
            .primer
            .then(|| sundries::primer(&PrimerInput::for_area(area_m2)))
            .transpose()?;
        let backer_boards = self
            .backer_boards
            .then(|| sundries::backer_boards(&BackerBoardInput::for_area(area_m2)))
            .transpose()?;
        let tanking = self
            .tanking
            .then(|| sundries::tanking(&TankingInput::for_area(area_m2)))
            .transpose()?;
        let self_levelling = self
            .self_levelling
            .then(|| sundries::self_levelling(&SelfLevellingInput::for_area(area_m2)))
            .transpose()?;

        let mut plan = TilingPlan {
            label: self.label.clone(),
            area_m2,
            tiles,
            adhesive,
            grout,
            spacers,
            primer,
            backer_boards,
            tanking,
            self_levelling,
            materials_list: Vec::new(),
        };
        plan.materials_list = plan.build_materials_list(self.pack_size);

        tracing::debug!(
            label = %self.label,
            area_m2,
            lines = plan.materials_list.len(),
            "tiling plan complete"
        );
        Ok(plan)
    }
}

impl TilingPlan {
    fn build_materials_list(&self, pack_size: Option<u32>) -> Vec<MaterialLine> {
        let mut lines = Vec::new();

        match (self.tiles.packs_needed, pack_size) {
            (Some(packs), Some(size)) => {
                lines.push(MaterialLine::new("Tiles", packs, format!("boxes of {}", size)))
            }
            _ => lines.push(MaterialLine::new("Tiles", self.tiles.tiles_needed, "tiles")),
        }
        lines.push(MaterialLine::new(
            "Tile adhesive",
            self.adhesive.bags_needed,
            format!("{} kg {}", self.adhesive.bag_size_kg, self.adhesive.package.plural()),
        ));
        lines.push(MaterialLine::new("Grout", self.grout.bags_5kg, "5 kg bags"));
        lines.push(MaterialLine::new("Tile spacers", self.spacers.packs_100, "packs of 100"));

        if let Some(primer) = &self.primer {
            lines.push(MaterialLine::new("Primer", primer.bottles, "5 L bottles"));
        }
        if let Some(boards) = &self.backer_boards {
            lines.push(MaterialLine::new("Backer board", boards.boards, "1200 x 800 mm boards"));
        }
        if let Some(tanking) = &self.tanking {
            lines.push(MaterialLine::new("Tanking membrane", tanking.tubs, "5 kg tubs"));
        }
        if let Some(slc) = &self.self_levelling {
            lines.push(MaterialLine::new("Self-levelling compound", slc.bags, "20 kg bags"));
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_SETTINGS;

    fn utility_room() -> TilingProject {
        TilingProject {
            label: "Utility room".to_string(),
            room_length_m: 3.0,
            room_width_m: 2.4,
            tile_width_mm: 300.0,
            tile_height_mm: 300.0,
            tile_wastage_percent: 10.0,
            pack_size: None,
            adhesive: AdhesiveOptions::default(),
            grout: GroutOptions::default(),
            spacers: SpacerOptions::default(),
            primer: false,
            backer_boards: false,
            tanking: false,
            self_levelling: false,
        }
    }

    #[test]
    fn test_core_plan() {
        let plan = utility_room().plan(&DEFAULT_SETTINGS).unwrap();
        assert_eq!(plan.tiles.tiles_needed, 88);
        // 7.2 * 3.5 * 1.1 = 27.7 kg
        assert_eq!(plan.adhesive.base_rate_kg_per_m2, 3.5);
        assert_eq!(plan.adhesive.bags_needed, 2);
        // 7.2 * 0.32 * 1.1 = 2.53 kg
        assert_eq!(plan.grout.bags_5kg, 1);
        assert_eq!(plan.grout.bags_2_5kg, 2);
        // 88 tiles * 4
        assert_eq!(plan.spacers.spacers_needed, 352);
        assert!(plan.primer.is_none());

        let items: Vec<&str> = plan.materials_list.iter().map(|l| l.item.as_str()).collect();
        assert_eq!(items, ["Tiles", "Tile adhesive", "Grout", "Tile spacers"]);
        assert_eq!(plan.materials_list[1].package, "20 kg bags");
    }

    #[test]
    fn test_plan_with_sundries() {
        let project = TilingProject {
            primer: true,
            backer_boards: true,
            tanking: true,
            self_levelling: true,
            pack_size: Some(10),
            ..utility_room()
        };
        let plan = project.plan(&DEFAULT_SETTINGS).unwrap();

        assert_eq!(plan.materials_list[0], MaterialLine::new("Tiles", 9, "boxes of 10"));
        assert_eq!(plan.primer.as_ref().map(|p| p.bottles), Some(1));
        // 7.2 / 0.96 * 1.1 = 8.25
        assert_eq!(plan.backer_boards.as_ref().map(|b| b.boards), Some(9));
        // 7.2 * 0.7 * 2 = 10.08 kg
        assert_eq!(plan.tanking.as_ref().map(|t| t.tubs), Some(3));
        // 7.2 * 3 * 1.7 = 36.7 kg
        assert_eq!(plan.self_levelling.as_ref().map(|s| s.bags), Some(2));
        assert_eq!(plan.materials_list.len(), 8);
    }

    #[test]
    fn test_product_adhesive_in_tubs() {
        let project = TilingProject {
            adhesive: AdhesiveOptions {
                coverage: Some(CoverageSource::Product {
                    product: "ready-mixed-paste".to_string(),
                    application: Default::default(),
                }),
                bag_size_kg: None,
                ..AdhesiveOptions::default()
            },
            ..utility_room()
        };
        let plan = project.plan(&DEFAULT_SETTINGS).unwrap();
        assert_eq!(plan.materials_list[1].package, "15 kg tubs");
    }

    #[test]
    fn test_invalid_room() {
        let project = TilingProject {
            room_length_m: 0.0,
            ..utility_room()
        };
        let err = project.plan(&DEFAULT_SETTINGS).unwrap_err();
        assert_eq!(err.to_string(), "Area dimensions must be greater than zero.");
    }

    #[test]
    fn test_json_defaults() {
        let project: TilingProject = serde_json::from_str(
            r#"{ "room_length_m": 3.0, "room_width_m": 2.4, "tile_width_mm": 300, "tile_height_mm": 300 }"#,
        )
        .unwrap();
        assert_eq!(project.tile_wastage_percent, 10.0);
        assert_eq!(project.grout, GroutOptions::default());
        assert_eq!(project.adhesive.bag_size_kg, Some(20.0));
        assert!(!project.tanking);
    }
}
