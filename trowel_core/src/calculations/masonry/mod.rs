//! # Masonry Estimator
//!
//! Material take-off for a run of brick or block walls: net wall area,
//! brick and block counts, mortar (with its cement/sand split), cavity wall
//! ties, lintels over each opening and the DPC run.
//!
//! Every sub-calculation works from the **net** area (gross wall area less
//! openings, floored at zero).
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::calculations::masonry::{
//!     calculate, BlockWidth, MasonryInput, MortarMixRatio, SandBagSize, WallSection, WallType,
//! };
//!
//! let input = MasonryInput {
//!     label: "Garden wall".to_string(),
//!     wall_type: WallType::HalfBrick,
//!     walls: vec![WallSection::new(6.0, 2.4)],
//!     openings: vec![],
//!     block_width: BlockWidth::Mm100,
//!     mix_ratio: MortarMixRatio::OneToFour,
//!     unit_waste_percent: 5.0,
//!     mortar_waste_percent: 10.0,
//!     cavity_width_mm: 0.0,
//!     sand_bag_size: SandBagSize::Jumbo,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.bricks, 908);
//! assert_eq!(result.blocks, 0);
//! assert_eq!(result.wall_ties.total, 0);
//! ```

pub mod brickwork;
pub mod mortar;
pub mod ties;
pub mod walls;

pub use brickwork::{calculate_blocks, calculate_bricks};
pub use mortar::{calculate_mortar, calculate_mortar_with, MortarResult, MortarSettings};
pub use ties::{calculate_wall_ties, WallTiesResult};
pub use walls::{
    calculate_dpc, calculate_lintels, calculate_wall_area, DpcResult, LintelResult,
    WallAreaResult,
};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::rounding::{require_non_negative, require_percentage};
use crate::settings::DEFAULT_SETTINGS;

/// Wall construction. Selects the per-m² rate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WallType {
    /// Single skin of stretcher-bond brick (102.5 mm)
    HalfBrick,
    /// Two skins of brick bonded together (215 mm)
    OneBrick,
    /// Brick outer leaf, block inner leaf, tied across a cavity
    Cavity,
    /// Single skin of concrete block
    Blockwork,
}

impl WallType {
    pub const ALL: [WallType; 4] = [
        WallType::HalfBrick,
        WallType::OneBrick,
        WallType::Cavity,
        WallType::Blockwork,
    ];

    /// Label for selection lists
    pub fn label(&self) -> &'static str {
        match self {
            WallType::HalfBrick => "Single Skin Brick (102.5mm)",
            WallType::OneBrick => "Double Skin Brick (215mm)",
            WallType::Cavity => "Cavity Wall (Brick & Block)",
            WallType::Blockwork => "Single Skin Blockwork",
        }
    }

    /// Kebab-case code (matches the JSON form)
    pub fn code(&self) -> &'static str {
        match self {
            WallType::HalfBrick => "half-brick",
            WallType::OneBrick => "one-brick",
            WallType::Cavity => "cavity",
            WallType::Blockwork => "blockwork",
        }
    }

    pub fn is_cavity(&self) -> bool {
        matches!(self, WallType::Cavity)
    }
}

impl std::fmt::Display for WallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for WallType {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().replace([' ', '_'], "-").as_str() {
            "half-brick" | "single-skin" | "half" => Ok(WallType::HalfBrick),
            "one-brick" | "double-skin" | "one" => Ok(WallType::OneBrick),
            "cavity" => Ok(WallType::Cavity),
            "blockwork" | "block" => Ok(WallType::Blockwork),
            _ => Err(CalcError::invalid_input(
                "wall_type",
                s,
                "Wall type must be one of half-brick, one-brick, cavity or blockwork.",
            )),
        }
    }
}

/// Cement:sand mortar mix by volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortarMixRatio {
    #[serde(rename = "1:3")]
    OneToThree,
    #[serde(rename = "1:4")]
    OneToFour,
    #[serde(rename = "1:5")]
    OneToFive,
    #[serde(rename = "1:6")]
    OneToSix,
}

impl MortarMixRatio {
    pub const ALL: [MortarMixRatio; 4] = [
        MortarMixRatio::OneToThree,
        MortarMixRatio::OneToFour,
        MortarMixRatio::OneToFive,
        MortarMixRatio::OneToSix,
    ];

    /// Parts of sand per part of cement
    pub fn sand_parts(&self) -> f64 {
        match self {
            MortarMixRatio::OneToThree => 3.0,
            MortarMixRatio::OneToFour => 4.0,
            MortarMixRatio::OneToFive => 5.0,
            MortarMixRatio::OneToSix => 6.0,
        }
    }

    /// Total parts (cement + sand)
    pub fn total_parts(&self) -> f64 {
        self.sand_parts() + 1.0
    }

    /// Cement share of the dry volume
    pub fn cement_fraction(&self) -> f64 {
        1.0 / self.total_parts()
    }

    /// Sand share of the dry volume
    pub fn sand_fraction(&self) -> f64 {
        self.sand_parts() / self.total_parts()
    }

    pub fn code(&self) -> &'static str {
        match self {
            MortarMixRatio::OneToThree => "1:3",
            MortarMixRatio::OneToFour => "1:4",
            MortarMixRatio::OneToFive => "1:5",
            MortarMixRatio::OneToSix => "1:6",
        }
    }
}

impl std::fmt::Display for MortarMixRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for MortarMixRatio {
    type Err = CalcError;

    /// Parses "C:S" with one part cement, e.g. "1:4" or "1 : 4".
    fn from_str(s: &str) -> CalcResult<Self> {
        let unsupported = || {
            CalcError::invalid_input(
                "mix_ratio",
                s,
                "Mortar mix ratio must be one of 1:3, 1:4, 1:5 or 1:6.",
            )
        };

        let (cement, sand) = s.split_once(':').ok_or_else(unsupported)?;
        let cement: u32 = cement.trim().parse().map_err(|_| unsupported())?;
        let sand: u32 = sand.trim().parse().map_err(|_| unsupported())?;

        match (cement, sand) {
            (1, 3) => Ok(MortarMixRatio::OneToThree),
            (1, 4) => Ok(MortarMixRatio::OneToFour),
            (1, 5) => Ok(MortarMixRatio::OneToFive),
            (1, 6) => Ok(MortarMixRatio::OneToSix),
            _ => Err(unsupported()),
        }
    }
}

/// Sand packaging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SandBagSize {
    /// Bulk bag, 875 kg
    #[default]
    Jumbo,
    /// Hand-carry bag, 35 kg
    Large,
}

impl SandBagSize {
    pub const ALL: [SandBagSize; 2] = [SandBagSize::Jumbo, SandBagSize::Large];

    pub fn kg(&self) -> f64 {
        match self {
            SandBagSize::Jumbo => 875.0,
            SandBagSize::Large => 35.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SandBagSize::Jumbo => "Jumbo bag (875 kg)",
            SandBagSize::Large => "Large bag (35 kg)",
        }
    }
}

impl FromStr for SandBagSize {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jumbo" | "bulk" => Ok(SandBagSize::Jumbo),
            "large" => Ok(SandBagSize::Large),
            _ => Err(CalcError::invalid_input(
                "sand_bag_size",
                s,
                "Sand bag size must be jumbo or large.",
            )),
        }
    }
}

/// Block thickness for blockwork and the cavity inner leaf.
///
/// Serialized as the plain millimetre value (`100` or `140`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BlockWidth {
    #[default]
    Mm100,
    Mm140,
}

impl BlockWidth {
    pub fn mm(&self) -> u32 {
        match self {
            BlockWidth::Mm100 => 100,
            BlockWidth::Mm140 => 140,
        }
    }
}

impl TryFrom<u32> for BlockWidth {
    type Error = CalcError;

    fn try_from(mm: u32) -> CalcResult<Self> {
        match mm {
            100 => Ok(BlockWidth::Mm100),
            140 => Ok(BlockWidth::Mm140),
            other => Err(CalcError::invalid_input(
                "block_width",
                other.to_string(),
                "Block width must be 100 or 140 mm.",
            )),
        }
    }
}

impl From<BlockWidth> for u32 {
    fn from(width: BlockWidth) -> Self {
        width.mm()
    }
}

/// One contiguous wall run (metres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSection {
    pub length_m: f64,
    pub height_m: f64,
}

impl WallSection {
    pub fn new(length_m: f64, height_m: f64) -> Self {
        WallSection { length_m, height_m }
    }

    pub fn area_m2(&self) -> f64 {
        self.length_m * self.height_m
    }
}

/// A door or window cut from the wall (metres)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub width_m: f64,
    pub height_m: f64,
}

impl Opening {
    pub fn new(width_m: f64, height_m: f64) -> Self {
        Opening { width_m, height_m }
    }

    pub fn area_m2(&self) -> f64 {
        self.width_m * self.height_m
    }

    pub fn perimeter_m(&self) -> f64 {
        2.0 * (self.width_m + self.height_m)
    }
}

/// Input parameters for a masonry take-off.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Rear extension",
///   "wall_type": "cavity",
///   "walls": [{ "length_m": 6.0, "height_m": 2.4 }],
///   "openings": [{ "width_m": 1.2, "height_m": 2.1 }],
///   "block_width": 100,
///   "mix_ratio": "1:4",
///   "unit_waste_percent": 5.0,
///   "mortar_waste_percent": 10.0,
///   "cavity_width_mm": 50.0,
///   "sand_bag_size": "jumbo"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonryInput {
    /// User label (e.g. "Rear extension")
    #[serde(default)]
    pub label: String,

    pub wall_type: WallType,

    pub walls: Vec<WallSection>,

    #[serde(default)]
    pub openings: Vec<Opening>,

    /// Block thickness. Carried for costing; counts do not depend on it.
    #[serde(default)]
    pub block_width: BlockWidth,

    pub mix_ratio: MortarMixRatio,

    /// Waste allowance on bricks and blocks (%)
    pub unit_waste_percent: f64,

    /// Waste allowance on mortar (%)
    pub mortar_waste_percent: f64,

    /// Cavity width (mm). Only meaningful for cavity walls.
    #[serde(default)]
    pub cavity_width_mm: f64,

    #[serde(default)]
    pub sand_bag_size: SandBagSize,
}

impl MasonryInput {
    /// Validate the waste allowances and cavity width (walls and openings
    /// are checked by [`calculate_wall_area`]).
    pub fn validate(&self) -> CalcResult<()> {
        require_percentage(
            "unit_waste_percent",
            self.unit_waste_percent,
            "Unit waste must be between 0 and 100.",
        )?;
        require_percentage(
            "mortar_waste_percent",
            self.mortar_waste_percent,
            "Mortar waste must be between 0 and 100.",
        )?;
        require_non_negative(
            "cavity_width_mm",
            self.cavity_width_mm,
            "Cavity width must not be negative.",
        )?;
        Ok(())
    }
}

/// Aggregate masonry take-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasonryResult {
    pub area: WallAreaResult,
    pub bricks: u32,
    pub blocks: u32,
    pub mortar: MortarResult,
    pub wall_ties: WallTiesResult,
    pub lintels: Vec<LintelResult>,
    pub dpc: DpcResult,
}

/// Run the full masonry take-off with the default mortar constants.
pub fn calculate(input: &MasonryInput) -> CalcResult<MasonryResult> {
    calculate_with(input, &DEFAULT_SETTINGS.mortar)
}

/// Alias of [`calculate`] under its long name.
pub fn calculate_masonry(input: &MasonryInput) -> CalcResult<MasonryResult> {
    calculate(input)
}

/// Run the full masonry take-off.
///
/// # Errors
///
/// * unit waste outside 0-100 (checked first)
/// * mortar waste outside 0-100
/// * negative cavity width
/// * any wall/opening error from [`calculate_wall_area`]
pub fn calculate_with(input: &MasonryInput, settings: &MortarSettings) -> CalcResult<MasonryResult> {
    input.validate()?;

    let area = calculate_wall_area(&input.walls, &input.openings)?;
    let net = area.net_area_m2;

    let bricks = calculate_bricks(net, input.wall_type, input.unit_waste_percent)?;
    let blocks = calculate_blocks(net, input.wall_type, input.block_width, input.unit_waste_percent)?;
    let mortar = calculate_mortar_with(
        net,
        input.wall_type,
        input.mix_ratio,
        input.mortar_waste_percent,
        input.sand_bag_size,
        settings,
    )?;
    let wall_ties = if input.wall_type.is_cavity() {
        calculate_wall_ties(net, &input.openings)?
    } else {
        WallTiesResult::default()
    };
    let lintels = calculate_lintels(&input.openings);
    let dpc = calculate_dpc(&input.walls, input.wall_type);

    tracing::debug!(
        label = %input.label,
        wall_type = input.wall_type.code(),
        net_area_m2 = net,
        bricks,
        blocks,
        cement_bags = mortar.cement_bags,
        sand_bags = mortar.sand_bags,
        "masonry take-off complete"
    );

    Ok(MasonryResult {
        area,
        bricks,
        blocks,
        mortar,
        wall_ties,
        lintels,
        dpc,
    })
}
