//! CLI definition using clap

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use trowel_core::calculations::masonry::{MortarMixRatio, Opening, SandBagSize, WallSection, WallType};
use trowel_core::calculations::spacers::LayoutPattern;
use trowel_core::materials::{board_size, tile_size, ApplicationType, BoardSize, TileSize};
use trowel_core::units::{DensityMaterial, UnitFamily};

#[derive(Parser, Debug)]
#[command(name = "trowel")]
#[command(version)]
#[command(about = "Material quantities for tiling and masonry jobs")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (TOML) overriding the built-in material constants
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug logging to stderr (overrides RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count tiles for a rectangular area
    Tiles {
        /// Area width (m)
        #[arg(long)]
        width: f64,

        /// Area length or height (m)
        #[arg(long)]
        length: f64,

        /// Tile size in mm, e.g. 300x600
        #[arg(long, value_parser = parse_tile_size)]
        tile: TileSize,

        /// Wastage allowance (%)
        #[arg(long, default_value_t = 10.0)]
        wastage: f64,

        /// Tiles per box
        #[arg(long)]
        pack_size: Option<u32>,
    },

    /// Estimate tile adhesive
    #[command(group(
        ArgGroup::new("coverage")
            .required(true)
            .args(["tile_edge", "rate", "product", "bed_depth"])
    ))]
    Adhesive {
        /// Tiled area (m²)
        #[arg(long)]
        area: f64,

        /// Longest tile edge (mm), selects a coverage band
        #[arg(long)]
        tile_edge: Option<f64>,

        /// Coverage rate from the product data sheet (kg/m²)
        #[arg(long)]
        rate: Option<f64>,

        /// Catalog product key (see `trowel products`)
        #[arg(long)]
        product: Option<String>,

        /// Application for catalog rates (dry-wall, wet-area)
        #[arg(long, default_value = "dry-wall")]
        application: ApplicationType,

        /// Adhesive bed depth (mm)
        #[arg(long)]
        bed_depth: Option<f64>,

        /// Bag size (kg). Defaults to the product's pack, otherwise 20.
        #[arg(long)]
        bag_size: Option<f64>,

        /// Substrate is uneven
        #[arg(long)]
        uneven: bool,

        /// Wastage allowance (%)
        #[arg(long, default_value_t = 10.0)]
        wastage: f64,
    },

    /// Estimate grout
    Grout {
        /// Tiled area (m²)
        #[arg(long)]
        area: f64,

        /// Tile size in mm, e.g. 300x300
        #[arg(long, value_parser = parse_tile_size)]
        tile: TileSize,

        /// Joint width (mm)
        #[arg(long, default_value_t = 3.0)]
        joint: f64,

        /// Tile thickness (mm)
        #[arg(long, default_value_t = 8.0)]
        depth: f64,

        /// Wastage allowance (%)
        #[arg(long, default_value_t = 10.0)]
        wastage: f64,
    },

    /// Count tile spacers
    #[command(group(ArgGroup::new("quantity").required(true).args(["tiles", "area"])))]
    Spacers {
        /// Number of tiles
        #[arg(long)]
        tiles: Option<f64>,

        /// Tiled area (m²), with --tile
        #[arg(long, requires = "tile")]
        area: Option<f64>,

        /// Tile size in mm, used with --area
        #[arg(long, value_parser = parse_tile_size)]
        tile: Option<TileSize>,

        /// Layout pattern (grid, brick, diagonal, herringbone)
        #[arg(long, default_value = "grid")]
        layout: LayoutPattern,

        /// Wastage allowance (%)
        #[arg(long, default_value_t = 10.0)]
        wastage: f64,
    },

    /// Count backer board, plasterboard or plywood sheets
    Boards {
        /// Area to cover (m²)
        #[arg(long)]
        area: f64,

        /// Preset key or WxH in mm (see `trowel products`)
        #[arg(long, default_value = "1200x800", value_parser = parse_board_size)]
        board: BoardSize,

        /// Wastage allowance (%)
        #[arg(long, default_value_t = 10.0)]
        wastage: f64,
    },

    /// Bricks, blocks, mortar, ties, lintels and DPC for a run of walls
    Masonry {
        /// Wall construction (half-brick, one-brick, cavity, blockwork)
        #[arg(long, default_value = "half-brick")]
        wall_type: WallType,

        /// Wall section as LENGTHxHEIGHT in metres (repeatable)
        #[arg(long = "wall", required = true, value_parser = parse_wall)]
        walls: Vec<WallSection>,

        /// Opening as WIDTHxHEIGHT in metres (repeatable)
        #[arg(long = "opening", value_parser = parse_opening)]
        openings: Vec<Opening>,

        /// Mortar mix, cement:sand
        #[arg(long, default_value = "1:4")]
        mix: MortarMixRatio,

        /// Waste on bricks and blocks (%)
        #[arg(long, default_value_t = 5.0)]
        unit_waste: f64,

        /// Waste on mortar (%)
        #[arg(long, default_value_t = 10.0)]
        mortar_waste: f64,

        /// Block width (100 or 140 mm)
        #[arg(long, default_value_t = 100)]
        block_width: u32,

        /// Cavity width (mm)
        #[arg(long, default_value_t = 0.0)]
        cavity_width: f64,

        /// Sand bag size (jumbo, large)
        #[arg(long, default_value = "jumbo")]
        sand_bag: SandBagSize,
    },

    /// Convert between units
    Convert {
        family: Family,
        value: f64,
        from: String,
        to: String,
    },

    /// Weight of a volume of loose material
    Density {
        /// Volume (m³)
        volume: f64,
        /// concrete, hardcore, sand, gravel or ballast
        #[arg(value_parser = DensityMaterial::from_str_flexible)]
        material: DensityMaterial,
    },

    /// Run a JSON job file holding a list of estimates
    Run {
        /// Path to the job file
        job: PathBuf,
    },

    /// Plan every material for one tiled room from a JSON project file
    Project {
        /// Path to the project file
        project: PathBuf,
    },

    /// List the adhesive catalog, tile sizes and board sizes
    Products,

    /// Print the effective settings as TOML
    Settings,
}

/// Unit family for `convert`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Family {
    Length,
    Area,
    Volume,
    Weight,
    Temperature,
}

impl From<Family> for UnitFamily {
    fn from(family: Family) -> Self {
        match family {
            Family::Length => UnitFamily::Length,
            Family::Area => UnitFamily::Area,
            Family::Volume => UnitFamily::Volume,
            Family::Weight => UnitFamily::Weight,
            Family::Temperature => UnitFamily::Temperature,
        }
    }
}

fn parse_tile_size(s: &str) -> Result<TileSize, String> {
    tile_size(s).map_err(|e| e.to_string())
}

fn parse_board_size(s: &str) -> Result<BoardSize, String> {
    board_size(s).map_err(|e| e.to_string())
}

/// Parse "AxB" (metres). Accepts `x`, `X` or `×`.
fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let normalized = s.trim().to_ascii_lowercase().replace('×', "x");
    let (a, b) = normalized
        .split_once('x')
        .ok_or_else(|| format!("expected AxB in metres, got '{}'", s))?;
    let a: f64 = a.trim().parse().map_err(|_| format!("invalid number '{}'", a.trim()))?;
    let b: f64 = b.trim().parse().map_err(|_| format!("invalid number '{}'", b.trim()))?;
    Ok((a, b))
}

fn parse_wall(s: &str) -> Result<WallSection, String> {
    parse_pair(s).map(|(length, height)| WallSection::new(length, height))
}

fn parse_opening(s: &str) -> Result<Opening, String> {
    parse_pair(s).map(|(width, height)| Opening::new(width, height))
}
