//! # trowel_core - Building-Trade Quantity Estimators
//!
//! `trowel_core` works out how much material to buy for small building and
//! tiling jobs: bricks, blocks, mortar, wall ties and lintels for masonry;
//! tiles, adhesive, grout and spacers for tiling; plus primer, backer board,
//! tanking and levelling compound.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every estimator is a pure function of its input record
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//! - **Buy whole units**: quantities are ceiling-rounded with [`rounding::ceil_safe`]
//! - **Rich Errors**: structured [`CalcError`] with stable messages
//!
//! ## Quick Start
//!
//! ```rust
//! use trowel_core::calculations::tiles::{calculate, TileInput};
//!
//! let input = TileInput {
//!     label: "Splashback".to_string(),
//!     area_width_m: 2.0,
//!     area_height_m: 3.0,
//!     tile_width_mm: 600.0,
//!     tile_height_mm: 300.0,
//!     wastage_percent: 5.0,
//!     pack_size: None,
//! };
//! assert_eq!(calculate(&input).unwrap().tiles_needed, 35);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All estimators, and [`CalculationItem`] for running mixed job lists
//! - [`project`] - Whole-room tiling plan with a shopping list
//! - [`materials`] - Product catalog and size presets
//! - [`settings`] - Tunable material constants, loadable from TOML
//! - [`units`] - Unit conversion tables
//! - [`rounding`] - The shared wastage and ceiling convention
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod project;
pub mod rounding;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput};
pub use errors::{CalcError, CalcResult};
pub use project::{TilingPlan, TilingProject};
pub use settings::{EstimatorSettings, DEFAULT_SETTINGS};
