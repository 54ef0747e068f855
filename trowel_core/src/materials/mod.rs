//! # Reference Tables
//!
//! Static product and size data used by the estimators and offered to
//! front ends as selection lists.
//!
//! - [`adhesives`] - Adhesive catalog with dry-wall and wet-area rates
//! - [`board_sizes`] - Backer board, plasterboard and plywood sheet sizes
//! - [`tile_sizes`] - Common tile sizes, joint widths and spacer sizes
//!
//! Masonry option tables (wall types, mix ratios, sand bag sizes) live on
//! their enums in [`crate::calculations::masonry`].
//!
//! ## Example
//!
//! ```rust
//! use trowel_core::materials::{default_catalog, find_product, ApplicationType};
//!
//! let catalog = default_catalog();
//! let product = find_product(&catalog, "rapid-set-flexible").unwrap();
//! assert_eq!(product.rate_for(ApplicationType::WetArea), 4.5);
//! ```

pub mod adhesives;
pub mod board_sizes;
pub mod tile_sizes;

pub use adhesives::{default_catalog, find_product, AdhesiveProduct, ApplicationType, PackageKind};
pub use board_sizes::{board_size, BoardPreset, BoardSize, BOARD_PRESETS, DEFAULT_BACKER_BOARD};
pub use tile_sizes::{
    tile_size, TilePreset, TileSize, COMMON_JOINT_WIDTHS_MM, COMMON_TILE_SIZES, SPACER_SIZES_MM,
};
