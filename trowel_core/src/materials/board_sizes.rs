//! Sheet sizes for backer board, plasterboard and plywood.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A stocked sheet size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl BoardSize {
    pub const fn new(width_mm: f64, height_mm: f64) -> Self {
        BoardSize { width_mm, height_mm }
    }

    /// Sheet area (m²)
    pub fn area_m2(&self) -> f64 {
        (self.width_mm / 1000.0) * (self.height_mm / 1000.0)
    }

    /// Parse "WxH" in millimetres, e.g. "2400x1200".
    pub fn parse(s: &str) -> CalcResult<Self> {
        let invalid = || {
            CalcError::invalid_input(
                "board_size",
                s,
                "Board size must be written as WIDTHxHEIGHT in millimetres.",
            )
        };
        let normalized = s.trim().to_ascii_lowercase().replace('×', "x");
        let (w, h) = normalized.split_once('x').ok_or_else(invalid)?;
        let width_mm: f64 = w.trim().parse().map_err(|_| invalid())?;
        let height_mm: f64 = h.trim().parse().map_err(|_| invalid())?;
        Ok(BoardSize::new(width_mm, height_mm))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPreset {
    pub key: &'static str,
    pub description: &'static str,
    pub size: BoardSize,
}

/// Standard UK sheet sizes
pub const BOARD_PRESETS: &[BoardPreset] = &[
    BoardPreset { key: "2440x1220", description: "Standard plywood / MDF", size: BoardSize::new(2440.0, 1220.0) },
    BoardPreset { key: "2400x1200", description: "Standard plasterboard", size: BoardSize::new(2400.0, 1200.0) },
    BoardPreset { key: "1800x900", description: "Small plasterboard", size: BoardSize::new(1800.0, 900.0) },
    BoardPreset { key: "1200x800", description: "Tile backer board", size: BoardSize::new(1200.0, 800.0) },
    BoardPreset { key: "1200x600", description: "Tile backer / insulation", size: BoardSize::new(1200.0, 600.0) },
];

/// Preset used for tile backer board unless another size is chosen
pub const DEFAULT_BACKER_BOARD: BoardSize = BoardSize::new(1200.0, 800.0);

/// Look up a preset by key, falling back to parsing "WxH".
pub fn board_size(key: &str) -> CalcResult<BoardSize> {
    match BOARD_PRESETS.iter().find(|p| p.key == key.trim()) {
        Some(preset) => Ok(preset.size),
        None => BoardSize::parse(key),
    }
}
