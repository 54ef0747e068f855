//! Plain-text rendering of estimator results

use trowel_core::calculations::masonry::{MasonryInput, MasonryResult};
use trowel_core::calculations::{
    AdhesiveResult, BackerBoardResult, CalculationOutput, GroutResult, SpacersResult, TileResult,
};
use trowel_core::materials::{AdhesiveProduct, BOARD_PRESETS, COMMON_TILE_SIZES};
use trowel_core::project::TilingPlan;

const RULE: &str = "═══════════════════════════════════════";

fn heading(title: &str) -> Vec<String> {
    vec![RULE.to_string(), format!("  {}", title), RULE.to_string()]
}

pub fn tiles(result: &TileResult) -> Vec<String> {
    let mut lines = heading("TILES");
    lines.push(format!("  Area:          {:.2} m²", result.coverage_area_m2));
    lines.push(format!("  Tiles needed:  {}", result.tiles_needed));
    lines.push(format!("  For wastage:   {}", result.wastage_tiles));
    if let Some(packs) = result.packs_needed {
        lines.push(format!("  Boxes:         {}", packs));
    }
    lines
}

pub fn adhesive(result: &AdhesiveResult) -> Vec<String> {
    let mut lines = heading("TILE ADHESIVE");
    lines.push(format!("  Base rate:     {:.2} kg/m²", result.base_rate_kg_per_m2));
    if result.coverage_rate_kg_per_m2 != result.base_rate_kg_per_m2 {
        lines.push(format!("  Applied rate:  {:.2} kg/m²", result.coverage_rate_kg_per_m2));
    }
    lines.push(format!("  Adhesive:      {:.1} kg", result.kg_needed));
    lines.push(format!(
        "  To buy:        {} x {} kg {}",
        result.bags_needed,
        result.bag_size_kg,
        result.package.plural()
    ));
    lines
}

pub fn grout(result: &GroutResult) -> Vec<String> {
    let mut lines = heading("GROUT");
    lines.push(format!("  Rate:          {:.3} kg/m²", result.kg_per_m2));
    lines.push(format!("  Grout:         {:.2} kg", result.kg_needed));
    lines.push(format!("  5 kg bags:     {}", result.bags_5kg));
    lines.push(format!("  2.5 kg bags:   {}", result.bags_2_5kg));
    lines
}

pub fn spacers(result: &SpacersResult) -> Vec<String> {
    let mut lines = heading("TILE SPACERS");
    lines.push(format!("  Tiles:         {}", result.tile_count));
    lines.push(format!("  Per tile:      {}", result.spacers_per_tile));
    lines.push(format!("  Spacers:       {}", result.spacers_needed));
    lines.push(format!("  Packs of 100:  {}", result.packs_100));
    lines.push(format!("  Packs of 250:  {}", result.packs_250));
    lines
}

pub fn boards(result: &BackerBoardResult) -> Vec<String> {
    let mut lines = heading("BOARDS");
    lines.push(format!("  Per board:     {:.2} m²", result.board_area_m2));
    lines.push(format!("  Boards:        {}", result.boards));
    lines.push(format!("  Covers up to:  {:.2} m²", result.covered_area_m2));
    lines
}

pub fn masonry(input: &MasonryInput, result: &MasonryResult) -> Vec<String> {
    let mut lines = heading("MASONRY");
    lines.push(format!("  Wall type:     {}", input.wall_type));
    lines.push(format!("  Mix:           {}", input.mix_ratio));
    lines.push(String::new());
    lines.push("Area:".to_string());
    lines.push(format!("  Gross:         {:.2} m²", result.area.gross_area_m2));
    lines.push(format!("  Openings:      {:.2} m²", result.area.opening_area_m2));
    lines.push(format!("  Net:           {:.2} m²", result.area.net_area_m2));
    lines.push(String::new());
    lines.push("Units:".to_string());
    if result.bricks > 0 {
        lines.push(format!("  Bricks:        {}", result.bricks));
    }
    if result.blocks > 0 {
        lines.push(format!("  Blocks:        {} ({} mm)", result.blocks, input.block_width.mm()));
    }
    lines.push(String::new());
    lines.push("Mortar:".to_string());
    let mortar = &result.mortar;
    lines.push(format!("  Wet volume:    {:.3} m³", mortar.wet_volume_m3));
    lines.push(format!("  Cement:        {:.1} kg ({} bags)", mortar.cement_kg, mortar.cement_bags));
    lines.push(format!(
        "  Sand:          {:.2} t ({} x {} kg bags)",
        mortar.sand_tonnes, mortar.sand_bags, mortar.sand_bag_size_kg
    ));
    if input.wall_type.is_cavity() {
        lines.push(String::new());
        lines.push(format!(
            "Wall ties:       {} ({} field + {} at openings)",
            result.wall_ties.total, result.wall_ties.general, result.wall_ties.at_openings
        ));
    }
    if !result.lintels.is_empty() {
        lines.push(String::new());
        lines.push("Lintels:".to_string());
        for lintel in &result.lintels {
            lines.push(format!(
                "  {:.2} m opening -> {:.0} mm lintel",
                lintel.width_m, lintel.lintel_length_mm
            ));
        }
    }
    lines.push(String::new());
    lines.push(format!("DPC:             {:.2} m x {} mm", result.dpc.length_m, result.dpc.width_mm));
    lines
}

pub fn output(output: &CalculationOutput) -> Vec<String> {
    match output {
        CalculationOutput::Tiles(r) => tiles(r),
        CalculationOutput::Adhesive(r) => adhesive(r),
        CalculationOutput::Grout(r) => grout(r),
        CalculationOutput::Spacers(r) => spacers(r),
        CalculationOutput::Primer(r) => vec![format!("Primer: {:.2} L ({} bottles)", r.litres, r.bottles)],
        CalculationOutput::BackerBoards(r) => boards(r),
        CalculationOutput::Tanking(r) => vec![format!("Tanking: {:.2} kg ({} tubs)", r.kg, r.tubs)],
        CalculationOutput::SelfLevelling(r) => {
            vec![format!("Self-levelling compound: {:.1} kg ({} bags)", r.kg, r.bags)]
        }
        CalculationOutput::Masonry(r) => {
            let mut lines = heading("MASONRY");
            lines.push(format!("  Net area:      {:.2} m²", r.area.net_area_m2));
            lines.push(format!("  Bricks:        {}", r.bricks));
            lines.push(format!("  Blocks:        {}", r.blocks));
            lines.push(format!("  Cement bags:   {}", r.mortar.cement_bags));
            lines.push(format!("  Sand bags:     {}", r.mortar.sand_bags));
            lines.push(format!("  Wall ties:     {}", r.wall_ties.total));
            lines
        }
    }
}

pub fn plan(plan: &TilingPlan) -> Vec<String> {
    let title = if plan.label.is_empty() {
        "TILING PLAN".to_string()
    } else {
        format!("TILING PLAN - {}", plan.label)
    };
    let mut lines = heading(&title);
    lines.push(format!("  Area: {:.2} m²", plan.area_m2));
    lines.push(String::new());
    lines.push("Shopping list:".to_string());
    for line in &plan.materials_list {
        lines.push(format!("  {:>5}  {:<26} {}", line.quantity, line.item, line.package));
    }
    lines
}

pub fn products(catalog: &[AdhesiveProduct]) -> Vec<String> {
    let mut lines = heading("ADHESIVES (kg/m²: dry wall / wet area)");
    for p in catalog {
        lines.push(format!(
            "  {:<24} {:>4.1} / {:>4.1}  {} kg {}",
            p.key,
            p.dry_wall_rate_kg_per_m2,
            p.wet_area_rate_kg_per_m2,
            p.bag_size_kg,
            p.package.plural()
        ));
    }
    lines.push(String::new());
    lines.extend(heading("TILE SIZES"));
    for preset in COMMON_TILE_SIZES {
        lines.push(format!("  {:<10} {}", preset.key, preset.label));
    }
    lines.push(String::new());
    lines.extend(heading("BOARD SIZES"));
    for preset in BOARD_PRESETS {
        lines.push(format!("  {:<10} {}", preset.key, preset.description));
    }
    lines
}
