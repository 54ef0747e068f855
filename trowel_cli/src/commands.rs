//! Subcommand execution

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trowel_core::calculations::adhesive::{self, AdhesiveInput, CoverageSource, Substrate};
use trowel_core::calculations::grout::{self, GroutInput};
use trowel_core::calculations::masonry::{self, BlockWidth, MasonryInput};
use trowel_core::calculations::spacers::{self, SpacersInput, TileQuantity};
use trowel_core::calculations::sundries::{self, BackerBoardInput};
use trowel_core::calculations::tiles::{self, TileInput};
use trowel_core::calculations::{CalculationItem, CalculationOutput};
use trowel_core::project::TilingProject;
use trowel_core::units::{convert_by_code, convert_density_to_weight};
use trowel_core::EstimatorSettings;

use crate::cli::{Cli, Commands};
use crate::render;

/// Bag size assumed for powder adhesives when none is given
const DEFAULT_ADHESIVE_BAG_KG: f64 = 20.0;

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> Vec<String>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        for line in text(value) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_settings(cli: &Cli) -> Result<EstimatorSettings> {
    match &cli.config {
        Some(path) => EstimatorSettings::load(path)
            .with_context(|| format!("invalid settings file {}", path.display())),
        None => Ok(EstimatorSettings::default()),
    }
}

#[derive(Serialize)]
struct JobEntry<'a> {
    label: &'a str,
    calc_type: &'static str,
    output: CalculationOutput,
}

pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let json = cli.json;

    match &cli.command {
        Commands::Tiles { width, length, tile, wastage, pack_size } => {
            let input = TileInput {
                label: String::new(),
                area_width_m: *width,
                area_height_m: *length,
                tile_width_mm: tile.width_mm,
                tile_height_mm: tile.height_mm,
                wastage_percent: *wastage,
                pack_size: *pack_size,
            };
            emit(json, &tiles::calculate(&input)?, render::tiles)
        }

        Commands::Adhesive {
            area,
            tile_edge,
            rate,
            product,
            application,
            bed_depth,
            bag_size,
            uneven,
            wastage,
        } => {
            let coverage = match (tile_edge, rate, product, bed_depth) {
                (Some(edge), _, _, _) => CoverageSource::TileSize { largest_edge_mm: *edge },
                (_, Some(kg), _, _) => CoverageSource::Fixed { kg_per_m2: *kg },
                (_, _, Some(key), _) => CoverageSource::Product {
                    product: key.clone(),
                    application: *application,
                },
                (_, _, _, Some(depth)) => CoverageSource::BedDepth { bed_depth_mm: *depth },
                (None, None, None, None) => anyhow::bail!("a coverage source is required"),
            };
            let bag_size_kg = match (&coverage, bag_size) {
                (_, Some(bag)) => Some(*bag),
                (CoverageSource::Product { .. }, None) => None,
                (_, None) => Some(DEFAULT_ADHESIVE_BAG_KG),
            };
            let input = AdhesiveInput {
                label: String::new(),
                area_m2: *area,
                coverage,
                bag_size_kg,
                substrate: if *uneven { Substrate::Uneven } else { Substrate::Even },
                wastage_percent: *wastage,
            };
            emit(json, &adhesive::calculate_with(&input, &settings.adhesive)?, render::adhesive)
        }

        Commands::Grout { area, tile, joint, depth, wastage } => {
            let input = GroutInput {
                label: String::new(),
                area_m2: *area,
                tile_width_mm: tile.width_mm,
                tile_height_mm: tile.height_mm,
                joint_width_mm: *joint,
                tile_depth_mm: *depth,
                wastage_percent: *wastage,
            };
            emit(json, &grout::calculate_with(&input, &settings.grout)?, render::grout)
        }

        Commands::Spacers { tiles, area, tile, layout, wastage } => {
            let quantity = match (tiles, area, tile) {
                (Some(count), _, _) => TileQuantity::Count { tiles: *count },
                (None, Some(area), Some(tile)) => TileQuantity::Area {
                    area_m2: *area,
                    tile_width_mm: tile.width_mm,
                    tile_height_mm: tile.height_mm,
                },
                _ => anyhow::bail!("give --tiles, or --area with --tile"),
            };
            let input = SpacersInput {
                label: String::new(),
                tiles: quantity,
                layout: *layout,
                wastage_percent: *wastage,
            };
            emit(json, &spacers::calculate(&input)?, render::spacers)
        }

        Commands::Boards { area, board, wastage } => {
            let input = BackerBoardInput {
                wastage_percent: *wastage,
                ..BackerBoardInput::for_board(*area, *board)
            };
            emit(json, &sundries::backer_boards(&input)?, render::boards)
        }

        Commands::Masonry {
            wall_type,
            walls,
            openings,
            mix,
            unit_waste,
            mortar_waste,
            block_width,
            cavity_width,
            sand_bag,
        } => {
            let input = MasonryInput {
                label: String::new(),
                wall_type: *wall_type,
                walls: walls.clone(),
                openings: openings.clone(),
                block_width: BlockWidth::try_from(*block_width)?,
                mix_ratio: *mix,
                unit_waste_percent: *unit_waste,
                mortar_waste_percent: *mortar_waste,
                cavity_width_mm: *cavity_width,
                sand_bag_size: *sand_bag,
            };
            let result = masonry::calculate_with(&input, &settings.mortar)?;
            emit(json, &result, |r| render::masonry(&input, r))
        }

        Commands::Convert { family, value, from, to } => {
            let converted = convert_by_code((*family).into(), *value, from, to)?;
            let report = serde_json::json!({ "value": converted, "from": from, "to": to });
            emit(json, &report, |_| vec![format!("{} {} = {:.4} {}", value, from, converted, to)])
        }

        Commands::Density { volume, material } => {
            let tonnes = convert_density_to_weight(*volume, *material);
            let report = serde_json::json!({ "volume_m3": volume, "material": material, "tonnes": tonnes });
            emit(json, &report, |_| {
                vec![format!("{} m³ of {:?} ≈ {:.2} t", volume, material, tonnes)]
            })
        }

        Commands::Run { job } => {
            let items = CalculationItem::list_from_json(&read_text(job)?)
                .with_context(|| format!("failed to parse {}", job.display()))?;
            let mut entries = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let output = item
                    .run(&settings)
                    .with_context(|| format!("job item {} ({} '{}')", i, item.calc_type(), item.label()))?;
                entries.push(JobEntry {
                    label: item.label(),
                    calc_type: item.calc_type(),
                    output,
                });
            }
            emit(json, &entries, |entries| {
                let mut lines = Vec::new();
                for entry in entries {
                    if !entry.label.is_empty() {
                        lines.push(format!("[{}] {}", entry.calc_type, entry.label));
                    }
                    lines.extend(render::output(&entry.output));
                    lines.push(String::new());
                }
                lines
            })
        }

        Commands::Project { project } => {
            let project: TilingProject = serde_json::from_str(&read_text(project)?)
                .with_context(|| format!("failed to parse {}", project.display()))?;
            emit(json, &project.plan(&settings)?, render::plan)
        }

        Commands::Products => emit(json, &settings.adhesive.products, |p| render::products(p)),

        Commands::Settings => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print!("{}", settings.to_toml_string()?);
            }
            Ok(())
        }
    }
}
