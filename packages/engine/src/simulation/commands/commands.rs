use std::sync::Arc;

use crate::domain::error::EngineError;
use crate::systems::{fill, placement};

use super::input::{pointer_to_cell, resolve_touches};
use super::LifeCore;

pub(super) fn toggle_cell(world: &mut LifeCore, row: u32, col: u32) -> bool {
    if world.grid.toggle(row, col).is_none() {
        return false;
    }
    world.refresh_stats();
    true
}

pub(super) fn pointer_down(world: &mut LifeCore, px: f64, py: f64, origin_x: f64, origin_y: f64) -> bool {
    let cell_size = world.config.cell_size() as f64;
    match pointer_to_cell(px, py, origin_x, origin_y, cell_size, world.grid.size()) {
        Some((row, col)) => toggle_cell(world, row, col),
        None => false,
    }
}

/// One toggle per distinct cell, one stats refresh per event
pub(super) fn touch_start(world: &mut LifeCore, points: &[(f64, f64)], origin_x: f64, origin_y: f64) -> u32 {
    let cell_size = world.config.cell_size() as f64;
    let cells = resolve_touches(points, origin_x, origin_y, cell_size, world.grid.size());
    for &(row, col) in cells.iter() {
        world.grid.toggle(row, col);
    }
    if !cells.is_empty() {
        world.refresh_stats();
    }
    cells.len() as u32
}

/// Overlay a catalog preset at the grid center; the generation count is kept
pub(super) fn place_pattern(world: &mut LifeCore, name: &str) -> Result<(), EngineError> {
    let pattern = world.patterns.require(name)?;
    world.grid = placement::place_pattern(&world.grid, pattern);
    world.refresh_stats();
    Ok(())
}

pub(super) fn load_patterns_json(world: &mut LifeCore, json: &str) -> Result<usize, EngineError> {
    let mut catalog = (*world.patterns).clone();
    match catalog.merge_bundle_json(json) {
        Ok(added) => {
            world.patterns = Arc::new(catalog);
            console_log!("loaded {} patterns ({} total)", added, world.patterns.len());
            Ok(added)
        }
        Err(e) => {
            console_warn!("pattern bundle rejected: {}", e);
            Err(e)
        }
    }
}

pub(super) fn random_fill(world: &mut LifeCore, density: f64) {
    world.grid = fill::random_fill(world.grid.size(), density, &mut world.rng_state);
    world.generation = 0;
    world.refresh_stats();
}

pub(super) fn clear(world: &mut LifeCore) {
    world.grid.clear();
    world.generation = 0;
    world.refresh_stats();
}

pub(super) fn reset(world: &mut LifeCore) {
    world.scheduler.pause();
    clear(world);
}
