use crate::domain::color::Color;
use crate::domain::config::{
    clamp_canvas_size, clamp_density, clamp_grid_size, clamp_speed, ConfigPatch, SimulationConfig,
};
use crate::domain::error::EngineError;
use crate::grid::Grid;

use super::perf_stats::PerfStats;
use super::LifeCore;

fn warn_if_clamped<T: PartialEq + std::fmt::Display>(field: &str, requested: T, applied: T) {
    if requested != applied {
        console_warn!("{} {} out of range, using {}", field, requested, applied);
    }
}

pub(super) fn enable_perf_metrics(world: &mut LifeCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats = PerfStats::default();
    }
}

pub(super) fn set_speed(world: &mut LifeCore, speed: i64) {
    let applied = clamp_speed(speed);
    warn_if_clamped("speed", speed, applied as i64);
    world.config.speed = applied;
}

/// Any size change reallocates a cleared grid at generation 0. Unlike
/// `reset`, the run state is left as is: a running session keeps stepping
/// on the new grid.
pub(super) fn set_grid_size(world: &mut LifeCore, size: i64) {
    let applied = clamp_grid_size(size);
    warn_if_clamped("grid size", size, applied as i64);
    world.config.grid_size = applied;
    if applied != world.grid.size() {
        resize(world, applied);
    }
}

fn resize(world: &mut LifeCore, size: u32) {
    world.grid = Grid::new(size);
    world.generation = 0;
    world.scheduler.rearm();
    world.refresh_stats();
    console_log!("grid resized to {}x{}", size, size);
}

pub(super) fn set_show_grid(world: &mut LifeCore, show: bool) {
    world.config.show_grid = show;
}

pub(super) fn set_alive_color(world: &mut LifeCore, color: &str) -> Result<(), EngineError> {
    world.config.alive_color = Color::parse_hex(color)?;
    Ok(())
}

pub(super) fn set_dead_color(world: &mut LifeCore, color: &str) -> Result<(), EngineError> {
    world.config.dead_color = Color::parse_hex(color)?;
    Ok(())
}

pub(super) fn set_grid_line_color(world: &mut LifeCore, color: &str) -> Result<(), EngineError> {
    world.config.grid_line_color = Color::parse_hex(color)?;
    Ok(())
}

pub(super) fn set_density(world: &mut LifeCore, density: f64) {
    let applied = clamp_density(density);
    if applied != density {
        console_warn!("density {} out of range, using {}", density, applied);
    }
    world.config.density = applied;
}

pub(super) fn set_canvas_size(world: &mut LifeCore, px: i64) {
    let applied = clamp_canvas_size(px);
    warn_if_clamped("canvas size", px, applied as i64);
    world.config.canvas_size = applied;
}

/// Partial JSON update. Parse errors leave the config untouched.
pub(super) fn apply_config_json(world: &mut LifeCore, json: &str) -> Result<(), EngineError> {
    let patch = match ConfigPatch::from_json(json) {
        Ok(patch) => patch,
        Err(e) => {
            console_warn!("config rejected: {}", e);
            return Err(e);
        }
    };
    let next: SimulationConfig = patch.apply_to(&world.config);
    let resized = next.grid_size != world.grid.size();
    world.config = next;
    if resized {
        let size = world.config.grid_size;
        resize(world, size);
    }
    Ok(())
}
