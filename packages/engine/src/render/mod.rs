//! Rendering - draws a Grid, never mutates it
//!
//! - pixels - CPU rasterizer into an ABGR u32 surface (what JS blits)
//! - canvas - copies a pixel surface into a 2D canvas

pub mod canvas;
pub mod pixels;

pub use canvas::CanvasPresenter;
pub use pixels::PixelRenderer;

use crate::domain::color::Color;
use crate::domain::config::SimulationConfig;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderParams {
    pub cell_size: u32,
    pub alive_color: Color,
    pub dead_color: Color,
    pub show_grid_lines: bool,
    pub grid_line_color: Color,
}

impl RenderParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        RenderParams {
            cell_size: config.cell_size(),
            alive_color: config.alive_color,
            dead_color: config.dead_color,
            show_grid_lines: config.show_grid,
            grid_line_color: config.grid_line_color,
        }
    }
}

/// Draw the grid as it exists at call time
pub trait Renderer {
    fn render(&mut self, grid: &Grid, params: &RenderParams);
}
