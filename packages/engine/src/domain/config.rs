//! Simulation configuration
//!
//! Every numeric option is clamped on the way in; out-of-range values from a
//! misbehaving caller snap to the nearest valid bound instead of failing.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::EngineError;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 20;
pub const DEFAULT_SPEED: u32 = 10;

pub const MIN_GRID_SIZE: u32 = 10;
pub const MAX_GRID_SIZE: u32 = 100;
pub const GRID_SIZE_STEP: u32 = 10;
pub const DEFAULT_GRID_SIZE: u32 = 50;

pub const MIN_CANVAS_SIZE: u32 = 100;
pub const MAX_CANVAS_SIZE: u32 = 2000;
pub const DEFAULT_CANVAS_SIZE: u32 = 600;

pub const DEFAULT_DENSITY: f64 = 0.3;

pub const DEFAULT_ALIVE_COLOR: Color = Color::rgb(0x22, 0xc5, 0x5e);
pub const DEFAULT_DEAD_COLOR: Color = Color::rgb(0x11, 0x18, 0x27);
pub const DEFAULT_GRID_LINE_COLOR: Color = Color::rgb(0x37, 0x41, 0x51);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulationConfig {
    /// Generations per second while running
    pub speed: u32,
    pub grid_size: u32,
    pub show_grid: bool,
    pub alive_color: Color,
    pub dead_color: Color,
    pub grid_line_color: Color,
    /// Per-cell alive probability for random fills
    pub density: f64,
    /// Edge of the square drawing surface in pixels
    pub canvas_size: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            speed: DEFAULT_SPEED,
            grid_size: DEFAULT_GRID_SIZE,
            show_grid: true,
            alive_color: DEFAULT_ALIVE_COLOR,
            dead_color: DEFAULT_DEAD_COLOR,
            grid_line_color: DEFAULT_GRID_LINE_COLOR,
            density: DEFAULT_DENSITY,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl SimulationConfig {
    /// Minimum time between generations while running
    pub fn step_interval_ms(&self) -> f64 {
        1000.0 / self.speed.max(MIN_SPEED) as f64
    }

    /// Pixel edge of one cell; never below 1
    pub fn cell_size(&self) -> u32 {
        (self.canvas_size / self.grid_size.max(1)).max(1)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Partial config document; absent fields keep their current value
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    pub speed: Option<i64>,
    pub grid_size: Option<i64>,
    pub show_grid: Option<bool>,
    pub alive_color: Option<Color>,
    pub dead_color: Option<Color>,
    pub grid_line_color: Option<Color>,
    pub density: Option<f64>,
    pub canvas_size: Option<i64>,
}

impl ConfigPatch {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply on top of `base`, clamping every supplied value
    pub fn apply_to(&self, base: &SimulationConfig) -> SimulationConfig {
        SimulationConfig {
            speed: self.speed.map(clamp_speed).unwrap_or(base.speed),
            grid_size: self.grid_size.map(clamp_grid_size).unwrap_or(base.grid_size),
            show_grid: self.show_grid.unwrap_or(base.show_grid),
            alive_color: self.alive_color.unwrap_or(base.alive_color),
            dead_color: self.dead_color.unwrap_or(base.dead_color),
            grid_line_color: self.grid_line_color.unwrap_or(base.grid_line_color),
            density: self.density.map(clamp_density).unwrap_or(base.density),
            canvas_size: self.canvas_size.map(clamp_canvas_size).unwrap_or(base.canvas_size),
        }
    }
}

pub fn clamp_speed(speed: i64) -> u32 {
    speed.clamp(MIN_SPEED as i64, MAX_SPEED as i64) as u32
}

/// Clamp to [10, 100], then snap to the nearest multiple of 10 (ties round up)
pub fn clamp_grid_size(size: i64) -> u32 {
    let step = GRID_SIZE_STEP as i64;
    let clamped = size.clamp(MIN_GRID_SIZE as i64, MAX_GRID_SIZE as i64);
    (((clamped + step / 2) / step) * step) as u32
}

/// NaN counts as 0
pub fn clamp_density(density: f64) -> f64 {
    if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    }
}

pub fn clamp_canvas_size(px: i64) -> u32 {
    px.clamp(MIN_CANVAS_SIZE as i64, MAX_CANVAS_SIZE as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_clamps_and_snaps() {
        assert_eq!(clamp_grid_size(0), 10);
        assert_eq!(clamp_grid_size(-40), 10);
        assert_eq!(clamp_grid_size(14), 10);
        assert_eq!(clamp_grid_size(15), 20);
        assert_eq!(clamp_grid_size(57), 60);
        assert_eq!(clamp_grid_size(100), 100);
        assert_eq!(clamp_grid_size(1_000), 100);
    }

    #[test]
    fn speed_and_density_clamp() {
        assert_eq!(clamp_speed(0), 1);
        assert_eq!(clamp_speed(7), 7);
        assert_eq!(clamp_speed(99), 20);
        assert_eq!(clamp_density(-0.5), 0.0);
        assert_eq!(clamp_density(1.5), 1.0);
        assert_eq!(clamp_density(f64::NAN), 0.0);
    }

    #[test]
    fn interval_and_cell_size_follow_config() {
        let config = SimulationConfig { speed: 4, grid_size: 30, canvas_size: 600, ..Default::default() };
        assert_eq!(config.step_interval_ms(), 250.0);
        assert_eq!(config.cell_size(), 20);

        let tiny = SimulationConfig { grid_size: 100, canvas_size: 50, ..Default::default() };
        assert_eq!(tiny.cell_size(), 1);
    }

    #[test]
    fn json_round_trip_uses_camel_case_and_hex_colors() {
        let json = SimulationConfig::default().to_json();
        assert!(json.contains("\"gridSize\":50"));
        assert!(json.contains("\"aliveColor\":\"#22c55e\""));
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SimulationConfig::default());
    }

    #[test]
    fn patch_keeps_missing_fields_and_clamps_present_ones() {
        let patch = ConfigPatch::from_json(r##"{"speed": 50, "gridSize": 33, "deadColor": "#000000"}"##).unwrap();
        let base = SimulationConfig::default();
        let next = patch.apply_to(&base);
        assert_eq!(next.speed, 20);
        assert_eq!(next.grid_size, 30);
        assert_eq!(next.dead_color, Color::rgb(0, 0, 0));
        assert_eq!(next.alive_color, base.alive_color);
        assert_eq!(next.show_grid, base.show_grid);
    }

    #[test]
    fn patch_with_bad_color_is_an_error() {
        assert!(ConfigPatch::from_json(r#"{"aliveColor": "green"}"#).is_err());
    }
}
