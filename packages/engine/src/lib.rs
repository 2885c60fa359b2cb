//! Lifegrid Engine - toroidal Game of Life for the browser canvas, in WASM
//!
//! Architecture:
//! - core/        - Grid storage, toroidal indexing, RNG, macros
//! - domain/      - Patterns, config, colors, errors
//! - systems/     - Pure generation step, placement, random fill
//! - simulation/  - Session state, scheduler, input, wasm facade
//! - render/      - Pixel renderer and canvas presenter

// Macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod render;

// Short paths used throughout the crate
pub use crate::core::grid;
pub use domain::patterns;

use wasm_bindgen::prelude::*;

#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Lifegrid engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Built-in preset names as a JSON array
#[wasm_bindgen]
pub fn pattern_names_json() -> String {
    let catalog = patterns::PatternCatalog::builtin();
    serde_json::to_string(&catalog.names()).unwrap_or_else(|_| "[]".to_string())
}

// Re-export main types
pub use domain::color::Color;
pub use domain::config::SimulationConfig;
pub use domain::error::EngineError;
pub use grid::Grid;
pub use patterns::{PatternCatalog, PatternDefinition};
pub use simulation::{Life, LifeCore, PerfStats, RunState, Scheduler, Stats};
pub use systems::{next_generation, place_pattern, random_fill, step, GenerationResult};
