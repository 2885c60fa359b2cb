//! Systems - pure functions over a Grid
//!
//! Nothing here touches session state, timers or drawing surfaces:
//! - life      - Conway rule and the generation step
//! - placement - centered, clipped pattern overlay
//! - fill      - random grids

pub mod fill;
pub mod life;
pub mod placement;

pub use fill::random_fill;
pub use life::{next_generation, next_state, step, GenerationResult};
pub use placement::{pattern_origin, place_pattern};
