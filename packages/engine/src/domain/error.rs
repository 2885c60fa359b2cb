//! Errors raised at the data boundaries (JSON bundles, config documents, colors).
//! Grid computation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    InvalidColor(String),

    #[error("pattern {0:?} has no live cells")]
    EmptyPattern(String),

    #[error("pattern {0:?} is defined more than once")]
    DuplicatePattern(String),

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
}
