//! Core - grid storage and low-level helpers
//!
//! Macros are declared first so every sibling module can use them.

#[macro_use]
pub mod utils;
pub mod grid;
pub mod random;
