//! Terminal output formatting

pub mod formatters;

pub use formatters::{guess_row, tile_row};
