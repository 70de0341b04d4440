//! `prodsched-grid` — sparse tabular grid model.
//!
//! A `Grid` is a 2-D sparse container of typed cells addressed by
//! 1-based `(column, row)`. No formulas, no formatting: cells hold
//! plain values and the engine crates read them through typed
//! accessors.

pub mod cell;
pub mod grid;

pub use cell::{CellKey, CellValue};
pub use grid::Grid;
