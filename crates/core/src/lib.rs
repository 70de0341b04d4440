//! `prodsched-core` — schedule/ledger reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded grids, returns the filled
//! output grid plus aggregate counts. No CLI or IO dependencies.

pub mod aggregate;
pub mod classify;
pub mod coerce;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod resolver;
pub mod transform;
pub mod window;

pub use engine::{run, run_with_window, ReportConfig, ReportInput};
pub use error::ScheduleError;
pub use model::{AggregateCounts, NoveltyFilter, ReportResult};
pub use window::DateWindow;
