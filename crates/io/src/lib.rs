//! File I/O for report grids.
//!
//! Two recognized tabular formats: CSV (with delimiter sniffing and
//! Windows-1252 fallback) and Excel (`.xls`/`.xlsx` via calamine,
//! export via rust_xlsxwriter). Anything else is `UnsupportedFormat`.

pub mod csv;
pub mod xlsx;

use std::path::Path;

use chrono::NaiveDate;
use prodsched_core::ScheduleError;
use prodsched_grid::Grid;

/// Load a grid from a file, dispatching on extension. `sheet` selects
/// a worksheet for Excel sources and is ignored for CSV.
pub fn import_grid(path: &Path, sheet: Option<&str>) -> Result<Grid, ScheduleError> {
    match extension(path).as_deref() {
        Some("csv") | Some("tsv") => csv::import(path),
        Some("xls") | Some("xlsx") => xlsx::import(path, sheet),
        _ => Err(unsupported(path)),
    }
}

/// Write a grid to a file, dispatching on extension.
pub fn export_grid(path: &Path, grid: &Grid) -> Result<(), ScheduleError> {
    match extension(path).as_deref() {
        Some("csv") | Some("tsv") => csv::export(path, grid),
        Some("xlsx") => xlsx::export(path, grid),
        _ => Err(unsupported(path)),
    }
}

/// Output artifact naming convention: `YYYYMMDD_<label>.<ext>`.
pub fn report_file_name(date: NaiveDate, label: &str, ext: &str) -> String {
    format!("{}_{label}.{ext}", date.format("%Y%m%d"))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn unsupported(path: &Path) -> ScheduleError {
    ScheduleError::UnsupportedFormat {
        path: path.display().to_string(),
    }
}
