use std::collections::HashMap;

use chrono::NaiveDate;

use crate::cell::{CellKey, CellValue};

static EMPTY: CellValue = CellValue::Empty;

/// Sparse 2-D grid of typed cells, addressed by 1-based
/// `(column, row)` so spreadsheet-style scan ranges read literally.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    pub name: String,
    cells: HashMap<(u32, u32), CellValue>,
    max_col: u32,
    max_row: u32,
}

impl Grid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
            max_col: 0,
            max_row: 0,
        }
    }

    /// Store a cell. Empty values still extend the occupied bounds,
    /// matching how loaded sheets report trailing blank cells.
    pub fn set(&mut self, col: u32, row: u32, value: CellValue) {
        debug_assert!(col >= 1 && row >= 1, "grid addressing is 1-based");
        self.max_col = self.max_col.max(col);
        self.max_row = self.max_row.max(row);
        if value.is_empty() {
            self.cells.remove(&(col, row));
        } else {
            self.cells.insert((col, row), value);
        }
    }

    pub fn set_input(&mut self, col: u32, row: u32, input: &str) {
        self.set(col, row, CellValue::from_input(input));
    }

    pub fn get(&self, col: u32, row: u32) -> &CellValue {
        self.cells.get(&(col, row)).unwrap_or(&EMPTY)
    }

    pub fn is_blank(&self, col: u32, row: u32) -> bool {
        self.get(col, row).is_empty()
    }

    pub fn text(&self, col: u32, row: u32) -> String {
        self.get(col, row).as_text()
    }

    pub fn date(&self, col: u32, row: u32) -> Option<NaiveDate> {
        self.get(col, row).as_date()
    }

    pub fn key(&self, col: u32, row: u32) -> CellKey {
        self.get(col, row).key()
    }

    /// Highest row index ever written (including explicit empties).
    pub fn max_row(&self) -> u32 {
        self.max_row
    }

    /// Highest column index ever written.
    pub fn max_col(&self) -> u32 {
        self.max_col
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
