// Excel grid import (xls, xlsx via calamine) and export (xlsx only)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use prodsched_core::ScheduleError;
use prodsched_grid::{CellValue, Grid};
use rust_xlsxwriter::Workbook;

/// Load one worksheet into a grid. `sheet` picks a worksheet by name;
/// `None` takes the first sheet. Legacy `.xls` files are read directly,
/// no conversion step.
pub fn import(path: &Path, sheet: Option<&str>) -> Result<Grid, ScheduleError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| ScheduleError::Io(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ScheduleError::Io(format!("no sheets in {}", path.display())))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ScheduleError::Io(format!("cannot read sheet '{sheet_name}': {e}")))?;

    let mut grid = Grid::new(sheet_name);

    // Range start offset: data may not begin at A1.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));

    for (row_idx, row) in range.rows().enumerate() {
        let grid_row = start_row + row_idx as u32 + 1;
        for (col_idx, cell) in row.iter().enumerate() {
            let grid_col = start_col + col_idx as u32 + 1;
            if let Some(value) = convert_cell(cell) {
                grid.set(grid_col, grid_row, value);
            }
        }
    }

    Ok(grid)
}

fn convert_cell(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        // Text cells go through from_input so date-formatted strings
        // become typed dates, as the engine's ledger scan expects.
        Data::String(s) => {
            if s.trim().is_empty() {
                None
            } else {
                Some(CellValue::from_input(s))
            }
        }
        Data::Float(n) => Some(CellValue::Number(*n)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Text(if *b { "TRUE" } else { "FALSE" }.into())),
        Data::Error(e) => Some(CellValue::Text(format!("#{e:?}"))),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => Some(CellValue::Date(datetime.date())),
            // No valid serial conversion: keep the raw serial number.
            None => Some(CellValue::Number(dt.as_f64())),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
    }
}

/// Write a grid as a single-worksheet xlsx file.
pub fn export(path: &Path, grid: &Grid) -> Result<(), ScheduleError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if !grid.name.is_empty() {
        worksheet.set_name(&grid.name).map_err(xlsx_err)?;
    }

    for row in 1..=grid.max_row() {
        for col in 1..=grid.max_col() {
            let value = grid.get(col, row);
            let (r, c) = (row - 1, (col - 1) as u16);
            match value {
                CellValue::Empty => {}
                CellValue::Number(n) => {
                    worksheet.write_number(r, c, *n).map_err(xlsx_err)?;
                }
                CellValue::Text(s) => {
                    worksheet.write_string(r, c, s).map_err(xlsx_err)?;
                }
                CellValue::Date(d) => {
                    worksheet
                        .write_string(r, c, d.format("%Y/%m/%d").to_string())
                        .map_err(xlsx_err)?;
                }
            }
        }
    }

    workbook.save(path).map_err(xlsx_err)?;
    Ok(())
}

fn xlsx_err(e: rust_xlsxwriter::XlsxError) -> ScheduleError {
    ScheduleError::Io(e.to_string())
}
