use chrono::NaiveDate;
use prodsched_grid::{CellValue, Grid};

use crate::model::{output_col, LedgerRecord, OutputRow, OUTPUT_FIRST_ROW};

/// Map a matched ledger row into the output schema.
///
/// The scheduled date is the report's target date, not the ledger's
/// effective date, and the quantity starts as the ledger's scheduled
/// quantity — provisional until the cross-reference resolver runs.
pub fn to_output_row(record: &LedgerRecord, target_date: NaiveDate) -> OutputRow {
    OutputRow {
        key: record.key.as_text().trim().to_string(),
        scheduled_date: target_date,
        site_name: record.site_name.clone(),
        extra: record.extra.clone(),
        marker: record.marker.clone(),
        assignee: record.assignee.clone(),
        quantity: record.scheduled_qty.clone(),
    }
}

/// Append output rows to the template grid, starting at row 2 (row 1
/// is the template's header). Returns the first unused row index.
pub fn append_rows(output: &mut Grid, rows: &[OutputRow]) -> u32 {
    let mut out_row = OUTPUT_FIRST_ROW;
    for row in rows {
        output.set(output_col::KEY, out_row, CellValue::Text(row.key.clone()));
        output.set(output_col::DATE, out_row, CellValue::Date(row.scheduled_date));
        output.set(output_col::SITE_NAME, out_row, row.site_name.clone());
        output.set(output_col::EXTRA, out_row, row.extra.clone());
        output.set(output_col::MARKER, out_row, row.marker.clone());
        output.set(output_col::ASSIGNEE, out_row, row.assignee.clone());
        output.set(output_col::QUANTITY, out_row, row.quantity.clone());
        out_row += 1;
    }
    out_row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> LedgerRecord {
        LedgerRecord {
            row: 2,
            site_name: CellValue::Text("North Plant".into()),
            assignee: CellValue::Text("tanaka".into()),
            key: CellValue::Text("  A-100 ".into()),
            marker: CellValue::Text("$NEW".into()),
            extra: CellValue::Text("rush".into()),
            scheduled_qty: CellValue::Number(10.0),
            effective_date: NaiveDate::from_ymd_opt(2026, 8, 1),
        }
    }

    #[test]
    fn stamps_target_date_not_effective_date() {
        let target = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let row = to_output_row(&record(), target);
        assert_eq!(row.scheduled_date, target);
        assert_eq!(row.key, "A-100"); // trimmed raw, not normalized
        assert_eq!(row.quantity, CellValue::Number(10.0));
    }

    #[test]
    fn appends_from_row_two() {
        let target = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let rows = vec![to_output_row(&record(), target); 3];
        let mut output = Grid::new("output");
        output.set_input(1, 1, "header");

        let next = append_rows(&mut output, &rows);
        assert_eq!(next, 5);
        assert_eq!(output.text(output_col::KEY, 2), "A-100");
        assert_eq!(output.text(output_col::DATE, 2), "2026/08/26");
        assert_eq!(output.text(output_col::ASSIGNEE, 4), "tanaka");
        assert_eq!(output.text(output_col::QUANTITY, 4), "10");
        // Header untouched
        assert_eq!(output.text(1, 1), "header");
    }
}
