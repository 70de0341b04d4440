use chrono::{Local, NaiveDate};
use prodsched_grid::Grid;

use crate::aggregate::aggregate_schedule;
use crate::matcher::find_matches;
use crate::model::{NoveltyFilter, OutputRow, ReportMeta, ReportResult, OUTPUT_FIRST_ROW};
use crate::resolver::resolve_quantities;
use crate::transform::{append_rows, to_output_row};
use crate::window::DateWindow;

/// Parameters of one report run.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// The date the report represents; stamped into every output row.
    pub target_date: NaiveDate,
    pub novelty_filter: NoveltyFilter,
}

/// Pre-loaded grids for one run. The template is consumed and becomes
/// the output grid.
pub struct ReportInput {
    pub schedule: Grid,
    pub ledger: Grid,
    pub template: Grid,
}

/// Run the full reconciliation with the date window anchored to the
/// current date (not the target report date — observed behavior of
/// the report this engine reproduces).
pub fn run(config: &ReportConfig, input: ReportInput) -> ReportResult {
    let window = DateWindow::around(Local::now().date_naive());
    run_with_window(config, input, window)
}

/// Run with an explicit date window. Deterministic: per-row parsing
/// problems degrade to exclusion or zero, never to an error.
pub fn run_with_window(
    config: &ReportConfig,
    input: ReportInput,
    window: DateWindow,
) -> ReportResult {
    let ReportInput {
        schedule,
        ledger,
        template: mut output,
    } = input;

    let records = find_matches(&schedule, &ledger, window, config.novelty_filter);
    let rows: Vec<OutputRow> = records
        .iter()
        .map(|r| to_output_row(r, config.target_date))
        .collect();

    let next_row = append_rows(&mut output, &rows);
    resolve_quantities(&mut output, &schedule, OUTPUT_FIRST_ROW, next_row);

    // Always over the full schedule grid, never over the output rows.
    let counts = aggregate_schedule(&schedule);

    ReportResult {
        meta: ReportMeta {
            target_date: config.target_date,
            novelty_filter: config.novelty_filter,
            window,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: Local::now().to_rfc3339(),
        },
        counts,
        rows_written: rows.len(),
        output,
    }
}
