use std::collections::HashSet;

use prodsched_grid::Grid;

use crate::classify::is_new_marker;
use crate::model::{
    ledger_col, DedupKey, LedgerRecord, NoveltyFilter, LEDGER_FIRST_ROW, SCHEDULE_FIRST_ROW,
    SCHEDULE_GROUPS,
};
use crate::normalize::normalize_cell;
use crate::window::DateWindow;

/// Scan the schedule grid's key columns and collect the ledger rows
/// that match.
///
/// Group 1 is scanned fully before group 2; within a group, schedule
/// rows ascend, and for each keyed schedule row the ledger is scanned
/// in ascending row order until the first acceptance. A ledger row is
/// accepted when its normalized key equals the normalized schedule
/// key, its effective date falls inside the window, it survives the
/// novelty filter, and its raw six-cell identity has not already
/// produced a row. A duplicate identity does not stop the inner scan;
/// a later distinct ledger row may still be accepted for the same
/// schedule row.
pub fn find_matches(
    schedule: &Grid,
    ledger: &Grid,
    window: DateWindow,
    filter: NoveltyFilter,
) -> Vec<LedgerRecord> {
    let mut seen: HashSet<DedupKey> = HashSet::new();
    let mut matches = Vec::new();

    for group in &SCHEDULE_GROUPS {
        for sched_row in SCHEDULE_FIRST_ROW..=schedule.max_row() {
            let sched_key = normalize_cell(schedule.get(group.key, sched_row));
            if sched_key.is_empty() {
                continue;
            }

            for req_row in LEDGER_FIRST_ROW..=ledger.max_row() {
                let req_key = normalize_cell(ledger.get(ledger_col::KEY, req_row));
                if req_key.is_empty() || req_key != sched_key {
                    continue;
                }

                // Missing or unparseable dates exclude the row outright.
                let Some(effective) = ledger.date(ledger_col::EFFECTIVE_DATE, req_row) else {
                    continue;
                };
                if !window.contains(effective) {
                    continue;
                }

                if filter == NoveltyFilter::NewOnly
                    && !is_new_marker(ledger.get(ledger_col::MARKER, req_row))
                {
                    continue;
                }

                let identity = DedupKey::of_row(ledger, req_row);
                if seen.contains(&identity) {
                    continue;
                }
                seen.insert(identity);

                matches.push(LedgerRecord::from_grid(ledger, req_row));
                break; // at most one acceptance per schedule row / group
            }
        }
    }

    matches
}
