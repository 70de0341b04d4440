use chrono::NaiveDate;
use prodsched_grid::{CellKey, CellValue, Grid};
use serde::Serialize;

use crate::classify::{Novelty, Region};
use crate::window::DateWindow;

// ---------------------------------------------------------------------------
// Schedule grid layout
// ---------------------------------------------------------------------------

/// One of the two parallel column regions of the schedule sheet.
/// Both regions carry the same four fields and are scanned identically;
/// group 1 is always visited before group 2 where order is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleColumnGroup {
    pub key: u32,
    pub marker: u32,
    pub associate: u32,
    pub quantity: u32,
}

/// Group 1: columns C..F.
pub const GROUP_ONE: ScheduleColumnGroup = ScheduleColumnGroup {
    key: 3,
    marker: 4,
    associate: 5,
    quantity: 6,
};

/// Group 2: columns I..L.
pub const GROUP_TWO: ScheduleColumnGroup = ScheduleColumnGroup {
    key: 9,
    marker: 10,
    associate: 11,
    quantity: 12,
};

pub const SCHEDULE_GROUPS: [ScheduleColumnGroup; 2] = [GROUP_ONE, GROUP_TWO];

/// Schedule data begins below a two-row header.
pub const SCHEDULE_FIRST_ROW: u32 = 3;

// ---------------------------------------------------------------------------
// Ledger grid layout
// ---------------------------------------------------------------------------

pub mod ledger_col {
    pub const SITE_NAME: u32 = 1;
    pub const ASSIGNEE: u32 = 2;
    pub const KEY: u32 = 3;
    pub const MARKER: u32 = 4;
    pub const EXTRA: u32 = 5;
    pub const SCHEDULED_QTY: u32 = 6;
    pub const EFFECTIVE_DATE: u32 = 7;
}

/// Ledger data begins below a one-row header.
pub const LEDGER_FIRST_ROW: u32 = 2;

/// One row of the request ledger.
#[derive(Debug, Clone)]
pub struct LedgerRecord {
    pub row: u32,
    pub site_name: CellValue,
    pub assignee: CellValue,
    pub key: CellValue,
    pub marker: CellValue,
    pub extra: CellValue,
    pub scheduled_qty: CellValue,
    /// `None` when the date cell is missing or unparseable; such rows
    /// are always excluded from matching.
    pub effective_date: Option<NaiveDate>,
}

impl LedgerRecord {
    pub fn from_grid(ledger: &Grid, row: u32) -> Self {
        Self {
            row,
            site_name: ledger.get(ledger_col::SITE_NAME, row).clone(),
            assignee: ledger.get(ledger_col::ASSIGNEE, row).clone(),
            key: ledger.get(ledger_col::KEY, row).clone(),
            marker: ledger.get(ledger_col::MARKER, row).clone(),
            extra: ledger.get(ledger_col::EXTRA, row).clone(),
            scheduled_qty: ledger.get(ledger_col::SCHEDULED_QTY, row).clone(),
            effective_date: ledger.date(ledger_col::EFFECTIVE_DATE, row),
        }
    }
}

/// Identity of a matched ledger row for duplicate suppression: the six
/// raw cells A..F, not the normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey([CellKey; 6]);

impl DedupKey {
    pub fn of_row(ledger: &Grid, row: u32) -> Self {
        Self([
            ledger.key(ledger_col::SITE_NAME, row),
            ledger.key(ledger_col::ASSIGNEE, row),
            ledger.key(ledger_col::KEY, row),
            ledger.key(ledger_col::MARKER, row),
            ledger.key(ledger_col::EXTRA, row),
            ledger.key(ledger_col::SCHEDULED_QTY, row),
        ])
    }
}

// ---------------------------------------------------------------------------
// Output grid layout
// ---------------------------------------------------------------------------

pub mod output_col {
    pub const KEY: u32 = 1;
    pub const DATE: u32 = 2;
    pub const SITE_NAME: u32 = 3;
    pub const EXTRA: u32 = 4;
    pub const MARKER: u32 = 5;
    pub const ASSIGNEE: u32 = 6;
    pub const QUANTITY: u32 = 9;
}

/// Row 1 of the output template holds headers; appended rows start here.
pub const OUTPUT_FIRST_ROW: u32 = 2;

/// A matched ledger row mapped into the output schema. The quantity is
/// provisional until the cross-reference resolver has run.
#[derive(Debug, Clone)]
pub struct OutputRow {
    pub key: String,
    pub scheduled_date: NaiveDate,
    pub site_name: CellValue,
    pub extra: CellValue,
    pub marker: CellValue,
    pub assignee: CellValue,
    pub quantity: CellValue,
}

// ---------------------------------------------------------------------------
// Filters + aggregate counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoveltyFilter {
    All,
    NewOnly,
}

impl std::fmt::Display for NoveltyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::NewOnly => write!(f, "new_only"),
        }
    }
}

/// The four summary totals: (region, novelty) buckets over the full
/// schedule grid. Never filtered by the novelty filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregateCounts {
    pub region_a_new: i64,
    pub region_b_new: i64,
    pub region_a_old: i64,
    pub region_b_old: i64,
}

impl AggregateCounts {
    pub fn add(&mut self, region: Region, novelty: Novelty, quantity: i64) {
        let bucket = match (region, novelty) {
            (Region::A, Novelty::New) => &mut self.region_a_new,
            (Region::B, Novelty::New) => &mut self.region_b_new,
            (Region::A, Novelty::Old) => &mut self.region_a_old,
            (Region::B, Novelty::Old) => &mut self.region_b_old,
        };
        *bucket += quantity;
    }

    pub fn total(&self) -> i64 {
        self.region_a_new + self.region_b_new + self.region_a_old + self.region_b_old
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub target_date: NaiveDate,
    pub novelty_filter: NoveltyFilter,
    pub window: DateWindow,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    pub meta: ReportMeta,
    pub counts: AggregateCounts,
    pub rows_written: usize,
    #[serde(skip_serializing)]
    pub output: Grid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Novelty, Region};

    #[test]
    fn dedup_key_uses_raw_cells() {
        let mut ledger = Grid::new("Sheet3");
        for col in 1..=6 {
            ledger.set_input(col, 2, &format!("v{col}"));
            ledger.set_input(col, 3, &format!("v{col}"));
        }
        // Column G differs but is not part of the identity
        ledger.set_input(7, 2, "2026/01/01");
        ledger.set_input(7, 3, "2026/02/02");
        assert_eq!(DedupKey::of_row(&ledger, 2), DedupKey::of_row(&ledger, 3));

        ledger.set_input(6, 3, "different");
        assert_ne!(DedupKey::of_row(&ledger, 2), DedupKey::of_row(&ledger, 3));
    }

    #[test]
    fn counts_accumulate_and_total() {
        let mut counts = AggregateCounts::default();
        counts.add(Region::A, Novelty::New, 10);
        counts.add(Region::A, Novelty::New, 5);
        counts.add(Region::B, Novelty::Old, 7);
        assert_eq!(counts.region_a_new, 15);
        assert_eq!(counts.region_b_old, 7);
        assert_eq!(counts.total(), 22);
    }

    #[test]
    fn ledger_record_reads_dates_leniently() {
        let mut ledger = Grid::new("Sheet3");
        ledger.set_input(3, 2, "A-1");
        ledger.set_input(7, 2, "2026/01/15");
        let rec = LedgerRecord::from_grid(&ledger, 2);
        assert_eq!(
            rec.effective_date,
            NaiveDate::from_ymd_opt(2026, 1, 15)
        );

        ledger.set_input(7, 3, "soon");
        let rec = LedgerRecord::from_grid(&ledger, 3);
        assert_eq!(rec.effective_date, None);
    }
}
