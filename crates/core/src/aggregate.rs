use prodsched_grid::Grid;

use crate::classify::{novelty_of, region_of};
use crate::coerce::safe_int;
use crate::model::{AggregateCounts, SCHEDULE_FIRST_ROW, SCHEDULE_GROUPS};

/// Sum schedule quantities into the four (region, novelty) buckets.
///
/// Scans both column groups over the occupied rows of the sheet. Every
/// non-empty keyed row contributes, independent of the novelty filter
/// used for the output rows — the summary is never filtered.
pub fn aggregate_schedule(schedule: &Grid) -> AggregateCounts {
    let mut counts = AggregateCounts::default();

    for group in &SCHEDULE_GROUPS {
        for row in SCHEDULE_FIRST_ROW..=schedule.max_row() {
            let key_cell = schedule.get(group.key, row);
            if key_cell.is_empty() {
                continue;
            }

            let region = region_of(&key_cell.as_text());
            let novelty = novelty_of(schedule.get(group.marker, row));
            let quantity = safe_int(schedule.get(group.quantity, row));
            counts.add(region, novelty, quantity);
        }
    }

    counts
}
