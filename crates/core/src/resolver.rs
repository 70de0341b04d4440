use prodsched_grid::Grid;

use crate::model::{output_col, SCHEDULE_FIRST_ROW, SCHEDULE_GROUPS};
use crate::normalize::{normalize_cell, normalize_key};

/// Second cross-reference pass: refine each output row's quantity
/// from the schedule grid.
///
/// For each output row in `[first_row, next_row)`, search schedule
/// group 1 for a row whose (normalized key, associate, marker) triple
/// equals the output row's (normalized key, extra, marker); on a hit,
/// copy that row's group-1 quantity and stop. Otherwise repeat against
/// group 2 with its own columns. First match per group wins; a row
/// with no match in either group keeps its provisional quantity.
pub fn resolve_quantities(output: &mut Grid, schedule: &Grid, first_row: u32, next_row: u32) {
    for out_row in first_row..next_row {
        let out_key = normalize_key(&output.text(output_col::KEY, out_row));
        if out_key.is_empty() {
            continue;
        }

        'groups: for group in &SCHEDULE_GROUPS {
            for sched_row in SCHEDULE_FIRST_ROW..=schedule.max_row() {
                let sched_key = normalize_cell(schedule.get(group.key, sched_row));
                if sched_key.is_empty() || sched_key != out_key {
                    continue;
                }
                if schedule.get(group.associate, sched_row)
                    != output.get(output_col::EXTRA, out_row)
                {
                    continue;
                }
                if schedule.get(group.marker, sched_row)
                    != output.get(output_col::MARKER, out_row)
                {
                    continue;
                }

                let quantity = schedule.get(group.quantity, sched_row).clone();
                output.set(output_col::QUANTITY, out_row, quantity);
                break 'groups;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodsched_grid::CellValue;

    fn output_row(output: &mut Grid, row: u32, key: &str, extra: &str, marker: &str, qty: &str) {
        output.set_input(output_col::KEY, row, key);
        output.set_input(output_col::EXTRA, row, extra);
        output.set_input(output_col::MARKER, row, marker);
        output.set_input(output_col::QUANTITY, row, qty);
    }

    fn group_row(
        schedule: &mut Grid,
        group: &crate::model::ScheduleColumnGroup,
        row: u32,
        key: &str,
        marker: &str,
        associate: &str,
        qty: &str,
    ) {
        schedule.set_input(group.key, row, key);
        schedule.set_input(group.marker, row, marker);
        schedule.set_input(group.associate, row, associate);
        schedule.set_input(group.quantity, row, qty);
    }

    #[test]
    fn group_one_match_overwrites_quantity() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 3, "A-1", "$N", "rush", "25");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        assert_eq!(output.text(output_col::QUANTITY, 2), "25");
    }

    #[test]
    fn group_one_wins_over_group_two() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 3, "A-1", "$N", "rush", "25");
        group_row(&mut schedule, &crate::model::GROUP_TWO, 3, "A-1", "$N", "rush", "99");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        assert_eq!(output.text(output_col::QUANTITY, 2), "25");
    }

    #[test]
    fn falls_back_to_group_two() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_TWO, 4, "A-1", "$N", "rush", "40");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        assert_eq!(output.text(output_col::QUANTITY, 2), "40");
    }

    #[test]
    fn no_match_keeps_provisional_quantity() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 3, "A-1", "other", "rush", "25");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        // Marker differs, so the provisional value survives — not zero.
        assert_eq!(*output.get(output_col::QUANTITY, 2), CellValue::Number(10.0));
    }

    #[test]
    fn triple_must_match_exactly() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 3, "A-1", "$N", "other", "25");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        assert_eq!(output.text(output_col::QUANTITY, 2), "10");
    }

    #[test]
    fn first_match_in_group_wins() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 3, "A-1", "$N", "rush", "25");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 4, "A-1", "$N", "rush", "77");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        assert_eq!(output.text(output_col::QUANTITY, 2), "25");
    }

    #[test]
    fn hyphen_variants_still_match() {
        let mut schedule = Grid::new("Sheet1");
        group_row(&mut schedule, &crate::model::GROUP_ONE, 3, "A－1", "$N", "rush", "25");
        let mut output = Grid::new("output");
        output_row(&mut output, 2, "A-1", "rush", "$N", "10");

        resolve_quantities(&mut output, &schedule, 2, 3);
        assert_eq!(output.text(output_col::QUANTITY, 2), "25");
    }
}
