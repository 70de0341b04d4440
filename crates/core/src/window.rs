use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Months of history admitted before "now".
pub const MONTHS_BACK: u32 = 5;
/// Months of future admitted after "now".
pub const MONTHS_AHEAD: u32 = 2;

/// Inclusive date acceptance window for ledger rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// `[today − 5 months, today + 2 months]`, calendar-month
    /// arithmetic with day-of-month preserved and clamped at
    /// month-end when the target month is shorter.
    pub fn around(today: NaiveDate) -> Self {
        Self {
            start: today
                .checked_sub_months(Months::new(MONTHS_BACK))
                .unwrap_or(NaiveDate::MIN),
            end: today
                .checked_add_months(Months::new(MONTHS_AHEAD))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn window_around_mid_month() {
        let w = DateWindow::around(d(2026, 8, 26));
        assert_eq!(w.start, d(2026, 3, 26));
        assert_eq!(w.end, d(2026, 10, 26));
    }

    #[test]
    fn month_end_clamps() {
        // 2026-03-31 minus 5 months: October has 31 days, fine;
        // plus 2 months lands in May (31 days), so pick a case that clamps.
        let w = DateWindow::around(d(2026, 7, 31));
        assert_eq!(w.start, d(2026, 2, 28)); // February clamp
        assert_eq!(w.end, d(2026, 9, 30)); // September clamp
    }

    #[test]
    fn boundaries_inclusive() {
        let w = DateWindow::around(d(2026, 8, 26));
        assert!(w.contains(w.start));
        assert!(w.contains(w.end));
    }

    #[test]
    fn one_day_outside_excluded() {
        let w = DateWindow::around(d(2026, 8, 26));
        assert!(!w.contains(w.start.pred_opt().unwrap()));
        assert!(!w.contains(w.end.succ_opt().unwrap()));
    }
}
