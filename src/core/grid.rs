use chrono::NaiveDate;
use serde::Serialize;

use crate::core::date_math::{self, InvalidDateError};
use crate::core::selection::Selection;

/// One calendar day in a panel's grid. Rebuilt from scratch on every query,
/// never patched in place; consumers hold cells for one render pass only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_in_range: bool,
}

/// Enumerates the full weeks covering `reference`'s month, Monday through
/// Sunday, filler days from the adjacent months included. The result length
/// is always a multiple of 7.
pub fn build_grid(
    reference: NaiveDate,
    today: NaiveDate,
    selection: &Selection,
) -> Result<Vec<DayCell>, InvalidDateError> {
    let span_start = date_math::start_of_week(date_math::start_of_month(reference)?)?;
    let span_end = date_math::end_of_week(date_math::end_of_month(reference)?)?;

    let cells = date_math::days_between(span_start, span_end)
        .map(|day| DayCell {
            date: day,
            in_current_month: date_math::same_month(day, reference),
            is_today: date_math::same_day(day, today),
            is_selected: selection.is_endpoint(day),
            is_in_range: selection.contains(day),
        })
        .collect();
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::date_math::ymd;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        ymd(year, month, day).expect("test date")
    }

    fn grid(reference: NaiveDate) -> Vec<DayCell> {
        build_grid(reference, date(2024, 3, 15), &Selection::Empty).expect("grid")
    }

    #[test]
    fn grid_spans_complete_weeks_in_ascending_order() {
        for reference in [
            date(2024, 3, 15),
            date(2024, 2, 1),
            date(2023, 12, 31),
            date(2026, 6, 10),
        ] {
            let cells = grid(reference);
            assert_eq!(cells.len() % 7, 0, "reference {}", reference);
            assert!(cells.windows(2).all(|pair| pair[0].date < pair[1].date));

            let first = date_math::start_of_month(reference).unwrap();
            let last = date_math::end_of_month(reference).unwrap();
            assert!(cells.iter().any(|c| c.date == first));
            assert!(cells.iter().any(|c| c.date == last));
        }
    }

    #[test]
    fn march_2024_includes_february_and_no_april_filler() {
        // March 2024 starts on a Friday and ends on a Sunday.
        let cells = grid(date(2024, 3, 15));
        assert_eq!(cells.len(), 35);
        assert_eq!(cells.first().unwrap().date, date(2024, 2, 26));
        assert_eq!(cells.last().unwrap().date, date(2024, 3, 31));
    }

    #[test]
    fn filler_days_are_flagged_as_outside_the_month() {
        let cells = grid(date(2024, 3, 15));
        let leading = cells.iter().take_while(|c| !c.in_current_month).count();
        assert_eq!(leading, 4);
        assert!(cells[leading..].iter().all(|c| c.in_current_month));
    }

    #[test]
    fn today_flag_marks_exactly_one_cell_of_its_month() {
        let cells = grid(date(2024, 3, 15));
        let marked: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].date, date(2024, 3, 15));

        // A panel showing another month has no today cell.
        let cells = grid(date(2024, 5, 1));
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn selection_flags_are_derived_at_build_time() {
        let selection = Selection::Full(date(2024, 3, 15), date(2024, 3, 20));
        let cells = build_grid(date(2024, 3, 1), date(2024, 3, 1), &selection).expect("grid");

        let cell = |d: NaiveDate| cells.iter().find(|c| c.date == d).unwrap();
        assert!(cell(date(2024, 3, 15)).is_selected);
        assert!(cell(date(2024, 3, 20)).is_selected);
        assert!(cell(date(2024, 3, 17)).is_in_range);
        assert!(!cell(date(2024, 3, 17)).is_selected);
        assert!(!cell(date(2024, 3, 14)).is_in_range);
        assert!(!cell(date(2024, 3, 21)).is_in_range);
    }

    #[test]
    fn rebuilding_is_idempotent() {
        let selection = Selection::StartOnly(date(2024, 3, 10));
        let today = date(2024, 3, 15);
        let first = build_grid(date(2024, 3, 1), today, &selection).expect("grid");
        let second = build_grid(date(2024, 3, 1), today, &selection).expect("grid");
        assert_eq!(first, second);
    }
}
