use chrono::NaiveDate;
use serde::Serialize;

use crate::core::date_math;

/// Range selection state. The machine cycles under click input and only an
/// explicit reset returns it to `Empty`; a `Full` range always has
/// `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Empty,
    StartOnly(NaiveDate),
    Full(NaiveDate, NaiveDate),
}

/// Flat view of the selection handed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl Selection {
    /// Transition applied on every day click.
    ///
    /// Clicking the anchor day again keeps the single-day anchor instead of
    /// forming a zero-length range, and a click while a completed range
    /// exists discards it and re-anchors at the clicked day.
    pub fn click(&mut self, day: NaiveDate) {
        *self = match *self {
            Selection::Empty => Selection::StartOnly(day),
            Selection::StartOnly(start) => {
                if date_math::is_before(day, start) || date_math::same_day(day, start) {
                    Selection::StartOnly(day)
                } else {
                    Selection::Full(start, day)
                }
            }
            Selection::Full(_, _) => Selection::StartOnly(day),
        };
    }

    pub fn reset(&mut self) {
        *self = Selection::Empty;
    }

    pub fn range(&self) -> SelectionRange {
        match *self {
            Selection::Empty => SelectionRange::default(),
            Selection::StartOnly(start) => SelectionRange {
                start: Some(start),
                end: None,
            },
            Selection::Full(start, end) => SelectionRange {
                start: Some(start),
                end: Some(end),
            },
        }
    }

    /// True for the anchor of an in-progress selection and for both
    /// endpoints of a completed range.
    pub fn is_endpoint(&self, day: NaiveDate) -> bool {
        match *self {
            Selection::Empty => false,
            Selection::StartOnly(start) => date_math::same_day(day, start),
            Selection::Full(start, end) => {
                date_math::same_day(day, start) || date_math::same_day(day, end)
            }
        }
    }

    /// True for days inside a completed range, endpoints included. An
    /// in-progress selection has no range yet.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match *self {
            Selection::Full(start, end) => date_math::within(day, start, end),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::date_math::ymd;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        ymd(year, month, day).expect("test date")
    }

    #[test]
    fn first_click_anchors_the_start() {
        let mut selection = Selection::default();
        selection.click(date(2024, 3, 15));
        assert_eq!(selection, Selection::StartOnly(date(2024, 3, 15)));
    }

    #[test]
    fn later_click_completes_the_range_in_order() {
        let mut selection = Selection::StartOnly(date(2024, 3, 15));
        selection.click(date(2024, 3, 20));
        assert_eq!(
            selection,
            Selection::Full(date(2024, 3, 15), date(2024, 3, 20))
        );
    }

    #[test]
    fn earlier_click_re_anchors_instead_of_reversing() {
        let mut selection = Selection::StartOnly(date(2024, 3, 20));
        selection.click(date(2024, 3, 15));
        assert_eq!(selection, Selection::StartOnly(date(2024, 3, 15)));
    }

    #[test]
    fn same_day_click_keeps_the_anchor() {
        let mut selection = Selection::StartOnly(date(2024, 3, 10));
        selection.click(date(2024, 3, 10));
        assert_eq!(selection, Selection::StartOnly(date(2024, 3, 10)));
    }

    #[test]
    fn click_on_completed_range_restarts_at_the_clicked_day() {
        let mut selection = Selection::Full(date(2024, 3, 15), date(2024, 3, 20));
        selection.click(date(2024, 3, 17));
        assert_eq!(selection, Selection::StartOnly(date(2024, 3, 17)));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut selection = Selection::Full(date(2024, 3, 15), date(2024, 3, 20));
        selection.reset();
        assert_eq!(selection, Selection::Empty);
        selection.reset();
        assert_eq!(selection, Selection::Empty);
    }

    #[test]
    fn range_view_tracks_the_three_shapes() {
        let mut selection = Selection::default();
        assert_eq!(selection.range(), SelectionRange::default());

        selection.click(date(2024, 3, 15));
        assert_eq!(selection.range().start, Some(date(2024, 3, 15)));
        assert_eq!(selection.range().end, None);

        selection.click(date(2024, 3, 20));
        assert_eq!(selection.range().start, Some(date(2024, 3, 15)));
        assert_eq!(selection.range().end, Some(date(2024, 3, 20)));
    }

    #[test]
    fn membership_flags_only_apply_to_completed_ranges() {
        let anchor_only = Selection::StartOnly(date(2024, 3, 15));
        assert!(anchor_only.is_endpoint(date(2024, 3, 15)));
        assert!(!anchor_only.contains(date(2024, 3, 15)));

        let full = Selection::Full(date(2024, 3, 15), date(2024, 3, 20));
        assert!(full.is_endpoint(date(2024, 3, 15)));
        assert!(full.is_endpoint(date(2024, 3, 20)));
        assert!(!full.is_endpoint(date(2024, 3, 17)));
        assert!(full.contains(date(2024, 3, 15)));
        assert!(full.contains(date(2024, 3, 17)));
        assert!(full.contains(date(2024, 3, 20)));
        assert!(!full.contains(date(2024, 3, 21)));
    }
}
