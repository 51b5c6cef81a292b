use chrono::NaiveDate;

use crate::core::date_math::{self, InvalidDateError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Current,
    Future,
}

impl Panel {
    pub fn other(self) -> Panel {
        match self {
            Panel::Current => Panel::Future,
            Panel::Future => Panel::Current,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Owns the two visible reference dates, normalized to the first of their
/// month. The panels drift independently except for one courtesy rule: a
/// navigation that would land both panels on the same month pushes the
/// sibling one month in the same direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualMonthNavigator {
    current: NaiveDate,
    future: NaiveDate,
}

impl DualMonthNavigator {
    pub fn new(today: NaiveDate) -> Result<Self, InvalidDateError> {
        let current = date_math::start_of_month(today)?;
        let future = date_math::add_months(current, 1)?;
        Ok(Self { current, future })
    }

    pub fn reference(&self, panel: Panel) -> NaiveDate {
        match panel {
            Panel::Current => self.current,
            Panel::Future => self.future,
        }
    }

    /// Shifts `panel` one month. Both new reference dates are computed
    /// before either is stored, so a failed shift leaves the navigator
    /// untouched.
    pub fn navigate(&mut self, panel: Panel, direction: Direction) -> Result<(), InvalidDateError> {
        let moved = shift(self.reference(panel), direction)?;
        let sibling = self.reference(panel.other());
        let sibling = if date_math::same_month(moved, sibling) {
            shift(sibling, direction)?
        } else {
            sibling
        };

        match panel {
            Panel::Current => {
                self.current = moved;
                self.future = sibling;
            }
            Panel::Future => {
                self.future = moved;
                self.current = sibling;
            }
        }
        Ok(())
    }
}

fn shift(reference: NaiveDate, direction: Direction) -> Result<NaiveDate, InvalidDateError> {
    match direction {
        Direction::Previous => date_math::sub_months(reference, 1),
        Direction::Next => date_math::add_months(reference, 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::date_math::ymd;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        ymd(year, month, day).expect("test date")
    }

    fn navigator() -> DualMonthNavigator {
        DualMonthNavigator::new(date(2024, 3, 15)).expect("navigator")
    }

    #[test]
    fn mounts_on_todays_month_and_the_next() {
        let nav = navigator();
        assert_eq!(nav.reference(Panel::Current), date(2024, 3, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 4, 1));
    }

    #[test]
    fn current_next_pushes_a_colliding_future_forward() {
        let mut nav = navigator();
        nav.navigate(Panel::Current, Direction::Next)
            .expect("navigate");
        assert_eq!(nav.reference(Panel::Current), date(2024, 4, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 5, 1));
    }

    #[test]
    fn future_previous_pushes_a_colliding_current_back() {
        let mut nav = navigator();
        nav.navigate(Panel::Future, Direction::Previous)
            .expect("navigate");
        assert_eq!(nav.reference(Panel::Current), date(2024, 2, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 3, 1));
    }

    #[test]
    fn panels_drift_apart_without_dragging_each_other() {
        let mut nav = navigator();
        for _ in 0..5 {
            nav.navigate(Panel::Future, Direction::Next).expect("navigate");
        }
        assert_eq!(nav.reference(Panel::Current), date(2024, 3, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 9, 1));

        nav.navigate(Panel::Current, Direction::Previous)
            .expect("navigate");
        assert_eq!(nav.reference(Panel::Current), date(2024, 2, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 9, 1));
    }

    #[test]
    fn separated_panels_navigate_back_toward_each_other_freely() {
        let mut nav = navigator();
        for _ in 0..3 {
            nav.navigate(Panel::Future, Direction::Next).expect("navigate");
        }
        // Future sits at July; pulling it back to April touches nothing else.
        for _ in 0..3 {
            nav.navigate(Panel::Future, Direction::Previous)
                .expect("navigate");
        }
        assert_eq!(nav.reference(Panel::Current), date(2024, 3, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 4, 1));
    }

    #[test]
    fn year_boundaries_are_ordinary_months() {
        let mut nav = DualMonthNavigator::new(date(2024, 1, 10)).expect("navigator");
        nav.navigate(Panel::Current, Direction::Previous)
            .expect("navigate");
        assert_eq!(nav.reference(Panel::Current), date(2023, 12, 1));
        assert_eq!(nav.reference(Panel::Future), date(2024, 2, 1));
    }
}
