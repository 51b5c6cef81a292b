use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::core::date_math::InvalidDateError;
use crate::core::grid::{self, DayCell};
use crate::core::navigator::{Direction, DualMonthNavigator, Panel};
use crate::core::selection::{Selection, SelectionRange};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelLabel {
    pub month: &'static str,
    pub year: i32,
}

impl fmt::Display for PanelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// The widget core: owns the selection and the two panel reference dates,
/// accepts the three inbound events and answers pull queries. Today's date
/// is injected at construction so tests control the clock. Week start
/// (Monday) and panel count (two) are fixed.
pub struct RangePicker {
    today: NaiveDate,
    navigator: DualMonthNavigator,
    selection: Selection,
}

impl RangePicker {
    pub fn new(today: NaiveDate) -> Result<Self, InvalidDateError> {
        Ok(Self {
            today,
            navigator: DualMonthNavigator::new(today)?,
            selection: Selection::default(),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn day_clicked(&mut self, day: NaiveDate) {
        self.selection.click(day);
    }

    pub fn reset_selection(&mut self) {
        self.selection.reset();
    }

    pub fn navigate(&mut self, panel: Panel, direction: Direction) -> Result<(), InvalidDateError> {
        self.navigator.navigate(panel, direction)
    }

    pub fn reference(&self, panel: Panel) -> NaiveDate {
        self.navigator.reference(panel)
    }

    /// Recomputed on every call; selection flags reflect the state at build
    /// time.
    pub fn grid(&self, panel: Panel) -> Result<Vec<DayCell>, InvalidDateError> {
        grid::build_grid(self.navigator.reference(panel), self.today, &self.selection)
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection.range()
    }

    pub fn panel_label(&self, panel: Panel) -> PanelLabel {
        let reference = self.navigator.reference(panel);
        PanelLabel {
            month: MONTH_NAMES[reference.month0() as usize],
            year: reference.year(),
        }
    }
}
