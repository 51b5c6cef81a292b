use chrono::{Days, NaiveDate};

use crate::core::date_math::{self, InvalidDateError};
use crate::core::navigator::{Direction, Panel};
use crate::core::picker::RangePicker;
use crate::terminal::{KeyCode, KeyEvent, KeyModifiers};
use crate::ui::calendar_view;
use crate::ui::frame::{Frame, line_from};
use crate::ui::theme::Theme;

/// Presentation adapter state: a picker plus a focused panel and a day
/// cursor. All selection and navigation decisions stay in the core; this
/// only maps keys onto the core's events and paints the result.
pub struct App {
    picker: RangePicker,
    focus: Panel,
    cursor: NaiveDate,
    theme: Theme,
    last_frame: Frame,
    error: Option<String>,
    exit: bool,
}

impl App {
    pub fn new(today: NaiveDate) -> Result<Self, InvalidDateError> {
        Ok(Self {
            picker: RangePicker::new(today)?,
            focus: Panel::Current,
            cursor: today,
            theme: Theme::default_theme(),
            last_frame: Frame::new(),
            error: None,
            exit: false,
        })
    }

    pub fn picker(&self) -> &RangePicker {
        &self.picker
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn focus(&self) -> Panel {
        self.focus
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Returns true when the frame needs repainting.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers != KeyModifiers::NONE {
            return false;
        }
        self.error = None;

        match key.code {
            KeyCode::Left => self.move_cursor_days(-1),
            KeyCode::Right => self.move_cursor_days(1),
            KeyCode::Up => self.move_cursor_days(-7),
            KeyCode::Down => self.move_cursor_days(7),
            KeyCode::Home => self.jump_cursor(date_math::start_of_month),
            KeyCode::End => self.jump_cursor(date_math::end_of_month),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.picker.day_clicked(self.cursor);
                true
            }
            KeyCode::Tab => {
                self.focus = self.focus.other();
                let reference = self.picker.reference(self.focus);
                if !date_math::same_month(self.cursor, reference) {
                    self.cursor = reference;
                }
                true
            }
            KeyCode::Char('[') | KeyCode::Char('p') => self.navigate(Direction::Previous),
            KeyCode::Char(']') | KeyCode::Char('n') => self.navigate(Direction::Next),
            KeyCode::Char('r') => {
                self.picker.reset_selection();
                true
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.exit = true;
                true
            }
            _ => false,
        }
    }

    /// Repaints from the core's current state. A failed rebuild keeps the
    /// last good frame on screen and reports the error below it.
    pub fn view(&mut self) -> Frame {
        match calendar_view::render(&self.picker, self.focus, self.cursor, &self.theme) {
            Ok(frame) => self.last_frame = frame,
            Err(e) => self.error = Some(e.to_string()),
        }

        let mut frame = self.last_frame.clone();
        if let Some(error) = &self.error {
            frame.push_line(line_from(format!("! {}", error), self.theme.error));
        }
        frame
    }

    fn move_cursor_days(&mut self, delta: i64) -> bool {
        let moved = if delta < 0 {
            self.cursor.checked_sub_days(Days::new(delta.unsigned_abs()))
        } else {
            self.cursor.checked_add_days(Days::new(delta as u64))
        };
        let Some(moved) = moved else {
            return false;
        };
        self.cursor = moved;
        self.follow_cursor(delta < 0);
        true
    }

    /// Keeps the cursor's month on screen: hand focus over when it walked
    /// into the sibling panel, otherwise navigate the focused panel after it.
    fn follow_cursor(&mut self, backward: bool) {
        if date_math::same_month(self.cursor, self.picker.reference(self.focus)) {
            return;
        }
        if date_math::same_month(self.cursor, self.picker.reference(self.focus.other())) {
            self.focus = self.focus.other();
            return;
        }

        let direction = if backward {
            Direction::Previous
        } else {
            Direction::Next
        };
        if let Err(e) = self.picker.navigate(self.focus, direction) {
            self.error = Some(e.to_string());
        }
    }

    fn jump_cursor(
        &mut self,
        boundary: fn(NaiveDate) -> Result<NaiveDate, InvalidDateError>,
    ) -> bool {
        match boundary(self.picker.reference(self.focus)) {
            Ok(day) => {
                self.cursor = day;
                true
            }
            Err(e) => {
                self.error = Some(e.to_string());
                true
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> bool {
        if let Err(e) = self.picker.navigate(self.focus, direction) {
            self.error = Some(e.to_string());
            return true;
        }

        // The panel moved one month; take the cursor along, clamped.
        let reference = self.picker.reference(self.focus);
        let moved = match direction {
            Direction::Previous => date_math::sub_months(self.cursor, 1),
            Direction::Next => date_math::add_months(self.cursor, 1),
        };
        self.cursor = moved.unwrap_or(reference);
        if !date_math::same_month(self.cursor, reference) {
            self.cursor = reference;
        }
        true
    }
}
