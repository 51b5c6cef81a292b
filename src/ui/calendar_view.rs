use chrono::{Datelike, NaiveDate};

use crate::core::date_math::{self, InvalidDateError};
use crate::core::grid::DayCell;
use crate::core::navigator::Panel;
use crate::core::picker::RangePicker;
use crate::ui::frame::{Frame, Line, line_from};
use crate::ui::span::Span;
use crate::ui::style::Style;
use crate::ui::theme::Theme;

/// Columns taken by one panel: seven two-digit day cells with separators.
const PANEL_WIDTH: usize = 20;
const PANEL_GAP: usize = 4;

const WEEKDAY_ROW: &str = "Mo Tu We Th Fr Sa Su";

/// Lays the two panels side by side, with a status and a hint line below.
/// The cursor day is only highlighted on the focused panel.
pub fn render(
    picker: &RangePicker,
    focus: Panel,
    cursor: NaiveDate,
    theme: &Theme,
) -> Result<Frame, InvalidDateError> {
    let mut frame = Frame::new();
    frame.push_line(line_from("Date range picker", theme.title));
    frame.blank_line();

    let left = panel_lines(picker, Panel::Current, focus, cursor, theme)?;
    let right = panel_lines(picker, Panel::Future, focus, cursor, theme)?;
    for line in compose_side_by_side(left, right) {
        frame.push_line(line);
    }

    frame.blank_line();
    frame.push_line(line_from(selection_text(picker), Style::default()));
    frame.push_line(line_from(
        "arrows move · enter select · tab panel · [/] month · r reset · q quit",
        theme.hint,
    ));
    Ok(frame)
}

fn panel_lines(
    picker: &RangePicker,
    panel: Panel,
    focus: Panel,
    cursor: NaiveDate,
    theme: &Theme,
) -> Result<Vec<Line>, InvalidDateError> {
    let focused = panel == focus;
    let header_style = if focused {
        theme.header
    } else {
        theme.header_unfocused
    };

    let mut lines = Vec::new();
    lines.push(line_from(
        format!("{:^width$}", picker.panel_label(panel).to_string(), width = PANEL_WIDTH),
        header_style,
    ));
    lines.push(line_from(WEEKDAY_ROW, theme.weekday));

    let cells = picker.grid(panel)?;
    for week in cells.chunks(7) {
        let mut line = Line::new();
        for (i, cell) in week.iter().enumerate() {
            if i > 0 {
                line.push(Span::new(" "));
            }
            let style = cell_style(cell, focused, cursor, theme);
            line.push(Span::styled(format!("{:>2}", cell.date.day()), style));
        }
        lines.push(line);
    }
    Ok(lines)
}

fn cell_style(cell: &DayCell, focused: bool, cursor: NaiveDate, theme: &Theme) -> Style {
    if focused && date_math::same_day(cell.date, cursor) {
        theme.cursor
    } else if cell.is_selected {
        theme.endpoint
    } else if cell.is_in_range {
        theme.in_range
    } else if cell.is_today {
        theme.today
    } else if !cell.in_current_month {
        theme.adjacent
    } else {
        Style::default()
    }
}

fn compose_side_by_side(left: Vec<Line>, right: Vec<Line>) -> Vec<Line> {
    let rows = left.len().max(right.len());
    let mut composed = Vec::with_capacity(rows);
    let mut left = left.into_iter();
    let mut right = right.into_iter();

    for _ in 0..rows {
        let mut line = left.next().unwrap_or_default();
        line.pad_to(PANEL_WIDTH + PANEL_GAP);
        line.extend(right.next().unwrap_or_default());
        composed.push(line);
    }
    composed
}

fn selection_text(picker: &RangePicker) -> String {
    let selection = picker.selection();
    match (selection.start, selection.end) {
        (Some(start), Some(end)) => format!("Selection: {} → {}", start, end),
        (Some(start), None) => format!("Selection: {} → …", start),
        _ => "Selection: none".to_string(),
    }
}
