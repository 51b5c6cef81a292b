use crate::ui::style::{Color, Style};

/// Styling vocabulary the day-cell flags map onto. The core only emits
/// booleans; everything visual lives here.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub header: Style,
    pub header_unfocused: Style,
    pub weekday: Style,
    pub today: Style,
    pub endpoint: Style,
    pub in_range: Style,
    pub adjacent: Style,
    pub cursor: Style,
    pub hint: Style,
    pub error: Style,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            title: Style::new().color(Color::Cyan).bold(),
            header: Style::new().bold(),
            header_unfocused: Style::new().color(Color::DarkGrey),
            weekday: Style::new().color(Color::DarkGrey),
            today: Style::new().color(Color::Yellow).bold(),
            endpoint: Style::new().color(Color::Black).background(Color::Cyan),
            in_range: Style::new().color(Color::Black).background(Color::Blue),
            adjacent: Style::new().dim(),
            cursor: Style::new().color(Color::Black).background(Color::Green),
            hint: Style::new().color(Color::DarkGrey),
            error: Style::new().color(Color::Red).bold(),
        }
    }
}
