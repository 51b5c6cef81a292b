pub mod calendar_view;
pub mod frame;
pub mod span;
pub mod style;
pub mod theme;
pub mod view_json;
