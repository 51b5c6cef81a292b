pub mod app;
pub mod core;
pub mod terminal;
pub mod ui;

pub use self::core::date_math;
pub use self::core::grid;
pub use self::core::navigator;
pub use self::core::picker;
pub use self::core::selection;

pub use terminal::input_event;
pub use terminal::terminal_event;

pub use ui::calendar_view;
pub use ui::frame;
pub use ui::span;
pub use ui::style;
pub use ui::theme;
pub use ui::view_json;
