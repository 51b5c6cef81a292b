pub mod date_math;
pub mod grid;
pub mod navigator;
pub mod picker;
pub mod selection;
