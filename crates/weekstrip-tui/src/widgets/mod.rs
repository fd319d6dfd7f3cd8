mod day_detail;
mod status_bar;
mod week_strip;

pub use day_detail::DayDetailWidget;
pub use status_bar::StatusBarWidget;
pub use week_strip::{visible_cells, CellSlice, WeekStripWidget};
