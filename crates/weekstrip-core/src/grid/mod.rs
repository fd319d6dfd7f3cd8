pub mod day;
pub mod model;
pub mod resolver;

pub use day::{Day, DayKind, Event, WeekPage};
pub use model::{GridSpec, OutOfRangePadding, WeekGridModel, FULL_WEEK};
