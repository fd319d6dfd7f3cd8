pub mod adapter;
pub mod calendar;
pub mod config;
pub mod error;
pub mod grid;
pub mod nav;

pub use adapter::{
    CellParams, ContinuousAdapter, DateNavigator, DiscreteAdapter, PagingSurface,
    RecordingSurface, ScrollPhase,
};
pub use calendar::WeekStart;
pub use config::{AppConfig, EasingType, KeymapConfig, ScrollConfig, SurfaceKind};
pub use error::{Error, Result};
pub use grid::{Day, DayKind, Event, GridSpec, WeekGridModel, WeekPage};
pub use nav::{
    EventLog, NavEvent, NavigatorListener, NavigatorOptions, PageDirection, PageKind,
    ScrollSyncController,
};
