pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod scroll;
pub mod strip;
pub mod surface;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use strip::{OwnerLog, Strip};
pub use surface::TerminalSurface;
pub use theme::Theme;
