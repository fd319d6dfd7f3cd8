//! Navigation state machine.
//!
//! - `state` / `options` - plain data owned by the controller
//! - `transition` - settled drag offset to page decision
//! - `event` - typed notifications and surface commands
//! - `scheduler` - deferred, superseding scroll commands
//! - `controller` - the state machine combining them

pub mod controller;
pub mod event;
pub mod options;
pub mod scheduler;
pub mod state;
pub mod transition;

pub use controller::ScrollSyncController;
pub use event::{Effects, EventLog, NavEvent, NavigatorListener, NullListener, SurfaceCommand};
pub use options::{CommitAnchor, NavigatorOptions};
pub use scheduler::{ScrollRequest, ScrollScheduler};
pub use state::{NavigationState, PageKind, Phase};
pub use transition::{decide, PageDirection, PageTransition};
