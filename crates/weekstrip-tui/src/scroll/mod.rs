//! Animated horizontal content offset for the terminal strip.
//!
//! - `timing` - progress and interpolation
//! - `animation` - easing curves and the offset animator built on them

pub mod timing;

pub mod animation;

pub use animation::{frame_interval, Frame, OffsetAnimator};
pub use weekstrip_core::{EasingType, ScrollConfig};
