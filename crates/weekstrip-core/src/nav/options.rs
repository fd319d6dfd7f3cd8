use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::state::PageKind;

/// Which date a drag lands on in the adjacent page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitAnchor {
    /// Same slot as the current selection: `page_width` days away
    #[default]
    SameSlot,
    /// First dated day of the new page
    PageStart,
}

/// Behavior switches for one navigator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorOptions {
    pub kind: PageKind,
    /// Accept drag gestures at all
    pub scroll_enabled: bool,
    /// Forward live drag translations to the owner
    pub track_scroll_offset: bool,
    pub commit_anchor: CommitAnchor,
    /// Delay before a programmatic scroll is issued to the surface
    pub scroll_delay: Duration,
    /// Delay after a programmatic scroll before the baseline is re-captured
    pub baseline_settle: Duration,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            kind: PageKind::Week,
            scroll_enabled: true,
            track_scroll_offset: false,
            commit_anchor: CommitAnchor::SameSlot,
            scroll_delay: Duration::from_millis(100),
            baseline_settle: Duration::from_millis(500),
        }
    }
}

impl NavigatorOptions {
    /// Options with no scheduling delays, committing commands immediately
    pub fn immediate() -> Self {
        Self {
            scroll_delay: Duration::ZERO,
            baseline_settle: Duration::ZERO,
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: PageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_tracking(mut self, track: bool) -> Self {
        self.track_scroll_offset = track;
        self
    }
}
