use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What one page of the strip represents to the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// The strip picks the day shown by a day timeline
    Day,
    /// The strip picks the week (or partial week) shown by a week timeline
    #[default]
    Week,
}

/// Where the controller is in a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No gesture in flight; date and index are consistent and displayed
    #[default]
    Idle,
    /// A gesture is moving the strip; only the pending offset changes
    Dragging,
    /// The gesture ended and a decision awaits its commit
    Settling,
}

/// Authoritative navigation state, owned by the controller
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    pub selected_date: NaiveDate,
    /// Page containing the page-aligned form of `selected_date`
    pub committed_index: usize,
    /// Present only while a gesture is in flight
    pub pending_drag_offset: Option<f64>,
    /// Whether the last date change came from interaction with the strip
    pub is_user_driven: bool,
    /// Offset recorded after the last committed transition or settled scroll
    pub baseline_offset: f64,
}

impl NavigationState {
    pub fn new(selected_date: NaiveDate, committed_index: usize) -> Self {
        Self {
            selected_date,
            committed_index,
            pending_drag_offset: None,
            is_user_driven: false,
            baseline_offset: 0.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.pending_drag_offset.is_some()
    }
}
