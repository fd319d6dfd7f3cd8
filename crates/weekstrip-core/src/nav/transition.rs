//! Interpreting a settled drag as a page move.
//!
//! The paging container does the snapping; all that is decided here is on
//! which side of the baseline the gesture came to rest.

use serde::{Deserialize, Serialize};

/// Outcome of a completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTransition {
    PreviousPage,
    SamePage,
    NextPage,
}

impl PageTransition {
    /// Page index delta this transition applies
    pub fn delta(self) -> isize {
        match self {
            PageTransition::PreviousPage => -1,
            PageTransition::SamePage => 0,
            PageTransition::NextPage => 1,
        }
    }

    pub fn direction(self) -> Option<PageDirection> {
        match self {
            PageTransition::PreviousPage => Some(PageDirection::Previous),
            PageTransition::SamePage => None,
            PageTransition::NextPage => Some(PageDirection::Next),
        }
    }
}

/// Direction of a committed page move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageDirection {
    Previous,
    Next,
}

impl PageDirection {
    pub fn sign(self) -> i64 {
        match self {
            PageDirection::Previous => -1,
            PageDirection::Next => 1,
        }
    }
}

impl From<PageDirection> for PageTransition {
    fn from(direction: PageDirection) -> Self {
        match direction {
            PageDirection::Previous => PageTransition::PreviousPage,
            PageDirection::Next => PageTransition::NextPage,
        }
    }
}

/// Decide the page move for a gesture that came to rest at `end_offset`.
///
/// `baseline` is the offset recorded after the last committed transition.
/// Without a usable `page_extent` (no layout yet) nothing can have been paged.
pub fn decide(baseline: f64, end_offset: f64, page_extent: f64) -> PageTransition {
    if !page_extent.is_finite() || page_extent <= 0.0 || !end_offset.is_finite() {
        return PageTransition::SamePage;
    }
    if end_offset < baseline {
        PageTransition::PreviousPage
    } else if end_offset > baseline {
        PageTransition::NextPage
    } else {
        PageTransition::SamePage
    }
}
