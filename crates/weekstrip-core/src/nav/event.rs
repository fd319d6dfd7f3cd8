use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::state::PageKind;
use super::transition::PageDirection;

/// Notification delivered to the navigator's owner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavEvent {
    /// The user picked a date by dragging or tapping
    DateSelected { date: NaiveDate, kind: PageKind },
    /// A page transition was committed
    PageBoundaryCrossed { direction: PageDirection },
    /// Live drag translation, for owners that move a linked view along
    ScrollOffsetTracked { translation: f64, ended: bool },
}

/// Instruction for the rendering surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SurfaceCommand {
    ScrollTo { index: usize, animated: bool },
    SetContentOffset { offset: f64 },
    ReloadVisiblePages,
}

/// Everything one controller input produced, in emission order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Effects {
    pub events: Vec<NavEvent>,
    pub commands: Vec<SurfaceCommand>,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.commands.is_empty()
    }

    pub(crate) fn notify(&mut self, event: NavEvent) {
        self.events.push(event);
    }

    pub(crate) fn command(&mut self, command: SurfaceCommand) {
        self.commands.push(command);
    }

    pub fn merge(&mut self, other: Effects) {
        self.events.extend(other.events);
        self.commands.extend(other.commands);
    }

    pub fn date_selected_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, NavEvent::DateSelected { .. }))
            .count()
    }

    pub fn scroll_target(&self) -> Option<usize> {
        self.commands.iter().rev().find_map(|c| match c {
            SurfaceCommand::ScrollTo { index, .. } => Some(*index),
            _ => None,
        })
    }
}

/// Receiver for navigator notifications. Every method defaults to a no-op.
pub trait NavigatorListener {
    fn on_date_selected(&mut self, _date: NaiveDate, _kind: PageKind) {}

    fn on_page_boundary_crossed(&mut self, _direction: PageDirection) {}

    fn on_scroll_offset_tracked(&mut self, _translation: f64, _ended: bool) {}

    /// Route a typed event to the matching callback
    fn dispatch(&mut self, event: &NavEvent) {
        match *event {
            NavEvent::DateSelected { date, kind } => self.on_date_selected(date, kind),
            NavEvent::PageBoundaryCrossed { direction } => self.on_page_boundary_crossed(direction),
            NavEvent::ScrollOffsetTracked { translation, ended } => {
                self.on_scroll_offset_tracked(translation, ended)
            }
        }
    }
}

/// Listener that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullListener;

impl NavigatorListener for NullListener {}

/// Listener that records every event it receives
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<NavEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[NavEvent] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<NavEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn selected_dates(&self) -> Vec<NaiveDate> {
        self.events
            .iter()
            .filter_map(|e| match e {
                NavEvent::DateSelected { date, .. } => Some(*date),
                _ => None,
            })
            .collect()
    }

    pub fn crossings(&self) -> Vec<PageDirection> {
        self.events
            .iter()
            .filter_map(|e| match e {
                NavEvent::PageBoundaryCrossed { direction } => Some(*direction),
                _ => None,
            })
            .collect()
    }
}

impl NavigatorListener for EventLog {
    fn dispatch(&mut self, event: &NavEvent) {
        self.events.push(*event);
    }
}

impl<F> NavigatorListener for F
where
    F: FnMut(&NavEvent),
{
    fn dispatch(&mut self, event: &NavEvent) {
        self(event)
    }
}
