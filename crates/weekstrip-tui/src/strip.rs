//! The navigator as the terminal app owns it: one of the two adapters over a
//! [`TerminalSurface`], plus the owner-side record of what it reported.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::debug;
use weekstrip_core::adapter::{ContinuousAdapter, DateNavigator, DiscreteAdapter, ScrollPhase};
use weekstrip_core::grid::resolver;
use weekstrip_core::{
    NavigatorListener, NavigatorOptions, PageDirection, PageKind, PagingSurface,
    ScrollSyncController, SurfaceKind,
};

use crate::surface::TerminalSurface;

/// What the owner has heard from the navigator
#[derive(Debug, Clone, Default)]
pub struct OwnerLog {
    pub last_message: Option<String>,
    pub selections: usize,
    pub crossings: usize,
    /// Live translation while a tracked gesture is in flight
    pub translation: Option<f64>,
}

impl NavigatorListener for OwnerLog {
    fn on_date_selected(&mut self, date: NaiveDate, kind: PageKind) {
        self.selections += 1;
        debug!(date = %date, ?kind, "Owner notified of selection");
        self.last_message = Some(format!("Selected {} ({:?})", date.format("%a %d %b %Y"), kind));
    }

    fn on_page_boundary_crossed(&mut self, direction: PageDirection) {
        self.crossings += 1;
        debug!(?direction, "Owner notified of page crossing");
    }

    fn on_scroll_offset_tracked(&mut self, translation: f64, ended: bool) {
        self.translation = if ended { None } else { Some(translation) };
    }
}

pub type Navigator = dyn DateNavigator<Surface = TerminalSurface, Listener = OwnerLog>;

pub enum Strip {
    Continuous(ContinuousAdapter<TerminalSurface, OwnerLog>),
    Discrete(DiscreteAdapter<TerminalSurface, OwnerLog>),
}

impl Strip {
    pub fn new(kind: SurfaceKind, controller: ScrollSyncController, surface: TerminalSurface) -> Self {
        let mut strip = match kind {
            SurfaceKind::Continuous => {
                Strip::Continuous(ContinuousAdapter::new(controller, surface, OwnerLog::default()))
            }
            SurfaceKind::Discrete => {
                Strip::Discrete(DiscreteAdapter::new(controller, surface, OwnerLog::default()))
            }
        };
        strip.nav_mut().present(Instant::now());
        strip
    }

    pub fn nav(&self) -> &Navigator {
        match self {
            Strip::Continuous(a) => a,
            Strip::Discrete(a) => a,
        }
    }

    pub fn nav_mut(&mut self) -> &mut Navigator {
        match self {
            Strip::Continuous(a) => a,
            Strip::Discrete(a) => a,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        match self {
            Strip::Continuous(_) => SurfaceKind::Continuous,
            Strip::Discrete(_) => SurfaceKind::Discrete,
        }
    }

    pub fn options(&self) -> NavigatorOptions {
        *self.nav().binding().controller().options()
    }

    pub fn is_dragging(&self) -> bool {
        self.nav().state().is_dragging()
    }

    /// Phase label for the status bar
    pub fn phase_label(&self) -> &'static str {
        match self {
            Strip::Continuous(a) => match a.scroll_phase() {
                ScrollPhase::Idle => "idle",
                ScrollPhase::Interacting => "interacting",
                ScrollPhase::Decelerating => "decelerating",
                ScrollPhase::Animating => "animating",
            },
            Strip::Discrete(a) => {
                if a.state().is_dragging() {
                    "dragging"
                } else if a.surface().is_animating() {
                    "paging"
                } else {
                    "idle"
                }
            }
        }
    }

    /// Move the content by `dx` columns as a drag would
    pub fn drag_by(&mut self, dx: f64, now: Instant) {
        if !self.options().scroll_enabled {
            return;
        }
        if !self.is_dragging() {
            self.begin_drag(now);
        }
        match self {
            Strip::Continuous(a) => {
                let offset = a.surface_mut().drag_by(dx);
                a.offset_changed(offset, now);
            }
            Strip::Discrete(a) => {
                let offset = a.surface_mut().drag_by(dx);
                a.did_scroll(offset, now);
            }
        }
    }

    fn begin_drag(&mut self, now: Instant) {
        match self {
            Strip::Continuous(a) => {
                let offset = a.surface().content_offset();
                a.offset_changed(offset, now);
                a.scroll_phase_changed(ScrollPhase::Interacting, now);
            }
            Strip::Discrete(a) => {
                let offset = a.surface().content_offset();
                a.will_begin_dragging(offset, now);
            }
        }
    }

    /// Let go of a drag: the surface glides to the nearest page
    pub fn release(&mut self, now: Instant) {
        if !self.is_dragging() {
            return;
        }
        match self {
            Strip::Continuous(a) => {
                a.scroll_phase_changed(ScrollPhase::Decelerating, now);
                let index = a.surface_mut().snap(now);
                if !a.surface().is_animating() {
                    a.target_settled(index, now);
                }
            }
            Strip::Discrete(a) => {
                let index = a.surface_mut().snap(now);
                let target = index as f64 * a.surface().page_extent();
                a.will_end_dragging(target, now);
            }
        }
    }

    /// The user picked the cell at `slot` of `page`
    pub fn tap(&mut self, page: usize, slot: usize, now: Instant) {
        match self {
            Strip::Continuous(a) => a.select_day(page, slot, now),
            Strip::Discrete(a) => a.did_select_item(page, slot, now),
        }
    }

    /// Tap the cell in `slot` of the page nearest to view
    pub fn tap_slot(&mut self, slot: usize, now: Instant) {
        let page = self.nav().surface().nearest_page();
        self.tap(page, slot, now);
    }

    /// Tap whatever day lies under column `x` of the strip
    pub fn tap_at(&mut self, x: f64, now: Instant) {
        let Some(date) = self.nav().date_at_point(x) else {
            return;
        };
        let grid = self.nav().grid();
        let Some(page) = resolver::index_for_date(grid, date) else {
            return;
        };
        let Some(slot) = grid.pages()[page].slot_of(date) else {
            return;
        };
        self.tap(page, slot, now);
    }

    /// Strip width changed; re-place the committed page
    pub fn resize(&mut self, width: u16) {
        let extent = width as f64;
        if (self.nav().surface().page_extent() - extent).abs() > f64::EPSILON {
            self.nav_mut().reload_frame(extent);
        }
    }

    /// Advance animations and deliver due scrolls. Call once per frame.
    pub fn update(&mut self, now: Instant) {
        match self {
            Strip::Continuous(a) => {
                if a.surface().is_animating() && a.scroll_phase() == ScrollPhase::Idle {
                    a.scroll_phase_changed(ScrollPhase::Animating, now);
                }
                let arrived = a.surface_mut().update(now);
                let offset = a.surface().content_offset();
                a.offset_changed(offset, now);
                if arrived.is_some() {
                    let index = a.surface().nearest_page();
                    a.target_settled(index, now);
                }
            }
            Strip::Discrete(a) => {
                if let Some(offset) = a.surface_mut().update(now) {
                    a.did_end_scrolling_animation(offset);
                }
            }
        }
        self.nav_mut().tick(now);
    }

    pub fn needs_fast_update(&self) -> bool {
        self.nav().surface().is_animating() || self.nav().next_deadline().is_some()
    }
}
