//! Shared plumbing behind both adapters: one controller, one scheduler, and
//! delivery of effects to the surface and the owner.

use std::time::Instant;

use chrono::NaiveDate;
use tracing::trace;

use super::surface::PagingSurface;
use crate::error::Result;
use crate::grid::{resolver, GridSpec, WeekGridModel};
use crate::nav::{
    Effects, NavigatorListener, NavigatorOptions, PageDirection, ScrollRequest, ScrollScheduler,
    ScrollSyncController, SurfaceCommand,
};

pub struct Binding<S, L> {
    controller: ScrollSyncController,
    scheduler: ScrollScheduler,
    surface: S,
    listener: L,
}

impl<S: PagingSurface, L: NavigatorListener> Binding<S, L> {
    pub fn new(controller: ScrollSyncController, surface: S, listener: L) -> Self {
        let options = controller.options();
        let scheduler = ScrollScheduler::new(options.scroll_delay, options.baseline_settle);
        Self {
            controller,
            scheduler,
            surface,
            listener,
        }
    }

    pub fn controller(&self) -> &ScrollSyncController {
        &self.controller
    }

    pub fn scheduler(&self) -> &ScrollScheduler {
        &self.scheduler
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    pub fn into_parts(self) -> (ScrollSyncController, S, L) {
        (self.controller, self.surface, self.listener)
    }

    /// Run a controller input and deliver what it produced
    pub fn run<F>(&mut self, now: Instant, input: F)
    where
        F: FnOnce(&mut ScrollSyncController) -> Effects,
    {
        let effects = input(&mut self.controller);
        self.apply(effects, now);
    }

    /// Deliver notifications to the owner and commands to the surface.
    ///
    /// Placement scrolls (not animated) go out at once; animated scrolls wait
    /// for the configured delay and replace any scroll still waiting.
    pub fn apply(&mut self, effects: Effects, now: Instant) {
        for event in &effects.events {
            self.listener.dispatch(event);
        }
        for command in effects.commands {
            match command {
                SurfaceCommand::ScrollTo { index, animated } => {
                    let request = ScrollRequest { index, animated };
                    if animated {
                        self.scheduler.schedule(request, now);
                    } else {
                        self.scheduler.schedule_now(request, now);
                    }
                }
                SurfaceCommand::SetContentOffset { offset } => {
                    self.surface.set_content_offset(offset);
                }
                SurfaceCommand::ReloadVisiblePages => self.surface.reload_visible_pages(),
            }
        }
        self.tick(now);
    }

    /// Issue a due scroll and re-capture the baseline once it has settled
    pub fn tick(&mut self, now: Instant) {
        if let Some(request) = self.scheduler.poll(now) {
            self.issue(request);
        }
        if self.scheduler.poll_recapture(now) {
            let offset = self.surface.content_offset();
            self.controller.capture_baseline(offset);
        }
    }

    /// Layout is done: issue any waiting scroll now
    pub fn layout_settled(&mut self, now: Instant) {
        if let Some(request) = self.scheduler.flush(now) {
            self.issue(request);
        }
        self.tick(now);
    }

    fn issue(&mut self, request: ScrollRequest) {
        trace!(index = request.index, animated = request.animated, "Scrolling surface");
        self.surface.scroll_to(request.index, request.animated);
    }

    /// A gesture is starting: the user now owns the offset.
    ///
    /// A scroll still waiting is issued first, and the baseline is taken from
    /// the committed page rather than from a possibly mid-animation offset.
    pub fn begin_gesture(&mut self, offset: f64, now: Instant) {
        if self.scheduler.has_work() {
            if let Some(request) = self.scheduler.flush(now) {
                self.issue(request);
            }
            self.scheduler.cancel();
            let extent = self.surface.page_extent();
            let resting = if extent > 0.0 {
                self.controller.current_index() as f64 * extent
            } else {
                self.surface.content_offset()
            };
            self.controller.capture_baseline(resting);
        }
        self.run(now, |ctl| ctl.begin_drag(offset));
    }

    pub fn present(&mut self, now: Instant) {
        self.run(now, ScrollSyncController::present);
        let offset = self.surface.content_offset();
        self.controller.capture_baseline(offset);
    }

    pub fn set_date(&mut self, date: NaiveDate, now: Instant) {
        self.run(now, |ctl| ctl.set_date(date));
    }

    pub fn step(&mut self, direction: PageDirection, now: Instant) {
        self.run(now, |ctl| ctl.step(direction));
    }

    pub fn track_transform(&mut self, dx: Option<f64>, now: Instant) {
        self.run(now, |ctl| ctl.track_transform(dx));
        if dx.is_none() {
            self.scheduler.arm_recapture(now);
        }
    }

    pub fn select_day(&mut self, index: usize, slot: usize, now: Instant) {
        self.run(now, |ctl| ctl.select_day(index, slot));
    }

    /// Settle a gesture that came to rest at `offset`
    pub fn finish_gesture(&mut self, offset: f64, now: Instant) {
        let extent = self.surface.page_extent();
        self.run(now, |ctl| ctl.finish_drag(offset, extent));
    }

    /// The page extent changed: re-place the committed page and re-capture
    pub fn reload_frame(&mut self, page_extent: f64) {
        self.controller.cancel_drag();
        self.surface.set_page_extent(page_extent);
        let index = self.controller.current_index();
        self.scheduler.cancel();
        self.issue(ScrollRequest {
            index,
            animated: false,
        });
        self.surface.reload_visible_pages();
        let offset = self.surface.content_offset();
        self.controller.capture_baseline(offset);
    }

    pub fn replace_grid(&mut self, grid: WeekGridModel, now: Instant) -> Result<()> {
        let effects = self.controller.replace_grid(grid)?;
        self.apply(effects, now);
        let offset = self.surface.content_offset();
        self.controller.capture_baseline(offset);
        Ok(())
    }

    pub fn rebuild(&mut self, spec: GridSpec, now: Instant) -> Result<()> {
        let grid = WeekGridModel::build(spec)?;
        self.replace_grid(grid, now)
    }

    pub fn reconfigure(&mut self, options: NavigatorOptions, now: Instant) {
        self.scheduler
            .set_delays(options.scroll_delay, options.baseline_settle);
        self.run(now, |ctl| ctl.set_options(options));
    }

    pub fn capture_baseline(&mut self, offset: f64) {
        self.controller.capture_baseline(offset);
    }

    /// Scroll back to the committed page if the surface rests elsewhere
    pub fn correct_to_committed(&mut self, resting_index: usize, now: Instant) {
        let committed = self.controller.current_index();
        if resting_index != committed {
            trace!(resting_index, committed, "Correcting resting page");
            self.scheduler.schedule_now(
                ScrollRequest {
                    index: committed,
                    animated: true,
                },
                now,
            );
            self.tick(now);
            let extent = self.surface.page_extent();
            self.controller.capture_baseline(committed as f64 * extent);
        }
    }

    /// The date under horizontal point `x` of the visible strip
    pub fn date_at_point(&self, x: f64) -> Option<NaiveDate> {
        let extent = self.surface.page_extent();
        if extent <= 0.0 || !x.is_finite() {
            return None;
        }
        let absolute = self.surface.content_offset() + x;
        if absolute < 0.0 {
            return None;
        }
        let page = (absolute / extent).floor() as usize;
        let width = self.controller.grid().page_width();
        let cell = extent / width as f64;
        let slot = ((absolute - page as f64 * extent) / cell).floor() as usize;
        resolver::date_in_page(self.controller.grid(), page, slot.min(width - 1))
    }
}
