//! The seam between the controller and the two kinds of rendering surface.
//!
//! Both adapters route every input through the same [`Binding`], so the same
//! gesture or assignment produces the same date, index and notifications
//! whichever surface reports it.

pub mod binding;
pub mod continuous;
pub mod discrete;
pub mod surface;

use std::time::Instant;

use chrono::NaiveDate;

pub use binding::Binding;
pub use continuous::{ContinuousAdapter, ScrollPhase};
pub use discrete::{CellParams, DiscreteAdapter};
pub use surface::{PagingSurface, RecordingSurface};

use crate::error::Result;
use crate::grid::{resolver, GridSpec, WeekGridModel, WeekPage};
use crate::nav::{NavigationState, NavigatorListener, NavigatorOptions, PageDirection};

/// What the owner of a navigator sees, whichever surface it renders on
pub trait DateNavigator {
    type Surface: PagingSurface;
    type Listener: NavigatorListener;

    fn binding(&self) -> &Binding<Self::Surface, Self::Listener>;

    fn binding_mut(&mut self) -> &mut Binding<Self::Surface, Self::Listener>;

    /// Initial placement on the selected date's page
    fn present(&mut self, now: Instant) {
        self.binding_mut().present(now);
    }

    /// External assignment; never reported back as a user selection
    fn set_date(&mut self, date: NaiveDate) {
        self.set_date_at(date, Instant::now());
    }

    fn set_date_at(&mut self, date: NaiveDate, now: Instant) {
        self.binding_mut().set_date(date, now);
    }

    fn go_to_today(&mut self, now: Instant) {
        self.binding_mut().run(now, |ctl| ctl.go_to_today());
    }

    /// The user tapped the cell at `slot` of `page`
    fn select_day(&mut self, page: usize, slot: usize, now: Instant) {
        self.binding_mut().select_day(page, slot, now);
    }

    fn step(&mut self, direction: PageDirection, now: Instant) {
        self.binding_mut().step(direction, now);
    }

    fn track_transform(&mut self, dx: Option<f64>, now: Instant) {
        self.binding_mut().track_transform(dx, now);
    }

    /// Issue scrolls that have come due
    fn tick(&mut self, now: Instant) {
        self.binding_mut().tick(now);
    }

    fn layout_settled(&mut self, now: Instant) {
        self.binding_mut().layout_settled(now);
    }

    fn reload_frame(&mut self, page_extent: f64) {
        self.binding_mut().reload_frame(page_extent);
    }

    fn replace_grid(&mut self, grid: WeekGridModel, now: Instant) -> Result<()> {
        self.binding_mut().replace_grid(grid, now)
    }

    fn rebuild(&mut self, spec: GridSpec, now: Instant) -> Result<()> {
        self.binding_mut().rebuild(spec, now)
    }

    fn reconfigure(&mut self, options: NavigatorOptions, now: Instant) {
        self.binding_mut().reconfigure(options, now);
    }

    /// When the next scheduled scroll or re-capture is due
    fn next_deadline(&self) -> Option<Instant> {
        self.binding().scheduler().next_deadline()
    }

    fn selected_date(&self) -> NaiveDate {
        self.binding().controller().selected_date()
    }

    fn current_index(&self) -> usize {
        self.binding().controller().current_index()
    }

    fn state(&self) -> &NavigationState {
        self.binding().controller().state()
    }

    fn grid(&self) -> &WeekGridModel {
        self.binding().controller().grid()
    }

    /// The page showing `date`
    fn days_for_date(&self, date: NaiveDate) -> Option<&WeekPage> {
        resolver::days_for_date(self.grid(), date)
    }

    fn date_at_point(&self, x: f64) -> Option<NaiveDate> {
        self.binding().date_at_point(x)
    }

    fn surface(&self) -> &Self::Surface {
        self.binding().surface()
    }

    fn surface_mut(&mut self) -> &mut Self::Surface {
        self.binding_mut().surface_mut()
    }

    fn listener(&self) -> &Self::Listener {
        self.binding().listener()
    }

    fn listener_mut(&mut self) -> &mut Self::Listener {
        self.binding_mut().listener_mut()
    }
}
