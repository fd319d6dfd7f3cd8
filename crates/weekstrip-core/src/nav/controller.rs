//! The state machine binding the selected date, the committed page and the
//! live drag offset.
//!
//! Every input returns the [`Effects`] it produced. The controller never
//! talks to a surface or an owner itself; adapters deliver the effects.

use chrono::NaiveDate;
use tracing::{debug, trace, warn};

use super::event::{Effects, NavEvent, SurfaceCommand};
use super::options::{CommitAnchor, NavigatorOptions};
use super::state::{NavigationState, PageKind, Phase};
use super::transition::{self, PageDirection, PageTransition};
use crate::calendar;
use crate::error::{Error, Result};
use crate::grid::{resolver, GridSpec, WeekGridModel};

#[derive(Debug, Clone)]
pub struct ScrollSyncController {
    grid: WeekGridModel,
    options: NavigatorOptions,
    state: NavigationState,
    phase: Phase,
    /// Decision awaiting `settle`
    decision: Option<PageTransition>,
    /// Translation at gesture end, reported when the gesture stays on its page
    end_translation: f64,
    /// Last translation reported to the owner during the current gesture
    last_translation: Option<f64>,
    /// Whether the initial placement scroll has been issued
    presented: bool,
}

impl ScrollSyncController {
    /// Create a controller showing `initial`.
    ///
    /// A date the grid cannot show is clamped to the nearest day it can.
    pub fn new(grid: WeekGridModel, options: NavigatorOptions, initial: NaiveDate) -> Self {
        let (date, index) = Self::initial_position(&grid, initial);
        debug!(date = %date, index, pages = grid.page_count(), "Navigator created");
        Self {
            grid,
            options,
            state: NavigationState::new(date, index),
            phase: Phase::Idle,
            decision: None,
            end_translation: 0.0,
            last_translation: None,
            presented: false,
        }
    }

    fn initial_position(grid: &WeekGridModel, initial: NaiveDate) -> (NaiveDate, usize) {
        if let Some(index) = resolver::index_for_normalized(grid, initial) {
            return (initial, index);
        }

        let last = grid.page_count().saturating_sub(1);
        let (index, date) = if initial < grid.first_cell_date() {
            (0, resolver::date_for_index(grid, 0, initial))
        } else {
            let page_last = grid
                .page_at(last)
                .ok()
                .and_then(|p| p.last_date())
                .unwrap_or(initial);
            (last, page_last)
        };
        warn!(
            requested = %initial,
            clamped = %date,
            "Initial date outside the grid, clamping"
        );
        (date, index)
    }

    pub fn grid(&self) -> &WeekGridModel {
        &self.grid
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.selected_date
    }

    pub fn current_index(&self) -> usize {
        self.state.committed_index
    }

    pub fn baseline(&self) -> f64 {
        self.state.baseline_offset
    }

    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// Initial placement: jump to the committed page without animation
    pub fn present(&mut self) -> Effects {
        let mut effects = Effects::none();
        effects.command(SurfaceCommand::ScrollTo {
            index: self.state.committed_index,
            animated: false,
        });
        effects.command(SurfaceCommand::ReloadVisiblePages);
        self.presented = true;
        effects
    }

    /// The first programmatic scroll places the strip; later ones animate
    fn next_scroll_animated(&mut self) -> bool {
        std::mem::replace(&mut self.presented, true)
    }

    // ---- External assignment ----

    /// Owner assigns a date. Never produces a `DateSelected` notification.
    pub fn set_date(&mut self, date: NaiveDate) -> Effects {
        let Some(index) = resolver::index_for_normalized(&self.grid, date) else {
            debug!(date = %date, "Ignoring date outside the grid");
            return Effects::none();
        };

        if index == self.state.committed_index && date == self.state.selected_date {
            return Effects::none();
        }

        self.cancel_drag();
        let mut effects = Effects::none();
        self.state.selected_date = date;
        self.state.is_user_driven = false;

        if index == self.state.committed_index {
            trace!(date = %date, index, "External date on the current page");
            effects.command(SurfaceCommand::ReloadVisiblePages);
            return effects;
        }

        debug!(date = %date, from = self.state.committed_index, to = index, "External date assignment");
        self.state.committed_index = index;
        let animated = self.next_scroll_animated();
        effects.command(SurfaceCommand::ScrollTo { index, animated });
        effects.command(SurfaceCommand::ReloadVisiblePages);
        effects
    }

    /// External assignment of today's date
    pub fn go_to_today(&mut self) -> Effects {
        self.set_date(calendar::today())
    }

    // ---- Direct selection ----

    /// The user tapped the cell at `slot` of page `index`
    pub fn select_day(&mut self, index: usize, slot: usize) -> Effects {
        let Some(date) = resolver::date_in_page(&self.grid, index, slot) else {
            debug!(index, slot, "Ignoring tap on a padding or missing cell");
            return Effects::none();
        };

        if self.options.kind == PageKind::Day && date == self.state.selected_date {
            return Effects::none();
        }

        self.cancel_drag();
        let committed = resolver::index_for_normalized(&self.grid, date).unwrap_or(index);
        self.state.selected_date = date;
        self.state.committed_index = committed;
        self.state.is_user_driven = true;
        debug!(date = %date, index = committed, "Day selected");

        let mut effects = Effects::none();
        effects.notify(NavEvent::DateSelected {
            date,
            kind: self.options.kind,
        });
        let animated = self.next_scroll_animated();
        effects.command(SurfaceCommand::ScrollTo {
            index: committed,
            animated,
        });
        effects.command(SurfaceCommand::ReloadVisiblePages);
        effects
    }

    // ---- Gestures ----

    pub fn begin_drag(&mut self, offset: f64) -> Effects {
        if !self.options.scroll_enabled {
            return Effects::none();
        }
        if self.phase == Phase::Dragging {
            return self.drag_to(offset);
        }
        self.phase = Phase::Dragging;
        self.decision = None;
        self.last_translation = None;
        self.state.pending_drag_offset = Some(offset);
        trace!(offset, baseline = self.state.baseline_offset, "Drag began");
        self.track(offset, false)
    }

    /// A gesture moved the strip. Only the pending offset changes.
    pub fn drag_to(&mut self, offset: f64) -> Effects {
        if !self.options.scroll_enabled {
            return Effects::none();
        }
        if self.phase != Phase::Dragging {
            return self.begin_drag(offset);
        }
        self.state.pending_drag_offset = Some(offset);
        self.track(offset, false)
    }

    fn track(&mut self, offset: f64, ended: bool) -> Effects {
        let mut effects = Effects::none();
        if !self.options.track_scroll_offset {
            return effects;
        }
        let translation = self.state.baseline_offset - offset;
        if ended || self.last_translation != Some(translation) {
            self.last_translation = Some(translation);
            effects.notify(NavEvent::ScrollOffsetTracked { translation, ended });
        }
        effects
    }

    /// The gesture came to rest at `offset`. Computes the page decision and
    /// re-captures the baseline; the commit happens in [`settle`](Self::settle).
    pub fn end_drag(&mut self, offset: f64, page_extent: f64) -> PageTransition {
        if !self.options.scroll_enabled {
            return PageTransition::SamePage;
        }
        let baseline = self.state.baseline_offset;
        let mut decision = transition::decide(baseline, offset, page_extent);

        self.end_translation = baseline - offset;
        let beyond_edge = decision
            .direction()
            .is_some_and(|direction| self.adjacent(direction).is_none());
        if beyond_edge {
            // The surface springs back to the committed page
            debug!(?decision, offset, "Drag past the grid edge");
            decision = PageTransition::SamePage;
            self.state.baseline_offset = self.state.committed_index as f64 * page_extent;
        } else if offset.is_finite() {
            self.state.baseline_offset = offset;
        }
        self.state.pending_drag_offset = None;
        self.decision = Some(decision);
        self.phase = Phase::Settling;
        debug!(?decision, baseline, offset, "Drag ended");
        decision
    }

    /// Apply the decision computed by `end_drag`
    pub fn settle(&mut self) -> Effects {
        let decision = self.decision.take();
        self.phase = Phase::Idle;
        self.last_translation = None;

        let Some(direction) = decision.and_then(PageTransition::direction) else {
            let mut effects = Effects::none();
            if decision.is_some() && self.options.track_scroll_offset {
                effects.notify(NavEvent::ScrollOffsetTracked {
                    translation: self.end_translation,
                    ended: true,
                });
            }
            return effects;
        };

        let Some((index, date)) = self.adjacent(direction) else {
            debug!(?direction, "No page beyond the grid edge");
            return Effects::none();
        };

        self.state.committed_index = index;
        self.state.selected_date = date;
        self.state.is_user_driven = true;
        debug!(?direction, index, date = %date, "Page committed");

        let mut effects = Effects::none();
        effects.notify(NavEvent::PageBoundaryCrossed { direction });
        effects.notify(NavEvent::DateSelected {
            date,
            kind: self.options.kind,
        });
        effects.command(SurfaceCommand::ReloadVisiblePages);
        effects
    }

    /// `end_drag` followed by `settle`
    pub fn finish_drag(&mut self, offset: f64, page_extent: f64) -> Effects {
        self.end_drag(offset, page_extent);
        self.settle()
    }

    /// Abandon an in-flight gesture without a decision
    pub fn cancel_drag(&mut self) {
        if self.phase != Phase::Idle {
            trace!(phase = ?self.phase, "Gesture cancelled");
        }
        self.phase = Phase::Idle;
        self.decision = None;
        self.last_translation = None;
        self.state.pending_drag_offset = None;
    }

    pub fn capture_baseline(&mut self, offset: f64) {
        if offset.is_finite() && self.phase == Phase::Idle {
            trace!(offset, "Baseline captured");
            self.state.baseline_offset = offset;
        }
    }

    /// Target page and date one page away from the committed one
    fn adjacent(&self, direction: PageDirection) -> Option<(usize, NaiveDate)> {
        let index = self
            .state
            .committed_index
            .checked_add_signed(direction.sign() as isize)
            .filter(|idx| *idx < self.grid.page_count())?;

        let page_start = resolver::date_for_index(&self.grid, index, self.state.selected_date);
        let date = match self.options.commit_anchor {
            CommitAnchor::PageStart => page_start,
            CommitAnchor::SameSlot => {
                let width = self.grid.page_width() as i64;
                let candidate = calendar::add_days(self.state.selected_date, direction.sign() * width);
                if resolver::index_for_normalized(&self.grid, candidate) == Some(index) {
                    candidate
                } else {
                    page_start
                }
            }
        };
        Some((index, date))
    }

    // ---- Programmatic moves ----

    /// Move one page as a linked view would: scrolls and reports the
    /// crossing, but does not report a user selection.
    pub fn step(&mut self, direction: PageDirection) -> Effects {
        let Some((index, date)) = self.adjacent(direction) else {
            debug!(?direction, "Cannot step beyond the grid edge");
            return Effects::none();
        };
        self.cancel_drag();
        self.state.committed_index = index;
        self.state.selected_date = date;
        self.state.is_user_driven = false;

        let mut effects = Effects::none();
        effects.notify(NavEvent::PageBoundaryCrossed { direction });
        let animated = self.next_scroll_animated();
        effects.command(SurfaceCommand::ScrollTo { index, animated });
        effects.command(SurfaceCommand::ReloadVisiblePages);
        effects
    }

    /// Follow a linked view's horizontal translation; `None` snaps back
    pub fn track_transform(&mut self, dx: Option<f64>) -> Effects {
        let mut effects = Effects::none();
        match dx {
            Some(dx) => effects.command(SurfaceCommand::SetContentOffset {
                offset: self.state.baseline_offset - dx,
            }),
            None => effects.command(SurfaceCommand::ScrollTo {
                index: self.state.committed_index,
                animated: true,
            }),
        }
        effects
    }

    // ---- Reconfiguration ----

    /// Swap in a rebuilt grid. Rejected if it cannot show the selected date.
    pub fn replace_grid(&mut self, grid: WeekGridModel) -> Result<Effects> {
        let date = self.state.selected_date;
        let index = resolver::index_for_normalized(&grid, date).ok_or_else(|| {
            Error::OutOfRange(format!("selected date {} is not in the new grid", date))
        })?;

        self.cancel_drag();
        self.grid = grid;
        self.state.committed_index = index;
        debug!(index, pages = self.grid.page_count(), "Grid replaced");

        let mut effects = Effects::none();
        effects.command(SurfaceCommand::ReloadVisiblePages);
        effects.command(SurfaceCommand::ScrollTo {
            index,
            animated: false,
        });
        self.presented = true;
        Ok(effects)
    }

    /// Rebuild the grid from a new spec and swap it in
    pub fn rebuild(&mut self, spec: GridSpec) -> Result<Effects> {
        let grid = WeekGridModel::build(spec)?;
        self.replace_grid(grid)
    }

    pub fn set_options(&mut self, options: NavigatorOptions) -> Effects {
        self.options = options;
        if !options.scroll_enabled {
            self.cancel_drag();
        }
        let mut effects = Effects::none();
        effects.command(SurfaceCommand::ReloadVisiblePages);
        effects.command(SurfaceCommand::ScrollTo {
            index: self.state.committed_index,
            animated: false,
        });
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekStart;

    const EXTENT: f64 = 350.0;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Monday weeks around Wednesday 2024-05-15
    fn controller_with(width: usize, options: NavigatorOptions) -> ScrollSyncController {
        let spec = GridSpec::new(date(2024, 5, 15), 1, 1, WeekStart::Monday, width);
        let grid = WeekGridModel::build(spec).unwrap();
        let mut ctl = ScrollSyncController::new(grid, options, date(2024, 5, 15));
        ctl.present();
        let baseline = ctl.current_index() as f64 * EXTENT;
        ctl.capture_baseline(baseline);
        ctl
    }

    fn controller() -> ScrollSyncController {
        controller_with(7, NavigatorOptions::immediate())
    }

    #[test]
    fn test_set_date_same_date_is_noop() {
        let mut ctl = controller();
        assert!(ctl.set_date(date(2024, 5, 15)).is_empty());
    }

    #[test]
    fn test_set_date_twice_scrolls_once() {
        let mut ctl = controller();
        let first = ctl.set_date(date(2024, 6, 20));
        assert!(first.scroll_target().is_some());
        assert_eq!(first.date_selected_count(), 0);
        let second = ctl.set_date(date(2024, 6, 20));
        assert!(second.is_empty());
    }

    #[test]
    fn test_set_date_same_week_only_reloads() {
        let mut ctl = controller();
        let index = ctl.current_index();
        let effects = ctl.set_date(date(2024, 5, 13));
        assert_eq!(ctl.current_index(), index);
        assert_eq!(ctl.selected_date(), date(2024, 5, 13));
        assert_eq!(effects.commands, vec![SurfaceCommand::ReloadVisiblePages]);
        assert!(effects.events.is_empty());
        assert!(!ctl.state().is_user_driven);
    }

    #[test]
    fn test_set_date_out_of_range_keeps_state() {
        let mut ctl = controller();
        let before = ctl.state().clone();
        assert!(ctl.set_date(date(2030, 1, 1)).is_empty());
        assert_eq!(ctl.state(), &before);
    }

    #[test]
    fn test_first_programmatic_scroll_not_animated() {
        let spec = GridSpec::new(date(2024, 5, 15), 1, 1, WeekStart::Monday, 7);
        let grid = WeekGridModel::build(spec).unwrap();
        let mut ctl = ScrollSyncController::new(grid, NavigatorOptions::immediate(), date(2024, 5, 15));
        let first = ctl.set_date(date(2024, 7, 1));
        assert!(first.commands.contains(&SurfaceCommand::ScrollTo {
            index: ctl.current_index(),
            animated: false
        }));
        let second = ctl.set_date(date(2024, 8, 1));
        assert!(second.commands.contains(&SurfaceCommand::ScrollTo {
            index: ctl.current_index(),
            animated: true
        }));
    }

    #[test]
    fn test_drag_moves_never_touch_date() {
        let mut ctl = controller();
        let baseline = ctl.baseline();
        ctl.begin_drag(baseline);
        for step in 1..20 {
            let effects = ctl.drag_to(baseline + (step as f64 * 37.0) % 500.0 - 250.0);
            assert!(effects.is_empty());
            assert_eq!(ctl.selected_date(), date(2024, 5, 15));
            assert_eq!(ctl.phase(), Phase::Dragging);
        }
        assert!(ctl.state().pending_drag_offset.is_some());
    }

    #[test]
    fn test_drag_back_to_baseline_is_same_page() {
        let mut ctl = controller();
        let baseline = ctl.baseline();
        ctl.begin_drag(baseline);
        ctl.drag_to(baseline + 120.0);
        ctl.drag_to(baseline - 300.0);
        ctl.drag_to(baseline + 10.0);
        assert_eq!(ctl.end_drag(baseline, EXTENT), PageTransition::SamePage);
        assert_eq!(ctl.phase(), Phase::Settling);
        assert!(ctl.settle().is_empty());
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.selected_date(), date(2024, 5, 15));
    }

    #[test]
    fn test_drag_forward_commits_once() {
        let mut ctl = controller();
        let index = ctl.current_index();
        let baseline = ctl.baseline();
        ctl.begin_drag(baseline);
        ctl.drag_to(baseline + 200.0);
        let effects = ctl.finish_drag(baseline + EXTENT, EXTENT);

        assert_eq!(ctl.current_index(), index + 1);
        assert_eq!(ctl.selected_date(), date(2024, 5, 22));
        assert!(ctl.state().is_user_driven);
        assert_eq!(
            effects.events,
            vec![
                NavEvent::PageBoundaryCrossed { direction: PageDirection::Next },
                NavEvent::DateSelected { date: date(2024, 5, 22), kind: PageKind::Week },
            ]
        );
        assert_eq!(ctl.baseline(), baseline + EXTENT);
        assert_eq!(ctl.state().pending_drag_offset, None);
    }

    #[test]
    fn test_drag_backward_page_start_anchor() {
        let options = NavigatorOptions {
            commit_anchor: CommitAnchor::PageStart,
            ..NavigatorOptions::immediate()
        };
        let mut ctl = controller_with(7, options);
        let baseline = ctl.baseline();
        ctl.finish_drag(baseline - EXTENT, EXTENT);
        assert_eq!(ctl.selected_date(), date(2024, 5, 6));
    }

    #[test]
    fn test_partial_width_pages_from_selection() {
        let mut ctl = controller_with(3, NavigatorOptions::immediate());
        let baseline = ctl.baseline();
        ctl.finish_drag(baseline + EXTENT, EXTENT);
        assert_eq!(ctl.selected_date(), date(2024, 5, 18));
        let baseline = ctl.baseline();
        ctl.finish_drag(baseline - EXTENT, EXTENT);
        assert_eq!(ctl.selected_date(), date(2024, 5, 15));
    }

    #[test]
    fn test_baseline_recaptured_after_commit() {
        let mut ctl = controller();
        let baseline = ctl.baseline();
        ctl.finish_drag(baseline + EXTENT, EXTENT);
        // Resting where the last gesture ended is not another move
        let effects = ctl.finish_drag(baseline + EXTENT, EXTENT);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_drag_past_grid_edge_is_ignored() {
        let spec = GridSpec::new(date(2024, 5, 15), 0, 0, WeekStart::Monday, 7);
        let grid = WeekGridModel::build(spec).unwrap();
        let mut ctl = ScrollSyncController::new(grid, NavigatorOptions::immediate(), date(2024, 5, 15));
        let effects = ctl.finish_drag(EXTENT, EXTENT);
        assert!(effects.is_empty());
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.baseline(), 0.0);
    }

    #[test]
    fn test_overscroll_before_first_page_keeps_baseline() {
        let spec = GridSpec::new(date(2024, 5, 15), 0, 1, WeekStart::Monday, 7);
        let grid = WeekGridModel::build(spec).unwrap();
        let mut ctl = ScrollSyncController::new(grid, NavigatorOptions::immediate(), date(2024, 5, 15));
        ctl.present();
        ctl.capture_baseline(0.0);

        ctl.begin_drag(0.0);
        ctl.drag_to(-EXTENT);
        assert!(ctl.finish_drag(-EXTENT, EXTENT).is_empty());
        assert_eq!(ctl.baseline(), 0.0);

        // Coming to rest back on the first page is not a move
        ctl.begin_drag(-EXTENT);
        assert!(ctl.finish_drag(0.0, EXTENT).is_empty());
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.selected_date(), date(2024, 5, 15));
    }

    #[test]
    fn test_select_day_notifies_and_scrolls() {
        let mut ctl = controller();
        let index = ctl.current_index();
        let effects = ctl.select_day(index, 4);
        assert_eq!(ctl.selected_date(), date(2024, 5, 17));
        assert_eq!(effects.date_selected_count(), 1);
        assert_eq!(effects.scroll_target(), Some(index));
        assert!(ctl.state().is_user_driven);
    }

    #[test]
    fn test_select_same_day_in_day_kind_is_noop() {
        let mut ctl = controller_with(7, NavigatorOptions::immediate().with_kind(PageKind::Day));
        let index = ctl.current_index();
        assert!(ctl.select_day(index, 2).is_empty());
        assert_eq!(ctl.select_day(index, 3).date_selected_count(), 1);
    }

    #[test]
    fn test_select_day_out_of_range_slot() {
        let mut ctl = controller();
        let index = ctl.current_index();
        assert!(ctl.select_day(index, 9).is_empty());
        assert!(ctl.select_day(ctl.grid().page_count(), 0).is_empty());
    }

    #[test]
    fn test_external_date_cancels_gesture() {
        let mut ctl = controller();
        let baseline = ctl.baseline();
        ctl.begin_drag(baseline);
        ctl.drag_to(baseline + 50.0);
        ctl.set_date(date(2024, 9, 2));
        assert_eq!(ctl.phase(), Phase::Idle);
        assert_eq!(ctl.state().pending_drag_offset, None);
    }

    #[test]
    fn test_tracking_reports_changed_translations() {
        let mut ctl = controller_with(7, NavigatorOptions::immediate().with_tracking(true));
        let baseline = ctl.baseline();
        ctl.begin_drag(baseline);
        let moved = ctl.drag_to(baseline + 40.0);
        assert_eq!(
            moved.events,
            vec![NavEvent::ScrollOffsetTracked { translation: -40.0, ended: false }]
        );
        assert!(ctl.drag_to(baseline + 40.0).is_empty());
        let settled = ctl.finish_drag(baseline, EXTENT);
        assert_eq!(
            settled.events,
            vec![NavEvent::ScrollOffsetTracked { translation: 0.0, ended: true }]
        );
    }

    #[test]
    fn test_scroll_disabled_ignores_gestures() {
        let options = NavigatorOptions {
            scroll_enabled: false,
            ..NavigatorOptions::immediate()
        };
        let mut ctl = controller_with(7, options);
        let baseline = ctl.baseline();
        ctl.begin_drag(baseline);
        assert_eq!(ctl.phase(), Phase::Idle);
        assert!(ctl.finish_drag(baseline + EXTENT, EXTENT).is_empty());
        let index = ctl.current_index();
        assert_eq!(ctl.select_day(index, 0).date_selected_count(), 1);
    }

    #[test]
    fn test_step_reports_crossing_without_selection() {
        let mut ctl = controller();
        let index = ctl.current_index();
        let effects = ctl.step(PageDirection::Previous);
        assert_eq!(ctl.current_index(), index - 1);
        assert_eq!(ctl.selected_date(), date(2024, 5, 8));
        assert_eq!(effects.date_selected_count(), 0);
        assert_eq!(
            effects.events,
            vec![NavEvent::PageBoundaryCrossed { direction: PageDirection::Previous }]
        );
        assert_eq!(effects.scroll_target(), Some(index - 1));
    }

    #[test]
    fn test_track_transform() {
        let mut ctl = controller();
        let baseline = ctl.baseline();
        assert_eq!(
            ctl.track_transform(Some(30.0)).commands,
            vec![SurfaceCommand::SetContentOffset { offset: baseline - 30.0 }]
        );
        assert_eq!(ctl.track_transform(None).scroll_target(), Some(ctl.current_index()));
    }

    #[test]
    fn test_replace_grid() {
        let mut ctl = controller();
        let narrow = WeekGridModel::build(GridSpec::new(date(2024, 5, 15), 0, 0, WeekStart::Sunday, 7)).unwrap();
        let effects = ctl.replace_grid(narrow).unwrap();
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(effects.scroll_target(), Some(0));

        let elsewhere = WeekGridModel::build(GridSpec::new(date(2020, 1, 1), 0, 0, WeekStart::Sunday, 7)).unwrap();
        assert!(matches!(ctl.replace_grid(elsewhere), Err(Error::OutOfRange(_))));
        assert_eq!(ctl.grid().week_start(), WeekStart::Sunday);
    }

    #[test]
    fn test_rebuild_rejects_bad_width() {
        let mut ctl = controller();
        let spec = GridSpec::new(date(2024, 5, 15), 1, 1, WeekStart::Monday, 9);
        assert!(matches!(ctl.rebuild(spec), Err(Error::MisconfiguredGrid(_))));
    }

    #[test]
    fn test_initial_date_is_clamped() {
        let spec = GridSpec::new(date(2024, 5, 15), 0, 0, WeekStart::Monday, 7);
        let grid = WeekGridModel::build(spec).unwrap();
        let ctl = ScrollSyncController::new(grid.clone(), NavigatorOptions::immediate(), date(2019, 1, 1));
        assert_eq!(ctl.current_index(), 0);
        assert_eq!(ctl.selected_date(), date(2024, 5, 13));

        let ctl = ScrollSyncController::new(grid, NavigatorOptions::immediate(), date(2029, 1, 1));
        assert_eq!(ctl.selected_date(), date(2024, 5, 19));
    }
}
