//! Adapter for a paged table or collection surface driven by data source
//! queries and delegate callbacks.

use std::time::Instant;

use chrono::NaiveDate;

use super::binding::Binding;
use super::surface::PagingSurface;
use super::DateNavigator;
use crate::calendar;
use crate::grid::Day;
use crate::nav::{NavigatorListener, Phase, ScrollSyncController};

/// Everything a surface needs to draw one day cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellParams<'a> {
    pub day: &'a Day,
    pub selected_date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
}

pub struct DiscreteAdapter<S, L> {
    binding: Binding<S, L>,
}

impl<S: PagingSurface, L: NavigatorListener> DiscreteAdapter<S, L> {
    pub fn new(controller: ScrollSyncController, surface: S, listener: L) -> Self {
        Self {
            binding: Binding::new(controller, surface, listener),
        }
    }

    // ---- Data source ----

    pub fn number_of_pages(&self) -> usize {
        self.binding.controller().grid().page_count()
    }

    pub fn number_of_items(&self, page: usize) -> usize {
        self.binding
            .controller()
            .grid()
            .page_at(page)
            .map(|p| p.len())
            .unwrap_or(0)
    }

    pub fn cell(&self, page: usize, slot: usize) -> Option<CellParams<'_>> {
        self.cell_on(page, slot, calendar::today())
    }

    /// Cell parameters with an explicit notion of today
    pub fn cell_on(&self, page: usize, slot: usize, today: NaiveDate) -> Option<CellParams<'_>> {
        let controller = self.binding.controller();
        let day = controller.grid().page_at(page).ok()?.day(slot)?;
        let selected_date = controller.selected_date();
        Some(CellParams {
            day,
            selected_date,
            is_selected: day.is_date(selected_date),
            is_today: day.is_date(today),
        })
    }

    /// Size of one item for a page of `width` by `height`
    pub fn item_size(&self, width: f64, height: f64) -> (f64, f64) {
        let per_page = self.binding.controller().grid().page_width().max(1);
        (width / per_page as f64, height)
    }

    // ---- Delegate ----

    pub fn will_begin_dragging(&mut self, offset: f64, now: Instant) {
        self.binding.begin_gesture(offset, now);
    }

    pub fn did_scroll(&mut self, offset: f64, now: Instant) {
        if self.binding.controller().phase() == Phase::Dragging {
            self.binding.run(now, |ctl| ctl.drag_to(offset));
        }
    }

    /// The user lifted; paging will bring the content to `target_offset`
    pub fn will_end_dragging(&mut self, target_offset: f64, now: Instant) {
        if self.binding.controller().phase() != Phase::Dragging {
            return;
        }
        let extent = self.binding.surface().page_extent();
        self.binding.finish_gesture(target_offset, now);
        if extent > 0.0 && target_offset.is_finite() {
            let resting = (target_offset / extent).round().max(0.0) as usize;
            self.binding.correct_to_committed(resting, now);
        }
    }

    /// A programmatic scroll finished at `offset`
    pub fn did_end_scrolling_animation(&mut self, offset: f64) {
        self.binding.capture_baseline(offset);
    }

    pub fn did_select_item(&mut self, page: usize, slot: usize, now: Instant) {
        self.binding.select_day(page, slot, now);
    }
}

impl<S: PagingSurface, L: NavigatorListener> DateNavigator for DiscreteAdapter<S, L> {
    type Surface = S;
    type Listener = L;

    fn binding(&self) -> &Binding<S, L> {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut Binding<S, L> {
        &mut self.binding
    }
}
