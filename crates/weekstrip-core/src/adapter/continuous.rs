//! Adapter for a reactive scroll surface that reports phases and live offsets
//! rather than discrete delegate callbacks.

use std::time::Instant;

use tracing::trace;

use super::binding::Binding;
use super::surface::PagingSurface;
use super::DateNavigator;
use crate::nav::{NavigatorListener, Phase, ScrollSyncController};

/// Scroll phase as reported by the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// The user's finger (or key) is moving the content
    Interacting,
    /// Released with velocity, still moving toward a page
    Decelerating,
    /// A programmatic scroll is running
    Animating,
}

impl ScrollPhase {
    fn is_user(self) -> bool {
        matches!(self, Self::Interacting | Self::Decelerating)
    }
}

pub struct ContinuousAdapter<S, L> {
    binding: Binding<S, L>,
    phase: ScrollPhase,
    live_offset: f64,
}

impl<S: PagingSurface, L: NavigatorListener> ContinuousAdapter<S, L> {
    pub fn new(controller: ScrollSyncController, surface: S, listener: L) -> Self {
        let live_offset = surface.content_offset();
        Self {
            binding: Binding::new(controller, surface, listener),
            phase: ScrollPhase::Idle,
            live_offset,
        }
    }

    pub fn scroll_phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn live_offset(&self) -> f64 {
        self.live_offset
    }

    /// The surface moved into a new scroll phase
    pub fn scroll_phase_changed(&mut self, phase: ScrollPhase, now: Instant) {
        let previous = std::mem::replace(&mut self.phase, phase);
        if previous == phase {
            return;
        }
        trace!(?previous, ?phase, "Scroll phase changed");

        match phase {
            ScrollPhase::Interacting if !previous.is_user() => {
                self.binding.begin_gesture(self.live_offset, now);
            }
            ScrollPhase::Idle if previous.is_user() => {
                // Came to rest without reporting a target page
                if self.binding.controller().phase() == Phase::Dragging {
                    self.finish_at(self.live_offset, now);
                }
            }
            _ => {}
        }
    }

    /// The content offset changed while the surface is in any phase
    pub fn offset_changed(&mut self, offset: f64, now: Instant) {
        self.live_offset = offset;
        if self.phase.is_user() && self.binding.controller().phase() == Phase::Dragging {
            self.binding.run(now, |ctl| ctl.drag_to(offset));
        }
    }

    /// The surface settled with page `index` in view
    pub fn target_settled(&mut self, index: usize, now: Instant) {
        let extent = self.binding.surface().page_extent();
        let offset = index as f64 * extent;
        self.live_offset = offset;
        if self.binding.controller().phase() == Phase::Dragging {
            self.binding.finish_gesture(offset, now);
            self.binding.correct_to_committed(index, now);
        } else {
            self.binding.capture_baseline(offset);
        }
        self.phase = ScrollPhase::Idle;
    }

    fn finish_at(&mut self, offset: f64, now: Instant) {
        let extent = self.binding.surface().page_extent();
        self.binding.finish_gesture(offset, now);
        if extent > 0.0 && offset.is_finite() {
            let resting = (offset / extent).round().max(0.0) as usize;
            self.binding.correct_to_committed(resting, now);
        }
    }
}

impl<S: PagingSurface, L: NavigatorListener> DateNavigator for ContinuousAdapter<S, L> {
    type Surface = S;
    type Listener = L;

    fn binding(&self) -> &Binding<S, L> {
        &self.binding
    }

    fn binding_mut(&mut self) -> &mut Binding<S, L> {
        &mut self.binding
    }
}
