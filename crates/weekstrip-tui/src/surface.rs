use std::time::Instant;

use tracing::trace;
use weekstrip_core::PagingSurface;

use crate::scroll::{Frame, OffsetAnimator, ScrollConfig};

/// The strip as drawn in the terminal. Offsets and extents are in columns.
#[derive(Debug, Clone)]
pub struct TerminalSurface {
    animator: OffsetAnimator,
    extent: f64,
    page_count: usize,
}

impl TerminalSurface {
    pub fn new(config: ScrollConfig, page_count: usize) -> Self {
        Self {
            animator: OffsetAnimator::new(config),
            extent: 0.0,
            page_count,
        }
    }

    fn max_offset(&self) -> f64 {
        self.page_count.saturating_sub(1) as f64 * self.extent
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Move the content under the user's hand, stopping any animation
    pub fn drag_by(&mut self, dx: f64) -> f64 {
        let offset = (self.animator.current() + dx).clamp(0.0, self.max_offset());
        self.animator.jump_to(offset);
        offset
    }

    /// Let go: glide to the nearest page and return its index
    pub fn snap(&mut self, now: Instant) -> usize {
        let index = self.nearest_page();
        self.animator.animate_to(index as f64 * self.extent, now);
        index
    }

    pub fn nearest_page(&self) -> usize {
        if self.extent <= 0.0 {
            return 0;
        }
        let page = (self.animator.current() / self.extent).round().max(0.0) as usize;
        page.min(self.page_count.saturating_sub(1))
    }

    /// Advance the animation. Returns the offset an animation came to rest at.
    pub fn update(&mut self, now: Instant) -> Option<f64> {
        match self.animator.update(now) {
            Frame::Idle | Frame::Moving(_) => None,
            Frame::Arrived(offset) => Some(offset),
        }
    }
}

impl PagingSurface for TerminalSurface {
    fn scroll_to(&mut self, index: usize, animated: bool) {
        let target = index.min(self.page_count.saturating_sub(1)) as f64 * self.extent;
        trace!(index, animated, target, "Terminal strip scroll");
        if animated {
            self.animator.animate_to(target, Instant::now());
        } else {
            self.animator.jump_to(target);
        }
    }

    // Every frame is redrawn from the grid
    fn reload_visible_pages(&mut self) {}

    fn set_content_offset(&mut self, offset: f64) {
        self.animator.jump_to(offset.clamp(0.0, self.max_offset()));
    }

    fn content_offset(&self) -> f64 {
        self.animator.current()
    }

    fn page_extent(&self) -> f64 {
        self.extent
    }

    fn set_page_extent(&mut self, extent: f64) {
        self.animator.cancel();
        self.extent = extent.max(0.0);
    }
}
