use crate::nav::SurfaceCommand;

/// What a rendering surface must offer the navigator
pub trait PagingSurface {
    /// Bring page `index` fully into view
    fn scroll_to(&mut self, index: usize, animated: bool);

    /// Re-render the visible pages (selection highlight changed)
    fn reload_visible_pages(&mut self);

    /// Place the content at an absolute offset without paging
    fn set_content_offset(&mut self, offset: f64);

    /// Current horizontal content offset
    fn content_offset(&self) -> f64;

    /// Width of one page; zero before the first layout
    fn page_extent(&self) -> f64;

    /// Layout changed the width of one page
    fn set_page_extent(&mut self, extent: f64);
}

/// Headless surface that pages instantly and records every command.
///
/// Useful for driving a navigator without a UI, and for tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    extent: f64,
    offset: f64,
    calls: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    pub fn new(page_extent: f64) -> Self {
        Self {
            extent: page_extent,
            offset: 0.0,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[SurfaceCommand] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.calls)
    }

    /// Scroll targets in the order they were issued
    pub fn scroll_targets(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SurfaceCommand::ScrollTo { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn reload_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, SurfaceCommand::ReloadVisiblePages))
            .count()
    }

    /// Simulate the user moving the content
    pub fn drag_content_to(&mut self, offset: f64) {
        self.offset = offset;
    }
}

impl PagingSurface for RecordingSurface {
    fn scroll_to(&mut self, index: usize, animated: bool) {
        self.offset = index as f64 * self.extent;
        self.calls.push(SurfaceCommand::ScrollTo { index, animated });
    }

    fn reload_visible_pages(&mut self) {
        self.calls.push(SurfaceCommand::ReloadVisiblePages);
    }

    fn set_content_offset(&mut self, offset: f64) {
        self.offset = offset;
        self.calls.push(SurfaceCommand::SetContentOffset { offset });
    }

    fn content_offset(&self) -> f64 {
        self.offset
    }

    fn page_extent(&self) -> f64 {
        self.extent
    }

    fn set_page_extent(&mut self, extent: f64) {
        self.extent = extent;
    }
}
