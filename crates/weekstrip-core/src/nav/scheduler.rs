//! Deferred scroll commands.
//!
//! Only the most recent target matters: scheduling a scroll replaces any that
//! has not been issued yet, so a stale target can never be sent after a newer
//! one. Once a scroll is issued, a baseline re-capture is armed for when the
//! surface has had time to settle.

use std::time::{Duration, Instant};

use tracing::trace;

/// A scroll the surface should perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
    pub animated: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingScroll {
    request: ScrollRequest,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct ScrollScheduler {
    delay: Duration,
    settle: Duration,
    pending: Option<PendingScroll>,
    recapture_at: Option<Instant>,
    superseded: u64,
}

impl ScrollScheduler {
    pub fn new(delay: Duration, settle: Duration) -> Self {
        Self {
            delay,
            settle,
            pending: None,
            recapture_at: None,
            superseded: 0,
        }
    }

    pub fn set_delays(&mut self, delay: Duration, settle: Duration) {
        self.delay = delay;
        self.settle = settle;
    }

    /// Queue a scroll after the configured delay, replacing any pending one
    pub fn schedule(&mut self, request: ScrollRequest, now: Instant) {
        self.schedule_at(request, now + self.delay);
    }

    /// Queue a scroll to be issued on the next poll
    pub fn schedule_now(&mut self, request: ScrollRequest, now: Instant) {
        self.schedule_at(request, now);
    }

    fn schedule_at(&mut self, request: ScrollRequest, due: Instant) {
        if let Some(old) = self.pending.replace(PendingScroll { request, due }) {
            self.superseded += 1;
            trace!(
                stale = old.request.index,
                target = request.index,
                "Superseded pending scroll"
            );
        }
    }

    /// Take the pending scroll if it is due
    pub fn poll(&mut self, now: Instant) -> Option<ScrollRequest> {
        match self.pending {
            Some(pending) if pending.due <= now => self.issue(now),
            _ => None,
        }
    }

    /// Take the pending scroll regardless of its due time
    pub fn flush(&mut self, now: Instant) -> Option<ScrollRequest> {
        if self.pending.is_some() {
            self.issue(now)
        } else {
            None
        }
    }

    fn issue(&mut self, now: Instant) -> Option<ScrollRequest> {
        let pending = self.pending.take()?;
        self.recapture_at = Some(now + self.settle);
        Some(pending.request)
    }

    /// Whether the baseline should be re-captured now. Fires once per issued scroll.
    pub fn poll_recapture(&mut self, now: Instant) -> bool {
        match self.recapture_at {
            Some(at) if at <= now => {
                self.recapture_at = None;
                true
            }
            _ => false,
        }
    }

    /// Arm a re-capture without a scroll (e.g. after an offset jump)
    pub fn arm_recapture(&mut self, now: Instant) {
        self.recapture_at = Some(now + self.settle);
    }

    /// Drop the pending scroll and re-capture
    pub fn cancel(&mut self) {
        self.pending = None;
        self.recapture_at = None;
    }

    pub fn pending(&self) -> Option<ScrollRequest> {
        self.pending.map(|p| p.request)
    }

    pub fn has_work(&self) -> bool {
        self.pending.is_some() || self.recapture_at.is_some()
    }

    /// Earliest instant at which `poll` or `poll_recapture` could return something
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.pending.map(|p| p.due), self.recapture_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// How many scrolls were replaced before being issued
    pub fn superseded_count(&self) -> u64 {
        self.superseded
    }
}
