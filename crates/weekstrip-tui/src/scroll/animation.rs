//! Offset animation for the terminal strip.
//!
//! Call [`OffsetAnimator::animate_to`] to start a glide toward a page offset
//! and [`OffsetAnimator::update`] every frame to advance it.

use std::time::{Duration, Instant};

use weekstrip_core::{EasingType, ScrollConfig};

use super::timing::{is_complete, lerp, progress};

/// Poll interval while a glide runs
pub fn frame_interval(config: &ScrollConfig) -> Duration {
    match config.animation_fps {
        0 => Duration::from_millis(16),
        fps => Duration::from_millis(1000 / fps as u64),
    }
}

/// Fraction of the distance covered at progress `t`
fn ease(curve: EasingType, t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let remaining = 1.0 - t;
    match curve {
        EasingType::Linear => t,
        EasingType::Cubic => 1.0 - remaining.powi(3),
        EasingType::Quintic => 1.0 - remaining.powi(5),
        EasingType::EaseOut if t >= 1.0 => 1.0,
        EasingType::EaseOut => 1.0 - 2.0_f64.powf(-10.0 * t),
    }
}

#[derive(Debug, Clone)]
struct Glide {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    curve: EasingType,
}

impl Glide {
    /// Offset at `now`, or `None` once the glide is over
    fn sample(&self, now: Instant) -> Option<f64> {
        if is_complete(self.start, self.duration, now) {
            return None;
        }
        let t = progress(self.start, self.duration, now);
        Some(lerp(self.from, self.to, ease(self.curve, t)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    Idle,
    Moving(f64),
    /// The running animation reached its target on this frame
    Arrived(f64),
}

#[derive(Debug, Clone, Default)]
pub struct OffsetAnimator {
    glide: Option<Glide>,
    config: ScrollConfig,
    current: f64,
}

impl OffsetAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            glide: None,
            config,
            current: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Place the content immediately, dropping any animation
    pub fn jump_to(&mut self, offset: f64) {
        self.glide = None;
        self.current = offset;
    }

    /// Start moving toward `target` from the visible offset.
    ///
    /// Returns `false` when no animation was started: smooth scrolling is
    /// off or the content is already there. The content is then at `target`.
    pub fn animate_to(&mut self, target: f64, now: Instant) -> bool {
        let smooth = self.config.smooth_enabled && self.config.animation_duration_ms > 0;
        if !smooth || (self.current - target).abs() < f64::EPSILON {
            self.jump_to(target);
            return false;
        }

        self.glide = Some(Glide {
            start: now,
            from: self.current,
            to: target,
            duration: Duration::from_millis(self.config.animation_duration_ms),
            curve: self.config.easing,
        });
        true
    }

    /// Advance the running animation to `now`
    pub fn update(&mut self, now: Instant) -> Frame {
        let Some(glide) = self.glide.as_ref() else {
            return Frame::Idle;
        };

        match glide.sample(now) {
            Some(offset) => {
                self.current = offset;
                Frame::Moving(offset)
            }
            None => {
                self.current = glide.to;
                self.glide = None;
                Frame::Arrived(self.current)
            }
        }
    }

    /// Stop where the content currently is
    pub fn cancel(&mut self) {
        self.glide = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth(ms: u64) -> ScrollConfig {
        ScrollConfig {
            smooth_enabled: true,
            animation_duration_ms: ms,
            ..Default::default()
        }
    }

    const CURVES: [EasingType; 4] = [
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_curves_start_and_end_in_place() {
        for curve in CURVES {
            assert!(ease(curve, 0.0).abs() < 0.001, "{:?} at t=0", curve);
            assert!((ease(curve, 1.0) - 1.0).abs() < 0.001, "{:?} at t=1", curve);
        }
    }

    #[test]
    fn test_curves_never_move_backward() {
        for curve in CURVES {
            let mut prev = 0.0;
            for i in 0..=20 {
                let v = ease(curve, i as f64 / 20.0);
                assert!(v >= prev, "{:?} went back at step {}", curve, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(&ScrollConfig::default()), Duration::from_millis(16));
        let config = ScrollConfig {
            animation_fps: 0,
            ..Default::default()
        };
        assert_eq!(frame_interval(&config), Duration::from_millis(16));
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut animator = OffsetAnimator::new(smooth(0));
        assert!(!animator.animate_to(350.0, Instant::now()));
        assert_eq!(animator.current(), 350.0);
    }

    #[test]
    fn test_instant_when_disabled() {
        let mut animator = OffsetAnimator::new(ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        });
        assert!(!animator.animate_to(700.0, Instant::now()));
        assert_eq!(animator.current(), 700.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_arrives_once() {
        let mut animator = OffsetAnimator::new(smooth(100));
        let t0 = Instant::now();
        assert!(animator.animate_to(350.0, t0));
        assert!(animator.is_animating());

        match animator.update(t0 + Duration::from_millis(50)) {
            Frame::Moving(offset) => assert!(offset > 0.0 && offset < 350.0),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            animator.update(t0 + Duration::from_millis(100)),
            Frame::Arrived(350.0)
        );
        assert_eq!(animator.update(t0 + Duration::from_millis(200)), Frame::Idle);
    }

    #[test]
    fn test_retarget_starts_from_visible_offset() {
        let mut animator = OffsetAnimator::new(smooth(100));
        let t0 = Instant::now();
        animator.animate_to(350.0, t0);
        animator.update(t0 + Duration::from_millis(50));
        let visible = animator.current();

        let t1 = t0 + Duration::from_millis(50);
        animator.animate_to(0.0, t1);
        match animator.update(t1) {
            Frame::Moving(offset) => assert!((offset - visible).abs() < 0.001),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_jump_cancels() {
        let mut animator = OffsetAnimator::new(smooth(100));
        animator.animate_to(350.0, Instant::now());
        animator.jump_to(20.0);
        assert!(!animator.is_animating());
        assert_eq!(animator.current(), 20.0);
    }
}
