use std::time::{Duration, Instant};

/// Progress of an animation started at `start`, clamped to [0, 1]
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(700.0, 350.0, 1.0) - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
        assert!((progress(start, d, start + Duration::from_millis(100)) - 0.5).abs() < 0.001);
        assert!((progress(start, d, start + Duration::from_secs(1)) - 1.0).abs() < 0.001);
        assert!(!is_complete(start, d, start + Duration::from_millis(199)));
        assert!(is_complete(start, d, start + d));
    }
}
