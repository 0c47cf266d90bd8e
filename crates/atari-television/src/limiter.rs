//! Frame-rate limiter.
//!
//! Checked once per scanline rather than once per frame so that a frame is
//! spread evenly across its time slice; sound in particular suffers if the
//! emulation races through a frame and then sleeps.

use std::time::{Duration, Instant};

/// How often the measured frame rate is updated.
const MEASUREMENT_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Limiter {
    limit: bool,
    requested: f32,
    scanlines_per_frame: i32,
    period: Duration,
    deadline: Option<Instant>,

    actual: f32,
    measure_start: Instant,
    measure_scanlines: u32,
}

impl Limiter {
    #[must_use]
    pub fn new(fps: f32, scanlines_per_frame: i32) -> Self {
        let mut limiter = Self {
            limit: true,
            requested: fps,
            scanlines_per_frame,
            period: Duration::ZERO,
            deadline: None,
            actual: 0.0,
            measure_start: Instant::now(),
            measure_scanlines: 0,
        };
        limiter.set_rate(fps, scanlines_per_frame);
        limiter
    }

    /// Change the target rate. Returns false, leaving the limiter as it
    /// was, for a rate that isn't a positive finite number or whose frame
    /// period can't be represented.
    pub fn set_rate(&mut self, fps: f32, scanlines_per_frame: i32) -> bool {
        if !fps.is_finite() || fps <= 0.0 || scanlines_per_frame <= 0 {
            return false;
        }
        let Ok(period) =
            Duration::try_from_secs_f64(1.0 / (f64::from(fps) * f64::from(scanlines_per_frame)))
        else {
            return false;
        };
        // check_rate compares against a whole frame's worth of periods
        if period.checked_mul(scanlines_per_frame as u32).is_none() {
            return false;
        }
        self.requested = fps;
        self.scanlines_per_frame = scanlines_per_frame;
        self.period = period;
        self.deadline = None;
        true
    }

    /// Switch limiting on or off. Measurement continues either way.
    pub fn set_limit(&mut self, limit: bool) {
        self.limit = limit;
        self.deadline = None;
    }

    #[must_use]
    pub fn is_limited(&self) -> bool {
        self.limit
    }

    #[must_use]
    pub fn requested_fps(&self) -> f32 {
        self.requested
    }

    /// Frame rate measured over the last second of emulation.
    #[must_use]
    pub fn actual_fps(&self) -> f32 {
        self.actual
    }

    /// Called at every new scanline. Sleeps if emulation is ahead.
    pub fn check_rate(&mut self) {
        let now = Instant::now();
        self.measure(now);

        if !self.limit {
            return;
        }

        let deadline = self.deadline.unwrap_or(now) + self.period;
        if deadline > now {
            spin_sleep::sleep(deadline - now);
            self.deadline = Some(deadline);
        } else if now - deadline > self.period * self.scanlines_per_frame as u32 {
            // More than a frame behind: don't try to catch up
            self.deadline = Some(now);
        } else {
            self.deadline = Some(deadline);
        }
    }

    fn measure(&mut self, now: Instant) {
        self.measure_scanlines += 1;
        let elapsed = now.duration_since(self.measure_start);
        if elapsed >= MEASUREMENT_PERIOD {
            let frames = self.measure_scanlines as f32 / self.scanlines_per_frame as f32;
            self.actual = frames / elapsed.as_secs_f32();
            self.measure_start = now;
            self.measure_scanlines = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_positive_rate_is_ignored() {
        let mut limiter = Limiter::new(60.0, 262);
        limiter.set_rate(0.0, 262);
        assert!((limiter.requested_fps() - 60.0).abs() < f32::EPSILON);
        limiter.set_rate(-5.0, 262);
        assert!((limiter.requested_fps() - 60.0).abs() < f32::EPSILON);
    }

    #[test]
    fn unrepresentable_rates_are_rejected() {
        let mut limiter = Limiter::new(60.0, 262);
        for fps in [f32::NAN, f32::INFINITY, 1e-30] {
            assert!(!limiter.set_rate(fps, 262), "{fps}");
            assert!((limiter.requested_fps() - 60.0).abs() < f32::EPSILON);
        }
        assert!(limiter.set_rate(50.0, 312));
        assert!((limiter.requested_fps() - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn limited_scanlines_take_their_time() {
        // 1000 fps with 10 scanlines a frame: 100µs per scanline
        let mut limiter = Limiter::new(1000.0, 10);
        let start = Instant::now();
        for _ in 0..50 {
            limiter.check_rate();
        }
        assert!(start.elapsed() >= Duration::from_millis(4));
    }

    #[test]
    fn unlimited_scanlines_do_not_sleep() {
        // 1 fps would take a second per frame if limited
        let mut limiter = Limiter::new(1.0, 10);
        limiter.set_limit(false);
        let start = Instant::now();
        for _ in 0..100 {
            limiter.check_rate();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(!limiter.is_limited());
    }
}
