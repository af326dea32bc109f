//! Frame rate measurement
//!
//! The frame limiter is off, so the frame rate is the main number to watch
//! when comparing the cost of the FXAA pass.

use std::time::{Duration, Instant};

/// Averages the frame rate over fixed reporting windows
pub struct FrameStats {
    window_start: Instant,
    frames: u32,
    fps: f32,
    report_interval: Duration,
}

impl FrameStats {
    pub fn new(report_interval: Duration) -> Self {
        Self::new_at(Instant::now(), report_interval)
    }

    pub fn new_at(now: Instant, report_interval: Duration) -> Self {
        Self {
            window_start: now,
            frames: 0,
            fps: 0.0,
            report_interval,
        }
    }

    /// Count a frame; returns true when a new average is available
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.report_interval {
            return false;
        }

        self.fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        true
    }

    /// Average frames per second over the last completed window
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_after_interval() {
        let t0 = Instant::now();
        let mut stats = FrameStats::new_at(t0, Duration::from_millis(500));

        for i in 1..30 {
            assert!(!stats.tick_at(t0 + Duration::from_millis(i * 10)));
        }
        // 30th frame lands exactly on the interval boundary
        assert!(stats.tick_at(t0 + Duration::from_millis(500)));
        assert!((stats.fps() - 60.0).abs() < 1e-3);
    }

    #[test]
    fn test_window_restarts() {
        let t0 = Instant::now();
        let mut stats = FrameStats::new_at(t0, Duration::from_secs(1));
        assert!(stats.tick_at(t0 + Duration::from_secs(1)));
        assert!(!stats.tick_at(t0 + Duration::from_millis(1500)));
        assert!(stats.tick_at(t0 + Duration::from_secs(2)));
        assert!((stats.fps() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_default_starts_at_zero() {
        let stats = FrameStats::default();
        assert_eq!(stats.fps(), 0.0);
    }
}
