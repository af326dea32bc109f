//! Animation system
//!
//! Manages the animation clock and the camera orbit:
//! - Pausable clock with an accumulated offset
//! - Orbit position from animation time
//! - Camera aspect and field of view

use std::time::{Duration, Instant};

use fxaa_math::Vec3;
use fxaa_render::PerspectiveCamera;

use crate::config::CameraConfig;

/// A stopwatch that can be stopped and restarted
///
/// Restarting resets the elapsed time to zero, so callers carry the time
/// accumulated before the stop in an offset (see [`AnimationClock`]).
#[derive(Debug, Clone, Copy)]
struct Timer {
    started: Instant,
    stopped: Option<Instant>,
}

impl Timer {
    fn started_at(now: Instant) -> Self {
        Self {
            started: now,
            stopped: None,
        }
    }

    fn elapsed_at(&self, now: Instant) -> Duration {
        self.stopped.unwrap_or(now).saturating_duration_since(self.started)
    }

    fn is_stopped(&self) -> bool {
        self.stopped.is_some()
    }
}

/// Animation time that can be paused and resumed without jumping
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    timer: Timer,
    /// Seconds accumulated before the last restart
    offset: f64,
}

impl AnimationClock {
    /// Start a clock at time zero
    pub fn start() -> Self {
        Self::start_at(Instant::now())
    }

    pub fn start_at(now: Instant) -> Self {
        Self {
            timer: Timer::started_at(now),
            offset: 0.0,
        }
    }

    /// Animation time in seconds
    pub fn seconds(&self) -> f64 {
        self.seconds_at(Instant::now())
    }

    pub fn seconds_at(&self, now: Instant) -> f64 {
        self.timer.elapsed_at(now).as_secs_f64() + self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.timer.is_stopped()
    }

    /// Pause if running, resume if paused; returns true when now paused
    pub fn toggle(&mut self) -> bool {
        self.toggle_at(Instant::now())
    }

    pub fn toggle_at(&mut self, now: Instant) -> bool {
        if self.timer.is_stopped() {
            self.offset += self.timer.elapsed_at(now).as_secs_f64();
            self.timer = Timer::started_at(now);
        } else {
            self.timer.stopped = Some(now);
        }
        self.is_paused()
    }
}

/// Camera position on the orbit at animation time `time`
///
/// The azimuth advances one radian per `period` seconds while the elevation
/// swings between roughly 9 and 81 degrees.
pub fn orbit_eye(time: f64, radius: f32, period: f32) -> Vec3 {
    let t = time / period.max(f32::EPSILON) as f64;

    let phi = t as f32;
    let theta = std::f32::consts::PI * (0.25 + 0.2 * (phi * 0.9).sin());

    Vec3::new(
        radius * phi.cos() * theta.cos(),
        radius * theta.sin(),
        radius * phi.sin() * theta.cos(),
    )
}

/// Drives the camera from the animation clock
pub struct AnimationSystem {
    clock: AnimationClock,
    camera: PerspectiveCamera,
    config: CameraConfig,
}

impl AnimationSystem {
    /// Create the system and start the clock
    pub fn new(config: CameraConfig) -> Self {
        let camera = PerspectiveCamera::new(config.fov, 1.0, config.near, config.far);
        Self {
            clock: AnimationClock::start(),
            camera,
            config,
        }
    }

    /// Sample the clock and move the camera
    ///
    /// Returns the animation time in seconds.
    pub fn update(&mut self, aspect_ratio: f32) -> f64 {
        self.update_at(Instant::now(), aspect_ratio)
    }

    pub fn update_at(&mut self, now: Instant, aspect_ratio: f32) -> f64 {
        let time = self.clock.seconds_at(now);

        let eye = orbit_eye(time, self.config.orbit_radius, self.config.orbit_period);
        self.camera.look_at(eye, Vec3::from_array(self.config.target));
        self.camera.set_aspect_ratio(aspect_ratio);
        self.camera.set_fov(self.config.fov);

        time
    }

    /// Start/stop the animation; returns true when now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle()
    }

    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_clock_runs() {
        let t0 = Instant::now();
        let clock = AnimationClock::start_at(t0);
        assert!(approx(clock.seconds_at(t0), 0.0));
        assert!(approx(clock.seconds_at(t0 + secs(2.5)), 2.5));
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_pause_freezes_time() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::start_at(t0);

        assert!(clock.toggle_at(t0 + secs(3.0)));
        assert!(clock.is_paused());
        assert!(approx(clock.seconds_at(t0 + secs(3.0)), 3.0));
        assert!(approx(clock.seconds_at(t0 + secs(10.0)), 3.0));
    }

    #[test]
    fn test_resume_continues_without_jump() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::start_at(t0);

        clock.toggle_at(t0 + secs(3.0)); // pause at 3s
        assert!(!clock.toggle_at(t0 + secs(10.0))); // resume 7s later

        assert!(approx(clock.seconds_at(t0 + secs(10.0)), 3.0));
        assert!(approx(clock.seconds_at(t0 + secs(11.5)), 4.5));
    }

    #[test]
    fn test_repeated_pauses_accumulate() {
        let t0 = Instant::now();
        let mut clock = AnimationClock::start_at(t0);

        clock.toggle_at(t0 + secs(1.0));
        clock.toggle_at(t0 + secs(5.0));
        clock.toggle_at(t0 + secs(7.0)); // 1 + 2 = 3s of animation
        clock.toggle_at(t0 + secs(20.0));

        assert!(approx(clock.seconds_at(t0 + secs(21.0)), 4.0));
    }

    #[test]
    fn test_orbit_start_position() {
        // t = 0: phi = 0, theta = PI / 4
        let eye = orbit_eye(0.0, 150.0, 10.0);
        let c = 150.0 * std::f32::consts::FRAC_PI_4.cos();
        assert!((eye.x - c).abs() < 1e-3);
        assert!((eye.y - 150.0 * std::f32::consts::FRAC_PI_4.sin()).abs() < 1e-3);
        assert!(eye.z.abs() < 1e-3);
    }

    #[test]
    fn test_orbit_stays_on_sphere() {
        for i in 0..100 {
            let eye = orbit_eye(i as f64 * 1.7, 150.0, 10.0);
            assert!((eye.length() - 150.0).abs() < 1e-2);
            // Elevation stays above the horizon
            assert!(eye.y > 0.0);
        }
    }

    #[test]
    fn test_orbit_period_scales_time() {
        let a = orbit_eye(5.0, 150.0, 10.0);
        let b = orbit_eye(10.0, 150.0, 20.0);
        assert!((a - b).length() < 1e-4);
    }

    #[test]
    fn test_system_updates_camera() {
        let mut system = AnimationSystem::new(CameraConfig::default());
        let now = Instant::now();
        system.update_at(now, 2.0);

        assert_eq!(system.camera().aspect_ratio(), 2.0);
        assert_eq!(system.camera().fov(), 40.0);
        assert_eq!(system.camera().target(), Vec3::new(1.0, 50.0, 0.0));
        assert!((system.camera().eye().length() - 150.0).abs() < 1e-2);
    }

    #[test]
    fn test_system_pause_toggle() {
        let mut system = AnimationSystem::new(CameraConfig::default());
        assert!(system.toggle_pause());
        assert!(system.is_paused());
        assert!(!system.toggle_pause());
    }
}
