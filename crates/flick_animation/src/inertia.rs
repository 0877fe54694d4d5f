//! Velocity sampling and inertial momentum
//!
//! A host panel feeds drag deltas into a [`VelocityTracker`] while the user's
//! finger is down, then hands the resolved release velocity to [`Inertia`]
//! and lets it coast the content with exponential friction. This is the
//! momentum subsystem consumed alongside the swipe controller; the controller
//! itself never owns it.

use smallvec::SmallVec;
use tracing::trace;

/// Samples older than this no longer influence the release velocity.
const SAMPLE_WINDOW_SECS: f64 = 0.1;
/// Exponential friction applied per second of coasting.
const FRICTION_DECAY: f32 = 5.0;
/// Coasting stops once speed falls below this (units/second).
const MIN_VELOCITY: f32 = 10.0;
/// Release velocities are capped at this magnitude (units/second).
const MAX_VELOCITY: f32 = 6000.0;

fn clamp_velocity(velocity: f32) -> f32 {
    if !velocity.is_finite() {
        return 0.0;
    }
    velocity.clamp(-MAX_VELOCITY, MAX_VELOCITY)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct VelocitySample {
    velocity: f32,
    timestamp: f64,
}

/// Sliding-window drag-velocity estimator.
///
/// Each sample records the instantaneous velocity between two consecutive
/// drag deltas; [`VelocityTracker::velocity`] averages the surviving window,
/// weighting newer samples more heavily so a pause before release reads as a
/// gentle flick rather than the fastest moment of the gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VelocityTracker {
    samples: SmallVec<[VelocitySample; 16]>,
    last_sample_time: Option<f64>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a drag delta observed at `timestamp_secs`.
    ///
    /// Non-monotonic timestamps are ignored; the first call only anchors the
    /// window.
    pub fn add_sample(&mut self, delta: f32, timestamp_secs: f64) {
        let Some(last) = self.last_sample_time else {
            self.last_sample_time = Some(timestamp_secs);
            return;
        };
        let dt = (timestamp_secs - last) as f32;
        if dt <= 0.0 || !delta.is_finite() {
            return;
        }
        self.last_sample_time = Some(timestamp_secs);
        self.samples.push(VelocitySample {
            velocity: clamp_velocity(delta / dt),
            timestamp: timestamp_secs,
        });
        self.prune(timestamp_secs);
    }

    /// Age-weighted average velocity of the samples still inside the window.
    ///
    /// Returns 0.0 when no sample survives.
    pub fn velocity(&self, now_secs: f64) -> f32 {
        let mut weighted_sum = 0.0_f32;
        let mut total_weight = 0.0_f32;
        for sample in &self.samples {
            let age = (now_secs - sample.timestamp).clamp(0.0, SAMPLE_WINDOW_SECS) as f32;
            let weight = SAMPLE_WINDOW_SECS as f32 - age;
            if weight > 0.0 {
                weighted_sum += sample.velocity * weight;
                total_weight += weight;
            }
        }
        if total_weight <= f32::EPSILON {
            return 0.0;
        }
        clamp_velocity(weighted_sum / total_weight)
    }

    /// Drop all samples, e.g. when a new touch interrupts coasting.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_sample_time = None;
    }

    fn prune(&mut self, now_secs: f64) {
        self.samples
            .retain(|sample| now_secs - sample.timestamp <= SAMPLE_WINDOW_SECS);
    }
}

/// Exponential-friction coasting after a release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Inertia {
    velocity: f32,
}

impl Inertia {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin coasting at `velocity` (units/second), capped at the maximum.
    pub fn start(&mut self, velocity: f32) {
        self.velocity = clamp_velocity(velocity);
        if self.velocity.abs() < MIN_VELOCITY {
            self.velocity = 0.0;
        }
    }

    /// Advance one frame; returns the distance to move this frame.
    ///
    /// Applies friction after the move so the first tick carries the full
    /// release velocity. Self-terminates below the minimum-velocity cutoff.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if !self.is_active() || dt <= 0.0 {
            return 0.0;
        }
        let distance = self.velocity * dt;
        self.velocity *= (-FRICTION_DECAY * dt).exp();
        if self.velocity.abs() < MIN_VELOCITY {
            trace!("inertia settled");
            self.velocity = 0.0;
        }
        distance
    }

    pub fn is_active(&self) -> bool {
        self.velocity != 0.0
    }

    /// Cancel coasting immediately.
    pub fn stop(&mut self) {
        self.velocity = 0.0;
    }
}
