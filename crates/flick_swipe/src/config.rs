//! Swipe tuning configuration
//!
//! One explicit value passed to the controller at construction, replacing
//! process-wide tuning statics. Setters clamp rejected values to the nearest
//! valid one and log a warning; hosts that prefer hard failures can run
//! [`SwipeConfig::validate`] before handing the config over.

use flick_animation::Easing;
use tracing::warn;

use crate::error::{ConfigError, Result};

// ============================================================================
// Bounds
// ============================================================================

/// Smallest accepted elastic looseness.
const MIN_LOOSENESS: f32 = 1.0e-3;
/// Smallest accepted page-change threshold fraction.
const MIN_PAGE_CHANGE_THRESHOLD: f32 = 1.0e-3;
/// Smallest accepted easing speed.
const MIN_SPEED: f32 = 1.0e-3;
/// Smallest accepted blend exponent.
const MIN_BLEND_EXP: f32 = 1.0e-3;
/// Smallest accepted spring-back tuning value.
const MIN_SPRING_TUNING: f32 = 1.0e-3;

fn clamped(value: f32, min: f32, fallback: f32, name: &str) -> f32 {
    if !value.is_finite() {
        warn!(value, name, "non-finite swipe tuning value, keeping {fallback}");
        return fallback;
    }
    if value < min {
        warn!(value, min, name, "swipe tuning value below minimum, clamping");
        return min;
    }
    value
}

// ============================================================================
// Configuration
// ============================================================================

/// Tuning for a [`SwipeController`](crate::SwipeController).
///
/// Defaults give a circular in/out glide between pages, a 15%-of-viewport
/// commit threshold, and a fairly tight elastic band at the content edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwipeConfig {
    easing: Easing,
    blend_exp: f32,
    speed: f32,
    page_change_threshold: f32,
    looseness: f32,
    overshoot_max: f32,
    bounce_rate: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            easing: Easing::CircularInOut,
            blend_exp: 2.0,
            speed: 1.0,
            page_change_threshold: 0.15,
            looseness: 200.0,
            overshoot_max: 100.0,
            bounce_rate: 1500.0,
        }
    }
}

impl SwipeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A looser elastic band and lazier commit threshold (full-screen pagers).
    pub fn relaxed() -> Self {
        Self {
            page_change_threshold: 0.25,
            looseness: 400.0,
            ..Default::default()
        }
    }

    /// A snappy feel: fast glide, stiff elastic band.
    pub fn snappy() -> Self {
        Self {
            speed: 2.5,
            looseness: 80.0,
            bounce_rate: 2500.0,
            ..Default::default()
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Interpolation curve for the page transition.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Shape parameter for exponent-shaped easing curves.
    pub fn blend_exp(&self) -> f32 {
        self.blend_exp
    }

    pub fn set_blend_exp(&mut self, blend_exp: f32) {
        self.blend_exp = clamped(blend_exp, MIN_BLEND_EXP, self.blend_exp, "blend_exp");
    }

    /// Multiplier on per-frame transition progress; a speed of 1 finishes a
    /// page glide in one second of simulated time.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = clamped(speed, MIN_SPEED, self.speed, "speed");
    }

    /// Fraction of the viewport a drag must cover to commit a page change.
    pub fn page_change_threshold(&self) -> f32 {
        self.page_change_threshold
    }

    pub fn set_page_change_threshold(&mut self, fraction: f32) {
        self.page_change_threshold = clamped(
            fraction,
            MIN_PAGE_CHANGE_THRESHOLD,
            self.page_change_threshold,
            "page_change_threshold",
        )
        .min(1.0);
    }

    /// Scale of the logarithmic elastic resistance; larger is looser.
    pub fn looseness(&self) -> f32 {
        self.looseness
    }

    pub fn set_looseness(&mut self, looseness: f32) {
        self.looseness = clamped(looseness, MIN_LOOSENESS, self.looseness, "looseness");
    }

    /// Overshoot distance above which spring-back speeds up proportionally.
    pub fn overshoot_max(&self) -> f32 {
        self.overshoot_max
    }

    pub fn set_overshoot_max(&mut self, overshoot_max: f32) {
        self.overshoot_max = clamped(
            overshoot_max,
            MIN_SPRING_TUNING,
            self.overshoot_max,
            "overshoot_max",
        );
    }

    /// Base spring-back velocity in screen units per second.
    pub fn bounce_rate(&self) -> f32 {
        self.bounce_rate
    }

    pub fn set_bounce_rate(&mut self, bounce_rate: f32) {
        self.bounce_rate = clamped(
            bounce_rate,
            MIN_SPRING_TUNING,
            self.bounce_rate,
            "bounce_rate",
        );
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check every tuning value, returning the first violation.
    ///
    /// The setters already clamp, so a config mutated only through them always
    /// passes; this is for configs built elsewhere (e.g. deserialized).
    pub fn validate(&self) -> Result<()> {
        if !self.looseness.is_finite() || self.looseness < MIN_LOOSENESS {
            return Err(ConfigError::Looseness(self.looseness));
        }
        if !self.page_change_threshold.is_finite()
            || self.page_change_threshold < MIN_PAGE_CHANGE_THRESHOLD
            || self.page_change_threshold > 1.0
        {
            return Err(ConfigError::PageChangeThreshold(self.page_change_threshold));
        }
        if !self.speed.is_finite() || self.speed < MIN_SPEED {
            return Err(ConfigError::Speed(self.speed));
        }
        if !self.blend_exp.is_finite() || self.blend_exp < MIN_BLEND_EXP {
            return Err(ConfigError::BlendExp(self.blend_exp));
        }
        if !self.overshoot_max.is_finite() || self.overshoot_max < MIN_SPRING_TUNING {
            return Err(ConfigError::OvershootMax(self.overshoot_max));
        }
        if !self.bounce_rate.is_finite() || self.bounce_rate < MIN_SPRING_TUNING {
            return Err(ConfigError::BounceRate(self.bounce_rate));
        }
        Ok(())
    }
}
