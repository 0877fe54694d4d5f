//! Swipe configuration error types

use thiserror::Error;

/// Rejected tuning values for the swipe controller.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Elastic looseness must be positive and finite
    #[error("looseness must be positive and finite, got {0}")]
    Looseness(f32),

    /// Page-change threshold must be within (0, 1]
    #[error("page-change threshold must be within (0, 1], got {0}")]
    PageChangeThreshold(f32),

    /// Easing speed must be positive and finite
    #[error("speed must be positive and finite, got {0}")]
    Speed(f32),

    /// Blend exponent must be positive and finite
    #[error("blend exponent must be positive and finite, got {0}")]
    BlendExp(f32),

    /// Spring-back overshoot ceiling must be positive and finite
    #[error("overshoot max must be positive and finite, got {0}")]
    OvershootMax(f32),

    /// Spring-back bounce rate must be positive and finite
    #[error("bounce rate must be positive and finite, got {0}")]
    BounceRate(f32),
}

/// Result type for swipe configuration validation.
pub type Result<T> = std::result::Result<T, ConfigError>;
