//! Swipe-axis geometry
//!
//! The host panel hands the controller a fresh [`PanelGeometry`] every frame.
//! Drag deltas arrive in local (unscaled) units; dividing by `scale` converts
//! them to screen units, mirroring how the rendered offset is scaled back up.

use tracing::warn;

/// Axis along which the panel swipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Per-frame viewport geometry of the host panel.
///
/// `scale` is the local-to-screen draw scale. A zero or non-finite scale
/// would poison every conversion downstream, so construction sanitizes it
/// to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelGeometry {
    local_width: f32,
    local_height: f32,
    scale: f32,
}

impl PanelGeometry {
    /// Create a geometry snapshot, sanitizing degenerate scale values.
    pub fn new(local_width: f32, local_height: f32, scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            warn!(scale, "non-positive or non-finite geometry scale, using 1.0");
            1.0
        };
        Self {
            local_width: if local_width.is_finite() { local_width.max(0.0) } else { 0.0 },
            local_height: if local_height.is_finite() { local_height.max(0.0) } else { 0.0 },
            scale,
        }
    }

    /// Viewport width in local units.
    pub fn local_width(&self) -> f32 {
        self.local_width
    }

    /// Viewport height in local units.
    pub fn local_height(&self) -> f32 {
        self.local_height
    }

    /// Local-to-screen draw scale, always finite and positive.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Viewport extent along the given swipe axis.
    pub fn extent_along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.local_width,
            Orientation::Vertical => self.local_height,
        }
    }
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}
