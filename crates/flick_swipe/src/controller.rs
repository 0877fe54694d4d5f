//! Swipe controller with page-snapping physics
//!
//! Converts raw drag deltas and per-frame time into a single eased,
//! elastically-resisted, page-quantized content offset.
//!
//! # Model
//!
//! The controller runs a two-regime state machine:
//!
//! ```text
//!                commit (threshold crossed on release,
//!                        or programmatic page set with animation)
//!    ToOrigin ─────────────────────────────────────────► ToTarget
//!       ▲                                                   │
//!       │ alpha reaches 1 (glide complete)                  │
//!       │ or user grabs mid-glide                           │
//!       └───────────────────────────────────────────────────┘
//! ```
//!
//! - **ToOrigin**: the offset is anchored at the current page and live drag
//!   is damped through a logarithmic elastic band; an uncommitted release
//!   springs the offset back to the page anchor
//! - **ToTarget**: the offset glides toward the committed page along a
//!   configurable easing curve over normalized time `alpha`
//!
//! # Frame protocol
//!
//! The host calls [`SwipeController::swipe_by`] for every drag delta,
//! [`SwipeController::on_release_interaction`] when the pointer lifts, then
//! [`SwipeController::update`] exactly once per frame and reads
//! [`SwipeController::effective_offset`] to place content. All of it on one
//! thread; no operation blocks or panics.

use flick_animation::Easing;
use flick_core::{Orientation, PagedPanel, PanelGeometry};
use tracing::{debug, trace};

use crate::config::SwipeConfig;

/// Spring-back disarms once the offset is within this of the page anchor.
const SPRING_BACK_EPSILON: f32 = 0.01;
/// Reported by [`SwipeController::distance_from_end`] before any layout pass.
const DISTANCE_UNKNOWN: f32 = 1.0e9;

/// Animation regime of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeMode {
    /// Anchored at the current page; drag is elastically resisted and
    /// uncommitted releases spring back.
    #[default]
    ToOrigin,
    /// Gliding toward a newly committed page along the easing curve.
    ToTarget,
}

impl SwipeMode {
    /// Returns true while a committed page glide is in flight.
    pub fn is_easing(&self) -> bool {
        matches!(self, SwipeMode::ToTarget)
    }
}

/// A pending programmatic page change, consumed by the next update.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PageRequest {
    page: usize,
    animate: bool,
    emit_event: bool,
}

/// Swipe state machine for one panel.
///
/// Owns all swipe state; reads the host's child count and geometry by
/// reference each update and never mutates the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeController {
    config: SwipeConfig,
    orientation: Orientation,

    mode: SwipeMode,
    current_page: usize,
    last_child_index: Option<usize>,

    /// Raw signed drag since the last processed release, in local units.
    /// Input to the elastic-resistance model.
    accumulated_offset: f32,
    /// The animated offset actually reported, in screen units.
    sticky_offset: f32,
    /// Value of `sticky_offset` when the current glide started.
    sticky_offset_start: f32,
    /// Page-aligned offset the controller is animating toward.
    target_offset: f32,
    /// Offset of the last page; upper clamp for every reported value.
    max_offset: f32,
    /// Normalized glide progress, advances only in ToTarget.
    alpha: f32,

    spring_back_in_progress: bool,
    user_drag_active: bool,
    user_released_this_frame: bool,
    pending_page: Option<PageRequest>,

    cached_geometry: Option<PanelGeometry>,
    /// Prefix sums of page extents from the last update's layout pass;
    /// `page_offsets[i]` is the anchor offset of page `i`.
    page_offsets: Vec<f32>,
}

impl SwipeController {
    pub fn new(orientation: Orientation) -> Self {
        Self::with_config(SwipeConfig::default(), orientation)
    }

    pub fn with_config(config: SwipeConfig, orientation: Orientation) -> Self {
        Self {
            config,
            orientation,
            mode: SwipeMode::ToOrigin,
            current_page: 0,
            last_child_index: None,
            accumulated_offset: 0.0,
            sticky_offset: 0.0,
            sticky_offset_start: 0.0,
            target_offset: 0.0,
            max_offset: 0.0,
            alpha: 0.0,
            spring_back_in_progress: false,
            user_drag_active: false,
            user_released_this_frame: false,
            pending_page: None,
            cached_geometry: None,
            page_offsets: Vec::new(),
        }
    }

    // =========================================================================
    // Drag input
    // =========================================================================

    /// Apply a drag delta in local units.
    ///
    /// Returns the signed amount actually consumed
    /// (`old sticky offset - new sticky offset`); callers can compare it
    /// against the requested delta to detect saturation. No clamping happens
    /// here - that is deferred to [`SwipeController::update`].
    ///
    /// `is_user_action` distinguishes live dragging from programmatic
    /// scrolling: a live drag cancels any in-flight spring-back or glide and
    /// re-anchors at the current page.
    pub fn swipe_by(
        &mut self,
        geometry: &PanelGeometry,
        local_delta: f32,
        is_user_action: bool,
    ) -> f32 {
        if !local_delta.is_finite() {
            return 0.0;
        }
        self.user_drag_active = true;

        let screen_delta = local_delta / geometry.scale();
        let value_before = self.sticky_offset;
        self.sticky_offset += screen_delta;
        self.accumulated_offset += local_delta;

        if is_user_action {
            self.spring_back_in_progress = false;
            self.mode = SwipeMode::ToOrigin;
            self.alpha = 0.0;
            self.target_offset = self.page_offset_for(geometry, self.current_page);
        }

        value_before - self.sticky_offset
    }

    /// Mark the end of the user's drag; processed by the next update.
    pub fn on_release_interaction(&mut self) {
        self.user_released_this_frame = true;
    }

    /// Request a page change, consumed by the next update.
    ///
    /// The stored index is clamped to the child range when applied. With
    /// `animate` the offset glides to the page; without it the offset snaps
    /// immediately. `emit_event` controls whether that update reports the
    /// change as committed.
    pub fn set_current_page(&mut self, page: usize, emit_event: bool, animate: bool) {
        self.pending_page = Some(PageRequest {
            page,
            animate,
            emit_event,
        });
    }

    // =========================================================================
    // Per-frame read
    // =========================================================================

    /// The offset the panel should apply this frame. Pure read.
    ///
    /// In ToOrigin the raw accumulated drag is softened through a logarithmic
    /// elastic band. Straight `ln` is too tight, so the curve is scaled by the
    /// looseness factor; that shifts its origin, so the origin shift is
    /// subtracted again to keep resistance continuous through zero.
    pub fn effective_offset(&self, geometry: &PanelGeometry) -> f32 {
        let effective = match self.mode {
            SwipeMode::ToOrigin => {
                let looseness = self.config.looseness();
                let origin_shift = looseness * looseness.ln();
                let shift = looseness * (self.accumulated_offset.abs() + looseness).ln();
                let elastic_magnitude = shift - origin_shift;

                let overscroll = if self.accumulated_offset < 0.0 {
                    -elastic_magnitude
                } else {
                    elastic_magnitude
                };
                overscroll * geometry.scale() + self.target_offset
            }
            SwipeMode::ToTarget => self.sticky_offset,
        };
        effective.clamp(0.0, self.max_offset.max(0.0))
    }

    // =========================================================================
    // Per-frame update
    // =========================================================================

    /// Advance the state machine by one frame.
    ///
    /// Must be called exactly once per rendered frame with the panel's
    /// current geometry and the elapsed time. Returns true when a page
    /// change was committed this frame.
    pub fn update(&mut self, panel: &dyn PagedPanel, geometry: &PanelGeometry, dt: f32) -> bool {
        let child_count = panel.child_count();
        if child_count == 0 {
            return false;
        }
        let last_child_index = child_count - 1;
        self.last_child_index = Some(last_child_index);
        self.cached_geometry = Some(*geometry);
        self.refresh_page_offsets(panel, child_count);

        let mut committed = false;

        // Commit evaluation: only on a release edge or a programmatic request.
        if self.user_released_this_frame || self.pending_page.is_some() {
            let viewport = geometry.extent_along(self.orientation);

            if let Some(request) = self.pending_page.take() {
                // Seed from the currently rendered offset so the glide starts
                // where the user sees the content, then re-anchor.
                let seed = self.effective_offset(geometry);
                self.current_page = request.page.min(last_child_index);
                self.target_offset = self.page_offset_for(geometry, self.current_page);
                if request.animate {
                    self.mode = SwipeMode::ToTarget;
                    self.sticky_offset = seed;
                    self.sticky_offset_start = seed;
                    self.alpha = 0.0;
                } else {
                    self.mode = SwipeMode::ToOrigin;
                    self.alpha = 0.0;
                    self.sticky_offset = self.target_offset;
                }
                if request.emit_event {
                    committed = true;
                }
                debug!(
                    page = self.current_page,
                    animate = request.animate,
                    "programmatic page change"
                );
            } else if viewport > 0.0
                && self.accumulated_offset.abs()
                    > viewport * self.config.page_change_threshold()
            {
                let seed = self.effective_offset(geometry);
                self.mode = SwipeMode::ToTarget;
                self.current_page = if self.accumulated_offset > 0.0 {
                    (self.current_page + 1).min(last_child_index)
                } else {
                    self.current_page.saturating_sub(1)
                };
                self.sticky_offset = seed;
                self.sticky_offset_start = seed;
                self.alpha = 0.0;
                self.target_offset = self.page_offset_for(geometry, self.current_page);
                committed = true;
                debug!(page = self.current_page, "swipe committed page change");
            }
        }

        match self.mode {
            SwipeMode::ToOrigin => {
                if self.user_released_this_frame {
                    self.spring_back_in_progress = true;
                }
                if self.spring_back_in_progress {
                    let remaining = self.target_offset - self.sticky_offset;
                    if remaining.abs() < SPRING_BACK_EPSILON {
                        self.spring_back_in_progress = false;
                    } else {
                        // Velocity grows with how far the drag overshot, with
                        // a floor so small overshoots still animate visibly.
                        let pull_force = self.accumulated_offset.abs() + 1.0;
                        let eased_delta = self.config.bounce_rate()
                            * dt
                            * (pull_force / self.config.overshoot_max()).max(1.0);
                        let step = eased_delta.min(remaining.abs());
                        self.sticky_offset += step.copysign(remaining);
                        trace!(
                            remaining,
                            step,
                            "spring-back toward page anchor"
                        );
                    }
                }
            }
            SwipeMode::ToTarget => {
                self.alpha += dt * self.config.speed();
                self.sticky_offset = self.config.easing().interpolate(
                    self.sticky_offset_start,
                    self.target_offset,
                    self.alpha,
                    self.config.blend_exp(),
                );
                if self.alpha >= 1.0 {
                    self.mode = SwipeMode::ToOrigin;
                    self.alpha = 0.0;
                    debug!(page = self.current_page, "page glide complete");
                }
            }
        }

        self.max_offset = self.page_offset_for(geometry, last_child_index);
        self.sticky_offset = self.sticky_offset.clamp(0.0, self.max_offset.max(0.0));

        if self.user_released_this_frame {
            self.user_released_this_frame = false;
            self.accumulated_offset = 0.0;
        }
        self.user_drag_active = false;

        committed
    }

    /// Zero the reported and accumulated offsets unconditionally and
    /// re-anchor at the origin, so the next read reports 0.
    pub fn reset(&mut self) {
        self.sticky_offset = 0.0;
        self.accumulated_offset = 0.0;
        self.target_offset = 0.0;
        self.alpha = 0.0;
        self.mode = SwipeMode::ToOrigin;
        self.spring_back_in_progress = false;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Distance from the reported offset to the last page's anchor.
    ///
    /// Returns a large sentinel before the first layout pass has been seen.
    pub fn distance_from_end(&self) -> f32 {
        match (self.cached_geometry, self.last_child_index) {
            (Some(geometry), Some(last)) => {
                self.page_offset_for(&geometry, last) - self.sticky_offset
            }
            _ => DISTANCE_UNKNOWN,
        }
    }

    /// Committed page index.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Current animation regime.
    pub fn mode(&self) -> SwipeMode {
        self.mode
    }

    /// True between a drag delta and the update that consumes it.
    pub fn is_user_dragging(&self) -> bool {
        self.user_drag_active
    }

    /// True while any animation (glide or spring-back) still moves content.
    pub fn is_animating(&self) -> bool {
        self.mode.is_easing() || self.spring_back_in_progress
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SwipeConfig {
        &mut self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn easing(&self) -> Easing {
        self.config.easing()
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.config.set_easing(easing);
    }

    pub fn blend_exp(&self) -> f32 {
        self.config.blend_exp()
    }

    pub fn set_blend_exp(&mut self, blend_exp: f32) {
        self.config.set_blend_exp(blend_exp);
    }

    pub fn speed(&self) -> f32 {
        self.config.speed()
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.set_speed(speed);
    }

    pub fn page_change_threshold(&self) -> f32 {
        self.config.page_change_threshold()
    }

    pub fn set_page_change_threshold(&mut self, fraction: f32) {
        self.config.set_page_change_threshold(fraction);
    }

    pub fn looseness(&self) -> f32 {
        self.config.looseness()
    }

    pub fn set_looseness(&mut self, looseness: f32) {
        self.config.set_looseness(looseness);
    }

    // =========================================================================
    // Page geometry
    // =========================================================================

    /// Anchor offset of `index`: the prefix sum of preceding page extents
    /// from the last layout pass, or `viewport extent * index` before any
    /// pass has populated the cache.
    fn page_offset_for(&self, geometry: &PanelGeometry, index: usize) -> f32 {
        match self.page_offsets.get(index) {
            Some(&offset) => offset,
            None => geometry.extent_along(self.orientation) * index as f32,
        }
    }

    fn refresh_page_offsets(&mut self, panel: &dyn PagedPanel, child_count: usize) {
        self.page_offsets.clear();
        let mut offset = 0.0;
        for index in 0..child_count {
            self.page_offsets.push(offset);
            offset += panel.child_extent(index, self.orientation).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flick_core::UniformPanel;

    const DT: f32 = 1.0 / 60.0;

    fn geometry() -> PanelGeometry {
        PanelGeometry::new(1000.0, 600.0, 1.0)
    }

    fn panel() -> UniformPanel {
        UniformPanel::new(3, 1000.0)
    }

    /// Controller that has seen one layout pass, like a panel that rendered
    /// a frame before the user touches it.
    fn settled_controller() -> SwipeController {
        let mut controller = SwipeController::new(Orientation::Horizontal);
        controller.update(&panel(), &geometry(), DT);
        controller
    }

    fn drag_and_release(controller: &mut SwipeController, delta: f32) -> bool {
        controller.swipe_by(&geometry(), delta, true);
        controller.on_release_interaction();
        controller.update(&panel(), &geometry(), DT)
    }

    #[test]
    fn test_threshold_crossing_commits_next_page() {
        let mut controller = settled_controller();
        // 151 of a 1000 viewport with the default 0.15 threshold
        let committed = drag_and_release(&mut controller, 151.0);
        assert!(committed);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.mode(), SwipeMode::ToTarget);
    }

    #[test]
    fn test_below_threshold_springs_back() {
        let mut controller = settled_controller();
        let committed = drag_and_release(&mut controller, 149.0);
        assert!(!committed);
        assert_eq!(controller.current_page(), 0);
        assert_eq!(controller.mode(), SwipeMode::ToOrigin);
        assert!(controller.is_animating());

        // Spring-back converges onto the page anchor (offset 0)
        for _ in 0..600 {
            controller.update(&panel(), &geometry(), DT);
            if !controller.is_animating() {
                break;
            }
        }
        assert!(!controller.is_animating());
        assert!(controller.effective_offset(&geometry()).abs() < SPRING_BACK_EPSILON);
    }

    #[test]
    fn test_backward_drag_commits_previous_page() {
        let mut controller = settled_controller();
        controller.set_current_page(2, false, false);
        controller.update(&panel(), &geometry(), DT);
        assert_eq!(controller.current_page(), 2);

        let committed = drag_and_release(&mut controller, -200.0);
        assert!(committed);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_commit_clamps_at_last_page() {
        let mut controller = settled_controller();
        controller.set_current_page(2, false, false);
        controller.update(&panel(), &geometry(), DT);

        // Forward past the last page stays on the last page
        let committed = drag_and_release(&mut controller, 400.0);
        assert!(committed);
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn test_easing_terminates_on_target() {
        let mut controller = settled_controller();
        drag_and_release(&mut controller, 151.0);

        // speed 1.0 at 60fps: alpha reaches 1 within 60 further steps
        let mut steps = 0;
        while controller.mode().is_easing() {
            controller.update(&panel(), &geometry(), DT);
            steps += 1;
            assert!(steps <= 60, "glide did not terminate");
        }
        assert_eq!(controller.mode(), SwipeMode::ToOrigin);
        assert_eq!(controller.effective_offset(&geometry()), 1000.0);
    }

    #[test]
    fn test_spring_back_terminates_for_small_bounce_rate() {
        let mut controller = settled_controller();
        controller.config_mut().set_bounce_rate(10.0);
        drag_and_release(&mut controller, 149.0);

        let mut steps = 0;
        while controller.is_animating() {
            controller.update(&panel(), &geometry(), DT);
            steps += 1;
            assert!(steps < 100_000, "spring-back did not terminate");
        }
        assert!((controller.effective_offset(&geometry())).abs() < SPRING_BACK_EPSILON);
    }

    #[test]
    fn test_effective_offset_clamped_for_any_drag() {
        let mut controller = settled_controller();
        for delta in [-5000.0, -300.0, 40.0, 900.0, 12_000.0] {
            controller.swipe_by(&geometry(), delta, true);
            controller.update(&panel(), &geometry(), DT);
            let offset = controller.effective_offset(&geometry());
            assert!((0.0..=2000.0).contains(&offset), "offset {offset} escaped");
        }
    }

    #[test]
    fn test_elastic_resistance_continuous_at_zero() {
        let controller = settled_controller();
        // No accumulated drag: the elastic term is exactly zero
        assert_eq!(controller.effective_offset(&geometry()), 0.0);
    }

    #[test]
    fn test_elastic_resistance_softens_drag() {
        let mut controller = settled_controller();
        controller.swipe_by(&geometry(), 500.0, true);
        let offset = controller.effective_offset(&geometry());
        assert!(offset > 0.0);
        assert!(offset < 500.0, "resistance must soften the raw drag");
    }

    #[test]
    fn test_programmatic_hard_snap() {
        let mut controller = settled_controller();
        controller.set_current_page(2, true, false);
        let committed = controller.update(&panel(), &geometry(), DT);

        assert!(committed);
        assert_eq!(controller.current_page(), 2);
        assert_eq!(controller.mode(), SwipeMode::ToOrigin);
        assert_eq!(controller.effective_offset(&geometry()), 2000.0);
    }

    #[test]
    fn test_programmatic_animated_glide() {
        let mut controller = settled_controller();
        controller.set_current_page(1, false, true);
        let committed = controller.update(&panel(), &geometry(), DT);

        // emit_event false: the change is not reported as committed
        assert!(!committed);
        assert_eq!(controller.current_page(), 1);
        assert!(controller.mode().is_easing());

        for _ in 0..120 {
            controller.update(&panel(), &geometry(), DT);
        }
        assert_eq!(controller.effective_offset(&geometry()), 1000.0);
        assert_eq!(controller.mode(), SwipeMode::ToOrigin);
    }

    #[test]
    fn test_programmatic_page_clamped_to_children() {
        let mut controller = settled_controller();
        controller.set_current_page(99, true, false);
        controller.update(&panel(), &geometry(), DT);
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn test_user_grab_cancels_glide() {
        let mut controller = settled_controller();
        drag_and_release(&mut controller, 151.0);
        assert!(controller.mode().is_easing());

        controller.swipe_by(&geometry(), -5.0, true);
        assert_eq!(controller.mode(), SwipeMode::ToOrigin);
        assert!(!controller.is_animating());
    }

    #[test]
    fn test_swipe_by_reports_consumed_delta() {
        let mut controller = SwipeController::new(Orientation::Horizontal);
        let scaled = PanelGeometry::new(1000.0, 600.0, 2.0);
        let consumed = controller.swipe_by(&scaled, 100.0, true);
        assert_eq!(consumed, -50.0);
        assert_eq!(controller.swipe_by(&scaled, f32::NAN, true), 0.0);
    }

    #[test]
    fn test_reset_reports_zero() {
        let mut controller = settled_controller();
        controller.set_current_page(2, true, false);
        controller.update(&panel(), &geometry(), DT);
        assert_eq!(controller.effective_offset(&geometry()), 2000.0);

        controller.reset();
        assert_eq!(controller.effective_offset(&geometry()), 0.0);
        // Idempotent
        controller.reset();
        assert_eq!(controller.effective_offset(&geometry()), 0.0);
    }

    #[test]
    fn test_zero_children_is_noop() {
        let mut controller = SwipeController::new(Orientation::Horizontal);
        let empty = UniformPanel::new(0, 1000.0);
        controller.swipe_by(&geometry(), 300.0, true);
        controller.on_release_interaction();
        assert!(!controller.update(&empty, &geometry(), DT));
        assert_eq!(controller.distance_from_end(), 1.0e9);
    }

    #[test]
    fn test_zero_viewport_skips_commit() {
        let mut controller = settled_controller();
        let collapsed = PanelGeometry::new(0.0, 0.0, 1.0);
        controller.swipe_by(&collapsed, 500.0, true);
        controller.on_release_interaction();
        let committed = controller.update(&panel(), &collapsed, DT);
        assert!(!committed);
        assert_eq!(controller.current_page(), 0);
    }

    #[test]
    fn test_distance_from_end() {
        let mut controller = SwipeController::new(Orientation::Horizontal);
        assert_eq!(controller.distance_from_end(), 1.0e9);

        controller.update(&panel(), &geometry(), DT);
        assert_eq!(controller.distance_from_end(), 2000.0);

        controller.set_current_page(2, false, false);
        controller.update(&panel(), &geometry(), DT);
        assert_eq!(controller.distance_from_end(), 0.0);
    }

    #[test]
    fn test_orientation_independent_trajectories() {
        let mut horizontal = SwipeController::new(Orientation::Horizontal);
        let mut vertical = SwipeController::new(Orientation::Vertical);
        let h_geometry = PanelGeometry::new(1000.0, 600.0, 1.0);
        let v_geometry = PanelGeometry::new(600.0, 1000.0, 1.0);
        let pages = panel();

        let script = |controller: &mut SwipeController, geometry: &PanelGeometry| {
            let mut trajectory = Vec::new();
            controller.update(&pages, geometry, DT);
            controller.swipe_by(geometry, 151.0, true);
            controller.on_release_interaction();
            for _ in 0..90 {
                controller.update(&pages, geometry, DT);
                trajectory.push(controller.effective_offset(geometry));
            }
            trajectory
        };

        let h_trajectory = script(&mut horizontal, &h_geometry);
        let v_trajectory = script(&mut vertical, &v_geometry);
        assert_eq!(h_trajectory, v_trajectory);
    }

    /// Pages of different extents: anchors are prefix sums, not multiples.
    struct RaggedPanel;

    impl PagedPanel for RaggedPanel {
        fn child_count(&self) -> usize {
            3
        }

        fn child_extent(&self, index: usize, _orientation: Orientation) -> f32 {
            *[800.0, 1200.0, 500.0].get(index).unwrap_or(&0.0)
        }
    }

    #[test]
    fn test_ragged_page_anchors() {
        let mut controller = SwipeController::new(Orientation::Horizontal);
        controller.update(&RaggedPanel, &geometry(), DT);

        controller.set_current_page(1, false, false);
        controller.update(&RaggedPanel, &geometry(), DT);
        assert_eq!(controller.effective_offset(&geometry()), 800.0);

        controller.set_current_page(2, false, false);
        controller.update(&RaggedPanel, &geometry(), DT);
        assert_eq!(controller.effective_offset(&geometry()), 2000.0);
        assert_eq!(controller.distance_from_end(), 0.0);
    }
}
