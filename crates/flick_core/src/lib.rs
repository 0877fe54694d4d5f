//! Flick core primitives
//!
//! Shared building blocks for the flick swipe/paging stack:
//!
//! - **Geometry**: [`PanelGeometry`] and [`Orientation`] describe the host
//!   panel's viewport along the swipe axis, frame by frame
//! - **Panel capability**: [`PagedPanel`] is the narrow interface the swipe
//!   controller needs from any container type - no widget inheritance
//!   required
//!
//! Everything here is a plain value type; the crate holds no state of its
//! own.

pub mod geometry;
pub mod panel;

pub use geometry::{Orientation, PanelGeometry};
pub use panel::{PagedPanel, UniformPanel};
