//! Flick Swipe Controller
//!
//! Page-snapping swipe physics for a scrollable UI panel: raw drag input in,
//! one smoothly animated content offset out, every frame.
//!
//! # Features
//!
//! - **Page commitment**: a drag past a configurable fraction of the viewport
//!   commits to the next/previous page on release
//! - **Eased page glides**: committed changes animate along any
//!   [`Easing`](flick_animation::Easing) curve
//! - **Elastic resistance**: uncommitted drag is softened through a
//!   logarithmic band, continuous through zero
//! - **Spring-back**: an uncommitted release pulls the offset back to the
//!   page anchor, faster the further it overshot
//! - **Programmatic paging**: [`SwipeController::set_current_page`] for
//!   button-driven navigation, with or without animation
//!
//! # Example
//!
//! ```
//! use flick_core::{Orientation, PanelGeometry, UniformPanel};
//! use flick_swipe::SwipeController;
//!
//! let mut controller = SwipeController::new(Orientation::Horizontal);
//! let geometry = PanelGeometry::new(1000.0, 600.0, 1.0);
//! let panel = UniformPanel::new(3, 1000.0);
//! controller.update(&panel, &geometry, 1.0 / 60.0);
//!
//! // Drag far enough, release, and the next frame commits page 1
//! controller.swipe_by(&geometry, 200.0, true);
//! controller.on_release_interaction();
//! let committed = controller.update(&panel, &geometry, 1.0 / 60.0);
//! assert!(committed);
//! assert_eq!(controller.current_page(), 1);
//! assert!(controller.effective_offset(&geometry) >= 0.0);
//! ```

pub mod config;
pub mod controller;
pub mod error;

pub use config::SwipeConfig;
pub use controller::{SwipeController, SwipeMode};
pub use error::ConfigError;
