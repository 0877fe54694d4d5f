//! Flick Animation Models
//!
//! Numeric models used by the flick swipe/paging stack.
//!
//! # Features
//!
//! - **Easing curves**: linear, step, sine, power, exponential, and circular
//!   families with In/Out/InOut variants, shaped by a blend exponent where
//!   the curve takes one
//! - **Velocity tracking**: age-weighted drag-velocity sampling over a
//!   sliding window
//! - **Inertial coasting**: exponential-friction momentum that
//!   self-terminates below a velocity cutoff
//!
//! The easing module drives page transitions; the inertia module is the
//! velocity subsystem a host panel runs alongside the swipe controller for
//! free-scroll momentum.

pub mod easing;
pub mod inertia;

pub use easing::Easing;
pub use inertia::{Inertia, VelocityTracker};
