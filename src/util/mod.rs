//! Shared utilities for the camera controller.
//!
//! Bounding boxes, the smooth-damp integrator, and a wall-clock frame timer
//! for standalone driver loops.

/// Axis-aligned bounding boxes.
pub mod bounds;
/// Wall-clock frame delta source with FPS smoothing.
pub mod frame_timing;
/// Critically damped smoothing with persistent velocity.
pub mod smooth_damp;

pub use bounds::Aabb;
pub use smooth_damp::smooth_damp;
