//! Camera system for group framing.
//!
//! Provides the camera projection model, the rig transform that parents the
//! camera, and frustum extraction with containment tests.

/// Core camera struct and projection kinds.
pub mod core;
/// View frustum extraction and containment tests.
pub mod frustum;
/// Parent transform that carries the camera and its zoom offset.
pub mod rig;

pub use self::core::{Camera, Projection};
pub use frustum::{Frustum, FrustumSide, Plane};
pub use rig::CameraRig;
