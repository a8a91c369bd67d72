use glam::{Quat, Vec3};

use super::core::{Camera, Projection};

/// Parent transform ("container") carrying the camera as a child.
///
/// The follow logic moves the rig; zoom slides the camera along its own
/// local forward axis inside the rig, so zooming never fights the follow
/// target regardless of how the rig is oriented. The camera keeps an
/// identity local rotation, so its world orientation is the rig's.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    position: Vec3,
    rotation: Quat,
    /// Camera position in rig space.
    local_offset: Vec3,
    camera: Camera,
}

impl CameraRig {
    /// Wrap a camera in a new rig seeded from the camera's current pose.
    /// The camera starts at the rig origin.
    #[must_use]
    pub fn new(camera: Camera) -> Self {
        let mut rig = Self {
            position: camera.position,
            rotation: camera.rotation,
            local_offset: Vec3::ZERO,
            camera,
        };
        rig.sync_camera();
        rig
    }

    /// Rig world position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Rig world orientation.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Camera position in rig space.
    #[must_use]
    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    /// How far the camera has moved forward from the rig origin. Positive
    /// means zoomed in.
    #[must_use]
    pub fn dolly(&self) -> f32 {
        -self.local_offset.z
    }

    /// The camera with its world pose derived from the rig.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Move the rig, carrying the camera along.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.sync_camera();
    }

    /// Reorient the rig, carrying the camera along.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation.normalize();
        self.sync_camera();
    }

    /// Slide the camera along its local forward axis (negative = back).
    pub fn dolly_by(&mut self, amount: f32) {
        self.local_offset += Vec3::NEG_Z * amount;
        self.sync_camera();
    }

    /// Replace the camera's projection. The pose stays rig-driven.
    pub fn set_projection(&mut self, projection: Projection) {
        self.camera.projection = projection;
    }

    /// Update the clip planes and aspect ratio.
    pub fn set_lens(&mut self, aspect: f32, znear: f32, zfar: f32) {
        self.camera.aspect = aspect;
        self.camera.znear = znear;
        self.camera.zfar = zfar;
    }

    fn sync_camera(&mut self) {
        self.camera.position =
            self.position + self.rotation * self.local_offset;
        self.camera.rotation = self.rotation;
    }
}
