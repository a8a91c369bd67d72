use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::frustum::Frustum;

/// Camera projection model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Projection {
    /// Perspective projection.
    Perspective {
        /// Vertical field of view in degrees.
        fovy: f32,
    },
    /// Orthographic projection.
    Orthographic {
        /// Half of the visible height in world units.
        size: f32,
    },
}

/// Camera with a projection and a world-space pose.
///
/// Forward is local `-Z` and up is local `+Y` (right-handed, matching
/// `Mat4::look_to_rh`). Projections use the `[0,1]` depth range.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Projection kind and its size / field-of-view parameter.
    pub projection: Projection,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl Camera {
    /// Create a camera at the origin looking down `-Z`.
    #[must_use]
    pub fn new(
        projection: Projection,
        aspect: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            projection,
            aspect,
            znear,
            zfar,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }

    /// Place the camera at `eye` and orient it toward `target`.
    ///
    /// Leaves the orientation unchanged when `eye == target` or the view
    /// direction is parallel to `up`.
    #[must_use]
    pub fn looking_at(mut self, eye: Vec3, target: Vec3, up: Vec3) -> Self {
        self.position = eye;
        let dir = (target - eye).normalize_or_zero();
        if dir != Vec3::ZERO && dir.cross(up).length_squared() > 1e-8 {
            // The view matrix rotates world into camera space; the camera's
            // own orientation is its inverse.
            self.rotation =
                Quat::from_mat4(&Mat4::look_to_rh(Vec3::ZERO, dir, up))
                    .inverse()
                    .normalize();
        }
        self
    }

    /// Whether the camera uses an orthographic projection.
    #[must_use]
    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    /// Unit forward direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Unit up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// World-to-camera matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.up())
    }

    /// Projection matrix for the current projection kind.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        match self.projection {
            Projection::Perspective { fovy } => Mat4::perspective_rh(
                fovy.to_radians(),
                self.aspect,
                self.znear,
                self.zfar,
            ),
            Projection::Orthographic { size } => {
                let half_h = size;
                let half_w = size * self.aspect;
                Mat4::orthographic_rh(
                    -half_w, half_w, -half_h, half_h, self.znear, self.zfar,
                )
            }
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// The six view-frustum planes for the current projection and pose.
    #[must_use]
    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(self.build_matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perspective() -> Camera {
        Camera::new(Projection::Perspective { fovy: 60.0 }, 1.0, 0.1, 100.0)
    }

    #[test]
    fn looking_down_negative_z_keeps_identity() {
        let cam = perspective().looking_at(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::ZERO,
            Vec3::Y,
        );
        assert!(cam.forward().abs_diff_eq(Vec3::NEG_Z, 1e-5));
        assert!(cam.rotation.abs_diff_eq(Quat::IDENTITY, 1e-5));
    }

    #[test]
    fn looking_at_points_forward_at_target() {
        let eye = Vec3::new(5.0, 8.0, -3.0);
        let cam = perspective().looking_at(eye, Vec3::ZERO, Vec3::Y);
        let expected = (Vec3::ZERO - eye).normalize();
        assert!(cam.forward().abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn degenerate_look_keeps_rotation() {
        let cam = perspective().looking_at(Vec3::ONE, Vec3::ONE, Vec3::Y);
        assert_eq!(cam.rotation, Quat::IDENTITY);
        let above = Vec3::new(0.0, 5.0, 0.0);
        let cam = perspective().looking_at(Vec3::ZERO, above, Vec3::Y);
        assert_eq!(cam.rotation, Quat::IDENTITY);
    }

    #[test]
    fn orthographic_width_follows_aspect() {
        let cam =
            Camera::new(Projection::Orthographic { size: 2.0 }, 2.0, 0.1, 50.0)
                .looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let frustum = cam.frustum();
        assert!(frustum.contains_point(Vec3::new(3.9, 1.9, 0.0)));
        assert!(!frustum.contains_point(Vec3::new(4.1, 0.0, 0.0)));
        assert!(!frustum.contains_point(Vec3::new(0.0, 2.1, 0.0)));
        assert!(cam.is_orthographic());
    }
}
