//! View frustum for containment tests
//!
//! Extracts frustum planes from the view-projection matrix and answers
//! whether points and boxes lie fully inside.

use glam::{Mat4, Vec3, Vec4};

use crate::util::Aabb;

/// A plane in 3D space, represented as (normal.x, normal.y, normal.z, distance)
/// where the plane equation is: ax + by + cz + d = 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin (`n · p + d = 0`).
    pub distance: f32,
}

impl Plane {
    /// Create a plane from coefficients and normalize it
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let len = coefficients.truncate().length();
        if len > 0.0 {
            Self {
                normal: coefficients.truncate() / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front, negative =
    /// behind)
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// Whether `point` is on the inside (non-negative) half-space.
    #[inline]
    #[must_use]
    pub fn is_inside(&self, point: Vec3) -> bool {
        self.distance_to_point(point) >= 0.0
    }
}

/// Index of each plane in [`Frustum::planes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumSide {
    /// Left clipping plane.
    Left = 0,
    /// Right clipping plane.
    Right = 1,
    /// Bottom clipping plane.
    Bottom = 2,
    /// Top clipping plane.
    Top = 3,
    /// Near clipping plane.
    Near = 4,
    /// Far clipping plane.
    Far = 5,
}

/// View frustum consisting of 6 planes
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    /// Uses the Gribb/Hartmann method for plane extraction.
    /// Planes point inward (positive half-space is inside the frustum).
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        // glam stores column-major; rows of the matrix are the columns of
        // its transpose.
        let m = vp.transpose();
        let (row0, row1, row2, row3) = (m.x_axis, m.y_axis, m.z_axis, m.w_axis);

        // For right-handed system with [0,1] depth range
        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                // [0,1] depth: near plane is just row2
                Plane::from_coefficients(row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// The plane on the given side.
    #[must_use]
    pub fn plane(&self, side: FrustumSide) -> &Plane {
        &self.planes[side as usize]
    }

    /// Test if a point is inside the frustum
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.is_inside(point))
    }

    /// Test if every point lies inside every plane. Vacuously true for an
    /// empty set.
    #[must_use]
    pub fn contains_points(&self, points: &[Vec3]) -> bool {
        points.iter().all(|&p| self.contains_point(p))
    }

    /// Test if a box is completely inside the frustum: all eight corners on
    /// the inner side of all six planes.
    #[inline]
    #[must_use]
    pub fn contains_aabb(&self, aabb: &Aabb) -> bool {
        self.contains_points(&aabb.corners())
    }
}

#[cfg(test)]
mod tests {
    use glam::Mat4;

    use super::*;

    fn looking_at_origin() -> Frustum {
        let proj = Mat4::perspective_rh(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        Frustum::from_view_projection(proj * view)
    }

    #[test]
    fn test_frustum_contains_origin() {
        let frustum = looking_at_origin();

        // Origin should be inside the frustum
        assert!(frustum.contains_point(Vec3::ZERO));

        // Point far behind camera should be outside
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 20.0)));
    }

    #[test]
    fn planes_are_normalized() {
        for plane in &looking_at_origin().planes {
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn near_and_far_face_the_right_way() {
        let frustum = looking_at_origin();
        let near = frustum.plane(FrustumSide::Near);
        let far = frustum.plane(FrustumSide::Far);
        // Camera looks down -Z, so "inside" is toward -Z for the near plane
        // and toward +Z for the far plane.
        assert!(near.normal.z < 0.0);
        assert!(far.normal.z > 0.0);
        let on_near = Vec3::new(0.0, 0.0, 9.9);
        assert!(near.distance_to_point(on_near).abs() < 1e-3);
    }

    #[test]
    fn unit_cube_at_origin_is_contained() {
        let frustum = looking_at_origin();
        let cube = Aabb::from_min_size(Vec3::ZERO, Vec3::ONE);
        assert!(frustum.contains_aabb(&cube));
    }

    #[test]
    fn any_corner_outside_any_plane_fails() {
        let frustum = looking_at_origin();
        let cube = Aabb::from_min_size(Vec3::ZERO, Vec3::ONE);
        let corners = cube.corners();
        assert!(frustum.contains_points(&corners));

        // Push each corner in turn just past each plane.
        for i in 0..corners.len() {
            for plane in &frustum.planes {
                let mut moved = corners;
                let d = plane.distance_to_point(moved[i]);
                moved[i] -= plane.normal * (d + 0.01);
                assert!(!plane.is_inside(moved[i]));
                assert!(!frustum.contains_points(&moved));
            }
        }
    }

    #[test]
    fn straddling_box_is_not_contained() {
        let frustum = looking_at_origin();
        let wide =
            Aabb::from_center_size(Vec3::ZERO, Vec3::new(40.0, 1.0, 1.0));
        assert!(!frustum.contains_aabb(&wide));
    }

    #[test]
    fn empty_point_set_is_contained() {
        assert!(looking_at_origin().contains_points(&[]));
    }
}
