//! Axis-aligned bounding boxes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Zero-sized box at the origin.
    pub const ZERO: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
    };

    /// Create from min and max corners.
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create from a minimum corner and a size. Negative size components are
    /// folded so that `min <= max` always holds.
    #[must_use]
    pub fn from_min_size(min: Vec3, size: Vec3) -> Self {
        let far = min + size;
        Self {
            min: min.min(far),
            max: min.max(far),
        }
    }

    /// Create from a center point and full extents.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Zero-sized box around a single point.
    #[must_use]
    pub const fn from_point(point: Vec3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn enclosing<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_point(first);
        for point in points {
            bounds.encapsulate(point);
        }
        Some(bounds)
    }

    /// Grow the box so it contains `point`.
    pub fn encapsulate(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extents.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether `point` lies inside or on the boundary.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// The eight corners, ordered by the bit pattern `zyx` (bit set = max).
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_min_size_folds_negative_size() {
        let b = Aabb::from_min_size(
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(-2.0, 1.0, 0.0),
        );
        assert_eq!(b.min, Vec3::new(-1.0, 1.0, 1.0));
        assert_eq!(b.max, Vec3::new(1.0, 2.0, 1.0));
    }

    #[test]
    fn enclosing_empty_is_none() {
        assert!(Aabb::enclosing(std::iter::empty()).is_none());
    }

    #[test]
    fn enclosing_does_not_include_origin() {
        let b = Aabb::enclosing([
            Vec3::new(10.0, 10.0, 10.0),
            Vec3::new(12.0, 14.0, 10.0),
        ])
        .unwrap();
        assert_eq!(b.min, Vec3::new(10.0, 10.0, 10.0));
        assert_eq!(b.max, Vec3::new(12.0, 14.0, 10.0));
        assert_eq!(b.center(), Vec3::new(11.0, 12.0, 10.0));
        assert!(!b.contains_point(Vec3::ZERO));
    }

    #[test]
    fn center_lies_inside_point_bounds() {
        let points = [
            Vec3::new(-3.0, 0.5, 8.0),
            Vec3::new(4.0, -2.0, 1.0),
            Vec3::new(0.0, 7.0, -6.0),
            Vec3::new(2.5, 2.5, 2.5),
        ];
        for n in 1..=points.len() {
            let b = Aabb::enclosing(points[..n].iter().copied()).unwrap();
            assert!(b.contains_point(b.center()));
            for p in &points[..n] {
                assert!(b.contains_point(*p));
            }
        }
    }

    #[test]
    fn corners_cover_both_extremes() {
        let b = Aabb::from_min_size(Vec3::ZERO, Vec3::ONE);
        let corners = b.corners();
        assert_eq!(corners[0], Vec3::ZERO);
        assert_eq!(corners[7], Vec3::ONE);
        for c in corners {
            assert!(b.contains_point(c));
        }
    }
}
