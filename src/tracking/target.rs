use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::util::Aabb;

/// Host-assigned identifier of a tracked object.
///
/// The controller stores ids only; the host owns the objects and resolves
/// ids through [`TargetLookup`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// A scene object the camera can keep in view.
pub trait Trackable {
    /// Current world-space position, read once per tick.
    fn position(&self) -> Vec3;

    /// World-space render bounds, if the object has a renderer.
    ///
    /// Objects without bounds still pull the camera toward them but never
    /// block zooming in.
    fn render_bounds(&self) -> Option<Aabb> {
        None
    }
}

/// A bare position: followed, never checked for containment.
impl Trackable for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

/// Resolves target ids to live objects. Implemented by the host scene.
pub trait TargetLookup {
    /// The object behind `id`, or `None` if it no longer exists.
    fn resolve(&self, id: TargetId) -> Option<&dyn Trackable>;
}

impl<T: Trackable, S: BuildHasher> TargetLookup for HashMap<TargetId, T, S> {
    fn resolve(&self, id: TargetId) -> Option<&dyn Trackable> {
        let target: &dyn Trackable = self.get(&id)?;
        Some(target)
    }
}

/// Minimal trackable object: a position with optional render extents
/// centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTarget {
    /// World-space position.
    pub position: Vec3,
    /// Full extents of the render bounds (`None` = no renderer).
    pub render_size: Option<Vec3>,
}

impl BodyTarget {
    /// Object with a renderer of the given size.
    #[must_use]
    pub const fn new(position: Vec3, render_size: Vec3) -> Self {
        Self {
            position,
            render_size: Some(render_size),
        }
    }

    /// Object with no renderer.
    #[must_use]
    pub const fn without_bounds(position: Vec3) -> Self {
        Self {
            position,
            render_size: None,
        }
    }
}

impl Trackable for BodyTarget {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn render_bounds(&self) -> Option<Aabb> {
        self.render_size
            .map(|size| Aabb::from_center_size(self.position, size))
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashMap;

    use super::*;

    #[test]
    fn hash_map_resolves_known_ids() {
        let mut scene: FxHashMap<TargetId, BodyTarget> = FxHashMap::default();
        let _ = scene.insert(TargetId(1), BodyTarget::new(Vec3::X, Vec3::ONE));

        let found = scene.resolve(TargetId(1)).unwrap();
        assert_eq!(found.position(), Vec3::X);
        assert_eq!(
            found.render_bounds(),
            Some(Aabb::new(
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(1.5, 0.5, 0.5)
            ))
        );
        assert!(scene.resolve(TargetId(2)).is_none());
    }

    #[test]
    fn bare_positions_have_no_bounds() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Trackable::position(&p), p);
        assert!(p.render_bounds().is_none());
        assert!(BodyTarget::without_bounds(p).render_bounds().is_none());
    }

    #[test]
    fn display_names_the_target() {
        assert_eq!(TargetId(7).to_string(), "target#7");
    }
}
