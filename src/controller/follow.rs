//! Position follow: bound the targets and ease the rig toward the center.

use glam::Vec3;

use super::GroupCameraController;
use crate::tracking::TargetLookup;
use crate::util::{smooth_damp, Aabb};

impl GroupCameraController {
    /// Bounds of every resolvable target's position.
    ///
    /// With no resolvable targets this is the zero-sized box at the origin,
    /// so an empty group pulls the camera toward the world origin. Ids the
    /// host can no longer resolve are skipped.
    #[must_use]
    pub fn follow_bounds<L>(&self, lookup: &L) -> Aabb
    where
        L: TargetLookup + ?Sized,
    {
        let positions = self.targets.iter().filter_map(|id| {
            let target = lookup.resolve(id);
            if target.is_none() {
                log::debug!("{id} is tracked but no longer resolves, skipping");
            }
            target.map(|t| t.position())
        });
        Aabb::enclosing(positions).unwrap_or(Aabb::ZERO)
    }

    /// Move the rig immediately onto the current follow target and drop any
    /// accumulated velocity. Useful after teleports or scene loads.
    pub fn snap_to_targets<L>(&mut self, lookup: &L)
    where
        L: TargetLookup + ?Sized,
    {
        self.target_position = self.follow_bounds(lookup).center();
        self.velocity = Vec3::ZERO;
        self.rig.set_position(self.target_position);
    }

    pub(super) fn follow(&mut self, center: Vec3, delta_time: f32) {
        self.target_position = center;
        let next = smooth_damp(
            self.rig.position(),
            center,
            &mut self.velocity,
            self.options.smooth_time(),
            self.options.max_follow_speed,
            delta_time,
        );
        self.rig.set_position(next);
    }
}
