//! Zoom: frustum containment and the in/out step.

use super::GroupCameraController;
use crate::camera::Projection;
use crate::tracking::TargetLookup;

/// What the zoom step did on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAction {
    /// Everything fit; zoomed in one step.
    In,
    /// Something did not fit; zoomed out one step.
    Out,
    /// Zoomed in, which pushed something out of view, so zoomed back out.
    /// The camera is at its closest framing and its zoom is unchanged.
    Settled,
}

impl GroupCameraController {
    /// Whether every tracked target with render bounds lies fully inside the
    /// camera's current frustum.
    ///
    /// Targets without bounds, and ids that no longer resolve, are ignored.
    /// An empty group is trivially visible.
    #[must_use]
    pub fn all_targets_visible<L>(&self, lookup: &L) -> bool
    where
        L: TargetLookup + ?Sized,
    {
        let frustum = self.rig.camera().frustum();
        self.targets
            .iter()
            .filter_map(|id| lookup.resolve(id)?.render_bounds())
            .all(|bounds| frustum.contains_aabb(&bounds))
    }

    /// Zoom in by one step for a frame of `delta_time` seconds.
    pub fn zoom_in(&mut self, delta_time: f32) {
        let _ = self.zoom_by(self.options.zoom_step(delta_time));
    }

    /// Zoom out by one step for a frame of `delta_time` seconds.
    pub fn zoom_out(&mut self, delta_time: f32) {
        let _ = self.zoom_by(-self.options.zoom_step(delta_time));
    }

    /// Collect this tick's render bounds. Returns how many registered ids
    /// resolved.
    pub(super) fn gather_render_bounds<L>(&mut self, lookup: &L) -> usize
    where
        L: TargetLookup + ?Sized,
    {
        self.scratch_bounds.clear();
        let mut resolved = 0;
        for id in self.targets.iter() {
            if let Some(target) = lookup.resolve(id) {
                resolved += 1;
                if let Some(bounds) = target.render_bounds() {
                    self.scratch_bounds.push(bounds);
                }
            }
        }
        resolved
    }

    /// Run both containment checks against the gathered bounds. Returns
    /// whether the group was contained before zooming, and the action taken.
    pub(super) fn adjust_zoom(
        &mut self,
        delta_time: f32,
    ) -> (bool, ZoomAction) {
        let step = self.options.zoom_step(delta_time);
        let contained = self.gathered_bounds_visible();
        let zoomed_in = contained.then(|| (step, self.zoom_by(step)));

        // The camera is unchanged when nothing zoomed in, so the second
        // check only matters after a zoom-in.
        let still_contained = self.gathered_bounds_visible();
        let action = match (zoomed_in, still_contained) {
            (Some(_), true) => ZoomAction::In,
            (Some((step, shrunk)), false) => {
                self.undo_zoom(step, shrunk);
                ZoomAction::Settled
            }
            (None, _) => {
                let _ = self.zoom_by(-step);
                ZoomAction::Out
            }
        };
        (contained, action)
    }

    fn gathered_bounds_visible(&self) -> bool {
        let frustum = self.rig.camera().frustum();
        self.scratch_bounds
            .iter()
            .all(|bounds| frustum.contains_aabb(bounds))
    }

    /// Positive `step` moves closer. Orthographic cameras also shrink (or
    /// grow) their size, never below the configured minimum. Returns how
    /// much the orthographic size actually shrank.
    fn zoom_by(&mut self, step: f32) -> f32 {
        let mut shrunk = 0.0;
        let projection = self.rig.camera().projection;
        if let Projection::Orthographic { size } = projection {
            let resized =
                (size - step).max(self.options.min_orthographic_size);
            shrunk = size - resized;
            self.rig
                .set_projection(Projection::Orthographic { size: resized });
        }
        self.rig.dolly_by(step);
        shrunk
    }

    /// Reverse a [`zoom_by`](Self::zoom_by) of `step` that shrank the
    /// orthographic size by `shrunk`.
    fn undo_zoom(&mut self, step: f32, shrunk: f32) {
        let projection = self.rig.camera().projection;
        if let Projection::Orthographic { size } = projection {
            self.rig.set_projection(Projection::Orthographic {
                size: size + shrunk,
            });
        }
        self.rig.dolly_by(-step);
    }
}
