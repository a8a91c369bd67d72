use super::target::TargetId;
use crate::controller::GroupCameraController;

/// Host-side component that keeps an object's membership in step with its
/// activation state.
///
/// Wire `on_enable`/`on_disable`/`on_destroy` to the host's lifecycle
/// callbacks; the controller reference is passed in rather than looked up
/// globally. Calls are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedObject {
    id: TargetId,
    registered: bool,
}

impl TrackedObject {
    /// A not-yet-registered tracker for `id`.
    #[must_use]
    pub const fn new(id: TargetId) -> Self {
        Self {
            id,
            registered: false,
        }
    }

    /// The tracked object's id.
    #[must_use]
    pub const fn id(&self) -> TargetId {
        self.id
    }

    /// Whether the last lifecycle call left the object registered.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registered
    }

    /// The object became active: start tracking it.
    pub fn on_enable(&mut self, controller: &mut GroupCameraController) {
        if controller.add_target(self.id) {
            log::debug!("{} registered with camera", self.id);
        }
        self.registered = true;
    }

    /// The object became inactive: stop tracking it.
    pub fn on_disable(&mut self, controller: &mut GroupCameraController) {
        if controller.remove_target(self.id) {
            log::debug!("{} unregistered from camera", self.id);
        }
        self.registered = false;
    }

    /// The object is being destroyed.
    pub fn on_destroy(&mut self, controller: &mut GroupCameraController) {
        self.on_disable(controller);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, Projection};
    use crate::options::Options;

    fn controller() -> GroupCameraController {
        let camera = Camera::new(
            Projection::Perspective { fovy: 60.0 },
            1.0,
            0.1,
            100.0,
        );
        GroupCameraController::new(Some(camera), &Options::default())
    }

    #[test]
    fn enable_disable_tracks_membership() {
        let mut ctl = controller();
        let mut obj = TrackedObject::new(TargetId(4));

        obj.on_enable(&mut ctl);
        obj.on_enable(&mut ctl);
        assert!(obj.is_registered());
        assert_eq!(ctl.targets().len(), 1);

        obj.on_disable(&mut ctl);
        assert!(!obj.is_registered());
        assert!(ctl.targets().is_empty());

        // Destroying an already disabled object is harmless.
        obj.on_destroy(&mut ctl);
        assert!(ctl.targets().is_empty());
    }
}
