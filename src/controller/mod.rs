//! The group camera controller.
//!
//! One controller owns the set of tracked ids, the camera rig, and the
//! follow damper's velocity. The host drives it with one
//! [`GroupCameraController::late_update`] per frame, after game logic has
//! moved the targets:
//!
//! 1. bound all target positions and smooth-damp the rig toward the center
//! 2. recompute the frustum and zoom in if every render bound fits
//! 3. recompute again and zoom out if anything does not fit
//!
//! Step 3 runs regardless of step 2, so a zoom-in that overshoots is undone
//! before the frame is rendered.

mod follow;
mod zoom;

use glam::Vec3;

pub use self::zoom::ZoomAction;
use crate::camera::{Camera, CameraRig};
use crate::error::GroupCamError;
use crate::options::{CameraOptions, FollowOptions, Options};
use crate::tracking::{TargetId, TargetLookup, TargetRegistry};
use crate::util::Aabb;

/// Where the controller's camera came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraSource {
    /// Supplied by the host at construction.
    Explicit,
    /// Built from [`CameraOptions`] because none was supplied.
    Fallback,
}

/// Outcome of one [`GroupCameraController::late_update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Center of the target position bounds the rig is moving toward.
    pub follow_target: Vec3,
    /// Whether every target with render bounds was inside the frustum
    /// before zooming.
    pub contained: bool,
    /// What the zoom step did.
    pub zoom: ZoomAction,
    /// Camera offset along its forward axis after zooming.
    pub dolly: f32,
    /// Registered targets the host could resolve this tick.
    pub resolved: usize,
}

/// Keeps a group of targets in view by following and zooming a camera.
#[derive(Debug, Clone)]
pub struct GroupCameraController {
    targets: TargetRegistry,
    rig: CameraRig,
    /// Follow damper state, persisted across ticks.
    velocity: Vec3,
    /// Last computed follow target.
    target_position: Vec3,
    options: FollowOptions,
    fallback_camera: CameraOptions,
    camera_source: CameraSource,
    /// Render bounds gathered for the current tick.
    scratch_bounds: Vec<Aabb>,
}

impl GroupCameraController {
    /// Create a controller around `camera`.
    ///
    /// Passing `None` builds the default camera from `options.camera` and
    /// logs a warning; check [`camera_source`](Self::camera_source) to detect
    /// it. The rig is seeded from the camera's pose. An options section that
    /// fails validation is replaced by its defaults, with a warning.
    #[must_use]
    pub fn new(camera: Option<Camera>, options: &Options) -> Self {
        let follow = match options.follow.validate() {
            Ok(()) => options.follow.clone(),
            Err(e) => {
                log::warn!("{e}, using default follow options");
                FollowOptions::default()
            }
        };
        let fallback_camera = match options.camera.validate() {
            Ok(()) => options.camera.clone(),
            Err(e) => {
                log::warn!("{e}, using default camera options");
                CameraOptions::default()
            }
        };

        let (camera, camera_source) = match camera {
            Some(camera) => (camera, CameraSource::Explicit),
            None => {
                log::warn!(
                    "no camera supplied to group camera controller, \
                     falling back to the configured default camera"
                );
                (fallback_camera.build_camera(), CameraSource::Fallback)
            }
        };

        log::debug!(
            "group camera rig created at {:?} ({:?} camera)",
            camera.position,
            camera_source
        );

        Self {
            targets: TargetRegistry::new(),
            target_position: camera.position,
            rig: CameraRig::new(camera),
            velocity: Vec3::ZERO,
            options: follow,
            fallback_camera,
            camera_source,
            scratch_bounds: Vec::new(),
        }
    }

    // -- Target registry --

    /// Start tracking `id`. Returns `false` if it was already tracked.
    pub fn add_target(&mut self, id: TargetId) -> bool {
        self.targets.add(id)
    }

    /// Stop tracking `id`. Returns `false` if it was not tracked.
    pub fn remove_target(&mut self, id: TargetId) -> bool {
        self.targets.remove(id)
    }

    /// The tracked ids.
    #[must_use]
    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    // -- Per-frame update --

    /// Advance one frame. Call once per frame after all target movement.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn late_update<L>(&mut self, lookup: &L, delta_time: f32) -> TickReport
    where
        L: TargetLookup + ?Sized,
    {
        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };

        let bounds = self.follow_bounds(lookup);
        self.follow(bounds.center(), delta_time);

        let resolved = self.gather_render_bounds(lookup);
        let (contained, zoom) = self.adjust_zoom(delta_time);

        log::trace!(
            "camera tick: follow {:?}, contained {contained}, zoom {zoom:?}",
            self.target_position
        );

        TickReport {
            follow_target: self.target_position,
            contained,
            zoom,
            dolly: self.rig.dolly(),
            resolved,
        }
    }

    // -- Options --

    /// Push new options into a live controller.
    ///
    /// Follow settings always apply. Camera settings only touch the lens of a
    /// fallback camera; a host-supplied camera is left alone, and the pose is
    /// never reset. The projection, and with it an orthographic camera's
    /// current zoom, is only replaced when its kind or size changed.
    ///
    /// Invalid options are rejected and leave the controller untouched.
    pub fn apply_options(
        &mut self,
        options: &Options,
    ) -> Result<(), GroupCamError> {
        options.validate()?;
        self.options = options.follow.clone();

        let co = &options.camera;
        if self.camera_source == CameraSource::Fallback
            && self.fallback_camera != *co
        {
            if self.fallback_camera.projection_differs(co) {
                self.rig.set_projection(co.projection());
            }
            self.rig.set_lens(co.aspect, co.znear, co.zfar);
            log::info!("applied camera options to fallback camera");
        }
        self.fallback_camera = co.clone();
        Ok(())
    }

    /// Current follow settings.
    #[must_use]
    pub fn options(&self) -> &FollowOptions {
        &self.options
    }

    // -- Accessors --

    /// Where the camera came from.
    #[must_use]
    pub fn camera_source(&self) -> CameraSource {
        self.camera_source
    }

    /// The camera with its current world pose.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    /// The rig carrying the camera.
    #[must_use]
    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    /// Mutable rig access, e.g. to reorient it. The rig position is driven
    /// by subsequent ticks.
    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    /// Follow damper velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Last computed follow target.
    #[must_use]
    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }
}
