use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::camera::{Camera, Projection};
use crate::error::GroupCamError;

/// Projection kind selector for options files.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// Perspective projection using `fovy`.
    #[default]
    Perspective,
    /// Orthographic projection using `orthographic_size`.
    Orthographic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Fallback camera used when the host does not supply one.
pub struct CameraOptions {
    /// Projection kind.
    #[schemars(title = "Projection")]
    pub projection: ProjectionKind,
    /// Vertical field of view in degrees.
    #[schemars(
        title = "Field of View",
        range(min = 20.0, max = 90.0),
        extend("step" = 1.0)
    )]
    pub fovy: f32,
    /// Orthographic half-height in world units.
    #[schemars(
        title = "Orthographic Size",
        range(min = 0.1, max = 500.0),
        extend("step" = 0.1)
    )]
    pub orthographic_size: f32,
    /// Viewport aspect ratio (width / height).
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial camera position.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Point the camera initially looks at.
    #[schemars(skip)]
    pub look_at: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            projection: ProjectionKind::Perspective,
            fovy: 60.0,
            orthographic_size: 5.0,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
            position: [0.0, 10.0, 10.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}

impl CameraOptions {
    /// Reject lens values that cannot build a projection.
    pub fn validate(&self) -> Result<(), GroupCamError> {
        require_positive("camera.fovy", self.fovy)?;
        if self.fovy >= 180.0 {
            return Err(GroupCamError::InvalidOption {
                field: "camera.fovy",
                value: self.fovy,
            });
        }
        require_positive("camera.orthographic_size", self.orthographic_size)?;
        require_positive("camera.aspect", self.aspect)?;
        require_positive("camera.znear", self.znear)?;
        require_positive("camera.zfar", self.zfar - self.znear)
            .map_err(|_| GroupCamError::InvalidOption {
                field: "camera.zfar",
                value: self.zfar,
            })
    }

    /// Whether switching to `other` changes the projection itself, as
    /// opposed to only the clip planes or aspect ratio.
    #[must_use]
    pub fn projection_differs(&self, other: &Self) -> bool {
        self.projection() != other.projection()
    }

    /// The projection described by these options.
    #[must_use]
    pub fn projection(&self) -> Projection {
        match self.projection {
            ProjectionKind::Perspective => {
                Projection::Perspective { fovy: self.fovy }
            }
            ProjectionKind::Orthographic => Projection::Orthographic {
                size: self.orthographic_size,
            },
        }
    }

    /// Build a camera at the configured initial pose.
    #[must_use]
    pub fn build_camera(&self) -> Camera {
        Camera::new(self.projection(), self.aspect, self.znear, self.zfar)
            .looking_at(
                Vec3::from_array(self.position),
                Vec3::from_array(self.look_at),
                Vec3::Y,
            )
    }
}
