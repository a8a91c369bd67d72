use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_positive;
use crate::error::GroupCamError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Follow", inline)]
#[serde(default)]
/// Follow smoothing and zoom rate.
pub struct FollowOptions {
    /// Shared rate for follow smoothing and zoom steps.
    #[schemars(
        title = "Speed",
        range(min = 0.1, max = 50.0),
        extend("step" = 0.1)
    )]
    pub speed: f32,
    /// Smooth time at `speed == 1`, in seconds. The effective smooth time is
    /// this divided by `speed`.
    #[schemars(
        title = "Follow Time",
        range(min = 0.05, max = 5.0),
        extend("step" = 0.05)
    )]
    pub follow_time_constant: f32,
    /// Zoom distance per second at `speed == 1`.
    #[schemars(
        title = "Zoom Rate",
        range(min = 0.01, max = 10.0),
        extend("step" = 0.01)
    )]
    pub zoom_constant: f32,
    /// Cap on rig travel speed in units per second (`None` = unbounded).
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_follow_speed: Option<f32>,
    /// Orthographic zoom-in never shrinks the size below this.
    #[schemars(skip)]
    pub min_orthographic_size: f32,
}

impl Default for FollowOptions {
    fn default() -> Self {
        Self {
            speed: 5.0,
            follow_time_constant: 1.0,
            zoom_constant: 1.0,
            max_follow_speed: None,
            min_orthographic_size: 0.01,
        }
    }
}

impl FollowOptions {
    /// Reject rates that would stall or reverse the follow and zoom loops.
    pub fn validate(&self) -> Result<(), GroupCamError> {
        require_positive("follow.speed", self.speed)?;
        require_positive(
            "follow.follow_time_constant",
            self.follow_time_constant,
        )?;
        require_positive("follow.zoom_constant", self.zoom_constant)?;
        if let Some(max_speed) = self.max_follow_speed {
            require_positive("follow.max_follow_speed", max_speed)?;
        }
        require_positive(
            "follow.min_orthographic_size",
            self.min_orthographic_size,
        )
    }

    /// Smooth time handed to the follow damper.
    #[must_use]
    pub fn smooth_time(&self) -> f32 {
        self.follow_time_constant / self.speed.max(f32::EPSILON)
    }

    /// Zoom distance for one frame of `delta_time` seconds.
    #[must_use]
    pub fn zoom_step(&self, delta_time: f32) -> f32 {
        self.speed * delta_time * self.zoom_constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faster_speed_shortens_smooth_time() {
        let slow = FollowOptions {
            speed: 1.0,
            ..FollowOptions::default()
        };
        let fast = FollowOptions {
            speed: 4.0,
            ..FollowOptions::default()
        };
        assert!((slow.smooth_time() - 1.0).abs() < 1e-6);
        assert!((fast.smooth_time() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zoom_step_scales_with_speed_and_delta() {
        let opts = FollowOptions {
            speed: 2.0,
            zoom_constant: 0.5,
            ..FollowOptions::default()
        };
        assert!((opts.zoom_step(0.1) - 0.1).abs() < 1e-6);
        assert_eq!(opts.zoom_step(0.0), 0.0);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(FollowOptions::default().validate().is_ok());
    }

    #[test]
    fn non_positive_rates_are_rejected() {
        for speed in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let opts = FollowOptions {
                speed,
                ..FollowOptions::default()
            };
            assert!(matches!(
                opts.validate(),
                Err(GroupCamError::InvalidOption {
                    field: "follow.speed",
                    ..
                })
            ));
        }

        let opts = FollowOptions {
            zoom_constant: -1.0,
            ..FollowOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = FollowOptions {
            max_follow_speed: Some(0.0),
            ..FollowOptions::default()
        };
        assert!(opts.validate().is_err());
    }
}
