//! Critically damped smoothing toward a moving target.
//!
//! Unlike a plain lerp, the damper carries a velocity between calls, so the
//! motion eases out of rest, follows a moving goal without jerking, and
//! settles without overshooting.

use glam::Vec3;

/// Shortest smooth time accepted; smaller values are clamped to this.
pub const MIN_SMOOTH_TIME: f32 = 1.0e-4;

/// Move `current` toward `target` over roughly `smooth_time` seconds.
///
/// `velocity` is the damper's state and must be kept by the caller between
/// calls. `max_speed` caps the speed of approach (`None` = unbounded).
/// A zero `delta_time` leaves `current` unchanged.
///
/// Uses the rational approximation of `exp(-omega * dt)` for a critically
/// damped spring with `omega = 2 / smooth_time`.
#[must_use]
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: Option<f32>,
    delta_time: f32,
) -> Vec3 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let delta_time = delta_time.max(0.0);
    let omega = 2.0 / smooth_time;

    let x = omega * delta_time;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let mut change = current - target;
    if let Some(max_speed) = max_speed {
        change = change.clamp_length_max(max_speed.max(0.0) * smooth_time);
    }
    let clamped_target = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = clamped_target + (change + temp) * decay;

    // Never pass the goal.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }

    output
}
