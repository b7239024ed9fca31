//! One-frame rigid-body pose extrapolation.
//!
//! Applied when a clamp fires: the zoom rewrite replaces the host's pose for
//! the frame wholesale, so the rest of the camera motion must be carried
//! forward by hand or the craft appears to stall for one frame.

use crate::pose::CameraPose;
use crate::telemetry::MotionSample;

/// Advance the pose by one frame of rigid-body motion.
///
/// Position advances by `v*dt + 0.5*a*dt^2` per axis, orientation by
/// `rate*dt` per axis, using the host-reported frame delta. The sample is
/// taken from the current frame even though the prediction lands one frame
/// ahead; that extrapolation is intentional and must not be re-centered.
pub fn advance_one_frame(pose: &mut CameraPose, motion: &MotionSample) {
    let dt = motion.dt;

    pose.position += motion.velocity * dt + 0.5 * motion.acceleration * dt * dt;

    pose.roll += motion.roll_rate * dt;
    pose.pitch += motion.pitch_rate * dt;
    pose.heading += motion.heading_rate * dt;
}
