//! Read-only host collaborators: the monotonic clock and the simulation
//! telemetry scalars the arbiter polls each frame.

use glam::DVec3;

/// Monotonic microsecond clock.
///
/// All inhibition windows are absolute deadlines on this clock, not
/// frame-counted, so command events may interleave anywhere between frames
/// without breaking the state machine.
pub trait Clock {
    fn now_micros(&self) -> u64;
}

/// Polled simulation telemetry.
///
/// Linear units are meters and seconds; angular rates are degrees per second
/// in the same roll/pitch/heading convention as [`crate::pose::CameraPose`].
pub trait Telemetry {
    /// True while an external/outside view is active
    fn view_is_external(&self) -> bool;

    fn velocity_x(&self) -> f64;
    fn velocity_y(&self) -> f64;
    fn velocity_z(&self) -> f64;

    fn acceleration_x(&self) -> f64;
    fn acceleration_y(&self) -> f64;
    fn acceleration_z(&self) -> f64;

    fn roll_rate(&self) -> f64;
    fn pitch_rate(&self) -> f64;
    fn heading_rate(&self) -> f64;

    /// Duration of the current simulation frame, in seconds
    fn frame_dt(&self) -> f64;
}

/// One frame's worth of motion scalars, snapshotted from [`Telemetry`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub velocity: DVec3,
    pub acceleration: DVec3,
    pub roll_rate: f64,
    pub pitch_rate: f64,
    pub heading_rate: f64,
    pub dt: f64,
}

impl MotionSample {
    /// Snapshot the current frame's motion state.
    pub fn read(telemetry: &dyn Telemetry) -> Self {
        Self {
            velocity: DVec3::new(
                telemetry.velocity_x(),
                telemetry.velocity_y(),
                telemetry.velocity_z(),
            ),
            acceleration: DVec3::new(
                telemetry.acceleration_x(),
                telemetry.acceleration_y(),
                telemetry.acceleration_z(),
            ),
            roll_rate: telemetry.roll_rate(),
            pitch_rate: telemetry.pitch_rate(),
            heading_rate: telemetry.heading_rate(),
            dt: telemetry.frame_dt(),
        }
    }
}
