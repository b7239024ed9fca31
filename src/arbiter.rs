//! The camera arbitration core.
//!
//! Decides, once per rendered frame, whether the host's camera zoom proceeds
//! or gets clamped back to the remembered target. Three timed inhibition
//! windows (quick-look, zoom command, allow-zoom release) and a hold/toggle
//! flag carve out the moments where zooming is intentional; everything else
//! is treated as drift and rewritten.
//!
//! All three entry points run on the host's single render thread, never
//! concurrently and never re-entrantly, so the state is plain owned data.

use tracing::{debug, trace};

use crate::actions::{ActionId, CommandPhase};
use crate::constants::{
    DEFAULT_ZOOM_TARGET, ZOOM_RELEASE_CMD_US, ZOOM_RELEASE_KEY_US, ZOOM_RELEASE_QUICK_LOOK_US,
};
use crate::pose::CameraPose;
use crate::prediction::advance_one_frame;
use crate::telemetry::{Clock, MotionSample, Telemetry};

/// Camera-control channel back to the host.
pub trait CameraControl {
    /// Request exclusive camera-pose authority, valid until the view changes.
    /// The host answers by routing pose callbacks to the arbiter and may
    /// revoke at any time via the pose callback's losing-control flag.
    fn claim_until_view_change(&mut self);
}

/// What the pose callback tells the host to do with our authority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseDisposition {
    /// Keep routing pose callbacks to us; the host must not apply its own
    /// zoom change this frame
    Retain,
    /// Hand camera authority back to host-native behavior until the next
    /// frame reclaims it
    Release,
}

impl PoseDisposition {
    pub fn retains_control(self) -> bool {
        matches!(self, PoseDisposition::Retain)
    }
}

/// Per-frame zoom arbitration state machine.
///
/// One instance per camera session; the host adapter owns it and feeds it
/// `on_frame`, `on_camera_pose` and `on_command` in that cooperative order.
pub struct ZoomArbiter {
    /// The zoom level currently considered authoritative
    zoom_target: f64,
    /// True while an allow-zoom hold or toggle is active
    allow_zoom: bool,
    /// Absolute time until which zoom changes are tolerated (None = inactive)
    release_deadline: Option<u64>,
    /// True while we hold exclusive camera authority for this view session
    controlling: bool,
}

impl ZoomArbiter {
    pub fn new() -> Self {
        Self {
            zoom_target: DEFAULT_ZOOM_TARGET,
            allow_zoom: false,
            release_deadline: None,
            controlling: false,
        }
    }

    /// The zoom level the arbiter will re-impose while inhibiting.
    pub fn zoom_target(&self) -> f64 {
        self.zoom_target
    }

    pub fn allow_zoom(&self) -> bool {
        self.allow_zoom
    }

    pub fn release_deadline(&self) -> Option<u64> {
        self.release_deadline
    }

    /// True while we hold exclusive camera authority.
    pub fn is_controlling(&self) -> bool {
        self.controlling
    }

    /// Per-frame hook, invoked before the frame's camera pose is finalized.
    ///
    /// Claims exclusive camera authority if we do not already hold it.
    /// Never claims while an external view is active. Idempotent.
    pub fn on_frame(&mut self, telemetry: &dyn Telemetry, camera: &mut dyn CameraControl) {
        if telemetry.view_is_external() {
            return;
        }
        if !self.controlling {
            camera.claim_until_view_change();
            self.controlling = true;
            trace!("claimed camera control");
        }
    }

    /// Pose callback, invoked by the host whenever it needs the
    /// authoritative camera pose.
    ///
    /// Evaluates the arbitration state machine: honor revocation, learn the
    /// host's zoom while a window is open, clamp unauthorized changes back
    /// to the target, or release quietly when nothing changed.
    pub fn on_camera_pose(
        &mut self,
        pose: &mut CameraPose,
        losing_control: bool,
        clock: &dyn Clock,
        telemetry: &dyn Telemetry,
    ) -> PoseDisposition {
        if losing_control {
            self.controlling = false;
            debug!("camera control revoked by host");
            return PoseDisposition::Release;
        }

        let zoom = pose.zoom;
        let now = clock.now_micros();
        let window_open = self.release_deadline.is_some_and(|deadline| now < deadline);

        if self.allow_zoom || window_open {
            // Learning phase: follow whatever the host/user is doing
            self.zoom_target = zoom;
        } else if zoom != self.zoom_target {
            // Unauthorized change: clamp, and carry the rest of the camera
            // motion forward one frame so only the zoom axis is affected
            debug!(zoom, target = self.zoom_target, "clamping zoom drift");
            pose.zoom = self.zoom_target;
            advance_one_frame(pose, &MotionSample::read(telemetry));
            self.release_deadline = None;
            return PoseDisposition::Retain;
        }

        self.controlling = false;
        PoseDisposition::Release
    }

    /// Command handler for every bound action.
    ///
    /// Runs independently of frame timing; windows are armed as absolute
    /// deadlines so interleaving between a frame's hooks is harmless.
    pub fn on_command(&mut self, action: ActionId, phase: CommandPhase, clock: &dyn Clock) {
        let now = clock.now_micros();

        if action.is_quick_look() {
            // Every phase refreshes the window, so a held quick-look keeps
            // its window alive until released
            self.release_deadline = Some(now + ZOOM_RELEASE_QUICK_LOOK_US);
        } else if action.is_zoom_command() {
            self.release_deadline = Some(now + ZOOM_RELEASE_CMD_US);
        } else if action == ActionId::AllowZoomHold {
            match phase {
                CommandPhase::Begin | CommandPhase::Continue => {
                    self.allow_zoom = true;
                }
                CommandPhase::End => {
                    self.allow_zoom = false;
                    self.release_deadline = Some(now + ZOOM_RELEASE_KEY_US);
                }
            }
        } else if action == ActionId::AllowZoomToggle {
            if phase == CommandPhase::Begin {
                self.allow_zoom = !self.allow_zoom;
                debug!(allow_zoom = self.allow_zoom, "allow-zoom toggled");
                if !self.allow_zoom {
                    self.release_deadline = Some(now + ZOOM_RELEASE_KEY_US);
                }
            }
        }
    }
}

impl Default for ZoomArbiter {
    fn default() -> Self {
        Self::new()
    }
}
