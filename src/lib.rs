//! zoomlock: per-frame camera zoom arbitration.
//!
//! Intercepts a host simulator's camera pose once per frame and clamps zoom
//! changes the user did not ask for, while timed release windows let
//! mouse-wheel zooms, quick-look views and an explicit allow-zoom override
//! through. The host side (clock, telemetry, camera-control channel, command
//! dispatcher) is abstracted behind traits so the core runs identically under
//! a real host adapter or a scripted test harness.

pub mod actions;
pub mod arbiter;
pub mod constants;
pub mod pose;
pub mod prediction;
pub mod telemetry;

pub mod plugin;

pub use actions::{binding_table, ActionId, CommandPhase};
pub use arbiter::{CameraControl, PoseDisposition, ZoomArbiter};
pub use plugin::{EnableError, HostServices, PluginInfo, ZoomlockPlugin};
pub use pose::CameraPose;
pub use telemetry::{Clock, MotionSample, Telemetry};
