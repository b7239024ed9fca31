//! Scripted demo host.
//!
//! Drives the arbiter through the same per-frame and command callbacks a
//! real host adapter would, using a fixed-step clock and a scripted zoom
//! track: settle at the default zoom, zoom in under a zoom command, then
//! drift slowly and watch the clamp hold the line.

use tracing::info;

use zoomlock::{
    ActionId, CameraControl, CameraPose, Clock, CommandPhase, HostServices, PoseDisposition,
    Telemetry, ZoomlockPlugin,
};

/// 60 fps fixed step, in microseconds
const FRAME_STEP_US: u64 = 16_667;

struct ScriptedClock {
    now: u64,
}

impl Clock for ScriptedClock {
    fn now_micros(&self) -> u64 {
        self.now
    }
}

/// Straight-and-level cruise; only the frame delta matters for this script.
struct ScriptedTelemetry;

impl Telemetry for ScriptedTelemetry {
    fn view_is_external(&self) -> bool {
        false
    }
    fn velocity_x(&self) -> f64 {
        80.0
    }
    fn velocity_y(&self) -> f64 {
        0.0
    }
    fn velocity_z(&self) -> f64 {
        0.0
    }
    fn acceleration_x(&self) -> f64 {
        0.0
    }
    fn acceleration_y(&self) -> f64 {
        0.0
    }
    fn acceleration_z(&self) -> f64 {
        0.0
    }
    fn roll_rate(&self) -> f64 {
        0.0
    }
    fn pitch_rate(&self) -> f64 {
        0.0
    }
    fn heading_rate(&self) -> f64 {
        0.0
    }
    fn frame_dt(&self) -> f64 {
        FRAME_STEP_US as f64 / 1_000_000.0
    }
}

/// Minimal host: accepts every registration, counts control claims.
#[derive(Default)]
struct SimHost {
    claims: usize,
}

impl HostServices for SimHost {
    fn bind_command(&mut self, _action: ActionId, _name: &str) -> Result<(), String> {
        Ok(())
    }
    fn unbind_command(&mut self, _action: ActionId, _name: &str) {}
    fn create_command(
        &mut self,
        _action: ActionId,
        name: &str,
        label: &str,
    ) -> Result<(), String> {
        info!(name, label, "created custom command");
        Ok(())
    }
    fn register_frame_hook(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn unregister_frame_hook(&mut self) {}
}

impl CameraControl for SimHost {
    fn claim_until_view_change(&mut self) {
        self.claims += 1;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    let mut plugin = ZoomlockPlugin::new();
    let info = plugin.start();
    info!(info.name, info.signature, "plugin started");

    let mut host = SimHost::default();
    plugin.enable(&mut host)?;

    let mut clock = ScriptedClock { now: 0 };
    let telemetry = ScriptedTelemetry;

    // What the host's own camera logic would put on screen each frame
    let mut host_zoom = 1.0;
    let mut clamped_frames = 0;

    for frame in 0..240u32 {
        clock.now += FRAME_STEP_US;

        // Frame 30: the user wheels in; the host ramps zoom toward 1.3
        if frame == 30 {
            plugin
                .arbiter_mut()
                .on_command(ActionId::ZoomIn, CommandPhase::Begin, &clock);
        }
        if (30..40).contains(&frame) {
            host_zoom += 0.03;
        }

        // Frame 120 onward: slow drift the user never asked for
        if frame >= 120 {
            host_zoom += 0.0005;
        }

        plugin.arbiter_mut().on_frame(&telemetry, &mut host);

        let mut pose = CameraPose {
            zoom: host_zoom,
            ..Default::default()
        };
        let disposition = plugin
            .arbiter_mut()
            .on_camera_pose(&mut pose, false, &clock, &telemetry);

        if disposition == PoseDisposition::Retain {
            // The arbiter overwrote the pose; the host renders the clamp
            host_zoom = pose.zoom;
            clamped_frames += 1;
        }
    }

    info!(
        claims = host.claims,
        clamped_frames,
        final_zoom = host_zoom,
        target = plugin.arbiter().zoom_target(),
        "script finished"
    );

    plugin.disable(&mut host);
    plugin.stop();
    Ok(())
}
