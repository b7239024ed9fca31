//! End-to-end frame script across the whole surface: lifecycle, per-frame
//! claim, command windows, learning, and the drift clamp.

use glam::DVec3;
use zoomlock::{
    ActionId, CameraControl, CameraPose, Clock, CommandPhase, HostServices, PoseDisposition,
    Telemetry, ZoomlockPlugin,
};

struct StepClock {
    now: u64,
}

impl Clock for StepClock {
    fn now_micros(&self) -> u64 {
        self.now
    }
}

struct CruiseTelemetry {
    external: bool,
}

impl Telemetry for CruiseTelemetry {
    fn view_is_external(&self) -> bool {
        self.external
    }
    fn velocity_x(&self) -> f64 {
        60.0
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
        0.02
    }
}

#[derive(Default)]
struct TestHost {
    claims: usize,
}

impl HostServices for TestHost {
    fn bind_command(&mut self, _action: ActionId, _name: &str) -> Result<(), String> {
        Ok(())
    }
    fn unbind_command(&mut self, _action: ActionId, _name: &str) {}
    fn create_command(
        &mut self,
        _action: ActionId,
        _name: &str,
        _label: &str,
    ) -> Result<(), String> {
        Ok(())
    }
    fn register_frame_hook(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn unregister_frame_hook(&mut self) {}
}

impl CameraControl for TestHost {
    fn claim_until_view_change(&mut self) {
        self.claims += 1;
    }
}

#[test]
fn zoom_session_learns_then_clamps_drift() {
    let mut plugin = ZoomlockPlugin::new();
    let mut host = TestHost::default();
    let telemetry = CruiseTelemetry { external: false };
    let mut clock = StepClock { now: 0 };

    plugin.start();
    plugin.enable(&mut host).unwrap();

    // Frame 1: claim control; host pose matches the default target
    clock.now = 20_000;
    plugin.arbiter_mut().on_frame(&telemetry, &mut host);
    assert_eq!(host.claims, 1);

    let mut pose = CameraPose::default();
    let disposition = plugin
        .arbiter_mut()
        .on_camera_pose(&mut pose, false, &clock, &telemetry);
    assert_eq!(disposition, PoseDisposition::Release);
    assert_eq!(pose.zoom, 1.0);

    // Frame 2: user zooms in; the command window makes it a learning frame
    clock.now = 40_000;
    plugin.arbiter_mut().on_frame(&telemetry, &mut host);
    assert_eq!(host.claims, 2);

    plugin
        .arbiter_mut()
        .on_command(ActionId::ZoomIn, CommandPhase::Begin, &clock);

    let mut pose = CameraPose {
        zoom: 1.3,
        ..Default::default()
    };
    let disposition = plugin
        .arbiter_mut()
        .on_camera_pose(&mut pose, false, &clock, &telemetry);
    assert_eq!(disposition, PoseDisposition::Release);
    assert_eq!(pose.zoom, 1.3);
    assert_eq!(plugin.arbiter().zoom_target(), 1.3);

    // Long after the window expired: mouse drift gets clamped, and the
    // rest of the pose is advanced by one predicted frame of motion
    clock.now = 40_000 + 600_000;
    plugin.arbiter_mut().on_frame(&telemetry, &mut host);

    let mut pose = CameraPose {
        zoom: 1.3001,
        ..Default::default()
    };
    let disposition = plugin
        .arbiter_mut()
        .on_camera_pose(&mut pose, false, &clock, &telemetry);
    assert_eq!(disposition, PoseDisposition::Retain);
    assert_eq!(pose.zoom, 1.3);
    assert_eq!(pose.position, DVec3::new(60.0 * 0.02, 0.0, 0.0));

    plugin.disable(&mut host);
    plugin.stop();
}

#[test]
fn external_view_suspends_claiming_until_back_inside() {
    let mut plugin = ZoomlockPlugin::new();
    let mut host = TestHost::default();
    let clock = StepClock { now: 0 };

    // Outside view: frames come and go, control is never claimed
    let outside = CruiseTelemetry { external: true };
    for _ in 0..5 {
        plugin.arbiter_mut().on_frame(&outside, &mut host);
    }
    assert_eq!(host.claims, 0);
    assert!(!plugin.arbiter().is_controlling());

    // Back inside: the next frame claims again
    let inside = CruiseTelemetry { external: false };
    plugin.arbiter_mut().on_frame(&inside, &mut host);
    assert_eq!(host.claims, 1);

    // Host revokes mid-session; the arbiter lets go immediately
    let mut pose = CameraPose::default();
    let disposition = plugin
        .arbiter_mut()
        .on_camera_pose(&mut pose, true, &clock, &inside);
    assert_eq!(disposition, PoseDisposition::Release);
    assert!(!plugin.arbiter().is_controlling());
}

#[test]
fn hold_override_survives_frames_until_released() {
    let mut plugin = ZoomlockPlugin::new();
    let mut host = TestHost::default();
    let telemetry = CruiseTelemetry { external: false };
    let mut clock = StepClock { now: 0 };

    plugin
        .arbiter_mut()
        .on_command(ActionId::AllowZoomHold, CommandPhase::Begin, &clock);

    // Held across many frames: every new zoom value is learned
    for frame in 1..=10u64 {
        clock.now = frame * 20_000;
        plugin
            .arbiter_mut()
            .on_command(ActionId::AllowZoomHold, CommandPhase::Continue, &clock);
        plugin.arbiter_mut().on_frame(&telemetry, &mut host);

        let mut pose = CameraPose {
            zoom: 1.0 + frame as f64 * 0.1,
            ..Default::default()
        };
        let disposition = plugin
            .arbiter_mut()
            .on_camera_pose(&mut pose, false, &clock, &telemetry);
        assert_eq!(disposition, PoseDisposition::Release);
    }
    assert_eq!(plugin.arbiter().zoom_target(), 2.0);

    // Release arms the grace window; a change inside it still passes
    clock.now = 220_000;
    plugin
        .arbiter_mut()
        .on_command(ActionId::AllowZoomHold, CommandPhase::End, &clock);

    clock.now = 240_000;
    let mut pose = CameraPose {
        zoom: 2.05,
        ..Default::default()
    };
    let disposition = plugin
        .arbiter_mut()
        .on_camera_pose(&mut pose, false, &clock, &telemetry);
    assert_eq!(disposition, PoseDisposition::Release);
    assert_eq!(plugin.arbiter().zoom_target(), 2.05);

    // Past the grace window the clamp is back
    clock.now = 240_000 + 600_000;
    let mut pose = CameraPose {
        zoom: 2.2,
        ..Default::default()
    };
    let disposition = plugin
        .arbiter_mut()
        .on_camera_pose(&mut pose, false, &clock, &telemetry);
    assert_eq!(disposition, PoseDisposition::Retain);
    assert_eq!(pose.zoom, 2.05);
}
