//! The mutable camera pose struct shared with the host.

use glam::DVec3;

use crate::constants::DEFAULT_ZOOM_TARGET;

/// Camera pose as the host reads and writes it each frame.
///
/// Angles are in degrees, matching the host's convention. The arbiter only
/// ever rewrites `zoom`, plus a one-frame motion advance of the other fields
/// when a clamp fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world coordinates
    pub position: DVec3,
    /// Roll angle
    pub roll: f64,
    /// Pitch angle
    pub pitch: f64,
    /// Heading angle
    pub heading: f64,
    /// Zoom factor (1.0 = unzoomed)
    pub zoom: f64,
}

impl CameraPose {
    pub fn new(position: DVec3, roll: f64, pitch: f64, heading: f64, zoom: f64) -> Self {
        Self {
            position,
            roll,
            pitch,
            heading,
            zoom,
        }
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            roll: 0.0,
            pitch: 0.0,
            heading: 0.0,
            zoom: DEFAULT_ZOOM_TARGET,
        }
    }
}
