//! Crate constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

// =============================================================================
// ZOOM RELEASE WINDOWS
// =============================================================================

/// How long zoom changes are tolerated after releasing an allow-zoom key (µs)
pub const ZOOM_RELEASE_KEY_US: u64 = 500_000;
/// How long zoom changes are tolerated after a zoom in/out command (µs)
pub const ZOOM_RELEASE_CMD_US: u64 = 550_000;
/// How long zoom changes are tolerated after a quick-look command (µs)
pub const ZOOM_RELEASE_QUICK_LOOK_US: u64 = 1_250_000;

// =============================================================================
// CAMERA
// =============================================================================

/// Zoom level the arbiter imposes until it has learned anything else
pub const DEFAULT_ZOOM_TARGET: f64 = 1.0;

/// Number of numbered quick-look view slots the host exposes
pub const QUICK_LOOK_SLOTS: u8 = 20;

// =============================================================================
// PLUGIN IDENTITY
// =============================================================================

/// Human-readable plugin name reported to the host at startup
pub const PLUGIN_NAME: &str = "zoomlock";
/// Reverse-DNS plugin signature reported to the host at startup
pub const PLUGIN_SIGNATURE: &str = "zoomlock.camera.arbiter";
/// One-line plugin description reported to the host at startup
pub const PLUGIN_DESCRIPTION: &str = "Suppresses unintended camera zoom drift";
