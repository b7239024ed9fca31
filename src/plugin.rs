//! Plugin lifecycle glue around the arbitration core.
//!
//! Mirrors the host's start/enable/disable/stop hooks. Enable binds the full
//! action table and registers the per-frame hook; any registration failure
//! aborts activation and unwinds the bindings already made, because a
//! partially bound action set would silently fail to inhibit zoom on some
//! paths. Disable unbinds exactly what enable bound.

use thiserror::Error;
use tracing::{debug, info};

use crate::actions::{binding_table, ActionId};
use crate::arbiter::ZoomArbiter;
use crate::constants::{PLUGIN_DESCRIPTION, PLUGIN_NAME, PLUGIN_SIGNATURE};

/// Identity metadata reported to the host at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    pub name: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}

/// Fatal activation faults. None of these are recoverable at runtime; the
/// host should refuse to activate the plugin.
#[derive(Debug, Error)]
pub enum EnableError {
    #[error("failed to bind host command `{name}`: {reason}")]
    BindFailed { name: String, reason: String },
    #[error("failed to create custom command `{name}`: {reason}")]
    CreateFailed { name: String, reason: String },
    #[error("failed to register per-frame hook: {0}")]
    FrameHookFailed(String),
}

/// Registration surface the host adapter provides.
///
/// Binding routes the named command's phase events to
/// [`ZoomArbiter::on_command`] for the given action; the frame hook routes
/// the per-frame trigger to [`ZoomArbiter::on_frame`].
pub trait HostServices {
    /// Bind a handler to an existing host command.
    fn bind_command(&mut self, action: ActionId, name: &str) -> Result<(), String>;

    /// Remove a binding made by `bind_command` or `create_command`.
    fn unbind_command(&mut self, action: ActionId, name: &str);

    /// Create a process-defined command with a descriptive label (for the
    /// host's key/button mapping UI) and bind a handler to it.
    fn create_command(&mut self, action: ActionId, name: &str, label: &str)
        -> Result<(), String>;

    /// Register the per-frame trigger.
    fn register_frame_hook(&mut self) -> Result<(), String>;

    /// Remove the per-frame trigger.
    fn unregister_frame_hook(&mut self);
}

/// The plugin: one arbiter plus the bookkeeping for paired bind/unbind.
pub struct ZoomlockPlugin {
    arbiter: ZoomArbiter,
    bound: Vec<ActionId>,
    frame_hook: bool,
}

impl ZoomlockPlugin {
    pub fn new() -> Self {
        Self {
            arbiter: ZoomArbiter::new(),
            bound: Vec::new(),
            frame_hook: false,
        }
    }

    /// The arbitration core the host adapter routes its callbacks to.
    pub fn arbiter(&self) -> &ZoomArbiter {
        &self.arbiter
    }

    pub fn arbiter_mut(&mut self) -> &mut ZoomArbiter {
        &mut self.arbiter
    }

    /// Actions currently bound (empty unless enabled).
    pub fn bound_actions(&self) -> &[ActionId] {
        &self.bound
    }

    /// Startup hook: report identity metadata to the host.
    pub fn start(&self) -> PluginInfo {
        info!("starting {}", PLUGIN_NAME);
        PluginInfo {
            name: PLUGIN_NAME,
            signature: PLUGIN_SIGNATURE,
            description: PLUGIN_DESCRIPTION,
        }
    }

    /// Activation hook: register the frame hook and bind the action table.
    ///
    /// On any failure, everything registered so far is unwound before the
    /// error is returned, leaving the host clean.
    pub fn enable(&mut self, host: &mut dyn HostServices) -> Result<(), EnableError> {
        host.register_frame_hook()
            .map_err(EnableError::FrameHookFailed)?;
        self.frame_hook = true;

        for action in binding_table() {
            let name = action.command_name();
            let result = match action.custom_label() {
                Some(label) => host
                    .create_command(action, &name, label)
                    .map_err(|reason| EnableError::CreateFailed {
                        name: name.clone(),
                        reason,
                    }),
                None => {
                    host.bind_command(action, &name)
                        .map_err(|reason| EnableError::BindFailed {
                            name: name.clone(),
                            reason,
                        })
                }
            };
            if let Err(err) = result {
                self.unwind(host);
                return Err(err);
            }
            self.bound.push(action);
        }

        info!(actions = self.bound.len(), "enabled");
        Ok(())
    }

    /// Deactivation hook: the exact inverse of `enable`.
    pub fn disable(&mut self, host: &mut dyn HostServices) {
        self.unwind(host);
        debug!("disabled");
    }

    /// Shutdown hook. Nothing to tear down beyond what disable already did.
    pub fn stop(&self) {}

    /// Inter-plugin message channel. Unused.
    pub fn receive_message(&mut self, _from: i32, _message: i32) {}

    fn unwind(&mut self, host: &mut dyn HostServices) {
        while let Some(action) = self.bound.pop() {
            host.unbind_command(action, &action.command_name());
        }
        if self.frame_hook {
            host.unregister_frame_hook();
            self.frame_hook = false;
        }
    }
}

impl Default for ZoomlockPlugin {
    fn default() -> Self {
        Self::new()
    }
}
