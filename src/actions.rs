//! Host action identifiers and the fixed binding table.
//!
//! The host dispatches commands by name; we keep the full set of names the
//! arbiter listens to as a fixed enumerated table so the bindings are
//! inspectable and the enable/disable pairing is exhaustively testable.

use crate::constants::QUICK_LOOK_SLOTS;

/// Phase of a host command event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandPhase {
    /// Key/button was just pressed
    Begin,
    /// Key/button is being held
    Continue,
    /// Key/button was released
    End,
}

/// An action the arbiter binds a handler to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    /// One of the host's numbered quick-look view slots
    QuickLook(u8),
    /// Plain zoom in
    ZoomIn,
    /// Plain zoom out
    ZoomOut,
    /// Fast zoom in
    ZoomInFast,
    /// Fast zoom out
    ZoomOutFast,
    /// Slow zoom in
    ZoomInSlow,
    /// Slow zoom out
    ZoomOutSlow,
    /// Custom action: allow zooming while key/button is held
    AllowZoomHold,
    /// Custom action: toggle allow zooming
    AllowZoomToggle,
}

impl ActionId {
    /// The host-facing command name this action binds to.
    /// Quick-look slot indices are rendered into the name once, at bind time.
    pub fn command_name(&self) -> String {
        match self {
            ActionId::QuickLook(slot) => format!("sim/view/quick_look_{}", slot),
            ActionId::ZoomIn => "sim/general/zoom_in".to_string(),
            ActionId::ZoomOut => "sim/general/zoom_out".to_string(),
            ActionId::ZoomInFast => "sim/general/zoom_in_fast".to_string(),
            ActionId::ZoomOutFast => "sim/general/zoom_out_fast".to_string(),
            ActionId::ZoomInSlow => "sim/general/zoom_in_slow".to_string(),
            ActionId::ZoomOutSlow => "sim/general/zoom_out_slow".to_string(),
            ActionId::AllowZoomHold => "zoomlock/allow_zoom_hold".to_string(),
            ActionId::AllowZoomToggle => "zoomlock/allow_zoom_toggle".to_string(),
        }
    }

    /// Custom actions are created by us (with a label for key/button mapping
    /// UIs) rather than bound to a pre-existing host command.
    pub fn custom_label(&self) -> Option<&'static str> {
        match self {
            ActionId::AllowZoomHold => Some("Allow zooming while key/button is held"),
            ActionId::AllowZoomToggle => Some("Toggle allow zooming"),
            _ => None,
        }
    }

    pub fn is_quick_look(&self) -> bool {
        matches!(self, ActionId::QuickLook(_))
    }

    pub fn is_zoom_command(&self) -> bool {
        matches!(
            self,
            ActionId::ZoomIn
                | ActionId::ZoomOut
                | ActionId::ZoomInFast
                | ActionId::ZoomOutFast
                | ActionId::ZoomInSlow
                | ActionId::ZoomOutSlow
        )
    }
}

/// Every action the plugin binds, in binding order.
/// `enable` walks this table forward, `disable` walks the bound prefix in
/// reverse, so the two are exactly paired.
pub fn binding_table() -> Vec<ActionId> {
    let mut table = Vec::with_capacity(QUICK_LOOK_SLOTS as usize + 8);
    for slot in 0..QUICK_LOOK_SLOTS {
        table.push(ActionId::QuickLook(slot));
    }
    table.extend([
        ActionId::ZoomIn,
        ActionId::ZoomOut,
        ActionId::ZoomInFast,
        ActionId::ZoomOutFast,
        ActionId::ZoomInSlow,
        ActionId::ZoomOutSlow,
        ActionId::AllowZoomHold,
        ActionId::AllowZoomToggle,
    ]);
    table
}
