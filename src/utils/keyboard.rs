//! Keyboard modifier handling
//!
//! Shortcuts use Cmd on macOS and Ctrl everywhere else. The shell passes
//! the modifier flags of the DOM event; platform detection happens here.

use crate::utils::platform;

/// Modifier flags of a keyboard or mouse event
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierState {
    pub meta_key: bool,
    pub ctrl_key: bool,
}

/// Whether the primary command modifier for the given platform is down
pub fn is_command_or_ctrl_down_on(state: ModifierState, is_mac: bool) -> bool {
    if is_mac {
        state.meta_key
    } else {
        state.ctrl_key
    }
}

/// Whether the primary command modifier for the current platform is down
pub fn is_command_or_ctrl_down(state: ModifierState) -> bool {
    is_command_or_ctrl_down_on(state, platform::is_mac())
}
