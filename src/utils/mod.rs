//! Small host-facing utilities
//!
//! Content hashing for ephemeral identifiers, platform detection, and
//! keyboard modifier handling.

pub mod hash;
pub mod keyboard;
pub mod platform;

pub use hash::{generate_temp_unique_id, UniqueIdError};
pub use keyboard::{is_command_or_ctrl_down, is_command_or_ctrl_down_on, ModifierState};
