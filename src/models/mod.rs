//! Models module for the voice synthesis editor
//!
//! This module contains the data models the editor shares with the
//! synthesis engine and the GUI shell: prosody units, character/style
//! metadata, toolbar button metadata, and slider parameter definitions.

pub mod accent;
pub mod character;
pub mod params;
pub mod toolbar;

// Re-export commonly used types
pub use accent::*;
pub use character::*;
pub use params::*;
pub use toolbar::*;
