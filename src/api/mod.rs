//! Voice Synthesis Editor WASM API
//!
//! The JavaScript-facing surface of the module, organized by functional
//! domain:
//!
//! - `helpers`: shared serialization, validation and error handling
//! - `text`: file-name templating, notation stripping, basename
//! - `tuning`: accent phrase reconciliation
//! - `characters`: character/style filtering and labels
//! - `toolbar`: toolbar metadata, slider parameters, modifier keys
//!
//! Everything here is a thin wrapper: deserialize with a context-tagged
//! error, call the pure routine, serialize back.

pub mod helpers;

pub mod characters;
pub mod text;
pub mod toolbar;
pub mod tuning;

pub use characters::*;
pub use text::*;
pub use toolbar::*;
pub use tuning::*;
