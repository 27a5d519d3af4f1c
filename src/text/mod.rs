//! Text utilities for the editor
//!
//! Everything here is a pure, synchronous string transform: file-name
//! templating, notation stripping, and basename extraction. Malformed
//! input never fails; a pattern that does not match simply leaves the
//! text unchanged.

pub mod filename;
pub mod notation;
pub mod path;

pub use filename::{
    build_audio_file_name, current_date_string, replace_tag, sanitize_file_name,
    FileNameVariables, ReplaceTag, DEFAULT_AUDIO_FILE_BASE_NAME_TEMPLATE,
    DEFAULT_AUDIO_FILE_NAME_TEMPLATE,
};
pub use notation::{extract_export_text, extract_yomi_text, ExtractOptions};
pub use path::{base_name, base_name_for_platform, PathStyle};
