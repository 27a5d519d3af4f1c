//! Basename extraction for display purposes
//!
//! The shell shows the project file name in the title bar. Paths arrive
//! as plain strings from the host side, so this cannot go through
//! `std::path` (a Windows path must parse correctly even when the module
//! itself runs inside a browser engine).

use once_cell::sync::Lazy;
use regex::Regex;

// Device prefix (drive letter or UNC share), optional root separator, tail.
static SPLIT_DEVICE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z]:|[\\/]{2}[^\\/]+[\\/]+[^\\/]+)?([\\/])?([\s\S]*?)$")
        .expect("valid regex")
});

// Directory part, basename (with extension group), trailing separators.
static SPLIT_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([\s\S]*?)((?:\.{1,2}|[^\\/]+?|)(\.[^./\\]*|))(?:[\\/]*)$")
        .expect("valid regex")
});

/// Path flavor of the host operating system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    Posix,
    Windows,
}

/// Final path component, without trailing separators.
///
/// Returns an empty string for degenerate input instead of failing.
pub fn base_name(file_path: &str, style: PathStyle) -> String {
    match style {
        PathStyle::Posix => posix_base_name(file_path),
        PathStyle::Windows => windows_base_name(file_path),
    }
}

/// Basename using the path style of the platform the module runs on
pub fn base_name_for_platform(file_path: &str) -> String {
    let style = if crate::utils::platform::is_windows() {
        PathStyle::Windows
    } else {
        PathStyle::Posix
    };
    base_name(file_path, style)
}

fn posix_base_name(file_path: &str) -> String {
    file_path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("")
        .to_string()
}

fn windows_base_name(file_path: &str) -> String {
    let tail = match SPLIT_DEVICE.captures(file_path) {
        Some(caps) => caps.get(3).map_or("", |m| m.as_str()).to_string(),
        None => return String::new(),
    };

    match SPLIT_TAIL.captures(&tail) {
        Some(caps) => caps.get(2).map_or("", |m| m.as_str()).to_string(),
        None => String::new(),
    }
}
