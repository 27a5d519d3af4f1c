//! Host platform detection
//!
//! Inside the web view the only signal is the navigator platform string;
//! in native builds (tests, tooling) the compile-time OS is authoritative.

#[cfg(target_arch = "wasm32")]
fn navigator_platform() -> Option<String> {
    web_sys::window().and_then(|window| window.navigator().platform().ok())
}

#[cfg(target_arch = "wasm32")]
pub fn is_mac() -> bool {
    navigator_platform().is_some_and(|platform| platform.starts_with("Mac"))
}

#[cfg(target_arch = "wasm32")]
pub fn is_windows() -> bool {
    navigator_platform().is_some_and(|platform| platform.starts_with("Win"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_mac() -> bool {
    std::env::consts::OS == "macos"
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_windows() -> bool {
    std::env::consts::OS == "windows"
}
