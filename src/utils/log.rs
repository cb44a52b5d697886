//! Browser console logging.
//!
//! Every message is prefixed with the emitting widget so page logs stay
//! readable with several widgets active.

use web_sys::console;

/// Debug-level message (hidden by default in most consoles).
pub fn debug(widget: &str, message: &str) {
    console::debug_1(&format!("[{widget}] {message}").into());
}

/// Recoverable problem: the widget degraded or fell back.
pub fn warn(widget: &str, message: &str) {
    console::warn_1(&format!("[{widget}] {message}").into());
}

/// Failure the user was told about.
pub fn error(widget: &str, message: &str) {
    console::error_1(&format!("[{widget}] {message}").into());
}
