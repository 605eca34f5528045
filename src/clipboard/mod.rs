//! Clipboard support for the copy-report action
//!
//! Two backends: the OS clipboard via arboard, and OSC 52 escape sequences for
//! terminals where no system clipboard is reachable (SSH, headless). `Auto`
//! tries the system clipboard first and falls back to OSC 52.

mod osc52;
mod system;

use crate::config::ClipboardBackend;

/// Result type for clipboard operations
pub type ClipboardResult = Result<(), ClipboardError>;

/// Errors that can occur during clipboard operations
#[derive(Debug)]
pub enum ClipboardError {
    /// System clipboard is not available
    SystemUnavailable,
    /// Error writing to clipboard
    WriteError,
}

/// Copy text to the clipboard using the configured backend
pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> ClipboardResult {
    match backend {
        ClipboardBackend::System => system::copy(text),
        ClipboardBackend::Osc52 => osc52::copy(text),
        ClipboardBackend::Auto => system::copy(text).or_else(|_| osc52::copy(text)),
    }
}
