//! Opens the booking page in the system browser
//!
//! Finds a platform opener on PATH and spawns it detached so the TUI keeps
//! running underneath.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::calc::BOOKING_URL;
use crate::error::AuditError;

#[cfg(target_os = "macos")]
const OPENERS: &[&str] = &["open"];

#[cfg(target_os = "windows")]
const OPENERS: &[&str] = &["explorer"];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPENERS: &[&str] = &["xdg-open", "wslview", "sensible-browser"];

/// Open the booking page, returning the opener that was used
pub fn open_booking_page() -> Result<PathBuf, AuditError> {
    let opener = find_opener().ok_or_else(|| AuditError::OpenerNotFound(OPENERS.join(", ")))?;

    Command::new(&opener)
        .arg(BOOKING_URL)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    log::debug!("Opened {} via {}", BOOKING_URL, opener.display());
    Ok(opener)
}

/// First opener candidate found on PATH
fn find_opener() -> Option<PathBuf> {
    OPENERS.iter().find_map(|name| which::which(name).ok())
}
