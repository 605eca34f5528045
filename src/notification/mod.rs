//! Transient status messages (copy confirmation, opener feedback)
//!
//! A message is shown in the footer until the next key press clears it.

mod render;
mod state;

pub use render::render_notification;
pub use state::{NotificationState, Severity};
