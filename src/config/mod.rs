//! Startup configuration: clipboard backend choice and the calculator's
//! starting values. Loaded once; nothing here changes at runtime.

mod loader;
mod types;

pub use loader::{config_path, load};
pub use types::{ClipboardBackend, ClipboardConfig, Config, DefaultsConfig};
