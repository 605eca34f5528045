pub mod app;
pub mod calc;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod format;
pub mod help;
pub mod link;
pub mod notification;
pub mod report;
pub mod widgets;
