pub mod config;
pub mod error;
pub mod format;
pub mod list;
pub mod navigation;
