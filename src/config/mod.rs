//! Configuration module for fintrack
//!
//! - Platform-aware path resolution
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
