//! Configuration module for expense-dash
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DashPaths;
pub use settings::Settings;
