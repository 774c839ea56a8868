//! rink-config
//!
//! Persistent user preferences for the projection calculator.
//! `Config` holds the settings; `ConfigManager` reads and writes them as JSON.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
