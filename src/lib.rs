#![doc(test(attr(deny(warnings))))]

//! Rink Projection turns an ice rink's operating parameters into monthly and
//! yearly revenue, expense, and profit figures.
//!
//! The calculation itself lives in `rink_core`; this crate wires it to user
//! configuration, the system clock, and tracing.

pub mod clock;
pub mod errors;
pub mod scenario_manager;
pub mod utils;

pub use clock::{FixedClock, SystemClock};
pub use errors::{ProjectionError, Result};
pub use rink_config::{Config, ConfigManager};
pub use rink_core::{Clock, CoreError, ProjectionService};
pub use rink_domain as domain;
pub use scenario_manager::ScenarioManager;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    init_with_config(&Config::default());
}

/// Reads the user's stored preferences from the platform config directory.
pub fn load_user_config() -> Result<Config> {
    Ok(ConfigManager::default_location().load()?)
}

/// Initializes tracing with any extra filter directives from `config`.
pub fn init_with_config(config: &Config) {
    utils::init_tracing(config.log_filter.as_deref());
    tracing::info!("Rink projection tracing initialized.");
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
