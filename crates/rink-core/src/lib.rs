//! rink-core
//!
//! Projection services for the rink calculator.
//! Depends on rink-domain. Pure computation: no clock reads, no storage, no terminal I/O.

pub mod error;
pub mod expense_service;
pub mod projection_service;
pub mod public_api;
pub mod revenue_service;
mod rounding;
pub mod season_service;
pub mod session_service;
pub mod time;

pub use error::CoreError;
pub use expense_service::*;
pub use projection_service::*;
pub use revenue_service::*;
pub use season_service::*;
pub use session_service::*;
pub use time::Clock;
