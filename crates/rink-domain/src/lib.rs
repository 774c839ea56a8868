//! rink-domain
//!
//! Pure domain models for the rink projection engine (schedules, pricing,
//! capacity, calendars, expenses, scenarios and projection results).
//! No I/O, no logging, no calculation services. Only data types and their invariants.

pub mod calendar;
pub mod capacity;
pub mod common;
pub mod error;
pub mod expense;
pub mod pricing;
pub mod projection;
pub mod scenario;
pub mod schedule;
pub mod seed;

pub use calendar::*;
pub use capacity::*;
pub use common::*;
pub use error::ValidationError;
pub use expense::*;
pub use pricing::*;
pub use projection::*;
pub use scenario::*;
pub use schedule::*;
