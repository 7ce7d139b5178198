//! Foundation module - shared value objects and taxonomies.
//!
//! These types are used across the signal, judgment and scoring modules.

mod behavioral_driver;
mod criterion;
mod errors;
mod percentage;
mod score;

pub use behavioral_driver::{BehavioralDriver, DriverPersona};
pub use criterion::Criterion;
pub use errors::ValidationError;
pub use percentage::Percentage;
pub use score::Score;
