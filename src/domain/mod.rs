//! Domain layer containing the analysis logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects (scores, percentages, criteria, drivers)
//! - `signals` - Structural and textual facts extracted from a page
//! - `judgment` - AI judgment and auxiliary text metrics
//! - `scoring` - Main criteria, behavioral driver and persona scorers
//! - `report` - The aggregate analysis report
//!
//! Nothing in this layer performs I/O.

pub mod foundation;
pub mod judgment;
pub mod report;
pub mod scoring;
pub mod signals;
