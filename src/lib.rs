//! StartupBoost - startup landing-page analyzer.
//!
//! Fetches a page, extracts structural signals from its markup, asks a
//! language model for a qualitative judgment, and blends both into scored
//! criteria, behavioral-driver and persona breakdowns.
//!
//! Architecture follows hexagonal (ports & adapters) pattern:
//! - `domain` - Signal extraction, judgment model and the pure scorers
//! - `ports` - Interfaces to the page fetcher, LLM and text-metrics service
//! - `adapters` - reqwest/axum implementations of those ports
//! - `application` - The analysis pipeline
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
