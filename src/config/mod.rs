//! Configuration module for the node poller
//!
//! This module provides the `ScrapeConfig` struct and its builder, which
//! validates source URL, threshold, interval and listen address.

// Sub-modules
pub mod builder;
pub mod types;

// Re-exports for public API
pub use builder::{ScrapeConfigBuilder, validate_source_url};
pub use types::ScrapeConfig;
