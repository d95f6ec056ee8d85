//! Configuration module for rebranding
//!
//! This module provides the `RebrandConfig` struct and its builder. The
//! defaults reproduce the fixed heuristic lists; a JSON file can override any
//! subset of them.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::RebrandConfigBuilder;
pub use types::RebrandConfig;
