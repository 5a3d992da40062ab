//! Scenario and agent configuration content for the thief simulator.
//!
//! Scenarios are RON files describing a grid layout as text rows; agent
//! tuning lives in TOML files deserialized straight into
//! [`thief_core::AgentConfig`].
pub mod loaders;
pub mod scenario;

pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
pub use scenario::{LayoutError, Scenario, Tile};
