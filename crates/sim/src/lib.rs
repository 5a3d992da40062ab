//! Headless host for the thief agent.
//!
//! [`World`] implements the agent's sensor contract over a loaded
//! [`thief_content::Scenario`]; [`Simulation`] drives the tick loop and
//! reports the outcome. The `thief-sim` binary wires both to environment
//! configuration and file logging.
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;
pub mod world;

pub use config::SimConfig;
pub use error::SimError;
pub use runner::{SimReport, Simulation};
pub use world::{SCENT_TTL, Saver, StepOutcome, World};

/// The scenario bundled with the binary.
pub const DEFAULT_SCENARIO: &str = include_str!("../scenarios/vault.ron");
