//! Simulator configuration read from the process environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    /// Scenario RON file; the bundled scenario is used when unset.
    pub scenario: Option<PathBuf>,
    /// Agent TOML file; [`thief_core::AgentConfig::default`] when unset.
    pub agent_config: Option<PathBuf>,
    /// Overrides the agent seed and seeds the world.
    pub seed: Option<u64>,
    /// Overrides the scenario tick count.
    pub ticks: Option<u32>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `THIEF_SCENARIO` - Scenario RON file (default: bundled `vault` scenario)
    /// - `THIEF_AGENT_CONFIG` - Agent TOML file (default: built-in defaults)
    /// - `THIEF_SEED` - Random seed for agent and world
    /// - `THIEF_TICKS` - Number of ticks to simulate (default: from scenario)
    /// - `THIEF_SESSION_ID` - Session identifier for the log directory (default: timestamp)
    /// - `THIEF_LOG_DIR` - Log root (default: platform cache directory)
    pub fn from_env() -> Self {
        Self {
            scenario: env::var("THIEF_SCENARIO").ok().map(PathBuf::from),
            agent_config: env::var("THIEF_AGENT_CONFIG").ok().map(PathBuf::from),
            seed: read_env::<u64>("THIEF_SEED"),
            ticks: read_env::<u32>("THIEF_TICKS"),
            session_id: env::var("THIEF_SESSION_ID").ok(),
            log_dir: env::var("THIEF_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
