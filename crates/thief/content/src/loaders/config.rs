//! Agent configuration loader.

use std::path::Path;

use thief_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for agent configuration from TOML files.
///
/// Missing keys keep their [`AgentConfig::default`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        let config: AgentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse agent config TOML: {}", e))?;

        if config.cooldown_min > config.cooldown_max {
            anyhow::bail!(
                "cooldown_min ({}) exceeds cooldown_max ({})",
                config.cooldown_min,
                config.cooldown_max
            );
        }
        if !config.fallback_objective.in_bounds() {
            anyhow::bail!(
                "fallback_objective {} lies outside the grid",
                config.fallback_objective
            );
        }

        tracing::debug!(?config, "loaded agent config");
        Ok(config)
    }
}
