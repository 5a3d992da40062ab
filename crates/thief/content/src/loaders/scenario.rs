//! Scenario loader.
//!
//! Reads RON files of the form:
//!
//! ```text
//! (
//!     name: "vault",
//!     ticks: 400,
//!     saver_coins: 5,
//!     rows: [
//!         "T.............................",
//!         // 29 more rows of 30 glyphs
//!     ],
//! )
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

const DEFAULT_SAVER_COINS: u32 = 5;

fn default_saver_coins() -> u32 {
    DEFAULT_SAVER_COINS
}

#[derive(Debug, Deserialize)]
struct ScenarioRon {
    name: String,
    ticks: u32,
    #[serde(default = "default_saver_coins")]
    saver_coins: u32,
    rows: Vec<String>,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        let scenario = Scenario::from_rows(data.name, data.ticks, data.saver_coins, &data.rows)?;
        tracing::debug!(
            name = %scenario.name,
            savers = scenario.savers.len(),
            thief = %scenario.thief,
            "loaded scenario"
        );
        Ok(scenario)
    }
}
