//! Thief simulator binary.
//!
//! Loads a scenario and an agent configuration, then runs the thief agent
//! headless for the scenario's tick budget.
//!
//! # Examples
//!
//! ```bash
//! # Bundled scenario with default tuning
//! cargo run -p thief-sim
//!
//! # Custom scenario, A* tuning and a fixed seed
//! THIEF_SCENARIO=crates/sim/scenarios/maze.ron \
//! THIEF_AGENT_CONFIG=crates/sim/config/agent.toml \
//! THIEF_SEED=7 cargo run -p thief-sim
//! ```

use anyhow::Result;
use thief_content::{ConfigLoader, ScenarioLoader};
use thief_core::AgentConfig;
use thief_sim::{DEFAULT_SCENARIO, SimConfig, Simulation, World, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // 1. Load configuration from environment
    let config = SimConfig::from_env();

    // 2. Setup logging
    let _guard = logging::setup_logging(config.session_id.as_deref(), config.log_dir.as_deref())?;

    // 3. Load content
    let scenario = match &config.scenario {
        Some(path) => ScenarioLoader::load(path)?,
        None => ScenarioLoader::parse(DEFAULT_SCENARIO)?,
    };
    let mut agent_config = match &config.agent_config {
        Some(path) => ConfigLoader::load(path)?,
        None => AgentConfig::default(),
    };
    if let Some(seed) = config.seed {
        agent_config = agent_config.with_seed(seed);
    }
    let ticks = config.ticks.unwrap_or(scenario.ticks);

    tracing::info!("Starting scenario {:?}", scenario.name);
    tracing::info!("Ticks: {}, savers: {}", ticks, scenario.savers.len());
    tracing::info!("Path cost: {}", agent_config.path_cost);

    // 4. Run
    let world = World::new(scenario, agent_config.seed);
    let mut simulation = Simulation::new(world, agent_config, ticks);
    let report = simulation.run()?;

    tracing::info!("{}", report);
    println!("{report}");
    Ok(())
}
