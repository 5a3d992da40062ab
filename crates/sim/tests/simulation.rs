use std::path::PathBuf;

use thief_content::{Scenario, ScenarioLoader, Tile};
use thief_core::{AgentConfig, Cell, PathCost};
use thief_sim::{DEFAULT_SCENARIO, Simulation, StepOutcome, World, logging};

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(name)
}

fn simulation(scenario: Scenario, seed: u64, ticks: u32) -> Simulation {
    let config = AgentConfig::default().with_seed(seed);
    Simulation::new(World::new(scenario, seed), config, ticks)
}

/// A two-cell pocket: the thief at (5,5) and a saver that cannot move at (5,6).
fn pocket() -> Scenario {
    let mut rows = vec![".".repeat(30); 30];
    rows[4] = format!("....####{}", ".".repeat(22));
    rows[5] = format!("....#TS#{}", ".".repeat(22));
    rows[6] = format!("....####{}", ".".repeat(22));
    Scenario::from_rows("pocket", 20, 5, &rows).unwrap()
}

#[test]
fn bundled_scenarios_load() {
    for name in ["vault.ron", "maze.ron"] {
        let scenario = ScenarioLoader::load(&scenario_path(name)).unwrap();
        assert!(!scenario.savers.is_empty(), "{name} has no savers");
    }
    assert_eq!(ScenarioLoader::parse(DEFAULT_SCENARIO).unwrap().name, "vault");
}

#[test]
fn same_seed_gives_the_same_run() {
    let scenario = ScenarioLoader::parse(DEFAULT_SCENARIO).unwrap();

    let mut first = simulation(scenario.clone(), 7, 80);
    let mut second = simulation(scenario, 7, 80);

    assert_eq!(first.run().unwrap(), second.run().unwrap());
    assert_eq!(first.world().thief(), second.world().thief());
}

#[test]
fn thief_only_stands_on_walkable_tiles() {
    let scenario = ScenarioLoader::load(&scenario_path("maze.ron")).unwrap();
    let mut simulation = simulation(scenario, 11, 150);

    while !simulation.is_finished() {
        simulation.tick().unwrap();
        let world = simulation.world();
        assert_eq!(world.scenario().tile(world.thief()), Some(Tile::Empty));
    }

    let report = simulation.report();
    assert_eq!(report.ticks, 150);
    assert!(report.known_cells > 25);
}

#[test]
fn adjacent_saver_is_robbed_on_the_first_tick() {
    let mut simulation = simulation(pocket(), 3, 1);

    let outcome = simulation.tick().unwrap();

    assert!(matches!(outcome, StepOutcome::Robbed { coins: 5, .. }));
    assert_eq!(simulation.world().thief(), Cell::new(5, 5));
}

#[test]
fn report_counts_every_theft() {
    let mut simulation = simulation(pocket(), 3, 20);

    let report = simulation.run().unwrap();

    assert!(report.thefts >= 1);
    assert_eq!(report.coins, report.thefts * 5);
    assert_eq!(report.scenario, "pocket");
}

#[test]
fn accumulated_cost_runs_the_vault() {
    let scenario = ScenarioLoader::parse(DEFAULT_SCENARIO).unwrap();
    let config = AgentConfig::default()
        .with_seed(5)
        .with_path_cost(PathCost::Accumulated);
    let mut simulation = Simulation::new(World::new(scenario, 5), config, 120);

    let report = simulation.run().unwrap();

    assert_eq!(report.ticks, 120);
    assert!(report.known_cells > 60);
}

#[test]
fn default_log_dir_is_named_logs() {
    assert!(logging::log_dir().ends_with("logs"));
}
