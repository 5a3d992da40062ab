//! Per-tick orchestration of the thief agent.
//!
//! Every call to [`Agent::decide`] runs the same pipeline:
//!
//! 1. Fold the vision window into [`TerrainMemory`].
//! 2. Count target cooldowns down and check whether a theft just happened.
//! 3. If a target is seen or smelled, path to it over the vision graph.
//! 4. Otherwise path to the exploration objective over the memory graph,
//!    re-picking the objective when it is reached or unreachable.
//! 5. Turn the first edge of the path into a [`Step`].

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::grid::{Cell, Step};
use crate::memory::{TerrainMemory, VisitMap};
use crate::nav::{NavigationGraph, PathFinder};
use crate::policy::{ExplorationPolicy, Lead, PursuitPolicy};
use crate::rng::{PcgRng, RngOracle};
use crate::sensor::{Observation, Sensor};

/// What the agent was doing when its last tick ended.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Mode {
    /// No objective yet.
    #[default]
    Idle,
    /// Heading for an exploration objective.
    Exploring,
    /// Standing on the objective, about to pick the next one.
    AtObjective,
    /// Chasing a sensed target.
    Pursuing,
}

/// A thief agent: terrain memory, objective and policies, driven one tick
/// at a time by the host.
#[derive(Clone, Debug)]
pub struct Agent<R: RngOracle = PcgRng> {
    config: AgentConfig,
    memory: TerrainMemory,
    visits: VisitMap,
    pursuit: PursuitPolicy,
    exploration: ExplorationPolicy,
    finder: PathFinder,
    objective: Option<Cell>,
    mode: Mode,
    ticks: u64,
    rng: R,
}

impl Agent<PcgRng> {
    /// Creates an agent whose randomness is seeded from `config.seed`.
    pub fn new(config: AgentConfig) -> Self {
        let rng = PcgRng::seeded(config.seed);
        Self::with_rng(config, rng)
    }
}

impl Default for Agent<PcgRng> {
    fn default() -> Self {
        Self::new(AgentConfig::default())
    }
}

impl<R: RngOracle> Agent<R> {
    /// Creates an agent drawing every random choice from `rng`.
    pub fn with_rng(config: AgentConfig, rng: R) -> Self {
        Self {
            exploration: ExplorationPolicy::from_config(&config),
            finder: PathFinder::new(config.path_cost),
            config,
            memory: TerrainMemory::new(),
            visits: VisitMap::new(),
            pursuit: PursuitPolicy::new(),
            objective: None,
            mode: Mode::Idle,
            ticks: 0,
            rng,
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn memory(&self) -> &TerrainMemory {
        &self.memory
    }

    pub fn pursuit(&self) -> &PursuitPolicy {
        &self.pursuit
    }

    pub fn objective(&self) -> Option<Cell> {
        self.objective
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of ticks decided so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Reads the sensor and decides this tick's step.
    pub fn decide<S: Sensor + ?Sized>(&mut self, sensor: &S) -> Result<Step, AgentError> {
        let observation = Observation::capture(sensor)?;
        Ok(self.step(&observation))
    }

    /// Like [`Agent::decide`], returning the host's integer direction code.
    pub fn decide_code<S: Sensor + ?Sized>(&mut self, sensor: &S) -> Result<u8, AgentError> {
        self.decide(sensor).map(Step::code)
    }

    /// Runs one tick on already validated readings.
    pub fn step(&mut self, observation: &Observation) -> Step {
        self.ticks += 1;
        let position = observation.position;

        let discovered = self.memory.memorize(&observation.vision);
        self.visits.record(position);
        self.pursuit.tick_cooldowns();
        if let Some((target, ticks)) =
            self.pursuit
                .observe_coins(observation.coins, &self.config, &mut self.rng)
        {
            tracing::info!(%target, cooldown = ticks, "target robbed");
            // The objective pointed at the robbed target.
            self.objective = None;
        }

        let lead = self.pursuit.detect(&observation.vision, &observation.scent);
        let step = match lead.and_then(|lead| self.pursue(observation, lead)) {
            Some(step) => step,
            None => {
                self.pursuit.note_pursuit(None);
                self.explore(position)
            }
        };

        tracing::debug!(
            tick = self.ticks,
            %position,
            discovered,
            mode = %self.mode,
            objective = ?self.objective,
            code = step.code(),
            "decided step"
        );
        step
    }

    /// Paths to a sensed target over the vision graph. `None` when the
    /// target cannot be reached with what is visible.
    fn pursue(&mut self, observation: &Observation, lead: Lead) -> Option<Step> {
        let graph = NavigationGraph::from_vision(&observation.vision);
        let target = lead.cell();
        let path = self
            .finder
            .search(&graph, observation.position, target, &mut self.rng)?;

        self.pursuit.note_pursuit(lead.target());
        self.objective = Some(target);
        self.set_mode(Mode::Pursuing);
        Some(path.first_step(&graph))
    }

    /// Paths to the exploration objective over the memory graph.
    fn explore(&mut self, position: Cell) -> Step {
        let graph = NavigationGraph::from_memory(&self.memory);

        let objective = match self.objective {
            Some(objective) if objective != position => objective,
            reached => {
                if reached.is_some() {
                    self.set_mode(Mode::AtObjective);
                }
                self.pick_unknown(position)
            }
        };
        self.objective = Some(objective);
        self.set_mode(Mode::Exploring);

        let mut attempts = 0;
        loop {
            let Some(objective) = self.objective else {
                break;
            };
            if let Some(path) = self.finder.search(&graph, position, objective, &mut self.rng) {
                return path.first_step(&graph);
            }

            tracing::debug!(%objective, attempts, "objective unreachable");
            if attempts < self.config.objective_retries {
                self.objective = Some(self.pick_unknown(position));
            } else if attempts == self.config.objective_retries {
                let known = self
                    .exploration
                    .pick_farthest_known(&self.memory, position, &mut self.rng);
                self.objective = Some(known);
            } else {
                break;
            }
            attempts += 1;
        }

        // The objective stays set; the next tick retries it from a new cell.
        self.fallback_step(&graph, position)
    }

    fn pick_unknown(&mut self, position: Cell) -> Cell {
        self.exploration
            .pick_farthest_unknown(&self.memory, position, &mut self.rng)
    }

    /// Step used when no objective can be planned: the least visited
    /// neighbour in memory, or staying put.
    fn fallback_step(&mut self, graph: &NavigationGraph, position: Cell) -> Step {
        if !self.config.breadcrumb_fallback {
            tracing::warn!(%position, "no plan, staying put");
            return Step::Stay;
        }

        let edges = graph.neighbors(position);
        let Some(fewest) = edges.iter().map(|edge| self.visits.count(edge.to)).min() else {
            tracing::warn!(%position, "no plan and no open neighbour, staying put");
            return Step::Stay;
        };
        let candidates: Vec<_> = edges
            .iter()
            .filter(|edge| self.visits.count(edge.to) == fewest)
            .map(|edge| edge.direction)
            .collect();

        let step = self
            .rng
            .choose(&candidates)
            .copied()
            .map_or(Step::Stay, Step::Move);
        tracing::warn!(%position, code = step.code(), "no plan, following breadcrumbs");
        step
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::info!(from = %self.mode, to = %mode, tick = self.ticks, "mode changed");
            self.mode = mode;
        }
    }
}
