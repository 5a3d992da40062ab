//! Tick loop driving a thief agent through a [`World`].

use std::fmt;

use thief_core::{Agent, AgentConfig, Mode, Sensor, Step};

use crate::error::SimError;
use crate::world::{StepOutcome, World};

/// Summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimReport {
    pub scenario: String,
    pub ticks: u32,
    pub coins: u32,
    pub thefts: u32,
    pub blocked_steps: u32,
    /// Cells the agent has observed at least once.
    pub known_cells: usize,
    pub mode: Mode,
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ticks, {} coins from {} thefts, {} cells known, {} blocked steps, ended {}",
            self.scenario,
            self.ticks,
            self.coins,
            self.thefts,
            self.known_cells,
            self.blocked_steps,
            self.mode
        )
    }
}

pub struct Simulation {
    world: World,
    agent: Agent,
    ticks: u32,
    elapsed: u32,
    thefts: u32,
    blocked_steps: u32,
}

impl Simulation {
    /// Builds a run over `world` lasting `ticks` ticks. The world keeps its
    /// own seed; the agent is seeded from `config`.
    pub fn new(world: World, config: AgentConfig, ticks: u32) -> Self {
        Self {
            world,
            agent: Agent::new(config),
            ticks,
            elapsed: 0,
            thefts: 0,
            blocked_steps: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.ticks
    }

    /// Runs a single tick: the agent decides, the world applies the step,
    /// then the savers move.
    pub fn tick(&mut self) -> Result<StepOutcome, SimError> {
        let code = self.agent.decide_code(&self.world)?;
        let step = Step::from_code(code).ok_or(SimError::UnknownStep(code))?;

        let outcome = self.world.apply(step);
        match outcome {
            StepOutcome::Robbed { target, coins } => {
                self.thefts += 1;
                tracing::info!(tick = self.elapsed, %target, coins, "saver robbed");
            }
            StepOutcome::Blocked => {
                self.blocked_steps += 1;
                tracing::warn!(tick = self.elapsed, ?step, "step blocked by the world");
            }
            StepOutcome::Stayed | StepOutcome::Moved(_) => {}
        }

        self.world.advance();
        self.elapsed += 1;
        Ok(outcome)
    }

    /// Runs the remaining ticks and reports the result.
    pub fn run(&mut self) -> Result<SimReport, SimError> {
        while !self.is_finished() {
            self.tick()?;
        }
        Ok(self.report())
    }

    pub fn report(&self) -> SimReport {
        SimReport {
            scenario: self.world.scenario().name.clone(),
            ticks: self.elapsed,
            coins: self.world.coins(),
            thefts: self.thefts,
            blocked_steps: self.blocked_steps,
            known_cells: self.agent.memory().known_count(),
            mode: self.agent.mode(),
        }
    }
}
