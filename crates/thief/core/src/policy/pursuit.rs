use std::collections::BTreeMap;

use crate::config::AgentConfig;
use crate::grid::{Cell, TerrainCode};
use crate::rng::RngOracle;
use crate::sensor::{ScentWindow, VisionWindow};

/// A sensed target worth chasing this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lead {
    /// A target standing in plain sight.
    Sighted { cell: Cell, target: TerrainCode },
    /// The freshest scent trail next to the agent.
    Scented { cell: Cell, intensity: i32 },
}

impl Lead {
    pub const fn cell(self) -> Cell {
        match self {
            Lead::Sighted { cell, .. } | Lead::Scented { cell, .. } => cell,
        }
    }

    /// Identity of the target, known only when it was seen.
    pub const fn target(self) -> Option<TerrainCode> {
        match self {
            Lead::Sighted { target, .. } => Some(target),
            Lead::Scented { .. } => None,
        }
    }
}

/// Target detection and per-target cooldowns after a theft.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PursuitPolicy {
    cooldowns: BTreeMap<TerrainCode, u32>,
    last_coins: Option<u32>,
    pursued: Option<TerrainCode>,
}

impl PursuitPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining cooldown of `target`; `0` when it may be chased.
    pub fn cooldown(&self, target: TerrainCode) -> u32 {
        self.cooldowns.get(&target).copied().unwrap_or(0)
    }

    pub fn set_cooldown(&mut self, target: TerrainCode, ticks: u32) {
        if ticks == 0 {
            self.cooldowns.remove(&target);
        } else {
            self.cooldowns.insert(target, ticks);
        }
    }

    /// Counts every active cooldown down by one tick.
    pub fn tick_cooldowns(&mut self) {
        self.cooldowns.retain(|_, remaining| {
            *remaining = remaining.saturating_sub(1);
            *remaining > 0
        });
    }

    /// Target chased during the previous tick, if it was identified.
    pub fn pursued(&self) -> Option<TerrainCode> {
        self.pursued
    }

    pub fn note_pursuit(&mut self, target: Option<TerrainCode>) {
        self.pursued = target;
    }

    /// Compares the coins held with the previous tick. A gain while a target
    /// was being chased means it was robbed, and it goes on cooldown for a
    /// random number of ticks within the configured window.
    pub fn observe_coins<R: RngOracle>(
        &mut self,
        coins: u32,
        config: &AgentConfig,
        rng: &mut R,
    ) -> Option<(TerrainCode, u32)> {
        let previous = self.last_coins.replace(coins)?;
        if coins <= previous {
            return None;
        }
        let target = self.pursued.take()?;
        let ticks = rng.range(config.cooldown_min, config.cooldown_max);
        self.set_cooldown(target, ticks);
        Some((target, ticks))
    }

    /// Finds something to chase.
    ///
    /// Sight wins over scent: the first target in scan order that is not on
    /// cooldown. Otherwise the passable neighbour with the lowest positive
    /// scent reading (the freshest trail), first in scan order on ties.
    pub fn detect(&self, vision: &VisionWindow, scent: &ScentWindow) -> Option<Lead> {
        let sighted = vision.cells().find(|&(cell, code)| {
            cell.in_bounds() && code.is_target() && self.cooldown(code) == 0
        });
        if let Some((cell, target)) = sighted {
            return Some(Lead::Sighted { cell, target });
        }

        scent
            .cells()
            .filter(|&(cell, reading)| {
                reading > 0
                    && cell.in_bounds()
                    && vision
                        .code_at(cell)
                        .is_some_and(TerrainCode::is_known_passable)
            })
            .min_by_key(|&(_, reading)| reading)
            .map(|(cell, intensity)| Lead::Scented { cell, intensity })
    }
}
