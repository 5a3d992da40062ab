use crate::config::{AgentConfig, ExplorationBias};
use crate::grid::Cell;
use crate::memory::TerrainMemory;
use crate::rng::RngOracle;

/// Chooses exploration objectives from the terrain memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplorationPolicy {
    bias: ExplorationBias,
    fallback: Cell,
}

impl ExplorationPolicy {
    pub const fn new(bias: ExplorationBias, fallback: Cell) -> Self {
        Self { bias, fallback }
    }

    pub fn from_config(config: &AgentConfig) -> Self {
        Self::new(config.exploration_bias, config.fallback_objective)
    }

    /// Picks an unknown cell far from `position`.
    ///
    /// With [`ExplorationBias::FarHalf`] every unknown cell at least half the
    /// maximum distance away is a candidate, which keeps the agent heading
    /// outwards without always fixating on the same corner. With
    /// [`ExplorationBias::Farthest`] only cells at the maximum distance are.
    /// When no unknown cell is left this degrades to
    /// [`ExplorationPolicy::pick_farthest_known`].
    pub fn pick_farthest_unknown<R: RngOracle>(
        &self,
        memory: &TerrainMemory,
        position: Cell,
        rng: &mut R,
    ) -> Cell {
        let distances: Vec<(Cell, u32)> = memory
            .unknown_cells()
            .map(|cell| (cell, cell.manhattan(position)))
            .collect();
        let Some(max) = distances.iter().map(|&(_, distance)| distance).max() else {
            tracing::debug!(%position, "no unknown cell left");
            return self.pick_farthest_known(memory, position, rng);
        };

        let candidates: Vec<Cell> = distances
            .into_iter()
            .filter(|&(_, distance)| match self.bias {
                ExplorationBias::Farthest => distance == max,
                ExplorationBias::FarHalf => 2 * distance >= max,
            })
            .map(|(cell, _)| cell)
            .collect();

        match rng.choose(&candidates) {
            Some(&cell) => cell,
            None => {
                // The cell at `max` always qualifies.
                debug_assert!(false, "empty exploration candidate pool");
                self.pick_farthest_known(memory, position, rng)
            }
        }
    }

    /// Picks a known cell to fall back on.
    ///
    /// Any remembered passable cell other than `position` is a uniform
    /// candidate. Without one, the farthest remembered cell of any kind is
    /// used (first in row-major order on ties), and with an empty memory the
    /// configured fallback cell.
    pub fn pick_farthest_known<R: RngOracle>(
        &self,
        memory: &TerrainMemory,
        position: Cell,
        rng: &mut R,
    ) -> Cell {
        let passable: Vec<Cell> = memory
            .passable_cells()
            .filter(|&cell| cell != position)
            .collect();
        if let Some(&cell) = rng.choose(&passable) {
            return cell;
        }

        let farthest = memory
            .iter()
            .filter(|(_, code)| code.is_known())
            .map(|(cell, _)| cell)
            .fold(None, |best: Option<Cell>, cell| match best {
                Some(current) if current.manhattan(position) >= cell.manhattan(position) => {
                    Some(current)
                }
                _ => Some(cell),
            });

        farthest.unwrap_or_else(|| {
            tracing::warn!(fallback = %self.fallback, "memory is empty, using fallback objective");
            self.fallback
        })
    }
}

impl Default for ExplorationPolicy {
    fn default() -> Self {
        Self::from_config(&AgentConfig::default())
    }
}
