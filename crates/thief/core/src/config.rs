use crate::grid::Cell;

/// How the path search scores a discovered cell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PathCost {
    /// Distance to the destination only (greedy best-first).
    #[default]
    Heuristic,
    /// Steps taken so far plus distance to the destination (A*).
    Accumulated,
}

/// Which unknown cells are eligible as the next exploration objective.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ExplorationBias {
    /// Only the unknown cells at the maximum distance.
    Farthest,
    /// Any unknown cell at least half the maximum distance away.
    #[default]
    FarHalf,
}

/// Tunable parameters of a thief agent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Shortest cooldown, in ticks, applied to a target after a theft.
    pub cooldown_min: u32,
    /// Longest cooldown, in ticks, applied to a target after a theft.
    pub cooldown_max: u32,
    /// How many fresh unknown objectives are tried within a tick before
    /// settling for a known cell.
    pub objective_retries: u32,
    /// Objective used when memory holds no usable cell at all.
    pub fallback_objective: Cell,
    pub path_cost: PathCost,
    pub exploration_bias: ExplorationBias,
    /// Step to the least visited neighbour when nothing can be planned;
    /// stay in place otherwise.
    pub breadcrumb_fallback: bool,
    /// Seed of the agent's random source.
    pub seed: u64,
}

impl AgentConfig {
    pub const DEFAULT_COOLDOWN_MIN: u32 = 8;
    pub const DEFAULT_COOLDOWN_MAX: u32 = 20;
    pub const DEFAULT_OBJECTIVE_RETRIES: u32 = 1;
    pub const DEFAULT_FALLBACK_OBJECTIVE: Cell = Cell::new(14, 14);
    pub const DEFAULT_SEED: u64 = 0x5EED;

    pub fn new() -> Self {
        Self {
            cooldown_min: Self::DEFAULT_COOLDOWN_MIN,
            cooldown_max: Self::DEFAULT_COOLDOWN_MAX,
            objective_retries: Self::DEFAULT_OBJECTIVE_RETRIES,
            fallback_objective: Self::DEFAULT_FALLBACK_OBJECTIVE,
            path_cost: PathCost::default(),
            exploration_bias: ExplorationBias::default(),
            breadcrumb_fallback: true,
            seed: Self::DEFAULT_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the cooldown window; the bounds are swapped if given in reverse.
    pub fn with_cooldown(mut self, min: u32, max: u32) -> Self {
        self.cooldown_min = min.min(max);
        self.cooldown_max = min.max(max);
        self
    }

    pub fn with_path_cost(mut self, path_cost: PathCost) -> Self {
        self.path_cost = path_cost;
        self
    }

    pub fn with_exploration_bias(mut self, bias: ExplorationBias) -> Self {
        self.exploration_bias = bias;
        self
    }

    pub fn with_breadcrumb_fallback(mut self, enabled: bool) -> Self {
        self.breadcrumb_fallback = enabled;
        self
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}
