//! Decision logic for the grid-exploring thief agent.
//!
//! `thief-core` owns everything the agent decides on its own: the terrain
//! memory it accumulates, the navigation graph rebuilt from that memory every
//! tick, the path search, and the exploration and pursuit policies. The host
//! game engine is reached only through the [`Sensor`] trait, and every tick
//! produces a single [`Step`] whose integer code is the host contract.
//!
//! All randomness flows through one injected [`RngOracle`], so a seeded agent
//! makes the same decisions for the same sensor readings.
pub mod agent;
pub mod config;
pub mod error;
pub mod grid;
pub mod memory;
pub mod nav;
pub mod policy;
pub mod rng;
pub mod sensor;

pub use agent::{Agent, Mode};
pub use config::{AgentConfig, ExplorationBias, PathCost};
pub use error::AgentError;
pub use grid::{Cell, Direction, GRID_SIZE, Step, TerrainCode};
pub use memory::{TerrainMemory, VisitMap};
pub use nav::{Edge, NavigationGraph, Path, PathFinder};
pub use policy::{ExplorationPolicy, Lead, PursuitPolicy};
pub use rng::{PcgRng, RngOracle};
pub use sensor::{Observation, SCENT_CELLS, ScentWindow, Sensor, VISION_CELLS, VisionWindow};
