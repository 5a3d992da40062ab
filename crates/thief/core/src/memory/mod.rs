//! What the agent remembers between ticks.

mod terrain;
mod visits;

pub use terrain::TerrainMemory;
pub use visits::VisitMap;
