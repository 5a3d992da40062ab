//! Navigation over what the agent knows.
//!
//! [`NavigationGraph`] is rebuilt from scratch for every decision, either
//! from the full [`TerrainMemory`](crate::TerrainMemory) or from the current
//! vision window. [`PathFinder`] searches it and hands back a [`Path`] whose
//! first edge is the only part the agent acts on.

mod graph;
mod search;

pub use graph::{Edge, NavigationGraph};
pub use search::{Path, PathFinder};
