//! Grid primitives shared by every layer of the agent.
//!
//! The world is a fixed [`GRID_SIZE`] × [`GRID_SIZE`] square addressed by
//! [`Cell`] coordinates. Terrain is classified by [`TerrainCode`], and
//! movement is expressed as a [`Step`] built from a [`Direction`].

mod cell;
mod direction;
mod terrain;

pub use cell::Cell;
pub use direction::{Direction, Step};
pub use terrain::TerrainCode;

/// Side length of the square world.
pub const GRID_SIZE: i32 = 30;
