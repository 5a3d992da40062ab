//! Where the agent wants to go.
//!
//! [`PursuitPolicy`] reacts to targets sensed this tick; when it has nothing
//! to chase, [`ExplorationPolicy`] picks a cell to push into unknown
//! territory.

mod exploration;
mod pursuit;

pub use exploration::ExplorationPolicy;
pub use pursuit::{Lead, PursuitPolicy};
