//! Errors raised while reading sensor input.
//!
//! Failing to reach an objective is not an error: path search returns
//! `Option` and the agent recovers by re-planning. Only malformed host input
//! surfaces as [`AgentError`].

/// Invalid sensor readings for a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("agent position ({x}, {y}) is outside the grid")]
    PositionOutOfBounds { x: i32, y: i32 },

    #[error("vision window has {actual} cells, expected {expected}")]
    VisionSize { expected: usize, actual: usize },

    #[error("scent window has {actual} cells, expected {expected}")]
    ScentSize { expected: usize, actual: usize },
}
