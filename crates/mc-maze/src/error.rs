//! Maze-graph error type.
//!
//! The graph is assumed well-formed at load time and is not re-validated
//! during play; every variant here is a fatal inconsistency, not a
//! recoverable condition.

use thiserror::Error;

use mc_core::{Direction, NodeId};

/// Errors produced by `mc-maze`.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("node {node} has no neighbor {direction}")]
    MissingNeighbor { node: NodeId, direction: Direction },

    #[error("maze has no home-entrance node")]
    NoHomeEntrance,

    #[error("maze has no spawn node")]
    NoSpawnNode,
}

pub type MazeResult<T> = Result<T, MazeError>;
