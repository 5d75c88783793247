//! Ghost-subsystem error type.
//!
//! Every variant is a programming-invariant violation, not a transient
//! condition: there are no retries, and a failed agent update aborts the
//! group tick.

use thiserror::Error;

use mc_maze::MazeError;

/// Errors produced by `mc-ghosts`.
#[derive(Debug, Error)]
pub enum GhostError {
    /// The mode stack was popped while empty.  Unreachable under the
    /// scripted scatter/chase cycle (the base directive is untimed and
    /// never expires), so hitting this means corrupted mode bookkeeping.
    #[error("mode stack popped while empty")]
    ModeStackEmpty,

    #[error("maze inconsistency: {0}")]
    Maze(#[from] MazeError),
}

pub type GhostResult<T> = Result<T, GhostError>;
