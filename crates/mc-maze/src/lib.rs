//! `mc-maze` — the maze node-graph collaborator.
//!
//! The ghost core consumes the maze as a read-only graph: per node, a
//! direction-keyed neighbor lookup, a 2-D position, and three flags
//! (home-entrance, spawn, portal).  This crate supplies that contract plus
//! an incremental [`MazeBuilder`].
//!
//! | Module    | Contents                           |
//! |-----------|------------------------------------|
//! | [`graph`] | `MazeGraph`, `MazeBuilder`         |
//! | [`error`] | `MazeError`, `MazeResult`          |
//!
//! The graph is immutable after `build()` and is never mutated during play.

pub mod error;
pub mod graph;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{MazeError, MazeResult};
pub use graph::{MazeBuilder, MazeGraph};
