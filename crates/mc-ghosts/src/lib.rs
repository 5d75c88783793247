//! `mc-ghosts` — the ghost-agent subsystem: four autonomous maze runners
//! driven by a per-agent timed stack of mode directives.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`mode`]     | `ModeKind`, `ModeDirective`, `ModeStack`                 |
//! | [`ghost`]    | `Ghost` — the per-agent state machine                    |
//! | [`group`]    | `GhostGroup` — fixed-order fan-out and group triggers    |
//! | [`observer`] | `GhostObserver`, `RenderState`, `NoopObserver`           |
//! | [`config`]   | `GhostConfig` tuning knobs                               |
//! | [`error`]    | `GhostError`, `GhostResult<T>`                           |
//!
//! # Tick model
//!
//! One external clock supplies an elapsed-seconds increment per frame.  The
//! group updates its four agents sequentially in a fixed order — lead,
//! ambush, flank, shy — with the lead updated first so the flanking
//! strategy always reads the lead's current-tick position.  An agent update
//! either completes fully or aborts the group tick with an error; no
//! partially-mutated state is ever observable from outside.

pub mod config;
pub mod error;
pub mod ghost;
pub mod group;
pub mod mode;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GhostConfig;
pub use error::{GhostError, GhostResult};
pub use ghost::Ghost;
pub use group::GhostGroup;
pub use mode::{ModeDirective, ModeKind, ModeStack};
pub use observer::{GhostObserver, NoopObserver, RenderState};
