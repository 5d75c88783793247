//! `mc-nav` — goal-selection strategies, one per ghost kind.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`context`]  | `PlayerSnapshot`, `TickContext` — read-only tick inputs   |
//! | [`strategy`] | `NavStrategy` trait                                       |
//! | [`kinds`]    | `GhostKind` plus the four strategy implementations        |
//!
//! # Design notes
//!
//! A ghost *holds* a strategy rather than subclassing behavior: the agent
//! state machine is identical across kinds, and everything kind-specific —
//! scatter corner, chase goal, pen slot, banned directions, guide sequence —
//! flows through the [`NavStrategy`] trait.  The one inter-agent coupling
//! point (the flanking ghost reading the lead ghost's position) arrives as
//! an explicit field of [`TickContext`], never as a stored back-reference,
//! so a strategy can never observe stale or half-updated state.

pub mod context;
pub mod kinds;
pub mod strategy;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use context::{PlayerSnapshot, TickContext};
pub use kinds::{AmbushStrategy, FlankStrategy, GhostKind, LeadStrategy, ShyStrategy};
pub use strategy::NavStrategy;
