//! Mode directives and the per-ghost directive stack.
//!
//! # Design
//!
//! A ghost's behavioral schedule is a stack of immutable [`ModeDirective`]s.
//! Popping drives the scripted scatter/chase alternation; pushing lets an
//! interrupting phase (frightened, spawn-return, guided exit) save the
//! interrupted directive — with its *remaining* time — and resume it later.
//! The bottommost directive is an untimed chase that never expires, so the
//! stack cannot run dry during normal play.

use mc_core::Direction;

use crate::{GhostError, GhostResult};

// ── ModeKind ──────────────────────────────────────────────────────────────────

/// One behavioral phase of a ghost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeKind {
    /// Pursue the strategy's chase goal.
    Chase,
    /// Retreat toward the strategy's fixed corner.
    Scatter,
    /// Flee randomly at reduced speed; edible.
    Fright,
    /// Steer for the in-pen spawn target.
    Spawn,
    /// Follow a forced direction out of the pen.
    Guide,
}

impl std::fmt::Display for ModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModeKind::Chase => "chase",
            ModeKind::Scatter => "scatter",
            ModeKind::Fright => "fright",
            ModeKind::Spawn => "spawn",
            ModeKind::Guide => "guide",
        };
        f.write_str(name)
    }
}

// ── ModeDirective ─────────────────────────────────────────────────────────────

/// An immutable description of one behavioral phase.
///
/// `duration: None` means the directive never expires on its own; only the
/// terminal chase at the bottom of a fresh stack and the spawn/guide phases
/// are untimed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeDirective {
    pub kind: ModeKind,
    /// Seconds until the directive expires, `None` for untimed.
    pub duration: Option<f32>,
    /// Multiplier applied to the ghost's base speed while active.
    pub speed_mult: f32,
    /// Forced travel direction; set only on guide directives.
    pub direction: Option<Direction>,
}

impl ModeDirective {
    /// A directive that never expires on its own.
    pub const fn untimed(kind: ModeKind) -> Self {
        Self { kind, duration: None, speed_mult: 1.0, direction: None }
    }

    /// A directive that expires after `secs` seconds.
    pub const fn timed(kind: ModeKind, secs: f32) -> Self {
        Self { kind, duration: Some(secs), speed_mult: 1.0, direction: None }
    }

    /// A frightened phase: timed, slowed.
    pub const fn fright(secs: f32, speed_mult: f32) -> Self {
        Self { kind: ModeKind::Fright, duration: Some(secs), speed_mult, direction: None }
    }

    /// A spawn-return phase: untimed, ends by reaching the spawn goal.
    pub const fn spawn(speed_mult: f32) -> Self {
        Self { kind: ModeKind::Spawn, duration: None, speed_mult, direction: None }
    }

    /// One forced step of a guided pen exit.
    pub const fn guide(direction: Direction, speed_mult: f32) -> Self {
        Self {
            kind: ModeKind::Guide,
            duration: None,
            speed_mult,
            direction: Some(direction),
        }
    }

    /// Seconds left before expiry given `elapsed` seconds in the phase;
    /// `None` for untimed directives.
    #[inline]
    pub fn remaining(&self, elapsed: f32) -> Option<f32> {
        self.duration.map(|d| d - elapsed)
    }
}

// ── ModeStack ─────────────────────────────────────────────────────────────────

/// A last-in-first-out sequence of directives, owned exclusively by one
/// ghost.
#[derive(Clone, Debug, Default)]
pub struct ModeStack {
    inner: Vec<ModeDirective>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The level-start schedule, bottom to top: a permanent chase, a 5 s
    /// scatter, then three 20 s chase / 7 s scatter pairs.  The caller pops
    /// the top — a 7 s scatter — as the opening active mode.
    pub fn scripted() -> Self {
        let mut stack = Self::new();
        stack.push(ModeDirective::untimed(ModeKind::Chase));
        stack.push(ModeDirective::timed(ModeKind::Scatter, 5.0));
        stack.push(ModeDirective::timed(ModeKind::Chase, 20.0));
        stack.push(ModeDirective::timed(ModeKind::Scatter, 7.0));
        stack.push(ModeDirective::timed(ModeKind::Chase, 20.0));
        stack.push(ModeDirective::timed(ModeKind::Scatter, 7.0));
        stack.push(ModeDirective::timed(ModeKind::Chase, 20.0));
        stack.push(ModeDirective::timed(ModeKind::Scatter, 7.0));
        stack
    }

    pub fn push(&mut self, directive: ModeDirective) {
        self.inner.push(directive);
    }

    /// Remove and return the top directive.
    pub fn pop(&mut self) -> GhostResult<ModeDirective> {
        self.inner.pop().ok_or(GhostError::ModeStackEmpty)
    }

    /// The top directive without removing it.
    pub fn peek(&self) -> Option<&ModeDirective> {
        self.inner.last()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
