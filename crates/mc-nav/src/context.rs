//! Read-only per-tick inputs shared by every strategy call.

use mc_core::{Direction, Vec2};

/// What the ghosts may know about the player this tick: position and facing,
/// captured once by the caller.  Ghosts never hold a reference to the player
/// entity itself.
#[derive(Copy, Clone, Debug)]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub facing:   Direction,
}

/// The inputs one ghost update receives from the outside world.
///
/// Built fresh by the group for every agent every tick.  `lead_position` is
/// the lead ghost's position *after* its own update this tick — the group
/// updates the lead first so the flanking strategy always sees current data.
#[derive(Copy, Clone, Debug)]
pub struct TickContext {
    /// Seconds elapsed since the previous tick, from the external clock.
    pub dt: f32,

    /// Player state snapshot.
    pub player: PlayerSnapshot,

    /// The lead ghost's current-tick position.
    pub lead_position: Vec2,
}
