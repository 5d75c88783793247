//! The `NavStrategy` trait — everything kind-specific about a ghost.

use mc_core::{Direction, NodeId, Vec2};
use mc_maze::{MazeGraph, MazeResult};

use crate::TickContext;

/// Pluggable per-kind ghost behavior.
///
/// One implementation exists per [`GhostKind`][crate::GhostKind]; a ghost
/// owns its strategy as a boxed trait object and consults it for goals and
/// for its construction-time parameters (pen slot, bans, guide sequence).
///
/// # Required methods
///
/// Goal selection and placement are required.  The pen-related hooks have
/// defaults matching a ghost that roams freely from the first tick.
pub trait NavStrategy: Send + Sync + 'static {
    /// The fixed corner this kind retreats to during scatter phases.
    fn scatter_goal(&self, maze: &MazeGraph) -> Vec2;

    /// The pursuit goal during chase phases.
    ///
    /// `own_position` is the asking ghost's position (the shy strategy
    /// compares it against the player's); the lead ghost's position rides in
    /// on `ctx`.
    fn chase_goal(&self, own_position: Vec2, ctx: &TickContext, maze: &MazeGraph) -> Vec2;

    /// The node this kind occupies at level start.
    fn start_node(&self, maze: &MazeGraph) -> MazeResult<NodeId>;

    /// The node a spawn-returning ghost of this kind steers for.
    fn spawn_target(&self, maze: &MazeGraph) -> MazeResult<NodeId>;

    /// Directions this kind may not take at its pen slot before release.
    fn banned_directions(&self) -> &'static [Direction] {
        &[]
    }

    /// Forced directions walking this kind out of the pen, in stack-push
    /// order (the *last* entry is executed first).
    fn guide_sequence(&self) -> &'static [Direction] {
        &[]
    }

    /// `true` for kinds that skip release gating entirely.
    fn starts_released(&self) -> bool {
        false
    }
}
