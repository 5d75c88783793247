//! The four ghost kinds and their strategies.
//!
//! Pen geometry, shared by the three gated kinds: the home-entrance node
//! sits on the maze proper; one step down is the pen center (also the
//! respawn point); the center's left and right neighbors are the two
//! remaining pen slots.  Each gated kind bans the direction that would walk
//! it straight back toward the center before release, and carries the
//! forced-direction sequence that later guides it out.

use mc_core::{Direction, NodeId, Vec2};
use mc_maze::{MazeGraph, MazeResult};

use crate::{NavStrategy, TickContext};

// ── GhostKind ─────────────────────────────────────────────────────────────────

/// Identity of one of the four ghosts, in fixed group-update order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GhostKind {
    /// Chases the player head-on; starts outside the pen.
    Lead,
    /// Aims four tiles ahead of the player's facing.
    Ambush,
    /// Mirrors an ahead-of-player point through the lead ghost.
    Flank,
    /// Pursues like Ambush but retreats to its corner when close.
    Shy,
}

impl GhostKind {
    pub const ALL: [GhostKind; 4] = [
        GhostKind::Lead,
        GhostKind::Ambush,
        GhostKind::Flank,
        GhostKind::Shy,
    ];

    /// Slot in the group's fixed update order (also the RNG seed slot).
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            GhostKind::Lead => 0,
            GhostKind::Ambush => 1,
            GhostKind::Flank => 2,
            GhostKind::Shy => 3,
        }
    }

    /// Cosmetic sprite tint for this kind.
    pub const fn color(self) -> (u8, u8, u8) {
        match self {
            GhostKind::Lead => (255, 0, 0),
            GhostKind::Ambush => (255, 184, 255),
            GhostKind::Flank => (0, 255, 255),
            GhostKind::Shy => (255, 184, 82),
        }
    }

    /// Construct the strategy implementation for this kind.
    pub fn strategy(self) -> Box<dyn NavStrategy> {
        match self {
            GhostKind::Lead => Box::new(LeadStrategy),
            GhostKind::Ambush => Box::new(AmbushStrategy),
            GhostKind::Flank => Box::new(FlankStrategy),
            GhostKind::Shy => Box::new(ShyStrategy),
        }
    }
}

impl std::fmt::Display for GhostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GhostKind::Lead => "lead",
            GhostKind::Ambush => "ambush",
            GhostKind::Flank => "flank",
            GhostKind::Shy => "shy",
        };
        f.write_str(name)
    }
}

// ── Shared pen geometry ───────────────────────────────────────────────────────

/// The pen-center node: one step down from the home entrance.
fn pen_center(maze: &MazeGraph) -> MazeResult<NodeId> {
    let entrance = maze.home_entrance()?;
    maze.require_neighbor(entrance, Direction::Down)
}

/// The player's position offset `tiles` ahead along the player's facing.
fn ahead_of_player(ctx: &TickContext, tiles: f32, maze: &MazeGraph) -> Vec2 {
    ctx.player.position + ctx.player.facing.vector() * (maze.tile() * tiles)
}

// ── Lead ──────────────────────────────────────────────────────────────────────

/// Head-on pursuit.  Scatters to the top-right corner; starts on the maze
/// proper at the pen threshold and never waits for release.
pub struct LeadStrategy;

impl NavStrategy for LeadStrategy {
    fn scatter_goal(&self, maze: &MazeGraph) -> Vec2 {
        Vec2::new(maze.width(), 0.0)
    }

    fn chase_goal(&self, _own: Vec2, ctx: &TickContext, _maze: &MazeGraph) -> Vec2 {
        ctx.player.position
    }

    fn start_node(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        maze.home_entrance()
    }

    fn spawn_target(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        maze.spawn_node()
    }

    fn starts_released(&self) -> bool {
        true
    }
}

// ── Ambush ────────────────────────────────────────────────────────────────────

/// Aims four tiles ahead of the player.  Scatters to the top-left corner;
/// waits at the pen center and exits straight up.
pub struct AmbushStrategy;

impl NavStrategy for AmbushStrategy {
    fn scatter_goal(&self, _maze: &MazeGraph) -> Vec2 {
        Vec2::ZERO
    }

    fn chase_goal(&self, _own: Vec2, ctx: &TickContext, maze: &MazeGraph) -> Vec2 {
        ahead_of_player(ctx, 4.0, maze)
    }

    fn start_node(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        pen_center(maze)
    }

    fn spawn_target(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        maze.spawn_node()
    }

    fn guide_sequence(&self) -> &'static [Direction] {
        &[Direction::Up]
    }
}

// ── Flank ─────────────────────────────────────────────────────────────────────

/// Reflects a two-tile-ahead point through the lead ghost:
/// `goal = lead + 2 × (ahead − lead)`.  Scatters to the bottom-right
/// corner; waits in the left pen slot and exits right, then up.
pub struct FlankStrategy;

impl NavStrategy for FlankStrategy {
    fn scatter_goal(&self, maze: &MazeGraph) -> Vec2 {
        Vec2::new(maze.width(), maze.height())
    }

    fn chase_goal(&self, _own: Vec2, ctx: &TickContext, maze: &MazeGraph) -> Vec2 {
        let ahead = ahead_of_player(ctx, 2.0, maze);
        ctx.lead_position + (ahead - ctx.lead_position) * 2.0
    }

    fn start_node(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        let center = pen_center(maze)?;
        maze.require_neighbor(center, Direction::Left)
    }

    fn spawn_target(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        self.start_node(maze)
    }

    fn banned_directions(&self) -> &'static [Direction] {
        &[Direction::Right]
    }

    fn guide_sequence(&self) -> &'static [Direction] {
        &[Direction::Up, Direction::Right]
    }
}

// ── Shy ───────────────────────────────────────────────────────────────────────

/// Pursues four tiles ahead of the player, but flips to its scatter corner
/// whenever it gets within eight tiles of the player (inclusive boundary).
/// Scatters to the bottom-left corner; waits in the right pen slot and
/// exits left, then up.
pub struct ShyStrategy;

impl NavStrategy for ShyStrategy {
    fn scatter_goal(&self, maze: &MazeGraph) -> Vec2 {
        Vec2::new(0.0, maze.height())
    }

    fn chase_goal(&self, own: Vec2, ctx: &TickContext, maze: &MazeGraph) -> Vec2 {
        let retreat_radius = maze.tile() * 8.0;
        if own.distance_squared(ctx.player.position) <= retreat_radius * retreat_radius {
            self.scatter_goal(maze)
        } else {
            ahead_of_player(ctx, 4.0, maze)
        }
    }

    fn start_node(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        let center = pen_center(maze)?;
        maze.require_neighbor(center, Direction::Right)
    }

    fn spawn_target(&self, maze: &MazeGraph) -> MazeResult<NodeId> {
        self.start_node(maze)
    }

    fn banned_directions(&self) -> &'static [Direction] {
        &[Direction::Left]
    }

    fn guide_sequence(&self) -> &'static [Direction] {
        &[Direction::Up, Direction::Left]
    }
}
