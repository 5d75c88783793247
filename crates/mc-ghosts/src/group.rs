//! The ghost group: owns the four agents and coordinates group-wide events.

use tracing::{debug, info};

use mc_maze::MazeGraph;
use mc_nav::{GhostKind, PlayerSnapshot, TickContext};

use crate::{Ghost, GhostConfig, GhostObserver, GhostResult};

/// Owns the four ghosts and fans out per-frame updates in a fixed order:
/// lead, ambush, flank, shy.
///
/// The lead ghost updates first because the flanking strategy's chase goal
/// reflects through the lead's position — updating in this order guarantees
/// the flank always reads current-tick data.
pub struct GhostGroup {
    ghosts: [Ghost; 4],
}

impl GhostGroup {
    /// Construct all four ghosts at their pen slots.
    pub fn new(config: GhostConfig, maze: &MazeGraph) -> GhostResult<Self> {
        Ok(Self {
            ghosts: [
                Ghost::new(GhostKind::Lead, config, maze)?,
                Ghost::new(GhostKind::Ambush, config, maze)?,
                Ghost::new(GhostKind::Flank, config, maze)?,
                Ghost::new(GhostKind::Shy, config, maze)?,
            ],
        })
    }

    // ── Access ────────────────────────────────────────────────────────────

    /// One ghost by kind.
    pub fn get(&self, kind: GhostKind) -> &Ghost {
        &self.ghosts[kind.index()]
    }

    /// Mutable access to one ghost (e.g. to hide an eaten ghost and send it
    /// home via [`Ghost::begin_spawn_return`]).
    pub fn get_mut(&mut self, kind: GhostKind) -> &mut Ghost {
        &mut self.ghosts[kind.index()]
    }

    /// All four ghosts in update order.
    pub fn iter(&self) -> impl Iterator<Item = &Ghost> {
        self.ghosts.iter()
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance every ghost by `dt` seconds, notifying `observer` per agent.
    ///
    /// An agent error aborts the tick and propagates; no further agents are
    /// updated.
    pub fn update<O: GhostObserver>(
        &mut self,
        dt:       f32,
        player:   PlayerSnapshot,
        maze:     &MazeGraph,
        observer: &mut O,
    ) -> GhostResult<()> {
        let (lead, rest) = self.ghosts.split_at_mut(1);

        let ctx = TickContext { dt, player, lead_position: lead[0].position() };
        lead[0].update(&ctx, maze)?;
        observer.on_ghost_updated(&lead[0].render_state());

        let lead_position = lead[0].position();
        for ghost in rest {
            let ctx = TickContext { dt, player, lead_position };
            ghost.update(&ctx, maze)?;
            observer.on_ghost_updated(&ghost.render_state());
        }
        Ok(())
    }

    // ── Group-wide triggers ───────────────────────────────────────────────

    /// Release every unreleased ghost whose pellet threshold has been
    /// reached: clear its banned directions, switch it to spawn-return with
    /// its guide sequence loaded, and latch the released flag.  Idempotent
    /// per ghost.
    pub fn release(&mut self, pellets_eaten: u32) {
        for ghost in &mut self.ghosts {
            if ghost.ready_for_release(pellets_eaten) {
                ghost.release();
                info!(kind = %ghost.kind(), pellets_eaten, "ghost released from pen");
            }
        }
    }

    /// Trigger the frightened phase on every ghost (each independently
    /// skips it while in spawn-return or guided exit).
    pub fn fright_mode(&mut self) {
        debug!("group frightened");
        for ghost in &mut self.ghosts {
            ghost.fright_mode();
        }
    }

    /// Double every ghost's point value — invoked once per frightened-phase
    /// activation by the scoring collaborator.
    pub fn update_points(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.double_points();
        }
    }

    /// Restore every ghost's base point value.
    pub fn reset_points(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.reset_points();
        }
    }

    /// Stop rendering all ghosts until their next update.
    pub fn hide(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.hide();
        }
    }
}
