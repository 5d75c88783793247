//! Observer trait for the rendering/animation collaborator.

use mc_core::{Direction, Vec2};
use mc_nav::GhostKind;

use crate::ModeKind;

/// Everything the sprite layer needs to draw one ghost for one frame.
///
/// Frame selection and pixel drawing are the collaborator's business; the
/// simulation only reports which animation family applies.
#[derive(Copy, Clone, Debug)]
pub struct RenderState {
    pub kind: GhostKind,
    pub mode: ModeKind,
    /// `None` until the ghost has taken its first traversal step.
    pub facing: Option<Direction>,
    pub position: Vec2,
    pub visible: bool,
    /// `true` during the tail of a frightened phase (past 70 % of its
    /// duration) — the cue to switch to the warning flash animation.
    pub fright_flash: bool,
}

/// Callbacks invoked by [`GhostGroup::update`][crate::GhostGroup::update]
/// as each agent finishes its tick.
///
/// The method has a default no-op implementation so callers that only want
/// the simulation side can pass [`NoopObserver`].
pub trait GhostObserver {
    /// Called once per ghost per tick, in the fixed update order.
    fn on_ghost_updated(&mut self, _state: &RenderState) {}
}

/// A [`GhostObserver`] that does nothing.
pub struct NoopObserver;

impl GhostObserver for NoopObserver {}
