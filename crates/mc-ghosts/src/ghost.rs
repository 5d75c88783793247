//! The per-ghost state machine.
//!
//! # Movement model
//!
//! A ghost is always travelling from its current `node` toward a `target`
//! neighbor along its facing direction, advancing its continuous position
//! by `base_speed × speed_mult × dt` each tick.  When the position reaches
//! or overshoots the target node, it snaps to the node exactly, teleports
//! through a portal link if one is present, and commits to a new target in
//! one traversal step.  At most one node is crossed per tick.
//!
//! # Direction choice
//!
//! The heuristic is greedy and single-step: among the graph-valid
//! directions (non-null neighbor, not the reversal of facing, minus
//! kind-banned directions, with the pen door one-way for roaming ghosts),
//! pick the candidate node closest to the current goal by squared distance.
//! A dead end under the reversal-exclusion rule forces a retreat the way
//! the ghost came.  Frightened ghosts pick uniformly at random instead.

use tracing::debug;

use mc_core::{Direction, GhostRng, NodeId, Vec2};
use mc_maze::MazeGraph;
use mc_nav::{GhostKind, NavStrategy, TickContext};

use crate::observer::RenderState;
use crate::{GhostConfig, GhostResult, ModeDirective, ModeKind, ModeStack};

/// One autonomous maze runner.
pub struct Ghost {
    kind:     GhostKind,
    strategy: Box<dyn NavStrategy>,
    config:   GhostConfig,

    // ── Continuous movement ───────────────────────────────────────────────
    position: Vec2,
    node:     NodeId,
    target:   NodeId,
    /// `None` until the first traversal step picks a direction.
    facing:   Option<Direction>,

    // ── Mode state ────────────────────────────────────────────────────────
    mode:       ModeDirective,
    mode_timer: f32,
    stack:      ModeStack,
    goal:       Vec2,

    // ── Pen release ───────────────────────────────────────────────────────
    banned:            Vec<Direction>,
    released:          bool,
    release_threshold: u32,
    spawn_target:      NodeId,

    // ── Scoring / rendering ───────────────────────────────────────────────
    points:  u32,
    visible: bool,
    rng:     GhostRng,
}

impl Ghost {
    /// Construct a ghost of `kind` at its strategy's pen slot, with the
    /// scripted scatter/chase schedule loaded and its top popped as the
    /// opening active mode.
    pub fn new(kind: GhostKind, config: GhostConfig, maze: &MazeGraph) -> GhostResult<Self> {
        let strategy = kind.strategy();
        let mut stack = ModeStack::scripted();
        let mode = stack.pop()?;
        let node = strategy.start_node(maze)?;
        let spawn_target = strategy.spawn_target(maze)?;

        Ok(Self {
            position: maze.position(node),
            node,
            target: node,
            facing: None,
            mode,
            mode_timer: 0.0,
            stack,
            goal: Vec2::ZERO,
            banned: strategy.banned_directions().to_vec(),
            released: strategy.starts_released(),
            release_threshold: config.release_pellets[kind.index()],
            spawn_target,
            points: config.base_points,
            visible: true,
            rng: GhostRng::new(config.seed, kind.index() as u32),
            kind,
            strategy,
            config,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn kind(&self) -> GhostKind {
        self.kind
    }

    /// Cosmetic sprite tint.
    pub fn color(&self) -> (u8, u8, u8) {
        self.kind.color()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// The node the ghost last snapped to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// The neighbor node the ghost is moving toward.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn facing(&self) -> Option<Direction> {
        self.facing
    }

    /// The active mode directive.
    pub fn mode(&self) -> ModeDirective {
        self.mode
    }

    /// Seconds spent in the active mode.
    pub fn mode_timer(&self) -> f32 {
        self.mode_timer
    }

    /// The pending directive schedule.
    pub fn mode_stack(&self) -> &ModeStack {
        &self.stack
    }

    /// The point the direction heuristic currently steers toward.
    pub fn goal(&self) -> Vec2 {
        self.goal
    }

    pub fn released(&self) -> bool {
        self.released
    }

    /// Current point value when eaten.
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Snapshot for the sprite layer: mode, facing, visibility, flash cue.
    pub fn render_state(&self) -> RenderState {
        RenderState {
            kind: self.kind,
            mode: self.mode.kind,
            facing: self.facing,
            position: self.position,
            visible: self.visible,
            fright_flash: self.mode.kind == ModeKind::Fright
                && self.mode.duration.is_some_and(|d| self.mode_timer >= d * 0.7),
        }
    }

    // ── Per-tick update ───────────────────────────────────────────────────

    /// Advance the ghost by `ctx.dt` seconds of simulated time.
    pub fn update(&mut self, ctx: &TickContext, maze: &MazeGraph) -> GhostResult<()> {
        self.visible = true;
        let speed = self.effective_speed(maze) * self.mode.speed_mult;
        if let Some(facing) = self.facing {
            self.position += facing.vector() * (speed * ctx.dt);
        }
        self.tick_mode_timer(ctx.dt)?;
        self.refresh_goal(ctx, maze);
        self.traverse(maze)
    }

    /// Base speed, halved while crossing a teleport corridor.
    fn effective_speed(&self, maze: &MazeGraph) -> f32 {
        if maze.is_portal(self.node) || maze.is_portal(self.target) {
            self.config.base_speed * 0.5
        } else {
            self.config.base_speed
        }
    }

    /// Advance the mode timer and pop the next directive on expiry.
    fn tick_mode_timer(&mut self, dt: f32) -> GhostResult<()> {
        self.mode_timer += dt;
        let Some(duration) = self.mode.duration else {
            return Ok(());
        };
        if self.mode_timer >= duration {
            self.reverse_facing();
            self.mode = self.stack.pop()?;
            self.mode_timer = 0.0;
            debug!(kind = %self.kind, mode = %self.mode.kind, "timed mode transition");
        }
        Ok(())
    }

    /// Flip facing and swap node/target so the overshoot test is anchored
    /// on the node now behind us.  Suppressed during spawn-return and
    /// guided exit.
    fn reverse_facing(&mut self) {
        if matches!(self.mode.kind, ModeKind::Spawn | ModeKind::Guide) {
            return;
        }
        if let Some(facing) = self.facing {
            self.facing = Some(facing.opposite());
            std::mem::swap(&mut self.node, &mut self.target);
        }
    }

    /// Recompute the steering goal from the active mode.
    fn refresh_goal(&mut self, ctx: &TickContext, maze: &MazeGraph) {
        self.goal = match self.mode.kind {
            ModeKind::Chase => self.strategy.chase_goal(self.position, ctx, maze),
            ModeKind::Scatter => self.strategy.scatter_goal(maze),
            ModeKind::Fright => Vec2::new(
                self.rng.gen_range(0.0..=maze.width()),
                self.rng.gen_range(0.0..=maze.height()),
            ),
            ModeKind::Spawn => maze.position(self.spawn_target),
            // Steering is forced during a guided exit; keep the last goal.
            ModeKind::Guide => return,
        };
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// `true` once the position has reached or passed the target node.
    fn overshot_target(&self, maze: &MazeGraph) -> bool {
        let origin = maze.position(self.node);
        let span = maze.position(self.target) - origin;
        (self.position - origin).length_squared() >= span.length_squared()
    }

    /// One graph-traversal step: snap, portal, pick, retarget, and handle
    /// the spawn/guide node-arrival transitions.
    fn traverse(&mut self, maze: &MazeGraph) -> GhostResult<()> {
        if !self.overshot_target(maze) {
            return Ok(());
        }
        self.node = self.target;
        if let Some(exit) = maze.portal_exit(self.node) {
            self.node = exit;
        }
        match self.pick_direction(maze) {
            Some(dir) => {
                self.facing = Some(dir);
                self.target = maze.require_neighbor(self.node, dir)?;
            }
            None => self.target = self.node,
        }
        self.position = maze.position(self.node);

        match self.mode.kind {
            ModeKind::Spawn if self.position == self.goal => self.enter_guided_exit(maze)?,
            ModeKind::Guide => self.next_guide_step(maze)?,
            _ => {}
        }
        Ok(())
    }

    /// Choose the next travel direction at the current node, or `None` when
    /// the ghost has no facing yet and no legal move exists.
    fn pick_direction(&mut self, maze: &MazeGraph) -> Option<Direction> {
        let candidates = self.valid_directions(maze);
        if candidates.is_empty() {
            // Dead end under the reversal-exclusion rule: retreat the way
            // we came, skipping the distance comparison.
            return self.facing.map(Direction::opposite);
        }
        if self.mode.kind == ModeKind::Fright {
            return self.rng.choose(&candidates).map(|&(dir, _)| dir);
        }
        let mut best = candidates[0].0;
        let mut best_d2 = f32::INFINITY;
        for &(dir, next) in &candidates {
            let d2 = maze.position(next).distance_squared(self.goal);
            // Strict `<` keeps the first minimum, so ties resolve in
            // Direction::ALL declared order.
            if d2 < best_d2 {
                best = dir;
                best_d2 = d2;
            }
        }
        Some(best)
    }

    /// The graph-valid direction set at the current node.
    fn valid_directions(&self, maze: &MazeGraph) -> Vec<(Direction, NodeId)> {
        let reverse = self.facing.map(Direction::opposite);
        let at_entrance = maze.is_home_entrance(self.node);
        let mut out = Vec::with_capacity(4);
        for dir in Direction::ALL {
            let Some(next) = maze.neighbor(self.node, dir) else {
                continue;
            };
            if Some(dir) == reverse {
                continue;
            }
            if self.mode.kind != ModeKind::Spawn {
                if at_entrance {
                    // Roaming ghosts never drop back into the pen.
                    if dir == Direction::Down {
                        continue;
                    }
                } else if self.banned.contains(&dir) {
                    continue;
                }
            }
            out.push((dir, next));
        }
        out
    }

    // ── Spawn / guide transitions ─────────────────────────────────────────

    /// Spawn goal reached: pop the first guide directive and adopt its
    /// forced direction.
    fn enter_guided_exit(&mut self, maze: &MazeGraph) -> GhostResult<()> {
        let directive = self.stack.pop()?;
        self.mode = directive;
        if let Some(dir) = directive.direction {
            self.facing = Some(dir);
            self.target = maze.require_neighbor(self.node, dir)?;
            self.position = maze.position(self.node);
        }
        debug!(kind = %self.kind, "spawn goal reached, starting guided exit");
        Ok(())
    }

    /// Target node reached during a guided exit: pop the next directive.
    /// Another guide step forces a new direction; anything else resumes
    /// normal play unchanged.
    fn next_guide_step(&mut self, maze: &MazeGraph) -> GhostResult<()> {
        let directive = self.stack.pop()?;
        self.mode = directive;
        if directive.kind == ModeKind::Guide {
            if let Some(dir) = directive.direction {
                self.facing = Some(dir);
                self.target = maze.require_neighbor(self.node, dir)?;
                self.position = maze.position(self.node);
            }
        } else {
            // Guide chain done; the resumed phase runs its full length.
            self.mode_timer = 0.0;
            debug!(kind = %self.kind, mode = %self.mode.kind, "guided exit complete");
        }
        Ok(())
    }

    // ── External triggers ─────────────────────────────────────────────────

    /// Enter the frightened phase.
    ///
    /// The interrupted directive is pushed back with its remaining time so
    /// it resumes where it left off.  Re-triggering while already
    /// frightened restarts the timer without growing the stack.  Ghosts in
    /// spawn-return or guided exit are immune.
    pub fn fright_mode(&mut self) {
        if matches!(self.mode.kind, ModeKind::Spawn | ModeKind::Guide) {
            return;
        }
        if self.mode.kind != ModeKind::Fright {
            let mut resumed = self.mode;
            resumed.duration = self.mode.remaining(self.mode_timer);
            self.stack.push(resumed);
        }
        self.mode =
            ModeDirective::fright(self.config.fright_duration, self.config.fright_speed_mult);
        self.mode_timer = 0.0;
        self.reverse_facing();
        debug!(kind = %self.kind, "frightened");
    }

    /// Switch to spawn-return: steer for the spawn target, then follow the
    /// guide sequence back out.  Used on pen release and when an eaten
    /// ghost is sent home (typically at a raised `speed_mult`).
    pub fn begin_spawn_return(&mut self, speed_mult: f32) {
        self.mode = ModeDirective::spawn(speed_mult);
        self.mode_timer = 0.0;
        for &dir in self.strategy.guide_sequence() {
            self.stack
                .push(ModeDirective::guide(dir, self.config.guide_speed_mult));
        }
    }

    /// Stop rendering this ghost until its next update.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    // ── Group-internal hooks ──────────────────────────────────────────────

    pub(crate) fn ready_for_release(&self, pellets_eaten: u32) -> bool {
        !self.released && pellets_eaten >= self.release_threshold
    }

    pub(crate) fn release(&mut self) {
        self.banned.clear();
        self.begin_spawn_return(1.0);
        self.released = true;
    }

    pub(crate) fn double_points(&mut self) {
        self.points *= 2;
    }

    pub(crate) fn reset_points(&mut self) {
        self.points = self.config.base_points;
    }
}
