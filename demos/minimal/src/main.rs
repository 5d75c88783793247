//! minimal — smallest example for the maze_chase ghost simulation.
//!
//! Runs the four-ghost group on a tiny demo board for twelve simulated
//! seconds at 60 Hz: the pen empties as the pellet count ramps up, a
//! frightened phase fires at the three-second mark, and a one-line status
//! report prints every simulated second.

mod maze;

use anyhow::Result;

use mc_core::{Direction, Vec2};
use mc_ghosts::{GhostConfig, GhostGroup, GhostObserver, RenderState};
use mc_nav::PlayerSnapshot;

use maze::build_maze;

// ── Constants ─────────────────────────────────────────────────────────────────

const TICK_DT:     f32 = 1.0 / 60.0;
const SIM_SECONDS: f32 = 12.0;
const FRIGHT_AT:   f32 = 3.0;
/// Pellets "eaten" per simulated second — drives pen release.
const PELLET_RATE: f32 = 10.0;

// ── Scripted player ───────────────────────────────────────────────────────────

/// A stand-in for the player entity: paces left and right along the bottom
/// corridor at a constant speed.
struct ScriptedPlayer {
    position: Vec2,
    facing:   Direction,
}

impl ScriptedPlayer {
    fn new(board_height: f32) -> Self {
        Self {
            position: Vec2::new(0.0, board_height),
            facing:   Direction::Right,
        }
    }

    fn advance(&mut self, dt: f32, board_width: f32) {
        self.position += self.facing.vector() * (80.0 * dt);
        if self.position.x >= board_width {
            self.facing = Direction::Left;
        } else if self.position.x <= 0.0 {
            self.facing = Direction::Right;
        }
    }

    fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot { position: self.position, facing: self.facing }
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Buffers the latest render state per ghost and prints one summary line
/// per simulated second.
struct ConsoleObserver {
    latest: Vec<RenderState>,
}

impl GhostObserver for ConsoleObserver {
    fn on_ghost_updated(&mut self, state: &RenderState) {
        self.latest.push(*state);
    }
}

impl ConsoleObserver {
    fn report(&mut self, t: f32) {
        print!("t={t:5.1}s");
        for state in self.latest.drain(..) {
            let facing = state.facing.map_or("-".to_string(), |d| d.to_string());
            print!("  | {} {:7} {:5} at {}", state.kind, state.mode.to_string(), facing, state.position);
        }
        println!();
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let maze = build_maze();
    let mut group = GhostGroup::new(GhostConfig::default(), &maze)?;
    let mut player = ScriptedPlayer::new(maze.height());
    let mut observer = ConsoleObserver { latest: Vec::new() };

    let total_ticks = (SIM_SECONDS / TICK_DT) as u32;
    let mut fright_fired = false;

    for tick in 0..total_ticks {
        let t = tick as f32 * TICK_DT;

        if !fright_fired && t >= FRIGHT_AT {
            group.fright_mode();
            group.update_points();
            fright_fired = true;
        }

        group.release((t * PELLET_RATE) as u32);
        player.advance(TICK_DT, maze.width());
        group.update(TICK_DT, player.snapshot(), &maze, &mut observer)?;

        if tick % 60 == 59 {
            observer.report(t);
        } else {
            observer.latest.clear();
        }
    }

    group.reset_points();
    println!("done: {total_ticks} ticks simulated");
    Ok(())
}
