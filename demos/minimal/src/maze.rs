//! A 9×7-tile demo board: an outer ring with a portal pair at mid height
//! and the ghost pen hanging under the top corridor.
//!
//! ```text
//! TL ──────── TM ──────── TR
//! │           E  (door)    │
//! ML ═portal═ [C L R pen] ═ MR
//! │                        │
//! BL ──────── BM ──────── BR
//! ```

use mc_core::Direction;
use mc_maze::{MazeBuilder, MazeGraph};

pub const TILE: f32 = 16.0;

pub fn build_maze() -> MazeGraph {
    let mut b = MazeBuilder::new(9, 7, TILE);

    // Outer ring.
    let tl = b.add_tile_node(0, 0);
    let tm = b.add_tile_node(4, 0);
    let tr = b.add_tile_node(8, 0);
    let ml = b.add_tile_node(0, 3);
    let mr = b.add_tile_node(8, 3);
    let bl = b.add_tile_node(0, 6);
    let bm = b.add_tile_node(4, 6);
    let br = b.add_tile_node(8, 6);

    b.connect(tl, Direction::Right, tm);
    b.connect(tm, Direction::Right, tr);
    b.connect(tl, Direction::Down, ml);
    b.connect(ml, Direction::Down, bl);
    b.connect(tr, Direction::Down, mr);
    b.connect(mr, Direction::Down, br);
    b.connect(bl, Direction::Right, bm);
    b.connect(bm, Direction::Right, br);

    // Teleport corridor across the middle.
    b.link_portals(ml, mr);

    // The pen: entrance under the top corridor, spawn point below it,
    // slots either side, bounce cells under the slots.
    let entrance = b.add_tile_node(4, 1);
    let center = b.add_tile_node(4, 2);
    let left = b.add_tile_node(3, 2);
    let right = b.add_tile_node(5, 2);
    let left_b = b.add_tile_node(3, 3);
    let right_b = b.add_tile_node(5, 3);

    b.connect(tm, Direction::Down, entrance);
    b.connect(entrance, Direction::Down, center);
    b.connect(center, Direction::Left, left);
    b.connect(center, Direction::Right, right);
    b.connect(left, Direction::Down, left_b);
    b.connect(right, Direction::Down, right_b);

    b.mark_home_entrance(entrance);
    b.mark_spawn(center);

    b.build()
}
