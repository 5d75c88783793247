//! `mc-core` — foundational types for the `maze_chase` ghost simulation.
//!
//! This crate is a dependency of every other `mc-*` crate.  It intentionally
//! has no `mc-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                       |
//! |---------------|------------------------------------------------|
//! | [`ids`]       | `NodeId`                                       |
//! | [`vec2`]      | `Vec2`, squared-distance math                  |
//! | [`direction`] | `Direction` (four-way), opposites, unit vectors|
//! | [`rng`]       | `GhostRng` (per-agent deterministic RNG)       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod direction;
pub mod ids;
pub mod rng;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use ids::NodeId;
pub use rng::GhostRng;
pub use vec2::Vec2;
