//! Ghost-subsystem tuning knobs.

/// Tuning parameters shared by the whole group.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to [`GhostGroup::new`][crate::GhostGroup];
/// the defaults reproduce the classic arcade feel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostConfig {
    /// Travel speed in pixels per second before mode multipliers.
    pub base_speed: f32,

    /// Length of a frightened phase, seconds.
    pub fright_duration: f32,

    /// Speed multiplier while frightened.
    pub fright_speed_mult: f32,

    /// Speed multiplier during a guided pen exit.
    pub guide_speed_mult: f32,

    /// Point value of an eaten ghost before any doubling.
    pub base_points: u32,

    /// Pellets the player must eat before each ghost leaves the pen, in
    /// lead/ambush/flank/shy order.  The lead ghost ignores its slot — it
    /// starts released.
    pub release_pellets: [u32; 4],

    /// Master RNG seed.  The same seed always produces identical frightened
    /// wandering.
    pub seed: u64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            base_speed: 100.0,
            fright_duration: 7.0,
            fright_speed_mult: 0.5,
            guide_speed_mult: 0.5,
            base_points: 200,
            release_pellets: [0, 0, 30, 60],
            seed: 0,
        }
    }
}
