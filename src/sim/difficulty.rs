//! Score-driven difficulty ramp.

use super::config::WorldConfig;

/// Gap height shrinks by one row every this many points.
pub const GAP_SHRINK_EVERY: u32 = 10;

/// Score at which pipes start spawning on the hard cadence.
pub const HARD_SPAWN_SCORE: u32 = 20;

/// Gap height in rows for the given score, floored at `gap_min`.
pub fn gap(config: &WorldConfig, score: u32) -> i32 {
    let shrink = i32::try_from(score / GAP_SHRINK_EVERY).unwrap_or(i32::MAX);
    config.gap_start.saturating_sub(shrink).max(config.gap_min)
}

/// Ticks between pipe spawns for the given score.
pub fn spawn_every(config: &WorldConfig, score: u32) -> u64 {
    if score < HARD_SPAWN_SCORE {
        config.spawn_every_easy
    } else {
        config.spawn_every_hard
    }
}
