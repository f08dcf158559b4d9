//! World geometry, physics and difficulty constants.
//!
//! A `WorldConfig` is built once at startup, validated, and then shared
//! read-only by every run. The simulation never sees an invalid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest world side the terminal views will accept.
pub const MAX_WORLD_DIM: i32 = 1024;

/// Reasons a `WorldConfig` cannot drive a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("world must be at least 1x1 (got {width}x{height})")]
    EmptyWorld { width: i32, height: i32 },
    #[error("world must be at most {max}x{max} (got {width}x{height})")]
    WorldTooLarge { width: i32, height: i32, max: i32 },
    #[error("view height {view_height} must be within 1..={height}")]
    ViewOutOfWorld { view_height: i32, height: i32 },
    #[error("player column {player_x} must be within 0..{width}")]
    PlayerOffWorld { player_x: i32, width: i32 },
    #[error("gap bounds must satisfy 1 <= min ({gap_min}) <= start ({gap_start}) <= height ({height})")]
    GapBounds {
        gap_min: i32,
        gap_start: i32,
        height: i32,
    },
    #[error("spawn cadence must be at least one tick")]
    ZeroSpawnCadence,
    #[error("{name} must be finite (got {value})")]
    NonFinite { name: &'static str, value: f64 },
    #[error("max fall speed must not be negative (got {0})")]
    NegativeFallSpeed(f64),
    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Immutable world description.
///
/// Rows grow downward: row 0 is the top of the world, row `height - 1` the
/// bottom. Only rows `view_top()..height` are ever shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Total world rows (`H`).
    pub height: i32,
    /// World columns (`W`).
    pub width: i32,
    /// Visible rows at the bottom of the world (`VIEW_H`).
    pub view_height: i32,
    /// Fixed column of the flyer.
    pub player_x: i32,
    /// Score that ends the run with a win.
    pub win_score: u32,
    /// Downward acceleration, rows/tick^2.
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward), rows/tick.
    pub flap_impulse: f64,
    /// Velocity magnitude cap in both directions, rows/tick.
    pub max_fall_speed: f64,
    /// Gap height at score 0.
    pub gap_start: i32,
    /// Smallest gap the ramp will ever produce.
    pub gap_min: i32,
    /// Ticks between spawns early in a run.
    pub spawn_every_easy: u64,
    /// Ticks between spawns once the ramp tightens.
    pub spawn_every_hard: u64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            height: 11,
            width: 28,
            view_height: 8,
            player_x: 6,
            win_score: 100,
            gravity: 0.35,
            flap_impulse: -1.55,
            max_fall_speed: 1.80,
            gap_start: 5,
            gap_min: 2,
            spawn_every_easy: 3,
            spawn_every_hard: 2,
        }
    }
}

impl WorldConfig {
    /// First visible row (`H - VIEW_H`).
    pub fn view_top(&self) -> i32 {
        self.height - self.view_height
    }

    /// Starting row for a fresh flyer.
    pub fn start_y(&self) -> f64 {
        self.view_top().max(self.height / 2) as f64
    }

    /// Check every invariant the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height < 1 || self.width < 1 {
            return Err(ConfigError::EmptyWorld {
                width: self.width,
                height: self.height,
            });
        }
        if self.height > MAX_WORLD_DIM || self.width > MAX_WORLD_DIM {
            return Err(ConfigError::WorldTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_WORLD_DIM,
            });
        }
        if self.view_height < 1 || self.view_height > self.height {
            return Err(ConfigError::ViewOutOfWorld {
                view_height: self.view_height,
                height: self.height,
            });
        }
        if self.player_x < 0 || self.player_x >= self.width {
            return Err(ConfigError::PlayerOffWorld {
                player_x: self.player_x,
                width: self.width,
            });
        }
        if self.gap_min < 1 || self.gap_min > self.gap_start || self.gap_start > self.height {
            return Err(ConfigError::GapBounds {
                gap_min: self.gap_min,
                gap_start: self.gap_start,
                height: self.height,
            });
        }
        if self.spawn_every_easy == 0 || self.spawn_every_hard == 0 {
            return Err(ConfigError::ZeroSpawnCadence);
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("flap impulse", self.flap_impulse),
            ("max fall speed", self.max_fall_speed),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { name, value });
            }
        }
        if self.max_fall_speed < 0.0 {
            return Err(ConfigError::NegativeFallSpeed(self.max_fall_speed));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}
