//! Flyer physics: gravity, flap override, speed cap and soft ceiling.

use super::config::WorldConfig;

/// Nearest whole row for a real-valued position.
///
/// Rendering and collision both go through this so they always agree on
/// which row the flyer occupies.
pub fn row_of(y: f64) -> i32 {
    y.round() as i32
}

/// The single controllable entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Flyer {
    /// Vertical position in rows (row 0 = top of the world).
    pub y: f64,
    /// Vertical velocity in rows/tick (positive = downward).
    pub vy: f64,
}

impl Flyer {
    /// Fresh flyer at the start row, at rest.
    pub fn new(config: &WorldConfig) -> Self {
        Self {
            y: config.start_y(),
            vy: 0.0,
        }
    }

    /// Current row as seen by collision and rendering.
    pub fn row(&self) -> i32 {
        row_of(self.y)
    }

    /// Advance one physics tick.
    ///
    /// A flap replaces the velocity outright; otherwise gravity accumulates.
    /// There is no floor here, falling out of the world is a crash.
    pub fn integrate(&mut self, config: &WorldConfig, flapped: bool) {
        if flapped {
            self.vy = config.flap_impulse;
        } else {
            self.vy += config.gravity;
        }

        self.vy = self
            .vy
            .clamp(-config.max_fall_speed, config.max_fall_speed);

        self.y += self.vy;

        // Ceiling at the top of the visible window; kill the velocity so
        // held flaps do not bank upward momentum.
        let ceiling = config.view_top() as f64;
        if self.y < ceiling {
            self.y = ceiling;
            self.vy = 0.0;
        }
    }
}
