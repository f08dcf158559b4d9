//! Per-tick crash and score evaluation.

use super::config::WorldConfig;
use super::flight::Flyer;
use super::pipes::PipeField;

/// What happened to the flyer this tick. Crash and score never coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Nothing at the player's column, or not yet anything to judge.
    Clear,
    /// Flew through the gap of the pipe at the player's column.
    Scored,
    /// Fell out of the world or struck a wall.
    Crashed,
}

/// Judge the flyer against the world bottom, then against the pipe (if
/// any) sitting in the player's column.
///
/// There is no top-of-world crash: the flight model already clamps the
/// flyer to the top of the viewport.
pub fn evaluate(config: &WorldConfig, flyer: &Flyer, pipes: &PipeField) -> TickEvent {
    let row = flyer.row();

    if row >= config.height {
        return TickEvent::Crashed;
    }

    match pipes.at_column(config.player_x) {
        Some(pipe) if pipe.gap_contains(row) => TickEvent::Scored,
        Some(_) => TickEvent::Crashed,
        None => TickEvent::Clear,
    }
}
