//! FloppyCircle simulation core.
//!
//! A turn-based side-scroller: every accepted command advances the world by
//! exactly one tick. The flyer falls under gravity or flaps upward, pipes
//! scroll one column left per tick, and the run ends on a crash or when the
//! score reaches the win threshold. Nothing here touches the terminal.

pub mod collision;
pub mod config;
pub mod difficulty;
pub mod flight;
pub mod grid;
pub mod pipes;
pub mod step;

pub use collision::{evaluate, TickEvent};
pub use config::{ConfigError, WorldConfig};
pub use flight::{row_of, Flyer};
pub use grid::{render, Cell, Viewport};
pub use pipes::{Pipe, PipeField};
pub use step::{RunState, RunStatus, Simulation};
