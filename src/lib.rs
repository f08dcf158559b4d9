//! FloppyCircle - turn-based terminal flyer.
//!
//! The `sim` module holds the game itself; `session` and `input` drive the
//! replay loop around it, and `ui` draws each screen with ratatui.

pub mod input;
pub mod session;
pub mod sim;
pub mod ui;
pub mod utils;

pub use session::{Command, Scoreboard, Screen, Session};
pub use sim::{RunStatus, Simulation, WorldConfig};
