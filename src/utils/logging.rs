//! File-backed logging. The terminal belongs to the game, so log records
//! go to ~/.floppy/floppy.log instead of stderr.

use super::persistence::data_path;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

pub const LOG_FILE: &str = "floppy.log";

/// Install the global logger. Filter defaults to `info`, override with
/// `RUST_LOG`. If the log file cannot be opened the game runs unlogged.
pub fn init_logging() {
    let file = match data_path(LOG_FILE).and_then(|path| {
        OpenOptions::new().create(true).append(true).open(path)
    }) {
        Ok(f) => f,
        Err(_) => return,
    };

    let _ = Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
