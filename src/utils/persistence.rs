//! JSON helpers for files under ~/.floppy/.

use crate::sim::WorldConfig;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Name of the optional world override file.
pub const CONFIG_FILE: &str = "config.json";

/// Get the ~/.floppy/ directory path, creating it if needed.
pub fn floppy_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".floppy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.floppy/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(floppy_dir()?.join(filename))
}

/// Load a JSON file from ~/.floppy/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Keep `config` if it validates, otherwise fall back to the defaults.
pub fn validated_or_default(config: WorldConfig) -> WorldConfig {
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("invalid world config ({}), using defaults", e);
            WorldConfig::default()
        }
    }
}

/// World config from ~/.floppy/config.json, or the defaults.
pub fn load_world_config() -> WorldConfig {
    validated_or_default(load_json_or_default(CONFIG_FILE))
}
