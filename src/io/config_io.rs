use std::fs;
use std::path::Path;

use crate::model::config::Config;

pub const CONFIG_FILE: &str = "config.toml";

/// Read config.toml from the questlog directory. Missing or malformed
/// config falls back to defaults silently.
pub fn load_config(dir: &Path) -> Config {
    let path = dir.join(CONFIG_FILE);
    let Ok(text) = fs::read_to_string(&path) else {
        return Config::default();
    };
    toml::from_str(&text).unwrap_or_default()
}
