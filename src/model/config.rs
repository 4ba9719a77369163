use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional configuration from config.toml (all fields default)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Color overrides, e.g. `background = "#0C001B"` under [ui.colors]
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}
