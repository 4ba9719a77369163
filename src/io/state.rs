use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Persisted TUI session state (written to .state.json).
///
/// Best-effort both ways: unreadable state is ignored, a failed write is
/// dropped. All of this is cosmetic continuity, not data.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionState {
    /// Active tab ("base" or "dlc")
    pub tab: String,
    /// Quest open in the detail overlay, if any
    #[serde(default)]
    pub open_quest: Option<String>,
    /// Cursor position on the base tab's quest list
    #[serde(default)]
    pub base_cursor: usize,
    /// Cursor position on the dlc tab's quest list
    #[serde(default)]
    pub dlc_cursor: usize,
    /// Last executed search pattern
    #[serde(default)]
    pub last_search: Option<String>,
}

/// Read .state.json from the questlog directory
pub fn read_session_state(dir: &Path) -> Option<SessionState> {
    let path = dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Write .state.json to the questlog directory
pub fn write_session_state(dir: &Path, state: &SessionState) -> Result<(), std::io::Error> {
    let path = dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    fs::write(&path, content)
}
