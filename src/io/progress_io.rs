use std::fs;
use std::path::Path;

use crate::model::progress::CompletionMap;

/// The persisted completion map, a flat JSON object of booleans
pub const PROGRESS_FILE: &str = "progress.json";

/// Read the saved completion map. Missing or malformed data resets to an
/// empty map; this never surfaces an error to the caller.
pub fn load_progress(dir: &Path) -> CompletionMap {
    let path = dir.join(PROGRESS_FILE);
    let Ok(text) = fs::read_to_string(&path) else {
        return CompletionMap::new();
    };
    serde_json::from_str(&text).unwrap_or_default()
}

/// Write the full completion map. Called after every toggle (write-through;
/// writes are human-rate, so no batching).
pub fn save_progress(dir: &Path, map: &CompletionMap) -> Result<(), std::io::Error> {
    let path = dir.join(PROGRESS_FILE);
    let content = serde_json::to_string_pretty(map)?;
    fs::write(&path, content)
}
