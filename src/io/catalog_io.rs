use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{config_io, progress_io};
use crate::model::quest::Quest;
use crate::model::questlog::Questlog;

/// The catalog file a questlog directory is recognized by
pub const CATALOG_FILE: &str = "quests.json";

/// Error type for catalog loading. Every variant is fatal at startup:
/// there is no retry and no partial catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("not a questlog directory: no quests.json found")]
    NotFound,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse quests.json: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Discover the questlog directory by walking up from the given directory,
/// looking for a `quests.json`.
pub fn discover_dir(start: &Path) -> Result<PathBuf, CatalogError> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CATALOG_FILE).is_file() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(CatalogError::NotFound);
        }
    }
}

/// Read and parse the quest catalog. Loaded once per session; the catalog
/// is immutable after this.
pub fn load_catalog(dir: &Path) -> Result<Vec<Quest>, CatalogError> {
    let path = dir.join(CATALOG_FILE);
    let text = fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound
        } else {
            CatalogError::Read { path, source: e }
        }
    })?;
    let catalog: Vec<Quest> = serde_json::from_str(&text)?;
    Ok(catalog)
}

/// Load a complete questlog: catalog (fatal on failure), plus progress and
/// config (both best-effort, defaulting silently).
pub fn load_questlog(dir: &Path) -> Result<Questlog, CatalogError> {
    let catalog = load_catalog(dir)?;
    let progress = progress_io::load_progress(dir);
    let config = config_io::load_config(dir);
    Ok(Questlog {
        root: dir.to_path_buf(),
        catalog,
        progress,
        config,
    })
}
