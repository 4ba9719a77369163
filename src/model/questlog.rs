use std::path::PathBuf;

use super::config::Config;
use super::progress::CompletionMap;
use super::quest::{Quest, Step};

/// A fully loaded questlog: the directory, the immutable catalog, and the
/// mutable completion map.
#[derive(Debug)]
pub struct Questlog {
    /// Directory holding quests.json, progress.json, and .state.json
    pub root: PathBuf,
    /// Ordered quest catalog, loaded once and never mutated
    pub catalog: Vec<Quest>,
    pub progress: CompletionMap,
    pub config: Config,
}

impl Questlog {
    pub fn find_quest(&self, quest_id: &str) -> Option<&Quest> {
        self.catalog.iter().find(|q| q.id == quest_id)
    }

    /// Look up a step anywhere in the catalog, with its owning quest
    pub fn find_step(&self, step_id: &str) -> Option<(&Quest, &Step)> {
        self.catalog
            .iter()
            .find_map(|q| q.steps.iter().find(|s| s.id == step_id).map(|s| (q, s)))
    }
}
