use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The sole mutable, persisted entity: step id → completion flag.
///
/// Absent keys mean incomplete. Only an explicit `true` counts as complete;
/// a stored `false` (which toggling off writes) is equivalent to absent.
/// Keys for steps no longer in the catalog are tolerated and never purged,
/// so progress survives catalog evolution in both directions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(IndexMap<String, bool>);

impl CompletionMap {
    pub fn new() -> Self {
        CompletionMap::default()
    }

    /// Whether a step is complete. Explicit boolean check, never truthiness.
    pub fn is_complete(&self, step_id: &str) -> bool {
        self.0.get(step_id) == Some(&true)
    }

    /// Record a completion value. Callers follow every logical toggle with
    /// a save (write-through, no batching).
    pub fn set(&mut self, step_id: &str, value: bool) {
        self.0.insert(step_id.to_string(), value);
    }

    /// Flip a step's completion and return the new value.
    pub fn toggle(&mut self, step_id: &str) -> bool {
        let value = !self.is_complete(step_id);
        self.set(step_id, value);
        value
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &bool)> {
        self.0.iter()
    }
}
