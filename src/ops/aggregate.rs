//! Pure derived-state functions over (catalog, completion map).
//!
//! Nothing here mutates anything or touches disk; callers recompute after
//! every toggle and render from the results.

use crate::model::progress::CompletionMap;
use crate::model::quest::{Category, Quest, Step, Tab};

/// Per-quest completion counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestProgress {
    pub completed: usize,
    pub total: usize,
}

impl QuestProgress {
    /// A quest is done iff every step is complete and it has steps at all.
    /// A zero-step quest is never done.
    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn percent(&self) -> u32 {
        percent(self.completed, self.total)
    }
}

/// Aggregate statistics over a set of quests (typically one tab's worth)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateStats {
    /// round(100 × completed_steps / total_steps); 0 when there are no steps
    pub percent: u32,
    pub completed_quests: usize,
    pub total_quests: usize,
    pub completed_steps: usize,
    pub total_steps: usize,
}

/// An incomplete step with its owning quest attached for display
#[derive(Debug, Clone, Copy)]
pub struct NextStep<'a> {
    pub quest: &'a Quest,
    pub step: &'a Step,
}

/// Count a quest's completed steps against its step total
pub fn quest_progress(quest: &Quest, map: &CompletionMap) -> QuestProgress {
    let completed = quest
        .steps
        .iter()
        .filter(|s| map.is_complete(&s.id))
        .count();
    QuestProgress {
        completed,
        total: quest.steps.len(),
    }
}

/// The quests visible on a tab, in catalog order
pub fn visible_quests(catalog: &[Quest], tab: Tab) -> Vec<&Quest> {
    catalog
        .iter()
        .filter(|q| tab.includes(q.category))
        .collect()
}

/// Aggregate stats for a quest set
pub fn aggregate_stats(quests: &[&Quest], map: &CompletionMap) -> AggregateStats {
    let mut completed_steps = 0;
    let mut total_steps = 0;
    let mut completed_quests = 0;
    for quest in quests {
        let p = quest_progress(quest, map);
        completed_steps += p.completed;
        total_steps += p.total;
        if p.is_done() {
            completed_quests += 1;
        }
    }
    AggregateStats {
        percent: percent(completed_steps, total_steps),
        completed_quests,
        total_quests: quests.len(),
        completed_steps,
        total_steps,
    }
}

/// The earliest unfinished step among DLC quests, or None when every DLC
/// step is complete (or there are none).
///
/// Ordering: `sequence_order` ascending with missing orders last, ties
/// broken by encounter order in the catalog. `Some(0)` is a valid lowest
/// order, not "missing"; the sort key must not conflate the two.
pub fn next_incomplete_step<'a>(
    catalog: &'a [Quest],
    map: &CompletionMap,
) -> Option<NextStep<'a>> {
    let mut flat: Vec<NextStep<'a>> = Vec::new();
    for quest in catalog.iter().filter(|q| q.category == Category::Dlc) {
        for step in &quest.steps {
            flat.push(NextStep { quest, step });
        }
    }
    // sort_by_key is stable, which is what makes the encounter-order
    // tie-break hold for the many steps that share no explicit order
    flat.sort_by_key(|ns| ns.step.sequence_order.map_or(u64::MAX, u64::from));
    flat.into_iter().find(|ns| !map.is_complete(&ns.step.id))
}

fn percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}
