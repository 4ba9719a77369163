use serde::Serialize;

use crate::model::quest::{Quest, Step};
use crate::ops::aggregate::{AggregateStats, NextStep, QuestProgress};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct QuestJson {
    pub id: String,
    pub npc: String,
    pub location: String,
    pub category: String,
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
    pub done: bool,
}

impl QuestJson {
    pub fn new(quest: &Quest, progress: QuestProgress) -> Self {
        QuestJson {
            id: quest.id.clone(),
            npc: quest.npc.clone(),
            location: quest.location.clone(),
            category: quest.category.label().to_string(),
            completed: progress.completed,
            total: progress.total,
            percent: progress.percent(),
            done: progress.is_done(),
        }
    }
}

#[derive(Serialize)]
pub struct QuestListJson {
    pub quests: Vec<QuestJson>,
}

#[derive(Serialize)]
pub struct StepJson {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_order: Option<u32>,
    pub done: bool,
}

impl StepJson {
    pub fn new(step: &Step, done: bool) -> Self {
        StepJson {
            id: step.id.clone(),
            title: step.title.clone(),
            description: step.description.clone(),
            note: step.note.clone(),
            sequence_order: step.sequence_order,
            done,
        }
    }
}

#[derive(Serialize)]
pub struct QuestDetailJson {
    #[serde(flatten)]
    pub quest: QuestJson,
    pub steps: Vec<StepJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub percent: u32,
    pub completed_quests: usize,
    pub total_quests: usize,
    pub completed_steps: usize,
    pub total_steps: usize,
}

impl From<AggregateStats> for StatsJson {
    fn from(stats: AggregateStats) -> Self {
        StatsJson {
            percent: stats.percent,
            completed_quests: stats.completed_quests,
            total_quests: stats.total_quests,
            completed_steps: stats.completed_steps,
            total_steps: stats.total_steps,
        }
    }
}

#[derive(Serialize)]
pub struct NextStepJson {
    pub quest_id: String,
    pub quest_name: String,
    pub step: StepJson,
}

impl NextStepJson {
    pub fn new(next: &NextStep) -> Self {
        NextStepJson {
            quest_id: next.quest.id.clone(),
            quest_name: next.quest.npc.clone(),
            step: StepJson::new(next.step, false),
        }
    }
}

// ---------------------------------------------------------------------------
// Plain-text helpers
// ---------------------------------------------------------------------------

/// One-line progress bar for terminal output, e.g. `[####----] 4/8`
pub fn text_bar(completed: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (completed * width + total / 2) / total
    };
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar.push(']');
    bar
}
