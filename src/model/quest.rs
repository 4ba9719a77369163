use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Quest category. Controls which tab a quest appears under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Major,
    Side,
    Dlc,
}

impl Category {
    /// Display label shown on quest cards
    pub fn label(self) -> &'static str {
        match self {
            Category::Major => "Major Quest",
            Category::Side => "Side Quest",
            Category::Dlc => "DLC Quest",
        }
    }
}

/// A mutually exclusive filter over quest categories.
///
/// `Base` shows everything that is not DLC, both `major` and `side`
/// route there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Base,
    Dlc,
}

impl Tab {
    pub fn label(self) -> &'static str {
        match self {
            Tab::Base => "Quests",
            Tab::Dlc => "DLC",
        }
    }

    /// Whether a quest belongs on this tab
    pub fn includes(self, category: Category) -> bool {
        match self {
            Tab::Base => category != Category::Dlc,
            Tab::Dlc => category == Category::Dlc,
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Tab::Base),
            "dlc" => Ok(Tab::Dlc),
            other => Err(format!("unknown tab \"{}\" (expected base or dlc)", other)),
        }
    }
}

/// An atomic checklist item within a quest, independently completable.
///
/// `sequence_order` drives the next-step recommendation: `Some(0)` is a
/// valid lowest order, distinct from "no order given".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique, stable identifier (e.g. `ranni-1`)
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_order: Option<u32>,
}

/// A named task group with a category and ordered steps.
/// Immutable once loaded; owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Unique quest identifier (e.g. `ranni`)
    pub id: String,
    /// The quest-giving NPC, which doubles as the quest's display name
    pub npc: String,
    pub location: String,
    pub description: String,
    pub category: Category,
    /// Ordered steps. May be empty; an empty quest is never "done".
    #[serde(default)]
    pub steps: Vec<Step>,
}
