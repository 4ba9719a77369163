use std::path::PathBuf;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::progress::CompletionMap;
use crate::model::quest::{Category, Quest, Step};
use crate::model::questlog::Questlog;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

fn step(id: &str, title: &str, order: Option<u32>) -> Step {
    Step {
        id: id.into(),
        title: title.into(),
        description: String::new(),
        note: None,
        sequence_order: order,
    }
}

/// A small fixed catalog: two base quests (5 steps) and one DLC quest
/// whose step orders disagree with file order.
pub fn sample_catalog() -> Vec<Quest> {
    vec![
        Quest {
            id: "ranni".into(),
            npc: "Ranni the Witch".into(),
            location: "Three Sisters".into(),
            description: "Aid the witch in her long plan.".into(),
            category: Category::Major,
            steps: vec![
                Step {
                    note: Some("Easy to miss: the rise opens at night.".into()),
                    ..step("ranni-1", "Meet Ranni at her rise", None)
                },
                step("ranni-2", "Recover the hidden treasure", None),
                step("ranni-3", "Deliver the treasure", None),
            ],
        },
        Quest {
            id: "alex".into(),
            npc: "Alexander, Warrior Jar".into(),
            location: "Stormhill".into(),
            description: "Help the great jar reach the festival.".into(),
            category: Category::Side,
            steps: vec![
                step("alex-1", "Pull Alexander free", None),
                step("alex-2", "Meet him at the festival", None),
            ],
        },
        Quest {
            id: "leda".into(),
            npc: "Needle Knight Leda".into(),
            location: "Gravesite Plain".into(),
            description: "Follow the guided ones.".into(),
            category: Category::Dlc,
            steps: vec![
                step("leda-1", "Speak with Leda at the cross", Some(1)),
                step("leda-2", "Reach the scorched ruins", Some(0)),
            ],
        },
    ]
}

/// An app over the sample catalog with empty progress
pub fn sample_app() -> App {
    let log = Questlog {
        root: PathBuf::from("/tmp/questlog-render-test"),
        catalog: sample_catalog(),
        progress: CompletionMap::new(),
        config: Default::default(),
    };
    App::new(log)
}
