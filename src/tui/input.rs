use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::quest::Tab;

use super::app::{App, Mode, View};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts everything
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
    }
}

fn handle_navigate(app: &mut App, key: KeyEvent) {
    // The detail overlay captures input while open
    if matches!(app.view, View::Detail { .. }) {
        handle_detail(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_list_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_list_cursor(app, -1),
        KeyCode::Char('g') => app.set_cursor(0),
        KeyCode::Char('G') => {
            let last = app.visible().len().saturating_sub(1);
            app.set_cursor(last);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.open_selected(),
        KeyCode::Tab | KeyCode::BackTab => {
            let other = match app.tab {
                Tab::Base => Tab::Dlc,
                Tab::Dlc => Tab::Base,
            };
            app.switch_tab(other);
        }
        KeyCode::Char('1') | KeyCode::Char('b') => app.switch_tab(Tab::Base),
        KeyCode::Char('2') | KeyCode::Char('d') => app.switch_tab(Tab::Dlc),
        KeyCode::Char('/') => {
            app.mode = Mode::Search;
            app.search_input.clear();
        }
        KeyCode::Char('n') => jump_to_match(app, 1),
        KeyCode::Char('N') => jump_to_match(app, -1),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => app.last_search = None,
        _ => {}
    }
}

/// Keys inside the detail overlay. `Esc` is the cancellation signal and is
/// equivalent to closing the overlay.
fn handle_detail(app: &mut App, key: KeyEvent) {
    let View::Detail { quest_id, cursor } = &app.view else {
        return;
    };
    let quest_id = quest_id.clone();
    let cursor = *cursor;
    let step_count = app
        .log
        .find_quest(&quest_id)
        .map_or(0, |q| q.steps.len());

    match key.code {
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => {
            app.close_detail();
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            if cursor + 1 < step_count {
                set_detail_cursor(app, cursor + 1);
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            set_detail_cursor(app, cursor.saturating_sub(1));
        }
        KeyCode::Char('g') => set_detail_cursor(app, 0),
        KeyCode::Char('G') => set_detail_cursor(app, step_count.saturating_sub(1)),
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => {
            let step_id = app
                .log
                .find_quest(&quest_id)
                .and_then(|q| q.steps.get(cursor))
                .map(|s| s.id.clone());
            if let Some(step_id) = step_id {
                app.toggle_step(&step_id);
            }
        }
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
        }
        KeyCode::Enter => {
            app.last_search = if app.search_input.is_empty() {
                None
            } else {
                Some(app.search_input.clone())
            };
            app.search_input.clear();
            app.mode = Mode::Navigate;
            // Land on the first match at or after the cursor
            if app.last_search.is_some() && !current_matches(app) {
                jump_to_match(app, 1);
            }
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.push(c);
        }
        _ => {}
    }
}

fn move_list_cursor(app: &mut App, delta: isize) {
    let len = app.visible().len();
    if len == 0 {
        return;
    }
    let cursor = app.cursor().min(len - 1);
    let next = if delta < 0 {
        cursor.saturating_sub(delta.unsigned_abs())
    } else {
        (cursor + delta as usize).min(len - 1)
    };
    app.set_cursor(next);
}

fn current_matches(app: &App) -> bool {
    let Some(re) = app.active_search_re() else {
        return false;
    };
    app.selected_quest()
        .is_some_and(|q| App::quest_matches(q, &re))
}

/// Move the cursor to the next/previous quest matching the active search,
/// wrapping around the visible list.
fn jump_to_match(app: &mut App, direction: isize) {
    let Some(re) = app.active_search_re() else {
        return;
    };
    let visible = app.visible();
    let len = visible.len();
    if len == 0 {
        return;
    }
    let start = app.cursor().min(len - 1);
    for i in 1..=len {
        let idx = if direction >= 0 {
            (start + i) % len
        } else {
            (start + len - (i % len)) % len
        };
        if App::quest_matches(visible[idx], &re) {
            app.set_cursor(idx);
            return;
        }
    }
}

fn set_detail_cursor(app: &mut App, new_cursor: usize) {
    if let View::Detail { ref mut cursor, .. } = app.view {
        *cursor = new_cursor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::progress::CompletionMap;
    use crate::model::quest::{Category, Quest, Step};
    use crate::model::questlog::Questlog;
    use std::path::PathBuf;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn step(id: &str) -> Step {
        Step {
            id: id.into(),
            title: format!("Step {}", id),
            description: String::new(),
            note: None,
            sequence_order: None,
        }
    }

    fn app_with_quests() -> App {
        let mk = |id: &str, npc: &str, category: Category, steps: Vec<Step>| Quest {
            id: id.into(),
            npc: npc.into(),
            location: "Somewhere".into(),
            description: String::new(),
            category,
            steps,
        };
        let log = Questlog {
            root: PathBuf::from("/tmp/ql-input-test"),
            catalog: vec![
                mk("ranni", "Ranni the Witch", Category::Major, vec![step("r1"), step("r2")]),
                mk("alex", "Alexander", Category::Side, vec![step("a1")]),
                mk("leda", "Leda", Category::Dlc, vec![step("l1")]),
            ],
            progress: CompletionMap::new(),
            config: Default::default(),
        };
        App::new(log)
    }

    #[test]
    fn j_and_k_move_within_bounds() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor(), 0);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor(), 1);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor(), 1); // two base quests, clamped
    }

    #[test]
    fn enter_opens_and_esc_closes_detail() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(matches!(app.view, View::Detail { ref quest_id, .. } if quest_id == "ranni"));

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.view, View::List);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn tab_switches_only_from_list() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Base);

        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Dlc);
    }

    #[test]
    fn space_toggles_step_in_detail() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut app = app_with_quests();
        app.log.root = dir.path().to_path_buf();

        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.log.progress.is_complete("r1"));

        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.log.progress.is_complete("r2"));
    }

    #[test]
    fn detail_cursor_clamps_to_steps() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Enter));
        for _ in 0..5 {
            handle_key(&mut app, key(KeyCode::Char('j')));
        }
        assert!(matches!(app.view, View::Detail { cursor: 1, .. }));
    }

    #[test]
    fn search_commit_jumps_to_match() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        for c in "alex".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_search.as_deref(), Some("alex"));
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn n_cycles_matches_with_wraparound() {
        let mut app = app_with_quests();
        app.last_search = Some("a".into()); // matches Ranni and Alexander
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.cursor(), 1);
        handle_key(&mut app, key(KeyCode::Char('n')));
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn help_overlay_intercepts_keys() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.cursor(), 0);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn q_quits_from_list_and_detail() {
        let mut app = app_with_quests();
        handle_key(&mut app, key(KeyCode::Enter));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
