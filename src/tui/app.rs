use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::catalog_io;
use crate::io::progress_io;
use crate::model::quest::{Quest, Tab};
use crate::model::questlog::Questlog;
use crate::ops::aggregate;

use super::input;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed.
///
/// The detail view is a modal overlay: the quest list stays rendered
/// beneath it, and the list cursor keeps its position so focus lands back
/// on the card that opened the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    List,
    Detail { quest_id: String, cursor: usize },
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
}

/// Main application state. Owns everything; there are no ambient globals.
pub struct App {
    pub log: Questlog,
    pub tab: Tab,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor into the base tab's visible quest list
    pub base_cursor: usize,
    /// Cursor into the dlc tab's visible quest list
    pub dlc_cursor: usize,
    /// Scroll offset for the quest list (first visible row)
    pub list_scroll: usize,
    /// Scroll offset (in lines) inside the detail overlay
    pub detail_scroll: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    /// Set when a write-through save fails; shown in the status row
    pub save_error: Option<String>,
}

impl App {
    pub fn new(log: Questlog) -> Self {
        let theme = Theme::from_config(&log.config.ui);
        App {
            log,
            tab: Tab::Base,
            view: View::List,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            base_cursor: 0,
            dlc_cursor: 0,
            list_scroll: 0,
            detail_scroll: 0,
            show_help: false,
            search_input: String::new(),
            last_search: None,
            save_error: None,
        }
    }

    /// Quests visible on the active tab, in catalog order
    pub fn visible(&self) -> Vec<&Quest> {
        aggregate::visible_quests(&self.log.catalog, self.tab)
    }

    pub fn cursor(&self) -> usize {
        match self.tab {
            Tab::Base => self.base_cursor,
            Tab::Dlc => self.dlc_cursor,
        }
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        match self.tab {
            Tab::Base => self.base_cursor = cursor,
            Tab::Dlc => self.dlc_cursor = cursor,
        }
    }

    /// The quest under the list cursor
    pub fn selected_quest(&self) -> Option<&Quest> {
        self.visible().get(self.cursor()).copied()
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// List → Detail. Unknown quest ids are a no-op, not an error.
    pub fn select_quest(&mut self, quest_id: &str) {
        if self.log.find_quest(quest_id).is_none() {
            return;
        }
        self.view = View::Detail {
            quest_id: quest_id.to_string(),
            cursor: 0,
        };
        self.detail_scroll = 0;
    }

    /// Open the detail overlay for the quest under the cursor
    pub fn open_selected(&mut self) {
        if let Some(quest) = self.selected_quest() {
            let id = quest.id.clone();
            self.select_quest(&id);
        }
    }

    /// Detail → List. The tab and list cursor are untouched, so focus
    /// returns to the card that opened the overlay.
    pub fn close_detail(&mut self) {
        self.view = View::List;
        self.detail_scroll = 0;
    }

    /// Switch tabs; only legal from the list view
    pub fn switch_tab(&mut self, tab: Tab) {
        if self.view == View::List {
            self.tab = tab;
        }
    }

    /// Flip a step's completion and persist the whole map (write-through).
    /// A failed write is surfaced in the status row, not fatal.
    pub fn toggle_step(&mut self, step_id: &str) {
        self.log.progress.toggle(step_id);
        match progress_io::save_progress(&self.log.root, &self.log.progress) {
            Ok(()) => self.save_error = None,
            Err(e) => self.save_error = Some(format!("could not save progress: {}", e)),
        }
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. In Navigate: compiles
    /// from the last executed search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Whether a quest matches the search pattern (npc, location, or id)
    pub fn quest_matches(quest: &Quest, re: &Regex) -> bool {
        re.is_match(&quest.npc) || re.is_match(&quest.location) || re.is_match(&quest.id)
    }
}

// ---------------------------------------------------------------------------
// Session state persistence
// ---------------------------------------------------------------------------

/// Restore UI state from .state.json
pub fn restore_session(app: &mut App) {
    use crate::io::state::read_session_state;

    let Some(state) = read_session_state(&app.log.root) else {
        return;
    };

    if let Ok(tab) = state.tab.parse::<Tab>() {
        app.tab = tab;
    }
    app.base_cursor = state.base_cursor;
    app.dlc_cursor = state.dlc_cursor;
    app.last_search = state.last_search;
    if let Some(quest_id) = state.open_quest {
        // select_quest validates existence; a stale id stays on the list
        app.select_quest(&quest_id);
    }
}

/// Save UI state to .state.json
pub fn save_session(app: &App) {
    use crate::io::state::{SessionState, write_session_state};

    let tab = match app.tab {
        Tab::Base => "base",
        Tab::Dlc => "dlc",
    };
    let open_quest = match &app.view {
        View::Detail { quest_id, .. } => Some(quest_id.clone()),
        View::List => None,
    };

    let state = SessionState {
        tab: tab.to_string(),
        open_quest,
        base_cursor: app.base_cursor,
        dlc_cursor: app.dlc_cursor,
        last_search: app.last_search.clone(),
    };

    let _ = write_session_state(&app.log.root, &state);
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run the TUI application. A catalog that cannot be loaded is terminal:
/// the error propagates to main, which prints it and exits.
pub fn run(dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let start = match dir {
        Some(d) => std::fs::canonicalize(d)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", d, e))?,
        None => std::env::current_dir()?,
    };
    let root = catalog_io::discover_dir(&start)?;
    let log = catalog_io::load_questlog(&root)?;

    let mut app = App::new(log);
    restore_session(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_session(&app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
            // Debounced session save: every ~5 key presses
            save_counter += 1;
            if save_counter >= 5 {
                save_session(app);
                save_counter = 0;
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
