use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::aggregate;
use crate::tui::app::App;

use super::{bar_spans, push_highlighted_spans, truncate_to_width};

const BAR_WIDTH: usize = 10;

/// Render the quest card list for the active tab
pub fn render_quest_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible_height = area.height as usize;
    let count = app.visible().len();

    if count == 0 {
        let empty = Paragraph::new(" No quests on this tab")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and adjust scroll before borrowing for rendering
    let cursor = app.cursor().min(count - 1);
    app.set_cursor(cursor);
    if cursor < app.list_scroll {
        app.list_scroll = cursor;
    } else if visible_height > 0 && cursor >= app.list_scroll + visible_height {
        app.list_scroll = cursor + 1 - visible_height;
    }
    let scroll = app.list_scroll;

    let bg = app.theme.background;
    let search_re = app.active_search_re();
    let quests = app.visible();
    let end = quests.len().min(scroll + visible_height);

    let mut lines: Vec<Line> = Vec::with_capacity(visible_height);
    for (quest, row) in quests[scroll..end].iter().zip(scroll..end) {
        let is_cursor = row == cursor;
        let p = aggregate::quest_progress(quest, &app.log.progress);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let name_style = Style::default()
            .fg(if p.is_done() { app.theme.green } else { app.theme.text_bright })
            .bg(row_bg);
        let dim_style = Style::default().fg(app.theme.dim).bg(row_bg);
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        let mut spans: Vec<Span> = Vec::new();

        // Cursor marker
        spans.push(Span::styled(
            if is_cursor { "\u{258C}" } else { " " },
            Style::default().fg(app.theme.selection_border).bg(row_bg),
        ));

        // Done marker
        spans.push(Span::styled(
            if p.is_done() { "\u{2713} " } else { "  " },
            Style::default().fg(app.theme.green).bg(row_bg),
        ));

        // Category badge
        spans.push(Span::styled(
            format!("{:<11} ", quest.category.label()),
            Style::default()
                .fg(app.theme.category_color(quest.category))
                .bg(row_bg),
        ));

        // NPC name and location, search-highlighted
        push_highlighted_spans(
            &mut spans,
            &truncate_to_width(&quest.npc, 24),
            if is_cursor {
                name_style.add_modifier(Modifier::BOLD)
            } else {
                name_style
            },
            match_style,
            search_re.as_ref(),
        );
        spans.push(Span::styled("  ", dim_style));
        push_highlighted_spans(
            &mut spans,
            &truncate_to_width(&quest.location, 20),
            dim_style,
            match_style,
            search_re.as_ref(),
        );

        // Right-aligned progress bar + counts
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let counts = format!(" {}/{}", p.completed, p.total);
        let right_width = BAR_WIDTH + counts.chars().count();
        if used + right_width + 1 < area.width as usize {
            let padding = area.width as usize - used - right_width - 1;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(row_bg)));
        }
        spans.extend(bar_spans(
            p.percent(),
            BAR_WIDTH,
            if p.is_done() { app.theme.green } else { app.theme.highlight },
            app.theme.dim,
            row_bg,
        ));
        spans.push(Span::styled(counts, dim_style));

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::model::quest::Tab;
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, sample_app};

    use super::*;

    #[test]
    fn list_shows_base_quests_only() {
        let mut app = sample_app();
        let text = render_to_string(TERM_W, 10, |frame, area| {
            render_quest_list(frame, &mut app, area);
        });
        assert!(text.contains("Ranni the Witch"), "got: {}", text);
        assert!(text.contains("Alexander"), "got: {}", text);
        assert!(!text.contains("Leda"), "got: {}", text);
    }

    #[test]
    fn dlc_tab_shows_dlc_quests() {
        let mut app = sample_app();
        app.switch_tab(Tab::Dlc);
        let text = render_to_string(TERM_W, 10, |frame, area| {
            render_quest_list(frame, &mut app, area);
        });
        assert!(text.contains("Leda"), "got: {}", text);
        assert!(!text.contains("Ranni"), "got: {}", text);
    }

    #[test]
    fn done_quest_gets_checkmark() {
        let mut app = sample_app();
        app.log.progress.set("alex-1", true);
        app.log.progress.set("alex-2", true);
        let text = render_to_string(TERM_W, 10, |frame, area| {
            render_quest_list(frame, &mut app, area);
        });
        let alex_line = text
            .lines()
            .find(|l| l.contains("Alexander"))
            .expect("alex row");
        assert!(alex_line.contains('\u{2713}'), "got: {}", alex_line);
        assert!(alex_line.contains("2/2"), "got: {}", alex_line);
    }

    #[test]
    fn empty_tab_renders_placeholder() {
        let mut app = sample_app();
        app.log.catalog.clear();
        let text = render_to_string(TERM_W, 10, |frame, area| {
            render_quest_list(frame, &mut app, area);
        });
        assert!(text.contains("No quests"), "got: {}", text);
    }

    #[test]
    fn cursor_scrolls_into_view() {
        let mut app = sample_app();
        app.set_cursor(1);
        // Height of 1 forces scrolling to the cursor row
        let text = render_to_string(TERM_W, 1, |frame, area| {
            render_quest_list(frame, &mut app, area);
        });
        assert!(text.contains("Alexander"), "got: {}", text);
        assert_eq!(app.list_scroll, 1);
    }
}
