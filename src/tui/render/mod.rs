pub mod dashboard;
pub mod detail_overlay;
pub mod help_overlay;
pub mod next_step;
pub mod quest_list;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;
use unicode_width::UnicodeWidthChar;

use crate::model::quest::Tab;

use super::app::{App, View};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);

    // Content: dashboard stats on top, then (dlc only) the next-step
    // panel, then the quest list. The detail view is an overlay, so the
    // list stays rendered beneath it.
    let content = chunks[1];
    let constraints: Vec<Constraint> = if app.tab == Tab::Dlc {
        vec![
            Constraint::Length(3), // dashboard
            Constraint::Length(2), // next incomplete step
            Constraint::Min(1),    // quest list
        ]
    } else {
        vec![Constraint::Length(3), Constraint::Min(1)]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(content);

    dashboard::render_dashboard(frame, app, rows[0]);
    if app.tab == Tab::Dlc {
        next_step::render_next_step(frame, app, rows[1]);
        quest_list::render_quest_list(frame, app, rows[2]);
    } else {
        quest_list::render_quest_list(frame, app, rows[1]);
    }

    // Detail overlay (modal, on top of the list)
    if matches!(app.view, View::Detail { .. }) {
        detail_overlay::render_detail_overlay(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Truncate a string to a display width, appending `…` when cut
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('\u{2026}');
            return out;
        }
        width += w;
        out.push(c);
    }
    out
}

/// Centered sub-rectangle: percent of width/height of the given area
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Spans for a block-character progress bar of the given cell width
pub(super) fn bar_spans<'a>(
    percent: u32,
    width: usize,
    fill: ratatui::style::Color,
    empty: ratatui::style::Color,
    bg: ratatui::style::Color,
) -> Vec<Span<'a>> {
    let filled = (width as u32 * percent.min(100) / 100) as usize;
    vec![
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(fill).bg(bg),
        ),
        Span::styled(
            "\u{2591}".repeat(width.saturating_sub(filled)),
            Style::default().fg(empty).bg(bg),
        ),
    ]
}
