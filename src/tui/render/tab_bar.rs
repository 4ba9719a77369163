use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::quest::Tab;
use crate::ops::aggregate;
use crate::tui::app::App;

/// Render the tab bar: base/dlc tabs with their percentages, separator below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg_style = Style::default().bg(app.theme.background);
    let sep = Span::styled(
        "\u{2502}",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    );

    let mut spans: Vec<Span> = Vec::new();

    // Leading icon
    spans.push(Span::styled(" ", bg_style));
    spans.push(Span::styled(
        "\u{25C6}",
        Style::default().fg(app.theme.purple).bg(app.theme.background),
    ));
    spans.push(Span::styled(" ", bg_style));

    for tab in [Tab::Base, Tab::Dlc] {
        let quests = aggregate::visible_quests(&app.log.catalog, tab);
        let stats = aggregate::aggregate_stats(&quests, &app.log.progress);
        let is_current = app.tab == tab;
        spans.push(Span::styled(
            format!(" {} {}% ", tab.label(), stats.percent),
            tab_style(app, is_current),
        ));
        spans.push(sep.clone());
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).style(bg_style);
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
