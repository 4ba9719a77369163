use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::aggregate;
use crate::tui::app::{App, View};

use super::{bar_spans, centered_rect};

/// Render the quest detail overlay: header, progress bar, step checklist.
/// A quest id that is no longer in the catalog renders nothing (the list
/// stays visible beneath).
pub fn render_detail_overlay(frame: &mut Frame, app: &mut App, area: Rect) {
    let View::Detail { quest_id, cursor } = &app.view else {
        return;
    };
    let quest_id = quest_id.clone();
    let cursor = *cursor;
    let Some(quest) = app.log.find_quest(&quest_id) else {
        return;
    };

    let overlay = centered_rect(70, 80, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let p = aggregate::quest_progress(quest, &app.log.progress);

    let mut lines: Vec<Line> = Vec::new();

    // --- Header ---
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            quest.category.label(),
            Style::default()
                .fg(app.theme.category_color(quest.category))
                .bg(bg),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(quest.npc.clone(), bright_style),
        Span::styled(format!("  {}", quest.location), dim_style),
    ]));
    if !quest.description.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" ", Style::default().bg(bg)),
            Span::styled(quest.description.clone(), text_style),
        ]));
    }

    // --- Progress ---
    let bar_width = (inner.width as usize).saturating_sub(12);
    let mut bar = vec![Span::styled(" ", Style::default().bg(bg))];
    bar.extend(bar_spans(
        p.percent(),
        bar_width,
        if p.is_done() { app.theme.green } else { app.theme.highlight },
        app.theme.dim,
        bg,
    ));
    bar.push(Span::styled(
        format!(" {}/{} steps", p.completed, p.total),
        dim_style,
    ));
    lines.push(Line::from(bar));
    lines.push(Line::from(""));

    // --- Steps ---
    // Track where each step starts so the cursor can be scrolled to
    let mut step_line_starts: Vec<usize> = Vec::with_capacity(quest.steps.len());
    for (i, step) in quest.steps.iter().enumerate() {
        let is_cursor = i == cursor;
        let done = app.log.progress.is_complete(&step.id);
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };
        step_line_starts.push(lines.len());

        let checkbox_style = Style::default()
            .fg(if done { app.theme.green } else { app.theme.dim })
            .bg(row_bg)
            .add_modifier(Modifier::BOLD);
        let title_style = if done {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };

        lines.push(Line::from(vec![
            Span::styled(
                if is_cursor { "\u{258C}" } else { " " },
                Style::default().fg(app.theme.selection_border).bg(row_bg),
            ),
            Span::styled(if done { "[x] " } else { "[ ] " }, checkbox_style),
            Span::styled(step.title.clone(), title_style),
        ]));
        if !step.description.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("     ", Style::default().bg(bg)),
                Span::styled(step.description.clone(), dim_style),
            ]));
        }
        if let Some(ref note) = step.note {
            lines.push(Line::from(vec![
                Span::styled("     ", Style::default().bg(bg)),
                Span::styled(
                    format!("note: {}", note),
                    Style::default().fg(app.theme.yellow).bg(bg),
                ),
            ]));
        }
    }
    if quest.steps.is_empty() {
        lines.push(Line::from(Span::styled(" No steps", dim_style)));
    }

    // Keep the cursor's step visible
    let height = inner.height as usize;
    if let Some(&start) = step_line_starts.get(cursor) {
        if start < app.detail_scroll {
            app.detail_scroll = start;
        } else if height > 0 && start >= app.detail_scroll + height {
            app.detail_scroll = start + 1 - height;
        }
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .scroll((app.detail_scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}
