use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    // A failed progress write outranks everything else on this row
    if let Some(ref msg) = app.save_error {
        let line = Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.red).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref pattern) = app.last_search {
                with_right_hint(
                    vec![Span::styled(
                        format!("/{}", pattern),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )],
                    "n/N next/prev",
                    app,
                    width,
                )
            } else if app.log.config.ui.show_key_hints {
                let hint = match app.view {
                    View::List => "j/k move  enter open  tab switch  / search  ? help  q quit",
                    View::Detail { .. } => "j/k move  space toggle  esc close  q quit",
                };
                Line::from(Span::styled(
                    format!(" {}", hint),
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Search => with_right_hint(
            vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                // ▌ cursor
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ],
            "Enter search  Esc cancel",
            app,
            width,
        ),
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// Pad spans so the hint lands on the right edge
fn with_right_hint<'a>(
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    app: &App,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
    Line::from(spans)
}
