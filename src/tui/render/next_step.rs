use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::aggregate;
use crate::tui::app::App;

use super::truncate_to_width;

/// Render the next-incomplete-step panel (dlc tab only). Re-rendered from
/// scratch every frame, since any toggle can change its target step.
pub fn render_next_step(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let content = match aggregate::next_incomplete_step(&app.log.catalog, &app.log.progress) {
        Some(next) => Line::from(vec![
            Span::styled(" \u{25B8} ", Style::default().fg(app.theme.yellow).bg(bg)),
            Span::styled(
                truncate_to_width(&next.step.title, 48),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", truncate_to_width(&next.quest.npc, 24)),
                dim_style,
            ),
        ]),
        None => Line::from(vec![
            Span::styled(" \u{2713} ", Style::default().fg(app.theme.green).bg(bg)),
            Span::styled(
                "All DLC steps complete",
                Style::default().fg(app.theme.green).bg(bg),
            ),
        ]),
    };

    let lines = vec![
        Line::from(Span::styled(" Next step", dim_style)),
        content,
    ];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, sample_app};

    use super::*;

    #[test]
    fn panel_follows_sequence_order_not_file_order() {
        let app = sample_app();
        // leda-2 has sequenceOrder 0, leda-1 has 1: leda-2 comes first
        let text = render_to_string(TERM_W, 2, |frame, area| {
            render_next_step(frame, &app, area);
        });
        assert!(text.contains("Reach the scorched ruins"), "got: {}", text);
    }

    #[test]
    fn panel_advances_after_toggle() {
        let mut app = sample_app();
        app.log.progress.set("leda-2", true);
        let text = render_to_string(TERM_W, 2, |frame, area| {
            render_next_step(frame, &app, area);
        });
        assert!(text.contains("Speak with Leda"), "got: {}", text);
    }

    #[test]
    fn panel_reports_completion() {
        let mut app = sample_app();
        app.log.progress.set("leda-1", true);
        app.log.progress.set("leda-2", true);
        let text = render_to_string(TERM_W, 2, |frame, area| {
            render_next_step(frame, &app, area);
        });
        assert!(text.contains("All DLC steps complete"), "got: {}", text);
    }
}
