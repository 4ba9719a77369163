use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::aggregate;
use crate::tui::app::App;

use super::bar_spans;

/// Render the aggregate stats header for the active tab: overall percent,
/// completed quests, completed steps, and a wide progress bar.
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let quests = app.visible();
    let stats = aggregate::aggregate_stats(&quests, &app.log.progress);

    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let stats_line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(format!("{}%", stats.percent), value_style),
        Span::styled(" overall   ", dim_style),
        Span::styled(
            format!("{}/{}", stats.completed_quests, stats.total_quests),
            value_style,
        ),
        Span::styled(" quests   ", dim_style),
        Span::styled(
            format!("{}/{}", stats.completed_steps, stats.total_steps),
            value_style,
        ),
        Span::styled(" steps", dim_style),
    ]);

    let bar_width = (area.width as usize).saturating_sub(2);
    let mut bar = vec![Span::styled(" ", Style::default().bg(bg))];
    bar.extend(bar_spans(
        stats.percent,
        bar_width,
        app.theme.highlight,
        app.theme.dim,
        bg,
    ));

    let lines = vec![stats_line, Line::from(bar), Line::from("")];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use crate::tui::render::test_helpers::{TERM_W, render_to_string, sample_app};

    use super::*;

    #[test]
    fn dashboard_counts_visible_tab_only() {
        let mut app = sample_app();
        app.log.progress.set("ranni-1", true);

        // base tab: 5 steps across ranni+alex, 1 complete → 20%
        let text = render_to_string(TERM_W, 3, |frame, area| {
            render_dashboard(frame, &app, area);
        });
        assert!(text.contains("20%"), "got: {}", text);
        assert!(text.contains("1/5 steps"), "got: {}", text);
        assert!(text.contains("0/2 quests"), "got: {}", text);
    }

    #[test]
    fn dashboard_zero_steps_is_zero_percent() {
        let mut app = sample_app();
        app.log.catalog.retain(|q| q.steps.is_empty());
        let text = render_to_string(TERM_W, 3, |frame, area| {
            render_dashboard(frame, &app, area);
        });
        assert!(text.contains("0%"), "got: {}", text);
    }
}
