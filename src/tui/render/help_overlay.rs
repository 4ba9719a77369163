use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Quest list", header_style)));
    add_binding(&mut lines, " \u{2191}\u{2193}/jk", "Move cursor", key_style, desc_style);
    add_binding(&mut lines, " enter/l", "Open quest detail", key_style, desc_style);
    add_binding(&mut lines, " tab", "Switch base/DLC tab", key_style, desc_style);
    add_binding(&mut lines, " 1 2", "Jump to base / DLC tab", key_style, desc_style);
    add_binding(&mut lines, " g G", "First / last quest", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Quest detail", header_style)));
    add_binding(&mut lines, " space/x", "Toggle step complete", key_style, desc_style);
    add_binding(&mut lines, " esc/h", "Close detail", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Search", header_style)));
    add_binding(&mut lines, " /", "Search quests", key_style, desc_style);
    add_binding(&mut lines, " n N", "Next / previous match", key_style, desc_style);
    lines.push(Line::from(""));

    add_binding(&mut lines, " q", "Quit", key_style, desc_style);
    add_binding(&mut lines, " ?", "Close this help", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:<12}", key), key_style),
        Span::styled(desc, desc_style),
    ]));
}
