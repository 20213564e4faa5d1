use super::centered_rect;
use crate::app::AppMode;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
        Span::raw(action),
    ])
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn help_content(mode: AppMode) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        heading(" Financial News"),
        key_line("i or /", "Type a company name"),
        key_line("Enter", "Fetch and summarize (while typing)"),
        key_line("r", "Fetch again for the same company"),
        key_line("↑↓ or j/k", "Select article"),
        key_line("Enter", "Open article detail"),
    ];

    if mode == AppMode::Assistant {
        lines.extend([
            Line::from(""),
            heading(" Portfolio Finder"),
            key_line("↑↓ or j/k", "Move between fields"),
            key_line("←→ or h/l", "Change selection or amount"),
            key_line("Enter", "Edit text field or submit"),
            key_line("g", "Get recommendations"),
            key_line("PgUp/PgDn", "Scroll recommendation"),
            Line::from(""),
            heading(" Navigation"),
            key_line("Tab/Shift+Tab", "Next/previous menu"),
            key_line("1 2 3", "News, Portfolio, Tips"),
        ]);
    }

    lines.extend([
        Line::from(""),
        key_line("?", "Toggle this help"),
        key_line("q", "Quit"),
    ]);
    lines
}

pub fn draw_help(frame: &mut Frame, mode: AppMode) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let help = Paragraph::new(help_content(mode)).block(
        Block::default()
            .title(" Help ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, area);
}
