use crate::app::INVESTMENT_TIPS;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_tips(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for tip in INVESTMENT_TIPS {
        lines.push(Line::from(vec![
            Span::styled("  - ", Style::default().fg(Color::Yellow)),
            Span::raw(tip),
        ]));
    }

    let tips = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" 📜 Essential Investment Tips "),
        );
    frame.render_widget(tips, area);
}
