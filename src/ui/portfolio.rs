use super::formatters::{format_amount, word_wrap};
use crate::app::{App, InputMode, PortfolioField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const LABEL_WIDTH: usize = 40;

fn field_line(app: &App, field: PortfolioField) -> Line<'static> {
    let form = &app.portfolio_form;
    let focused = form.focus == field;
    let editing = focused && app.input_mode == InputMode::FieldEdit;

    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    if field == PortfolioField::Submit {
        let button_style = if focused {
            Style::default()
                .bg(Color::Rgb(46, 134, 193))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(46, 134, 193))
        };
        return Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("[ {} ]", field.label()), button_style),
        ]);
    }

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
    ];

    if editing {
        spans.push(Span::styled(
            app.input_buffer.clone(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
        return Line::from(spans);
    }

    let value_style = Style::default().fg(Color::Magenta);
    match field {
        PortfolioField::RiskTolerance
        | PortfolioField::Diversification
        | PortfolioField::Duration => {
            spans.push(Span::styled(
                format!("< {} >", form.value_of(field)),
                value_style.add_modifier(Modifier::BOLD),
            ));
        }
        PortfolioField::PreferredStocks | PortfolioField::PreferredAssets => {
            let value = form.value_of(field);
            if value.trim().is_empty() {
                spans.push(Span::styled(
                    field.placeholder(),
                    Style::default().fg(Color::DarkGray),
                ));
            } else {
                spans.push(Span::styled(value, value_style));
            }
        }
        PortfolioField::Amount => {
            spans.push(Span::styled(
                format!("< ₹{} >", format_amount(form.amount.value())),
                value_style.add_modifier(Modifier::BOLD),
            ));
        }
        PortfolioField::Submit => {}
    }
    Line::from(spans)
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Get AI-powered investment suggestions based on your risk, preferences, and time horizon.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(PortfolioField::ALL.iter().map(|&f| field_line(app, f)));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 📊 Personal Finance Planner "),
    );
    frame.render_widget(form, area);
}

fn draw_recommendation(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 📌 Your AI-Powered Portfolio Recommendations ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.loading {
        frame.render_widget(
            Paragraph::new("Generating recommendation...")
                .style(Style::default().fg(Color::Yellow)),
            inner,
        );
        return;
    }

    let Some(text) = &app.recommendation else {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Fill in the form and choose [Get Portfolio Recommendations].",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
        return;
    };

    let lines = word_wrap(text, inner.width as usize);
    let height = inner.height as usize;
    let max_scroll = lines.len().saturating_sub(height);
    app.recommendation_scroll = app.recommendation_scroll.min(max_scroll);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(app.recommendation_scroll)
        .take(height)
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

pub fn draw_portfolio(frame: &mut Frame, area: Rect, app: &mut App) {
    let form_height = PortfolioField::ALL.len() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(form_height), Constraint::Min(5)])
        .split(area);

    draw_form(frame, chunks[0], app);
    draw_recommendation(frame, chunks[1], app);
}
