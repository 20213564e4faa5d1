use super::formatters::*;
use crate::app::{App, InputMode};
use crate::pipeline::{DigestItem, NewsDigest};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const COMPANY_PLACEHOLDER: &str = "Example: Tesla, Apple, Microsoft";

fn draw_company_input(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::CompanyInput;
    let border = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = if editing {
        Line::from(vec![
            Span::styled(app.company_input.as_str(), Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
        ])
    } else if app.company_input.is_empty() {
        Line::from(Span::styled(
            COMPANY_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.company_input.as_str())
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Enter the name of the company "),
    );
    frame.render_widget(input, area);
}

fn digest_item(i: usize, item: &DigestItem, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("Article {}", i + 1),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            truncate_str(&item.article.title, width.saturating_sub(12).max(10)),
            Style::default().fg(Color::Gray),
        ),
    ])];

    let summary_style = if item.summary.is_generated() {
        Style::default()
    } else {
        Style::default().fg(Color::Red)
    };
    for line in word_wrap(item.summary.text(), width) {
        lines.push(Line::from(Span::styled(line, summary_style)));
    }
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn draw_digest(frame: &mut Frame, area: Rect, digest: &NewsDigest, selected: usize) {
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = digest
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| digest_item(i, item, width))
        .collect();

    let title = if digest.truncated() {
        format!(
            " Summarized News Articles ({} of {} for '{}') ",
            digest.items.len(),
            digest.total_found,
            digest.company
        )
    } else {
        format!(
            " Summarized News Articles ({} for '{}') ",
            digest.items.len(),
            digest.company
        )
    };

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Rgb(40, 60, 100)))
        .highlight_symbol("▌");

    let mut state = ListState::default();
    state.select(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

pub fn draw_news(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    draw_company_input(frame, chunks[0], app);

    if app.loading {
        let loading = Paragraph::new("Fetching news...")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, chunks[1]);
        return;
    }

    match &app.news_digest {
        Some(digest) => draw_digest(frame, chunks[1], digest, app.news_selected),
        None => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Press [i] to type a company name, then [Enter] to fetch and summarize news 📰",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(hint, chunks[1]);
        }
    }
}
