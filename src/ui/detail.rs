use super::centered_rect;
use super::formatters::{format_age, truncate_str, word_wrap};
use crate::api::Article;
use crate::app::App;
use crate::pipeline::DigestItem;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn section(
    lines: &mut Vec<Line<'static>>,
    heading: &'static str,
    body: Option<&str>,
    width: usize,
) {
    lines.push(Line::default());
    lines.push(Line::styled(
        heading,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    match body.filter(|b| !b.trim().is_empty()) {
        Some(text) => lines.extend(word_wrap(text, width).into_iter().map(Line::from)),
        None => lines.push(Line::styled("Not provided.", dim())),
    }
}

/// Byline: author, local publish time and age, whichever are known.
fn byline(article: &Article) -> Option<Line<'static>> {
    let mut parts = Vec::new();
    if let Some(author) = &article.author {
        parts.push(author.clone());
    }
    if let Some(published) = article.published_at {
        let local = published.with_timezone(&chrono::Local);
        parts.push(format!(
            "{} ({})",
            local.format("%d %b %Y %H:%M"),
            format_age(published, chrono::Utc::now())
        ));
    }
    if parts.is_empty() {
        None
    } else {
        Some(Line::styled(parts.join("  ·  "), Style::default().fg(Color::Gray)))
    }
}

fn article_lines(item: &DigestItem, width: usize) -> Vec<Line<'static>> {
    let article = &item.article;
    let title = if article.title.is_empty() {
        "(no title)"
    } else {
        article.title.as_str()
    };

    let mut lines: Vec<Line<'static>> = word_wrap(title, width)
        .into_iter()
        .map(|l| Line::styled(l, Style::default().add_modifier(Modifier::BOLD)))
        .collect();
    lines.extend(byline(article));
    if let Some(url) = &article.url {
        lines.push(Line::styled(
            truncate_str(url, width.max(4)),
            Style::default().fg(Color::Blue),
        ));
    }
    lines.push(Line::styled("─".repeat(width), dim()));

    section(&mut lines, "Summary", Some(item.summary.text()), width);
    section(&mut lines, "Description", article.description.as_deref(), width);
    section(&mut lines, "Content", article.content.as_deref(), width);
    lines
}

pub fn draw_article_detail(frame: &mut Frame, app: &mut App) {
    let Some(item) = app.selected_item().cloned() else {
        return;
    };

    let area = centered_rect(75, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(
            " Article {} · {} ",
            app.news_selected + 1,
            item.article.source.as_deref().unwrap_or("Unknown source")
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines = article_lines(&item, body.width as usize);
    let max_scroll = lines.len().saturating_sub(body.height as usize);
    app.detail_scroll = app.detail_scroll.min(max_scroll);

    let offset = u16::try_from(app.detail_scroll).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), body);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[↑/↓] ", Style::default().fg(Color::Cyan)),
            Span::styled("scroll  ", dim()),
            Span::styled("[Esc] ", Style::default().fg(Color::Cyan)),
            Span::styled("close", dim()),
        ])),
        footer,
    );
}
