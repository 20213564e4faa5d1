mod detail;
pub mod formatters;
mod modals;
mod news;
mod portfolio;
mod tips;

use crate::app::{App, AppMode, InputMode, MenuItem, StatusLevel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    let body = match app.mode {
        AppMode::Assistant => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(24), Constraint::Min(20)])
                .split(chunks[1]);
            draw_menu(frame, columns[0], app);
            columns[1]
        }
        AppMode::News => chunks[1],
    };

    match app.menu {
        MenuItem::FinancialNews => news::draw_news(frame, body, app),
        MenuItem::PortfolioFinder => portfolio::draw_portfolio(frame, body, app),
        MenuItem::InvestmentTips => tips::draw_tips(frame, body),
    }

    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::ArticleDetail {
        detail::draw_article_detail(frame, app);
    }
    if app.input_mode == InputMode::Help {
        modals::draw_help(frame, app.mode);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let (title, subtext) = match app.mode {
        AppMode::News => (
            "📰 Financial News Hub",
            "Stay updated with the latest financial news about your favorite companies.",
        ),
        AppMode::Assistant => (
            "📈 Finance Assistant",
            "Your all-in-one tool for financial news and portfolio recommendations.",
        ),
    };

    let status = if app.loading {
        "[Loading...]".to_string()
    } else {
        format!("[{}]", chrono::Local::now().format("%H:%M:%S"))
    };

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(status, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(subtext, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| ListItem::new(Line::from(format!(" {}", item.label()))))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Menu "))
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 60, 100))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(app.menu.index()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn status_style(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => Style::default().fg(Color::Cyan),
        StatusLevel::Success => Style::default().fg(Color::Green),
        StatusLevel::Warning => Style::default().fg(Color::Yellow),
        StatusLevel::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn key_help(app: &App) -> &'static str {
    match app.input_mode {
        InputMode::CompanyInput => " [Enter] Fetch and summarize | [Esc] Done ",
        InputMode::FieldEdit => " [Enter] Save | [Esc] Cancel ",
        InputMode::ArticleDetail => " [↑↓] Scroll | [Enter/Esc] Close ",
        InputMode::Help => " [?/Enter/Esc] Close help ",
        InputMode::Normal => match (app.mode, app.menu) {
            (AppMode::News, _) => {
                " [i] Company [Enter] Detail [r] Refetch [↑↓] Nav [?] Help [q] Quit "
            }
            (AppMode::Assistant, MenuItem::FinancialNews) => {
                " [i] Company [Enter] Detail [r] Refetch [↑↓] Nav [Tab] Menu [?] Help [q] Quit "
            }
            (AppMode::Assistant, MenuItem::PortfolioFinder) => {
                " [↑↓] Field [←→] Change [Enter] Edit/Submit [g] Generate [PgUp/PgDn] Scroll [Tab] Menu [q] Quit "
            }
            (AppMode::Assistant, MenuItem::InvestmentTips) => " [Tab] Menu [?] Help [q] Quit ",
        },
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help = key_help(app);
    let content = match (&app.status, app.input_mode) {
        (Some(status), InputMode::Normal) => Line::from(vec![
            Span::styled(format!(" {}", status.text), status_style(status.level)),
            Span::raw(" | "),
            Span::styled(help, Style::default().fg(Color::DarkGray)),
        ]),
        _ => Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
