use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use finance_assistant::app::{App, AppMode, InputMode, MenuItem};
use finance_assistant::config::Config;
use finance_assistant::logging::{self, LoggingConfig, LOG_FILE_NAME};
use finance_assistant::ui;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "finance-assistant")]
#[command(about = "Company news summaries and portfolio recommendations in the terminal", long_about = None)]
struct Cli {
    /// Front end to run
    #[arg(short, long, value_enum, default_value_t = AppMode::Assistant)]
    mode: AppMode,

    /// Articles to summarize per search (overrides the config file)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..=100))]
    summary_limit: Option<u64>,

    /// Log file (defaults to the config directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();

    let log_file = match cli.log_file {
        Some(path) => path,
        None => Config::config_dir()?.join(LOG_FILE_NAME),
    };
    logging::init_logging(&LoggingConfig::from_env(log_file))?;

    let mut config = Config::load()?;
    if let Some(limit) = cli.summary_limit {
        config.summary_limit = limit as usize;
    }
    info!(
        mode = ?cli.mode,
        summary_limit = config.summary_limit,
        model = %config.gemini_model,
        "starting finance assistant"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, cli.mode);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("terminal loop failed: {}", e);
        eprintln!("Error: {}", e);
    }

    Ok(())
}

async fn fetch_news<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    if app.prepare_news_fetch() {
        // Show the loading state before blocking on the network.
        terminal.draw(|frame| ui::draw(frame, app))?;
        app.execute_news_fetch().await;
    }
    Ok(())
}

async fn generate_recommendation<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    app.prepare_recommendation();
    terminal.draw(|frame| ui::draw(frame, app))?;
    app.execute_recommendation().await;
    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Keeps the header clock ticking between key presses
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('?') => app.show_help(),
                KeyCode::Esc => app.clear_status(),
                KeyCode::Tab => app.next_menu(),
                KeyCode::BackTab => app.prev_menu(),
                KeyCode::Char('1') => app.select_menu(MenuItem::FinancialNews),
                KeyCode::Char('2') => app.select_menu(MenuItem::PortfolioFinder),
                KeyCode::Char('3') => app.select_menu(MenuItem::InvestmentTips),
                KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                code => match app.menu {
                    MenuItem::FinancialNews => match code {
                        KeyCode::Char('i') | KeyCode::Char('/') => app.start_company_input(),
                        KeyCode::Char('r') => fetch_news(terminal, app).await?,
                        KeyCode::Enter => {
                            if app.news_digest.is_some() {
                                app.open_article_detail();
                            } else {
                                app.start_company_input();
                            }
                        }
                        _ => {}
                    },
                    MenuItem::PortfolioFinder => match code {
                        KeyCode::Left | KeyCode::Char('h') => app.adjust_portfolio_field(false),
                        KeyCode::Right | KeyCode::Char('l') => app.adjust_portfolio_field(true),
                        KeyCode::Enter => {
                            if app.activate_portfolio_field() {
                                terminal.draw(|frame| ui::draw(frame, app))?;
                                app.execute_recommendation().await;
                            }
                        }
                        KeyCode::Char('g') => generate_recommendation(terminal, app).await?,
                        KeyCode::PageUp => app.scroll_recommendation_up(),
                        KeyCode::PageDown => app.scroll_recommendation_down(),
                        _ => {}
                    },
                    MenuItem::InvestmentTips => {}
                },
            },
            InputMode::CompanyInput => match key.code {
                KeyCode::Enter => fetch_news(terminal, app).await?,
                KeyCode::Esc => app.cancel_company_input(),
                KeyCode::Backspace => app.pop_company_char(),
                KeyCode::Char(c) => app.push_company_char(c),
                _ => {}
            },
            InputMode::FieldEdit => match key.code {
                KeyCode::Enter => app.confirm_field_edit(),
                KeyCode::Esc => app.cancel_field_edit(),
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Char(c) => app.input_buffer.push(c),
                _ => {}
            },
            InputMode::ArticleDetail => match key.code {
                KeyCode::Esc | KeyCode::Enter => app.close_article_detail(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_detail_up(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_detail_down(),
                _ => {}
            },
            InputMode::Help => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') => app.close_help(),
                _ => {}
            },
        }
    }
}
