mod news;
mod portfolio;
mod tips;

pub use portfolio::{PortfolioField, PortfolioForm};
pub use tips::INVESTMENT_TIPS;

use crate::api::{GeminiClient, NewsApiClient, NewsSource, TextGenerator};
use crate::config::Config;
use crate::pipeline::{CompanyQuery, NewsDigest};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AppMode {
    /// Financial news hub only
    News,
    /// News, portfolio finder and investment tips behind a side menu
    #[default]
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    FinancialNews,
    PortfolioFinder,
    InvestmentTips,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [
        MenuItem::FinancialNews,
        MenuItem::PortfolioFinder,
        MenuItem::InvestmentTips,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::FinancialNews => "📰 Financial News",
            MenuItem::PortfolioFinder => "📈 Portfolio Finder",
            MenuItem::InvestmentTips => "💰 Investment Tips",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            MenuItem::FinancialNews => 0,
            MenuItem::PortfolioFinder => 1,
            MenuItem::InvestmentTips => 2,
        }
    }

    pub fn next(&self) -> MenuItem {
        match self {
            MenuItem::FinancialNews => MenuItem::PortfolioFinder,
            MenuItem::PortfolioFinder => MenuItem::InvestmentTips,
            MenuItem::InvestmentTips => MenuItem::FinancialNews,
        }
    }

    pub fn prev(&self) -> MenuItem {
        match self {
            MenuItem::FinancialNews => MenuItem::InvestmentTips,
            MenuItem::PortfolioFinder => MenuItem::FinancialNews,
            MenuItem::InvestmentTips => MenuItem::PortfolioFinder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    CompanyInput,
    FieldEdit,
    ArticleDetail,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

pub struct App {
    pub config: Config,
    pub mode: AppMode,
    pub menu: MenuItem,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status: Option<StatusMessage>,
    pub loading: bool,
    pub company_input: String,
    pub news_digest: Option<NewsDigest>,
    pub news_selected: usize,
    pub detail_scroll: usize,
    pub portfolio_form: PortfolioForm,
    pub recommendation: Option<String>,
    pub recommendation_scroll: usize,
    pending_query: Option<CompanyQuery>,
    pending_prompt: Option<String>,
    news_source: Arc<dyn NewsSource>,
    generator: Arc<dyn TextGenerator>,
}

impl App {
    pub fn new(config: Config, mode: AppMode) -> Self {
        let news_source = Arc::new(NewsApiClient::new(
            config.news_base_url.clone(),
            config.credentials.news_api_key.clone(),
        ));
        let generator = Arc::new(GeminiClient::new(
            config.gemini_base_url.clone(),
            config.gemini_model.clone(),
            config.credentials.gemini_api_key.clone(),
        ));
        Self::with_services(config, mode, news_source, generator)
    }

    pub fn with_services(
        config: Config,
        mode: AppMode,
        news_source: Arc<dyn NewsSource>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            config,
            mode,
            menu: MenuItem::FinancialNews,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status: None,
            loading: false,
            company_input: String::new(),
            news_digest: None,
            news_selected: 0,
            detail_scroll: 0,
            portfolio_form: PortfolioForm::default(),
            recommendation: None,
            recommendation_scroll: 0,
            pending_query: None,
            pending_prompt: None,
            news_source,
            generator,
        }
    }

    /// Menus other than news exist only in assistant mode.
    pub fn next_menu(&mut self) {
        if self.mode == AppMode::Assistant {
            self.menu = self.menu.next();
        }
    }

    pub fn prev_menu(&mut self) {
        if self.mode == AppMode::Assistant {
            self.menu = self.menu.prev();
        }
    }

    pub fn select_menu(&mut self, menu: MenuItem) {
        if self.mode == AppMode::Assistant {
            self.menu = menu;
        }
    }

    pub fn move_up(&mut self) {
        match self.menu {
            MenuItem::FinancialNews => {
                if self.news_selected > 0 {
                    self.news_selected -= 1;
                }
            }
            MenuItem::PortfolioFinder => self.portfolio_form.focus_prev(),
            MenuItem::InvestmentTips => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.menu {
            MenuItem::FinancialNews => {
                let len = self.news_digest.as_ref().map_or(0, |d| d.items.len());
                if len > 0 && self.news_selected < len - 1 {
                    self.news_selected += 1;
                }
            }
            MenuItem::PortfolioFinder => self.portfolio_form.focus_next(),
            MenuItem::InvestmentTips => {}
        }
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
