use std::sync::Arc;

use super::{App, InputMode, StatusMessage};
use crate::pipeline::{summarize_company_news, CompanyQuery, DigestItem, NewsOutcome};

impl App {
    pub fn start_company_input(&mut self) {
        self.input_mode = InputMode::CompanyInput;
    }

    pub fn cancel_company_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_company_char(&mut self, c: char) {
        self.company_input.push(c);
    }

    pub fn pop_company_char(&mut self) {
        self.company_input.pop();
    }

    /// Validate the company name and stage a fetch. Returns false, with a
    /// warning set, when the name is blank.
    pub fn prepare_news_fetch(&mut self) -> bool {
        self.input_mode = InputMode::Normal;
        match CompanyQuery::parse(&self.company_input) {
            Ok(query) => {
                self.pending_query = Some(query);
                self.loading = true;
                self.status = Some(StatusMessage::info("Fetching news..."));
                true
            }
            Err(e) => {
                self.status = Some(StatusMessage::warning(e.to_string()));
                false
            }
        }
    }

    /// Run the staged fetch and summaries, then clear `loading`.
    pub async fn execute_news_fetch(&mut self) {
        let Some(query) = self.pending_query.take() else {
            self.loading = false;
            return;
        };
        let source = Arc::clone(&self.news_source);
        let generator = Arc::clone(&self.generator);
        let outcome = summarize_company_news(
            &query,
            source.as_ref(),
            generator.as_ref(),
            self.config.summary_limit(),
        )
        .await;
        self.apply_news_outcome(outcome);
        self.loading = false;
    }

    pub async fn fetch_and_summarize(&mut self) {
        if self.prepare_news_fetch() {
            self.execute_news_fetch().await;
        }
    }

    pub fn apply_news_outcome(&mut self, outcome: NewsOutcome) {
        self.news_selected = 0;
        self.detail_scroll = 0;
        match outcome {
            NewsOutcome::Invalid(e) => {
                self.status = Some(StatusMessage::warning(e.to_string()));
            }
            NewsOutcome::NoResults { company } => {
                self.news_digest = None;
                self.status = Some(StatusMessage::info(format!(
                    "No news articles found for '{}'.",
                    company
                )));
            }
            NewsOutcome::FetchFailed { error, .. } => {
                self.news_digest = None;
                self.status = Some(StatusMessage::error(format!(
                    "An error occurred while fetching news: {}",
                    error
                )));
            }
            NewsOutcome::Summarized(digest) => {
                let mut text = format!(
                    "Found {} articles related to '{}'.",
                    digest.total_found, digest.company
                );
                if digest.truncated() {
                    text.push_str(&format!(" Summarized the first {}.", digest.items.len()));
                }
                self.status = Some(StatusMessage::success(text));
                self.news_digest = Some(digest);
            }
        }
    }

    pub fn selected_item(&self) -> Option<&DigestItem> {
        self.news_digest
            .as_ref()
            .and_then(|d| d.items.get(self.news_selected))
    }

    pub fn open_article_detail(&mut self) {
        if self.selected_item().is_some() {
            self.detail_scroll = 0;
            self.input_mode = InputMode::ArticleDetail;
        }
    }

    pub fn close_article_detail(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll += 1;
    }
}
