use std::fmt;

use tracing::{info, warn};

use super::prompt::article_prompt;
use crate::api::{Article, TextGenerator};

pub const UNAVAILABLE_SUMMARY: &str = "Unable to generate summary.";

/// How many of the fetched articles get summarized, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLimit(usize);

impl SummaryLimit {
    pub const DEFAULT: SummaryLimit = SummaryLimit(5);

    /// Limits below one are raised to one.
    pub fn new(limit: usize) -> Self {
        Self(limit.max(1))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn select<'a>(&self, articles: &'a [Article]) -> &'a [Article] {
        &articles[..articles.len().min(self.0)]
    }
}

impl Default for SummaryLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleSummary {
    Generated(String),
    Unavailable,
}

impl ArticleSummary {
    pub fn text(&self) -> &str {
        match self {
            ArticleSummary::Generated(text) => text,
            ArticleSummary::Unavailable => UNAVAILABLE_SUMMARY,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, ArticleSummary::Generated(_))
    }
}

impl fmt::Display for ArticleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

pub struct Summarizer<'a> {
    generator: &'a dyn TextGenerator,
    limit: SummaryLimit,
}

impl<'a> Summarizer<'a> {
    pub fn new(generator: &'a dyn TextGenerator, limit: SummaryLimit) -> Self {
        Self { generator, limit }
    }

    /// One summary per selected article, same order. A failed article gets
    /// `ArticleSummary::Unavailable` and the rest still run.
    pub async fn summarize(&self, articles: &[Article]) -> Vec<ArticleSummary> {
        let selected = self.limit.select(articles);
        let mut summaries = Vec::with_capacity(selected.len());

        for (i, article) in selected.iter().enumerate() {
            let prompt = article_prompt(article);
            match self.generator.generate(&prompt).await {
                Ok(text) => summaries.push(ArticleSummary::Generated(text.trim().to_string())),
                Err(e) => {
                    warn!(article = i + 1, "error generating summary: {}", e);
                    summaries.push(ArticleSummary::Unavailable);
                }
            }
        }

        info!(
            requested = selected.len(),
            generated = summaries.iter().filter(|s| s.is_generated()).count(),
            "summarization complete"
        );
        summaries
    }
}
