//! Request pipeline between user input and the two external services.
//!
//! Every entry point here is one user action: it runs its calls in sequence,
//! keeps no state between invocations, and turns every failure into a value
//! the caller can display.

mod news;
mod portfolio;
mod prompt;
mod summary;

pub use news::{
    fetch_company_news, run_news_pipeline, summarize_company_news, CompanyQuery, DigestItem,
    NewsDigest, NewsFetch, NewsOutcome,
};
pub use portfolio::{
    recommend, Diversification, InvestmentAmount, InvestmentDuration, PortfolioRequest,
    RiskTolerance,
};
pub use prompt::{article_prompt, portfolio_prompt, NO_PREFERENCE};
pub use summary::{ArticleSummary, Summarizer, SummaryLimit, UNAVAILABLE_SUMMARY};

use thiserror::Error;

/// Input rejected before any external call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid company name.")]
    EmptyCompanyName,
    #[error("Investment amount must be at least ₹{min}.")]
    AmountBelowMinimum { min: u64 },
    #[error("'{0}' is not a valid amount.")]
    InvalidAmount(String),
}
