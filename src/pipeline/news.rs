use tracing::{error, info};

use super::summary::{ArticleSummary, Summarizer, SummaryLimit};
use super::ValidationError;
use crate::api::{Article, NewsError, NewsSource, TextGenerator};

/// A company name that passed the non-blank check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyQuery(String);

impl CompanyQuery {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let name = input.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyCompanyName);
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsFetch {
    /// Never empty.
    Found(Vec<Article>),
    NoResults,
}

pub async fn fetch_company_news(
    source: &dyn NewsSource,
    query: &CompanyQuery,
) -> Result<NewsFetch, NewsError> {
    let articles = source.search(query.as_str()).await?;
    if articles.is_empty() {
        Ok(NewsFetch::NoResults)
    } else {
        Ok(NewsFetch::Found(articles))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DigestItem {
    pub article: Article,
    pub summary: ArticleSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsDigest {
    pub company: String,
    /// Articles the source returned, before the summary limit.
    pub total_found: usize,
    pub items: Vec<DigestItem>,
}

impl NewsDigest {
    pub fn truncated(&self) -> bool {
        self.total_found > self.items.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NewsOutcome {
    Invalid(ValidationError),
    NoResults { company: String },
    FetchFailed { company: String, error: String },
    Summarized(NewsDigest),
}

/// Fetch then summarize for an already validated company name.
pub async fn summarize_company_news(
    query: &CompanyQuery,
    source: &dyn NewsSource,
    generator: &dyn TextGenerator,
    limit: SummaryLimit,
) -> NewsOutcome {
    let company = query.as_str().to_string();

    let articles = match fetch_company_news(source, query).await {
        Ok(NewsFetch::Found(articles)) => articles,
        Ok(NewsFetch::NoResults) => {
            info!(company = %company, "no articles found");
            return NewsOutcome::NoResults { company };
        }
        Err(e) => {
            error!(company = %company, "error fetching news: {}", e);
            return NewsOutcome::FetchFailed {
                company,
                error: e.to_string(),
            };
        }
    };

    let total_found = articles.len();
    let summaries = Summarizer::new(generator, limit).summarize(&articles).await;
    let items = articles
        .into_iter()
        .zip(summaries)
        .map(|(article, summary)| DigestItem { article, summary })
        .collect();

    NewsOutcome::Summarized(NewsDigest {
        company,
        total_found,
        items,
    })
}

/// Validate raw input, then fetch and summarize. Blank input never reaches
/// the news source.
pub async fn run_news_pipeline(
    input: &str,
    source: &dyn NewsSource,
    generator: &dyn TextGenerator,
    limit: SummaryLimit,
) -> NewsOutcome {
    match CompanyQuery::parse(input) {
        Ok(query) => summarize_company_news(&query, source, generator, limit).await,
        Err(e) => NewsOutcome::Invalid(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_company_rejected() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(
                CompanyQuery::parse(input),
                Err(ValidationError::EmptyCompanyName)
            );
        }
    }

    #[test]
    fn company_is_trimmed() {
        assert_eq!(CompanyQuery::parse("  Tesla ").unwrap().as_str(), "Tesla");
    }
}
