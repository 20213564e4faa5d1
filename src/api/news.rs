use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{header, Client};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

pub const NEWS_API_BASE_URL: &str = "https://newsapi.org";
const EVERYTHING_PATH: &str = "/v2/everything";
// NewsAPI rejects requests without one (userAgentMissing).
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A news article from the keyword search. Only `title` is always present;
/// everything else may be null upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub source: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("news request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("news API returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed news response: {0}")]
    Decode(String),
}

/// Keyword search over a news provider.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Articles matching `keyword`, in provider order.
    async fn search(&self, keyword: &str) -> Result<Vec<Article>, NewsError>;
}

// Everything API response structures
#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Option<Vec<RawArticle>>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "publishedAt", default)]
    published_at: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let published_at = raw
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description,
            content: raw.content,
            source: raw.source.and_then(|s| s.name),
            author: raw.author,
            url: raw.url,
            published_at,
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            code,
        }) => match code {
            Some(code) => format!("{} ({})", message, code),
            None => message,
        },
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}

/// Parse an Everything response body into articles.
pub fn parse_articles(body: &str) -> Result<Vec<Article>, NewsError> {
    let response: EverythingResponse =
        serde_json::from_str(body).map_err(|e| NewsError::Decode(e.to_string()))?;
    Ok(response
        .articles
        .unwrap_or_default()
        .into_iter()
        .map(Article::from)
        .collect())
}

pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    /// A missing key is sent as empty and rejected upstream.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.unwrap_or_default(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), EVERYTHING_PATH)
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn search(&self, keyword: &str) -> Result<Vec<Article>, NewsError> {
        info!(keyword, "searching news");

        let response = self
            .client
            .get(self.endpoint())
            .header(header::USER_AGENT, USER_AGENT)
            .query(&[("q", keyword), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                error!("news request failed: {}", e);
                NewsError::Transport(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            error!(status = status.as_u16(), "news API error: {}", message);
            return Err(NewsError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let articles = parse_articles(&body).inspect_err(|e| error!("{}", e))?;
        info!(count = articles.len(), "news search complete");
        Ok(articles)
    }
}
