#![allow(dead_code)]

use async_trait::async_trait;
use finance_assistant::api::{Article, GenerationError, NewsError, NewsSource, TextGenerator};
use finance_assistant::app::{App, AppMode};
use finance_assistant::config::Config;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn make_article(title: &str) -> Article {
    Article::new(title)
        .with_description(format!("{} description", title))
        .with_content(format!("{} content", title))
}

pub fn make_articles(n: usize) -> Vec<Article> {
    (1..=n).map(|i| make_article(&format!("Article {}", i))).collect()
}

pub enum FakeResponse {
    Articles(Vec<Article>),
    Status(u16),
}

/// News source returning a canned response and counting calls.
pub struct FakeNewsSource {
    response: FakeResponse,
    calls: AtomicUsize,
    keywords: Mutex<Vec<String>>,
}

impl FakeNewsSource {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self::new(FakeResponse::Articles(articles))
    }

    pub fn failing(status: u16) -> Self {
        Self::new(FakeResponse::Status(status))
    }

    fn new(response: FakeResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            keywords: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn keywords(&self) -> Vec<String> {
        self.keywords.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSource for FakeNewsSource {
    async fn search(&self, keyword: &str) -> Result<Vec<Article>, NewsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.keywords.lock().unwrap().push(keyword.to_string());
        match &self.response {
            FakeResponse::Articles(articles) => Ok(articles.clone()),
            FakeResponse::Status(status) => Err(NewsError::Status {
                status: *status,
                message: "upstream unavailable".to_string(),
            }),
        }
    }
}

/// Generator that echoes the article title line and fails on chosen call indices.
pub struct ScriptedGenerator {
    fail_on: HashSet<usize>,
    reply: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn echo() -> Self {
        Self::failing_on(&[])
    }

    pub fn failing_on(indices: &[usize]) -> Self {
        Self {
            fail_on: indices.iter().copied().collect(),
            reply: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            ..Self::echo()
        }
    }

    pub fn always_failing() -> Self {
        Self::failing_on(&(0..100).collect::<Vec<_>>())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let index = self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail_on.contains(&index) {
            return Err(GenerationError::Status {
                status: 503,
                message: "model overloaded".to_string(),
            });
        }
        if let Some(reply) = &self.reply {
            return Ok(reply.clone());
        }
        let title = prompt
            .lines()
            .find_map(|l| l.strip_prefix("Title: "))
            .unwrap_or_default();
        Ok(format!("  Summary of {}\n", title))
    }
}

pub fn test_app(
    mode: AppMode,
    news: Arc<FakeNewsSource>,
    generator: Arc<ScriptedGenerator>,
) -> App {
    App::with_services(Config::default(), mode, news, generator)
}
