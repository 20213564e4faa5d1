pub mod gemini;
pub mod news;

pub use gemini::{GeminiClient, GenerationError, TextGenerator};
pub use news::{Article, NewsApiClient, NewsError, NewsSource};
