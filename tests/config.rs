use finance_assistant::config::{Config, Credentials};
use finance_assistant::pipeline::SummaryLimit;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = Config::load_from(&path).unwrap();

    assert!(path.exists());
    assert_eq!(config.summary_limit(), SummaryLimit::DEFAULT);
    assert_eq!(config.news_base_url, "https://newsapi.org");
    assert_eq!(config.gemini_model, "gemini-1.5-flash-001");
}

#[test]
fn saved_settings_load_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        news_base_url: "http://localhost:9000".to_string(),
        gemini_model: "gemini-2.0-flash".to_string(),
        summary_limit: 8,
        ..Config::default()
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.news_base_url, "http://localhost:9000");
    assert_eq!(loaded.gemini_model, "gemini-2.0-flash");
    assert_eq!(loaded.summary_limit().get(), 8);
}

#[test]
fn zero_limit_is_raised_to_one() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"summary_limit": 0}"#).unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.summary_limit, 1);
    assert_eq!(config.summary_limit(), SummaryLimit::new(0));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(Config::load_from(&path).is_err());
}

#[test]
fn api_keys_stay_out_of_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    Config::default()
        .with_credentials(Credentials {
            news_api_key: Some("nk-123".to_string()),
            gemini_api_key: Some("gk-456".to_string()),
        })
        .save_to(&path)
        .unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("nk-123"));
    assert!(!content.contains("gk-456"));

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.credentials, Credentials::default());
}
