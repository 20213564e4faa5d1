mod common;

use common::ScriptedGenerator;
use finance_assistant::api::{NewsApiClient, NewsError, NewsSource};
use finance_assistant::pipeline::{
    summarize_company_news, CompanyQuery, NewsOutcome, SummaryLimit,
};
use httpmock::prelude::*;
use serde_json::json;
use std::net::TcpListener;

/// Base URL of a local port with nothing listening on it.
fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

#[tokio::test]
async fn search_sends_keyword_and_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", "Tesla")
                .query_param("apiKey", "news-key");
            then.status(200).json_body(json!({
                "status": "ok",
                "totalResults": 2,
                "articles": [
                    {
                        "source": {"id": null, "name": "Reuters"},
                        "author": "A. Writer",
                        "title": "Tesla deliveries climb",
                        "description": "Quarterly deliveries beat estimates",
                        "url": "https://example.com/tesla-1",
                        "publishedAt": "2024-10-02T13:00:00Z",
                        "content": "Tesla said on Wednesday..."
                    },
                    {
                        "source": {"id": null, "name": "Bloomberg"},
                        "author": null,
                        "title": "Tesla shares slip",
                        "description": null,
                        "url": "https://example.com/tesla-2",
                        "publishedAt": null,
                        "content": null
                    }
                ]
            }));
        })
        .await;

    let client = NewsApiClient::new(server.base_url(), Some("news-key".to_string()));
    let articles = client.search("Tesla").await.unwrap();

    mock.assert_async().await;
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Tesla deliveries climb");
    assert_eq!(articles[0].source.as_deref(), Some("Reuters"));
    assert!(articles[0].published_at.is_some());
    assert_eq!(articles[1].title, "Tesla shares slip");
    assert_eq!(articles[1].description, None);
    assert_eq!(articles[1].content, None);
}

#[tokio::test]
async fn keyword_with_spaces_is_encoded() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", "Bank of America");
            then.status(200)
                .json_body(json!({"status": "ok", "totalResults": 0, "articles": []}));
        })
        .await;

    let client = NewsApiClient::new(server.base_url(), Some("k".to_string()));
    let articles = client.search("Bank of America").await.unwrap();

    mock.assert_async().await;
    assert!(articles.is_empty());
}

#[tokio::test]
async fn missing_articles_field_is_empty_list() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(json!({"status": "ok"}));
        })
        .await;

    let client = NewsApiClient::new(server.base_url(), None);
    assert!(client.search("Acme").await.unwrap().is_empty());
}

#[tokio::test]
async fn error_status_carries_provider_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(401).json_body(json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."
            }));
        })
        .await;

    let client = NewsApiClient::new(server.base_url(), Some("bad".to_string()));
    let err = client.search("Tesla").await.unwrap_err();

    match &err {
        NewsError::Status { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message, "Your API key is invalid or incorrect. (apiKeyInvalid)");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn unparseable_body_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).body("<html>gateway</html>");
        })
        .await;

    let client = NewsApiClient::new(server.base_url(), Some("k".to_string()));
    let err = client.search("Tesla").await.unwrap_err();
    assert!(matches!(err, NewsError::Decode(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(json!({"articles": []}));
        })
        .await;

    let client = NewsApiClient::new(format!("{}/", server.base_url()), None);
    client.search("Tesla").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn requests_identify_with_user_agent() {
    let server = MockServer::start_async().await;
    let with_agent = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .header_exists("user-agent");
            then.status(200)
                .json_body(json!({"status": "ok", "totalResults": 0, "articles": []}));
        })
        .await;
    let anonymous = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(400).json_body(json!({
                "status": "error",
                "code": "userAgentMissing",
                "message": "Please set your User-Agent header to identify your application."
            }));
        })
        .await;

    let client = NewsApiClient::new(server.base_url(), Some("k".to_string()));
    let articles = client.search("Tesla").await.unwrap();

    assert!(articles.is_empty());
    with_agent.assert_hits_async(1).await;
    anonymous.assert_hits_async(0).await;
}

#[tokio::test]
async fn unreachable_host_is_transport_error() {
    let client = NewsApiClient::new(closed_port_url(), Some("k".to_string()));
    let err = client.search("Tesla").await.unwrap_err();
    assert!(matches!(err, NewsError::Transport(_)), "got {:?}", err);
}

#[tokio::test]
async fn unreachable_host_is_fetch_failure_without_summaries() {
    let client = NewsApiClient::new(closed_port_url(), Some("k".to_string()));
    let generator = ScriptedGenerator::echo();
    let query = CompanyQuery::parse("Tesla").unwrap();

    let limit = SummaryLimit::DEFAULT;
    let outcome = summarize_company_news(&query, &client, &generator, limit).await;

    match outcome {
        NewsOutcome::FetchFailed { company, error } => {
            assert_eq!(company, "Tesla");
            assert!(error.starts_with("news request failed"), "got {}", error);
        }
        other => panic!("expected fetch failure, got {:?}", other),
    }
    assert_eq!(generator.calls(), 0);
}
