mod common;

use common::{make_articles, FakeNewsSource, ScriptedGenerator};
use finance_assistant::pipeline::{
    fetch_company_news, run_news_pipeline, ArticleSummary, CompanyQuery, NewsFetch, NewsOutcome,
    SummaryLimit, ValidationError, UNAVAILABLE_SUMMARY,
};

// --- input validation ---

#[tokio::test]
async fn blank_company_never_reaches_news_source() {
    let news = FakeNewsSource::with_articles(make_articles(3));
    let generator = ScriptedGenerator::echo();

    for input in ["", " ", "\t", "  \n  "] {
        let outcome = run_news_pipeline(input, &news, &generator, SummaryLimit::DEFAULT).await;
        assert_eq!(
            outcome,
            NewsOutcome::Invalid(ValidationError::EmptyCompanyName)
        );
    }
    assert_eq!(news.calls(), 0);
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn company_name_is_searched_trimmed() {
    let news = FakeNewsSource::with_articles(make_articles(1));
    let generator = ScriptedGenerator::echo();

    run_news_pipeline("  Tesla  ", &news, &generator, SummaryLimit::DEFAULT).await;
    assert_eq!(news.keywords(), vec!["Tesla".to_string()]);
}

// --- fetch outcomes ---

#[tokio::test]
async fn empty_article_list_is_no_results() {
    let news = FakeNewsSource::with_articles(Vec::new());
    let query = CompanyQuery::parse("Nobody Inc").unwrap();

    let fetch = fetch_company_news(&news, &query).await.unwrap();
    assert_eq!(fetch, NewsFetch::NoResults);
}

#[tokio::test]
async fn no_results_is_not_a_failure() {
    let news = FakeNewsSource::with_articles(Vec::new());
    let generator = ScriptedGenerator::echo();

    let outcome = run_news_pipeline("Nobody Inc", &news, &generator, SummaryLimit::DEFAULT).await;
    assert_eq!(
        outcome,
        NewsOutcome::NoResults {
            company: "Nobody Inc".to_string()
        }
    );
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn non_success_status_is_fetch_failure_without_summaries() {
    let news = FakeNewsSource::failing(401);
    let generator = ScriptedGenerator::echo();

    let outcome = run_news_pipeline("Tesla", &news, &generator, SummaryLimit::DEFAULT).await;
    match outcome {
        NewsOutcome::FetchFailed { company, error } => {
            assert_eq!(company, "Tesla");
            assert!(error.contains("401"));
        }
        other => panic!("expected fetch failure, got {:?}", other),
    }
    assert_eq!(news.calls(), 1);
    assert_eq!(generator.calls(), 0);
}

// --- summarization through the pipeline ---

#[tokio::test]
async fn tesla_with_seven_articles_yields_five_ordered_summaries() {
    let articles = make_articles(7);
    let news = FakeNewsSource::with_articles(articles.clone());
    let generator = ScriptedGenerator::echo();

    let outcome = run_news_pipeline("Tesla", &news, &generator, SummaryLimit::DEFAULT).await;
    let NewsOutcome::Summarized(digest) = outcome else {
        panic!("expected summaries");
    };

    assert_eq!(digest.company, "Tesla");
    assert_eq!(digest.total_found, 7);
    assert_eq!(digest.items.len(), 5);
    assert!(digest.truncated());
    for (i, item) in digest.items.iter().enumerate() {
        assert_eq!(item.article, articles[i]);
        assert_eq!(
            item.summary,
            ArticleSummary::Generated(format!("Summary of Article {}", i + 1))
        );
    }
    assert_eq!(generator.calls(), 5);
}

#[tokio::test]
async fn one_failed_summary_keeps_the_rest() {
    let news = FakeNewsSource::with_articles(make_articles(4));
    let generator = ScriptedGenerator::failing_on(&[2]);

    let outcome = run_news_pipeline("Apple", &news, &generator, SummaryLimit::DEFAULT).await;
    let NewsOutcome::Summarized(digest) = outcome else {
        panic!("expected summaries");
    };

    let texts: Vec<&str> = digest.items.iter().map(|i| i.summary.text()).collect();
    assert_eq!(
        texts,
        vec![
            "Summary of Article 1",
            "Summary of Article 2",
            UNAVAILABLE_SUMMARY,
            "Summary of Article 4",
        ]
    );
    assert!(!digest.truncated());
}

#[tokio::test]
async fn custom_limit_is_respected() {
    let news = FakeNewsSource::with_articles(make_articles(7));
    let generator = ScriptedGenerator::echo();

    let outcome = run_news_pipeline("Microsoft", &news, &generator, SummaryLimit::new(2)).await;
    let NewsOutcome::Summarized(digest) = outcome else {
        panic!("expected summaries");
    };
    assert_eq!(digest.items.len(), 2);
    assert_eq!(generator.calls(), 2);
}
