use std::time::Duration;
use ct_core::{NewsReport, Settings, NO_RESULTS_MESSAGE};
use ct_news::NewsLookup;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings(server: &MockServer) -> Settings {
    Settings::new(Some("news-key".to_string()), Some("model-key".to_string()))
        .unwrap()
        .with_news_base_url(server.uri())
        .with_request_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn sudan_three_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "Sudan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "totalResults": 3,
            "articles": [
                { "source": { "name": "Reuters" }, "title": "RSF advances on El Fasher", "url": "https://r.example/a", "publishedAt": "2024-06-01T12:00:00Z" },
                { "source": { "name": "BBC News" }, "title": "Famine warning issued", "url": "https://b.example/b", "publishedAt": "2024-05-31T08:30:00Z" },
                { "source": { "name": "AP" }, "title": "Peace talks stall in Jeddah", "url": "https://a.example/c", "publishedAt": "2024-05-30T19:45:10Z" }
            ]
        })))
        .mount(&server)
        .await;

    let lookup = NewsLookup::from_settings(&settings(&server)).unwrap();
    let report = lookup.fetch("Sudan").await.unwrap();

    let digest = match &report {
        NewsReport::Digest(digest) => digest,
        NewsReport::NoResults => panic!("expected a digest"),
    };
    assert_eq!(digest.len(), 3);

    let text = report.to_string();
    assert!(text.starts_with("🔍 **SUDAN Conflict Report**"));
    let bullets: Vec<&str> = text.lines().filter(|l| l.starts_with("- **")).collect();
    assert_eq!(bullets.len(), 3);
    assert!(text.contains("- **RSF advances on El Fasher**\n  (Reuters, 2024-06-01)\n  [Read more](https://r.example/a)"));
    assert!(text.contains("(BBC News, 2024-05-31)"));
    assert!(text.contains("[Read more](https://a.example/c)"));
}

#[tokio::test]
async fn atlantis_no_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "Atlantis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "articles": [] })))
        .mount(&server)
        .await;

    let lookup = NewsLookup::from_settings(&settings(&server)).unwrap();
    let report = lookup.fetch("Atlantis").await.unwrap();

    assert!(report.is_no_results());
    assert_eq!(report.to_string(), NO_RESULTS_MESSAGE);
}

#[tokio::test]
async fn server_error_is_reported_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let lookup = NewsLookup::from_settings(&settings(&server)).unwrap();
    let err = lookup.fetch("Kashmir").await.unwrap_err();
    assert!(matches!(err, ct_core::Error::Retrieval(_)));
    assert!(err.user_message().starts_with("⚠️ Could not fetch news"));
}
