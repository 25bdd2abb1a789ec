mod common;

use axum::http::StatusCode;
use serde_json::Value;
use url_shortener::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_redirect_is_permanent_and_counts_click() {
    let (state, repo) = common::create_test_state();
    common::seed_records(&repo, 1).await;
    let server = common::create_test_server(state);

    let response = server.get("/c00001").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/page/1");

    let record = repo.find_by_short_code("c00001").await.unwrap().unwrap();
    assert_eq!(record.clicks, 1);
}

#[tokio::test]
async fn test_redirect_counts_every_visit() {
    let (state, repo) = common::create_test_state();
    common::seed_records(&repo, 1).await;
    let server = common::create_test_server(state);

    for _ in 0..3 {
        server
            .get("/c00001")
            .await
            .assert_status(StatusCode::MOVED_PERMANENTLY);
    }

    let record = repo.find_by_short_code("c00001").await.unwrap().unwrap();
    assert_eq!(record.clicks, 3);
}

#[tokio::test]
async fn test_redirect_unknown_code() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "zzzzzz");
}

#[tokio::test]
async fn test_redirect_malformed_code() {
    let (state, repo) = common::create_test_state();
    common::seed_records(&repo, 1).await;
    let server = common::create_test_server(state);

    for bad in ["/abc", "/C00001", "/c0000!", "/c000011"] {
        let response = server.get(bad).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{bad}");
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }

    let record = repo.find_by_short_code("c00001").await.unwrap().unwrap();
    assert_eq!(record.clicks, 0);
}

#[tokio::test]
async fn test_shorten_then_redirect() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let created = server
        .post("/api/url/shorten")
        .json(&serde_json::json!({ "longUrl": "example.org/docs?q=1" }))
        .await
        .json::<Value>();
    let code = created["shortCode"].as_str().unwrap();

    let response = server.get(&format!("/{code}")).await;
    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.org/docs?q=1");
}
