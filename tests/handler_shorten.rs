mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use url_shortener::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_shorten_new_url() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": "https://example.com/some/page" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<Value>();
    let code = json["shortCode"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
    assert_eq!(json["longUrl"], "https://example.com/some/page");
    assert_eq!(json["shortUrl"], format!("http://localhost:5000/{code}"));
    assert_eq!(json["isNew"], true);
    assert_eq!(json["message"], "URL shortened successfully");

    let stored = repo.find_by_short_code(code).await.unwrap().unwrap();
    assert_eq!(stored.clicks, 0);
}

#[tokio::test]
async fn test_shorten_same_url_twice_is_idempotent() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let first = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;
    first.assert_status(StatusCode::CREATED);

    let second = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": "https://example.com/a" }))
        .await;
    second.assert_status_ok();

    let first = first.json::<Value>();
    let second = second.json::<Value>();
    assert_eq!(first["shortCode"], second["shortCode"]);
    assert_eq!(second["isNew"], false);
    assert_eq!(second["message"], "URL was already shortened");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_shorten_adds_scheme_and_canonicalizes() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let bare = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": "  Example.COM  " }))
        .await;
    bare.assert_status(StatusCode::CREATED);
    let bare = bare.json::<Value>();
    assert_eq!(bare["longUrl"], "https://example.com/");

    let explicit = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;
    explicit.assert_status_ok();
    assert_eq!(explicit.json::<Value>()["shortCode"], bare["shortCode"]);
}

#[tokio::test]
async fn test_shorten_missing_url() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server.post("/api/url/shorten").json(&json!({})).await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_shorten_rejects_invalid_urls() {
    let (state, repo) = common::create_test_state();
    let server = common::create_test_server(state);

    for bad in [
        "",
        "   ",
        "not a url",
        "localhost",
        "ftp://example.com/file",
        "https://bad_host.com",
        "https://example.com.",
    ] {
        let response = server
            .post("/api/url/shorten")
            .json(&json!({ "longUrl": bad }))
            .await;

        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "expected 400 for {bad:?}"
        );
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_shorten_rejects_too_long_url() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let long_url = format!("https://example.com/{}", "a".repeat(2100));
    let response = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": long_url }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_shorten_malformed_body() {
    let (state, _repo) = common::create_test_state();
    let server = common::create_test_server(state);

    let response = server
        .post("/api/url/shorten")
        .text("{not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test]
async fn test_shorten_store_unavailable() {
    let server = common::create_test_server(common::create_unavailable_state());

    let response = server
        .post("/api/url/shorten")
        .json(&json!({ "longUrl": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "store_unavailable"
    );
}
