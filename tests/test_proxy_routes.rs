//! End-to-end tests for the proxy routes: axum router in front of a
//! mockito upstream, exercising the read-through cache behavior.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use munchies_proxy::client::{AsyncMunchiesClient, AsyncMunchiesClientImpl};
use munchies_proxy::{create_router, AppState, Config, MunchiesClient};
use tower::ServiceExt;

const RESTAURANTS_BODY: &str = r#"{
    "restaurants": [{
        "id": "rest-1",
        "name": "Burgers & Co",
        "rating": 4.6,
        "filter_ids": ["filter-1"],
        "image_url": "/images/burgers.png",
        "delivery_time_minutes": 25,
        "price_range_id": "price-2"
    }]
}"#;

const FILTERS_BODY: &str = r#"{
    "filters": [{"id": "filter-1", "name": "Hamburgers", "image_url": "/images/burger.png"}]
}"#;

fn test_app(upstream_url: &str, restaurants_ttl_secs: u64) -> (Router, Arc<AppState>) {
    let config = Config {
        api_base_url: upstream_url.to_string(),
        restaurants_cache_ttl_secs: restaurants_ttl_secs,
        ..Config::default()
    };

    let sync_client = MunchiesClient::with_base_url(upstream_url.to_string());
    let metrics = sync_client.metrics().clone();
    let client =
        Arc::new(AsyncMunchiesClientImpl::new(sync_client)) as Arc<dyn AsyncMunchiesClient>;

    let state = Arc::new(AppState::new(config, client, metrics));
    (create_router(state.clone()), state)
}

async fn get(app: Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn cache_header(response: &axum::response::Response) -> String {
    response
        .headers()
        .get("x-cache")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_restaurants_miss_then_hit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/restaurants")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESTAURANTS_BODY)
        .expect(1)
        .create_async()
        .await;

    let (app, _state) = test_app(&server.url(), 300);

    let first = get(app.clone(), "/api/restaurants").await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(cache_header(&first), "MISS");
    let body = body_json(first).await;
    assert_eq!(body["restaurants"][0]["name"], "Burgers & Co");

    let second = get(app, "/api/restaurants").await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(cache_header(&second), "HIT");
    let body = body_json(second).await;
    assert_eq!(body["restaurants"][0]["id"], "rest-1");

    // Only one upstream call for both requests
    mock.assert_async().await;
}

#[tokio::test]
async fn test_filters_miss_then_hit() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/filter")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(FILTERS_BODY)
        .expect(1)
        .create_async()
        .await;

    let (app, _state) = test_app(&server.url(), 300);

    let first = get(app.clone(), "/api/filters").await;
    assert_eq!(cache_header(&first), "MISS");

    let second = get(app, "/api/filters").await;
    assert_eq!(cache_header(&second), "HIT");
    let body = body_json(second).await;
    assert_eq!(body["filters"][0]["name"], "Hamburgers");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_expired_entry_refetches_upstream() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/restaurants")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESTAURANTS_BODY)
        .expect(2)
        .create_async()
        .await;

    // Zero TTL: every cached entry is already stale on the next lookup
    let (app, state) = test_app(&server.url(), 0);

    let first = get(app.clone(), "/api/restaurants").await;
    assert_eq!(cache_header(&first), "MISS");

    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let second = get(app, "/api/restaurants").await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(cache_header(&second), "MISS");

    mock.assert_async().await;
    // The expired read evicted the old entry before the re-insert
    assert_eq!(state.cache.len(), 1);
}

#[tokio::test]
async fn test_restaurants_upstream_failure_returns_fixed_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/restaurants")
        .with_status(500)
        .with_body("boom")
        .expect(2)
        .create_async()
        .await;

    let (app, state) = test_app(&server.url(), 300);

    let first = get(app.clone(), "/api/restaurants").await;
    assert_eq!(first.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(first).await;
    assert_eq!(body["error"], "Failed to fetch restaurants");

    // Failure did not populate the cache, so the next request goes
    // upstream again instead of serving a hit
    assert!(state.cache.is_empty());

    let second = get(app, "/api/restaurants").await;
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_filters_upstream_failure_returns_fixed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/filter")
        .with_status(502)
        .with_body("bad gateway")
        .create_async()
        .await;

    let (app, _state) = test_app(&server.url(), 300);

    let response = get(app, "/api/filters").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to fetch filters");
}

#[tokio::test]
async fn test_metrics_reflect_hits_and_misses() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/restaurants")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESTAURANTS_BODY)
        .create_async()
        .await;

    let (app, _state) = test_app(&server.url(), 300);

    let _miss = get(app.clone(), "/api/restaurants").await;
    let _hit = get(app.clone(), "/api/restaurants").await;

    let response = get(app, "/metrics").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["cache_misses_total"], 1);
    assert_eq!(body["cache_hits_total"], 1);
    assert_eq!(body["upstream_requests_total"], 1);
    assert_eq!(body["restaurants_fetched_total"], 1);
}

#[tokio::test]
async fn test_cleanup_endpoint_reports_counts() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/restaurants")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RESTAURANTS_BODY)
        .create_async()
        .await;

    let (app, state) = test_app(&server.url(), 300);

    let _populate = get(app.clone(), "/api/restaurants").await;
    assert_eq!(state.cache.len(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/cache/cleanup")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // Entry is still fresh by the cache default TTL, so nothing to reap
    assert_eq!(body["removed"], 0);
    assert_eq!(body["size"], 1);
}
