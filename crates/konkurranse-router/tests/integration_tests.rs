//! Integration tests for the Router service

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use konkurranse_domain::{CompetitionRecord, CompetitionStore, PageFetcher, ScrapedPage};
use konkurranse_extractor::{Extractor, ExtractorConfig};
use konkurranse_gatekeeper::Gatekeeper;
use konkurranse_llm::MockProvider;
use konkurranse_router::handlers::{
    create_router, AnalyzeResponse, AppState, ErrorResponse, HealthCheckResponse,
    MessageResponse, ModelProvider,
};
use konkurranse_scraper::FetchError;
use konkurranse_store::MemoryStore;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tower::ServiceExt; // for oneshot

const MODEL_REPLY: &str = r#"{
    "title": "Vinn en elsykkel",
    "prize": "Elsykkel verdt 25 000 kr",
    "organizer": "XXL",
    "category": "sport",
    "type": "gratis"
}"#;

/// Serves canned pages; unknown URLs fail like an unreachable host
struct FakeFetcher;

#[async_trait]
impl PageFetcher for FakeFetcher {
    type Error = FetchError;

    async fn fetch(&self, url: &str) -> Result<ScrapedPage, Self::Error> {
        if url.contains("ikea") {
            Ok(ScrapedPage {
                url: url.to_string(),
                title: "Vinn gavekort hos Ikea".to_string(),
                content: "Premie: Gavekort på 5000 kr. Svar innen 30 dager.".to_string(),
            })
        } else {
            Err(FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
        }
    }
}

fn create_test_state(model: Option<MockProvider>) -> (AppState, Arc<MemoryStore>) {
    let gatekeeper = Gatekeeper::default_config();
    let extractor = match model {
        Some(model) => {
            let model: ModelProvider = Box::new(model);
            Extractor::new(model, gatekeeper, ExtractorConfig::default())
        }
        None => Extractor::heuristic_only(gatekeeper, ExtractorConfig::default()),
    };
    let store = Arc::new(MemoryStore::new());

    let state = AppState {
        extractor: Arc::new(extractor),
        fetcher: Arc::new(FakeFetcher),
        store: store.clone(),
    };
    (state, store)
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send<T: DeserializeOwned>(app: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (state, _) = create_test_state(None);

    for uri in ["/api", "/api/health"] {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, health): (_, HealthCheckResponse) =
            send(create_router(state.clone()), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(health.status, "OK");
        assert!(!health.ai_enabled);
    }
}

#[tokio::test]
async fn test_health_reports_ai_enabled() {
    let (state, _) = create_test_state(Some(MockProvider::new(MODEL_REPLY)));
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let (_, health): (_, HealthCheckResponse) = send(create_router(state), request).await;
    assert!(health.ai_enabled);
}

#[tokio::test]
async fn test_analyze_text_with_model() {
    let model = MockProvider::new(MODEL_REPLY);
    let (state, store) = create_test_state(Some(model.clone()));

    let request = json_request(
        "POST",
        "/api",
        r#"{"action": "analyzeText", "url": "https://www.xxl.no/konkurranse", "text": "Vinn en elsykkel fra XXL!"}"#,
    );
    let (status, body): (_, AnalyzeResponse) = send(create_router(state), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.success);
    assert!(body.competition.ai_parsed);
    assert_eq!(body.competition.title, "Vinn en elsykkel");
    assert_eq!(body.competition.organizer, "XXL");
    assert_eq!(body.competition.source_url, "https://www.xxl.no/konkurranse");
    assert_eq!(model.call_count(), 1);

    // POST /api never saves
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_text_heuristic_with_overrides() {
    let (state, _) = create_test_state(None);

    let request = json_request(
        "POST",
        "/api",
        r#"{
            "action": "analyzeText",
            "url": "https://www.ikea.com/no",
            "text": "Vinn gavekort hos Ikea",
            "manualOverrides": {"title": "Ikea-trekning", "prize": ""}
        }"#,
    );
    let (status, body): (_, AnalyzeResponse) = send(create_router(state), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.competition.ai_parsed);
    assert_eq!(body.competition.title, "Ikea-trekning");
    assert_eq!(body.competition.organizer, "Ikea");
    assert_eq!(body.competition.image, "🏠");
}

#[tokio::test]
async fn test_analyze_action_fetches_page() {
    let (state, _) = create_test_state(None);

    let request = json_request(
        "POST",
        "/api",
        r#"{"action": "analyze", "url": "https://www.ikea.com/no/konkurranse"}"#,
    );
    let (status, body): (_, AnalyzeResponse) = send(create_router(state), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.competition.title, "Vinn gavekort hos Ikea");
}

#[tokio::test]
async fn test_analyze_action_unreachable_page() {
    let (state, _) = create_test_state(None);

    let request = json_request(
        "POST",
        "/api",
        r#"{"action": "analyze", "url": "https://gone.example/konkurranse"}"#,
    );
    let (status, body): (_, ErrorResponse) = send(create_router(state), request).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.error.contains("404"), "{}", body.error);
}

#[tokio::test]
async fn test_missing_parameters() {
    let (state, _) = create_test_state(None);

    for body in [
        r#"{"action": "analyzeText", "url": "https://example.com"}"#,
        r#"{"action": "analyzeText", "text": "Vinn!"}"#,
        r#"{"action": "analyzeText", "url": "  ", "text": "Vinn!"}"#,
        r#"{"url": "https://example.com", "text": "Vinn!"}"#,
    ] {
        let (status, error): (_, ErrorResponse) =
            send(create_router(state.clone()), json_request("POST", "/api", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(error.error, "Missing required parameters");
    }
}

#[tokio::test]
async fn test_add_list_and_delete_competitions() {
    let (state, _) = create_test_state(None);

    let first = json_request(
        "POST",
        "/api/competitions/analyze",
        r#"{"url": "https://example.com/a", "text": "Vinn en reise til Roma"}"#,
    );
    let (status, added): (_, AnalyzeResponse) = send(create_router(state.clone()), first).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        added.message.as_deref(),
        Some("Competition analyzed and added")
    );

    // Ids are millisecond stamps; keep the two records apart
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let second = json_request(
        "POST",
        "/api/competitions/analyze",
        r#"{"url": "https://www.ikea.com/no"}"#,
    );
    let (status, _): (_, AnalyzeResponse) = send(create_router(state.clone()), second).await;
    assert_eq!(status, StatusCode::OK);

    let list = Request::builder()
        .uri("/api/competitions")
        .body(Body::empty())
        .unwrap();
    let (status, records): (_, Vec<CompetitionRecord>) =
        send(create_router(state.clone()), list).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].source_url, "https://www.ikea.com/no");
    assert_eq!(records[1].id, added.competition.id);

    let uri = format!("/api/competitions/{}", added.competition.id);
    let delete = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, message): (_, MessageResponse) =
        send(create_router(state.clone()), delete).await;
    assert_eq!(status, StatusCode::OK);
    assert!(message.success);

    let again = Request::builder()
        .method("DELETE")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let (status, _): (_, ErrorResponse) = send(create_router(state.clone()), again).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(state.store.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_requires_url() {
    let (state, store) = create_test_state(None);

    let request = json_request(
        "POST",
        "/api/competitions/analyze",
        r#"{"text": "Vinn en reise"}"#,
    );
    let (status, error): (_, ErrorResponse) = send(create_router(state), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error.error, "URL is required");
    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let (state, store) = create_test_state(None);

    for (uri, body) in [
        (
            "/api",
            r#"{"action": "analyzeText", "url": "https://example.com", "text": "Vinn!", "manualOverrides": {"title": 5}}"#,
        ),
        ("/api", r#"{"action": "analyzeText""#),
        (
            "/api/competitions/analyze",
            r#"{"url": "https://example.com", "manualOverrides": {"deadline": true}}"#,
        ),
        ("/api/competitions/analyze", "not json"),
    ] {
        let (status, error): (_, ErrorResponse) =
            send(create_router(state.clone()), json_request("POST", uri, body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", uri, body);
        assert!(!error.error.is_empty(), "{} {}", uri, body);
    }

    assert!(store.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let (state, _) = create_test_state(None);

    let request = Request::builder()
        .method("POST")
        .uri("/api")
        .body(Body::from(r#"{"action": "analyze", "url": "https://www.ikea.com/no"}"#))
        .unwrap();
    let (status, error): (_, ErrorResponse) = send(create_router(state), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error.error.contains("Content-Type"), "{}", error.error);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (state, _) = create_test_state(None);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/competitions")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = create_router(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
