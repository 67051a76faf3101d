//! HTTP request handlers for the Router service.
//!
//! Health, action dispatch and the competitions collection, using axum.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router as AxumRouter,
};
use chrono::{DateTime, Utc};
use konkurranse_domain::{
    CompetitionRecord, CompetitionStore, LlmProvider, ManualOverrides, PageFetcher,
};
use konkurranse_extractor::{AnalysisRequest, Extractor, ExtractorError};
use konkurranse_llm::LlmError;
use konkurranse_scraper::FetchError;
use konkurranse_store::StoreError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "Konkurranseguiden AI Backend";

/// Language model chosen at startup
pub type ModelProvider = Box<dyn LlmProvider<Error = LlmError>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Extraction pipeline
    pub extractor: Arc<Extractor<ModelProvider>>,
    /// Page fetcher for URL analysis
    pub fetcher: Arc<dyn PageFetcher<Error = FetchError>>,
    /// Saved competitions
    pub store: Arc<dyn CompetitionStore<Error = StoreError>>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Always "OK" while the process serves requests
    pub status: String,
    /// Service name
    pub service: String,
    /// Whether a language model is configured
    pub ai_enabled: bool,
    /// Server time
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    /// `analyzeText` or `analyze`
    #[serde(default)]
    pub action: String,
    /// Source URL
    pub url: Option<String>,
    /// Competition text (required by `analyzeText`)
    pub text: Option<String>,
    /// Values that win over extracted ones
    #[serde(default)]
    pub manual_overrides: Option<ManualOverrides>,
}

/// Body of `POST /api/competitions/analyze`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCompetitionRequest {
    /// Source URL
    pub url: Option<String>,
    /// Competition text; the page is fetched when absent
    pub text: Option<String>,
    /// Values that win over extracted ones
    #[serde(default)]
    pub manual_overrides: Option<ManualOverrides>,
}

/// Successful analysis
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Always true
    pub success: bool,
    /// The extracted record
    pub competition: CompetitionRecord,
    /// Human-readable outcome, on collection endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Acknowledgement without a payload
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always true
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed request fields
    #[error("{0}")]
    BadRequest(String),
    /// The competition page could not be fetched
    #[error("Could not access the website: {0}")]
    Fetch(#[from] FetchError),
    /// Reading or writing saved competitions failed
    #[error("Storage failure: {0}")]
    Store(#[from] StoreError),
    /// No competition with the requested id
    #[error("Competition {0} not found")]
    NotFound(i64),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch(_) => StatusCode::BAD_GATEWAY,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        if status.is_server_error() {
            error!("{}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<ExtractorError> for AppError {
    fn from(e: ExtractorError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AppState {
    async fn analyze_text(
        &self,
        url: String,
        text: String,
        overrides: Option<ManualOverrides>,
    ) -> Result<CompetitionRecord, AppError> {
        let request =
            AnalysisRequest::new(url, text).with_overrides(overrides.unwrap_or_default());
        let analysis = self.extractor.analyze(request).await?;
        Ok(analysis.record)
    }

    async fn analyze_page(
        &self,
        url: String,
        overrides: Option<ManualOverrides>,
    ) -> Result<CompetitionRecord, AppError> {
        let page = self.fetcher.fetch(&url).await?;
        self.analyze_text(url, page.analysis_text(), overrides).await
    }
}

/// GET /api, /api/health - Health check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "OK".to_string(),
        service: SERVICE_NAME.to_string(),
        ai_enabled: state.extractor.ai_enabled(),
        timestamp: Utc::now(),
    })
}

/// POST /api - Analyze without saving
async fn dispatch_action(
    State(state): State<AppState>,
    payload: Result<Json<ActionRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let url = present(request.url);
    let text = present(request.text);

    let competition = match (request.action.as_str(), url, text) {
        ("analyzeText", Some(url), Some(text)) => {
            info!("Analyzing text for: {}", url);
            state
                .analyze_text(url, text, request.manual_overrides)
                .await?
        }
        ("analyze", Some(url), _) => {
            info!("Analyzing page: {}", url);
            state.analyze_page(url, request.manual_overrides).await?
        }
        _ => {
            return Err(AppError::BadRequest(
                "Missing required parameters".to_string(),
            ))
        }
    };

    Ok(Json(AnalyzeResponse {
        success: true,
        competition,
        message: None,
    }))
}

/// GET /api/competitions - All saved competitions, newest first
async fn list_competitions(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompetitionRecord>>, AppError> {
    Ok(Json(state.store.load_all().await?))
}

/// POST /api/competitions/analyze - Analyze and save
async fn add_competition(
    State(state): State<AppState>,
    payload: Result<Json<AddCompetitionRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    let url = present(request.url)
        .ok_or_else(|| AppError::BadRequest("URL is required".to_string()))?;

    let competition = match present(request.text) {
        Some(text) => state.analyze_text(url, text, request.manual_overrides).await?,
        None => state.analyze_page(url, request.manual_overrides).await?,
    };

    state.store.append(competition.clone()).await?;
    info!("Competition added: {}", competition.title);

    Ok(Json(AnalyzeResponse {
        success: true,
        competition,
        message: Some("Competition analyzed and added".to_string()),
    }))
}

/// DELETE /api/competitions/:id - Delete a saved competition
async fn delete_competition(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(id));
    }

    info!("Competition {} deleted", id);
    Ok(Json(MessageResponse {
        success: true,
        message: "Competition deleted".to_string(),
    }))
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    AxumRouter::new()
        .route("/api", get(health_check).post(dispatch_action))
        .route("/api/health", get(health_check))
        .route("/api/competitions", get(list_competitions))
        .route("/api/competitions/analyze", post(add_competition))
        .route("/api/competitions/:id", delete(delete_competition))
        .layer(cors)
        .with_state(state)
}
