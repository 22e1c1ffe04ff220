use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    middleware::from_fn,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use summary_core::CompletionBackend;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::CompletionLimits,
    error::ApiError,
    middleware::correlation_id_middleware,
    models::{
        ChatRequest, ChatResponse, ExplainTermRequest, ExplainTermResponse, SummarizeRequest,
        SummarizeResponse, timestamp,
    },
    tasks::{chat_about_records, explain_term, summarize_records},
};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn CompletionBackend>,
    pub limits: CompletionLimits,
}

impl AppState {
    pub fn new(backend: Arc<dyn CompletionBackend>, limits: CompletionLimits) -> Self {
        Self { backend, limits }
    }
}

pub fn create_app(app_state: AppState) -> Router {
    build_router(app_state)
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health_check))
        .route("/api/summarize", post(summarize))
        .route("/api/chat", post(chat))
        .route("/api/explain-term", post(explain))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(correlation_id_middleware))
        .with_state(app_state)
}

async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "Medical Summary Service",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "LLM-generated medical record summaries, Q&A and term explanations for doctors and patients",
        "endpoints": {
            "POST /api/summarize": "Summarize medical text as JSON for a doctor or patient view",
            "POST /api/chat": "Ask a question about medical text, with prior chat history",
            "POST /api/explain-term": "Explain a medical term in plain language",
            "GET /api/health": "Health check"
        },
        "completion": state.limits
    }))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": timestamp()
    }))
}

async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> ApiResult<SummarizeResponse> {
    let Json(request) = payload?;
    let (summary, view_type) = summarize_records(&*state.backend, &state.limits, request).await?;

    Ok(Json(SummarizeResponse {
        summary,
        view_type,
        timestamp: timestamp(),
    }))
}

async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<ChatResponse> {
    let Json(request) = payload?;
    let response = chat_about_records(&*state.backend, &state.limits, request).await?;

    Ok(Json(ChatResponse {
        response,
        timestamp: timestamp(),
    }))
}

async fn explain(
    State(state): State<AppState>,
    payload: Result<Json<ExplainTermRequest>, JsonRejection>,
) -> ApiResult<ExplainTermResponse> {
    let Json(request) = payload?;
    let (term, explanation) = explain_term(&*state.backend, &state.limits, request).await?;

    Ok(Json(ExplainTermResponse {
        explanation,
        term,
        timestamp: timestamp(),
    }))
}
