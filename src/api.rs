use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::feed::FeedProvider;
use crate::ingest::types::{Feed, ScamRecord};
use crate::picker::{pick_index_for_date, today_local};

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn FeedProvider>,
}

impl AppState {
    pub fn new(feed: Arc<dyn FeedProvider>) -> Self {
        Self { feed }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(|| async { "OK" }))
        .route("/api/scams", get(list_scams))
        .route("/api/scam-of-day", get(scam_of_day))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no scams available right now")]
    EmptyFeed,

    #[error("{context}: {details:#}")]
    Internal {
        context: &'static str,
        details: anyhow::Error,
    },
}

impl ApiError {
    fn internal(context: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |details| Self::Internal { context, details }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::EmptyFeed => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "error": "No scams available right now. Try again later." })),
            )
                .into_response(),
            ApiError::Internal { context, details } => {
                let details = format!("{details:#}");
                tracing::error!(error = %details, "{context}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": context, "details": details })),
                )
                    .into_response()
            }
        }
    }
}

async fn root() -> &'static str {
    "Scam of the Day API is running. Try /api/scams or /api/scam-of-day."
}

async fn list_scams(State(state): State<AppState>) -> Result<Json<Arc<Feed>>, ApiError> {
    let feed = state
        .feed
        .feed()
        .await
        .map_err(ApiError::internal("Failed to load scams"))?;
    Ok(Json(feed))
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Used verbatim as the picker input; not validated as a calendar date.
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScamOfDay {
    pub date: String,
    pub index: usize,
    pub total: usize,
    pub scam: ScamRecord,
}

async fn scam_of_day(
    State(state): State<AppState>,
    Query(q): Query<DayQuery>,
) -> Result<Json<ScamOfDay>, ApiError> {
    let feed = state
        .feed
        .feed()
        .await
        .map_err(ApiError::internal("Failed to pick the scam of the day"))?;

    let date = q
        .date
        .filter(|d| !d.is_empty())
        .unwrap_or_else(today_local);
    let index = pick_index_for_date(&date, feed.len());
    let scam = feed.scams.get(index).cloned().ok_or(ApiError::EmptyFeed)?;

    Ok(Json(ScamOfDay {
        date,
        index,
        total: feed.len(),
        scam,
    }))
}
