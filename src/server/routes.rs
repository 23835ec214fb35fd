//! HTTP route handlers for the conversation query API.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::store::{group_by_sender, unique_senders, SenderGroup, StoreError};

use super::state::AppState;

/// Format of the `last_updated` stamp carried by every successful response.
const LAST_UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Create the API router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/conversations", get(list_conversations))
        .route("/conversations/phone/{phone}", get(conversations_by_phone))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "memoline",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Response for the full conversation listing.
#[derive(Debug, Serialize)]
pub struct ConversationsResponse {
    /// Distinct senders, in the order their conversations appear.
    pub unique_senders: Vec<String>,
    /// Conversations grouped per sender.
    pub conversations: Vec<SenderGroup>,
    /// Server-local time the response was produced.
    pub last_updated: String,
}

/// Response for a single sender's conversation listing.
#[derive(Debug, Serialize)]
pub struct SenderConversationsResponse {
    /// Conversations grouped per sender.
    pub conversations: Vec<SenderGroup>,
    /// Server-local time the response was produced.
    pub last_updated: String,
}

/// Error payload returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub detail: String,
}

/// Return every stored conversation, grouped by sender.
async fn list_conversations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ConversationsResponse>, (StatusCode, Json<ErrorBody>)> {
    let rows = state.store.fetch(None).await.map_err(error_response)?;

    let conversations = group_by_sender(rows);
    let unique_senders = unique_senders(&conversations);

    Ok(Json(ConversationsResponse {
        unique_senders,
        conversations,
        last_updated: last_updated(),
    }))
}

/// Return the conversations of a single sender.
async fn conversations_by_phone(
    State(state): State<Arc<AppState>>,
    Path(phone): Path<String>,
) -> Result<Json<SenderConversationsResponse>, (StatusCode, Json<ErrorBody>)> {
    let rows = state
        .store
        .fetch(Some(&phone))
        .await
        .map_err(error_response)?;

    Ok(Json(SenderConversationsResponse {
        conversations: group_by_sender(rows),
        last_updated: last_updated(),
    }))
}

/// Map a store failure onto an HTTP status and error payload.
///
/// Empty results surface as 404 with the store's own message; everything
/// else is a 500 wrapped in a generic fetch-failure message.
fn error_response(err: StoreError) -> (StatusCode, Json<ErrorBody>) {
    if err.is_not_found() {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                detail: err.to_string(),
            }),
        )
    } else {
        tracing::error!("conversation query failed: {err}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: format!("Error fetching conversations: {err}"),
            }),
        )
    }
}

/// Current server-local time in the response stamp format.
fn last_updated() -> String {
    chrono::Local::now().format(LAST_UPDATED_FORMAT).to_string()
}
