use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use super::AppState;
use super::errors::ApiError;
use crate::domain::{Contact, ContactDraft, ContactUpdate, ExportFormat, Statistics};
use crate::errors::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `?q=` searches; a missing or blank query lists everything.
async fn list_contacts(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let manager = state.lock()?;
    let query = params.q.unwrap_or_default();
    let query = query.trim();

    let contacts = if query.is_empty() {
        manager.list_contacts()
    } else {
        manager.search_contacts(query)
    };

    Ok(Json(contacts.into_iter().cloned().collect()))
}

async fn create_contact(
    State(state): State<AppState>,
    Json(draft): Json<ContactDraft>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let contact = state.lock()?.add_contact(draft)?;
    info!(id = contact.id, "contact created");
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Contact>, ApiError> {
    state
        .lock()?
        .get_contact(id)
        .cloned()
        .map(Json)
        .ok_or_else(ApiError::not_found)
}

async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(update): Json<ContactUpdate>,
) -> Result<Json<Contact>, ApiError> {
    let updated = state.lock()?.update_contact(id, update)?;
    match updated {
        Some(contact) => {
            info!(id, "contact updated");
            Ok(Json(contact))
        }
        None => Err(ApiError::not_found()),
    }
}

async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.lock()?.delete_contact(id)? {
        info!(id, "contact deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found())
    }
}

async fn stats(State(state): State<AppState>) -> Result<Json<Statistics>, ApiError> {
    Ok(Json(state.lock()?.get_stats()))
}

/// Writes the export into the export directory and sends it back as a download.
async fn export(
    State(state): State<AppState>,
    Path(fmt): Path<String>,
) -> Result<Response, ApiError> {
    let format: ExportFormat = fmt.parse()?;

    let path = {
        let manager = state.lock()?;
        manager.export_to_file(format.extension(), &state.export_dir)?
    };

    let body = tokio::fs::read(&path).await.map_err(AppError::from)?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("contacts_export");
    let content_type = match format {
        ExportFormat::Json => "application/json",
        ExportFormat::Csv => "text/csv; charset=utf-8",
    };

    info!(%format, path = %path.display(), "contacts exported");
    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/contacts", get(list_contacts).post(create_contact))
        .route(
            "/contacts/:id",
            get(get_contact)
                .put(update_contact)
                .patch(update_contact)
                .delete(delete_contact),
        )
        .route("/stats", get(stats))
        .route("/export/:fmt", get(export))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
