//! Route handlers for the phonebook API.
//!
//! Validation lives here, not in the store: name/number presence and the
//! create-time uniqueness rule are handler concerns, while id syntax is the
//! store's. Failures convert into `ApiError` and flow out through the error
//! translator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::json;

use crate::domain::{Contact, ContactPayload};
use crate::http::error::ApiError;
use crate::http::server::AppState;

pub async fn greeting() -> Html<&'static str> {
    Html("<h1>Phonebook</h1>")
}

/// Collection count plus the server time at the moment of the request.
pub async fn info(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let count = state.store.count().await?;
    let now = chrono::Local::now().to_rfc2822();
    Ok(Html(format!(
        "<p>Phonebook has info for {count} people</p>\n<p>{now}</p>"
    )))
}

pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    Ok(Json(state.store.find_all().await?))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    match state.store.find_by_id(&id).await? {
        Some(contact) => Ok(Json(contact)),
        None => Err(ApiError::NotFound),
    }
}

/// Validation order is part of the contract: name presence, then name
/// uniqueness, then number presence. A body missing both fields reports the
/// missing name.
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError> {
    let name = payload
        .name()
        .ok_or_else(|| ApiError::Validation("name missing".into()))?;

    let taken = state
        .store
        .find_all()
        .await?
        .iter()
        .any(|c| c.name.to_lowercase() == name.to_lowercase());
    if taken {
        return Err(ApiError::Validation("name must be unique".into()));
    }

    let number = payload
        .number()
        .ok_or_else(|| ApiError::Validation("number missing".into()))?;

    let contact = state.store.insert(name, number).await?;
    Ok(Json(contact))
}

/// Replace name and number in place; the id never changes. Uniqueness is
/// deliberately not re-checked on update.
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError> {
    let name = payload
        .name()
        .ok_or_else(|| ApiError::Validation("name missing".into()))?;
    let number = payload
        .number()
        .ok_or_else(|| ApiError::Validation("number missing".into()))?;

    match state.store.replace(&id, name, number).await? {
        Some(contact) => Ok(Json(contact)),
        None => Err(ApiError::NotFound),
    }
}

/// Always answers 204, whether or not the contact existed.
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.remove_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
