use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::{Value, json};

use crate::contact::ContactForm;
use crate::error::AppError;
use crate::state::SharedState;

pub async fn submit(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    // Decoded regardless of Content-Type; an unparseable body is an opaque 500.
    let form: ContactForm = serde_json::from_slice(&body)
        .map_err(|e| AppError::Internal(format!("Undecodable contact body: {e}")))?;

    let receipt = state.contacts.submit(form).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Contact form submitted successfully",
        "id": receipt.id,
        "timestamp": receipt.timestamp,
    })))
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Value>, AppError> {
    let contacts = state.contacts.list().await?;
    let total = contacts.len();

    Ok(Json(json!({
        "success": true,
        "contacts": contacts,
        "total": total,
    })))
}
