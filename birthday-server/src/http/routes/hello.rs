//! Birthday endpoints
//!
//! PUT stores a date of birth, GET greets the user with the days left until
//! their next birthday.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::greeting::greeting;
use crate::http::error::ApiError;
use crate::http::extractors::ValidUsername;
use crate::http::server::AppState;
use crate::models::{Birthdate, ValidationError};

/// PUT request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutBirthdateRequest {
    /// Missing or null is treated as an empty date
    pub date_of_birth: Option<String>,
}

/// GET response body
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Decode a PUT body, accepting only a top-level JSON object.
///
/// Derived struct deserializers also take arrays, so the shape is checked on a
/// `Value` first. Duplicate keys keep the last value.
fn decode_request(body: &[u8]) -> Result<PutBirthdateRequest, ValidationError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ValidationError::InvalidJson)?;
    if !value.is_object() {
        return Err(ValidationError::InvalidJson);
    }

    serde_json::from_value(value).map_err(|_| ValidationError::InvalidJson)
}

/// PUT /hello/{username} - save or replace the user's date of birth
///
/// The username is validated before the body is read.
async fn put_birthdate(
    State(state): State<Arc<AppState>>,
    ValidUsername(username): ValidUsername,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let req = decode_request(&body)?;

    let raw = req.date_of_birth.as_deref().unwrap_or_default();
    let birthdate = Birthdate::parse(raw, state.clock.now())?;

    state.store.upsert(&username, birthdate).await?;
    tracing::debug!(%username, birthdate = %birthdate.date(), "Birthdate saved");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /hello/{username} - greet a stored user
async fn get_greeting(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<GreetingResponse>, ApiError> {
    let birthdate = state.store.lookup(&username).await?;
    let message = greeting(&username, birthdate, state.clock.now());

    Ok(Json(GreetingResponse { message }))
}

/// Hello routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/hello/{username}", get(get_greeting).put(put_birthdate))
}
