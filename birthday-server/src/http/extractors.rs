//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{Username, ValidationError};

/// Extract and validate a username from path
pub struct ValidUsername(pub Username);

impl<S> FromRequestParts<S> for ValidUsername
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::InvalidUsername))?;

        let username = Username::new(&name)?;
        Ok(Self(username))
    }
}
