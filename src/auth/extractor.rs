use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::SharedState;

/// Proof that the request passed the configured admin credential check.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

impl FromRequestParts<SharedState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        // A header that is not valid visible ASCII can never match.
        let authorization = match parts.headers.get(AUTHORIZATION) {
            Some(value) => Some(
                value
                    .to_str()
                    .map_err(|_| AppError::Unauthorized("Unauthorized".to_string()))?,
            ),
            None => None,
        };

        state.admin_gate.check(authorization)?;
        Ok(AdminAccess)
    }
}
