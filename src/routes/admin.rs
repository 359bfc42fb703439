use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::auth::AdminAccess;
use crate::error::AppError;
use crate::state::SharedState;

/// Same payload as `GET /contact`, behind the admin credential check.
pub async fn list_contacts(
    _access: AdminAccess,
    state: State<SharedState>,
) -> Result<Json<Value>, AppError> {
    super::contact::list(state).await
}
