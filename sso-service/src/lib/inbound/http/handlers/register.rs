use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::inbound::validation;

pub async fn register<S: AuthServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<ApiSuccess<RegisterResponseData>, ApiError> {
    let command = validation::register_command(body.email, body.password)?;

    state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|user_id| ApiSuccess::new(StatusCode::CREATED, RegisterResponseData { user_id: user_id.0 }))
}

/// Missing fields deserialize as empty strings so they hit the same checks as gRPC.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseData {
    pub user_id: i64,
}
