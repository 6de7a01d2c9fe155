use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde::Serialize;
use service::auth::domain::{LoginRequest, RegistrationRequest};
use service::auth::{AuthService, CredentialStore};
use tracing::debug;

use crate::errors::ApiError;
use crate::observability;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService<dyn CredentialStore>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[utoipa::path(post, path = "/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses(
    (status = 201, description = "Registered", body = crate::openapi::MessageResponse),
    (status = 400, description = "Invalid request or payload", body = crate::openapi::ErrorResponse),
    (status = 409, description = "Username taken", body = crate::openapi::ErrorResponse),
    (status = 503, description = "Credential store unavailable", body = crate::openapi::ErrorResponse),
    (status = 500, description = "Internal error", body = crate::openapi::ErrorResponse),
))]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageBody>), ApiError> {
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, "register body rejected");
        ApiError::invalid_request()
    })?;

    let res = state.auth.register(input).await;
    observability::record_register(&res);
    res?;
    Ok((StatusCode::CREATED, Json(MessageBody { message: "user registered successfully" })))
}

#[utoipa::path(post, path = "/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses(
    (status = 200, description = "Credentials verified", body = crate::openapi::MessageResponse),
    (status = 400, description = "Invalid request", body = crate::openapi::ErrorResponse),
    (status = 401, description = "Invalid credentials", body = crate::openapi::ErrorResponse),
    (status = 503, description = "Credential store unavailable", body = crate::openapi::ErrorResponse),
))]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, "login body rejected");
        ApiError::invalid_request()
    })?;

    let res = state.auth.login(input).await;
    observability::record_login(&res);
    res?;
    Ok(Json(MessageBody { message: "user logged in successfully" }))
}
