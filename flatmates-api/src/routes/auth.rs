use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

use flatmates_shared::errors::{AppError, AppResult, ErrorCode};

use crate::services::token_service;
use crate::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<TokenResponse>)> {
    req.validate()
        .map_err(|e| AppError::new(ErrorCode::ValidationError, e.to_string()))?;
    if req.password.is_empty() {
        return Err(AppError::new(
            ErrorCode::ValidationError,
            "password must not be empty",
        ));
    }

    let user_id = state
        .store
        .users()
        .create_credentials(&req.email, &req.password)
        .await?;

    let token = token_service::issue_token(
        &user_id,
        &state.config.jwt_secret,
        state.config.token_ttl_secs,
    )?;

    tracing::info!(user_id = %user_id, "user signed up");

    Ok((StatusCode::CREATED, Json(TokenResponse { token, user_id })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user_id = state
        .store
        .users()
        .verify_credentials(&req.email, &req.password)
        .await?;

    let token = token_service::issue_token(
        &user_id,
        &state.config.jwt_secret,
        state.config.token_ttl_secs,
    )?;

    tracing::info!(user_id = %user_id, "user logged in");

    Ok(Json(TokenResponse { token, user_id }))
}
