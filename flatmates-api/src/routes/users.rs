use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use flatmates_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::{ProfileForm, User};
use crate::store::UpdateSummary;
use crate::AppState;

// --- GET /user ---

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserIdQuery>,
) -> AppResult<Json<User>> {
    let user = state.store.users().find_by_id(&query.user_id).await?;
    Ok(Json(user))
}

// --- GET /users ---

#[derive(Debug, Deserialize)]
pub struct UserIdsQuery {
    #[serde(rename = "userIds")]
    pub user_ids: String,
}

/// The `userIds` query parameter arrives as a JSON array string.
fn parse_user_ids(raw: &str) -> Result<Vec<String>, AppError> {
    let ids: Vec<String> = serde_json::from_str(raw)
        .map_err(|_| AppError::bad_request("userIds must be a JSON array of user ids"))?;
    if ids.is_empty() {
        return Err(AppError::bad_request("userIds must not be empty"));
    }
    Ok(ids)
}

pub async fn get_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UserIdsQuery>,
) -> AppResult<Json<Vec<User>>> {
    let ids = parse_user_ids(&query.user_ids)?;
    let users = state.store.users().find_by_ids(&ids).await?;
    Ok(Json(users))
}

// --- GET /gendered-users ---

#[derive(Debug, Deserialize)]
pub struct GenderQuery {
    pub gender: String,
}

pub async fn gendered_users(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenderQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.store.users().find_by_gender(&query.gender).await?;
    Ok(Json(users))
}

// --- PUT /user ---

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(rename = "formData")]
    pub form_data: ProfileForm,
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<Json<UpdateSummary>> {
    if req.form_data.user_id.is_empty() {
        return Err(AppError::new(
            ErrorCode::ValidationError,
            "formData must carry a user_id",
        ));
    }
    let summary = state.store.users().replace_profile(&req.form_data).await?;
    Ok(Json(summary))
}

// --- PUT /addmatch ---

#[derive(Debug, Deserialize)]
pub struct AddMatchRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "matchedUserId")]
    pub matched_user_id: String,
}

pub async fn add_match(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddMatchRequest>,
) -> AppResult<Json<UpdateSummary>> {
    let summary = state
        .store
        .users()
        .append_match(&req.user_id, &req.matched_user_id)
        .await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_id_array_parses() {
        let ids = parse_user_ids(r#"["a","b"]"#).unwrap();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn malformed_json_is_a_bad_request() {
        assert!(parse_user_ids("not json").is_err());
    }

    #[test]
    fn non_array_input_is_a_bad_request() {
        assert!(parse_user_ids(r#"{"userIds": []}"#).is_err());
        assert!(parse_user_ids(r#""just-one-id""#).is_err());
    }

    #[test]
    fn empty_array_is_a_bad_request() {
        assert!(parse_user_ids("[]").is_err());
    }
}
