use axum::extract::{Query, State};
use axum::Json;
use mongodb::bson::Document;
use serde::Deserialize;
use std::sync::Arc;

use flatmates_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::Message;
use crate::store::MessageRef;
use crate::AppState;

// --- GET /messages ---

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "correspondingUserId")]
    pub corresponding_user_id: String,
}

/// Returns the directed leg only: messages *from* `userId` *to*
/// `correspondingUserId`. A conversation view issues two queries and merges.
pub async fn get_messages(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MessagesQuery>,
) -> AppResult<Json<Vec<Message>>> {
    let messages = state
        .store
        .messages()
        .between(&query.user_id, &query.corresponding_user_id)
        .await?;
    Ok(Json(messages))
}

// --- POST /message ---

#[derive(Debug, Deserialize)]
pub struct AddMessageRequest {
    pub message: Document,
}

/// Messages are opaque beyond the directed pair; only the pair's presence is
/// checked before the document is stored verbatim.
fn validate_message(message: &Document) -> Result<(), AppError> {
    for field in ["from_userId", "to_userId"] {
        match message.get_str(field) {
            Ok(value) if !value.is_empty() => {}
            _ => {
                return Err(AppError::new(
                    ErrorCode::ValidationError,
                    format!("message must carry a {field} string"),
                ))
            }
        }
    }
    Ok(())
}

pub async fn add_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddMessageRequest>,
) -> AppResult<Json<MessageRef>> {
    validate_message(&req.message)?;
    let inserted = state.store.messages().append(req.message).await?;
    Ok(Json(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn complete_message_passes_validation() {
        let message = doc! { "from_userId": "a", "to_userId": "b", "text": "hi" };
        assert!(validate_message(&message).is_ok());
    }

    #[test]
    fn missing_recipient_is_rejected() {
        let message = doc! { "from_userId": "a", "text": "hi" };
        assert!(validate_message(&message).is_err());
    }

    #[test]
    fn non_string_sender_is_rejected() {
        let message = doc! { "from_userId": 42, "to_userId": "b" };
        assert!(validate_message(&message).is_err());
    }

    #[test]
    fn empty_sender_is_rejected() {
        let message = doc! { "from_userId": "", "to_userId": "b" };
        assert!(validate_message(&message).is_err());
    }
}
