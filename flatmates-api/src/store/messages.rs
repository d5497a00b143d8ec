use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::Collection;
use serde::Serialize;

use flatmates_shared::errors::AppResult;

use crate::models::Message;

/// Reference to a stored message, handed back to the sender.
#[derive(Debug, Serialize)]
pub struct MessageRef {
    #[serde(rename = "insertedId")]
    pub inserted_id: String,
}

/// Append-only log of direct messages in the `messages` collection.
pub struct MessageStore {
    messages: Collection<Message>,
}

impl MessageStore {
    pub(crate) fn new(messages: Collection<Message>) -> Self {
        Self { messages }
    }

    /// Store a message document verbatim. Shape validation (presence of the
    /// directed pair) happens at the gateway before this call.
    pub async fn append(&self, message: Document) -> AppResult<MessageRef> {
        let result = self
            .messages
            .clone_with_type::<Document>()
            .insert_one(&message, None)
            .await?;

        let inserted_id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };

        tracing::debug!(inserted_id = %inserted_id, "message appended");
        Ok(MessageRef { inserted_id })
    }

    /// Fetch messages sent by `user_id` to `corresponding_user_id`.
    ///
    /// The lookup is directed: the reverse leg of a conversation is a
    /// separate query, never merged in here.
    pub async fn between(
        &self,
        user_id: &str,
        corresponding_user_id: &str,
    ) -> AppResult<Vec<Message>> {
        let cursor = self
            .messages
            .find(directed_filter(user_id, corresponding_user_id), None)
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

fn directed_filter(from_user_id: &str, to_user_id: &str) -> Document {
    doc! { "from_userId": from_user_id, "to_userId": to_user_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keys_follow_the_stored_field_names() {
        let filter = directed_filter("a", "b");
        assert_eq!(filter.get_str("from_userId").unwrap(), "a");
        assert_eq!(filter.get_str("to_userId").unwrap(), "b");
        assert_eq!(filter.len(), 2);
    }

    #[test]
    fn reversed_pair_builds_a_different_filter() {
        assert_ne!(directed_filter("a", "b"), directed_filter("b", "a"));
    }
}
